use crate::commands::{prepare::PrepareArgs, split::SplitArgs, vocab::VocabArgs};

pub mod prepare;
pub mod split;
pub mod vocab;

/// Subcommands for corpusprep
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Extract the character vocabulary of a corpus.
    Vocab(VocabArgs),

    /// Split a corpus into train and validation partitions.
    Split(SplitArgs),

    /// Extract the vocabulary and split the corpus, in one run.
    Prepare(PrepareArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Split(cmd) => cmd.run(),
            Commands::Prepare(cmd) => cmd.run(),
        }
    }
}
