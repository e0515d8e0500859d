mod commands;
mod corpus_args;
mod logging;
mod progress_bar;

use clap::Parser;
use commands::Commands;
pub use logging::LogArgs;

/// corpusprep: character vocabularies and train/validation splits for text corpora.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_commands() {
        let args = Args::parse_from(["corpusprep", "vocab", "a.txt", "b.jsonl", "--output", "-"]);
        assert!(matches!(args.command, Commands::Vocab(_)));

        let args = Args::parse_from([
            "corpusprep",
            "split",
            "a.txt",
            "--holdout-fraction",
            "0.2",
            "--seed",
            "42",
            "--progress",
        ]);
        assert!(matches!(args.command, Commands::Split(_)));

        assert!(Args::try_parse_from(["corpusprep", "split"]).is_err());
        assert!(Args::try_parse_from(["corpusprep", "vocab", "a.txt", "--encoding", "ebcdic"]).is_err());
        assert!(Args::try_parse_from(["corpusprep", "vocab", "a.txt", "--format", "csv"]).is_err());
    }
}
