use std::io::{BufWriter, Write};

use corpusprep::{
    corpus::Corpus,
    errors::Stage,
    io::expand_path,
    pipeline::DEFAULT_VOCAB_PATH,
    vocab::{extract_and_save_char_vocab, extract_char_vocab_with, write_char_vocab},
};

use crate::{LogArgs, corpus_args::CorpusArgs, progress_bar::ProgressArgs};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    progress: ProgressArgs,

    /// Output file; "-" may be used to indicate stdout.
    #[arg(long, default_value = DEFAULT_VOCAB_PATH)]
    output: String,

    /// Extract sequentially.
    #[arg(long)]
    no_parallel: bool,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let corpus = self.corpus.load()?;
        let progress = self.progress.reporter();
        let parallel = !self.no_parallel;

        log::info!("Extracting vocabulary from {} documents...", corpus.len());
        if self.output == "-" {
            let vocab = extract_char_vocab_with(&corpus, parallel, &progress)
                .map_err(|e| e.in_stage(Stage::Vocabulary))?;
            log::info!("Vocabulary Size: {}", vocab.len());

            let mut writer = BufWriter::new(std::io::stdout().lock());
            write_char_vocab(&vocab, &mut writer)?;
            writer.flush()?;
        } else {
            let path = expand_path(&self.output)?;
            extract_and_save_char_vocab(&corpus, &path, parallel, &progress)
                .map_err(|e| e.in_stage(Stage::Vocabulary))?;
        }

        Ok(())
    }
}
