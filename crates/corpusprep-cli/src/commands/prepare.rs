use corpusprep::pipeline::{PrepareOptions, prepare_source};

use crate::{
    LogArgs,
    commands::split::SplitControlArgs,
    corpus_args::CorpusArgs,
    progress_bar::ProgressArgs,
};

/// Args for the prepare command.
#[derive(clap::Args, Debug)]
pub struct PrepareArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    progress: ProgressArgs,

    /// JSON options file; flags override its fields.
    #[arg(long, default_value = None)]
    config: Option<String>,

    /// Vocabulary output file [default: character_vocab.txt].
    #[arg(long)]
    vocab_path: Option<String>,

    /// Train partition output file [default: train.txt].
    #[arg(long)]
    train_path: Option<String>,

    /// Validation partition output file [default: val.txt].
    #[arg(long)]
    val_path: Option<String>,

    #[command(flatten)]
    split: SplitControlArgs,

    /// Extract the vocabulary sequentially.
    #[arg(long)]
    no_parallel: bool,
}

impl PrepareArgs {
    /// The config file options, overridden by any flags given.
    fn options(&self) -> Result<PrepareOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => {
                log::info!("config: {path}");
                PrepareOptions::from_json_path(corpusprep::io::expand_path(path)?)?
            }
            None => PrepareOptions::default(),
        };

        if let Some(path) = &self.vocab_path {
            options = options.with_vocab_path(path);
        }
        if let Some(path) = &self.train_path {
            options = options.with_train_path(path);
        }
        if let Some(path) = &self.val_path {
            options = options.with_val_path(path);
        }
        let split = self.split.apply(options.split);
        options = options.with_split(split);
        if self.no_parallel {
            options = options.with_parallel(false);
        }

        Ok(options)
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let options = self.options()?;
        log::debug!("{options:?}");

        let report = prepare_source(&self.corpus.source(), &options, &self.progress.reporter())?;

        log::info!("Vocabulary Size: {}", report.vocab_size);
        log::info!(
            "Split: {} train, {} validation",
            report.train_documents,
            report.validation_documents
        );
        log::info!("vocab: {}", options.vocab_path);
        log::info!("train: {}", options.train_path);
        log::info!("val: {}", options.val_path);

        Ok(())
    }
}
