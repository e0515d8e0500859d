use corpusprep::{
    errors::Stage,
    io::expand_path,
    pipeline::{DEFAULT_TRAIN_PATH, DEFAULT_VAL_PATH},
    split::{SplitOptions, split_and_save},
};

use crate::{LogArgs, corpus_args::CorpusArgs, progress_bar::ProgressArgs};

/// Split control arg group.
#[derive(clap::Args, Debug)]
pub struct SplitControlArgs {
    /// Fraction of documents held out for validation, in (0, 1) [default: 0.1].
    #[arg(long)]
    pub holdout_fraction: Option<f64>,

    /// Random seed; seeded from the OS when unset.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SplitControlArgs {
    /// Override `options` with any flags given.
    pub fn apply(
        &self,
        mut options: SplitOptions,
    ) -> SplitOptions {
        if let Some(fraction) = self.holdout_fraction {
            options = options.with_holdout_fraction(fraction);
        }
        if self.seed.is_some() {
            options = options.with_seed(self.seed);
        }
        options
    }
}

/// Args for the split command.
#[derive(clap::Args, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    progress: ProgressArgs,

    #[command(flatten)]
    split: SplitControlArgs,

    /// Train partition output file.
    #[arg(long, default_value = DEFAULT_TRAIN_PATH)]
    train_path: String,

    /// Validation partition output file.
    #[arg(long, default_value = DEFAULT_VAL_PATH)]
    val_path: String,
}

impl SplitArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let options = self.split.apply(SplitOptions::default());
        options.validate()?;

        let train_path = expand_path(&self.train_path)?;
        let val_path = expand_path(&self.val_path)?;

        let corpus = self.corpus.load()?;
        let progress = self.progress.reporter();

        let split = split_and_save(&corpus, &options, &train_path, &val_path, &progress)
            .map_err(|e| e.in_stage(Stage::Split))?;
        log::info!(
            "Split: {} train, {} validation",
            split.train().len(),
            split.validation().len()
        );

        Ok(())
    }
}
