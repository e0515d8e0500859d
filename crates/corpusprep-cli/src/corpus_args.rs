use corpusprep::{
    corpus::{CorpusFormat, CorpusSource, DEFAULT_TEXT_FIELD, LoadedCorpus},
    encoding::TextEncoding,
    errors::{PrepResult, Stage},
};

/// Corpus input arg group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Input files; concatenated in order.
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Input format (text, jsonl, parquet); guessed from each file extension when unset.
    #[arg(long, default_value = None)]
    pub format: Option<CorpusFormat>,

    /// Text encoding (utf-8, latin-1).
    #[arg(long, default_value = "utf-8")]
    pub encoding: TextEncoding,

    /// The JSON field / parquet column holding document text.
    #[arg(long, default_value = DEFAULT_TEXT_FIELD)]
    pub text_field: String,
}

impl CorpusArgs {
    /// The configured corpus source.
    pub fn source(&self) -> CorpusSource {
        CorpusSource::new(self.files.iter().cloned())
            .with_format(self.format)
            .with_encoding(self.encoding)
            .with_text_field(self.text_field.clone())
    }

    /// Load the corpus.
    pub fn load(&self) -> PrepResult<LoadedCorpus> {
        log::info!("Reading corpus:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
        }
        self.source().load().map_err(|e| e.in_stage(Stage::Load))
    }
}
