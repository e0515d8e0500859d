//! # Corpus Sources
//!
//! Loads local corpus files into a [`LoadedCorpus`].

use std::{borrow::Cow, fs::File, io::BufReader, path::Path};

use crate::{
    corpus::{
        Corpus,
        MemoryCorpus,
        RawCorpus,
        loaders::{load_error, read_jsonl, read_text_lines},
    },
    encoding::TextEncoding,
    errors::PrepResult,
    io::expand_path,
};

/// The default name of the document text field/column.
pub const DEFAULT_TEXT_FIELD: &str = "text";

/// Corpus file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CorpusFormat {
    /// One document per line.
    Text,

    /// One JSON object per line.
    Jsonl,

    /// Parquet shards with a string column.
    Parquet,
}

impl CorpusFormat {
    /// Guess the format from a file extension; anything unrecognized is [`CorpusFormat::Text`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("jsonl") | Some("ndjson") => CorpusFormat::Jsonl,
            Some("parquet") => CorpusFormat::Parquet,
            _ => CorpusFormat::Text,
        }
    }
}

/// A corpus loaded by [`CorpusSource::load`].
///
/// Plain text inputs stay as undecoded bytes; any structured input
/// forces the whole corpus into decoded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedCorpus {
    /// Undecoded line documents.
    Raw(RawCorpus),

    /// Decoded documents.
    Memory(MemoryCorpus),
}

impl Corpus for LoadedCorpus {
    fn len(&self) -> usize {
        match self {
            LoadedCorpus::Raw(corpus) => corpus.len(),
            LoadedCorpus::Memory(corpus) => corpus.len(),
        }
    }

    fn text(
        &self,
        index: usize,
    ) -> PrepResult<Cow<'_, str>> {
        match self {
            LoadedCorpus::Raw(corpus) => corpus.text(index),
            LoadedCorpus::Memory(corpus) => corpus.text(index),
        }
    }
}

/// A set of local corpus files, and how to read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSource {
    /// Input paths; shell-expanded before use.
    pub paths: Vec<String>,

    /// The file format; when `None`, guessed per file from its extension.
    pub format: Option<CorpusFormat>,

    /// The encoding of document bytes.
    pub encoding: TextEncoding,

    /// The JSON field / parquet column holding document text.
    pub text_field: String,
}

impl CorpusSource {
    /// Create a new source over `paths`.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            format: None,
            encoding: TextEncoding::default(),
            text_field: DEFAULT_TEXT_FIELD.to_string(),
        }
    }

    /// Set the file format.
    pub fn with_format(
        self,
        format: Option<CorpusFormat>,
    ) -> Self {
        Self { format, ..self }
    }

    /// Set the text encoding.
    pub fn with_encoding(
        self,
        encoding: TextEncoding,
    ) -> Self {
        Self { encoding, ..self }
    }

    /// Set the text field / column name.
    pub fn with_text_field<S: Into<String>>(
        self,
        text_field: S,
    ) -> Self {
        Self {
            text_field: text_field.into(),
            ..self
        }
    }

    /// Load every path, concatenated in order.
    pub fn load(&self) -> PrepResult<LoadedCorpus> {
        let mut raw = RawCorpus::new(self.encoding);
        let mut decoded: Option<MemoryCorpus> = None;

        for path in &self.paths {
            let path = expand_path(path)?;
            let format = self
                .format
                .unwrap_or_else(|| CorpusFormat::from_path(&path));
            let source_name = path.display().to_string();

            let count = if format == CorpusFormat::Text && decoded.is_none() {
                read_text_lines(open_reader(&path, &source_name)?, &mut raw, &source_name)?
            } else {
                let memory = match decoded.take() {
                    Some(memory) => memory,
                    None => {
                        let raw = std::mem::replace(&mut raw, RawCorpus::new(self.encoding));
                        let mut memory = MemoryCorpus::with_capacity(raw.len());
                        raw.decode_into(&mut memory)?;
                        memory
                    }
                };
                self.read_decoded(format, &path, &source_name, decoded.insert(memory))?
            };

            log::info!("loaded {count} documents from {source_name} ({format})");
        }

        Ok(match decoded {
            Some(memory) => LoadedCorpus::Memory(memory),
            None => LoadedCorpus::Raw(raw),
        })
    }

    fn read_decoded(
        &self,
        format: CorpusFormat,
        path: &Path,
        source_name: &str,
        memory: &mut MemoryCorpus,
    ) -> PrepResult<usize> {
        match format {
            CorpusFormat::Text => {
                let mut lines = RawCorpus::new(self.encoding);
                let count = read_text_lines(open_reader(path, source_name)?, &mut lines, source_name)?;
                lines.decode_into(memory)?;
                Ok(count)
            }
            CorpusFormat::Jsonl => read_jsonl(
                open_reader(path, source_name)?,
                &self.text_field,
                self.encoding,
                memory,
                source_name,
            ),
            CorpusFormat::Parquet => self.read_parquet(path, memory),
        }
    }

    #[cfg(feature = "parquet")]
    fn read_parquet(
        &self,
        path: &Path,
        corpus: &mut MemoryCorpus,
    ) -> PrepResult<usize> {
        crate::corpus::parquet_texts::read_parquet_texts(path, &self.text_field, corpus)
    }

    #[cfg(not(feature = "parquet"))]
    fn read_parquet(
        &self,
        path: &Path,
        _corpus: &mut MemoryCorpus,
    ) -> PrepResult<usize> {
        Err(crate::errors::CorpusPrepError::Config(format!(
            "{}: corpusprep was built without the \"parquet\" feature",
            path.display()
        )))
    }
}

fn open_reader(
    path: &Path,
    source_name: &str,
) -> PrepResult<BufReader<File>> {
    if path.is_dir() {
        return Err(load_error(source_name, "is a directory"));
    }
    let file = File::open(path).map_err(|e| load_error(source_name, e))?;
    Ok(BufReader::new(file))
}
