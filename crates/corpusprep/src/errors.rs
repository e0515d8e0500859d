//! # Error Types

use std::path::{Path, PathBuf};

use crate::encoding::TextEncoding;

/// The pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Stage {
    /// Loading the corpus.
    Load,

    /// Extracting the character vocabulary.
    Vocabulary,

    /// Splitting and writing the train/validation partitions.
    Split,
}

/// Errors from corpusprep operations.
#[derive(Debug, thiserror::Error)]
pub enum CorpusPrepError {
    /// The corpus could not be loaded, or is corrupt.
    #[error("failed to load corpus from {source_name}: {message}")]
    Load {
        /// The file or provider being loaded.
        source_name: String,
        /// What went wrong.
        message: String,
    },

    /// A document is not valid character data under the configured encoding.
    #[error("document {index} is not valid {encoding} text: {message}")]
    Decode {
        /// The index of the offending document.
        index: usize,
        /// The configured encoding.
        encoding: TextEncoding,
        /// The decoder's complaint.
        message: String,
    },

    /// A read or write against a path failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The path being read or written.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The corpus can't be partitioned as requested.
    #[error("invalid partition: {0}")]
    Partition(String),

    /// A document index past the end of the corpus.
    #[error("document index {index} out of range for a corpus of {len} documents")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The corpus length.
        len: usize,
    },

    /// Bad configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed artifact contents.
    #[error("parse error: {0}")]
    Parse(String),

    /// An error tagged with the pipeline stage that raised it.
    #[error("{stage} stage failed: {source}")]
    Stage {
        /// The failing stage.
        stage: Stage,
        /// The underlying error.
        source: Box<CorpusPrepError>,
    },
}

impl CorpusPrepError {
    /// Tag this error with the stage it was raised in.
    ///
    /// Errors which are already tagged are returned unchanged.
    pub fn in_stage(
        self,
        stage: Stage,
    ) -> Self {
        match self {
            err @ CorpusPrepError::Stage { .. } => err,
            err => CorpusPrepError::Stage {
                stage,
                source: Box::new(err),
            },
        }
    }

    /// The innermost (untagged) error.
    pub fn root(&self) -> &CorpusPrepError {
        match self {
            CorpusPrepError::Stage { source, .. } => source.root(),
            err => err,
        }
    }
}

/// Result type for corpusprep operations.
pub type PrepResult<T> = core::result::Result<T, CorpusPrepError>;

/// Attach a path to [`std::io::Error`] results.
pub trait IoPathContext<T> {
    /// Convert to a [`PrepResult`], naming `path` on failure.
    fn with_path<P: AsRef<Path>>(
        self,
        path: P,
    ) -> PrepResult<T>;
}

impl<T> IoPathContext<T> for std::io::Result<T> {
    fn with_path<P: AsRef<Path>>(
        self,
        path: P,
    ) -> PrepResult<T> {
        self.map_err(|source| CorpusPrepError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}
