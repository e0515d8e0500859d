//! # Preparation Pipeline
//!
//! Runs both stages over one loaded corpus:
//! 1. the split is computed (so a bad holdout fraction, or an empty
//!    corpus, fails before anything is written),
//! 2. the character vocabulary is extracted and written,
//! 3. the train and validation partitions are written.
//!
//! Failures are tagged with the [`Stage`] that raised them. The three
//! output paths must name three different files; this is checked before
//! the split is computed.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    corpus::{Corpus, CorpusSource},
    errors::{CorpusPrepError, IoPathContext, PrepResult, Stage},
    io::{ensure_distinct_destinations, expand_path, resolve_destination},
    progress::ProgressReporter,
    split::{SplitOptions, save_split, split_corpus},
    vocab::extract_and_save_char_vocab,
};

/// The default vocabulary artifact path.
pub const DEFAULT_VOCAB_PATH: &str = "character_vocab.txt";

/// The default train artifact path.
pub const DEFAULT_TRAIN_PATH: &str = "train.txt";

/// The default validation artifact path.
pub const DEFAULT_VAL_PATH: &str = "val.txt";

/// Options for [`prepare_corpus`].
///
/// Deserializable from JSON; missing fields take their defaults, and the
/// [`SplitOptions`] fields sit at the top level:
/// ```json
/// {
///   "vocab_path": "~/out/character_vocab.txt",
///   "train_path": "~/out/train.txt",
///   "val_path": "~/out/val.txt",
///   "holdout_fraction": 0.1,
///   "random_seed": 42
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareOptions {
    /// Where to write the character vocabulary.
    pub vocab_path: String,

    /// Where to write the train partition.
    pub train_path: String,

    /// Where to write the validation partition.
    pub val_path: String,

    /// How to split the corpus.
    #[serde(flatten)]
    pub split: SplitOptions,

    /// Extract the vocabulary in parallel (needs the ``rayon`` feature).
    pub parallel: bool,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            vocab_path: DEFAULT_VOCAB_PATH.to_string(),
            train_path: DEFAULT_TRAIN_PATH.to_string(),
            val_path: DEFAULT_VAL_PATH.to_string(),
            split: SplitOptions::default(),
            parallel: true,
        }
    }
}

impl PrepareOptions {
    /// Read options from a JSON file.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> PrepResult<Self> {
        let path = path.as_ref();
        let data = fs::read(path).with_path(path)?;
        serde_json::from_slice(&data)
            .map_err(|e| CorpusPrepError::Config(format!("{}: {e}", path.display())))
    }

    /// Set the vocabulary path.
    pub fn with_vocab_path<S: Into<String>>(
        self,
        vocab_path: S,
    ) -> Self {
        Self {
            vocab_path: vocab_path.into(),
            ..self
        }
    }

    /// Set the train path.
    pub fn with_train_path<S: Into<String>>(
        self,
        train_path: S,
    ) -> Self {
        Self {
            train_path: train_path.into(),
            ..self
        }
    }

    /// Set the validation path.
    pub fn with_val_path<S: Into<String>>(
        self,
        val_path: S,
    ) -> Self {
        Self {
            val_path: val_path.into(),
            ..self
        }
    }

    /// Set the split options.
    pub fn with_split(
        self,
        split: SplitOptions,
    ) -> Self {
        Self { split, ..self }
    }

    /// Enable or disable parallel vocabulary extraction.
    pub fn with_parallel(
        self,
        parallel: bool,
    ) -> Self {
        Self { parallel, ..self }
    }
}

/// What a preparation run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepareReport {
    /// The number of distinct characters.
    pub vocab_size: usize,

    /// The number of train documents.
    pub train_documents: usize,

    /// The number of validation documents.
    pub validation_documents: usize,
}

/// Extract the vocabulary of `corpus` and split it, writing all three artifacts.
pub fn prepare_corpus<C>(
    corpus: &C,
    options: &PrepareOptions,
    progress: &dyn ProgressReporter,
) -> PrepResult<PrepareReport>
where
    C: Corpus + Sync + ?Sized,
{
    let vocab_path =
        expand_path(&options.vocab_path).map_err(|e| e.in_stage(Stage::Vocabulary))?;
    let (train_path, val_path) = expand_path(&options.train_path)
        .and_then(|train| Ok((train, expand_path(&options.val_path)?)))
        .map_err(|e| e.in_stage(Stage::Split))?;

    resolve_destination(&vocab_path).map_err(|e| e.in_stage(Stage::Vocabulary))?;
    ensure_distinct_destinations(&[
        ("vocabulary", vocab_path.as_path()),
        ("train", train_path.as_path()),
        ("validation", val_path.as_path()),
    ])
    .map_err(|e| e.in_stage(Stage::Split))?;

    let split = split_corpus(corpus, &options.split).map_err(|e| e.in_stage(Stage::Split))?;

    log::info!("extracting vocabulary from {} documents", corpus.len());
    let vocab = extract_and_save_char_vocab(corpus, &vocab_path, options.parallel, progress)
        .map_err(|e| e.in_stage(Stage::Vocabulary))?;

    log::info!(
        "writing {} train and {} validation documents",
        split.train().len(),
        split.validation().len()
    );
    save_split(corpus, &split, &train_path, &val_path, progress)
        .map_err(|e| e.in_stage(Stage::Split))?;

    Ok(PrepareReport {
        vocab_size: vocab.len(),
        train_documents: split.train().len(),
        validation_documents: split.validation().len(),
    })
}

/// Load `source`, then [`prepare_corpus`] it.
pub fn prepare_source(
    source: &CorpusSource,
    options: &PrepareOptions,
    progress: &dyn ProgressReporter,
) -> PrepResult<PrepareReport> {
    let corpus = source.load().map_err(|e| e.in_stage(Stage::Load))?;
    prepare_corpus(&corpus, options, progress)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;
    use crate::{corpus::MemoryCorpus, progress::NoProgress};

    fn options_in(dir: &Path) -> PrepareOptions {
        let path = |name: &str| dir.join(name).to_string_lossy().to_string();
        PrepareOptions::default()
            .with_vocab_path(path(DEFAULT_VOCAB_PATH))
            .with_train_path(path(DEFAULT_TRAIN_PATH))
            .with_val_path(path(DEFAULT_VAL_PATH))
            .with_split(SplitOptions::default().with_seed(Some(42)))
    }

    #[test]
    fn test_options_json() {
        let options: PrepareOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, PrepareOptions::default());
        assert!(options.parallel);

        let options: PrepareOptions = serde_json::from_str(
            r#"{"val_path": "held_out.txt", "holdout_fraction": 0.25, "random_seed": 7, "parallel": false}"#,
        )
        .unwrap();
        assert_eq!(options.vocab_path, DEFAULT_VOCAB_PATH);
        assert_eq!(options.val_path, "held_out.txt");
        assert_eq!(options.split.holdout_fraction, 0.25);
        assert_eq!(options.split.random_seed, Some(7));
        assert!(!options.parallel);
    }

    #[test]
    fn test_from_json_path() {
        let tmpdir = TempDir::new("corpusprep-pipeline").unwrap();
        let path = tmpdir.path().join("prepare.json");

        fs::write(&path, r#"{"train_path": "t.txt"}"#).unwrap();
        let options = PrepareOptions::from_json_path(&path).unwrap();
        assert_eq!(options.train_path, "t.txt");

        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            PrepareOptions::from_json_path(&path),
            Err(CorpusPrepError::Config(_))
        ));

        assert!(matches!(
            PrepareOptions::from_json_path(tmpdir.path().join("missing.json")),
            Err(CorpusPrepError::Io { .. })
        ));
    }

    #[test]
    fn test_prepare_corpus() {
        let tmpdir = TempDir::new("corpusprep-pipeline").unwrap();
        let corpus: MemoryCorpus = [
            "abc", "bca", "xyz", "", "a", "bbb", "ccc", "zzz", "qqq", "www",
        ]
        .into_iter()
        .collect();

        let report = prepare_corpus(&corpus, &options_in(tmpdir.path()), &NoProgress).unwrap();
        assert_eq!(
            report,
            PrepareReport {
                vocab_size: 8,
                train_documents: 9,
                validation_documents: 1,
            }
        );
        assert_eq!(
            fs::read_to_string(tmpdir.path().join(DEFAULT_VOCAB_PATH)).unwrap(),
            "a\nb\nc\nq\nw\nx\ny\nz\n"
        );
    }

    #[test]
    fn test_empty_corpus_fails_before_writing() {
        let tmpdir = TempDir::new("corpusprep-pipeline").unwrap();

        let err = prepare_corpus(&MemoryCorpus::new(), &options_in(tmpdir.path()), &NoProgress)
            .unwrap_err();
        assert!(matches!(
            err,
            CorpusPrepError::Stage {
                stage: Stage::Split,
                ..
            }
        ));
        assert!(matches!(err.root(), CorpusPrepError::Partition(_)));
        assert_eq!(fs::read_dir(tmpdir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_shared_output_paths_rejected() {
        let tmpdir = TempDir::new("corpusprep-pipeline").unwrap();
        fs::create_dir(tmpdir.path().join("sub")).unwrap();
        let corpus: MemoryCorpus = ["abc", "bca", "xyz"].into_iter().collect();
        let out = tmpdir.path().join("out.txt");
        let aliased = tmpdir.path().join("sub/../out.txt");

        let base = options_in(tmpdir.path());
        for options in [
            base.clone()
                .with_vocab_path(out.to_string_lossy())
                .with_train_path(out.to_string_lossy()),
            base.clone()
                .with_vocab_path(out.to_string_lossy())
                .with_val_path(aliased.to_string_lossy()),
        ] {
            let err = prepare_corpus(&corpus, &options, &NoProgress).unwrap_err();
            assert!(matches!(err.root(), CorpusPrepError::Config(_)));
        }
        assert_eq!(fs::read_dir(tmpdir.path()).unwrap().count(), 1);
        assert!(!out.exists());
    }

    #[test]
    fn test_load_failure_is_tagged() {
        let tmpdir = TempDir::new("corpusprep-pipeline").unwrap();
        let source = CorpusSource::new([tmpdir.path().join("missing.txt").to_string_lossy()]);

        let err = prepare_source(&source, &options_in(tmpdir.path()), &NoProgress).unwrap_err();
        assert!(matches!(
            err,
            CorpusPrepError::Stage {
                stage: Stage::Load,
                ..
            }
        ));
    }
}
