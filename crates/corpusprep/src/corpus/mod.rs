//! # Corpora
//!
//! A [`Corpus`] is an ordered, read-only, indexable collection of documents.
//! Both pipeline stages consume a corpus through this trait, and never
//! mutate it.
//!
//! Local files are loaded through [`CorpusSource`]:
//!
//! ```rust,no_run
//! use corpusprep::corpus::{Corpus, CorpusSource};
//!
//! fn example() -> corpusprep::errors::PrepResult<()> {
//!     let corpus = CorpusSource::new(["~/data/openwebtext.jsonl"]).load()?;
//!     println!("{} documents", corpus.len());
//!     Ok(())
//! }
//! ```

mod document;
mod loaders;
#[cfg(feature = "parquet")]
mod parquet_texts;
mod raw_corpus;
mod source;

#[doc(inline)]
pub use document::{Corpus, CorpusTexts, Document, MemoryCorpus};
#[doc(inline)]
pub use loaders::{read_jsonl, read_text_lines};
#[cfg(feature = "parquet")]
#[doc(inline)]
pub use parquet_texts::read_parquet_texts;
#[doc(inline)]
pub use raw_corpus::RawCorpus;
#[doc(inline)]
pub use source::{CorpusFormat, CorpusSource, DEFAULT_TEXT_FIELD, LoadedCorpus};
