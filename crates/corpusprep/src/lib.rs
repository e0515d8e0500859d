//! # `corpusprep` Corpus Preparation
//!
//! This crate turns a raw text corpus into the artifacts a character-level
//! language model trains on:
//! * a character vocabulary (every distinct character, one per line);
//! * a train partition and a held-out validation partition, one document per line.
//!
//! See:
//! * [`corpus`] to load corpora and access documents.
//! * [`vocab`] to extract, save, and load character vocabularies.
//! * [`split`] to partition a corpus and write the partitions.
//! * [`pipeline`] to run both stages with one set of options.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``parquet``
//! * ``rayon``
//!
//! #### feature: ``parquet``
//!
//! This enables loading corpora from parquet shards, through ``arrow``.
//!
//! #### feature: ``rayon``
//!
//! This enables data-parallel vocabulary extraction using the ``rayon`` crate.
//!
//! ## Preparing a Corpus
//!
//! ```rust,no_run
//! use corpusprep::{
//!     corpus::CorpusSource,
//!     pipeline::{PrepareOptions, prepare_source},
//!     progress::LogProgress,
//!     split::SplitOptions,
//! };
//!
//! fn example() -> corpusprep::errors::PrepResult<()> {
//!     let source = CorpusSource::new(["~/data/shard_00000.parquet"]);
//!     let options = PrepareOptions::default()
//!         .with_split(SplitOptions::default().with_seed(Some(42)));
//!
//!     let report = prepare_source(&source, &options, &LogProgress::default())?;
//!     println!("{report:?}");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod encoding;
pub mod errors;
pub mod io;
pub mod pipeline;
pub mod progress;
pub mod split;
pub mod vocab;
