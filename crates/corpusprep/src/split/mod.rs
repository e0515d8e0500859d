//! # Train/Validation Splitting
//!
//! A corpus is split by index: a fixed number of documents (the holdout
//! fraction of the corpus, rounded up) is drawn at random for validation,
//! and every other document is train. Both partitions keep corpus order.
//!
//! ```rust,no_run
//! use corpusprep::{
//!     corpus::CorpusSource,
//!     progress::NoProgress,
//!     split::{SplitOptions, split_and_save},
//! };
//!
//! fn example() -> corpusprep::errors::PrepResult<()> {
//!     let corpus = CorpusSource::new(["corpus.txt"]).load()?;
//!     let options = SplitOptions::default().with_seed(Some(42));
//!     split_and_save(&corpus, &options, "train.txt", "val.txt", &NoProgress)?;
//!     Ok(())
//! }
//! ```

mod options;
mod partition;
mod writer;

#[doc(inline)]
pub use options::{DEFAULT_HOLDOUT_FRACTION, SplitOptions};
#[doc(inline)]
pub use partition::{CorpusSplit, Partition, split_corpus, split_indices};
#[doc(inline)]
pub use writer::{PartitionWriter, save_split, split_and_save};
