//! # Character Vocabulary
//!
//! The vocabulary is the set of distinct characters (code points) found
//! anywhere in a corpus.
//!
//! ```rust,no_run
//! use corpusprep::{
//!     corpus::CorpusSource,
//!     progress::NoProgress,
//!     vocab::extract_and_save_char_vocab,
//! };
//!
//! fn example() -> corpusprep::errors::PrepResult<()> {
//!     let corpus = CorpusSource::new(["corpus.txt"]).load()?;
//!     let vocab = extract_and_save_char_vocab(&corpus, "character_vocab.txt", true, &NoProgress)?;
//!     println!("{} characters", vocab.len());
//!     Ok(())
//! }
//! ```

mod char_vocab;
mod extract;
mod vocab_io;

#[doc(inline)]
pub use char_vocab::{CharVocab, CharVocabCounter};
#[cfg(feature = "rayon")]
#[doc(inline)]
pub use extract::par_extract_char_vocab;
#[doc(inline)]
pub use extract::{extract_and_save_char_vocab, extract_char_vocab, extract_char_vocab_with};
#[doc(inline)]
pub use vocab_io::{load_char_vocab_path, parse_char_vocab, save_char_vocab_path, write_char_vocab};
