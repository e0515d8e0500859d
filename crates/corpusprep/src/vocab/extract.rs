//! # Vocabulary Extraction

use std::path::Path;

use crate::{
    corpus::Corpus,
    errors::PrepResult,
    progress::ProgressReporter,
    vocab::{CharVocab, CharVocabCounter, save_char_vocab_path},
};

const EXTRACT_LABEL: &str = "Collecting characters";

/// Collect the distinct characters of every document, in a single pass.
pub fn extract_char_vocab<C>(
    corpus: &C,
    progress: &dyn ProgressReporter,
) -> PrepResult<CharVocab>
where
    C: Corpus + ?Sized,
{
    progress.begin(EXTRACT_LABEL, corpus.len() as u64);

    let mut counter = CharVocabCounter::new();
    for text in corpus.texts() {
        counter.update_from_text(text?);
        progress.advance(1);
    }

    progress.finish();
    Ok(counter.release())
}

/// Collect the distinct characters of every document, using ``rayon``.
///
/// Each worker folds its own [`CharVocabCounter`]; the partial counters
/// are merged at the end. The result is identical to [`extract_char_vocab`].
#[cfg(feature = "rayon")]
pub fn par_extract_char_vocab<C>(
    corpus: &C,
    progress: &dyn ProgressReporter,
) -> PrepResult<CharVocab>
where
    C: Corpus + Sync + ?Sized,
{
    use rayon::prelude::*;

    progress.begin(EXTRACT_LABEL, corpus.len() as u64);

    let counter = (0..corpus.len())
        .into_par_iter()
        .try_fold(CharVocabCounter::new, |mut counter, index| {
            counter.update_from_text(corpus.text(index)?);
            progress.advance(1);
            PrepResult::Ok(counter)
        })
        .try_reduce(CharVocabCounter::new, |mut left, right| {
            left.merge(right);
            Ok(left)
        })?;

    progress.finish();
    Ok(counter.release())
}

/// Extract the vocabulary of `corpus` and save it to `path`.
///
/// When `parallel` is set and the ``rayon`` feature is enabled, extraction
/// fans out over the ``rayon`` pool.
pub fn extract_and_save_char_vocab<C, P>(
    corpus: &C,
    path: P,
    parallel: bool,
    progress: &dyn ProgressReporter,
) -> PrepResult<CharVocab>
where
    C: Corpus + Sync + ?Sized,
    P: AsRef<Path>,
{
    let vocab = extract_char_vocab_with(corpus, parallel, progress)?;
    log::info!("vocabulary size: {}", vocab.len());

    save_char_vocab_path(&vocab, &path)?;
    log::info!("vocabulary written to: {}", path.as_ref().display());

    Ok(vocab)
}

/// Dispatch to the parallel or sequential extractor.
pub fn extract_char_vocab_with<C>(
    corpus: &C,
    parallel: bool,
    progress: &dyn ProgressReporter,
) -> PrepResult<CharVocab>
where
    C: Corpus + Sync + ?Sized,
{
    #[cfg(feature = "rayon")]
    if parallel {
        return par_extract_char_vocab(corpus, progress);
    }

    #[cfg(not(feature = "rayon"))]
    if parallel {
        log::debug!("built without \"rayon\"; extracting sequentially");
    }

    extract_char_vocab(corpus, progress)
}
