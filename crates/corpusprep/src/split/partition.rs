//! # Partitioning

use rand::Rng;

use crate::{corpus::Corpus, errors::PrepResult, split::SplitOptions};

/// One side of a train/validation split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Partition {
    /// Documents to train on.
    Train,

    /// Held out documents.
    Validation,
}

/// A split of corpus indices into two disjoint partitions.
///
/// Each partition holds indices in ascending (corpus) order; together they
/// cover every index of the corpus exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusSplit {
    train: Vec<usize>,
    validation: Vec<usize>,
}

impl CorpusSplit {
    /// The train indices.
    pub fn train(&self) -> &[usize] {
        &self.train
    }

    /// The validation indices.
    pub fn validation(&self) -> &[usize] {
        &self.validation
    }

    /// The indices of one partition.
    pub fn indices(
        &self,
        partition: Partition,
    ) -> &[usize] {
        match partition {
            Partition::Train => &self.train,
            Partition::Validation => &self.validation,
        }
    }

    /// The total number of indices, across both partitions.
    pub fn len(&self) -> usize {
        self.train.len() + self.validation.len()
    }

    /// Is the split empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split the indices `0..len`.
///
/// Exactly [`SplitOptions::validation_count`] indices are drawn without
/// replacement for validation; the rest are train. Assignment depends only
/// on `len` and `rng`, never on document content.
pub fn split_indices<R>(
    len: usize,
    options: &SplitOptions,
    rng: &mut R,
) -> PrepResult<CorpusSplit>
where
    R: Rng + ?Sized,
{
    let count = options.validation_count(len)?;

    let mut held_out = vec![false; len];
    for index in rand::seq::index::sample(rng, len, count) {
        held_out[index] = true;
    }

    let (validation, train): (Vec<usize>, Vec<usize>) =
        (0..len).partition(|&index| held_out[index]);
    Ok(CorpusSplit { train, validation })
}

/// Split a corpus, using the rng described by `options`.
pub fn split_corpus<C>(
    corpus: &C,
    options: &SplitOptions,
) -> PrepResult<CorpusSplit>
where
    C: Corpus + ?Sized,
{
    let mut rng = options.build_rng();
    let split = split_indices(corpus.len(), options, &mut rng)?;
    log::debug!(
        "split {} documents: {} train, {} validation",
        split.len(),
        split.train.len(),
        split.validation.len()
    );
    Ok(split)
}
