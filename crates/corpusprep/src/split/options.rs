//! # Split Options

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::errors::{CorpusPrepError, PrepResult};

/// The default fraction of documents held out for validation.
pub const DEFAULT_HOLDOUT_FRACTION: f64 = 0.1;

/// Slack when rounding `fraction * len` up, so `0.3 * 10` holds out 3, not 4.
const COUNT_TOLERANCE: f64 = 1e-9;

/// Options for partitioning a corpus into train and validation sets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// The fraction of documents held out for validation; in `(0, 1)`.
    pub holdout_fraction: f64,

    /// Seed for the split; `None` seeds from the OS.
    pub random_seed: Option<u64>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            holdout_fraction: DEFAULT_HOLDOUT_FRACTION,
            random_seed: None,
        }
    }
}

impl SplitOptions {
    /// Set the holdout fraction.
    pub fn with_holdout_fraction(
        self,
        holdout_fraction: f64,
    ) -> Self {
        Self {
            holdout_fraction,
            ..self
        }
    }

    /// Set (or clear) the random seed.
    pub fn with_seed(
        self,
        random_seed: Option<u64>,
    ) -> Self {
        Self {
            random_seed,
            ..self
        }
    }

    /// Check the holdout fraction lies in `(0, 1)`.
    pub fn validate(&self) -> PrepResult<()> {
        let f = self.holdout_fraction;
        if f > 0.0 && f < 1.0 {
            Ok(())
        } else {
            Err(CorpusPrepError::Partition(format!(
                "holdout fraction must lie in (0, 1), got {f}"
            )))
        }
    }

    /// The number of documents held out of a corpus of `len` documents.
    ///
    /// This is `ceil(holdout_fraction * len)`, and at least 1.
    ///
    /// # Errors
    /// [`CorpusPrepError::Partition`] when the fraction is invalid, the
    /// corpus is empty, or no documents would be left to train on.
    pub fn validation_count(
        &self,
        len: usize,
    ) -> PrepResult<usize> {
        self.validate()?;
        if len == 0 {
            return Err(CorpusPrepError::Partition(
                "cannot split an empty corpus".to_string(),
            ));
        }

        let exact = self.holdout_fraction * len as f64;
        let nearest = exact.round();
        let count = if (exact - nearest).abs() < COUNT_TOLERANCE {
            nearest
        } else {
            exact.ceil()
        };
        let count = (count as usize).max(1);

        if count >= len {
            return Err(CorpusPrepError::Partition(format!(
                "holding out {count} of {len} documents leaves nothing to train on"
            )));
        }
        Ok(count)
    }

    /// Build the random number generator for a split.
    pub fn build_rng(&self) -> StdRng {
        match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
