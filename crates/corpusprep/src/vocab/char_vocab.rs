//! # Character Vocabularies

use ahash::AHashSet;

/// A sorted, deduplicated set of characters.
///
/// Ordered by ascending code point, so serialization is reproducible
/// regardless of accumulation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharVocab {
    chars: Vec<char>,
}

impl CharVocab {
    /// The number of distinct characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Is `c` in the vocabulary?
    pub fn contains(
        &self,
        c: char,
    ) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    /// The characters, in ascending code point order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Iterate over the characters, in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for CharVocab {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut chars: Vec<char> = iter.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }
}

impl From<CharVocab> for Vec<char> {
    fn from(vocab: CharVocab) -> Self {
        vocab.chars
    }
}

/// Accumulates the distinct characters of a stream of texts.
///
/// ASCII is tracked in a 128-bit mask; everything else goes to a hash set.
/// Accumulation order does not matter; [`CharVocabCounter::release`] sorts.
#[derive(Debug, Clone, Default)]
pub struct CharVocabCounter {
    ascii: u128,
    other: AHashSet<char>,
}

impl CharVocabCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct characters seen so far.
    pub fn len(&self) -> usize {
        self.ascii.count_ones() as usize + self.other.len()
    }

    /// Has nothing been seen yet?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add the characters of `text`.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for c in text.as_ref().chars() {
            if c.is_ascii() {
                self.ascii |= 1u128 << (c as u32);
            } else {
                self.other.insert(c);
            }
        }
    }

    /// Add the characters of every sample.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Fold another counter into this one.
    pub fn merge(
        &mut self,
        other: CharVocabCounter,
    ) {
        self.ascii |= other.ascii;
        if self.other.len() < other.other.len() {
            let smaller = std::mem::replace(&mut self.other, other.other);
            self.other.extend(smaller);
        } else {
            self.other.extend(other.other);
        }
    }

    /// Release the accumulated characters as a sorted [`CharVocab`].
    pub fn release(self) -> CharVocab {
        let ascii = self.ascii;
        (0u8..128)
            .filter(|&b| ascii & (1u128 << b) != 0)
            .map(char::from)
            .chain(self.other)
            .collect()
    }
}
