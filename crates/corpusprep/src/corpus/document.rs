//! # Documents and the Corpus Trait

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::errors::{CorpusPrepError, PrepResult};

/// One unit of text within a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    /// The document text.
    pub text: String,
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// An ordered, read-only, indexable collection of documents.
///
/// Implementations decode lazily; [`Corpus::text`] is where a
/// [`CorpusPrepError::Decode`] surfaces for undecodable documents.
pub trait Corpus {
    /// The number of documents.
    fn len(&self) -> usize;

    /// Is the corpus empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The text of document `index`.
    fn text(
        &self,
        index: usize,
    ) -> PrepResult<Cow<'_, str>>;

    /// Iterate over all document texts, in corpus order.
    fn texts(&self) -> CorpusTexts<'_, Self> {
        CorpusTexts {
            corpus: self,
            next: 0,
        }
    }
}

impl<C: Corpus + ?Sized> Corpus for &C {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn text(
        &self,
        index: usize,
    ) -> PrepResult<Cow<'_, str>> {
        (**self).text(index)
    }
}

/// Iterator over the texts of a [`Corpus`].
pub struct CorpusTexts<'a, C: Corpus + ?Sized> {
    corpus: &'a C,
    next: usize,
}

impl<'a, C: Corpus + ?Sized> Iterator for CorpusTexts<'a, C> {
    type Item = PrepResult<Cow<'a, str>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.corpus.len() {
            return None;
        }
        let item = self.corpus.text(self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.corpus.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

pub(crate) fn out_of_range(
    index: usize,
    len: usize,
) -> CorpusPrepError {
    CorpusPrepError::OutOfRange { index, len }
}

/// A corpus of already-decoded documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCorpus {
    documents: Vec<Document>,
}

impl MemoryCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty corpus with room for `capacity` documents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: Vec::with_capacity(capacity),
        }
    }

    /// Append a document.
    pub fn push<D: Into<Document>>(
        &mut self,
        document: D,
    ) {
        self.documents.push(document.into());
    }

    /// The documents, in order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
}

impl From<Vec<Document>> for MemoryCorpus {
    fn from(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

impl<D: Into<Document>> FromIterator<D> for MemoryCorpus {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<D: Into<Document>> Extend<D> for MemoryCorpus {
    fn extend<I: IntoIterator<Item = D>>(
        &mut self,
        iter: I,
    ) {
        self.documents.extend(iter.into_iter().map(Into::into));
    }
}

impl Corpus for MemoryCorpus {
    fn len(&self) -> usize {
        self.documents.len()
    }

    fn text(
        &self,
        index: usize,
    ) -> PrepResult<Cow<'_, str>> {
        self.documents
            .get(index)
            .map(|doc| Cow::Borrowed(doc.text.as_str()))
            .ok_or_else(|| out_of_range(index, self.len()))
    }
}
