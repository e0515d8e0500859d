//! # Undecoded Byte Corpus

use std::borrow::Cow;

use crate::{
    corpus::{Corpus, MemoryCorpus, document::out_of_range},
    encoding::TextEncoding,
    errors::PrepResult,
};

/// A corpus of raw byte documents, decoded on access.
///
/// Decoding is deferred so that an invalid document is reported by its
/// index when a stage reaches it, not while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCorpus {
    encoding: TextEncoding,
    documents: Vec<Vec<u8>>,
}

impl RawCorpus {
    /// Create an empty corpus with the given encoding.
    pub fn new(encoding: TextEncoding) -> Self {
        Self {
            encoding,
            documents: Vec::new(),
        }
    }

    /// The configured encoding.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Append a raw document.
    pub fn push<B: Into<Vec<u8>>>(
        &mut self,
        bytes: B,
    ) {
        self.documents.push(bytes.into());
    }

    /// The raw bytes of document `index`.
    pub fn bytes(
        &self,
        index: usize,
    ) -> Option<&[u8]> {
        self.documents.get(index).map(Vec::as_slice)
    }

    /// Decode every document, appending to `target`.
    ///
    /// Decode errors are reported with the index the document takes in `target`.
    pub fn decode_into(
        &self,
        target: &mut MemoryCorpus,
    ) -> PrepResult<()> {
        for bytes in &self.documents {
            let index = target.len();
            let text = self.encoding.decode(index, bytes)?;
            target.push(text.into_owned());
        }
        Ok(())
    }
}

impl Corpus for RawCorpus {
    fn len(&self) -> usize {
        self.documents.len()
    }

    fn text(
        &self,
        index: usize,
    ) -> PrepResult<Cow<'_, str>> {
        let bytes = self
            .bytes(index)
            .ok_or_else(|| out_of_range(index, self.len()))?;
        self.encoding.decode(index, bytes)
    }
}
