//! # Text Encodings

use std::borrow::Cow;

use crate::errors::{CorpusPrepError, PrepResult};

/// The encoding used to interpret raw document bytes.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
pub enum TextEncoding {
    /// Strict UTF-8; invalid sequences are a decode error.
    #[default]
    #[strum(to_string = "utf-8", serialize = "utf8")]
    Utf8,

    /// ISO-8859-1; every byte maps to the code point of the same value.
    #[strum(to_string = "latin-1", serialize = "latin1", serialize = "iso-8859-1")]
    Latin1,
}

impl TextEncoding {
    /// Decode the bytes of document `index`.
    ///
    /// Borrows when the bytes are already valid text.
    pub fn decode<'a>(
        &self,
        index: usize,
        bytes: &'a [u8],
    ) -> PrepResult<Cow<'a, str>> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|e| CorpusPrepError::Decode {
                    index,
                    encoding: *self,
                    message: e.to_string(),
                }),
            // ASCII is a shared subset of both; only widen when we must.
            TextEncoding::Latin1 => match std::str::from_utf8(bytes) {
                Ok(text) if bytes.is_ascii() => Ok(Cow::Borrowed(text)),
                _ => Ok(Cow::Owned(bytes.iter().map(|&b| b as char).collect())),
            },
        }
    }
}
