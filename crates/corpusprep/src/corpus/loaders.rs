//! # Line-Oriented Corpus Loaders

use std::io::BufRead;

use crate::{
    corpus::{Corpus, MemoryCorpus, RawCorpus},
    encoding::TextEncoding,
    errors::{CorpusPrepError, PrepResult},
};

pub(crate) fn load_error<M: ToString>(
    source_name: &str,
    message: M,
) -> CorpusPrepError {
    CorpusPrepError::Load {
        source_name: source_name.to_string(),
        message: message.to_string(),
    }
}

/// Read one `\n`-terminated line into `buf`, stripping the terminator
/// (and a preceding `\r`).
///
/// Returns `false` at end of input.
fn read_line_bytes<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    source_name: &str,
) -> PrepResult<bool> {
    buf.clear();
    if reader
        .read_until(b'\n', buf)
        .map_err(|e| load_error(source_name, e))?
        == 0
    {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}

/// Read a plain text corpus, one document per line.
///
/// Lines are kept as raw bytes; decoding happens on access.
///
/// # Returns
/// The number of documents appended to `corpus`.
pub fn read_text_lines<R: BufRead>(
    mut reader: R,
    corpus: &mut RawCorpus,
    source_name: &str,
) -> PrepResult<usize> {
    let start = corpus.len();
    let mut buf = Vec::new();
    while read_line_bytes(&mut reader, &mut buf, source_name)? {
        corpus.push(buf.as_slice());
    }
    Ok(corpus.len() - start)
}

/// Read a JSON-lines corpus; each non-blank line is an object whose
/// `text_field` member holds the document text.
///
/// # Returns
/// The number of documents appended to `corpus`.
pub fn read_jsonl<R: BufRead>(
    mut reader: R,
    text_field: &str,
    encoding: TextEncoding,
    corpus: &mut MemoryCorpus,
    source_name: &str,
) -> PrepResult<usize> {
    let start = corpus.len();
    let mut buf = Vec::new();
    let mut line_number = 0;
    while read_line_bytes(&mut reader, &mut buf, source_name)? {
        line_number += 1;
        let line = encoding.decode(corpus.len(), &buf)?;
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(&line)
            .map_err(|e| load_error(source_name, format!("line {line_number}: {e}")))?;

        let text = value
            .get(text_field)
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| {
                load_error(
                    source_name,
                    format!("line {line_number}: missing string field {text_field:?}"),
                )
            })?;

        corpus.push(text);
    }
    Ok(corpus.len() - start)
}
