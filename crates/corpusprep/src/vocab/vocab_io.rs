//! # Character Vocabulary IO
//!
//! The artifact is UTF-8 text, one character per line, in ascending code
//! point order, with no header:
//! ```terminaloutput
//! {CHAR}\n
//! ```
//!
//! The line terminators themselves can't be written bare, so `'\n'` and
//! `'\r'` are written as the two-character escapes `\n` and `\r`. Every
//! other line holds exactly one character, which keeps the escapes
//! unambiguous (a literal backslash is the one-character line `\`).
//!
//! The ascending order is over the decoded characters, not the raw lines:
//! the escaped lines sort where `'\n'` and `'\r'` do, at the front, even
//! though their text begins with a backslash.

use std::{fs, io::Write, path::Path};

use crate::{
    errors::{CorpusPrepError, IoPathContext, PrepResult},
    io::AtomicFile,
    vocab::CharVocab,
};

const ESCAPED_NEWLINE: &str = "\\n";
const ESCAPED_CARRIAGE_RETURN: &str = "\\r";

/// Write a [`CharVocab`] to a [`Write`] writer.
///
/// # Arguments
/// * `vocab` - the vocabulary to write.
/// * `writer` - the writer to target.
pub fn write_char_vocab<W: Write>(
    vocab: &CharVocab,
    writer: &mut W,
) -> std::io::Result<()> {
    let mut buf = [0u8; 4];
    for c in vocab.iter() {
        let line = match c {
            '\n' => ESCAPED_NEWLINE,
            '\r' => ESCAPED_CARRIAGE_RETURN,
            c => &*c.encode_utf8(&mut buf),
        };
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Save a [`CharVocab`] to `path`, replacing any existing file.
///
/// The file is written to a temporary sibling and renamed into place.
pub fn save_char_vocab_path<P: AsRef<Path>>(
    vocab: &CharVocab,
    path: P,
) -> PrepResult<()> {
    let path = path.as_ref();
    let mut file = AtomicFile::create(path)?;
    write_char_vocab(vocab, &mut file).with_path(path)?;
    file.commit()
}

/// Parse a character vocabulary artifact.
///
/// Every line must be a single character or one of the `\n` / `\r`
/// escapes, and lines must be strictly increasing by code point.
pub fn parse_char_vocab(data: &[u8]) -> PrepResult<CharVocab> {
    let text = std::str::from_utf8(data).map_err(|e| CorpusPrepError::Parse(e.to_string()))?;

    let body = match text.strip_suffix('\n') {
        Some(body) => body,
        None if text.is_empty() => return Ok(CharVocab::default()),
        None => text,
    };

    let mut chars: Vec<char> = Vec::new();
    for (idx, line) in body.split('\n').enumerate() {
        let c = parse_vocab_line(line).ok_or_else(|| {
            CorpusPrepError::Parse(format!(
                "line {}: expected a single character, found {line:?}",
                idx + 1
            ))
        })?;

        if let Some(&prev) = chars.last()
            && c <= prev
        {
            return Err(CorpusPrepError::Parse(format!(
                "line {}: {c:?} does not sort after {prev:?}",
                idx + 1
            )));
        }
        chars.push(c);
    }

    Ok(chars.into_iter().collect())
}

fn parse_vocab_line(line: &str) -> Option<char> {
    match line {
        ESCAPED_NEWLINE => Some('\n'),
        ESCAPED_CARRIAGE_RETURN => Some('\r'),
        line => {
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
    }
}

/// Load a [`CharVocab`] from an artifact file.
pub fn load_char_vocab_path<P: AsRef<Path>>(path: P) -> PrepResult<CharVocab> {
    let path = path.as_ref();
    let data = fs::read(path).with_path(path)?;
    parse_char_vocab(&data)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    fn write_to_string(vocab: &CharVocab) -> String {
        let mut buf = Vec::new();
        write_char_vocab(vocab, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_sorted_lines() {
        let vocab: CharVocab = "zyxabc".chars().collect();
        assert_eq!(write_to_string(&vocab), "a\nb\nc\nx\ny\nz\n");

        assert_eq!(write_to_string(&CharVocab::default()), "");
    }

    #[test]
    fn test_write_escapes_line_terminators() {
        let vocab: CharVocab = "\\\r\n \t".chars().collect();
        assert_eq!(write_to_string(&vocab), "\t\n\\n\n\\r\n \n\\\n");
    }

    #[test]
    fn test_written_lines_are_one_char_each() {
        let vocab: CharVocab = "héllo wörld \u{1f600}\n\r\\".chars().collect();
        let text = write_to_string(&vocab);

        let lines: Vec<&str> = text.strip_suffix('\n').unwrap().split('\n').collect();
        assert_eq!(lines.len(), vocab.len());

        let decoded: Vec<char> = lines.iter().map(|l| parse_vocab_line(l).unwrap()).collect();
        assert_eq!(decoded, vocab.chars());
        assert!(decoded.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_round_trip() {
        let vocab: CharVocab = "The quick\tbrown\r\nfox \\ caf\u{e9} \u{4f60}\u{597d}"
            .chars()
            .collect();
        let text = write_to_string(&vocab);
        assert_eq!(parse_char_vocab(text.as_bytes()).unwrap(), vocab);

        assert!(parse_char_vocab(b"").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_char_vocab(b"a\nbc\n"),
            Err(CorpusPrepError::Parse(_))
        ));
        assert!(matches!(
            parse_char_vocab(b"b\na\n"),
            Err(CorpusPrepError::Parse(_))
        ));
        assert!(matches!(
            parse_char_vocab(b"a\na\n"),
            Err(CorpusPrepError::Parse(_))
        ));
        assert!(matches!(
            parse_char_vocab(b"a\n\nb\n"),
            Err(CorpusPrepError::Parse(_))
        ));
        assert!(matches!(
            parse_char_vocab(b"\xff\n"),
            Err(CorpusPrepError::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let tmpdir = TempDir::new("corpusprep-vocab-io").unwrap();
        let path = tmpdir.path().join("character_vocab.txt");

        let vocab: CharVocab = "hello\nworld".chars().collect();
        save_char_vocab_path(&vocab, &path).unwrap();
        assert_eq!(load_char_vocab_path(&path).unwrap(), vocab);

        let err = save_char_vocab_path(&vocab, tmpdir.path().join("missing/vocab.txt")).unwrap_err();
        assert!(matches!(err, CorpusPrepError::Io { .. }));
    }
}
