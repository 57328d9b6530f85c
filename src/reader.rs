//! Input reading module
//!
//! Line-oriented reading of raw word lists with tolerant decoding. Lists in
//! the wild arrive in whatever encoding the upstream dictionary shipped
//! with, so the reader sniffs the encoding up front and decodes lossily
//! rather than aborting mid-file. Entries that decode to anything other
//! than a clean ASCII run are rejected by the shape match downstream.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Sniff the encoding of a file from its first 64KB.
pub fn detect_encoding(path: &Path) -> io::Result<&'static Encoding> {
    let mut file = File::open(path)?;

    let mut sample = vec![0u8; READ_BUFFER_SIZE];
    let bytes_read = file.read(&mut sample)?;
    sample.truncate(bytes_read);

    if let Some(encoding) = bom_encoding(&sample) {
        return Ok(encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&sample, true);

    Ok(detector.guess(None, true))
}

/// Encoding implied by a BOM at the start of the content, if any.
fn bom_encoding(content: &[u8]) -> Option<&'static Encoding> {
    if content.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some(encoding_rs::UTF_8);
    }
    if content.starts_with(&[0xFE, 0xFF]) {
        return Some(encoding_rs::UTF_16BE);
    }
    if content.starts_with(&[0xFF, 0xFE]) {
        return Some(encoding_rs::UTF_16LE);
    }
    None
}

/// Iterator over the lines of a word list, decoded to UTF-8.
///
/// Trailing `\n` and `\r\n` are stripped from each line.
pub struct LineReader {
    reader: BufReader<File>,
    encoding: &'static Encoding,
    buf: Vec<u8>,
}

impl LineReader {
    /// Open `path` for line iteration, sniffing its encoding first.
    pub fn open(path: &Path) -> io::Result<Self> {
        let encoding = detect_encoding(path)?;
        if encoding != encoding_rs::UTF_8 {
            log::debug!("input encoding detected as {}", encoding.name());
        }

        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
        skip_bom(&mut reader)?;

        Ok(Self {
            reader,
            encoding,
            buf: Vec::with_capacity(256),
        })
    }

    /// The encoding the input is being decoded from.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

fn skip_bom(reader: &mut BufReader<File>) -> io::Result<()> {
    let start = reader.fill_buf()?;

    let bom_len = if start.starts_with(&[0xEF, 0xBB, 0xBF]) {
        3
    } else if start.starts_with(&[0xFE, 0xFF]) || start.starts_with(&[0xFF, 0xFE]) {
        2
    } else {
        0
    };

    reader.consume(bom_len);
    Ok(())
}

impl Iterator for LineReader {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();

        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None, // EOF
            Ok(_) => {
                while self.buf.last() == Some(&b'\n') || self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }

                let (decoded, _, had_errors) = self.encoding.decode(&self.buf);
                if had_errors {
                    log::warn!(
                        "malformed {} sequence in input line, decoded lossily",
                        self.encoding.name()
                    );
                }

                Some(Ok(decoded.into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_utf8_detection() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "banana").unwrap();

        let encoding = detect_encoding(file.path()).unwrap();
        assert_eq!(encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_line_iteration() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "banana").unwrap();
        writeln!(file, "cherry").unwrap();

        let reader = LineReader::open(file.path()).unwrap();
        let lines: Vec<_> = reader.filter_map(|r| r.ok()).collect();

        assert_eq!(lines, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"apple\r\nbanana\r\n").unwrap();

        let reader = LineReader::open(file.path()).unwrap();
        let lines: Vec<_> = reader.filter_map(|r| r.ok()).collect();

        assert_eq!(lines, vec!["apple", "banana"]);
    }

    #[test]
    fn test_missing_final_newline() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"apple\nbanana").unwrap();

        let reader = LineReader::open(file.path()).unwrap();
        let lines: Vec<_> = reader.filter_map(|r| r.ok()).collect();

        assert_eq!(lines, vec!["apple", "banana"]);
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();

        let mut reader = LineReader::open(file.path()).unwrap();
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_utf8_bom_is_skipped() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFapple\nbanana\n").unwrap();

        let reader = LineReader::open(file.path()).unwrap();
        let lines: Vec<_> = reader.filter_map(|r| r.ok()).collect();

        assert_eq!(lines, vec!["apple", "banana"]);
    }

    #[test]
    fn test_invalid_utf8_decodes_lossily() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"apple\n\xFFgarbage\xFF\nbanana\n").unwrap();

        let reader = LineReader::open(file.path()).unwrap();
        let lines: Vec<_> = reader.filter_map(|r| r.ok()).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "apple");
        assert_eq!(lines[2], "banana");
    }

    #[test]
    fn test_open_missing_file_fails() {
        assert!(LineReader::open(Path::new("no/such/wordlist.txt")).is_err());
    }
}
