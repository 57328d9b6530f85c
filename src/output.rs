//! Output management module
//!
//! Writes accepted words to the curated list with buffering. The output
//! file is truncated at the start of every run, never appended across runs.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default buffer size for file writing (64KB)
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Buffered writer for the curated word list.
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create (or truncate) the output file at `path`.
    pub fn create(path: PathBuf) -> anyhow::Result<Self> {
        Self::with_capacity(path, DEFAULT_BUFFER_SIZE)
    }

    pub fn with_capacity(path: PathBuf, buffer_size: usize) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| anyhow::anyhow!("Cannot create output file {:?}: {}", path, e))?;

        let writer = BufWriter::with_capacity(buffer_size, file);

        Ok(Self {
            writer,
            path,
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Append a word plus a line terminator.
    pub fn write_line(&mut self, word: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", word)?;
        self.lines_written += 1;
        self.bytes_written += word.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Flush the buffer to disk.
    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// The output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of words written so far.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Bytes written so far, line terminators included.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_writer() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");

        let mut writer = OutputWriter::create(path.clone()).unwrap();
        writer.write_line("APPLE").unwrap();
        writer.write_line("STONE").unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.lines_written(), 2);
        assert_eq!(writer.bytes_written(), 12);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "APPLE\nSTONE\n");
    }

    #[test]
    fn test_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");

        std::fs::write(&path, "LEFTOVER\nCONTENT\n").unwrap();

        let mut writer = OutputWriter::create(path.clone()).unwrap();
        writer.write_line("APPLE").unwrap();
        writer.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "APPLE\n");
    }

    #[test]
    fn test_flushes_on_drop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");

        {
            let mut writer = OutputWriter::create(path.clone()).unwrap();
            writer.write_line("APPLE").unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "APPLE\n");
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("words.txt");

        assert!(OutputWriter::create(path).is_err());
    }
}
