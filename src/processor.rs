//! Core processing pipeline
//!
//! Drives the single sequential pass over the input word list: read line,
//! match shape, normalize, classify letters, write accepted words. Each
//! line transits the pipeline independently; no state is carried between
//! lines beyond the optional duplicate-suppression set.

use crate::cli::Args;
use crate::dedup::SeenWords;
use crate::filter::WordFilter;
use crate::output::OutputWriter;
use crate::progress::{create_bytes_progress_bar, print_info, print_success, print_warning, RunStats};
use crate::reader::LineReader;

use anyhow::Context;
use bytesize::ByteSize;
use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The input word list could not be opened for reading. Fatal; the filter
/// never retries.
#[derive(Debug, Error)]
#[error("cannot open input wordlist {path:?}")]
pub struct InputUnavailable {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Where the curated list is written.
    pub output_path: PathBuf,
    /// Drop repeated accepted words, keeping the first occurrence.
    pub unique: bool,
    /// Suppress notices, the progress bar, and the summary.
    pub quiet: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            output_path: args.output.clone(),
            unique: args.unique,
            quiet: args.quiet,
        }
    }
}

/// Single-pass word list processor.
pub struct Processor {
    config: ProcessorConfig,
    stats: RunStats,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            stats: RunStats::new(),
        }
    }

    /// Filter `input` into the configured output file.
    ///
    /// Accepted words are appended in acceptance order, one per line. The
    /// output file is truncated before the pass starts.
    pub fn process(&mut self, input: &Path) -> anyhow::Result<()> {
        let filter = WordFilter::new()?;

        let reader = LineReader::open(input).map_err(|source| InputUnavailable {
            path: input.to_path_buf(),
            source,
        })?;

        let total_bytes = fs::metadata(input).map(|m| m.len()).unwrap_or(0);
        self.stats.set_input_bytes(total_bytes);

        let mut output = OutputWriter::create(self.config.output_path.clone())?;

        let pb = if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_bytes_progress_bar(total_bytes, "Filtering...")
        };

        let mut seen = self.config.unique.then(SeenWords::new);

        for line in reader {
            let line = line.context("read error on input wordlist")?;

            self.stats.add_line();
            pb.inc(line.len() as u64 + 1);

            let Some(word) = filter.candidate(&line) else {
                continue;
            };
            self.stats.add_candidate();

            if !filter.letters_pass(&word) {
                log::debug!("rejected {}: letter classes out of bounds", word);
                continue;
            }

            if let Some(seen) = seen.as_mut() {
                if !seen.insert(&word) {
                    self.stats.add_duplicate();
                    continue;
                }
            }

            if !self.config.quiet {
                pb.suspend(|| println!("word: {}", word));
            }

            output.write_line(&word)?;
            self.stats.add_accepted();
        }

        pb.finish_and_clear();
        output.flush()?;

        if !self.config.quiet {
            if self.stats.accepted == 0 {
                print_warning("No words passed the filter!");
            } else {
                print_success(&format!("Output written to: {:?}", output.path()));
                print_info(&format!(
                    "Accepted words: {} ({})",
                    output.lines_written(),
                    ByteSize(output.bytes_written())
                ));
            }
            self.stats.print_summary();
        }

        Ok(())
    }

    /// Statistics for the pass.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}
