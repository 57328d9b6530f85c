//! # filter-wordlist
//!
//! Letter-frequency wordlist filter for curating puzzle dictionaries.
//!
//! Reads a raw word list, keeps the entries that are a single run of 4-8
//! letters, uppercases them, and tests the distinct letters of each
//! candidate against fixed per-class bounds (at most 2 vowels, 4 common
//! consonants, 1 rare consonant). Accepted words land in `words.txt`, one
//! per line, in input order - ready to ship as a puzzle or game dictionary.
//!
//! ## Usage
//!
//! ```bash
//! # Curate words.txt from a dictionary dump
//! filter_wordlist /usr/share/dict/words
//!
//! # Custom output path, repeated words removed
//! filter_wordlist full_list.txt -o curated.txt --unique
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use filter_wordlist::processor::{Processor, ProcessorConfig};
//! use std::path::PathBuf;
//!
//! let config = ProcessorConfig {
//!     output_path: PathBuf::from("words.txt"),
//!     unique: false,
//!     quiet: true,
//! };
//!
//! let mut processor = Processor::new(config);
//! // processor.process(&PathBuf::from("wordlist.txt")).unwrap();
//! ```

pub mod cli;
pub mod dedup;
pub mod filter;
pub mod output;
pub mod processor;
pub mod progress;
pub mod reader;

pub use cli::Args;
pub use filter::{LetterLimits, LetterSet, WordFilter};
pub use processor::{Processor, ProcessorConfig};
