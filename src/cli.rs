//! Command-line interface definition for filter-wordlist
//!
//! Provides argument parsing for the wordlist curation tool.

use clap::Parser;
use std::path::PathBuf;

/// Letter-frequency wordlist filter for curating puzzle dictionaries
#[derive(Parser, Debug, Clone)]
#[command(
    name = "filter_wordlist",
    version,
    about = "Curate a puzzle dictionary from a raw word list",
    long_about = r#"
Reads a raw word list one line at a time, extracts entries that are a single
run of 4-8 letters, uppercases them, and keeps the ones whose distinct
letters stay within fixed per-class bounds:

    vowels (AEIOU)                  at most 2
    common consonants (TNSHRDLCMW)  at most 4
    rare consonants (FGYPBKVJXZ)    at most 1

Accepted words are written to words.txt in input order, one per line, and a
"word: <WORD>" notice for each is printed to standard output. Entries with
embedded digits, hyphens, or apostrophes splitting the letters into more
than one run are dropped.

EXAMPLES:
    # Curate words.txt from a dictionary dump
    filter_wordlist /usr/share/dict/words

    # Write somewhere else and drop repeated words
    filter_wordlist full_list.txt -o curated.txt --unique

    # Just the output file, no terminal noise
    filter_wordlist full_list.txt -q
"#
)]
pub struct Args {
    /// Path to the full word list, one entry per line
    #[arg(value_name = "WORDLIST")]
    pub input: PathBuf,

    /// Output file for the curated list
    #[arg(short, long, value_name = "FILE", default_value = "words.txt")]
    pub output: PathBuf,

    /// Drop repeated accepted words, keeping the first occurrence
    #[arg(long, default_value_t = false)]
    pub unique: bool,

    /// Quiet mode - no notices, progress bar, or summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
