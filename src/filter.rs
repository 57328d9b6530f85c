//! Word filtering module
//!
//! Extracts candidate words from raw wordlist lines and tests them against
//! the letter-frequency heuristics used to curate puzzle dictionaries.

use regex::Regex;

/// Vowel letters.
pub const VOWELS: &str = "AEIOU";

/// Consonants that show up in most English words.
pub const COMMON_CONSONANTS: &str = "TNSHRDLCMW";

/// Consonants that make a word awkward to spell on a constrained board.
/// Q belongs to no class and is never counted.
pub const RARE_CONSONANTS: &str = "FGYPBKVJXZ";

/// Shortest alphabetic run accepted as a candidate.
pub const MIN_WORD_LEN: usize = 4;

/// Longest alphabetic run accepted as a candidate.
pub const MAX_WORD_LEN: usize = 8;

/// Set of distinct uppercase ASCII letters, one bit per letter.
///
/// Duplicate letters collapse, so class counts are over distinct letters:
/// a word with two P's still spends only one rare consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Collect the distinct ASCII letters of `word`, case-insensitively.
    pub fn of(word: &str) -> Self {
        let mut bits = 0u32;
        for b in word.bytes() {
            let b = b.to_ascii_uppercase();
            if b.is_ascii_uppercase() {
                bits |= 1 << (b - b'A');
            }
        }
        Self(bits)
    }

    /// Letters present in both sets.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Number of distinct letters in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, letter: char) -> bool {
        letter.is_ascii_alphabetic()
            && self.0 & (1 << (letter.to_ascii_uppercase() as u8 - b'A')) != 0
    }
}

/// Bounds on the distinct letters per class that an accepted word may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterLimits {
    pub max_vowels: usize,
    pub max_common: usize,
    pub max_rare: usize,
}

impl Default for LetterLimits {
    fn default() -> Self {
        Self {
            max_vowels: 2,
            max_common: 4,
            max_rare: 1,
        }
    }
}

/// Word filter: shape match plus letter-class bounds.
///
/// A line passes the shape match when it contains exactly one run of 4-8
/// ASCII letters and nothing alphabetic outside that run. The run is
/// uppercased to form the candidate, and the candidate is accepted when its
/// distinct letters stay within every class bound.
#[derive(Debug)]
pub struct WordFilter {
    shape: Regex,
    limits: LetterLimits,
    vowels: LetterSet,
    common: LetterSet,
    rare: LetterSet,
}

impl WordFilter {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_limits(LetterLimits::default())
    }

    pub fn with_limits(limits: LetterLimits) -> anyhow::Result<Self> {
        // One alphabetic run, bounded only by non-alphabetic characters.
        let pattern = format!(
            r"^[^a-zA-Z]*([a-zA-Z]{{{},{}}})[^a-zA-Z]*$",
            MIN_WORD_LEN, MAX_WORD_LEN
        );
        let shape = Regex::new(&pattern)
            .map_err(|e| anyhow::anyhow!("Invalid shape pattern '{}': {}", pattern, e))?;

        Ok(Self {
            shape,
            limits,
            vowels: LetterSet::of(VOWELS),
            common: LetterSet::of(COMMON_CONSONANTS),
            rare: LetterSet::of(RARE_CONSONANTS),
        })
    }

    /// Extract the candidate word from a raw line, if the line has the
    /// required shape. Returns the uppercased run.
    #[inline]
    pub fn candidate(&self, line: &str) -> Option<String> {
        self.shape
            .captures(line)
            .map(|caps| caps[1].to_ascii_uppercase())
    }

    /// Test a candidate's letter set against the class bounds.
    #[inline]
    pub fn letters_pass(&self, word: &str) -> bool {
        let letters = LetterSet::of(word);

        letters.intersection(self.vowels).len() <= self.limits.max_vowels
            && letters.intersection(self.common).len() <= self.limits.max_common
            && letters.intersection(self.rare).len() <= self.limits.max_rare
    }

    /// Run the full per-line pipeline: shape match, normalize, classify.
    /// Returns the accepted word, or None if the line is filtered out.
    #[inline]
    pub fn accept(&self, line: &str) -> Option<String> {
        let word = self.candidate(line)?;

        if self.letters_pass(&word) {
            Some(word)
        } else {
            None
        }
    }

    /// The configured class bounds.
    pub fn limits(&self) -> LetterLimits {
        self.limits
    }
}
