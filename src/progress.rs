//! Progress display module
//!
//! Styled status lines, the byte-granular progress bar, and the end-of-run
//! statistics summary.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".cyan(), text.cyan().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a bytes-based progress bar over the input file.
///
/// The bar draws on stderr, so the `word:` notices on stdout stay clean.
pub fn create_bytes_progress_bar(total_bytes: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{elapsed_precise}] [{bar:40.cyan/dim}] {bytes}/{total_bytes} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Counters for a single filtering run.
#[derive(Debug)]
pub struct RunStats {
    /// Lines read from the input.
    pub total_lines: u64,
    /// Lines that passed the shape match.
    pub candidates: u64,
    /// Words written to the output.
    pub accepted: u64,
    /// Accepted words dropped as repeats (only with `--unique`).
    pub duplicates: u64,
    /// Size of the input file.
    pub input_bytes: u64,
    start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            candidates: 0,
            accepted: 0,
            duplicates: 0,
            input_bytes: 0,
            start_time: Instant::now(),
        }
    }

    pub fn add_line(&mut self) {
        self.total_lines += 1;
    }

    pub fn add_candidate(&mut self) {
        self.candidates += 1;
    }

    pub fn add_accepted(&mut self) {
        self.accepted += 1;
    }

    pub fn add_duplicate(&mut self) {
        self.duplicates += 1;
    }

    pub fn set_input_bytes(&mut self, bytes: u64) {
        self.input_bytes = bytes;
    }

    /// Lines rejected by the letter-class bounds.
    pub fn rejected_by_letters(&self) -> u64 {
        self.candidates
            .saturating_sub(self.accepted)
            .saturating_sub(self.duplicates)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn lines_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_lines as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        println!();
        println!("{}", "─".repeat(48).cyan());

        println!("  {} {}", "Lines read:     ".cyan(), format_number(self.total_lines));
        println!("  {} {}", "Shape matches:  ".cyan(), format_number(self.candidates));
        println!(
            "  {} {}",
            "Letter rejects: ".cyan(),
            format_number(self.rejected_by_letters())
        );

        if self.duplicates > 0 {
            println!("  {} {}", "Duplicates:     ".yellow(), format_number(self.duplicates));
        }

        println!(
            "  {} {}",
            "Accepted words: ".cyan().bold(),
            format_number(self.accepted).green().bold()
        );

        println!();
        println!("  {} {}", "Data read:      ".cyan(), ByteSize(self.input_bytes));
        println!("  {} {:?}", "Duration:       ".cyan(), self.elapsed());
        println!(
            "  {} {:.0} lines/sec",
            "Throughput:     ".cyan(),
            self.lines_per_second()
        );

        println!("{}", "─".repeat(48).cyan());
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
