//! Progress display module
//!
//! Styled console messages, a stage spinner and the end-of-run summary.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

use crate::filter::FilterStats;
use crate::tokenize::TokenizeStats;

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║        ██╗ █████╗ ██████╗  ██████╗  ██████╗ ███╗   ██╗       ║
║        ██║██╔══██╗██╔══██╗██╔════╝ ██╔═══██╗████╗  ██║       ║
║        ██║███████║██████╔╝██║  ███╗██║   ██║██╔██╗ ██║       ║
║   ██   ██║██╔══██║██╔══██╗██║   ██║██║   ██║██║╚██╗██║       ║
║   ╚█████╔╝██║  ██║██║  ██║╚██████╔╝╚██████╔╝██║ ╚████║       ║
║    ╚════╝ ╚═╝  ╚═╝╚═╝  ╚═╝ ╚═════╝  ╚═════╝ ╚═╝  ╚═══╝       ║
║                                                              ║
║              Symbol-Name Wordlist Generator                  ║
║                                              v1.0.0          ║
╚══════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Create a styled spinner for a pipeline stage
pub fn create_spinner(msg: &str, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
    {
        pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
    }

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Counters for one pipeline run
#[derive(Debug, Clone)]
pub struct RunStats {
    pub corpus_bytes: u64,
    pub tokenize: TokenizeStats,
    pub unique_terms: u64,
    pub filter: FilterStats,
    pub variable_terms: u64,
    pub constant_terms: u64,
    pub start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            corpus_bytes: 0,
            tokenize: TokenizeStats::default(),
            unique_terms: 0,
            filter: FilterStats::default(),
            variable_terms: 0,
            constant_terms: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn records_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.tokenize.records as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                    WORDLISTS COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!("  {} {}", "Corpus size:    ".green(), ByteSize(self.corpus_bytes));
        println!("  {} {}", "Names:          ".green(), format_number(self.tokenize.records));
        println!("  {} {}", "Terms split:    ".green(), format_number(self.tokenize.tokens));
        println!("  {} {}", "Duplicates:     ".yellow(), format_number(self.tokenize.duplicates));
        println!("  {} {}", "Unique terms:   ".green(), format_number(self.unique_terms));
        println!();

        println!("  {} {}", "Empty dropped:  ".yellow(), format_number(self.filter.empty_dropped));
        println!("  {} {}", "Numeric dropped:".yellow(), format_number(self.filter.numeric_dropped));
        println!(
            "  {} {}",
            "Retained:       ".green().bold(),
            format_number(self.filter.retained).green().bold()
        );
        println!("  {} {}", "Variable terms: ".green(), format_number(self.variable_terms));
        println!("  {} {}", "Constant terms: ".green(), format_number(self.constant_terms));

        println!();
        println!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed()));
        println!("  {} {:.2} names/sec", "Throughput:     ".green(), self.records_per_second());
        println!();
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
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

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}
