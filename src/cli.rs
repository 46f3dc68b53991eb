//! Command-line interface definition for jargon-wordlist
//!
//! Every flag has a default, so running the binary with no arguments reads
//! `symbol_names.txt` and writes `terms.txt`, `vars.txt` and `const.txt` in
//! the current directory.

use clap::Parser;
use std::path::PathBuf;

use crate::filter::{DEFAULT_LENGTH_THRESHOLD, DEFAULT_RATIO_THRESHOLD};
use crate::tokenize::DEFAULT_DELIMITER;

/// Default corpus path
pub const DEFAULT_INPUT: &str = "symbol_names.txt";

/// Symbol-name wordlist generator
///
/// Splits a corpus of identifiers into terms, drops numeric noise and writes
/// sorted wordlists for variable-style and constant-style names.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "jargon-wordlist",
    version,
    about = "Generate term wordlists from a corpus of symbol names",
    long_about = r#"
Generate term wordlists from a corpus of symbol names.

Each line of the corpus is one identifier (e.g. a kernel symbol). Identifiers
are split on the delimiter into terms; mostly-numeric terms longer than the
length threshold are dropped. Three sorted, deduplicated lists are written:

    terms.txt   every retained term
    vars.txt    terms containing a lowercase letter
    const.txt   terms without a lowercase letter

EXAMPLES:
    # Default run: symbol_names.txt -> terms.txt, vars.txt, const.txt
    jargon-wordlist

    # Different corpus and output directory
    jargon-wordlist -i kallsyms.txt -o wordlists/

    # Split on dots, drop any term over 4 chars that is >30% digits
    jargon-wordlist -d . --ratio-threshold 0.3 --length-threshold 4
"#
)]
pub struct Args {
    /// Corpus file, one name per line
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output directory (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Delimiter between terms of a name
    #[arg(short, long, value_name = "CHAR", default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Drop terms whose digit ratio is strictly greater than this
    #[arg(long, value_name = "RATIO", default_value_t = DEFAULT_RATIO_THRESHOLD)]
    pub ratio_threshold: f64,

    /// Only apply the ratio test to terms longer than this
    #[arg(long, value_name = "LEN", default_value_t = DEFAULT_LENGTH_THRESHOLD)]
    pub length_threshold: usize,

    /// File name for the list of all terms
    #[arg(long, value_name = "NAME", default_value = "terms.txt")]
    pub terms_name: String,

    /// File name for the variable-style list
    #[arg(long, value_name = "NAME", default_value = "vars.txt")]
    pub vars_name: String,

    /// File name for the constant-style list
    #[arg(long, value_name = "NAME", default_value = "const.txt")]
    pub const_name: String,

    /// Show detailed statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Dry run - build the wordlists without writing files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl Args {
    /// Get output directory, defaulting to current directory
    pub fn get_output_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
