//! # jargon-wordlist
//!
//! Builds naming wordlists from a corpus of symbol names (e.g. Linux kernel
//! identifiers) for name-synthesis tools.
//!
//! ## Pipeline
//!
//! - **Load**: read the corpus, one name per line
//! - **Tokenize**: split names on a delimiter (`_` by default) into terms
//! - **Filter**: drop the empty term and mostly-numeric terms longer than 3 chars
//! - **Classify**: terms with a lowercase letter are variable-style, the rest constant-style
//! - **Export**: write `terms.txt`, `vars.txt` and `const.txt`, sorted and deduplicated
//!
//! ## Usage
//!
//! ```bash
//! # Reads symbol_names.txt, writes terms.txt, vars.txt, const.txt
//! jargon-wordlist
//!
//! # Custom corpus and output directory
//! jargon-wordlist -i kallsyms.txt -o wordlists/
//! ```
//!
//! ## Example
//!
//! ```rust
//! use jargon_wordlist::filter::NoiseFilter;
//! use jargon_wordlist::output::Artifact;
//! use jargon_wordlist::pipeline::generate;
//!
//! let generated = generate(["ioctl_deallocate_iso_resource", "IRQ_0x1234"], '_', &NoiseFilter::default());
//!
//! assert_eq!(generated.render(Artifact::Vars), "deallocate\nioctl\niso\nresource");
//! assert_eq!(generated.render(Artifact::Const), "IRQ");
//! ```

pub mod classify;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod tokenize;

pub use classify::{classify, Bucket, Classified};
pub use cli::Args;
pub use corpus::load_corpus;
pub use error::{Result, WordlistError};
pub use filter::{filter_noise, NoiseFilter};
pub use output::{export, Artifact};
pub use pipeline::{generate, Generated, Pipeline, PipelineConfig};
pub use tokenize::{tokenize, TermSet};
