//! Wordlist pipeline
//!
//! Drives one batch run: load the corpus, tokenize, filter noise, classify
//! and export. [`generate`] is the I/O-free core; [`Pipeline`] wraps it with
//! file access and console reporting.

use bytesize::ByteSize;
use colored::*;
use indicatif::ProgressBar;
use std::path::PathBuf;

use crate::classify::{classify, Classified};
use crate::cli::{Args, DEFAULT_INPUT};
use crate::corpus::{read_corpus_text, split_records, NameRecord};
use crate::error::{Result, WordlistError};
use crate::filter::{filter_noise_with_stats, NoiseFilter};
use crate::output::{export, render, Artifact, OutputNames, Wordlists};
use crate::progress::{
    create_spinner, print_bullet, print_header, print_info, print_success, RunStats,
};
use crate::tokenize::{tokenize_with_stats, TermSet, DEFAULT_DELIMITER};

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub delimiter: char,
    pub noise: NoiseFilter,
    pub names: OutputNames,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub show_stats: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            delimiter: DEFAULT_DELIMITER,
            noise: NoiseFilter::default(),
            names: OutputNames::default(),
            dry_run: false,
            quiet: false,
            verbose: false,
            show_stats: false,
        }
    }
}

impl PipelineConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Self {
            input: args.input.clone(),
            output_dir: args.get_output_dir(),
            delimiter: args.delimiter,
            noise: NoiseFilter::new(args.ratio_threshold, args.length_threshold)?,
            names: OutputNames {
                terms: args.terms_name.clone(),
                vars: args.vars_name.clone(),
                consts: args.const_name.clone(),
            },
            dry_run: args.dry_run,
            quiet: args.quiet,
            verbose: args.verbose,
            show_stats: args.stats,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject output names that are empty or would overwrite each other
    pub fn validate(&self) -> Result<()> {
        for artifact in Artifact::ALL {
            if self.names.get(artifact).trim().is_empty() {
                return Err(WordlistError::InvalidConfig(format!(
                    "output name for {} list is empty",
                    artifact
                )));
            }
        }

        let [terms, vars, consts] = Artifact::ALL.map(|a| self.names.get(a));
        if terms == vars || terms == consts || vars == consts {
            return Err(WordlistError::InvalidConfig(
                "output names for the three lists must differ".to_string(),
            ));
        }

        Ok(())
    }
}

/// Wordlists produced by one run
#[derive(Debug, Clone, Default)]
pub struct Generated {
    /// Every term that survived the noise filter
    pub terms: TermSet,
    pub classified: Classified,
}

impl Generated {
    pub fn wordlists(&self) -> Wordlists<'_> {
        Wordlists::new(&self.terms, &self.classified)
    }

    /// Text of one wordlist as it is written to disk
    pub fn render(&self, artifact: Artifact) -> String {
        render(self.wordlists().get(artifact).iter())
    }
}

/// Run tokenize, filter and classify over in-memory records
pub fn generate<I, S>(records: I, delimiter: char, noise: &NoiseFilter) -> Generated
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    generate_with_stats(records, delimiter, noise, &mut RunStats::new())
}

/// [`generate`], recording stage counters into `stats`
pub fn generate_with_stats<I, S>(
    records: I,
    delimiter: char,
    noise: &NoiseFilter,
    stats: &mut RunStats,
) -> Generated
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (terms, tokenize_stats) = tokenize_with_stats(records, delimiter);
    stats.tokenize = tokenize_stats;
    stats.unique_terms = terms.len() as u64;

    let (terms, filter_stats) = filter_noise_with_stats(terms, noise);
    stats.filter = filter_stats;

    let classified = classify(&terms);
    stats.variable_terms = classified.variable.len() as u64;
    stats.constant_terms = classified.constant.len() as u64;

    Generated { terms, classified }
}

/// Main pipeline
pub struct Pipeline {
    config: PipelineConfig,
    stats: RunStats,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            stats: RunStats::new(),
        }
    }

    /// Load, process and export the corpus named in the configuration
    pub fn run(&mut self) -> Result<Generated> {
        let quiet = self.config.quiet;

        if !quiet {
            print_header("Loading corpus...");
        }
        let spinner = create_spinner("Reading names...", quiet);
        let records = self.load_records(&spinner)?;

        spinner.set_message("Building wordlists...");
        let generated = generate_with_stats(
            &records,
            self.config.delimiter,
            &self.config.noise,
            &mut self.stats,
        );
        spinner.finish_and_clear();

        if !quiet {
            print_info(&format!(
                "{} names ({}) from {:?}",
                records.len(),
                ByteSize(self.stats.corpus_bytes),
                self.config.input
            ));
            print_info(&format!(
                "{} terms kept, {} dropped as noise",
                generated.terms.len(),
                self.stats.filter.numeric_dropped
            ));
        }

        if self.config.dry_run {
            self.dry_run_report(&generated);
        } else {
            self.export(&generated)?;
        }

        if self.config.show_stats && !quiet {
            self.stats.print_summary();
        }

        Ok(generated)
    }

    /// Read and split the corpus, clearing the spinner if that fails
    fn load_records(&mut self, spinner: &ProgressBar) -> Result<Vec<NameRecord>> {
        let text = read_corpus_text(&self.config.input).map_err(|e| {
            spinner.finish_and_clear();
            e
        })?;
        self.stats.corpus_bytes = text.len() as u64;
        Ok(split_records(&text))
    }

    fn export(&self, generated: &Generated) -> Result<()> {
        if !self.config.quiet {
            print_header("Writing wordlists...");
        }

        let exported = export(
            &self.config.output_dir,
            &self.config.names,
            &generated.wordlists(),
        )?;

        if !self.config.quiet {
            print_success("Output files created:");
            for (artifact, written) in &exported {
                print_bullet(&format!(
                    "{:<6} {:?} ({} terms, {})",
                    artifact.to_string(),
                    written.path,
                    written.terms,
                    ByteSize(written.bytes)
                ));
            }
        }

        Ok(())
    }

    fn dry_run_report(&self, generated: &Generated) {
        if self.config.quiet {
            return;
        }

        print_header("DRY RUN - No files will be written");
        println!("\n  {} Output configuration:", "▶".green());
        print_bullet(&format!("Output directory: {:?}", self.config.output_dir));

        let lists = generated.wordlists();
        for artifact in Artifact::ALL {
            print_bullet(&format!(
                "{} ({} terms)",
                self.config.names.get(artifact),
                lists.get(artifact).len()
            ));
        }
    }

    /// Get processing statistics
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}
