//! jargon-wordlist - symbol-name wordlist generator
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use jargon_wordlist::cli::Args;
use jargon_wordlist::pipeline::{Pipeline, PipelineConfig};
use jargon_wordlist::progress::{print_banner, print_error, print_header, print_info};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet && std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.quiet {
        print_banner();
    }

    let config = PipelineConfig::from_args(&args)?;

    if !args.quiet && args.verbose {
        print_config(&config);
    }

    let mut pipeline = Pipeline::new(config);
    pipeline.run()?;

    Ok(())
}

/// Print configuration summary
fn print_config(config: &PipelineConfig) {
    print_header("Configuration");

    print_info(&format!("Input:            {:?}", config.input));
    print_info(&format!("Output dir:       {:?}", config.output_dir));
    print_info(&format!("Delimiter:        {:?}", config.delimiter));
    print_info(&format!("Ratio threshold:  {}", config.noise.ratio_threshold));
    print_info(&format!("Length threshold: {}", config.noise.length_threshold));
    print_info(&format!(
        "Outputs:          {}, {}, {}",
        config.names.terms, config.names.vars, config.names.consts
    ));
    print_info(&format!("Dry run:          {}", config.dry_run));
}
