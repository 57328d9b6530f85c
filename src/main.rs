//! filter_wordlist - curates a puzzle dictionary from a raw word list
//!
//! Main entry point for the command-line application.

use clap::error::ErrorKind;
use clap::Parser;
use std::process;

use filter_wordlist::cli::Args;
use filter_wordlist::processor::{Processor, ProcessorConfig};
use filter_wordlist::progress::{print_error, print_header, print_info};

fn main() {
    // Parse command-line arguments. A missing wordlist path is a usage
    // error: report it on stdout and exit 1 without touching any file.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("{}", e.render());
            process::exit(1);
        }
    };

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.verbose && !args.quiet {
        print_config(&args);
    }

    let config = ProcessorConfig::from_args(&args);

    let mut processor = Processor::new(config);
    processor.process(&args.input)?;

    Ok(())
}

/// Print configuration summary
fn print_config(args: &Args) {
    print_header("Configuration");

    print_info(&format!("Input:   {:?}", args.input));
    print_info(&format!("Output:  {:?}", args.output));
    print_info(&format!("Unique:  {}", args.unique));
}
