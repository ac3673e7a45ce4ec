use anyhow::{Context, Result};
use caseconv::batch::{self, BatchEntry};
use caseconv::Case;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "caseconv", about = "Convert identifiers between naming conventions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert inputs to camelCase
    Camel(InputArgs),

    /// Convert inputs to kebab-case
    Kebab(InputArgs),

    /// Convert inputs to dot.case
    Dot(InputArgs),

    /// Convert inputs to the case given with --to
    Convert {
        /// Target case
        #[arg(short, long, value_enum)]
        to: Case,

        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Convert every value of a JSON array file and print a JSON report
    Batch {
        /// Path to a JSON file holding an array of values
        file: PathBuf,

        /// Target case
        #[arg(short, long, value_enum)]
        to: Case,

        /// Pretty-print the report
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Strings to convert, each one separately
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Print a JSON array of results instead of one line per input
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let all_ok = match cli.command {
        Commands::Camel(args) => run_inputs(Case::Camel, &args)?,
        Commands::Kebab(args) => run_inputs(Case::Kebab, &args)?,
        Commands::Dot(args) => run_inputs(Case::Dot, &args)?,
        Commands::Convert { to, inputs } => run_inputs(to, &inputs)?,
        Commands::Batch { file, to, pretty } => {
            let entries = batch::convert_file(to, &file)?;
            print_json(&entries, pretty)?;
            entries.iter().all(BatchEntry::is_ok)
        }
    };

    if !all_ok {
        std::process::exit(1);
    }
    Ok(())
}

fn run_inputs(case: Case, args: &InputArgs) -> Result<bool> {
    let entries = batch::convert_strs(case, &args.inputs);

    if args.json {
        print_json(&entries, false)?;
    } else {
        for entry in &entries {
            match (&entry.output, &entry.error) {
                (Some(output), _) => println!("{}", output),
                (None, Some(error)) => eprintln!("{}: {}", entry.input, error),
                (None, None) => {}
            }
        }
    }

    Ok(entries.iter().all(BatchEntry::is_ok))
}

fn print_json(entries: &[BatchEntry], pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(entries)
    } else {
        serde_json::to_string(entries)
    }
    .context("Failed to serialize conversion report")?;
    println!("{}", out);
    Ok(())
}
