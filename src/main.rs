mod errors;
mod generators;
mod lexer;
mod line;
mod source;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use crate::errors::SrcgenError;
use crate::line::TemplateKind;
use crate::source::{
    DEFAULT_LINES, DEFAULT_OUTPUT, SourceRequest, SourceSummary, SourceWriter, verify_source_file,
};

/// Write a file of random pseudo-code lines for lexer benchmarks.
#[derive(Parser, Debug)]
#[command(name = "srcgen", version)]
struct Args {
    /// Number of lines to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_LINES)]
    lines: usize,

    /// Seed for reproducible output (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output file, overwritten if it exists
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Do not print the summary after writing
    #[arg(short, long)]
    quiet: bool,

    /// Lex the written file and fail if any line does not tokenize
    #[arg(long)]
    verify: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let request = SourceRequest {
        lines: args.lines,
        seed: args.seed,
        output: args.output,
    };

    let mut writer = SourceWriter::new(request);
    match run(&mut writer, args.verify) {
        Ok(summary) => {
            if !args.quiet {
                let shares: Vec<String> = TemplateKind::ALL
                    .iter()
                    .map(|kind| format!("{} {}", kind.name(), summary.count(*kind)))
                    .collect();
                println!(
                    "Wrote {} lines to {} ({})",
                    summary.lines,
                    writer.output().display(),
                    shares.join(", ")
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(io) = e.io_error() {
                debug!("I/O error kind: {:?}", io.kind());
            }
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(writer: &mut SourceWriter, verify: bool) -> Result<SourceSummary, SrcgenError> {
    let summary = writer.write_source_file()?;

    if verify {
        let report = verify_source_file(writer.output())?;
        info!(
            "{} lexes cleanly: {} tokens, largest integer {}",
            writer.output().display(),
            report.tokens,
            report.largest_integer
        );
    }

    Ok(summary)
}
