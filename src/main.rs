//! Command line front end: parses a source file and prints the canonical
//! rendering of the program, or its diagnostics.

use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use monkey::{format_error, lexer::lexer::tokenize, parser::parser::parse};

#[derive(Parser, Debug)]
#[command(name = "monkey", version, about = "Parse a source file and print its syntax tree")]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", cli.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    if cli.tokens {
        for token in tokenize(source.clone(), Some(file_name.clone())) {
            println!("{}", token);
        }
    }

    let start = Instant::now();
    let (program, errors) = parse(source.clone(), Some(file_name));
    tracing::info!(elapsed = ?start.elapsed(), statements = program.len(), "parsed");

    if !errors.is_empty() {
        for error in &errors {
            eprint!("{}", format_error(error, &source));
        }
        tracing::warn!(diagnostics = errors.len(), "parse failed");
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}
