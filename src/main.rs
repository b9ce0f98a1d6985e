use std::{fs, process::ExitCode};

use clap::Parser;
use quip::Session;
use tracing::{Level, debug};

/// quip is a small scripting language with integers, floats, booleans,
/// strings, `print`, `if`, `while` and `input()`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quip to treat every argument as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Evaluates every script as a single expression and prints its value.
    #[arg(short, long)]
    expression: bool,

    /// Raises the log level. May be given up to three times.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Scripts to run, in order, in one session.
    #[arg(required = true)]
    scripts: Vec<String>,
}

const fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_max_level(log_level(args.verbose))
                             .with_writer(std::io::stderr)
                             .init();

    let mut session = Session::new();
    let mut failed = false;

    for contents in &args.scripts {
        let script = if args.file {
            match fs::read_to_string(contents) {
                Ok(script) => script,
                Err(e) => {
                    eprintln!("Failed to read the input file '{contents}': {e}");
                    failed = true;
                    continue;
                },
            }
        } else {
            contents.clone()
        };

        debug!(script = %contents, "running script");

        let outcome = if args.expression {
            session.evaluate(&script).map(|value| println!("{value}"))
        } else {
            session.run(&script).map(|_| ())
        };

        if let Err(e) = outcome {
            eprintln!("{e}");
            failed = true;
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
