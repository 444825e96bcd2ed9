//! Cly command-line driver.

use std::process::ExitCode;

use clyc::commands::{explain_error, lex_file, parse_file};
use clyc::{config, DriverError};

fn main() -> ExitCode {
    clyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let result = match command {
        "parse" => config::parse_options(&args[2..]).and_then(|invocation| parse_file(&invocation)),
        "lex" => match args.get(2) {
            Some(path) => lex_file(path),
            None => Err(DriverError::usage("Usage: cly lex <file>")),
        },
        "explain" | "--explain" => match args.get(2) {
            Some(code) => explain_error(code).map(|text| {
                println!("{text}");
                false
            }),
            None => Err(DriverError::usage("Usage: cly explain <code>")),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "version" | "--version" | "-V" => {
            println!("cly {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        _ => Err(DriverError::usage(format!("unknown command: {command}"))),
    };

    match result {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(err @ DriverError::Usage(_)) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn print_usage() {
    eprintln!("Usage: cly <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  parse <file>      Parse a file and print syntax trees");
    eprintln!("  lex <file>        Print the token stream of a file");
    eprintln!("  explain <code>    Describe a diagnostic code (e.g., E1002)");
    eprintln!("  help              Show this help message");
    eprintln!("  version           Show version information");
    eprintln!();
    eprintln!("Parse options:");
    eprintln!("  --unit=line|file              One unit per non-blank line (default) or per file");
    eprintln!("  --format=text|json            Output format (default: text)");
    eprintln!("  --color=auto|always|never     Color diagnostics (default: auto)");
    eprintln!("  --no-parallel                 Parse units on one thread");
    eprintln!();
    eprintln!("Use `-` as <file> to read standard input.");
    eprintln!("Set CLY_LOG (or RUST_LOG) to enable tracing, e.g. CLY_LOG=cly_parse=debug.");
}
