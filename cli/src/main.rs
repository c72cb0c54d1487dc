//! Codegraph - validate and triage codegraph documents.
//!
//! This is the entry point for the `codegraph` binary.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use codegraph_cli::{init_logging, run, Cli, Exit};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = run(&cli.command, &mut stdout.lock(), &mut stderr.lock());

    match result {
        Ok(exit) => exit.into(),
        Err(e) => {
            eprintln!("{e:#}");
            Exit::Error.into()
        }
    }
}
