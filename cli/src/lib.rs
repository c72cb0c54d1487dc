//! Codegraph command line library.
//!
//! This crate provides the `codegraph` command surface:
//!
//! - `args`: command line definitions
//! - `commands`: `validate`, `triage` and `init`
//! - `logging`: terminal logger setup

mod args;
mod commands;
mod logging;

pub use args::{Cli, Command, InitArgs, TriageArgs, ValidateArgs};
pub use commands::scaffold::{scaffold, ScaffoldReport};
pub use logging::init_logging;

use std::io::Write;

/// Process exit status of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Command succeeded.
    Ok,
    /// Validation found violations.
    Fail,
    /// A required document is missing or unreadable.
    Error,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Ok => 0,
            Exit::Fail => 1,
            Exit::Error => 2,
        }
    }
}

impl From<Exit> for std::process::ExitCode {
    fn from(exit: Exit) -> Self {
        std::process::ExitCode::from(exit.code())
    }
}

/// Run one command, writing the report to `out` and failures to `err`.
pub fn run(command: &Command, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<Exit> {
    match command {
        Command::Validate(args) => commands::validate::run(args, out, err),
        Command::Triage(args) => commands::triage::run(args, out),
        Command::Init(args) => commands::scaffold::run(args, out),
    }
}
