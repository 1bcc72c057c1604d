//! Command-line surface of the `ise_opcodes` binary.
//!
//! The output mode is a positional argument that keeps the single-dash spelling of the
//! historical generator (`-c`, `-chisel`, `-go`, `-check`).

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::backend::{Mode, render};
use crate::encoding::error::OpcodeError;
use crate::loader::opcodes::{Compilation, CompileOptions, ErrorMode, OpcodeLoader};

/// Exit status for a rejected listing or a failed render.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for an invalid command line.
pub const EXIT_USAGE: i32 = 2;

/// Input path that selects standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ise_opcodes")]
#[command(version, about = "Compile an opcode listing into encoding tables", long_about = None)]
pub struct CliArgs {
    /// Output mode: -c, -chisel, -go or -check
    #[arg(value_name = "MODE", allow_hyphen_values = true, value_parser = parse_mode)]
    pub mode: Mode,

    /// Report every failing line instead of stopping at the first
    #[arg(long)]
    pub all_errors: bool,

    /// Opcode listing; standard input when absent or `-`
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl CliArgs {
    /// Parses a full command line, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Self, OpcodeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(usage_error)
    }

    pub fn options(&self) -> CompileOptions {
        CompileOptions {
            error_mode: if self.all_errors {
                ErrorMode::CollectAll
            } else {
                ErrorMode::FailFast
            },
        }
    }

    /// Listing file to read, or `None` for standard input.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != STDIN_PATH)
    }

    /// Compiles the selected listing and renders it with the selected backend.
    pub fn run(&self) -> Result<String, OpcodeError> {
        let loader = OpcodeLoader::with_options(self.options());
        let Compilation { table, warnings } = match self.input_path() {
            Some(path) => loader.load_file(path)?,
            None => loader.load_reader("<stdin>", io::stdin().lock())?,
        };
        tracing::debug!(warnings = warnings.len(), mode = %self.mode, "listing accepted");
        render(self.mode.backend().as_ref(), &table)
    }
}

fn parse_mode(flag: &str) -> Result<Mode, String> {
    Mode::from_flag(flag).ok_or_else(|| {
        let known: Vec<_> = Mode::ALL.iter().map(|mode| mode.flag()).collect();
        format!("expected one of {}", known.join(", "))
    })
}

/// Converts a clap failure into the usage error the binary reports with [`EXIT_USAGE`].
pub fn usage_error(err: clap::Error) -> OpcodeError {
    OpcodeError::Usage(err.render().to_string())
}

/// Exit status that matches `err`.
pub fn exit_code(err: &OpcodeError) -> i32 {
    match err {
        OpcodeError::Usage(_) => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}
