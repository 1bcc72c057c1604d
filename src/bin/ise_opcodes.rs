//! Opcode listing compiler.
//!
//! Reads a listing from FILE or standard input, validates it, and prints the artifact for the
//! selected mode on standard output. Diagnostics and logs go to standard error; set `RUST_LOG`
//! (default `warn`) to see more.

use std::io::Write;

use clap::Parser;
use ise_opcodes::cli::{CliArgs, exit_code, usage_error};
use ise_opcodes::encoding::OpcodeError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        // --help and --version print to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => fail(&usage_error(err)),
    };
    match args.run() {
        Ok(artifact) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(artifact.as_bytes()).and_then(|()| stdout.flush()) {
                eprintln!("error: failed to write output: {err}");
                std::process::exit(1);
            }
        }
        Err(err) => fail(&err),
    }
}

fn fail(err: &OpcodeError) -> ! {
    let diagnostics = err.diagnostics();
    if let OpcodeError::Usage(rendered) = err {
        eprint!("{rendered}");
    } else if diagnostics.is_empty() {
        eprintln!("error: {err}");
    }
    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic.format_human());
    }
    std::process::exit(exit_code(err));
}
