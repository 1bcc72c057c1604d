//! Backend adapters that project a validated [`InstructionTable`] into downstream artifacts.
//!
//! Renderers only read the table and the field registry; every bit-level invariant has
//! already been enforced by the loader, so they never re-check encodings.

pub mod binutils;
pub mod c_header;
pub mod check;
pub mod chisel;
pub mod csr;
pub mod go;

use std::fmt;

use crate::encoding::error::OpcodeError;
use crate::encoding::table::InstructionTable;

pub use binutils::BinutilsBackend;
pub use c_header::CHeaderBackend;
pub use check::CheckBackend;
pub use chisel::ChiselBackend;
pub use go::GoBackend;

/// Renders a validated table into one artifact format.
pub trait Backend {
    fn name(&self) -> &'static str;

    /// Appends the rendered artifact to `out`.
    fn emit(&self, table: &InstructionTable, out: &mut String) -> Result<(), OpcodeError>;
}

/// Output formats selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    CHeader,
    Chisel,
    Go,
    Check,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::CHeader, Mode::Chisel, Mode::Go, Mode::Check];

    pub fn flag(self) -> &'static str {
        match self {
            Mode::CHeader => "-c",
            Mode::Chisel => "-chisel",
            Mode::Go => "-go",
            Mode::Check => "-check",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Mode> {
        Mode::ALL.into_iter().find(|mode| mode.flag() == flag)
    }

    pub fn backend(self) -> Box<dyn Backend> {
        match self {
            Mode::CHeader => Box::new(CHeaderBackend),
            Mode::Chisel => Box::new(ChiselBackend),
            Mode::Go => Box::new(GoBackend),
            Mode::Check => Box::new(CheckBackend),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// Renders `table` with `backend` into a fresh string.
pub fn render(backend: &dyn Backend, table: &InstructionTable) -> Result<String, OpcodeError> {
    let mut out = String::new();
    backend.emit(table, &mut out)?;
    tracing::debug!(backend = backend.name(), bytes = out.len(), "rendered artifact");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_round_trip_through_modes() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_flag(mode.flag()), Some(mode));
        }
        assert_eq!(Mode::from_flag("-tex"), None);
        assert_eq!(Mode::from_flag("c"), None);
    }

    #[test]
    fn each_mode_selects_its_backend() {
        let names: Vec<_> = Mode::ALL.iter().map(|mode| mode.backend().name()).collect();
        assert_eq!(names, ["c-header", "chisel", "go", "check"]);
    }

    struct Unprintable;

    impl fmt::Display for Unprintable {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    struct FailingBackend;

    impl Backend for FailingBackend {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn emit(&self, _: &InstructionTable, out: &mut String) -> Result<(), OpcodeError> {
            use std::fmt::Write as _;
            writeln!(out, "header")?;
            writeln!(out, "{}", Unprintable)?;
            writeln!(out, "never reached")?;
            Ok(())
        }
    }

    #[test]
    fn write_failures_abort_the_render() {
        let err = render(&FailingBackend, &InstructionTable::new()).unwrap_err();
        assert!(matches!(err, OpcodeError::Backend(_)), "{err:?}");
    }
}
