use std::fmt::Write as _;

use super::Backend;
use crate::encoding::error::OpcodeError;
use crate::encoding::table::InstructionTable;

/// Validation-only mode: prints a short summary of the accepted model.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckBackend;

impl Backend for CheckBackend {
    fn name(&self) -> &'static str {
        "check"
    }

    fn emit(&self, table: &InstructionTable, out: &mut String) -> Result<(), OpcodeError> {
        table.verify()?;
        let pseudo = table.pseudo_count();
        let fields: Vec<&str> = table.fields_used().into_iter().map(|f| f.name()).collect();
        writeln!(out, "instructions: {}", table.len() - pseudo)?;
        writeln!(out, "pseudo: {pseudo}")?;
        writeln!(out, "fields: {}", fields.join(" "))?;
        writeln!(out, "sha256: {}", table.fingerprint_hex())?;
        Ok(())
    }
}
