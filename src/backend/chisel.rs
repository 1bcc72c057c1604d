use std::fmt::{self, Write as _};

use super::Backend;
use super::csr::{CAUSES, CSRS, CSRS32, rv32_csrs};
use crate::encoding::error::OpcodeError;
use crate::encoding::table::InstructionTable;

/// Scala objects for Chisel decoders: one `BitPat` per instruction plus cause and CSR ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChiselBackend;

impl Backend for ChiselBackend {
    fn name(&self) -> &'static str {
        "chisel"
    }

    fn emit(&self, table: &InstructionTable, out: &mut String) -> Result<(), OpcodeError> {
        writeln!(out, "/* Automatically generated by ise_opcodes */")?;
        writeln!(out, "object Instructions {{")?;
        for record in table {
            writeln!(
                out,
                "  def {:<18} = BitPat(\"b{}\")",
                record.macro_name(),
                record.encoding.bit_pattern()
            )?;
        }
        writeln!(out, "}}")?;

        writeln!(out, "object Causes {{")?;
        for cause in &CAUSES {
            writeln!(out, "  val {} = {:#x}", cause.identifier(), cause.code)?;
        }
        open_buffer(out, "all", "collection.mutable.ArrayBuffer[Int]()")?;
        for cause in &CAUSES {
            writeln!(out, "    res += {}", cause.identifier())?;
        }
        close_buffer(out)?;
        writeln!(out, "}}")?;

        writeln!(out, "object CSRs {{")?;
        for csr in rv32_csrs() {
            writeln!(out, "  val {} = {:#x}", csr.name, csr.number)?;
        }
        open_buffer(out, "all", "collection.mutable.ArrayBuffer[Int]()")?;
        for csr in &CSRS {
            writeln!(out, "    res += {}", csr.name)?;
        }
        close_buffer(out)?;
        open_buffer(out, "all32", "collection.mutable.ArrayBuffer(all:_*)")?;
        for csr in &CSRS32 {
            writeln!(out, "    res += {}", csr.name)?;
        }
        close_buffer(out)?;
        writeln!(out, "}}")?;
        Ok(())
    }
}

fn open_buffer(out: &mut String, name: &str, init: &str) -> fmt::Result {
    writeln!(out, "  val {name} = {{")?;
    writeln!(out, "    val res = {init}")
}

fn close_buffer(out: &mut String) -> fmt::Result {
    writeln!(out, "    res.toArray")?;
    writeln!(out, "  }}")
}
