//! Assembler support macros and opcode-table rows for the crypto extension.
//!
//! The macro block covers every field flagged [`FieldFlags::EXTENSION`](crate::encoding::registry::FieldFlags)
//! and is meant to be pasted into binutils' `include/opcode/riscv.h`; the rows that follow
//! belong in `opcodes/riscv-opc.c`.

use std::fmt::Write as _;

use super::Backend;
use crate::encoding::error::OpcodeError;
use crate::encoding::instruction::InstructionRecord;
use crate::encoding::registry::{FieldDescriptor, extension_fields};
use crate::encoding::table::InstructionTable;

/// ISA subset tag written into every opcode-table row.
const SUBSET: &str = "X";

#[derive(Debug, Clone, Copy, Default)]
pub struct BinutilsBackend;

impl Backend for BinutilsBackend {
    fn name(&self) -> &'static str {
        "binutils"
    }

    fn emit(&self, table: &InstructionTable, out: &mut String) -> Result<(), OpcodeError> {
        let mut macros: Vec<String> = extension_fields().flat_map(field_macros).collect();
        macros.sort();
        for line in &macros {
            writeln!(out, "{line}")?;
        }
        for record in table {
            writeln!(out, "{}", opcode_row(record)?)?;
        }
        Ok(())
    }
}

fn field_macros(descriptor: &FieldDescriptor) -> [String; 4] {
    let upper = descriptor.name.to_ascii_uppercase();
    let ones = "1".repeat(usize::from(descriptor.range.width()));
    [
        format!("#define OP_MASK_{upper} 0b{ones}"),
        format!("#define OP_SH_{upper} {}", descriptor.low()),
        format!("#define ENCODE_X_{upper}(X)  ((X &  OP_MASK_{upper}) << OP_SH_{upper})"),
        format!("#define EXTRACT_X_{upper}(X) ((X >> OP_SH_{upper})  & OP_MASK_{upper})"),
    ]
}

/// One `riscv_opcode` initializer; operand codes follow the field names in sorted order.
fn opcode_row(record: &InstructionRecord) -> Result<String, OpcodeError> {
    let mut descriptors: Vec<&FieldDescriptor> =
        record.fields.iter().map(|field| field.descriptor()).collect();
    descriptors.sort_unstable_by_key(|descriptor| descriptor.name);
    let codes = descriptors
        .iter()
        .map(|descriptor| {
            descriptor.display_code.ok_or_else(|| {
                OpcodeError::Backend(format!(
                    "{}: field {} has no assembler operand code",
                    record.name, descriptor.name
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?
        .join(",");
    let macro_name = record.macro_name();
    Ok(format!(
        "{{\"{name}\", \"{SUBSET}\", \"{codes}\", MATCH_{macro_name}, MASK_{macro_name}, match_opcode, 0}},",
        name = record.name
    ))
}
