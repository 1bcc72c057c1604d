use std::fmt::Write as _;

use super::Backend;
use crate::encoding::error::OpcodeError;
use crate::encoding::instruction::InstructionRecord;
use crate::encoding::registry::Field;
use crate::encoding::table::InstructionTable;

/// `encode` lookup for the Go assembler's `cmd/internal/obj/riscv` package.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoBackend;

impl Backend for GoBackend {
    fn name(&self) -> &'static str {
        "go"
    }

    fn emit(&self, table: &InstructionTable, out: &mut String) -> Result<(), OpcodeError> {
        out.push_str(PRELUDE);
        for record in table {
            let inst = GoInst::from_record(record);
            writeln!(out, "\tcase A{}:", record.name.replace('.', "").to_ascii_uppercase())?;
            writeln!(
                out,
                "\t\treturn &inst{{{:#x}, {:#x}, {:#x}, {}, {:#x}}}, true",
                inst.opcode, inst.funct3, inst.rs2, inst.csr, inst.funct7
            )?;
        }
        writeln!(out, "\t}}")?;
        writeln!(out, "\treturn nil, false")?;
        writeln!(out, "}}")?;
        Ok(())
    }
}

const PRELUDE: &str = "// Automatically generated by ise_opcodes

package riscv

import \"cmd/internal/obj\"

type inst struct {
\topcode uint32
\tfunct3 uint32
\trs2    uint32
\tcsr    int64
\tfunct7 uint32
}

func encode(a obj.As) (i *inst, ok bool) {
\tswitch a {
";

/// Fixed selector fields pulled out of a match value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GoInst {
    opcode: u32,
    funct3: u32,
    rs2: u32,
    /// `imm12` read as a signed 12-bit CSR number.
    csr: i64,
    funct7: u32,
}

impl GoInst {
    fn from_record(record: &InstructionRecord) -> Self {
        let word = record.match_value();
        let csr_range = Field::Imm12.range();
        Self {
            opcode: Field::Opcode.range().extract(word),
            funct3: Field::Funct3.range().extract(word),
            rs2: Field::Rs2.range().extract(word),
            csr: sign_extend(csr_range.extract(word), u32::from(csr_range.width())),
            funct7: Field::Funct7.range().extract(word),
        }
    }
}

fn sign_extend(value: u32, width: u32) -> i64 {
    let value = i64::from(value);
    if value < 1 << (width - 1) {
        value
    } else {
        value - (1 << width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::render;
    use crate::loader::opcodes::compile_str;

    #[test]
    fn sign_extension_wraps_the_upper_half() {
        assert_eq!(sign_extend(0x7FF, 12), 2047);
        assert_eq!(sign_extend(0x800, 12), -2048);
        assert_eq!(sign_extend(0xFFF, 12), -1);
    }

    #[test]
    fn cases_carry_selector_fields() {
        let table = compile_str(
            "\
sub rd rs1 rs2 31..25=32 14..12=0 6..2=0x0C 1..0=3
ebreak 11..7=0 19..15=0 31..20=0x001 14..12=0 6..2=0x1C 1..0=3
sfence.vm rs1 31..20=0x104 14..7=0 6..2=0x1C 1..0=3
",
        )
        .expect("listing compiles");
        let out = render(&GoBackend, &table).expect("render");
        assert!(out.starts_with("// Automatically generated by ise_opcodes\n\npackage riscv\n"));
        assert!(out.contains("\tcase ASUB:\n\t\treturn &inst{0x33, 0x0, 0x0, 1024, 0x20}, true\n"));
        assert!(out.contains("\tcase AEBREAK:\n\t\treturn &inst{0x73, 0x0, 0x1, 1, 0x0}, true\n"));
        assert!(out.contains("\tcase ASFENCEVM:\n\t\treturn &inst{0x73, 0x0, 0x4, 260, 0x8}, true\n"));
        assert!(out.ends_with("\t}\n\treturn nil, false\n}\n"));
    }
}
