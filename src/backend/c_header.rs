use std::fmt::Write as _;

use super::binutils::BinutilsBackend;
use super::csr::{CAUSES, rv32_csrs};
use super::Backend;
use crate::encoding::error::OpcodeError;
use crate::encoding::table::InstructionTable;

/// `MATCH_*`/`MASK_*` header with CSR and trap cause tables, followed by the binutils extras.
#[derive(Debug, Clone, Copy, Default)]
pub struct CHeaderBackend;

impl Backend for CHeaderBackend {
    fn name(&self) -> &'static str {
        "c-header"
    }

    fn emit(&self, table: &InstructionTable, out: &mut String) -> Result<(), OpcodeError> {
        writeln!(out, "/* Automatically generated by ise_opcodes.  */")?;
        writeln!(out, "#ifndef RISCV_ENCODING_H")?;
        writeln!(out, "#define RISCV_ENCODING_H")?;
        for record in table {
            let name = record.macro_name();
            writeln!(out, "#define MATCH_{name} {:#x}", record.match_value())?;
            writeln!(out, "#define MASK_{name}  {:#x}", record.mask())?;
        }
        for csr in rv32_csrs() {
            writeln!(out, "#define CSR_{} {:#x}", csr.macro_name(), csr.number)?;
        }
        for cause in &CAUSES {
            writeln!(out, "#define CAUSE_{} {:#x}", cause.macro_name(), cause.code)?;
        }
        writeln!(out, "#endif")?;

        writeln!(out, "#ifdef DECLARE_INSN")?;
        for record in table {
            let ident = record.name.replace('.', "_");
            let macro_name = record.macro_name();
            writeln!(
                out,
                "DECLARE_INSN({ident}, MATCH_{macro_name}, MASK_{macro_name})"
            )?;
        }
        writeln!(out, "#endif")?;

        writeln!(out, "#ifdef DECLARE_CSR")?;
        for csr in rv32_csrs() {
            writeln!(out, "DECLARE_CSR({}, CSR_{})", csr.name, csr.macro_name())?;
        }
        writeln!(out, "#endif")?;

        writeln!(out, "#ifdef DECLARE_CAUSE")?;
        for cause in &CAUSES {
            writeln!(
                out,
                "DECLARE_CAUSE(\"{}\", CAUSE_{})",
                cause.name,
                cause.macro_name()
            )?;
        }
        writeln!(out, "#endif")?;

        BinutilsBackend.emit(table, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::render;
    use crate::loader::opcodes::compile_str;

    const LISTING: &str = "\
xc.gpr2xcr crd rs1 31..20=0 14..12=0 11=0 6..0=0x2B
xc.xcr2gpr rd crs1 31..20=1 19=0 14..12=0 6..0=0x2B
";

    #[test]
    fn header_defines_match_mask_and_tables() {
        let table = compile_str(LISTING).expect("listing compiles");
        let out = render(&CHeaderBackend, &table).expect("render");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "#ifndef RISCV_ENCODING_H");
        assert_eq!(lines[3], "#define MATCH_XC_GPR2XCR 0x2b");
        assert_eq!(lines[4], "#define MASK_XC_GPR2XCR  0xfff0787f");
        assert_eq!(lines[5], "#define MATCH_XC_XCR2GPR 0x10002b");
        assert!(out.contains("#define CSR_MSTATUS 0x300\n"));
        assert!(out.contains("#define CSR_CYCLEH 0xc80\n"));
        assert!(out.contains("#define CAUSE_STORE_PAGE_FAULT 0xf\n"));
        assert!(out.contains("DECLARE_INSN(xc_gpr2xcr, MATCH_XC_GPR2XCR, MASK_XC_GPR2XCR)\n"));
        assert!(out.contains("DECLARE_CSR(fflags, CSR_FFLAGS)\n"));
        assert!(out.contains("DECLARE_CAUSE(\"misaligned fetch\", CAUSE_MISALIGNED_FETCH)\n"));
    }

    #[test]
    fn binutils_extras_follow_the_header() {
        let table = compile_str(LISTING).expect("listing compiles");
        let out = render(&CHeaderBackend, &table).expect("render");
        let cause_block = out.find("#ifdef DECLARE_CAUSE").expect("cause block");
        let extras = out.find("#define OP_MASK_").expect("binutils extras");
        assert!(extras > cause_block);
        assert!(out.ends_with("match_opcode, 0},\n"));
    }
}
