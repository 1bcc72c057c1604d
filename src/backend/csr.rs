//! Control/status register and trap cause tables shared by the C header and Chisel renderers.

/// A named control/status register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Csr {
    pub number: u16,
    pub name: &'static str,
}

impl Csr {
    const fn new(number: u16, name: &'static str) -> Self {
        Self { number, name }
    }

    /// `CSR_<NAME>` suffix.
    pub fn macro_name(&self) -> String {
        self.name.to_ascii_uppercase()
    }
}

/// A synchronous trap cause code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrapCause {
    pub code: u8,
    pub name: &'static str,
}

impl TrapCause {
    const fn new(code: u8, name: &'static str) -> Self {
        Self { code, name }
    }

    /// `CAUSE_<NAME>` suffix: upper case, spaces replaced by `_`.
    pub fn macro_name(&self) -> String {
        self.name.replace(' ', "_").to_ascii_uppercase()
    }

    /// Lower-case identifier used by the Chisel object.
    pub fn identifier(&self) -> String {
        self.name.replace(' ', "_").to_ascii_lowercase()
    }
}

pub static CAUSES: [TrapCause; 15] = [
    TrapCause::new(0x00, "misaligned fetch"),
    TrapCause::new(0x01, "fetch access"),
    TrapCause::new(0x02, "illegal instruction"),
    TrapCause::new(0x03, "breakpoint"),
    TrapCause::new(0x04, "misaligned load"),
    TrapCause::new(0x05, "load access"),
    TrapCause::new(0x06, "misaligned store"),
    TrapCause::new(0x07, "store access"),
    TrapCause::new(0x08, "user_ecall"),
    TrapCause::new(0x09, "supervisor_ecall"),
    TrapCause::new(0x0a, "hypervisor_ecall"),
    TrapCause::new(0x0b, "machine_ecall"),
    TrapCause::new(0x0c, "fetch page fault"),
    TrapCause::new(0x0d, "load page fault"),
    TrapCause::new(0x0f, "store page fault"),
];

pub static CSRS: [Csr; 148] = [
    // Standard User R/W
    Csr::new(0x001, "fflags"),
    Csr::new(0x002, "frm"),
    Csr::new(0x003, "fcsr"),

    // Standard User RO
    Csr::new(0xc00, "cycle"),
    Csr::new(0xc01, "time"),
    Csr::new(0xc02, "instret"),
    Csr::new(0xc03, "hpmcounter3"),
    Csr::new(0xc04, "hpmcounter4"),
    Csr::new(0xc05, "hpmcounter5"),
    Csr::new(0xc06, "hpmcounter6"),
    Csr::new(0xc07, "hpmcounter7"),
    Csr::new(0xc08, "hpmcounter8"),
    Csr::new(0xc09, "hpmcounter9"),
    Csr::new(0xc0a, "hpmcounter10"),
    Csr::new(0xc0b, "hpmcounter11"),
    Csr::new(0xc0c, "hpmcounter12"),
    Csr::new(0xc0d, "hpmcounter13"),
    Csr::new(0xc0e, "hpmcounter14"),
    Csr::new(0xc0f, "hpmcounter15"),
    Csr::new(0xc10, "hpmcounter16"),
    Csr::new(0xc11, "hpmcounter17"),
    Csr::new(0xc12, "hpmcounter18"),
    Csr::new(0xc13, "hpmcounter19"),
    Csr::new(0xc14, "hpmcounter20"),
    Csr::new(0xc15, "hpmcounter21"),
    Csr::new(0xc16, "hpmcounter22"),
    Csr::new(0xc17, "hpmcounter23"),
    Csr::new(0xc18, "hpmcounter24"),
    Csr::new(0xc19, "hpmcounter25"),
    Csr::new(0xc1a, "hpmcounter26"),
    Csr::new(0xc1b, "hpmcounter27"),
    Csr::new(0xc1c, "hpmcounter28"),
    Csr::new(0xc1d, "hpmcounter29"),
    Csr::new(0xc1e, "hpmcounter30"),
    Csr::new(0xc1f, "hpmcounter31"),

    // Standard Supervisor R/W
    Csr::new(0x100, "sstatus"),
    Csr::new(0x104, "sie"),
    Csr::new(0x105, "stvec"),
    Csr::new(0x106, "scounteren"),
    Csr::new(0x140, "sscratch"),
    Csr::new(0x141, "sepc"),
    Csr::new(0x142, "scause"),
    Csr::new(0x143, "stval"),
    Csr::new(0x144, "sip"),
    Csr::new(0x180, "satp"),

    // Standard Machine R/W
    Csr::new(0x300, "mstatus"),
    Csr::new(0x301, "misa"),
    Csr::new(0x302, "medeleg"),
    Csr::new(0x303, "mideleg"),
    Csr::new(0x304, "mie"),
    Csr::new(0x305, "mtvec"),
    Csr::new(0x306, "mcounteren"),
    Csr::new(0x340, "mscratch"),
    Csr::new(0x341, "mepc"),
    Csr::new(0x342, "mcause"),
    Csr::new(0x343, "mtval"),
    Csr::new(0x344, "mip"),
    Csr::new(0x3a0, "pmpcfg0"),
    Csr::new(0x3a1, "pmpcfg1"),
    Csr::new(0x3a2, "pmpcfg2"),
    Csr::new(0x3a3, "pmpcfg3"),
    Csr::new(0x3b0, "pmpaddr0"),
    Csr::new(0x3b1, "pmpaddr1"),
    Csr::new(0x3b2, "pmpaddr2"),
    Csr::new(0x3b3, "pmpaddr3"),
    Csr::new(0x3b4, "pmpaddr4"),
    Csr::new(0x3b5, "pmpaddr5"),
    Csr::new(0x3b6, "pmpaddr6"),
    Csr::new(0x3b7, "pmpaddr7"),
    Csr::new(0x3b8, "pmpaddr8"),
    Csr::new(0x3b9, "pmpaddr9"),
    Csr::new(0x3ba, "pmpaddr10"),
    Csr::new(0x3bb, "pmpaddr11"),
    Csr::new(0x3bc, "pmpaddr12"),
    Csr::new(0x3bd, "pmpaddr13"),
    Csr::new(0x3be, "pmpaddr14"),
    Csr::new(0x3bf, "pmpaddr15"),
    Csr::new(0x7a0, "tselect"),
    Csr::new(0x7a1, "tdata1"),
    Csr::new(0x7a2, "tdata2"),
    Csr::new(0x7a3, "tdata3"),
    Csr::new(0x7b0, "dcsr"),
    Csr::new(0x7b1, "dpc"),
    Csr::new(0x7b2, "dscratch"),
    Csr::new(0xb00, "mcycle"),
    Csr::new(0xb02, "minstret"),
    Csr::new(0xb03, "mhpmcounter3"),
    Csr::new(0xb04, "mhpmcounter4"),
    Csr::new(0xb05, "mhpmcounter5"),
    Csr::new(0xb06, "mhpmcounter6"),
    Csr::new(0xb07, "mhpmcounter7"),
    Csr::new(0xb08, "mhpmcounter8"),
    Csr::new(0xb09, "mhpmcounter9"),
    Csr::new(0xb0a, "mhpmcounter10"),
    Csr::new(0xb0b, "mhpmcounter11"),
    Csr::new(0xb0c, "mhpmcounter12"),
    Csr::new(0xb0d, "mhpmcounter13"),
    Csr::new(0xb0e, "mhpmcounter14"),
    Csr::new(0xb0f, "mhpmcounter15"),
    Csr::new(0xb10, "mhpmcounter16"),
    Csr::new(0xb11, "mhpmcounter17"),
    Csr::new(0xb12, "mhpmcounter18"),
    Csr::new(0xb13, "mhpmcounter19"),
    Csr::new(0xb14, "mhpmcounter20"),
    Csr::new(0xb15, "mhpmcounter21"),
    Csr::new(0xb16, "mhpmcounter22"),
    Csr::new(0xb17, "mhpmcounter23"),
    Csr::new(0xb18, "mhpmcounter24"),
    Csr::new(0xb19, "mhpmcounter25"),
    Csr::new(0xb1a, "mhpmcounter26"),
    Csr::new(0xb1b, "mhpmcounter27"),
    Csr::new(0xb1c, "mhpmcounter28"),
    Csr::new(0xb1d, "mhpmcounter29"),
    Csr::new(0xb1e, "mhpmcounter30"),
    Csr::new(0xb1f, "mhpmcounter31"),
    Csr::new(0x323, "mhpmevent3"),
    Csr::new(0x324, "mhpmevent4"),
    Csr::new(0x325, "mhpmevent5"),
    Csr::new(0x326, "mhpmevent6"),
    Csr::new(0x327, "mhpmevent7"),
    Csr::new(0x328, "mhpmevent8"),
    Csr::new(0x329, "mhpmevent9"),
    Csr::new(0x32a, "mhpmevent10"),
    Csr::new(0x32b, "mhpmevent11"),
    Csr::new(0x32c, "mhpmevent12"),
    Csr::new(0x32d, "mhpmevent13"),
    Csr::new(0x32e, "mhpmevent14"),
    Csr::new(0x32f, "mhpmevent15"),
    Csr::new(0x330, "mhpmevent16"),
    Csr::new(0x331, "mhpmevent17"),
    Csr::new(0x332, "mhpmevent18"),
    Csr::new(0x333, "mhpmevent19"),
    Csr::new(0x334, "mhpmevent20"),
    Csr::new(0x335, "mhpmevent21"),
    Csr::new(0x336, "mhpmevent22"),
    Csr::new(0x337, "mhpmevent23"),
    Csr::new(0x338, "mhpmevent24"),
    Csr::new(0x339, "mhpmevent25"),
    Csr::new(0x33a, "mhpmevent26"),
    Csr::new(0x33b, "mhpmevent27"),
    Csr::new(0x33c, "mhpmevent28"),
    Csr::new(0x33d, "mhpmevent29"),
    Csr::new(0x33e, "mhpmevent30"),
    Csr::new(0x33f, "mhpmevent31"),

    // Standard Machine RO
    Csr::new(0xf11, "mvendorid"),
    Csr::new(0xf12, "marchid"),
    Csr::new(0xf13, "mimpid"),
    Csr::new(0xf14, "mhartid"),
];

pub static CSRS32: [Csr; 63] = [
    // Standard User RO
    Csr::new(0xc80, "cycleh"),
    Csr::new(0xc81, "timeh"),
    Csr::new(0xc82, "instreth"),
    Csr::new(0xc83, "hpmcounter3h"),
    Csr::new(0xc84, "hpmcounter4h"),
    Csr::new(0xc85, "hpmcounter5h"),
    Csr::new(0xc86, "hpmcounter6h"),
    Csr::new(0xc87, "hpmcounter7h"),
    Csr::new(0xc88, "hpmcounter8h"),
    Csr::new(0xc89, "hpmcounter9h"),
    Csr::new(0xc8a, "hpmcounter10h"),
    Csr::new(0xc8b, "hpmcounter11h"),
    Csr::new(0xc8c, "hpmcounter12h"),
    Csr::new(0xc8d, "hpmcounter13h"),
    Csr::new(0xc8e, "hpmcounter14h"),
    Csr::new(0xc8f, "hpmcounter15h"),
    Csr::new(0xc90, "hpmcounter16h"),
    Csr::new(0xc91, "hpmcounter17h"),
    Csr::new(0xc92, "hpmcounter18h"),
    Csr::new(0xc93, "hpmcounter19h"),
    Csr::new(0xc94, "hpmcounter20h"),
    Csr::new(0xc95, "hpmcounter21h"),
    Csr::new(0xc96, "hpmcounter22h"),
    Csr::new(0xc97, "hpmcounter23h"),
    Csr::new(0xc98, "hpmcounter24h"),
    Csr::new(0xc99, "hpmcounter25h"),
    Csr::new(0xc9a, "hpmcounter26h"),
    Csr::new(0xc9b, "hpmcounter27h"),
    Csr::new(0xc9c, "hpmcounter28h"),
    Csr::new(0xc9d, "hpmcounter29h"),
    Csr::new(0xc9e, "hpmcounter30h"),
    Csr::new(0xc9f, "hpmcounter31h"),

    // Standard Machine RW
    Csr::new(0xb80, "mcycleh"),
    Csr::new(0xb82, "minstreth"),
    Csr::new(0xb83, "mhpmcounter3h"),
    Csr::new(0xb84, "mhpmcounter4h"),
    Csr::new(0xb85, "mhpmcounter5h"),
    Csr::new(0xb86, "mhpmcounter6h"),
    Csr::new(0xb87, "mhpmcounter7h"),
    Csr::new(0xb88, "mhpmcounter8h"),
    Csr::new(0xb89, "mhpmcounter9h"),
    Csr::new(0xb8a, "mhpmcounter10h"),
    Csr::new(0xb8b, "mhpmcounter11h"),
    Csr::new(0xb8c, "mhpmcounter12h"),
    Csr::new(0xb8d, "mhpmcounter13h"),
    Csr::new(0xb8e, "mhpmcounter14h"),
    Csr::new(0xb8f, "mhpmcounter15h"),
    Csr::new(0xb90, "mhpmcounter16h"),
    Csr::new(0xb91, "mhpmcounter17h"),
    Csr::new(0xb92, "mhpmcounter18h"),
    Csr::new(0xb93, "mhpmcounter19h"),
    Csr::new(0xb94, "mhpmcounter20h"),
    Csr::new(0xb95, "mhpmcounter21h"),
    Csr::new(0xb96, "mhpmcounter22h"),
    Csr::new(0xb97, "mhpmcounter23h"),
    Csr::new(0xb98, "mhpmcounter24h"),
    Csr::new(0xb99, "mhpmcounter25h"),
    Csr::new(0xb9a, "mhpmcounter26h"),
    Csr::new(0xb9b, "mhpmcounter27h"),
    Csr::new(0xb9c, "mhpmcounter28h"),
    Csr::new(0xb9d, "mhpmcounter29h"),
    Csr::new(0xb9e, "mhpmcounter30h"),
    Csr::new(0xb9f, "mhpmcounter31h"),
];

/// Every CSR visible on RV32: the common set followed by the high halves.
pub fn rv32_csrs() -> impl Iterator<Item = &'static Csr> {
    CSRS.iter().chain(CSRS32.iter())
}
