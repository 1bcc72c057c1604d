//! Static registry of named operand fields.
//!
//! Every field an opcode listing may reference is a [`Field`] variant with a fixed
//! `[high, low]` placement inside the 32-bit instruction word. The table is built into the
//! binary; name lookups go through a lazily built hash index.

use std::fmt;
use std::sync::OnceLock;

use ahash::AHashMap;
use bitflags::bitflags;

use super::coverage::BitRange;

bitflags! {
    /// Classification of a registered field, consumed by renderers.
    #[derive(Default, Debug, PartialEq, Eq, Hash, Copy, Clone)]
    pub struct FieldFlags: u8 {
        /// Belongs to the crypto instruction-set extension; binutils encode/extract macros
        /// are generated for these fields.
        const EXTENSION = 0b1;
        const REGISTER  = 0b10;
        const IMMEDIATE = 0b100;
        /// Ordering, rounding or selector bits.
        const CONTROL   = 0b1000;
    }
}

const EXT_REG: FieldFlags = FieldFlags::EXTENSION.union(FieldFlags::REGISTER);
const EXT_IMM: FieldFlags = FieldFlags::EXTENSION.union(FieldFlags::IMMEDIATE);
const EXT_CTL: FieldFlags = FieldFlags::EXTENSION.union(FieldFlags::CONTROL);
const REG: FieldFlags = FieldFlags::REGISTER;
const IMM: FieldFlags = FieldFlags::IMMEDIATE;
const CTL: FieldFlags = FieldFlags::CONTROL;

/// Every operand field known to the compiler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Imm11,
    Imm11Hi,
    Imm11Lo,
    Imm5,
    Cshamt,
    Cmshamt,
    B0,
    B1,
    B2,
    B3,
    Ca,
    Cb,
    Cc,
    Cd,
    Crs1,
    Crs2,
    Crs3,
    Crs4,
    Crd,
    Crdm,
    Lut4,
    Rd,
    Rs1,
    Rs2,
    Rs3,
    Aqrl,
    Fm,
    Pred,
    Succ,
    Rm,
    Imm20,
    Jimm20,
    Imm12,
    Imm12Hi,
    Bimm12Hi,
    Imm12Lo,
    Bimm12Lo,
    Zimm,
    Shamt,
    Shamtw,
    Vseglen,
    Opcode,
    Funct3,
    Funct7,
}

/// Placement and presentation data for one [`Field`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: Field,
    pub name: &'static str,
    pub range: BitRange,
    /// Short operand code used by assembler tables; codes may alias between fields.
    pub display_code: Option<&'static str>,
    pub flags: FieldFlags,
}

impl FieldDescriptor {
    const fn new(
        field: Field,
        name: &'static str,
        high: u8,
        low: u8,
        display_code: Option<&'static str>,
        flags: FieldFlags,
    ) -> Self {
        Self {
            field,
            name,
            range: BitRange::from_static(high, low),
            display_code,
            flags,
        }
    }

    pub fn high(&self) -> u8 {
        self.range.high()
    }

    pub fn low(&self) -> u8 {
        self.range.low()
    }

    pub fn is_extension(&self) -> bool {
        self.flags.contains(FieldFlags::EXTENSION)
    }
}

static FIELDS: [FieldDescriptor; Field::COUNT] = [
    FieldDescriptor::new(Field::Imm11, "imm11", 31, 21, Some("Xl"), EXT_IMM),
    FieldDescriptor::new(Field::Imm11Hi, "imm11hi", 31, 25, Some("Xm"), EXT_IMM),
    FieldDescriptor::new(Field::Imm11Lo, "imm11lo", 10, 7, Some("Xn"), EXT_IMM),
    FieldDescriptor::new(Field::Imm5, "imm5", 19, 15, Some("Xo"), EXT_IMM),
    FieldDescriptor::new(Field::Cshamt, "cshamt", 23, 20, Some("XR"), EXT_IMM),
    FieldDescriptor::new(Field::Cmshamt, "cmshamt", 27, 24, Some("Xr"), EXT_IMM),
    FieldDescriptor::new(Field::B0, "b0", 31, 30, Some("Xw"), EXT_IMM),
    FieldDescriptor::new(Field::B1, "b1", 29, 28, Some("Xx"), EXT_IMM),
    FieldDescriptor::new(Field::B2, "b2", 27, 26, Some("Xy"), EXT_IMM),
    FieldDescriptor::new(Field::B3, "b3", 25, 24, Some("Xz"), EXT_IMM),
    FieldDescriptor::new(Field::Ca, "ca", 24, 24, Some("Xa"), EXT_CTL),
    FieldDescriptor::new(Field::Cb, "cb", 19, 19, Some("Xb"), EXT_CTL),
    FieldDescriptor::new(Field::Cc, "cc", 11, 11, Some("Xc"), EXT_CTL),
    FieldDescriptor::new(Field::Cd, "cd", 20, 20, Some("Xd"), EXT_CTL),
    FieldDescriptor::new(Field::Crs1, "crs1", 18, 15, Some("Xs"), EXT_REG),
    FieldDescriptor::new(Field::Crs2, "crs2", 23, 20, Some("Xt"), EXT_REG),
    FieldDescriptor::new(Field::Crs3, "crs3", 27, 24, Some("XS"), EXT_REG),
    FieldDescriptor::new(Field::Crs4, "crs4", 31, 28, Some("XT"), EXT_REG),
    FieldDescriptor::new(Field::Crd, "crd", 10, 7, Some("XD"), EXT_REG),
    FieldDescriptor::new(Field::Crdm, "crdm", 9, 7, Some("XM"), EXT_REG),
    FieldDescriptor::new(Field::Lut4, "lut4", 28, 25, Some("Xl"), EXT_IMM),
    FieldDescriptor::new(Field::Rd, "rd", 11, 7, Some("Xd"), REG),
    FieldDescriptor::new(Field::Rs1, "rs1", 19, 15, Some("Xs"), REG),
    FieldDescriptor::new(Field::Rs2, "rs2", 24, 20, None, REG),
    FieldDescriptor::new(Field::Rs3, "rs3", 31, 27, None, REG),
    FieldDescriptor::new(Field::Aqrl, "aqrl", 26, 25, None, CTL),
    FieldDescriptor::new(Field::Fm, "fm", 31, 28, None, CTL),
    FieldDescriptor::new(Field::Pred, "pred", 27, 24, None, CTL),
    FieldDescriptor::new(Field::Succ, "succ", 23, 20, None, CTL),
    FieldDescriptor::new(Field::Rm, "rm", 14, 12, None, CTL),
    FieldDescriptor::new(Field::Imm20, "imm20", 31, 12, None, IMM),
    FieldDescriptor::new(Field::Jimm20, "jimm20", 31, 12, None, IMM),
    FieldDescriptor::new(Field::Imm12, "imm12", 31, 20, None, IMM),
    FieldDescriptor::new(Field::Imm12Hi, "imm12hi", 31, 25, None, IMM),
    FieldDescriptor::new(Field::Bimm12Hi, "bimm12hi", 31, 25, None, IMM),
    FieldDescriptor::new(Field::Imm12Lo, "imm12lo", 11, 7, None, IMM),
    FieldDescriptor::new(Field::Bimm12Lo, "bimm12lo", 11, 7, None, IMM),
    FieldDescriptor::new(Field::Zimm, "zimm", 19, 15, None, IMM),
    FieldDescriptor::new(Field::Shamt, "shamt", 25, 20, None, IMM),
    FieldDescriptor::new(Field::Shamtw, "shamtw", 24, 20, None, IMM),
    FieldDescriptor::new(Field::Vseglen, "vseglen", 31, 29, None, CTL),
    FieldDescriptor::new(Field::Opcode, "opcode", 6, 0, None, CTL),
    FieldDescriptor::new(Field::Funct3, "funct3", 14, 12, None, CTL),
    FieldDescriptor::new(Field::Funct7, "funct7", 31, 25, None, CTL),
];

impl Field {
    pub const COUNT: usize = 44;

    pub fn descriptor(self) -> &'static FieldDescriptor {
        &FIELDS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn range(self) -> BitRange {
        self.descriptor().range
    }

    /// Resolves a field by its listing name.
    pub fn from_name(name: &str) -> Option<Field> {
        name_index().get(name).copied()
    }

    /// All fields in registry order.
    pub fn all() -> impl Iterator<Item = Field> {
        FIELDS.iter().map(|descriptor| descriptor.field)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn name_index() -> &'static AHashMap<&'static str, Field> {
    static INDEX: OnceLock<AHashMap<&'static str, Field>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = AHashMap::with_capacity(FIELDS.len());
        for (idx, descriptor) in FIELDS.iter().enumerate() {
            debug_assert_eq!(descriptor.field as usize, idx, "registry out of order");
            index.insert(descriptor.name, descriptor.field);
        }
        index
    })
}

/// Looks up a field descriptor by name.
pub fn lookup(name: &str) -> Option<&'static FieldDescriptor> {
    Field::from_name(name).map(Field::descriptor)
}

/// Every registered field descriptor in registry order.
pub fn descriptors() -> &'static [FieldDescriptor] {
    &FIELDS
}

/// Fields that belong to the crypto extension.
pub fn extension_fields() -> impl Iterator<Item = &'static FieldDescriptor> {
    FIELDS.iter().filter(|descriptor| descriptor.is_extension())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const EXTENSION_NAMES: [&str; 21] = [
        "imm11", "imm11hi", "imm11lo", "imm5", "cshamt", "cmshamt", "b0", "b1", "b2", "b3",
        "ca", "cb", "cc", "cd", "crs1", "crs2", "crs3", "crs4", "crd", "crdm", "lut4",
    ];

    #[test]
    fn table_is_indexed_by_variant_and_names_are_unique() {
        let mut names = HashSet::new();
        for (idx, descriptor) in descriptors().iter().enumerate() {
            assert_eq!(descriptor.field as usize, idx, "{} out of order", descriptor.name);
            assert!(names.insert(descriptor.name), "duplicate name {}", descriptor.name);
            assert!(descriptor.low() <= descriptor.high());
            assert!(descriptor.high() < 32);
        }
        assert_eq!(names.len(), Field::COUNT);
    }

    #[test]
    fn lookup_resolves_known_names_only() {
        let rd = lookup("rd").expect("rd registered");
        assert_eq!((rd.high(), rd.low()), (11, 7));
        assert_eq!(Field::from_name("imm12"), Some(Field::Imm12));
        assert_eq!(Field::Imm12.range().mask(), 0xFFF0_0000);
        assert!(lookup("rx").is_none());
        assert!(lookup("RD").is_none(), "lookup is case sensitive");
    }

    #[test]
    fn extension_set_is_a_subset_of_the_registry() {
        let extension: Vec<&str> = extension_fields().map(|d| d.name).collect();
        assert_eq!(extension, EXTENSION_NAMES);
        for name in EXTENSION_NAMES {
            assert!(lookup(name).is_some(), "{name} missing from registry");
        }
    }

    #[test]
    fn display_codes_may_alias() {
        assert_eq!(Field::Imm11.descriptor().display_code, Some("Xl"));
        assert_eq!(Field::Lut4.descriptor().display_code, Some("Xl"));
        assert_eq!(Field::Rd.descriptor().display_code, Field::Cd.descriptor().display_code);
        assert_eq!(Field::Rs2.descriptor().display_code, None);
    }
}
