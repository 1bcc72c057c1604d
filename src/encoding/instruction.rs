//! Per-instruction records produced by the parser and stored in the instruction table.

use smallvec::SmallVec;

use super::coverage::{BitCoverage, BitRange, WordFormat};
use super::diagnostic::SourceSpan;
use super::registry::Field;

/// Fixed bits of an instruction: `word & mask == match_value` identifies it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Encoding {
    pub match_value: u32,
    pub mask: u32,
}

impl Encoding {
    pub fn new(match_value: u32, mask: u32) -> Self {
        Self { match_value, mask }
    }

    /// Whether `word` decodes as this encoding.
    pub fn matches(self, word: u32) -> bool {
        word & self.mask == self.match_value
    }

    /// Whether some instruction word is claimed by both encodings.
    pub fn overlaps(self, other: Encoding) -> bool {
        let common = self.mask & other.mask;
        self.match_value & common == other.match_value & common
    }

    /// Chisel-style bit pattern, MSB first, `?` for bits outside the mask.
    pub fn bit_pattern(self) -> String {
        (0..32)
            .rev()
            .map(|bit| {
                if self.mask >> bit & 1 == 0 {
                    '?'
                } else if self.match_value >> bit & 1 == 1 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }
}

/// A span fixed to a literal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LiteralBitRange {
    pub range: BitRange,
    pub value: u32,
}

pub type FieldList = SmallVec<[Field; 6]>;
pub type LiteralList = SmallVec<[LiteralBitRange; 4]>;
pub type IgnoredList = SmallVec<[BitRange; 2]>;

/// Result of parsing one definition line, before table-level checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedInstruction {
    pub name: String,
    pub is_pseudo: bool,
    pub encoding: Encoding,
    pub fields: FieldList,
    pub literal_ranges: LiteralList,
    pub ignored_ranges: IgnoredList,
    pub coverage: BitCoverage,
    pub span: Option<SourceSpan>,
}

/// An instruction accepted into the canonical model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionRecord {
    pub name: String,
    pub is_pseudo: bool,
    pub encoding: Encoding,
    pub fields: FieldList,
    pub literal_ranges: LiteralList,
    pub ignored_ranges: IgnoredList,
    pub format: WordFormat,
    pub span: Option<SourceSpan>,
}

impl InstructionRecord {
    pub fn from_parsed(parsed: ParsedInstruction, format: WordFormat) -> Self {
        Self {
            name: parsed.name,
            is_pseudo: parsed.is_pseudo,
            encoding: parsed.encoding,
            fields: parsed.fields,
            literal_ranges: parsed.literal_ranges,
            ignored_ranges: parsed.ignored_ranges,
            format,
            span: parsed.span,
        }
    }

    pub fn match_value(&self) -> u32 {
        self.encoding.match_value
    }

    pub fn mask(&self) -> u32 {
        self.encoding.mask
    }

    pub fn uses(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Identifier used for generated macros: upper case, `.` replaced by `_`.
    pub fn macro_name(&self) -> String {
        self.name.replace('.', "_").to_ascii_uppercase()
    }

    /// Union of every span the record claims.
    pub fn coverage(&self) -> u32 {
        let fields = self.fields.iter().map(|field| field.range().mask());
        let literals = self.literal_ranges.iter().map(|lit| lit.range.mask());
        let ignored = self.ignored_ranges.iter().map(|range| range.mask());
        fields.chain(literals).chain(ignored).fold(0, |acc, mask| acc | mask)
    }
}
