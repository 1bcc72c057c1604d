//! Incremental construction of a [`ParsedInstruction`].
//!
//! The line parser feeds each resolved token through an [`InstructionBuilder`]; tests and
//! tooling can use the same builder to assemble instructions without going through text.
//! Every mutator claims its span in the coverage set first, so a bit can never be assigned
//! twice.

use super::coverage::{BitCoverage, BitRange};
use super::diagnostic::SourceSpan;
use super::error::EncodingError;
use super::instruction::{
    Encoding, FieldList, IgnoredList, LiteralBitRange, LiteralList, ParsedInstruction,
};
use super::registry::Field;

#[derive(Debug, Clone)]
pub struct InstructionBuilder {
    name: String,
    is_pseudo: bool,
    span: Option<SourceSpan>,
    encoding: Encoding,
    fields: FieldList,
    literal_ranges: LiteralList,
    ignored_ranges: IgnoredList,
    coverage: BitCoverage,
}

impl InstructionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_pseudo: false,
            span: None,
            encoding: Encoding::default(),
            fields: FieldList::new(),
            literal_ranges: LiteralList::new(),
            ignored_ranges: IgnoredList::new(),
            coverage: BitCoverage::new(),
        }
    }

    pub fn pseudo(mut self, is_pseudo: bool) -> Self {
        self.is_pseudo = is_pseudo;
        self
    }

    pub fn span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coverage(&self) -> BitCoverage {
        self.coverage
    }

    /// References a variable operand field.
    pub fn field(&mut self, field: Field) -> Result<&mut Self, EncodingError> {
        self.coverage.claim(field.range())?;
        self.fields.push(field);
        Ok(self)
    }

    /// Fixes `range` to `value`.
    pub fn literal(&mut self, range: BitRange, value: u64) -> Result<&mut Self, EncodingError> {
        if !range.fits(value) {
            return Err(EncodingError::BadValue {
                value: value.to_string(),
                high: u32::from(range.high()),
                low: u32::from(range.low()),
            });
        }
        self.coverage.claim(range)?;
        self.encoding.match_value |= range.place(value);
        self.encoding.mask |= range.mask();
        self.literal_ranges.push(LiteralBitRange {
            range,
            value: value as u32,
        });
        Ok(self)
    }

    /// Fixes the span of a registered field to `value`.
    pub fn assign(&mut self, field: Field, value: u64) -> Result<&mut Self, EncodingError> {
        self.literal(field.range(), value)
    }

    /// Marks `range` as don't-care: covered, but neither matched nor masked.
    pub fn ignore(&mut self, range: BitRange) -> Result<&mut Self, EncodingError> {
        self.coverage.claim(range)?;
        self.ignored_ranges.push(range);
        Ok(self)
    }

    pub fn finish(self) -> ParsedInstruction {
        ParsedInstruction {
            name: self.name,
            is_pseudo: self.is_pseudo,
            encoding: self.encoding,
            fields: self.fields,
            literal_ranges: self.literal_ranges,
            ignored_ranges: self.ignored_ranges,
            coverage: self.coverage,
            span: self.span,
        }
    }
}
