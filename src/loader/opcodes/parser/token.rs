//! Classification of encoding tokens by their structural shape.

use crate::encoding::coverage::BitRange;
use crate::encoding::error::EncodingError;
use crate::encoding::registry::Field;

use super::literal::{parse_bit, parse_value};

/// Keyword that marks an assigned range as don't-care.
pub const IGNORE_KEYWORD: &str = "ignore";

/// What a token assigns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Range(BitRange),
    Field(Field),
}

impl Target {
    pub fn range(self) -> BitRange {
        match self {
            Target::Range(range) => range,
            Target::Field(field) => field.range(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignedValue {
    Literal(u64),
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenShape {
    /// `A..B=V`, `A=V` or `field=V`.
    Assignment { target: Target, value: AssignedValue },
    /// A bare registered field name.
    Field(Field),
}

/// Classifies one encoding token.
///
/// For assignments the value is checked against the span width before the bounds are
/// validated, so `0..3=16` reports the value and `0..3=1` reports the range.
pub fn classify(lexeme: &str) -> Result<TokenShape, EncodingError> {
    let Some((lhs, rhs)) = lexeme.split_once('=') else {
        return Field::from_name(lexeme)
            .map(TokenShape::Field)
            .ok_or_else(|| unknown(lexeme));
    };
    if rhs.contains('=') {
        return Err(unknown(lexeme));
    }
    let bounds = parse_bounds(lhs).ok_or_else(|| unknown(lexeme))?;
    let value = parse_assigned_value(rhs, bounds)?;
    let target = bounds.resolve()?;
    Ok(TokenShape::Assignment { target, value })
}

/// Left-hand side of an assignment before validation.
#[derive(Debug, Clone, Copy)]
enum Bounds {
    Span { high: u32, low: u32 },
    Bit(u32),
    Field(Field),
}

impl Bounds {
    fn high_low(self) -> (u32, u32) {
        match self {
            Bounds::Span { high, low } => (high, low),
            Bounds::Bit(bit) => (bit, bit),
            Bounds::Field(field) => {
                let range = field.range();
                (u32::from(range.high()), u32::from(range.low()))
            }
        }
    }

    fn width(self) -> u64 {
        let (high, low) = self.high_low();
        u64::from(high.abs_diff(low)) + 1
    }

    fn resolve(self) -> Result<Target, EncodingError> {
        match self {
            Bounds::Span { high, low } if high <= low => {
                Err(EncodingError::BadRange { high, low })
            }
            Bounds::Span { high, low } => BitRange::new(high, low).map(Target::Range),
            Bounds::Bit(bit) => BitRange::bit(bit).map(Target::Range),
            Bounds::Field(field) => Ok(Target::Field(field)),
        }
    }
}

fn parse_bounds(lhs: &str) -> Option<Bounds> {
    if let Some((high, low)) = lhs.split_once("..") {
        return Some(Bounds::Span {
            high: parse_bit(high)?,
            low: parse_bit(low)?,
        });
    }
    if let Some(bit) = parse_bit(lhs) {
        return Some(Bounds::Bit(bit));
    }
    Field::from_name(lhs).map(Bounds::Field)
}

fn parse_assigned_value(rhs: &str, bounds: Bounds) -> Result<AssignedValue, EncodingError> {
    if rhs == IGNORE_KEYWORD {
        return Ok(AssignedValue::Ignore);
    }
    let width = bounds.width();
    match parse_value(rhs) {
        Some(value) if width >= 64 || value < (1u64 << width) => Ok(AssignedValue::Literal(value)),
        _ => {
            let (high, low) = bounds.high_low();
            Err(EncodingError::BadValue {
                value: rhs.to_string(),
                high,
                low,
            })
        }
    }
}

fn unknown(lexeme: &str) -> EncodingError {
    EncodingError::UnknownToken(lexeme.to_string())
}
