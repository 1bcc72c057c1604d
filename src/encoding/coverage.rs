//! Bit-range arithmetic and the per-instruction coverage accumulator.
//!
//! Every token of a definition line resolves to an inclusive `[high, low]` span inside the
//! 32-bit instruction word. [`BitCoverage`] records which bits have been claimed so far and
//! refuses to hand out the same bit twice; once a line is exhausted, [`validate_coverage`]
//! decides whether the claimed bits form a complete word.

use std::fmt;

use super::error::EncodingError;

/// Width of the instruction word in bits.
pub const WORD_BITS: u8 = 32;

/// Coverage of a fully specified 32-bit instruction.
pub const FULL_WORD: u32 = 0xFFFF_FFFF;

/// Coverage of a fully specified 16-bit (compressed) instruction.
pub const COMPRESSED_WORD: u32 = 0x0000_FFFF;

/// Inclusive bit span `[high, low]` within the instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitRange {
    high: u8,
    low: u8,
}

impl BitRange {
    /// Builds a range, rejecting reversed bounds and bits outside the word.
    pub fn new(high: u32, low: u32) -> Result<Self, EncodingError> {
        if low > high || high >= u32::from(WORD_BITS) {
            return Err(EncodingError::BadRange { high, low });
        }
        Ok(Self {
            high: high as u8,
            low: low as u8,
        })
    }

    /// Single-bit range.
    pub fn bit(bit: u32) -> Result<Self, EncodingError> {
        Self::new(bit, bit)
    }

    pub(crate) const fn from_static(high: u8, low: u8) -> Self {
        Self { high, low }
    }

    pub fn high(self) -> u8 {
        self.high
    }

    pub fn low(self) -> u8 {
        self.low
    }

    pub fn width(self) -> u8 {
        self.high - self.low + 1
    }

    /// Mask with every bit of the span set.
    pub fn mask(self) -> u32 {
        let upper = 1u64 << (u32::from(self.high) + 1);
        let lower = 1u64 << self.low;
        (upper - lower) as u32
    }

    /// Largest value that fits into the span.
    pub fn max_value(self) -> u64 {
        (1u64 << self.width()) - 1
    }

    /// Whether `value` is representable in `width()` bits.
    pub fn fits(self, value: u64) -> bool {
        value <= self.max_value()
    }

    /// Shifts `value` into position. Callers must check [`BitRange::fits`] first.
    pub fn place(self, value: u64) -> u32 {
        ((value & self.max_value()) << self.low) as u32
    }

    /// Extracts the span's bits from `word`.
    pub fn extract(self, word: u32) -> u32 {
        (word & self.mask()) >> self.low
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.high == self.low {
            write!(f, "{}", self.high)
        } else {
            write!(f, "{}..{}", self.high, self.low)
        }
    }
}

/// The two instruction-word shapes an opcode listing may describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordFormat {
    Full,
    Compressed,
}

impl WordFormat {
    pub fn coverage(self) -> u32 {
        match self {
            WordFormat::Full => FULL_WORD,
            WordFormat::Compressed => COMPRESSED_WORD,
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            WordFormat::Full => 32,
            WordFormat::Compressed => 16,
        }
    }
}

/// Bitset of instruction-word positions already claimed by one definition line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitCoverage(u32);

impl BitCoverage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Claims every bit in `range`. Fails without modifying the set if any bit is already
    /// claimed, reporting the doubly claimed bits.
    pub fn claim(&mut self, range: BitRange) -> Result<(), EncodingError> {
        let span = range.mask();
        let overlap = self.0 & span;
        if overlap != 0 {
            return Err(EncodingError::Overspecified { bits: overlap });
        }
        self.0 |= span;
        Ok(())
    }

    pub fn contains(self, range: BitRange) -> bool {
        self.0 & range.mask() == range.mask()
    }

    /// Bits of the full word that nobody claimed.
    pub fn missing(self) -> u32 {
        !self.0
    }
}

/// Accepts a finished coverage set only if it describes a complete full or compressed word.
pub fn validate_coverage(coverage: BitCoverage) -> Result<WordFormat, EncodingError> {
    match coverage.bits() {
        FULL_WORD => Ok(WordFormat::Full),
        COMPRESSED_WORD => Ok(WordFormat::Compressed),
        bits => Err(EncodingError::IncompleteCoverage { coverage: bits }),
    }
}
