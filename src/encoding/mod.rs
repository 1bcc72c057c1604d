//! Encoding model and invariant checks.
//!
//! This module houses the staged pipeline that turns parsed definition lines into a
//! validated [`InstructionTable`]: the static field [`registry`], per-instruction
//! [`coverage`] accounting, the [`builder`] used by the line parser, cross-instruction
//! [`collision`] checks and the canonical [`table`] itself.

pub mod builder;
pub mod collision;
pub mod coverage;
pub mod diagnostic;
pub mod error;
pub mod instruction;
pub mod registry;
pub mod table;

#[cfg(test)]
mod tests;

pub use builder::InstructionBuilder;
pub use collision::{check_collision, pairwise_collisions, pseudo_overlaps};
pub use coverage::{BitCoverage, BitRange, WordFormat, validate_coverage};
pub use diagnostic::{DiagnosticLevel, DiagnosticPhase, OpcodeDiagnostic, SourcePosition, SourceSpan};
pub use error::{EncodingError, OpcodeError};
pub use instruction::{Encoding, InstructionRecord, LiteralBitRange, ParsedInstruction};
pub use registry::{Field, FieldDescriptor, FieldFlags};
pub use table::InstructionTable;
