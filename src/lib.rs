//! Instruction-encoding compiler for custom instruction-set extensions.
//!
//! A line-oriented opcode listing is parsed by [`loader::opcodes`], checked for complete and
//! non-overlapping bit coverage, checked for cross-instruction decodability, and collected
//! into an [`encoding::InstructionTable`]. [`backend`] renderers project the table into C,
//! binutils, Chisel and Go artifacts.

pub mod backend;
pub mod cli;
pub mod encoding;
pub mod loader;
