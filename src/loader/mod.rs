//! Loaders that turn textual opcode listings into a validated [`InstructionTable`](crate::encoding::InstructionTable).

pub mod opcodes;
