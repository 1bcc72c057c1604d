//! Opcode listing loading helpers (lexer, line parser, compilation driver).

pub mod lexer;
pub mod loader;
pub mod parser;

pub use lexer::{Lexer, Token, tokenize_line};
pub use loader::{Compilation, CompileOptions, ErrorMode, OpcodeLoader, compile_str};
pub use parser::{PSEUDO_MARKER, Parser, parse_line};
