//! Line parser that turns one opcode definition into a [`ParsedInstruction`].

mod literal;
mod spans;
mod token;

use std::path::{Path, PathBuf};

use crate::encoding::builder::InstructionBuilder;
use crate::encoding::error::{EncodingError, OpcodeError};
use crate::encoding::instruction::ParsedInstruction;

pub use literal::parse_value;
pub use token::{AssignedValue, IGNORE_KEYWORD, Target, TokenShape, classify};

pub(super) use super::lexer::{Token, tokenize_line};
use spans::span_from_token;

/// Prefix that marks a mnemonic as a pseudo instruction.
pub const PSEUDO_MARKER: char = '@';

pub struct Parser {
    path: PathBuf,
}

impl Parser {
    /// Creates a parser whose diagnostics point into `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Parses one physical line. Blank and comment-only lines yield `Ok(None)`.
    pub fn parse_line(
        &self,
        raw: &str,
        line: usize,
    ) -> Result<Option<ParsedInstruction>, OpcodeError> {
        let tokens = tokenize_line(raw, line);
        let Some((mnemonic, operands)) = tokens.split_first() else {
            return Ok(None);
        };
        let (name, is_pseudo) = match mnemonic.lexeme.strip_prefix(PSEUDO_MARKER) {
            Some(stripped) => (stripped, true),
            None => (mnemonic.lexeme.as_str(), false),
        };
        let mnemonic_span = span_from_token(&self.path, mnemonic);
        if operands.is_empty() {
            return Err(OpcodeError::Encoding {
                instruction: name.to_string(),
                error: EncodingError::MalformedLine {
                    tokens: tokens.len(),
                },
                span: Some(mnemonic_span),
            });
        }

        let mut builder = InstructionBuilder::new(name)
            .pseudo(is_pseudo)
            .span(mnemonic_span);
        for token in operands {
            self.apply_token(&mut builder, token)
                .map_err(|error| OpcodeError::Encoding {
                    instruction: name.to_string(),
                    error,
                    span: Some(span_from_token(&self.path, token)),
                })?;
        }
        Ok(Some(builder.finish()))
    }

    fn apply_token(
        &self,
        builder: &mut InstructionBuilder,
        token: &Token,
    ) -> Result<(), EncodingError> {
        match classify(&token.lexeme)? {
            TokenShape::Field(field) => {
                builder.field(field)?;
            }
            TokenShape::Assignment {
                target,
                value: AssignedValue::Ignore,
            } => {
                builder.ignore(target.range())?;
            }
            TokenShape::Assignment {
                target,
                value: AssignedValue::Literal(value),
            } => {
                builder.literal(target.range(), value)?;
            }
        }
        Ok(())
    }
}

/// Convenience helper for parsing a single line without holding onto a parser.
pub fn parse_line(raw: &str) -> Result<Option<ParsedInstruction>, OpcodeError> {
    Parser::new("<line>").parse_line(raw, 1)
}
