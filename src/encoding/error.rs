use std::fmt;

use crate::encoding::diagnostic::{DiagnosticPhase, OpcodeDiagnostic, SourceSpan};

/// Invariant violations detected while turning one definition line into an encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The line holds a mnemonic but no encoding tokens.
    MalformedLine { tokens: usize },
    /// A range token whose high bound is not above its low bound, or lies outside the word.
    BadRange { high: u32, low: u32 },
    /// A literal that is not a number or does not fit the declared span.
    BadValue { value: String, high: u32, low: u32 },
    /// Neither a range assignment nor a registered field name.
    UnknownToken(String),
    /// Bits claimed by more than one token of the same instruction.
    Overspecified { bits: u32 },
    /// The claimed bits form neither a full nor a compressed word.
    IncompleteCoverage { coverage: u32 },
    /// Another accepted instruction decodes the same bit pattern.
    EncodingCollision { other: String },
    /// The mnemonic was already defined.
    DuplicateName,
}

impl EncodingError {
    pub fn code(&self) -> &'static str {
        match self {
            EncodingError::MalformedLine { .. } => "parse.malformed-line",
            EncodingError::BadRange { .. } => "parse.bad-range",
            EncodingError::BadValue { .. } => "parse.bad-value",
            EncodingError::UnknownToken(_) => "parse.unknown-token",
            EncodingError::Overspecified { .. } => "coverage.overspecified",
            EncodingError::IncompleteCoverage { .. } => "coverage.incomplete",
            EncodingError::EncodingCollision { .. } => "collision.overlap",
            EncodingError::DuplicateName => "collision.duplicate-name",
        }
    }

    pub fn phase(&self) -> DiagnosticPhase {
        match self {
            EncodingError::MalformedLine { .. }
            | EncodingError::BadRange { .. }
            | EncodingError::BadValue { .. }
            | EncodingError::UnknownToken(_) => DiagnosticPhase::Parser,
            EncodingError::Overspecified { .. } | EncodingError::IncompleteCoverage { .. } => {
                DiagnosticPhase::Coverage
            }
            EncodingError::EncodingCollision { .. } | EncodingError::DuplicateName => {
                DiagnosticPhase::Collision
            }
        }
    }

    /// Wraps the error into a diagnostic attributed to `instruction`.
    pub fn to_diagnostic(&self, instruction: &str, span: Option<SourceSpan>) -> OpcodeDiagnostic {
        OpcodeDiagnostic::error(self.phase(), self.code(), instruction, self.to_string(), span)
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::MalformedLine { tokens } => write!(
                f,
                "malformed definition: expected a mnemonic and at least one token, found {tokens} token(s)"
            ),
            EncodingError::BadRange { high, low } => write!(f, "bad range {high}..{low}"),
            EncodingError::BadValue { value, high, low } => {
                write!(f, "bad value {value} for range {high}..{low}")
            }
            EncodingError::UnknownToken(token) => write!(f, "unknown token {token}"),
            EncodingError::Overspecified { bits } => {
                write!(f, "overspecified: bits {bits:#010x} claimed more than once")
            }
            EncodingError::IncompleteCoverage { coverage } => write!(
                f,
                "not all bits are covered: {coverage:#034b} (missing {missing:#010x})",
                missing = !coverage
            ),
            EncodingError::EncodingCollision { other } => write!(f, "overlaps with {other}"),
            EncodingError::DuplicateName => write!(f, "instruction defined more than once"),
        }
    }
}

impl std::error::Error for EncodingError {}

/// Represents any failure that can occur while compiling an opcode listing or rendering it.
#[derive(Debug)]
pub enum OpcodeError {
    Io(std::io::Error),
    /// Invalid command line.
    Usage(String),
    /// A backend could not express the validated model.
    Backend(String),
    /// First invariant violation of a fail-fast compilation.
    Encoding {
        instruction: String,
        error: EncodingError,
        span: Option<SourceSpan>,
    },
    /// Every violation of a collect-all compilation.
    Diagnostics { diagnostics: Vec<OpcodeDiagnostic> },
}

impl OpcodeError {
    /// Diagnostics carried by the error, one per violation.
    pub fn diagnostics(&self) -> Vec<OpcodeDiagnostic> {
        match self {
            OpcodeError::Encoding {
                instruction,
                error,
                span,
            } => vec![error.to_diagnostic(instruction, span.clone())],
            OpcodeError::Diagnostics { diagnostics } => diagnostics.clone(),
            _ => Vec::new(),
        }
    }
}

impl From<std::io::Error> for OpcodeError {
    fn from(err: std::io::Error) -> Self {
        OpcodeError::Io(err)
    }
}

impl From<fmt::Error> for OpcodeError {
    fn from(err: fmt::Error) -> Self {
        OpcodeError::Backend(format!("formatting failed: {err}"))
    }
}

impl fmt::Display for OpcodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpcodeError::Io(err) => write!(f, "I/O error: {err}"),
            OpcodeError::Usage(msg) => write!(f, "usage error: {msg}"),
            OpcodeError::Backend(msg) => write!(f, "backend error: {msg}"),
            OpcodeError::Encoding {
                instruction, error, ..
            } => write!(f, "{instruction}: {error}"),
            OpcodeError::Diagnostics { diagnostics } => {
                writeln!(f, "compilation produced {} issue(s):", diagnostics.len())?;
                for diag in diagnostics {
                    writeln!(f, "  - {}", diag.format_human())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for OpcodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OpcodeError::Io(err) => Some(err),
            OpcodeError::Encoding { error, .. } => Some(error),
            _ => None,
        }
    }
}
