use std::fmt;
use std::path::PathBuf;

/// Stage of the compilation pipeline that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticPhase {
    Parser,
    Coverage,
    Collision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

/// 1-indexed line and column inside an opcode listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Characters `[start, end)` of one token in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub path: PathBuf,
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    pub fn new(path: PathBuf, start: SourcePosition, end: SourcePosition) -> Self {
        Self { path, start, end }
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.path.display(),
            self.start.line,
            self.start.column
        )
    }
}

/// One reportable finding about a named instruction.
#[derive(Debug, Clone)]
pub struct OpcodeDiagnostic {
    pub phase: DiagnosticPhase,
    pub level: DiagnosticLevel,
    /// Stable dotted code, e.g. `coverage.incomplete`.
    pub code: &'static str,
    pub instruction: Option<String>,
    pub message: String,
    pub span: Option<SourceSpan>,
}

impl OpcodeDiagnostic {
    pub fn error(
        phase: DiagnosticPhase,
        code: &'static str,
        instruction: impl Into<String>,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Self {
        Self {
            phase,
            level: DiagnosticLevel::Error,
            code,
            instruction: Some(instruction.into()),
            message: message.into(),
            span,
        }
    }

    pub fn warning(
        phase: DiagnosticPhase,
        code: &'static str,
        instruction: impl Into<String>,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            ..Self::error(phase, code, instruction, message, span)
        }
    }

    /// `Level code: instruction: message @ path:line:column`, one line per diagnostic.
    pub fn format_human(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OpcodeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}: ", self.level, self.code)?;
        if let Some(name) = &self.instruction {
            write!(f, "{name}: ")?;
        }
        write!(f, "{} @ ", self.message)?;
        match &self.span {
            Some(span) => write!(f, "{span}"),
            None => f.write_str("<unknown>"),
        }
    }
}
