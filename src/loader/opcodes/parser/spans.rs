use std::path::Path;

use crate::encoding::diagnostic::{SourcePosition, SourceSpan};

use super::Token;

/// Span covering `token` on its line; the end column is one past its last character.
pub fn span_from_token(path: &Path, token: &Token) -> SourceSpan {
    let start = SourcePosition::new(token.line, token.column);
    let end = SourcePosition::new(token.line, token.column + token.lexeme.chars().count());
    SourceSpan::new(path.to_path_buf(), start, end)
}
