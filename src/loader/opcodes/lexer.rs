//! Per-line tokenizer for opcode listings.
//!
//! Listings are line oriented: a `#` starts a comment that runs to the end of the line and
//! tokens are separated by whitespace. The lexer never fails; shape checks happen in the
//! parser.

use smallvec::SmallVec;

/// Marker that starts a comment.
pub const COMMENT_MARKER: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

pub type LineTokens = SmallVec<[Token; 8]>;

pub struct Lexer<'src> {
    src: &'src str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over a single physical line; `line` is its 1-indexed number.
    pub fn new(src: &'src str, line: usize) -> Self {
        Self {
            src,
            offset: 0,
            line,
            column: 1,
        }
    }

    /// Produces the next token, or `None` at end of line or at a comment.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        match self.peek_char() {
            None | Some(COMMENT_MARKER) => None,
            Some(_) => Some(self.consume_word()),
        }
    }

    /// Collects every token of the line.
    pub fn tokenize(mut self) -> LineTokens {
        let mut tokens = LineTokens::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn consume_word(&mut self) -> Token {
        let start = self.offset;
        let column = self.column;
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() || ch == COMMENT_MARKER {
                break;
            }
            self.advance_char();
        }
        Token {
            lexeme: self.src[start..self.offset].to_string(),
            line: self.line,
            column,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.advance_char();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.offset..].chars().next()
    }

    fn advance_char(&mut self) {
        if let Some(ch) = self.peek_char() {
            self.offset += ch.len_utf8();
            self.column += 1;
        }
    }
}

/// Tokenizes one line of a listing.
pub fn tokenize_line(src: &str, line: usize) -> LineTokens {
    Lexer::new(src, line).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(src: &str) -> Vec<String> {
        tokenize_line(src, 1)
            .into_iter()
            .map(|token| token.lexeme)
            .collect()
    }

    #[test]
    fn splits_on_whitespace_and_tracks_columns() {
        let tokens = tokenize_line("add  rd\trs1 31..25=0", 7);
        let summary: Vec<(&str, usize)> = tokens
            .iter()
            .map(|t| (t.lexeme.as_str(), t.column))
            .collect();
        assert_eq!(summary, [("add", 1), ("rd", 6), ("rs1", 9), ("31..25=0", 13)]);
        assert!(tokens.iter().all(|t| t.line == 7));
    }

    #[test]
    fn comment_ends_the_line_even_inside_a_word() {
        assert_eq!(lexemes("xc.ld rd#trailing"), ["xc.ld", "rd"]);
        assert_eq!(lexemes("# only a comment"), Vec::<String>::new());
        assert_eq!(lexemes("   \t  "), Vec::<String>::new());
    }

    #[test]
    fn pseudo_marker_is_part_of_the_mnemonic() {
        assert_eq!(lexemes("@mv rd rs1"), ["@mv", "rd", "rs1"]);
    }
}
