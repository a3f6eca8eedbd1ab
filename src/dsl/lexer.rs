//! Lexer for the playlist language.
//!
//! Converts source text into a stream of [`Token`]s. String and integer
//! literals are kept as raw lexemes; the semantic transformer performs
//! the actual coercion.

use super::error::CompileError;
use super::token::{Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompileError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_trivia();

            if self.is_at_end() {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    line: self.line,
                    col: self.col,
                });
                break;
            }

            let ch = self.peek();
            let token = match ch {
                '"' => self.lex_string()?,
                '-' | '0'..='9' => self.lex_integer()?,
                'a'..='z' | 'A'..='Z' | '_' => self.lex_keyword()?,
                _ => {
                    return Err(CompileError::lex(
                        format!("unexpected character: '{ch}'"),
                        self.line,
                        self.col,
                    ));
                }
            };

            tokens.push(token);
        }

        Ok(tokens)
    }

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Skip whitespace and `//` comments until neither consumes anything.
    fn skip_trivia(&mut self) {
        loop {
            let before = self.pos;
            self.skip_whitespace();
            self.skip_comment();
            if self.pos == before {
                break;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.advance();
        }
    }

    fn skip_comment(&mut self) {
        if !self.is_at_end() && self.peek() == '/' && self.peek_next() == Some('/') {
            while !self.is_at_end() && self.peek() != '\n' {
                self.advance();
            }
        }
    }

    /// Lex a quoted string literal, keeping the quotes and escapes intact.
    fn lex_string(&mut self) -> Result<Token, CompileError> {
        let line = self.line;
        let col = self.col;
        let mut raw = String::new();
        raw.push(self.advance()); // opening '"'

        while !self.is_at_end() {
            let ch = self.peek();
            if ch == '\\' && self.peek_next() == Some('"') {
                raw.push(self.advance());
                raw.push(self.advance());
                continue;
            }
            if ch == '"' {
                raw.push(self.advance());
                return Ok(Token {
                    kind: TokenKind::Str(raw),
                    line,
                    col,
                });
            }
            if ch == '\n' {
                break;
            }
            raw.push(self.advance());
        }

        Err(CompileError::lex("unclosed string literal", line, col))
    }

    fn lex_integer(&mut self) -> Result<Token, CompileError> {
        let line = self.line;
        let col = self.col;
        let mut raw = String::new();

        if self.peek() == '-' {
            raw.push(self.advance());
        }
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            raw.push(self.advance());
        }

        if raw.is_empty() || raw == "-" {
            return Err(CompileError::lex("expected digits after '-'", line, col));
        }

        Ok(Token {
            kind: TokenKind::Int(raw),
            line,
            col,
        })
    }

    fn lex_keyword(&mut self) -> Result<Token, CompileError> {
        let line = self.line;
        let col = self.col;
        let mut word = String::new();

        while !self.is_at_end() && (self.peek().is_ascii_alphanumeric() || self.peek() == '_') {
            word.push(self.advance());
        }

        let kind = match word.as_str() {
            "PLAYLIST" => TokenKind::Playlist,
            "DURACAO_MAXIMA" => TokenKind::MaxDuration,
            "GENERO" => TokenKind::Genre,
            "ANO" => TokenKind::Year,
            "FAIXA_ETARIA" => TokenKind::AgeRating,
            "LIVRE" => TokenKind::Livre,
            "DESCRICAO" => TokenKind::Description,
            "MUSICA" => TokenKind::Track,
            "AUTOR" => TokenKind::Author,
            "DURACAO" => TokenKind::Duration,
            "CAPA" => TokenKind::Cover,
            "min" => TokenKind::Min,
            _ => {
                return Err(CompileError::lex(
                    format!("unknown keyword: '{word}'"),
                    line,
                    col,
                ));
            }
        };

        Ok(Token { kind, line, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_header_keywords() {
        let mut lexer = Lexer::new("PLAYLIST \"X\" DURACAO_MAXIMA 120 min");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Playlist);
        assert_eq!(tokens[1].kind, TokenKind::Str("\"X\"".to_string()));
        assert_eq!(tokens[2].kind, TokenKind::MaxDuration);
        assert_eq!(tokens[3].kind, TokenKind::Int("120".to_string()));
        assert_eq!(tokens[4].kind, TokenKind::Min);
    }

    #[test]
    fn lex_string_keeps_raw_lexeme() {
        let mut lexer = Lexer::new(r#""Rock \"n\" Roll""#);
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(
            tokens[0].kind,
            TokenKind::Str(r#""Rock \"n\" Roll""#.to_string())
        );
    }

    #[test]
    fn lex_negative_integer() {
        let mut lexer = Lexer::new("-3");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Int("-3".to_string()));
    }

    #[test]
    fn lex_livre_keyword() {
        let mut lexer = Lexer::new("FAIXA_ETARIA LIVRE");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::AgeRating);
        assert_eq!(tokens[1].kind, TokenKind::Livre);
    }

    #[test]
    fn lex_comment() {
        let mut lexer = Lexer::new("ANO 2023 // release year\nGENERO");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Year);
        assert_eq!(tokens[1].kind, TokenKind::Int("2023".to_string()));
        assert_eq!(tokens[2].kind, TokenKind::Genre);
    }

    #[test]
    fn lex_consecutive_comment_lines() {
        let mut lexer = Lexer::new("// first comment\n// second comment\nPLAYLIST \"P\"");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Playlist);
        assert_eq!(tokens[1].kind, TokenKind::Str("\"P\"".to_string()));
    }

    #[test]
    fn lex_comment_only_input() {
        let mut lexer = Lexer::new("// nothing here\n// still nothing");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn lex_line_tracking() {
        let mut lexer = Lexer::new("PLAYLIST\nMUSICA");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn lex_error_on_unknown_keyword() {
        let mut lexer = Lexer::new("BLABLA \"x\"");
        let result = lexer.tokenize();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind, super::super::error::ErrorKind::LexError);
    }

    #[test]
    fn lex_error_on_unexpected_char() {
        let mut lexer = Lexer::new("PLAYLIST @");
        assert!(lexer.tokenize().is_err());
    }

    #[test]
    fn lex_unclosed_string_error() {
        let mut lexer = Lexer::new("\"no closing quote");
        assert!(lexer.tokenize().is_err());
    }

    #[test]
    fn lex_empty_input() {
        let mut lexer = Lexer::new("");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }
}
