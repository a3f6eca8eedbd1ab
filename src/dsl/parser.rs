//! Parser for the playlist language.
//!
//! Parses a token stream into a [`SyntaxTree`]. Parse failure is fatal:
//! the semantic transformer never sees a tree for invalid input.

use super::error::CompileError;
use super::token::{Token, TokenKind};
use super::tree::{HeaderNode, Leaf, PlaylistNode, SyntaxTree, TrackNode};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// The token stream always ends with `Eof`; an empty one is padded
    /// so lookahead never runs off the end.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            tokens.push(Token {
                kind: TokenKind::Eof,
                line: 1,
                col: 1,
            });
        }
        Self { tokens, pos: 0 }
    }

    pub fn parse(&mut self) -> Result<SyntaxTree, CompileError> {
        let header = self.parse_header()?;

        let description = if self.check(TokenKind::Description) {
            self.advance();
            Some(self.expect_str()?)
        } else {
            None
        };

        let mut tracks = Vec::new();
        while self.check(TokenKind::Track) {
            tracks.push(self.parse_track()?);
        }

        self.expect(TokenKind::Eof)?;

        Ok(SyntaxTree {
            playlist: PlaylistNode {
                header,
                description,
                tracks,
            },
        })
    }

    fn parse_header(&mut self) -> Result<HeaderNode, CompileError> {
        self.expect(TokenKind::Playlist)?;
        let name = self.expect_str()?;
        self.expect(TokenKind::MaxDuration)?;
        let max_duration = self.expect_int()?;
        self.expect(TokenKind::Min)?;
        self.expect(TokenKind::Genre)?;
        let genre = self.expect_str()?;
        self.expect(TokenKind::Year)?;
        let year = self.expect_int()?;
        self.expect(TokenKind::AgeRating)?;
        let age_rating = self.parse_age_rating()?;

        Ok(HeaderNode {
            name,
            max_duration,
            genre,
            year,
            age_rating,
        })
    }

    /// Age rating is polymorphic: an integer or the `LIVRE` keyword.
    fn parse_age_rating(&mut self) -> Result<Leaf, CompileError> {
        let t = self.peek().clone();
        match t.kind {
            TokenKind::Livre => {
                self.advance();
                Ok(Leaf::Livre)
            }
            TokenKind::Int(raw) => {
                self.advance();
                Ok(Leaf::Int(raw))
            }
            other => Err(CompileError::parse(
                format!("expected age rating (integer or LIVRE), got {other:?}"),
                t.line,
                t.col,
            )),
        }
    }

    fn parse_track(&mut self) -> Result<TrackNode, CompileError> {
        self.expect(TokenKind::Track)?;
        let title = self.expect_str()?;
        self.expect(TokenKind::Author)?;
        let author = self.expect_str()?;
        self.expect(TokenKind::Duration)?;
        let duration = self.expect_int()?;
        self.expect(TokenKind::Min)?;

        let cover = if self.check(TokenKind::Cover) {
            self.advance();
            Some(self.expect_str()?)
        } else {
            None
        };

        Ok(TrackNode {
            title,
            author,
            duration,
            cover,
        })
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let t = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        t
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, CompileError> {
        if self.check(kind.clone()) {
            Ok(self.advance())
        } else {
            let t = self.peek();
            Err(CompileError::parse(
                format!("expected {:?}, got {:?}", kind, t.kind),
                t.line,
                t.col,
            ))
        }
    }

    fn expect_str(&mut self) -> Result<Leaf, CompileError> {
        let t = self.peek().clone();
        match t.kind {
            TokenKind::Str(raw) => {
                self.advance();
                Ok(Leaf::Str(raw))
            }
            other => Err(CompileError::parse(
                format!("expected string literal, got {other:?}"),
                t.line,
                t.col,
            )),
        }
    }

    fn expect_int(&mut self) -> Result<Leaf, CompileError> {
        let t = self.peek().clone();
        match t.kind {
            TokenKind::Int(raw) => {
                self.advance();
                Ok(Leaf::Int(raw))
            }
            other => Err(CompileError::parse(
                format!("expected integer literal, got {other:?}"),
                t.line,
                t.col,
            )),
        }
    }
}
