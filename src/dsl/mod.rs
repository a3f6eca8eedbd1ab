//! Playlist compiler — source text → syntax tree → validated playlist.

pub mod error;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod token;
pub mod transform;
pub mod tree;

pub use error::{CompileError, SemanticError};
pub use model::{AgeRating, Playlist, Track};
pub use transform::{CompilationResult, Transformer};
pub use tree::SyntaxTree;

use lexer::Lexer;
use parser::Parser;

/// The playlist compiler.
///
/// Parses source text through lexer → parser into a syntax tree, then
/// runs the semantic transformer over it.
pub struct Compiler;

impl Compiler {
    /// Parse playlist source into a syntax tree.
    pub fn parse(source: &str) -> Result<SyntaxTree, CompileError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        let mut parser = Parser::new(tokens);
        parser.parse()
    }

    /// Parse and semantically analyze playlist source.
    ///
    /// `Err` carries fatal syntax or internal errors; semantic rule
    /// violations surface through [`CompilationResult::Failure`].
    pub fn compile(source: &str) -> Result<CompilationResult, CompileError> {
        let tree = Self::parse(source)?;
        Transformer::new().transform(&tree)
    }
}
