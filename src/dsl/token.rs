//! Token types for the playlist lexer.

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub col: usize,
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    Playlist,
    MaxDuration, // DURACAO_MAXIMA
    Genre,       // GENERO
    Year,        // ANO
    AgeRating,   // FAIXA_ETARIA
    Livre,       // LIVRE — unrestricted age rating
    Description, // DESCRICAO
    Track,       // MUSICA
    Author,      // AUTOR
    Duration,    // DURACAO
    Cover,       // CAPA
    Min,         // the `min` duration unit

    // Literals, kept as raw lexemes — coercion happens in the transformer
    Str(String), // includes the surrounding quotes and any escapes
    Int(String),

    // Special
    Eof,
}
