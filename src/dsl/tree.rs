//! Syntax tree for the playlist language.
//!
//! These node shapes are the contract between the parser and the
//! semantic transformer. Leaves carry raw lexemes; stripping quotes and
//! parsing integers is the transformer's job.

/// The root node, produced once per parse.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    pub playlist: PlaylistNode,
}

/// A playlist: header, optional description, ordered track list.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistNode {
    pub header: HeaderNode,
    pub description: Option<Leaf>,
    pub tracks: Vec<TrackNode>,
}

/// The playlist header fields, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderNode {
    pub name: Leaf,
    pub max_duration: Leaf,
    pub genre: Leaf,
    pub year: Leaf,
    pub age_rating: Leaf,
}

/// One track entry. The cover reference may be entirely absent.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackNode {
    pub title: Leaf,
    pub author: Leaf,
    pub duration: Leaf,
    pub cover: Option<Leaf>,
}

/// A terminal token as it appears in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    /// A quoted string literal, surrounding quotes included.
    Str(String),
    /// A base-10 integer literal, unparsed.
    Int(String),
    /// The fixed `LIVRE` keyword — unrestricted age rating.
    Livre,
}
