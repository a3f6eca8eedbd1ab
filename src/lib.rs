//! Mixtape — a compiler for a small declarative playlist language.
//!
//! Source text is parsed into a syntax tree, semantically validated
//! into a [`dsl::Playlist`], and optionally rendered as a static HTML
//! page.

pub mod dsl;
pub mod html;
