//! Semantic transformer — walks the syntax tree into a validated [`Playlist`].
//!
//! Coerces raw leaves into typed values, builds the domain records, and
//! runs every business rule in one pass, collecting diagnostics instead
//! of throwing. Construction never aborts on a rule violation, so a
//! single compilation reports every problem at once.

use std::collections::HashSet;

use url::Url;

use super::error::{CompileError, SemanticError};
use super::model::{AgeRating, Playlist, Track};
use super::tree::{Leaf, SyntaxTree, TrackNode};

/// Playlists dated after this year are rejected as future-dated.
const CUTOFF_YEAR: i64 = 2025;

/// Numeric age ratings must fall in this inclusive range.
const AGE_RATING_RANGE: std::ops::RangeInclusive<i64> = 0..=18;

/// Descriptions longer than this draw a diagnostic.
const MAX_DESCRIPTION_CHARS: usize = 500;

/// The outcome of one compilation: a validated playlist, or every
/// diagnostic collected along the way. There is no partial success —
/// any diagnostic forces `Failure`.
#[derive(Debug, Clone)]
pub enum CompilationResult {
    Success(Playlist),
    Failure(Vec<SemanticError>),
}

/// One transformer per compilation. Owns the diagnostic list for the
/// duration of the run; consumed by [`Transformer::transform`], so
/// accumulated state can never leak into a later compilation.
#[derive(Debug, Default)]
pub struct Transformer {
    errors: Vec<SemanticError>,
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the tree bottom-up and produce the compilation result.
    ///
    /// Returns `Err` only for internal errors: leaves the grammar
    /// guaranteed to be well-formed that fail coercion. Rule violations
    /// are collected and surfaced through `CompilationResult::Failure`.
    pub fn transform(mut self, tree: &SyntaxTree) -> Result<CompilationResult, CompileError> {
        let node = &tree.playlist;

        let name = coerce_string(&node.header.name)?;
        let max_duration = coerce_int(&node.header.max_duration)?;
        let genre = coerce_string(&node.header.genre)?;
        let year = coerce_int(&node.header.year)?;
        let age_rating = coerce_age_rating(&node.header.age_rating)?;
        let description = match &node.description {
            Some(leaf) => Some(coerce_string(leaf)?),
            None => None,
        };

        let mut tracks = Vec::with_capacity(node.tracks.len());
        for track_node in &node.tracks {
            tracks.push(self.build_track(track_node)?);
        }

        let playlist = Playlist::new(
            name,
            max_duration,
            genre,
            year,
            age_rating,
            description,
            tracks,
        );

        self.validate_playlist(&playlist);
        self.check_duplicates(&playlist);
        self.check_covers(&playlist);

        if self.errors.is_empty() {
            Ok(CompilationResult::Success(playlist))
        } else {
            Ok(CompilationResult::Failure(self.errors))
        }
    }

    /// Build a track record. Always succeeds; an invalid duration is
    /// recorded as a diagnostic, never an abort.
    fn build_track(&mut self, node: &TrackNode) -> Result<Track, CompileError> {
        let title = coerce_string(&node.title)?;
        let author = coerce_string(&node.author)?;
        let duration = coerce_int(&node.duration)?;
        let cover = match &node.cover {
            Some(leaf) => Some(coerce_string(leaf)?),
            None => None,
        };

        if duration <= 0 {
            self.errors.push(SemanticError::new(format!(
                "duration of track '{title}' by '{author}' ({duration} min) must be positive."
            )));
        }

        Ok(Track {
            title,
            author,
            duration_minutes: duration,
            cover_reference: cover,
        })
    }

    /// Playlist-level rules. Independent: every rule is evaluated and
    /// every violation reported in the same pass.
    fn validate_playlist(&mut self, playlist: &Playlist) {
        if playlist.max_duration_minutes <= 0 {
            self.errors.push(SemanticError::new(format!(
                "max duration of playlist '{}' ({} min) must be positive.",
                playlist.name, playlist.max_duration_minutes
            )));
        }

        if playlist.year > CUTOFF_YEAR {
            self.errors.push(SemanticError::new(format!(
                "year of playlist '{}' ({}) must not be in the future.",
                playlist.name, playlist.year
            )));
        }

        if let AgeRating::Rated(n) = playlist.age_rating {
            if !AGE_RATING_RANGE.contains(&n) {
                self.errors.push(SemanticError::new(format!(
                    "age rating '{n}' for playlist '{}' is invalid; must be LIVRE or between 0 and 18.",
                    playlist.name
                )));
            }
        }

        if playlist.name.trim().is_empty() {
            self.errors
                .push(SemanticError::new("playlist name must not be empty."));
        }

        if let Some(description) = &playlist.description {
            let len = description.chars().count();
            if len > MAX_DESCRIPTION_CHARS {
                self.errors.push(SemanticError::new(format!(
                    "Warning: description of playlist '{}' is {len} characters long (limit {MAX_DESCRIPTION_CHARS}).",
                    playlist.name
                )));
            }
        }

        if playlist.total_duration_minutes > playlist.max_duration_minutes {
            self.errors.push(SemanticError::new(format!(
                "total duration of tracks ({} min) exceeds the maximum duration of playlist '{}' ({} min).",
                playlist.total_duration_minutes, playlist.name, playlist.max_duration_minutes
            )));
        }
    }

    /// Duplicate detection: one linear pass over lowercased
    /// (title, author) keys. The first occurrence of a key is never
    /// flagged; every later one draws exactly one diagnostic.
    fn check_duplicates(&mut self, playlist: &Playlist) {
        let mut seen = HashSet::new();
        for track in &playlist.tracks {
            let key = (track.title.to_lowercase(), track.author.to_lowercase());
            if !seen.insert(key) {
                self.errors.push(SemanticError::new(format!(
                    "duplicate track '{}' by '{}' in playlist '{}'.",
                    track.title, track.author, playlist.name
                )));
            }
        }
    }

    /// Cover-reference format check, per track with a non-empty
    /// reference. A reference must be either a well-formed URL (scheme
    /// and host) or a bare path (neither); anything in between is a
    /// format warning, and unparseable input is flagged separately.
    fn check_covers(&mut self, playlist: &Playlist) {
        for track in &playlist.tracks {
            let Some(reference) = track.cover_reference.as_deref() else {
                continue;
            };
            if reference.is_empty() {
                continue;
            }

            match Url::parse(reference) {
                // Scheme and host both present: a well-formed URL.
                Ok(parsed) if parsed.has_host() => {}
                // Scheme without a host.
                Ok(_) | Err(url::ParseError::EmptyHost) => {
                    self.errors.push(SemanticError::new(format!(
                        "Warning: cover reference '{reference}' for track '{}' is not a valid URL or file path.",
                        track.title
                    )));
                }
                // No scheme at all: a bare path, which is fine.
                Err(url::ParseError::RelativeUrlWithoutBase) => {}
                Err(_) => {
                    self.errors.push(SemanticError::new(format!(
                        "invalid cover format '{reference}' for track '{}'.",
                        track.title
                    )));
                }
            }
        }
    }
}

/// Strip the surrounding quotes and rewrite `\"` to a literal quote.
/// Any other backslash sequence passes through unchanged.
fn coerce_string(leaf: &Leaf) -> Result<String, CompileError> {
    match leaf {
        Leaf::Str(raw) => raw
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .map(|s| s.replace("\\\"", "\""))
            .ok_or_else(|| {
                CompileError::internal(format!("string token {raw:?} is missing its quotes"))
            }),
        other => Err(CompileError::internal(format!(
            "expected string leaf, got {other:?}"
        ))),
    }
}

/// Parse a base-10 signed integer leaf. The grammar already classified
/// the token, so failure here is an internal error, not a diagnostic.
fn coerce_int(leaf: &Leaf) -> Result<i64, CompileError> {
    match leaf {
        Leaf::Int(raw) => raw.parse().map_err(|e| {
            CompileError::internal(format!("integer token '{raw}' failed to parse: {e}"))
        }),
        other => Err(CompileError::internal(format!(
            "expected integer leaf, got {other:?}"
        ))),
    }
}

fn coerce_age_rating(leaf: &Leaf) -> Result<AgeRating, CompileError> {
    match leaf {
        Leaf::Livre => Ok(AgeRating::Unrestricted),
        Leaf::Int(_) => Ok(AgeRating::Rated(coerce_int(leaf)?)),
        other => Err(CompileError::internal(format!(
            "expected age rating leaf, got {other:?}"
        ))),
    }
}
