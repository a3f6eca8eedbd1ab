//! Domain model built by the semantic transformer.

use serde::{Serialize, Serializer};

/// One song entry. Immutable after construction; owned by its playlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub title: String,
    pub author: String,
    pub duration_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_reference: Option<String>,
}

/// Age rating: the fixed `LIVRE` keyword or an integer in `[0, 18]`.
///
/// Range enforcement lives in the transformer; this type only keeps the
/// two shapes losslessly apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AgeRating {
    Unrestricted,
    Rated(i64),
}

impl Serialize for AgeRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AgeRating::Unrestricted => serializer.serialize_str("LIVRE"),
            AgeRating::Rated(n) => serializer.serialize_i64(*n),
        }
    }
}

/// The validated top-level record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Playlist {
    pub name: String,
    pub max_duration_minutes: i64,
    pub genre: String,
    pub year: i64,
    pub age_rating: AgeRating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tracks: Vec<Track>,
    /// Sum of track durations. Computed once at construction, never
    /// settable independently.
    pub total_duration_minutes: i64,
}

impl Playlist {
    pub fn new(
        name: String,
        max_duration_minutes: i64,
        genre: String,
        year: i64,
        age_rating: AgeRating,
        description: Option<String>,
        tracks: Vec<Track>,
    ) -> Self {
        // Saturating: construction must not panic, whatever the durations.
        let total_duration_minutes = tracks
            .iter()
            .fold(0i64, |total, t| total.saturating_add(t.duration_minutes));
        Self {
            name,
            max_duration_minutes,
            genre,
            year,
            age_rating,
            description,
            tracks,
            total_duration_minutes,
        }
    }
}
