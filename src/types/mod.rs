//! Jikan API response records.
//!
//! These structures mirror the JSON returned by the Jikan v3 anime endpoints.
//! Field names follow the upstream keys exactly (via `rename` where Rust
//! naming differs). Every leaf tolerates `null` or a missing key and falls
//! back to its default value.

mod anime;
mod characters;
mod episodes;
mod forum;
mod media;
mod news;
mod recommendations;
mod reviews;
mod stats;
mod user_updates;

pub use anime::{AiredDate, AiredProp, AiredTimeline, Anime, MoreInfo, RelatedAnime};
pub use characters::{Character, CharactersStaff, StaffMember, VoiceActor};
pub use episodes::{Episode, Episodes};
pub use forum::{Forum, ForumTopic, LastPost};
pub use media::{EpisodeVideo, Picture, Pictures, PromoVideo, Videos};
pub use news::{News, NewsArticle};
pub use recommendations::{Recommendation, Recommendations};
pub use reviews::{Review, ReviewScores, Reviewer, Reviews};
pub use stats::{ScoreVotes, Stats};
pub use user_updates::{UserUpdate, UserUpdates};

use crate::decode::null_default;
use serde::{Deserialize, Serialize};

/// Cache envelope Jikan adds to every top-level response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestMeta {
    /// Identifier of the cached upstream request
    #[serde(deserialize_with = "null_default")]
    pub request_hash: String,
    /// Whether Jikan answered from its own cache
    #[serde(deserialize_with = "null_default")]
    pub request_cached: bool,
    /// Seconds until Jikan's cached copy expires
    #[serde(deserialize_with = "null_default")]
    pub request_cache_expiry: u64,
}

/// A reference to another MyAnimeList entity (studio, genre, related anime, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MalResource {
    #[serde(deserialize_with = "null_default")]
    pub mal_id: u32,
    /// Entity type as reported upstream, e.g. `anime` or `manga`
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}
