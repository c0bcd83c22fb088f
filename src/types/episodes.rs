//! Paginated episode listings.

use super::RequestMeta;
use crate::decode::null_default;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One page of `/anime/{id}/episodes[/{page}]`
///
/// Jikan returns up to 100 episodes per page. A page past the end yields an
/// empty `episodes` list, with `episodes_last_page` telling the caller where
/// the listing stops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episodes {
    #[serde(flatten)]
    pub request: RequestMeta,
    /// Number of the last available page
    #[serde(deserialize_with = "null_default")]
    pub episodes_last_page: u32,
    #[serde(deserialize_with = "null_default")]
    pub episodes: Vec<Episode>,
}

/// A single episode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
    /// Episode number within the anime
    #[serde(deserialize_with = "null_default")]
    pub episode_id: u32,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub title_japanese: String,
    #[serde(deserialize_with = "null_default")]
    pub title_romanji: String,
    /// Original broadcast date, `None` when unknown
    pub aired: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_default")]
    pub filler: bool,
    #[serde(deserialize_with = "null_default")]
    pub recap: bool,
    #[serde(deserialize_with = "null_default")]
    pub video_url: String,
    #[serde(deserialize_with = "null_default")]
    pub forum_url: String,
}
