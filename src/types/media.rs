//! Pictures and videos.

use super::RequestMeta;
use crate::decode::null_default;
use serde::{Deserialize, Serialize};

/// Response of `/anime/{id}/pictures`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pictures {
    #[serde(flatten)]
    pub request: RequestMeta,
    #[serde(deserialize_with = "null_default")]
    pub pictures: Vec<Picture>,
}

/// One picture in two resolutions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Picture {
    #[serde(deserialize_with = "null_default")]
    pub large: String,
    #[serde(deserialize_with = "null_default")]
    pub small: String,
}

/// Response of `/anime/{id}/videos`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Videos {
    #[serde(flatten)]
    pub request: RequestMeta,
    /// Trailers and promotional clips
    #[serde(deserialize_with = "null_default")]
    pub promo: Vec<PromoVideo>,
    /// Streamable episodes
    #[serde(deserialize_with = "null_default")]
    pub episodes: Vec<EpisodeVideo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoVideo {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_default")]
    pub video_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeVideo {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    /// Episode label, e.g. `Episode 1`
    #[serde(deserialize_with = "null_default")]
    pub episode: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
}
