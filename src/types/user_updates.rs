use super::RequestMeta;
use crate::decode::null_default;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One page of recent list updates, from `/anime/{id}/userupdates[/{page}]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserUpdates {
    #[serde(flatten)]
    pub request: RequestMeta,
    #[serde(deserialize_with = "null_default")]
    pub users: Vec<UserUpdate>,
}

/// A user's list entry for the anime at the time of the update
///
/// `score`, `episodes_seen` and `episodes_total` are frequently `null`
/// upstream and decode to `0` in that case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserUpdate {
    #[serde(deserialize_with = "null_default")]
    pub username: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_default")]
    pub score: u32,
    /// `Watching`, `Completed`, `Plan to Watch`, ...
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub episodes_seen: u32,
    #[serde(deserialize_with = "null_default")]
    pub episodes_total: u32,
    pub date: Option<DateTime<FixedOffset>>,
}
