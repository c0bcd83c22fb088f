use super::RequestMeta;
use crate::decode::null_default;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Recent forum threads about an anime, from `/anime/{id}/forum`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forum {
    #[serde(flatten)]
    pub request: RequestMeta,
    #[serde(deserialize_with = "null_default")]
    pub topics: Vec<ForumTopic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumTopic {
    #[serde(deserialize_with = "null_default")]
    pub topic_id: u32,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    pub date_posted: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_default")]
    pub author_name: String,
    #[serde(deserialize_with = "null_default")]
    pub author_url: String,
    #[serde(deserialize_with = "null_default")]
    pub replies: u32,
    #[serde(deserialize_with = "null_default")]
    pub last_post: LastPost,
}

/// The most recent reply in a thread
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastPost {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub author_name: String,
    #[serde(deserialize_with = "null_default")]
    pub author_url: String,
    pub date_posted: Option<DateTime<FixedOffset>>,
}
