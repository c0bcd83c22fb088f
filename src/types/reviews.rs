//! Paginated user reviews.

use super::RequestMeta;
use crate::decode::null_default;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One page of `/anime/{id}/reviews[/{page}]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reviews {
    #[serde(flatten)]
    pub request: RequestMeta,
    #[serde(deserialize_with = "null_default")]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    /// Id of the review itself
    #[serde(deserialize_with = "null_default")]
    pub mal_id: u32,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    /// Number of users who marked the review as helpful
    #[serde(deserialize_with = "null_default")]
    pub helpful_count: u32,
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_default")]
    pub reviewer: Reviewer,
    #[serde(deserialize_with = "null_default")]
    pub content: String,
}

/// Author of a review, with the scores they gave
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reviewer {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_default")]
    pub username: String,
    #[serde(deserialize_with = "null_default")]
    pub episodes_seen: u32,
    #[serde(deserialize_with = "null_default")]
    pub scores: ReviewScores,
}

/// Per-category scores of a review, each 1 to 10
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewScores {
    #[serde(deserialize_with = "null_default")]
    pub overall: u32,
    #[serde(deserialize_with = "null_default")]
    pub story: u32,
    #[serde(deserialize_with = "null_default")]
    pub animation: u32,
    #[serde(deserialize_with = "null_default")]
    pub sound: u32,
    #[serde(deserialize_with = "null_default")]
    pub character: u32,
    #[serde(deserialize_with = "null_default")]
    pub enjoyment: u32,
}
