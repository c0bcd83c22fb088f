use super::RequestMeta;
use crate::decode::null_default;
use serde::{Deserialize, Serialize};

/// User recommendations of similar anime, from `/anime/{id}/recommendations`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendations {
    #[serde(flatten)]
    pub request: RequestMeta,
    #[serde(deserialize_with = "null_default")]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    /// Id of the recommended anime
    #[serde(deserialize_with = "null_default")]
    pub mal_id: u32,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
    /// Page listing the users' reasons for the recommendation
    #[serde(deserialize_with = "null_default")]
    pub recommendation_url: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    /// How many users made this recommendation
    #[serde(deserialize_with = "null_default")]
    pub recommendation_count: u32,
}
