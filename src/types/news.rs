use super::RequestMeta;
use crate::decode::null_default;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// News articles mentioning an anime, from `/anime/{id}/news`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct News {
    #[serde(flatten)]
    pub request: RequestMeta,
    #[serde(deserialize_with = "null_default")]
    pub articles: Vec<NewsArticle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsArticle {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_default")]
    pub author_name: String,
    #[serde(deserialize_with = "null_default")]
    pub author_url: String,
    #[serde(deserialize_with = "null_default")]
    pub forum_url: String,
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
    /// Number of forum comments on the article
    #[serde(deserialize_with = "null_default")]
    pub comments: u32,
    /// Teaser text
    #[serde(deserialize_with = "null_default")]
    pub intro: String,
}
