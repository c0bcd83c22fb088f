//! Watch-status counters and score distribution.

use super::RequestMeta;
use crate::decode::null_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `/anime/{id}/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(flatten)]
    pub request: RequestMeta,
    #[serde(deserialize_with = "null_default")]
    pub watching: u32,
    #[serde(deserialize_with = "null_default")]
    pub completed: u32,
    #[serde(deserialize_with = "null_default")]
    pub on_hold: u32,
    #[serde(deserialize_with = "null_default")]
    pub dropped: u32,
    #[serde(deserialize_with = "null_default")]
    pub plan_to_watch: u32,
    #[serde(deserialize_with = "null_default")]
    pub total: u32,
    /// Votes per score, keyed `1` through `10`
    #[serde(deserialize_with = "null_default")]
    pub scores: BTreeMap<u8, ScoreVotes>,
}

/// Votes cast for one score value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreVotes {
    #[serde(deserialize_with = "null_default")]
    pub votes: u32,
    /// Share of all votes, in percent
    #[serde(deserialize_with = "null_default")]
    pub percentage: f64,
}
