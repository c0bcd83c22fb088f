//! Credits: characters with their voice actors, and production staff.

use super::RequestMeta;
use crate::decode::null_default;
use serde::{Deserialize, Serialize};

/// Response of `/anime/{id}/characters_staff`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharactersStaff {
    #[serde(flatten)]
    pub request: RequestMeta,
    #[serde(deserialize_with = "null_default")]
    pub characters: Vec<Character>,
    #[serde(deserialize_with = "null_default")]
    pub staff: Vec<StaffMember>,
}

/// A character appearing in the anime
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    #[serde(deserialize_with = "null_default")]
    pub mal_id: u32,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// `Main` or `Supporting`
    #[serde(deserialize_with = "null_default")]
    pub role: String,
    #[serde(deserialize_with = "null_default")]
    pub voice_actors: Vec<VoiceActor>,
}

/// A person voicing a character in one language
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceActor {
    #[serde(deserialize_with = "null_default")]
    pub mal_id: u32,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
}

/// A production staff member and their positions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffMember {
    #[serde(deserialize_with = "null_default")]
    pub mal_id: u32,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_default")]
    pub positions: Vec<String>,
}
