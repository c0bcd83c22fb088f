//! Anime details and the "more info" blurb.

use super::{MalResource, RequestMeta};
use crate::decode::{null_default, object_or_default};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Full details of an anime, as returned by `/anime/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Anime {
    #[serde(flatten)]
    pub request: RequestMeta,
    /// MyAnimeList id
    #[serde(deserialize_with = "null_default")]
    pub mal_id: u32,
    /// MyAnimeList page of the anime
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    /// Cover image
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
    /// Embeddable trailer (empty when there is none)
    #[serde(deserialize_with = "null_default")]
    pub trailer_url: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub title_english: String,
    #[serde(deserialize_with = "null_default")]
    pub title_japanese: String,
    #[serde(deserialize_with = "null_default")]
    pub title_synonyms: Vec<String>,
    /// Media type: `TV`, `Movie`, `OVA`, ...
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    /// Source material: `Original`, `Manga`, ...
    #[serde(deserialize_with = "null_default")]
    pub source: String,
    /// Episode count, `0` while unknown
    #[serde(deserialize_with = "null_default")]
    pub episodes: u32,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub airing: bool,
    #[serde(deserialize_with = "null_default")]
    pub aired: AiredTimeline,
    #[serde(deserialize_with = "null_default")]
    pub duration: String,
    #[serde(deserialize_with = "null_default")]
    pub rating: String,
    #[serde(deserialize_with = "null_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_default")]
    pub scored_by: u32,
    #[serde(deserialize_with = "null_default")]
    pub rank: u32,
    #[serde(deserialize_with = "null_default")]
    pub popularity: u32,
    #[serde(deserialize_with = "null_default")]
    pub members: u32,
    #[serde(deserialize_with = "null_default")]
    pub favorites: u32,
    #[serde(deserialize_with = "null_default")]
    pub synopsis: String,
    #[serde(deserialize_with = "null_default")]
    pub background: String,
    /// Season of first broadcast, e.g. `Spring 1998`
    #[serde(deserialize_with = "null_default")]
    pub premiered: String,
    /// Weekly broadcast slot, e.g. `Saturdays at 01:00 (JST)`
    #[serde(deserialize_with = "null_default")]
    pub broadcast: String,
    #[serde(deserialize_with = "object_or_default")]
    pub related: RelatedAnime,
    #[serde(deserialize_with = "null_default")]
    pub producers: Vec<MalResource>,
    #[serde(deserialize_with = "null_default")]
    pub licensors: Vec<MalResource>,
    #[serde(deserialize_with = "null_default")]
    pub studios: Vec<MalResource>,
    #[serde(deserialize_with = "null_default")]
    pub genres: Vec<MalResource>,
    #[serde(deserialize_with = "null_default")]
    pub opening_themes: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub ending_themes: Vec<String>,
}

/// When an anime aired
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiredTimeline {
    /// First broadcast, `None` when unknown
    pub from: Option<DateTime<FixedOffset>>,
    /// Last broadcast, `None` while airing or unknown
    pub to: Option<DateTime<FixedOffset>>,
    /// The same dates split into components, which may be partially known
    #[serde(deserialize_with = "null_default")]
    pub prop: AiredProp,
    /// Human-readable range, e.g. `Apr 3, 1998 to Apr 24, 1999`
    #[serde(deserialize_with = "null_default")]
    pub string: String,
}

/// Start and end of the aired range as individual date components
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiredProp {
    #[serde(deserialize_with = "null_default")]
    pub from: AiredDate,
    #[serde(deserialize_with = "null_default")]
    pub to: AiredDate,
}

/// A possibly incomplete date; unknown components are `0`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiredDate {
    #[serde(deserialize_with = "null_default")]
    pub day: u32,
    #[serde(deserialize_with = "null_default")]
    pub month: u32,
    #[serde(deserialize_with = "null_default")]
    pub year: u32,
}

/// Other entries related to an anime, grouped by relation kind
///
/// Upstream keys are the MyAnimeList relation labels, spaces included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedAnime {
    #[serde(rename = "Adaptation", deserialize_with = "null_default")]
    pub adaptation: Vec<MalResource>,
    #[serde(rename = "Side story", deserialize_with = "null_default")]
    pub side_story: Vec<MalResource>,
    #[serde(rename = "Summary", deserialize_with = "null_default")]
    pub summary: Vec<MalResource>,
    #[serde(rename = "Sequel", deserialize_with = "null_default")]
    pub sequel: Vec<MalResource>,
    #[serde(rename = "Prequel", deserialize_with = "null_default")]
    pub prequel: Vec<MalResource>,
    #[serde(rename = "Parent story", deserialize_with = "null_default")]
    pub parent_story: Vec<MalResource>,
    #[serde(rename = "Full story", deserialize_with = "null_default")]
    pub full_story: Vec<MalResource>,
    #[serde(rename = "Alternative version", deserialize_with = "null_default")]
    pub alternative_version: Vec<MalResource>,
    #[serde(rename = "Alternative setting", deserialize_with = "null_default")]
    pub alternative_setting: Vec<MalResource>,
    #[serde(rename = "Spin-off", deserialize_with = "null_default")]
    pub spin_off: Vec<MalResource>,
    #[serde(rename = "Character", deserialize_with = "null_default")]
    pub character: Vec<MalResource>,
    #[serde(rename = "Other", deserialize_with = "null_default")]
    pub other: Vec<MalResource>,
}

/// Free-form extra information, from `/anime/{id}/moreinfo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoreInfo {
    #[serde(flatten)]
    pub request: RequestMeta,
    #[serde(deserialize_with = "null_default")]
    pub moreinfo: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn test_aired_timeline_parses_dates() {
        let json = br#"{
            "from": "1998-04-03T00:00:00+00:00",
            "to": null,
            "prop": {"from": {"day": 3, "month": 4, "year": 1998}, "to": {"day": null, "month": null, "year": null}},
            "string": "Apr 3, 1998 to ?"
        }"#;

        let aired: AiredTimeline = decode(json).unwrap();
        assert_eq!(
            aired.from.unwrap().to_rfc3339(),
            "1998-04-03T00:00:00+00:00"
        );
        assert!(aired.to.is_none());
        assert_eq!(aired.prop.from.year, 1998);
        assert_eq!(aired.prop.to, AiredDate::default());
    }

    #[test]
    fn test_related_uses_upstream_labels() {
        let json = br#"{"Side story": [{"mal_id": 5, "type": "anime", "name": "Cowboy Bebop: Tengoku no Tobira", "url": "https://myanimelist.net/anime/5"}], "Adaptation": null}"#;

        let related: RelatedAnime = decode(json).unwrap();
        assert_eq!(related.side_story.len(), 1);
        assert_eq!(related.side_story[0].kind, "anime");
        assert!(related.adaptation.is_empty());
    }

    #[test]
    fn test_anime_tolerates_nulls_everywhere() {
        // `related` comes back as an empty array when an anime has no relations
        let json = br#"{"mal_id": 1, "title_english": null, "trailer_url": null, "score": null, "rank": null, "aired": null, "related": [], "genres": null}"#;

        let anime: Anime = decode(json).unwrap();
        assert_eq!(anime.mal_id, 1);
        assert_eq!(anime.title_english, "");
        assert_eq!(anime.score, 0.0);
        assert_eq!(anime.aired, AiredTimeline::default());
        assert!(anime.genres.is_empty());
        assert_eq!(anime.related, RelatedAnime::default());
    }

    #[test]
    fn test_request_meta_is_flattened() {
        let json = br#"{"request_hash": "request:anime:1", "request_cached": true, "request_cache_expiry": 42, "moreinfo": "Suggested Order of Viewing"}"#;

        let info: MoreInfo = decode(json).unwrap();
        assert_eq!(info.request.request_hash, "request:anime:1");
        assert!(info.request.request_cached);
        assert_eq!(info.request.request_cache_expiry, 42);
        assert_eq!(info.moreinfo, "Suggested Order of Viewing");
    }
}
