//! Jikan API client
//!
//! Every resource goes through the same pipeline: build the URL, perform one
//! GET through the transport, reject documented failure statuses, decode the
//! body. The per-resource methods only pick the endpoint and the record type.

use crate::decode::decode;
use crate::endpoint::AnimeEndpoint;
use crate::error::JikanError;
use crate::status::classify_status;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{
    Anime, CharactersStaff, Episodes, Forum, MoreInfo, News, Pictures, Recommendations, Reviews,
    Stats, UserUpdates, Videos,
};
use serde::de::DeserializeOwned;

/// Base URL of the public Jikan v3 API
pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v3";

/// Read-only client for the Jikan anime endpoints
///
/// The client only holds its base URL and transport; calls share no other
/// state and can be issued concurrently if the transport allows it.
///
/// Paginated methods take a `page` where `0` requests the unpaginated
/// resource (which Jikan treats as the first page).
///
/// # Examples
///
/// ```no_run
/// use jikan_client::JikanClient;
///
/// let client = JikanClient::jikan();
/// let anime = client.anime(1).unwrap();
/// println!("{} has {} episodes", anime.title, anime.episodes);
/// ```
#[derive(Debug, Clone)]
pub struct JikanClient<T> {
    base_url: String,
    transport: T,
}

impl JikanClient<ReqwestTransport> {
    /// Creates a client for the public Jikan API using a default reqwest transport
    pub fn jikan() -> Self {
        Self::new(DEFAULT_BASE_URL, ReqwestTransport::new())
    }
}

impl<T: Transport> JikanClient<T> {
    /// Creates a client for the API at `base_url`
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            transport,
        }
    }

    /// The base URL requests are built from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The transport requests are sent through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches `endpoint` for the given anime and decodes it as `R`
    ///
    /// A transport failure is returned as is. A documented failure status is
    /// returned without looking at the body. Anything else is decoded.
    pub fn fetch<R: DeserializeOwned>(
        &self,
        endpoint: AnimeEndpoint,
        id: u32,
        page: u32,
    ) -> Result<R, JikanError> {
        let url = endpoint.url(&self.base_url, id, page);

        let response = self.transport.get(&url)?;

        if let Some(kind) = classify_status(response.status) {
            return Err(kind.into());
        }

        decode(&response.body)
    }

    /// Details of an anime
    pub fn anime(&self, id: u32) -> Result<Anime, JikanError> {
        self.fetch(AnimeEndpoint::Details, id, 0)
    }

    /// Characters, their voice actors, and staff
    pub fn characters_staff(&self, id: u32) -> Result<CharactersStaff, JikanError> {
        self.fetch(AnimeEndpoint::CharactersStaff, id, 0)
    }

    /// One page of episodes (100 per page)
    pub fn episodes(&self, id: u32, page: u32) -> Result<Episodes, JikanError> {
        self.fetch(AnimeEndpoint::Episodes, id, page)
    }

    pub fn news(&self, id: u32) -> Result<News, JikanError> {
        self.fetch(AnimeEndpoint::News, id, 0)
    }

    pub fn pictures(&self, id: u32) -> Result<Pictures, JikanError> {
        self.fetch(AnimeEndpoint::Pictures, id, 0)
    }

    /// Promotional videos and streamable episodes
    pub fn videos(&self, id: u32) -> Result<Videos, JikanError> {
        self.fetch(AnimeEndpoint::Videos, id, 0)
    }

    /// Watch-status counters and score distribution
    pub fn stats(&self, id: u32) -> Result<Stats, JikanError> {
        self.fetch(AnimeEndpoint::Stats, id, 0)
    }

    pub fn forum(&self, id: u32) -> Result<Forum, JikanError> {
        self.fetch(AnimeEndpoint::Forum, id, 0)
    }

    pub fn more_info(&self, id: u32) -> Result<MoreInfo, JikanError> {
        self.fetch(AnimeEndpoint::MoreInfo, id, 0)
    }

    /// One page of user reviews
    pub fn reviews(&self, id: u32, page: u32) -> Result<Reviews, JikanError> {
        self.fetch(AnimeEndpoint::Reviews, id, page)
    }

    pub fn recommendations(&self, id: u32) -> Result<Recommendations, JikanError> {
        self.fetch(AnimeEndpoint::Recommendations, id, 0)
    }

    /// One page of recent user list updates
    pub fn user_updates(&self, id: u32, page: u32) -> Result<UserUpdates, JikanError> {
        self.fetch(AnimeEndpoint::UserUpdates, id, page)
    }
}
