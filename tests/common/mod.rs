//! Shared helpers for integration tests.

#![allow(dead_code)]

use jikan_client::{HttpResponse, JikanClient, JikanError, Transport, TransportError};
use std::sync::Mutex;

pub const BASE_URL: &str = "http://jikan.test/v3";

/// A transport that replays one scripted outcome for every request
///
/// Requested URLs are recorded so tests can assert on them.
pub struct ScriptedTransport {
    outcome: Result<(u16, Vec<u8>), String>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    /// Answers every request with `status` and `body`
    pub fn respond(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            outcome: Ok((status, body.into())),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Fails every request with a transport error carrying `message`
    pub fn fail(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requested.lock().unwrap().push(url.to_string());

        match &self.outcome {
            Ok((status, body)) => Ok(HttpResponse::new(*status, body.clone())),
            Err(message) => Err(TransportError::new(message.clone())),
        }
    }
}

pub fn client(transport: ScriptedTransport) -> JikanClient<ScriptedTransport> {
    JikanClient::new(BASE_URL, transport)
}

/// Calls every client operation once, discarding successful records
pub fn call_every_operation<T: Transport>(
    client: &JikanClient<T>,
    id: u32,
) -> Vec<(&'static str, Result<(), JikanError>)> {
    vec![
        ("anime", client.anime(id).map(drop)),
        ("characters_staff", client.characters_staff(id).map(drop)),
        ("episodes", client.episodes(id, 1).map(drop)),
        ("news", client.news(id).map(drop)),
        ("pictures", client.pictures(id).map(drop)),
        ("videos", client.videos(id).map(drop)),
        ("stats", client.stats(id).map(drop)),
        ("forum", client.forum(id).map(drop)),
        ("more_info", client.more_info(id).map(drop)),
        ("reviews", client.reviews(id, 1).map(drop)),
        ("recommendations", client.recommendations(id).map(drop)),
        ("user_updates", client.user_updates(id, 1).map(drop)),
    ]
}
