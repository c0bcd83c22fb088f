//! jikan_client - Read-only client for the Jikan anime catalog API
//!
//! This library fetches anime metadata (details, credits, episodes, news,
//! media, statistics, forum threads, recommendations, reviews and user
//! updates) from the Jikan v3 REST API and decodes it into typed records.
//!
//! Each call follows the same pipeline: build the URL, perform one GET through
//! a pluggable [`Transport`], classify the status code, decode the body. The
//! outcome is either a fully populated record or exactly one [`JikanError`].
//!
//! # Known upstream limitation
//!
//! Only the six failure statuses Jikan documents (400, 404, 405, 429, 500,
//! 503) are reported as [`StatusErrorKind`]s. Any other status, 4xx and 5xx
//! included, is treated as success and its body is decoded.
//!
//! # Examples
//!
//! ```no_run
//! use jikan_client::{JikanClient, JikanError};
//!
//! let client = JikanClient::jikan();
//!
//! match client.episodes(1, 1) {
//!     Ok(page) => {
//!         for episode in &page.episodes {
//!             println!("{:>3} {}", episode.episode_id, episode.title);
//!         }
//!         println!("last page: {}", page.episodes_last_page);
//!     }
//!     Err(JikanError::Status(kind)) => eprintln!("rejected ({}): {}", kind.status(), kind),
//!     Err(e) => eprintln!("failed: {}", e),
//! }
//! ```

mod client;
mod decode;
mod endpoint;
mod error;
mod status;
mod transport;
pub mod types;

pub use client::{DEFAULT_BASE_URL, JikanClient};
pub use decode::decode;
pub use endpoint::{ANIME, AnimeEndpoint, build_url};
pub use error::JikanError;
pub use status::{STATUS_ERRORS, StatusErrorKind, classify_status};
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportError};
