//! HTTP status classification
//!
//! Jikan documents six failure statuses, each with a fixed message. Anything
//! else, including 4xx/5xx codes outside the table, is treated as success and
//! handed to the decoder. That gap is inherited from the upstream contract and
//! kept as is.

use std::fmt;

/// The documented failure categories of the Jikan API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusErrorKind {
    /// 400
    InvalidRequest,
    /// 404
    ResourceNotFound,
    /// 405
    MethodNotAllowed,
    /// 429
    RateLimited,
    /// 500, Jikan itself failed
    UpstreamApiError,
    /// 503, MyAnimeList behind Jikan failed
    UpstreamServiceError,
}

/// Status code, failure kind and fixed message for every classified status
pub const STATUS_ERRORS: &[(u16, StatusErrorKind, &str)] = &[
    (
        400,
        StatusErrorKind::InvalidRequest,
        "Invalid or incomplete request. Please double check the request documentation",
    ),
    (404, StatusErrorKind::ResourceNotFound, "Resource does not exist"),
    (
        405,
        StatusErrorKind::MethodNotAllowed,
        "Method is not allowed for this resource",
    ),
    (
        429,
        StatusErrorKind::RateLimited,
        "Too many requests sent. Rate limited by the source",
    ),
    (
        500,
        StatusErrorKind::UpstreamApiError,
        "Something is not working in Jikan API",
    ),
    (
        503,
        StatusErrorKind::UpstreamServiceError,
        "Something is not working in MyAnimeList",
    ),
];

impl StatusErrorKind {
    fn entry(self) -> &'static (u16, StatusErrorKind, &'static str) {
        STATUS_ERRORS
            .iter()
            .find(|(_, kind, _)| *kind == self)
            .unwrap_or_else(|| unreachable!("every kind has a table entry"))
    }

    /// The HTTP status code this kind is derived from
    pub fn status(self) -> u16 {
        self.entry().0
    }

    /// The fixed human-readable message for this kind
    pub fn message(self) -> &'static str {
        self.entry().2
    }
}

impl fmt::Display for StatusErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for StatusErrorKind {}

/// Maps a status code to a failure kind, or `None` when the response should be decoded
pub fn classify_status(status: u16) -> Option<StatusErrorKind> {
    STATUS_ERRORS
        .iter()
        .find(|(code, _, _)| *code == status)
        .map(|(_, kind, _)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_statuses_have_fixed_messages() {
        let expected = [
            (
                400,
                "Invalid or incomplete request. Please double check the request documentation",
            ),
            (404, "Resource does not exist"),
            (405, "Method is not allowed for this resource"),
            (429, "Too many requests sent. Rate limited by the source"),
            (500, "Something is not working in Jikan API"),
            (503, "Something is not working in MyAnimeList"),
        ];

        for (status, message) in expected {
            let kind = classify_status(status).unwrap();
            assert_eq!(kind.to_string(), message);
            assert_eq!(kind.status(), status);
        }
    }

    #[test]
    fn test_kinds_map_to_expected_variants() {
        assert_eq!(classify_status(400), Some(StatusErrorKind::InvalidRequest));
        assert_eq!(classify_status(404), Some(StatusErrorKind::ResourceNotFound));
        assert_eq!(classify_status(405), Some(StatusErrorKind::MethodNotAllowed));
        assert_eq!(classify_status(429), Some(StatusErrorKind::RateLimited));
        assert_eq!(classify_status(500), Some(StatusErrorKind::UpstreamApiError));
        assert_eq!(
            classify_status(503),
            Some(StatusErrorKind::UpstreamServiceError)
        );
    }

    #[test]
    fn test_unlisted_statuses_pass_through() {
        for status in [200, 201, 204, 301, 401, 403, 418, 422, 502, 504, 0, 999] {
            assert_eq!(classify_status(status), None, "status {}", status);
        }
    }
}
