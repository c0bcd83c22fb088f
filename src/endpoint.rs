//! URL construction for Jikan resources
//!
//! Every resource lives at `{base}/{kind}/{id}[/{subpath}][/{page}]`.
//! [`AnimeEndpoint`] maps each anime resource to its subpath; [`build_url`]
//! assembles the final URL.

/// Path segment of the anime resource family
pub const ANIME: &str = "anime";

/// The anime resources exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimeEndpoint {
    Details,
    CharactersStaff,
    Episodes,
    News,
    Pictures,
    Videos,
    Stats,
    Forum,
    MoreInfo,
    Reviews,
    Recommendations,
    UserUpdates,
}

impl AnimeEndpoint {
    /// All endpoints, in API documentation order
    pub const ALL: [AnimeEndpoint; 12] = [
        AnimeEndpoint::Details,
        AnimeEndpoint::CharactersStaff,
        AnimeEndpoint::Episodes,
        AnimeEndpoint::News,
        AnimeEndpoint::Pictures,
        AnimeEndpoint::Videos,
        AnimeEndpoint::Stats,
        AnimeEndpoint::Forum,
        AnimeEndpoint::MoreInfo,
        AnimeEndpoint::Reviews,
        AnimeEndpoint::Recommendations,
        AnimeEndpoint::UserUpdates,
    ];

    /// Path segment after the id, `None` for the details resource itself
    pub fn subpath(self) -> Option<&'static str> {
        match self {
            AnimeEndpoint::Details => None,
            AnimeEndpoint::CharactersStaff => Some("characters_staff"),
            AnimeEndpoint::Episodes => Some("episodes"),
            AnimeEndpoint::News => Some("news"),
            AnimeEndpoint::Pictures => Some("pictures"),
            AnimeEndpoint::Videos => Some("videos"),
            AnimeEndpoint::Stats => Some("stats"),
            AnimeEndpoint::Forum => Some("forum"),
            AnimeEndpoint::MoreInfo => Some("moreinfo"),
            AnimeEndpoint::Reviews => Some("reviews"),
            AnimeEndpoint::Recommendations => Some("recommendations"),
            AnimeEndpoint::UserUpdates => Some("userupdates"),
        }
    }

    /// Whether the resource accepts a trailing page segment
    pub fn is_paginated(self) -> bool {
        matches!(
            self,
            AnimeEndpoint::Episodes | AnimeEndpoint::Reviews | AnimeEndpoint::UserUpdates
        )
    }

    /// Builds the URL of this resource for the given anime
    ///
    /// `page` is ignored for resources that are not paginated.
    pub fn url(self, base: &str, id: u32, page: u32) -> String {
        let page = if self.is_paginated() { page } else { 0 };
        build_url(base, ANIME, id, self.subpath(), page)
    }
}

/// Builds `{base}/{kind}/{id}[/{subpath}][/{page}]`
///
/// The page segment is appended only for `page > 0`, so `0` means
/// "unpaginated". The id is not validated; `0` is sent as is.
///
/// # Examples
///
/// ```
/// use jikan_client::build_url;
///
/// assert_eq!(
///     build_url("https://api.jikan.moe/v3", "anime", 1, Some("episodes"), 2),
///     "https://api.jikan.moe/v3/anime/1/episodes/2"
/// );
/// assert_eq!(
///     build_url("https://api.jikan.moe/v3", "anime", 1, None, 0),
///     "https://api.jikan.moe/v3/anime/1"
/// );
/// ```
pub fn build_url(base: &str, kind: &str, id: u32, subpath: Option<&str>, page: u32) -> String {
    let mut url = format!("{}/{}/{}", base, kind, id);

    if let Some(subpath) = subpath {
        url.push('/');
        url.push_str(subpath);
    }

    if page > 0 {
        url.push('/');
        url.push_str(&page.to_string());
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.jikan.moe/v3";

    #[test]
    fn test_page_zero_omits_page_segment() {
        assert_eq!(
            build_url(BASE, ANIME, 1, Some("episodes"), 0),
            "https://api.jikan.moe/v3/anime/1/episodes"
        );
    }

    #[test]
    fn test_positive_page_is_last_segment() {
        for page in [1, 2, 37, u32::MAX] {
            let url = build_url(BASE, ANIME, 21, Some("reviews"), page);
            assert_eq!(url.rsplit('/').next(), Some(page.to_string().as_str()));
        }
    }

    #[test]
    fn test_id_zero_is_not_rejected() {
        assert_eq!(build_url(BASE, ANIME, 0, None, 0), "https://api.jikan.moe/v3/anime/0");
    }

    #[test]
    fn test_endpoint_subpaths() {
        assert_eq!(AnimeEndpoint::Details.url(BASE, 1, 0), format!("{}/anime/1", BASE));
        assert_eq!(
            AnimeEndpoint::CharactersStaff.url(BASE, 1, 0),
            format!("{}/anime/1/characters_staff", BASE)
        );
        assert_eq!(
            AnimeEndpoint::MoreInfo.url(BASE, 1, 0),
            format!("{}/anime/1/moreinfo", BASE)
        );
        assert_eq!(
            AnimeEndpoint::UserUpdates.url(BASE, 1, 3),
            format!("{}/anime/1/userupdates/3", BASE)
        );
    }

    #[test]
    fn test_page_ignored_for_unpaginated_endpoints() {
        for endpoint in AnimeEndpoint::ALL {
            let url = endpoint.url(BASE, 5, 4);
            assert_eq!(url.ends_with("/4"), endpoint.is_paginated(), "{:?}", endpoint);
        }
    }

    #[test]
    fn test_only_list_endpoints_are_paginated() {
        let paginated: Vec<_> = AnimeEndpoint::ALL
            .into_iter()
            .filter(|e| e.is_paginated())
            .collect();
        assert_eq!(
            paginated,
            vec![
                AnimeEndpoint::Episodes,
                AnimeEndpoint::Reviews,
                AnimeEndpoint::UserUpdates
            ]
        );
    }
}
