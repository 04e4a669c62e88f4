//! Conversions between meta hrefs and entity IDs.
//!
//! A meta href is the canonical URL of an entity, e.g.
//! `https://api.moysklad.ru/api/remap/1.2/entity/store/7944ef04-...`.
//! The entity ID is always its last path segment. Custom dictionary
//! elements carry the dictionary ID one segment earlier:
//! `.../entity/customentity/{dictionary_id}/{id}`.

/// Base URL used for hrefs built client-side.
pub const DEFAULT_BASE_URL: &str = "https://api.moysklad.ru/api/remap/1.2";

/// Entity type of custom dictionary elements.
pub const CUSTOM_ENTITY_TYPE: &str = "customentity";

/// Returns the entity ID encoded in an href.
///
/// The query string and any trailing slash are ignored.
///
/// ```rust
/// use moysklad_api::util::parse_id;
///
/// assert_eq!(parse_id("https://h/api/remap/1.2/entity/store/abc?expand=group"), "abc");
/// ```
#[must_use]
pub fn parse_id(href: &str) -> &str {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let path = path.trim_end_matches('/');
    path.rsplit('/').next().unwrap_or(path)
}

/// Builds the href of an ordinary entity: `{base_url}/entity/{type}/{id}`.
#[must_use]
pub fn make_href(base_url: &str, entity_type: &str, id: &str) -> String {
    format!("{}/entity/{entity_type}/{id}", base_url.trim_end_matches('/'))
}

/// Builds the href of a custom dictionary element:
/// `{base_url}/entity/customentity/{dictionary_id}/{id}`.
#[must_use]
pub fn make_custom_entity_href(base_url: &str, dictionary_id: &str, id: &str) -> String {
    format!(
        "{}/entity/{CUSTOM_ENTITY_TYPE}/{dictionary_id}/{id}",
        base_url.trim_end_matches('/')
    )
}

/// Returns the dictionary ID of a custom element href, if it has one.
#[must_use]
pub fn parse_custom_dictionary_id(href: &str) -> Option<&str> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let mut segments = path.trim_end_matches('/').rsplit('/');
    let _id = segments.next()?;
    let dictionary_id = segments.next()?;
    (segments.next()? == CUSTOM_ENTITY_TYPE).then_some(dictionary_id)
}

/// Percent-encodes an ID for use as one URL path segment.
///
/// ```rust
/// use moysklad_api::util::path_segment;
///
/// assert_eq!(path_segment("7944ef04-f831"), "7944ef04-f831");
/// assert_eq!(path_segment("a/b?c"), "a%2Fb%3Fc");
/// ```
#[must_use]
pub fn path_segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: &[&str] = &[
        "7944ef04-f831-11e5-7a69-971500188b19",
        "1",
        "a-b-c",
    ];

    #[test]
    fn test_parse_id_inverts_make_href() {
        for id in IDS {
            for entity_type in ["store", "organization", "cashout"] {
                let href = make_href(DEFAULT_BASE_URL, entity_type, id);
                assert_eq!(parse_id(&href), *id, "href: {href}");
            }
        }
    }

    #[test]
    fn test_parse_id_inverts_custom_entity_href() {
        for id in IDS {
            let href = make_custom_entity_href(DEFAULT_BASE_URL, "dict-1", id);
            assert_eq!(parse_id(&href), *id);
            assert_eq!(parse_custom_dictionary_id(&href), Some("dict-1"));
        }
    }

    #[test]
    fn test_make_href_shapes() {
        assert_eq!(
            make_href("http://localhost/api/remap/1.2/", "store", "42"),
            "http://localhost/api/remap/1.2/entity/store/42"
        );
        assert_eq!(
            make_custom_entity_href(DEFAULT_BASE_URL, "d", "e"),
            "https://api.moysklad.ru/api/remap/1.2/entity/customentity/d/e"
        );
    }

    #[test]
    fn test_parse_id_ignores_query_and_trailing_slash() {
        assert_eq!(parse_id("https://h/entity/store/abc/"), "abc");
        assert_eq!(parse_id("https://h/entity/store/abc?limit=1"), "abc");
        assert_eq!(parse_id("abc"), "abc");
    }

    #[test]
    fn test_ordinary_href_has_no_dictionary_id() {
        let href = make_href(DEFAULT_BASE_URL, "store", "42");
        assert_eq!(parse_custom_dictionary_id(&href), None);
    }

    #[test]
    fn test_path_segment_escapes_separators() {
        assert_eq!(path_segment("a/b"), "a%2Fb");
        assert_eq!(path_segment("x#y"), "x%23y");
        assert_eq!(path_segment("код"), "%D0%BA%D0%BE%D0%B4");
    }
}
