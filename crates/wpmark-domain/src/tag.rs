//! Tag name normalization

/// Local name of the wrapper element that carries both body and excerpt
pub const ENCODED_TAG: &str = "encoded";

/// Namespace path fragment of the body wrapper
pub const CONTENT_MARKER: &str = "/content/";

/// Namespace path fragment of the excerpt wrapper
pub const EXCERPT_MARKER: &str = "/excerpt/";

/// Map a raw, possibly `{namespace}`-qualified tag name to its logical field name
///
/// Everything up to and including the last `}` is dropped. The shared
/// `encoded` wrapper becomes `content` or `excerpt` depending on its
/// namespace. Total and pure: unknown names pass through as their local name.
///
/// # Examples
///
/// ```
/// use wpmark_domain::normalize;
///
/// assert_eq!(normalize("{http://wordpress.org/export/1.2/}post_id"), "post_id");
/// assert_eq!(normalize("{http://purl.org/rss/1.0/modules/content/}encoded"), "content");
/// assert_eq!(normalize("{http://wordpress.org/export/1.2/excerpt/}encoded"), "excerpt");
/// assert_eq!(normalize("encoded"), "encoded");
/// ```
pub fn normalize(raw: &str) -> &str {
    let local = match raw.rfind('}') {
        Some(pos) => &raw[pos + 1..],
        None => raw,
    };

    if local != ENCODED_TAG {
        return local;
    }

    if raw.contains(CONTENT_MARKER) {
        "content"
    } else if raw.contains(EXCERPT_MARKER) {
        "excerpt"
    } else {
        local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_namespace() {
        assert_eq!(normalize("{http://purl.org/dc/elements/1.1/}creator"), "creator");
        assert_eq!(normalize("title"), "title");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("{ns}"), "");
    }

    #[test]
    fn test_strips_up_to_last_brace() {
        assert_eq!(normalize("{a}{b}item"), "item");
    }

    #[test]
    fn test_encoded_without_marker_is_unchanged() {
        assert_eq!(normalize("{http://example.com/other/}encoded"), "encoded");
    }

    #[test]
    fn test_marker_outside_encoded_is_ignored() {
        assert_eq!(normalize("{http://purl.org/rss/1.0/modules/content/}title"), "title");
    }

    proptest! {
        #[test]
        fn prop_idempotent(raw in "\\PC*") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(once), once);
        }

        #[test]
        fn prop_idempotent_for_qualified_names(
            ns in "[a-z:/.]{0,30}",
            local in prop_oneof![Just("encoded".to_string()), "[a-z_]{1,12}"],
        ) {
            let raw = format!("{{{}}}{}", ns, local);
            let once = normalize(&raw);
            prop_assert!(!once.contains('}'), "normalized tag still contains '}}'");
            prop_assert_eq!(normalize(once), once);
        }

        #[test]
        fn prop_content_marker_wins(prefix in "[a-z:.]{0,12}", suffix in "[a-z/]{0,12}") {
            let raw = format!("{{{}/content/{}}}encoded", prefix, suffix);
            prop_assert_eq!(normalize(&raw), "content");
        }
    }
}
