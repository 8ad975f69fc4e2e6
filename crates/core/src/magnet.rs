//! Magnet URI construction.

/// Build a magnet URI from an info hash and an optional display name.
///
/// Returns an empty string when `info_hash` is empty. The display name is
/// percent-encoded as a URI query component.
pub fn build_magnet_link(info_hash: &str, name: &str) -> String {
    if info_hash.is_empty() {
        return String::new();
    }

    let mut magnet = format!("magnet:?xt=urn:btih:{}", info_hash);
    if !name.is_empty() {
        magnet.push_str("&dn=");
        magnet.push_str(&urlencoding::encode(name));
    }
    magnet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hash_yields_nothing() {
        assert_eq!(build_magnet_link("", ""), "");
        assert_eq!(build_magnet_link("", "Some Movie"), "");
    }

    #[test]
    fn test_hash_without_name() {
        assert_eq!(
            build_magnet_link("ABCDEF0123456789", ""),
            "magnet:?xt=urn:btih:ABCDEF0123456789"
        );
    }

    #[test]
    fn test_name_is_percent_encoded() {
        let magnet = build_magnet_link("abc123", "Movie Name (2019) [1080p] & more/extra");
        assert_eq!(
            magnet,
            "magnet:?xt=urn:btih:abc123&dn=Movie%20Name%20%282019%29%20%5B1080p%5D%20%26%20more%2Fextra"
        );
    }

    #[test]
    fn test_unreserved_characters_untouched() {
        assert_eq!(
            build_magnet_link("abc", "Movie.2019-1080p_x264~"),
            "magnet:?xt=urn:btih:abc&dn=Movie.2019-1080p_x264~"
        );
    }
}
