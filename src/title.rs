//! Article title extraction from user input
//!
//! Turns `https://ja.wikipedia.org/wiki/%E6%9D%B1%E4%BA%AC_%E3%82%BF%E3%83%AF%E3%83%BC`
//! into `東京 タワー`. The verifier itself never normalizes titles; this is
//! for callers assembling a route from URLs.

use percent_encoding::percent_decode_str;
use url::Url;

/// Extract the article title from a Wikipedia article URL.
///
/// Query string and fragment are ignored. Returns `None` for non-Wikipedia
/// URLs, non-article paths and empty titles.
pub fn title_from_url(input: &str) -> Option<String> {
    let url = Url::parse(input.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?;
    if !host.ends_with(".wikipedia.org") {
        return None;
    }

    let encoded = url.path().strip_prefix("/wiki/")?;
    let decoded = percent_decode_str(encoded).decode_utf8().ok()?;
    let title = capitalize_first(decoded.replace('_', " ").trim());

    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Accept either an article URL or a bare title.
pub fn normalize_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return title_from_url(trimmed);
    }
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_url() {
        assert_eq!(
            title_from_url("https://ja.wikipedia.org/wiki/%E6%9D%B1%E4%BA%AC"),
            Some("東京".to_string())
        );
        assert_eq!(
            title_from_url("https://en.wikipedia.org/wiki/tokyo_tower#History"),
            Some("Tokyo tower".to_string())
        );
        assert_eq!(
            title_from_url("https://ja.wikipedia.org/wiki/Rust_(プログラミング言語)?action=history"),
            Some("Rust (プログラミング言語)".to_string())
        );
    }

    #[test]
    fn test_title_from_url_rejects() {
        assert_eq!(title_from_url("https://example.com/wiki/Tokyo"), None);
        assert_eq!(title_from_url("https://ja.wikipedia.org/w/index.php"), None);
        assert_eq!(title_from_url("https://ja.wikipedia.org/wiki/"), None);
        assert_eq!(title_from_url("ftp://ja.wikipedia.org/wiki/Tokyo"), None);
        assert_eq!(title_from_url("not a url"), None);
    }

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("  京都 "), Some("京都".to_string()));
        assert_eq!(normalize_input("   "), None);
        assert_eq!(
            normalize_input("https://ja.wikipedia.org/wiki/%E5%A4%A7%E9%98%AA"),
            Some("大阪".to_string())
        );
        assert_eq!(normalize_input("https://example.com/wiki/Osaka"), None);
    }

    #[test]
    fn test_bare_title_not_capitalized() {
        assert_eq!(normalize_input("iPhone"), Some("iPhone".to_string()));
    }
}
