//! Text normalization and tokenization.
//!
//! Both operate on letters, digits and underscore plus the Ethiopic block
//! (U+1200–U+137F) so Amharic captions survive cleaning intact.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("valid url regex"));
static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\s\x{1200}-\x{137F}]").expect("valid character filter regex")
});
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_\x{1200}-\x{137F}]+").expect("valid token regex"));

/// Strips URLs and every character that is not a letter, digit, underscore,
/// whitespace, or Ethiopic, then trims the result.
///
/// Returns an empty string for `None`.
#[must_use]
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let without_urls = URL_RE.replace_all(text, "");
    let filtered = DISALLOWED_RE.replace_all(&without_urls, "");
    filtered.trim().to_string()
}

/// Splits text into runs of letters, digits, underscores, or Ethiopic characters, left to right,
/// keeping duplicates.
#[must_use]
pub fn tokenize(text: Option<&str>) -> Vec<String> {
    match text {
        Some(text) if !text.is_empty() => TOKEN_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_none_is_empty() {
        assert_eq!(normalize(None), "");
    }

    #[test]
    fn normalize_strips_urls() {
        let out = normalize(Some(
            "New stock https://t.me/ZemenExpress/12 and www.example.com/shop today",
        ));
        assert!(!out.contains("http"), "url survived: {out}");
        assert!(!out.contains("www"), "url survived: {out}");
        assert!(out.starts_with("New stock"));
        assert!(out.ends_with("today"));
    }

    #[test]
    fn normalize_drops_punctuation_and_emoji() {
        assert_eq!(normalize(Some("  Hello, world! 🔥 ")), "Hello world");
    }

    #[test]
    fn normalize_keeps_ethiopic_text_and_punctuation() {
        // U+1362 (Ethiopic full stop) is inside the preserved block.
        assert_eq!(normalize(Some("ዋጋ፦ 1500 ብር።")), "ዋጋ፦ 1500 ብር።");
    }

    #[test]
    fn normalize_keeps_underscores_and_digits() {
        assert_eq!(normalize(Some("size_42 (EU)")), "size_42 EU");
    }

    #[test]
    fn normalize_drops_joiners_and_combining_marks() {
        assert_eq!(normalize(Some("👩\u{200D}💻 laptop")), "laptop");
        assert_eq!(normalize(Some("cafe\u{0301}")), "cafe");
    }

    #[test]
    fn tokenize_none_and_empty() {
        assert!(tokenize(None).is_empty());
        assert!(tokenize(Some("")).is_empty());
    }

    #[test]
    fn tokenize_splits_on_non_word_runs_and_keeps_duplicates() {
        assert_eq!(
            tokenize(Some("shoe, shoe; bag")),
            vec!["shoe", "shoe", "bag"]
        );
    }

    #[test]
    fn tokenize_handles_mixed_scripts() {
        assert_eq!(
            tokenize(Some("ጫማ size 42 ብር")),
            vec!["ጫማ", "size", "42", "ብር"]
        );
    }

    #[test]
    fn tokens_of_normalized_text_are_word_runs_only() {
        let samples = [
            "Price $25 great phone!!",
            "📦 Delivery: Addis Ababa — call 0911-000000",
            "https://t.me/x ዋጋ፡ 2,500 ብር",
            "   ",
            "👩\u{200D}💻 laptop 👨\u{200D}👩\u{200D}👧 sale",
            "cafe\u{0301} ne\u{0301}e",
        ];
        for sample in samples {
            let normalized = normalize(Some(sample));
            for token in tokenize(Some(normalized.as_str())) {
                assert!(!token.is_empty());
                assert!(
                    token
                        .chars()
                        .all(|c| c.is_alphanumeric() || c == '_' || ('\u{1200}'..='\u{137F}').contains(&c)),
                    "unexpected token {token:?} from {sample:?}"
                );
            }
        }
    }
}
