use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_LETTER: Regex = Regex::new(r"[^a-zA-Z ]+").unwrap();
}

/// Split a camelCased, snake_cased or kebab-cased token (or a whole text
/// blob) into lowercase dictionary words, left to right.
pub fn normalize(raw: &str) -> Vec<String> {
    let spaced = split_case_boundaries(raw);
    NON_LETTER
        .replace_all(&spaced, " ")
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Insert a space before an uppercase letter that follows a lowercase letter
/// or digit (`myVar`, `v2Beta`). Runs of capitals stay together.
fn split_case_boundaries(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    let mut prev: Option<char> = None;

    for ch in raw.chars() {
        if ch.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push(' ');
        }
        out.push(ch);
        prev = Some(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_splitting() {
        assert_eq!(normalize("myVariable"), vec!["my", "variable"]);
        assert_eq!(normalize("snake_case"), vec!["snake", "case"]);
        assert_eq!(normalize("kebab-case"), vec!["kebab", "case"]);
        assert_eq!(normalize("PageTransitionEvent"), vec!["page", "transition", "event"]);
    }

    #[test]
    fn test_capital_runs_and_digits() {
        assert_eq!(normalize("HTMLParser"), vec!["htmlparser"]);
        assert_eq!(normalize("parseHTML"), vec!["parse", "html"]);
        assert_eq!(normalize("pageYOffset"), vec!["page", "yoffset"]);
        assert_eq!(normalize("XMLHttpRequest"), vec!["xmlhttp", "request"]);
        assert_eq!(normalize("utf8Decoder"), vec!["utf", "decoder"]);
        assert_eq!(normalize("MAX_SIZE"), vec!["max", "size"]);
    }

    #[test]
    fn test_punctuation_and_text() {
        assert_eq!(normalize("$httpBackend"), vec!["http", "backend"]);
        assert_eq!(normalize("  This si a tset. "), vec!["this", "si", "a", "tset"]);
        assert_eq!(normalize("café"), vec!["caf"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(normalize("").is_empty());
        assert!(normalize("_$123").is_empty());
        assert!(normalize("   ").is_empty());
    }

    #[test]
    fn test_idempotent() {
        for raw in ["fooBarBaz", "XMLHttpRequest", "some_words-here", "This is text"] {
            for word in normalize(raw) {
                assert_eq!(normalize(&word), vec![word.clone()]);
            }
        }
    }
}
