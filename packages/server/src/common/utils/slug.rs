//! URL slug helpers shared by job and advisory ingestion.

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").expect("valid slug regex");
}

/// Length of the random tail appended to record slugs.
pub const SUFFIX_LEN: usize = 8;

/// Lowercase `input`, collapse every run of characters outside `[a-z0-9]`
/// into a single `-`, strip dashes at both ends, then cut to `max_len`.
///
/// Truncation happens after trimming, so a slug cut mid-separator may end
/// in `-`.
pub fn slugify(input: &str, max_len: usize) -> String {
    let lowered = input.to_lowercase();
    let dashed = NON_SLUG_CHARS.replace_all(&lowered, "-");
    dashed.trim_matches('-').chars().take(max_len).collect()
}

/// Eight lowercase alphanumeric characters, unique enough to disambiguate
/// two postings with the same title.
pub fn random_suffix() -> String {
    let mut suffix = Uuid::new_v4().simple().to_string();
    suffix.truncate(SUFFIX_LEN);
    suffix
}

/// `slugify(base, max_len)` followed by `-` and a random suffix.
pub fn slugify_with_suffix(base: &str, max_len: usize) -> String {
    format!("{}-{}", slugify(base, max_len), random_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_punctuation_and_spaces() {
        assert_eq!(slugify("Team Track & Transload!!", 80), "team-track-transload");
    }

    #[test]
    fn test_strips_leading_and_trailing_separators() {
        assert_eq!(slugify("  --BNSF Railway--  ", 80), "bnsf-railway");
    }

    #[test]
    fn test_non_ascii_becomes_separator() {
        assert_eq!(slugify("Montréal Yard", 80), "montr-al-yard");
    }

    #[test]
    fn test_truncates_to_max_len() {
        let slug = slugify(&"a".repeat(100), 60);
        assert_eq!(slug.len(), 60);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify("!!!", 80), "");
    }

    #[test]
    fn test_random_suffix_shape() {
        let suffix = random_suffix();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_slug_with_suffix() {
        let slug = slugify_with_suffix("CSX Embargo", 80);
        assert!(slug.starts_with("csx-embargo-"));
        assert_eq!(slug.len(), "csx-embargo-".len() + SUFFIX_LEN);
    }
}
