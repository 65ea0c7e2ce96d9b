use crate::common::utils::slugify_with_suffix;

const ADVISORY_SLUG_MAX_LEN: usize = 80;

/// Slug for an advisory page: `railroad-title-<suffix>`.
pub fn generate_advisory_slug(title: &str, railroad: &str) -> String {
    slugify_with_suffix(&format!("{}-{}", railroad, title), ADVISORY_SLUG_MAX_LEN)
}
