use crate::common::utils::{slugify, slugify_with_suffix};

const JOB_SLUG_MAX_LEN: usize = 80;
const COMPANY_SLUG_MAX_LEN: usize = 60;

/// Slug for a posting page: `title-company[-city][-state]-<suffix>`.
///
/// Empty location parts are skipped.
pub fn generate_job_slug(
    title: &str,
    company: &str,
    city: Option<&str>,
    state: Option<&str>,
) -> String {
    let parts: Vec<&str> = [Some(title), Some(company), city, state]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    slugify_with_suffix(&parts.join("-"), JOB_SLUG_MAX_LEN)
}

/// Stable slug for a company's listing page (no random suffix).
pub fn generate_company_slug(company: &str) -> String {
    slugify(company, COMPANY_SLUG_MAX_LEN)
}
