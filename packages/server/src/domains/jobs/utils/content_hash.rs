/// Generate a content hash for cross-source duplicate detection
///
/// The same posting often shows up on a railroad's own career site and on
/// an aggregator. Title, company and city are trimmed, lowercased and joined
/// with `|`; the md5 of that string is the hash. A missing city hashes the
/// same as an empty one.
pub fn generate_content_hash(title: &str, company: &str, city: Option<&str>) -> String {
    let normalized = [title, company, city.unwrap_or("")]
        .iter()
        .map(|part| part.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join("|");

    format!("{:x}", md5::compute(normalized.as_bytes()))
}
