//! Keyword-based job category classification.

/// Categories shown on the jobs board, in tie-break order.
pub const JOB_CATEGORIES: [&str; 10] = [
    "Operations",
    "Maintenance of Way",
    "Mechanical",
    "Engineering",
    "Transportation",
    "Management",
    "Safety & Compliance",
    "IT & Technology",
    "Administrative",
    "Sales & Marketing",
];

const CATEGORY_KEYWORDS: [(&str, &[&str]); 10] = [
    (
        "Operations",
        &["operations", "dispatcher", "yardmaster", "yard", "terminal", "logistics", "freight", "shipping", "warehouse"],
    ),
    (
        "Maintenance of Way",
        &["maintenance of way", "mow", "track", "signal", "bridge", "roadway", "surfacing", "tie", "rail welding", "gandy"],
    ),
    (
        "Mechanical",
        &["mechanical", "carman", "car repair", "locomotive", "diesel", "electrician", "welder", "machinist", "car inspector", "air brake"],
    ),
    (
        "Engineering",
        &["engineer", "engineering", "civil engineer", "design", "surveyor", "structural", "geotechnical", "project engineer"],
    ),
    (
        "Transportation",
        &["conductor", "engineer train", "locomotive engineer", "trainmaster", "brakeman", "switchman", "train crew", "transportation"],
    ),
    (
        "Management",
        &["manager", "director", "supervisor", "superintendent", "vice president", "chief", "lead", "foreman", "management"],
    ),
    (
        "Safety & Compliance",
        &["safety", "compliance", "regulatory", "fra", "osha", "hazmat", "environmental", "risk", "inspection"],
    ),
    (
        "IT & Technology",
        &["software", "developer", "data", "analyst", "it ", "technology", "systems", "network", "cyber", "cloud", "database"],
    ),
    (
        "Administrative",
        &["administrative", "admin", "clerk", "office", "accounting", "finance", "hr", "human resources", "payroll", "receptionist"],
    ),
    (
        "Sales & Marketing",
        &["sales", "marketing", "business development", "account manager", "customer", "commercial", "revenue"],
    ),
];

/// Pick the best-matching category for a posting.
///
/// Every keyword found anywhere in the title or description scores 1, or 3
/// when it appears in the title. Matching is plain substring search, so
/// short keywords ("tie", "hr") also hit inside longer words. Highest score
/// wins; on a tie the earlier category in [`JOB_CATEGORIES`] wins. Returns
/// `None` when no keyword matches at all.
pub fn classify_job(title: &str, description: &str) -> Option<&'static str> {
    let title = title.to_lowercase();
    let text = format!("{} {}", title, description.to_lowercase());

    let mut best: Option<(&'static str, u32)> = None;
    for (category, keywords) in CATEGORY_KEYWORDS {
        let score: u32 = keywords
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .map(|keyword| if title.contains(keyword) { 3 } else { 1 })
            .sum();

        if score > best.map_or(0, |(_, s)| s) {
            best = Some((category, score));
        }
    }

    best.map(|(category, _)| category)
}
