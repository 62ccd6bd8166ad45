//! Fixed fallback texts, indexed by entry position, for entries with no
//! usable text. A rendered row is never blank.

pub const ISSUE_FALLBACKS: [&str; 4] = [
    "Network segmentation could not be verified from the submitted architecture",
    "Backup and recovery objectives are not documented",
    "Monitoring and alerting coverage is incomplete",
    "Resource tagging is inconsistent across components",
];

/// `(title, rationale)` pairs.
pub const RECOMMENDATION_FALLBACKS: [(&str, &str); 4] = [
    (
        "Enable centralized logging and monitoring",
        "Aggregate service logs and metrics to shorten incident detection",
    ),
    (
        "Adopt infrastructure as code for every environment",
        "Declarative templates keep staging and production from drifting",
    ),
    (
        "Automate backup verification",
        "Scheduled restore tests prove recovery objectives can be met",
    ),
    (
        "Right-size compute to observed utilization",
        "Matching instance classes to load trims idle capacity",
    ),
];

pub fn issue_text(index: usize) -> &'static str {
    ISSUE_FALLBACKS[index % ISSUE_FALLBACKS.len()]
}

pub fn recommendation(index: usize) -> (&'static str, &'static str) {
    RECOMMENDATION_FALLBACKS[index % RECOMMENDATION_FALLBACKS.len()]
}
