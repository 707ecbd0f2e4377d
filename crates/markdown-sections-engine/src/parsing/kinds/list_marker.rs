use std::sync::OnceLock;

use regex::Regex;

/// List item marker recognition: `-`, `*`, `+`, `1.` or `1)` followed by
/// whitespace or end of line.
pub struct ListMarker;

impl ListMarker {
    pub const PATTERN: &'static str = r"^(?:[-*+]|\d+[.)])(?:\s|$)";

    /// Whether `text`, already stripped of indentation, starts with a list marker.
    pub fn matches(text: &str) -> bool {
        static LIST_MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        LIST_MARKER_REGEX
            .get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid list marker regex"))
            .is_match(text)
    }
}
