use std::sync::OnceLock;

use regex::Regex;

/// A heading line split into its marker token and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMatch<'a> {
    /// The run of `#` characters; its length is the heading depth.
    pub token: &'a str,
    /// Everything after the single separating whitespace character, verbatim.
    pub text: &'a str,
}

impl HeadingMatch<'_> {
    pub fn depth(&self) -> usize {
        self.token.len()
    }
}

/// ATX heading recognition: a run of `#` at column 0, whitespace, then text.
pub struct Heading;

impl Heading {
    pub const PATTERN: &'static str = r"^(#+)\s(.*)$";

    pub fn parse(line: &str) -> Option<HeadingMatch<'_>> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let caps = HEADING_REGEX
            .get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid heading regex"))
            .captures(line)?;
        Some(HeadingMatch {
            token: caps.get(1)?.as_str(),
            text: caps.get(2)?.as_str(),
        })
    }
}
