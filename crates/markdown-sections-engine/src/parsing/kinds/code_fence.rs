/// Fenced code marker recognition.
///
/// All fence syntax knowledge lives here: which characters open a fence, how
/// long the run must be, and what makes a marker line a closer.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';
    /// Shortest run of fence characters that counts as a marker.
    pub const MIN_RUN: usize = 3;

    /// Returns the marker token at the start of `line`, leading whitespace
    /// included, or `None` when the line is not a fence marker.
    pub fn marker(line: &str) -> Option<&str> {
        let rest = line.trim_start();
        let indent = line.len() - rest.len();

        let fence_char = rest
            .chars()
            .next()
            .filter(|c| *c == Self::BACKTICK || *c == Self::TILDE)?;
        let run = rest.len() - rest.trim_start_matches(fence_char).len();
        if run < Self::MIN_RUN {
            return None;
        }
        Some(&line[..indent + run])
    }

    /// Whether a marker line is a genuine closer: nothing but whitespace may
    /// follow the marker token.
    pub fn closes(line: &str, marker: &str) -> bool {
        line.get(marker.len()..)
            .is_none_or(|after| after.trim().is_empty())
    }
}
