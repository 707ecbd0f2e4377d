/// Leading metadata block delimited by `---` lines.
pub struct FrontMatter;

impl FrontMatter {
    pub const DELIMITER: &'static str = "---";

    fn is_delimiter(line: &str) -> bool {
        line.trim_end() == Self::DELIMITER
    }

    /// Splits `lines` into `(front_matter, body)`.
    ///
    /// Front matter must open on the very first line and be closed by a later
    /// delimiter line; both delimiters are kept in the front-matter slice so it
    /// can be written back verbatim. Without a closed block everything is body.
    pub fn split<S: AsRef<str>>(lines: &[S]) -> (&[S], &[S]) {
        let Some(first) = lines.first() else {
            return (&[], lines);
        };
        if !Self::is_delimiter(first.as_ref()) {
            return (&[], lines);
        }

        match lines[1..]
            .iter()
            .position(|line| Self::is_delimiter(line.as_ref()))
        {
            Some(offset) => lines.split_at(offset + 2),
            None => (&[], lines),
        }
    }
}
