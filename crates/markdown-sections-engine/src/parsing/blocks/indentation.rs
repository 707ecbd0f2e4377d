use crate::settings::IndentationSettings;

/// Splits a line into its leading whitespace and the rest.
pub fn split_indentation(line: &str) -> (&str, &str) {
    let rest = line.trim_start();
    line.split_at(line.len() - rest.len())
}

/// Width of the leading whitespace, in characters.
pub fn indentation_width(line: &str) -> usize {
    split_indentation(line).0.chars().count()
}

/// Nesting level of a line. Level 0 belongs to the synthetic root, so every
/// line is at least level 1.
pub fn indentation_level(line: &str, settings: IndentationSettings) -> usize {
    let width = indentation_width(line);
    if settings.use_tab {
        1 + width
    } else {
        1 + width.div_ceil(settings.tab_size.get())
    }
}

/// Removes up to `width` leading whitespace characters. Content is never
/// removed, even when the line is indented less than `width`.
pub fn strip_leading(text: &str, width: usize) -> &str {
    let cut = text
        .char_indices()
        .take(width)
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    &text[cut..]
}
