use crate::parsing::{
    blocks::BlockParser,
    classify::LineClassifier,
    kinds::{FrontMatter, Heading},
    tree::{Leveled, build_tree},
};

use super::types::{SectionId, SectionNode};

/// A heading boundary and the lines collected under it, before block parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawSection<'a> {
    heading: &'a str,
    depth: usize,
    lines: Vec<&'a str>,
}

impl<'a> RawSection<'a> {
    fn new(heading: &'a str, depth: usize) -> Self {
        Self {
            heading,
            depth,
            lines: Vec::new(),
        }
    }
}

/// Partitions a document at headings and nests the sections by depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionParser {
    block_parser: BlockParser,
}

impl SectionParser {
    pub fn new(block_parser: BlockParser) -> Self {
        Self { block_parser }
    }

    /// Parses a whole document into its section tree.
    ///
    /// The returned root has depth 0, no heading, holds the lines before the
    /// first heading and carries the front matter.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> SectionNode {
        let (front_matter, body) = FrontMatter::split(lines);
        let (preamble, headed) = split_raw_sections(body);

        log::debug!(
            "split {} lines into {} headed sections ({} front matter lines)",
            body.len(),
            headed.len(),
            front_matter.len()
        );

        let mut root = self.build_section(SectionId::ROOT, preamble);
        let flat = headed.into_iter().enumerate().map(|(index, raw)| {
            let section = self.build_section(SectionId(index + 1), raw);
            Leveled::new(section.depth, section)
        });
        build_tree(&mut root, flat);

        root.front_matter = front_matter
            .iter()
            .map(|line| line.as_ref().to_string())
            .collect();
        root
    }

    fn build_section(&self, id: SectionId, raw: RawSection<'_>) -> SectionNode {
        let mut blocks = self.block_parser.parse(&raw.lines);
        blocks.assign_section(id);

        log::trace!(
            "section {id} (depth {}) {:?}: {} lines, {} blocks",
            raw.depth,
            raw.heading,
            raw.lines.len(),
            blocks.count() - 1
        );
        SectionNode::new(id, raw.heading, raw.depth, blocks)
    }
}

/// Splits body lines at every heading outside a fence.
///
/// Returns the depth-0 preamble and the headed sections in document order.
fn split_raw_sections<S: AsRef<str>>(lines: &[S]) -> (RawSection<'_>, Vec<RawSection<'_>>) {
    let mut classifier = LineClassifier::new();
    let mut preamble = RawSection::new("", 0);
    let mut headed: Vec<RawSection<'_>> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        let state = classifier.classify(line);

        match state.allows_heading().then(|| Heading::parse(line)).flatten() {
            Some(heading) => headed.push(RawSection::new(heading.text, heading.depth())),
            None => headed.last_mut().unwrap_or(&mut preamble).lines.push(line),
        }
    }

    (preamble, headed)
}
