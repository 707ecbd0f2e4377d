use crate::{
    parsing::{
        classify::{FenceState, LineClassifier},
        kinds::ListMarker,
        tree::{Leveled, build_tree},
    },
    settings::IndentationSettings,
};

use super::{
    indentation::{indentation_level, split_indentation},
    normalize::strip_indentation,
    types::BlockNode,
};

/// Turns the lines of one section into a block tree keyed on indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockParser {
    settings: IndentationSettings,
}

impl BlockParser {
    pub fn new(settings: IndentationSettings) -> Self {
        Self { settings }
    }

    /// Builds the block tree and de-indents list contents.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> BlockNode {
        strip_indentation(self.build(lines))
    }

    /// Builds the block tree with every line's text left exactly as given.
    pub fn build<S: AsRef<str>>(&self, lines: &[S]) -> BlockNode {
        let mut classifier = LineClassifier::new();
        let flat = lines.iter().map(|line| {
            let line = line.as_ref();
            let state = classifier.classify(line);
            self.flat_block(line, state)
        });

        let mut root = BlockNode::root();
        build_tree(&mut root, flat);

        log::trace!(
            "built {} top-level blocks from {} lines",
            root.children.len(),
            lines.len()
        );
        root
    }

    pub fn indentation_level(&self, line: &str) -> usize {
        indentation_level(line, self.settings)
    }

    fn flat_block(&self, line: &str, state: FenceState) -> Leveled<BlockNode> {
        let (_, text) = split_indentation(line);
        let block = if state.allows_list_marker() && ListMarker::matches(text) {
            BlockNode::list(line)
        } else {
            BlockNode::text(line)
        };
        Leveled::new(self.indentation_level(line), block)
    }
}
