//! Second phase of block parsing: de-indentation.
//!
//! Each list item drops its own leading whitespace and becomes the baseline
//! for its descendants, which lose exactly that much indentation. Text blocks
//! keep the baseline they inherited.

use super::{
    indentation::{split_indentation, strip_leading},
    types::{BlockKind, BlockNode},
};

/// Returns the tree with list-relative indentation removed.
///
/// Applying it again to its own output changes nothing.
pub fn strip_indentation(root: BlockNode) -> BlockNode {
    strip(root, 0)
}

fn strip(block: BlockNode, baseline: usize) -> BlockNode {
    let BlockNode {
        kind,
        text,
        children,
        section,
    } = block;

    let (text, baseline) = match kind {
        BlockKind::Root => (text, 0),
        BlockKind::List => {
            let (indentation, rest) = split_indentation(&text);
            (rest.to_string(), indentation.chars().count())
        }
        BlockKind::Text => (strip_leading(&text, baseline).to_string(), baseline),
    };

    BlockNode {
        kind,
        text,
        children: children
            .into_iter()
            .map(|child| strip(child, baseline))
            .collect(),
        section,
    }
}
