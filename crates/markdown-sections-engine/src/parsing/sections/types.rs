use std::fmt;

use crate::parsing::{blocks::BlockNode, tree::TreeNode};

/// Handle for a section: its index in document order.
///
/// The document root is always `SectionId(0)` and the n-th heading is
/// `SectionId(n)`. Blocks hold this instead of a pointer to their section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SectionId(pub usize);

impl SectionId {
    pub const ROOT: SectionId = SectionId(0);
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A heading and everything up to the next heading of any depth, with
/// deeper headings nested as children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNode {
    pub id: SectionId,
    /// Heading text after the marker; empty for the document root.
    pub heading: String,
    /// Length of the heading marker; 0 for the document root.
    pub depth: usize,
    /// Root of this section's block tree.
    pub blocks: BlockNode,
    pub children: Vec<SectionNode>,
    /// Front matter lines, delimiters included. Only set on the document root.
    pub front_matter: Vec<String>,
}

impl SectionNode {
    pub fn new(id: SectionId, heading: impl Into<String>, depth: usize, blocks: BlockNode) -> Self {
        Self {
            id,
            heading: heading.into(),
            depth,
            blocks,
            children: Vec::new(),
            front_matter: Vec::new(),
        }
    }

    pub fn is_document_root(&self) -> bool {
        self.id == SectionId::ROOT
    }

    /// Visits this section and all nested sections in pre-order.
    pub fn walk_sections<'a, F: FnMut(&'a SectionNode)>(&'a self, mut visit: F) {
        let mut stack = vec![self];
        while let Some(section) = stack.pop() {
            visit(section);
            stack.extend(section.children.iter().rev());
        }
    }

    /// Visits this section's blocks in pre-order, root block included.
    /// Nested sections are not visited.
    pub fn walk_blocks<'a, F: FnMut(&'a BlockNode)>(&'a self, visit: F) {
        self.blocks.walk(visit);
    }

    pub fn find(&self, id: SectionId) -> Option<&SectionNode> {
        let mut stack = vec![self];
        while let Some(section) = stack.pop() {
            if section.id == id {
                return Some(section);
            }
            stack.extend(section.children.iter().rev());
        }
        None
    }

    /// Resolves a block's back-reference within this tree.
    pub fn section_of(&self, block: &BlockNode) -> Option<&SectionNode> {
        self.find(block.section?)
    }

    /// Number of sections in this tree, this one included.
    pub fn count(&self) -> usize {
        let mut n = 0;
        self.walk_sections(|_| n += 1);
        n
    }
}

impl TreeNode for SectionNode {
    fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }
}
