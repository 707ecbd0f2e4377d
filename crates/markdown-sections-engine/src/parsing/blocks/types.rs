use crate::parsing::{sections::SectionId, tree::TreeNode};

/// The closed set of block variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Level-0 anchor of a section's block tree. Has no text.
    Root,
    /// Any line that is not a list item, including fenced code lines.
    Text,
    /// A line whose text after indentation starts with a list marker.
    List,
}

/// A line of a section body and the lines nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Line text. Raw after building; de-indented after normalization.
    pub text: String,
    /// Nested blocks in line order.
    pub children: Vec<BlockNode>,
    /// The section this block belongs to, once a section parse assigned it.
    pub section: Option<SectionId>,
}

impl BlockNode {
    fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            children: Vec::new(),
            section: None,
        }
    }

    pub fn root() -> Self {
        Self::new(BlockKind::Root, String::new())
    }

    pub fn text(line: impl Into<String>) -> Self {
        Self::new(BlockKind::Text, line)
    }

    pub fn list(line: impl Into<String>) -> Self {
        Self::new(BlockKind::List, line)
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<BlockNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_root(&self) -> bool {
        self.kind == BlockKind::Root
    }

    pub fn is_list(&self) -> bool {
        self.kind == BlockKind::List
    }

    /// Visits this block and all descendants in pre-order.
    pub fn walk<'a, F: FnMut(&'a BlockNode)>(&'a self, mut visit: F) {
        let mut stack = vec![self];
        while let Some(block) = stack.pop() {
            visit(block);
            stack.extend(block.children.iter().rev());
        }
    }

    /// Number of blocks in this tree, this one included.
    pub fn count(&self) -> usize {
        let mut n = 0;
        self.walk(|_| n += 1);
        n
    }

    /// Points this block and every descendant at `section`.
    pub(crate) fn assign_section(&mut self, section: SectionId) {
        let mut stack = vec![self];
        while let Some(block) = stack.pop() {
            block.section = Some(section);
            stack.extend(block.children.iter_mut());
        }
    }
}

impl TreeNode for BlockNode {
    fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }
}
