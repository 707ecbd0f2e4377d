//! Level-to-tree reduction shared by block and section parsing.
//!
//! Takes a flat, ordered sequence of `(level, node)` pairs and nests every
//! node under the nearest preceding node with a strictly smaller level. Equal
//! levels become siblings. The root sits at level 0 and is never popped.

/// A node that can own children appended in document order.
pub trait TreeNode {
    fn push_child(&mut self, child: Self);
}

/// A node paired with the level that drives nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leveled<T> {
    pub level: usize,
    pub node: T,
}

impl<T> Leveled<T> {
    pub fn new(level: usize, node: T) -> Self {
        Self { level, node }
    }
}

/// Nests `flat` under `root` in a single left-to-right pass.
///
/// The stack holds the open ancestors above the root. A node is attached to
/// its parent when it is popped, which happens after all of its own
/// descendants were attached, so children keep input order.
pub fn build_tree<T, I>(root: &mut T, flat: I)
where
    T: TreeNode,
    I: IntoIterator<Item = Leveled<T>>,
{
    let mut stack: Vec<Leveled<T>> = Vec::new();

    for item in flat {
        close_until(root, &mut stack, item.level);
        stack.push(item);
    }

    close_until(root, &mut stack, 0);
}

/// Pops every open node whose level is `>= level`, attaching each to the
/// node beneath it.
fn close_until<T: TreeNode>(root: &mut T, stack: &mut Vec<Leveled<T>>, level: usize) {
    while stack.last().is_some_and(|top| top.level >= level) {
        let Some(done) = stack.pop() else { break };
        match stack.last_mut() {
            Some(parent) => parent.node.push_child(done.node),
            None => root.push_child(done.node),
        }
    }
}
