use std::fmt::Write;

use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    sections::SectionNode,
};

const INDENT: &str = "  ";

/// Renders a section tree as one line per node.
///
/// Sections print their id, depth and heading, then front matter size, then
/// their blocks, then nested sections. Block text is Debug-quoted so leading
/// whitespace is visible.
pub fn to_treeviz(root: &SectionNode) -> String {
    let mut out = String::new();
    write_section(&mut out, root, 0);
    out
}

fn write_section(out: &mut String, section: &SectionNode, depth: usize) {
    let pad = INDENT.repeat(depth);
    let _ = writeln!(
        out,
        "{pad}Section[{}] depth={} {:?}",
        section.id, section.depth, section.heading
    );
    if !section.front_matter.is_empty() {
        let _ = writeln!(
            out,
            "{pad}{INDENT}FrontMatter ({} lines)",
            section.front_matter.len()
        );
    }
    for block in &section.blocks.children {
        write_block(out, block, depth + 1);
    }
    for child in &section.children {
        write_section(out, child, depth + 1);
    }
}

fn write_block(out: &mut String, block: &BlockNode, depth: usize) {
    let label = match block.kind {
        BlockKind::Root => "Root",
        BlockKind::Text => "Text",
        BlockKind::List => "List",
    };
    let _ = writeln!(out, "{}{label} {:?}", INDENT.repeat(depth), block.text);
    for child in &block.children {
        write_block(out, child, depth + 1);
    }
}
