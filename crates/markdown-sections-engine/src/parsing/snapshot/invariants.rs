use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    sections::{SectionId, SectionNode},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - The root is section 0 at depth 0 with no heading
/// - Every child section is deeper than its parent
/// - Section ids are consecutive in pre-order
/// - Only the root carries front matter
/// - Every block points back at the section that owns it
/// - `Root` blocks appear only as the top of a block tree
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(root: &SectionNode) {
    assert_eq!(root.id, SectionId::ROOT, "document root must be section 0");
    assert_eq!(root.depth, 0, "document root must have depth 0");
    assert!(root.heading.is_empty(), "document root has heading {:?}", root.heading);

    let mut expected_id = 0;
    root.walk_sections(|section| {
        assert_eq!(
            section.id,
            SectionId(expected_id),
            "section ids out of document order at {:?}",
            section.heading
        );
        expected_id += 1;

        for child in &section.children {
            assert!(
                child.depth > section.depth,
                "section {:?} (depth {}) nested under {:?} (depth {})",
                child.heading,
                child.depth,
                section.heading,
                section.depth
            );
        }

        if !section.is_document_root() {
            assert!(
                section.front_matter.is_empty(),
                "front matter on non-root section {:?}",
                section.heading
            );
        }

        check_blocks(section);
    });
}

fn check_blocks(section: &SectionNode) {
    assert_eq!(
        section.blocks.kind,
        BlockKind::Root,
        "section {} block tree must start at a root block",
        section.id
    );

    section.walk_blocks(|block| {
        assert_eq!(
            block.section,
            Some(section.id),
            "block {:?} does not point at section {}",
            block.text,
            section.id
        );
        assert!(
            block.children.iter().all(|child| !child.is_root()),
            "nested root block under {:?}",
            block.text
        );
    });

    assert!(
        section.blocks.text.is_empty(),
        "root block of section {} has text",
        section.id
    );
}

/// Every list block's text starts at its marker once normalized.
///
/// # Panics
/// Panics if a list block still carries leading whitespace.
pub fn check_de_indented(block: &BlockNode) {
    block.walk(|b| {
        if b.is_list() {
            assert_eq!(
                b.text.trim_start(),
                b.text,
                "list block keeps its indentation"
            );
        }
    });
}
