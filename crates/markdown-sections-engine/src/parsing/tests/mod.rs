//! Property tests for the parsing module.
//!
//! Block trees are checked against `invariants::check_raw` before
//! normalization; whole documents against `snapshot::invariants`.


use std::num::NonZeroUsize;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    parsing::{
        blocks::{BlockKind, BlockNode, BlockParser, strip_indentation},
        parse_document, parse_lines,
        sections::SectionId,
        snapshot::{self, to_treeviz},
    },
    settings::IndentationSettings,
};

fn spaces(n: usize) -> IndentationSettings {
    IndentationSettings::spaces(NonZeroUsize::new(n).unwrap())
}

// Level invariant

#[rstest]
#[case(&["- a", "    - b", "        - c", "    - d", "- e"])]
#[case(&["        deep first", "shallow", "  a bit", "     more"])]
#[case(&["a", "", "    ", "b"])]
#[case(&["- a", "\t- b", "  \t- c", "- d"])]
#[case(&["```", "      - x", "  y", "```", "- z"])]
fn raw_tree_respects_levels(#[case] lines: &[&str]) {
    invariants::build_checked(spaces(4), lines);
    invariants::build_checked(spaces(2), lines);
    invariants::build_checked(IndentationSettings::tabs(), lines);
}

#[test]
fn five_spaces_is_level_three() {
    assert_eq!(BlockParser::new(spaces(4)).indentation_level("     x"), 3);
}

// Idempotent de-indentation

#[rstest]
#[case(&["- item1", "    - item2", "      text", "- item3"])]
#[case(&["  - a", "      - b", "          c", "        d"])]
#[case(&["\t- a", "\t\t- b", "\t\t\tcode", "\t\tmore"])]
fn de_indentation_is_a_fixed_point(#[case] lines: &[&str]) {
    let parser = BlockParser::new(spaces(4));
    let once = parser.parse(lines);
    snapshot::invariants::check_de_indented(&once);

    let twice = strip_indentation(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn list_subtree_reparses_to_same_text() {
    let parser = BlockParser::new(spaces(4));
    let doc = parser.parse(&["- a", "    - b", "        - c", "          text"]);

    // Serialize the subtree of "- b" with its de-indented text and reparse it
    // as a fresh document.
    let b = &doc.children[0].children[0];
    let mut lines = Vec::new();
    b.walk(|block| lines.push(block.text.as_str()));
    assert_eq!(lines, vec!["- b", "- c", "  text"]);

    let reparsed = parser.parse(&lines);
    let mut texts = Vec::new();
    reparsed.walk(|block| {
        if !block.is_root() {
            texts.push(block.text.as_str());
        }
    });
    assert_eq!(texts, lines);

    let again = strip_indentation(reparsed.clone());
    assert_eq!(again, reparsed);
}

// Fence opacity

#[test]
fn fence_hides_headings_and_lists() {
    let doc = parse_document(
        "# Code\n```md\n# heading\n- list\n1. numbered\n```\nafter",
        IndentationSettings::default(),
    );
    snapshot::invariants(&doc);

    assert_eq!(doc.children.len(), 1);
    let code = &doc.children[0];
    assert!(code.children.is_empty());

    let kinds: Vec<BlockKind> = code.blocks.children.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BlockKind::Text; 6]);
}

#[test]
fn fence_marker_with_text_inside_fence_does_not_close() {
    let doc = parse_lines(
        &["```", "```not a close", "# still code", "```", "# Heading"],
        IndentationSettings::default(),
    );
    snapshot::invariants(&doc);

    assert_eq!(doc.blocks.children.len(), 4);
    assert_eq!(doc.children.len(), 1);
    assert_eq!(doc.children[0].heading, "Heading");
}

// Depth ordering

#[test]
fn depth_ordering() {
    let doc = parse_lines(&["# A", "## B", "## C", "# D"], IndentationSettings::default());
    snapshot::invariants(&doc);

    insta::assert_snapshot!(to_treeviz(&doc), @r#"
    Section[0] depth=0 ""
      Section[1] depth=1 "A"
        Section[2] depth=2 "B"
        Section[3] depth=2 "C"
      Section[4] depth=1 "D"
    "#);
}

// List nesting

#[test]
fn list_nesting_example() {
    let doc = parse_lines(
        &["- item1", "    - item2", "      text", "- item3"],
        spaces(4),
    );
    snapshot::invariants(&doc);

    let mut expected = BlockNode::root().with_children(vec![
        BlockNode::list("- item1").with_children(vec![
            BlockNode::list("- item2").with_children(vec![BlockNode::text("  text")]),
        ]),
        BlockNode::list("- item3"),
    ]);

    expected.assign_section(SectionId::ROOT);
    assert_eq!(doc.blocks, expected);
}

// Front matter round-trip

#[test]
fn front_matter_round_trip() {
    let lines = ["---", "title: Notes", "aliases:", "  - n", "---", "# Body", "- x"];
    let doc = parse_lines(&lines, IndentationSettings::default());
    snapshot::invariants(&doc);

    assert_eq!(doc.front_matter, lines[..5].to_vec());
    assert!(doc.blocks.children.is_empty());
    assert_eq!(doc.children[0].heading, "Body");

    let mut body_texts = Vec::new();
    doc.walk_sections(|s| s.walk_blocks(|b| body_texts.push(b.text.clone())));
    assert!(!body_texts.iter().any(|t| t.contains("title")));
}

#[test]
fn crlf_input() {
    let doc = parse_document("# A\r\n- x\r\n  - y\r\n", spaces(2));
    snapshot::invariants(&doc);
    assert_eq!(doc.children[0].heading, "A");
    assert_eq!(doc.children[0].blocks.children[0].children[0].text, "- y");
}
