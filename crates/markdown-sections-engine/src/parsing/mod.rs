//! # Parsing
//!
//! Lines go in, a two-layer tree comes out: sections nested by heading depth,
//! each owning a block tree nested by indentation.
//!
//! ## Modules
//!
//! - **`tree`**: Generic level-to-tree reduction used by both layers
//! - **`classify`**: `LineClassifier` fence tracking shared by both layers
//! - **`kinds`**: Fence, list marker, heading and front matter recognizers
//! - **`blocks`**: `BlockParser` and de-indentation of list subtrees
//! - **`sections`**: `SectionParser`, the entry point for whole documents
//! - **`snapshot`**: Tree dump and invariant checks for tests
//!
//! Parsing never fails. Malformed input (inconsistent indentation, an
//! unterminated fence) still produces a tree.

pub mod blocks;
pub mod classify;
pub mod kinds;
pub mod sections;
pub mod snapshot;
pub mod tree;

#[cfg(test)]
mod tests;

use crate::settings::IndentationSettings;

use blocks::BlockParser;
use sections::{SectionNode, SectionParser};

/// Parses a document given as lines.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], settings: IndentationSettings) -> SectionNode {
    SectionParser::new(BlockParser::new(settings)).parse(lines)
}

/// Parses a document given as text. Accepts `\n` and `\r\n` line endings.
pub fn parse_document(text: &str, settings: IndentationSettings) -> SectionNode {
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines, settings)
}
