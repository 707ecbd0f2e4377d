pub mod io;
pub mod parsing;
pub mod settings;

// Re-export key types for easier usage
pub use parsing::{
    blocks::{BlockKind, BlockNode, BlockParser},
    parse_document, parse_lines,
    sections::{SectionId, SectionNode, SectionParser},
};
pub use settings::IndentationSettings;
