//! Section tree: headings nested by marker length, each owning the block
//! tree of its body.

pub mod parser;
pub mod types;

pub use parser::SectionParser;
pub use types::{SectionId, SectionNode};
