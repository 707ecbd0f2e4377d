//! # Block Parsing
//!
//! Turns the body lines of one section into a tree keyed on indentation.
//!
//! ## Phases
//!
//! 1. **Build** (`parser`): every line is classified with a fresh
//!    [`LineClassifier`](crate::parsing::classify::LineClassifier) scan, given a
//!    level from its leading whitespace and nested by the level-to-tree reduction.
//! 2. **Normalize** (`normalize`): list items drop their own indentation and
//!    their descendants drop the same amount.
//!
//! ## Key Invariants
//!
//! - Lines inside a fence are always `Text`, but still nest by indentation
//! - Level 0 belongs to the synthetic root; every line is level 1 or deeper
//! - Only list items change the de-indentation baseline

pub mod indentation;
pub mod normalize;
pub mod parser;
pub mod types;

pub use normalize::strip_indentation;
pub use parser::BlockParser;
pub use types::{BlockKind, BlockNode};
