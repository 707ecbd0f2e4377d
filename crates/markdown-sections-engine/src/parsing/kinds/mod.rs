//! Line-level pattern recognizers. Each kind owns its delimiter syntax.

pub mod code_fence;
pub mod front_matter;
pub mod heading;
pub mod list_marker;

pub use code_fence::CodeFence;
pub use front_matter::FrontMatter;
pub use heading::{Heading, HeadingMatch};
pub use list_marker::ListMarker;
