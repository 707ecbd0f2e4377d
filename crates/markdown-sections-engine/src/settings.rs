use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Tab size used when no configuration says otherwise.
pub const DEFAULT_TAB_SIZE: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// How leading whitespace maps to nesting levels.
///
/// Supplied once per parse. With `use_tab` every whitespace character is one
/// level; otherwise whitespace is counted in units of `tab_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndentationSettings {
    pub use_tab: bool,
    pub tab_size: NonZeroUsize,
}

impl IndentationSettings {
    pub fn spaces(tab_size: NonZeroUsize) -> Self {
        Self {
            use_tab: false,
            tab_size,
        }
    }

    pub fn tabs() -> Self {
        Self {
            use_tab: true,
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

impl Default for IndentationSettings {
    fn default() -> Self {
        Self::spaces(DEFAULT_TAB_SIZE)
    }
}
