//! # Snapshot Testing Support
//!
//! Utilities for checking parser output from unit tests, integration tests
//! and the CLI.
//!
//! ## Modules
//!
//! - **`treeviz`**: Renders a section tree as a stable, indented text dump for
//!   `insta` snapshots and debugging
//! - **`invariants`**: Runtime checks for parser correctness (depth ordering,
//!   document-order ids, block back-references)

pub mod invariants;
pub mod treeviz;

pub use invariants::check as invariants;
pub use treeviz::to_treeviz;
