//! # Block Parsing
//!
//! Two-phase block handling over a flat (non-nesting) block model.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line becomes a
//!    `BlockKind` using only its leading characters
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the single open
//!    block and emits opening/closing markup as kinds change
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types owning their markers (Heading, ListKind, Paragraph)
//! - **`classify`**: `LineClassifier` produces a `BlockKind` for each line
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - At most one block (unordered list, ordered list, paragraph) is open at a time
//! - Opening any block closes the open one first
//! - End of input closes whatever is still open, exactly once

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{BlockKind, LineClassifier};
