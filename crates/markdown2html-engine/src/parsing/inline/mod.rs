//! # Inline Rewriting
//!
//! Cursor-based, staged substitution of delimited spans within one line.
//!
//! ## Architecture
//!
//! Inline rewriting runs on the text of headings, list items and individual
//! paragraph lines. It is a fixed pipeline of stages; each stage scans the
//! output of the previous one:
//!
//! 1. `[[content]]` -> lowercase hex MD5 of `content`
//! 2. `((content))` -> `content` with every `c`/`C` removed
//! 3. `**content**` -> `<b>content</b>`
//! 4. `__content__` -> `<em>content</em>`
//!
//! Every stage matches left to right, non-overlapping, closing on the *first*
//! closing delimiter (shortest match). An opener without a closer is left as
//! plain text.
//!
//! ## Modules
//!
//! - **`kinds`**: One type per stage, owning its delimiters and replacement
//! - **`cursor`**: `Cursor` for char-boundary-safe scanning
//! - **`rewriter`**: `rewrite()` pipeline and the generic `substitute()` scan

pub mod cursor;
pub mod kinds;
pub mod rewriter;

pub use rewriter::{rewrite, substitute};
