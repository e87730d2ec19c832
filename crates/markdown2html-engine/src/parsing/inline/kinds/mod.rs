//! # Inline Kinds
//!
//! One type per rewrite stage. Each owns its delimiters and its replacement, so
//! the scanner in `rewriter` never hardcodes `[[` or `**`.
//!
//! ## Types
//!
//! - **`BracketHash`**: `[[` `]]`, content replaced by its MD5 hex digest
//! - **`ParenStrip`**: `((` `))`, content kept minus `c`/`C`
//! - **`Bold`**: `**` `**` -> `<b>`
//! - **`Italic`**: `__` `__` -> `<em>`

pub mod bracket_hash;
pub mod emphasis;
pub mod paren_strip;

pub use bracket_hash::BracketHash;
pub use emphasis::{Bold, Italic};
pub use paren_strip::ParenStrip;

/// A span of text between an opening and a closing delimiter, replaced as a
/// whole.
pub trait Delimited {
    const OPEN: &'static str;
    const CLOSE: &'static str;
    /// Fewest chars the content may hold before a closer is accepted.
    const MIN_CONTENT: usize;

    /// Produces the replacement for the full delimited span.
    fn replace(content: &str) -> String;
}
