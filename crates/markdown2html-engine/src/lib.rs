pub mod io;
pub mod options;
pub mod parsing;

// Re-export key types for easier usage
pub use io::{IoError, convert_file, read_lines, write_html};
pub use options::{HeadingOverflow, RenderOptions};
pub use parsing::{Converter, convert, convert_str, try_convert};
