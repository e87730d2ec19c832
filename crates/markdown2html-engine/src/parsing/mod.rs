//! # Conversion Pipeline
//!
//! Single-pass, line-oriented conversion from the Markdown dialect to HTML.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`blocks::classify`): each trimmed line becomes a
//!    `BlockKind` from its leading characters alone
//! 2. **Block Construction** (`blocks::builder`): a `BlockBuilder` tracks the one
//!    open block and emits `Fragment`s as blocks open and close
//! 3. **Inline Rewriting** (`inline`): heading, list item and paragraph text is
//!    rewritten by staged delimiter substitutions before it is wrapped
//!
//! `Converter` drives the phases over a line sequence and concatenates the
//! fragments into the finished document.

pub mod blocks;
pub mod html;
pub mod inline;
pub mod lines;

use std::convert::Infallible;

use crate::options::RenderOptions;

use blocks::{BlockBuilder, LineClassifier};
use html::Fragment;
use lines::Line;

/// Converts whole documents with a fixed set of [`RenderOptions`].
///
/// Holds no per-document state: every call builds its own `BlockBuilder`, so one
/// converter can serve many documents, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: RenderOptions,
}

impl Converter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Converts an in-memory line sequence.
    pub fn convert<I, S>(&self, lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Ok(html) = self.try_convert(lines.into_iter().map(Ok::<S, Infallible>));
        html
    }

    /// Converts a line sequence whose source can fail part-way.
    ///
    /// The first source error aborts the conversion and is returned unchanged;
    /// nothing emitted so far is kept.
    pub fn try_convert<I, S, E>(&self, lines: I) -> Result<String, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let classifier = LineClassifier::new(&self.options);
        let mut builder = BlockBuilder::new(&self.options);
        let mut html = String::new();

        for line in lines {
            let line = line?;
            let kind = classifier.classify(&Line::new(line.as_ref()));
            append(&mut html, builder.feed(kind));
        }

        // EOF flush
        append(&mut html, builder.finish());
        Ok(html)
    }

    /// Converts a complete Markdown string.
    pub fn convert_str(&self, markdown: &str) -> String {
        self.convert(lines::lines(markdown).map(|line| line.raw()))
    }
}

fn append(html: &mut String, fragments: Vec<Fragment>) {
    html.extend(fragments.into_iter().map(Fragment::into_string));
}

/// Converts `lines` with default options.
pub fn convert<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Converter::default().convert(lines)
}

/// Fallible counterpart of [`convert`] for sources that can fail mid-stream.
pub fn try_convert<I, S, E>(lines: I) -> Result<String, E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    Converter::default().try_convert(lines)
}

/// Converts a complete Markdown string with default options.
pub fn convert_str(markdown: &str) -> String {
    Converter::default().convert_str(markdown)
}
