use crate::parsing::Converter;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Cannot read {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write {path}: {source}")]
    SinkUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    fn source_unavailable(path: &Path, source: std::io::Error) -> Self {
        IoError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Opens a markdown file and yields its lines, terminators removed.
///
/// Opening failures are returned immediately; read failures (including invalid
/// UTF-8) surface as an `Err` item at the point they happen.
pub fn read_lines(
    path: &Path,
) -> Result<impl Iterator<Item = Result<String, IoError>> + use<>, IoError> {
    let file = File::open(path).map_err(|source| IoError::source_unavailable(path, source))?;
    log::debug!("Reading {}", path.display());

    let path = path.to_path_buf();
    Ok(BufReader::new(file)
        .lines()
        .map(move |line| line.map_err(|source| IoError::source_unavailable(&path, source))))
}

/// Write a rendered document
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    let sink_unavailable = |source| IoError::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    };

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(sink_unavailable)?;
    }

    fs::write(path, html).map_err(sink_unavailable)?;
    log::debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

/// Converts `input` and writes the result to `output`.
///
/// The output file is only touched once the whole input has been read.
pub fn convert_file(converter: &Converter, input: &Path, output: &Path) -> Result<(), IoError> {
    let html = converter.try_convert(read_lines(input)?)?;
    write_html(output, &html)
}
