//! The notebook document model and title extraction.
//!
//! Only the parts of the nbformat document needed to find a title are modelled;
//! everything else in the file is skipped during deserialization.  Cells are read
//! leniently: a cell that isn't an object is dropped, and a `cell_type` or `source`
//! of the wrong shape reads as its default, so odd cells never fail the document.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result, TitleError};

/// A parsed notebook document.
///
/// ```rust
/// # use nblist::Notebook;
/// let notebook: Notebook = r##"{"cells": [
///     {"cell_type": "code", "source": ["import os\n"]},
///     {"cell_type": "markdown", "source": ["# Hello\n", "world\n"]}
/// ]}"##.parse().unwrap();
/// assert_eq!(notebook.title().unwrap(), "Hello");
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    /// The cells that are JSON objects, in document order.
    #[serde(default, deserialize_with = "lenient_cells")]
    pub cells: Vec<Cell>,
}

/// A single notebook cell.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// The kind of cell.
    #[serde(default, deserialize_with = "or_default")]
    pub cell_type: CellType,

    /// The cell's text.
    #[serde(default, deserialize_with = "or_default")]
    pub source: Source,
}

fn lenient_cells<'de, D>(deserializer: D) -> std::result::Result<Vec<Cell>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|value| Cell::deserialize(value).ok())
        .collect())
}

fn or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// The cell type tag.  Only [`CellType::Markdown`] is ever inspected.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    /// Formatted narrative text.
    Markdown,
    /// Executable code.
    Code,
    /// Unrendered content passed through verbatim.
    Raw,
    /// Any other or missing tag.
    #[default]
    #[serde(other)]
    Unknown,
}

/// The text of a cell.  nbformat permits either a list of lines or one string.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Source {
    /// Lines, each normally keeping its trailing newline.
    Lines(Vec<String>),
    /// A single multi-line string.
    Text(String),
}

impl Default for Source {
    fn default() -> Self {
        Source::Lines(Vec::new())
    }
}

impl Source {
    /// The first line of text, or `None` when the source is empty.
    pub fn first_line(&self) -> Option<&str> {
        match self {
            Source::Lines(lines) => lines.first().map(String::as_str),
            Source::Text(text) => text.lines().next(),
        }
    }
}

impl FromStr for Notebook {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl Notebook {
    /// The title of the notebook: the first line of the first markdown cell with
    /// heading markers and surrounding whitespace removed.
    ///
    /// Later markdown cells are never consulted, even when the first one yields an
    /// empty title.
    pub fn title(&self) -> std::result::Result<String, TitleError> {
        let cell = self
            .cells
            .iter()
            .find(|cell| cell.cell_type == CellType::Markdown)
            .ok_or(TitleError::NoMarkdownCell)?;
        let line = cell.source.first_line().ok_or(TitleError::EmptySource)?;
        Ok(strip_heading(line).to_string())
    }
}

/// Removes leading `#` markers and surrounding whitespace from a heading line.
///
/// ```rust
/// # use nblist::notebook::strip_heading;
/// assert_eq!(strip_heading("  ## Intro to *Rust*  \n"), "Intro to *Rust*");
/// assert_eq!(strip_heading("###"), "");
/// ```
pub fn strip_heading(line: &str) -> &str {
    line.trim().trim_start_matches('#').trim()
}

/// Reads and parses the notebook at `path` and returns its title.
pub fn read_title(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading notebook");

    let contents = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let notebook = contents.parse::<Notebook>().map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    notebook.title().map_err(|source| Error::Title {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the title of the notebook at `path`, or `None` if it has none or can't
/// be read.  Failures are written as one line to `diagnostics`.
pub fn extract_title_with(path: &Path, diagnostics: &mut dyn Write) -> Option<String> {
    match read_title(path) {
        Ok(title) => Some(title),
        Err(err) => {
            let _ = writeln!(diagnostics, "{}", err);
            None
        }
    }
}

/// Returns the title of the notebook at `path`, reporting failures on standard
/// error.
pub fn extract_title<P: AsRef<Path>>(path: P) -> Option<String> {
    extract_title_with(path.as_ref(), &mut io::stderr())
}
