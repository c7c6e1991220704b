//! Directory scanning and markdown rendering of the notebook index.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::notebook::extract_title_with;
use crate::options::Options;

/// One line of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The notebook title, or the placeholder.
    pub title: String,
    /// The link target of the title: the directory joined with the file name.
    pub display_path: String,
    /// Inline badge markup linking to the external viewer.
    pub badge: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* [{}]({}) {}", self.title, self.display_path, self.badge)
    }
}

/// Scans `directory` for notebooks and builds one entry per notebook, ordered by
/// file name.  Per-file failures are written to `diagnostics` and the notebook is
/// kept with the placeholder title, as is a notebook whose title is empty; failing
/// to list the directory is an error.
pub fn collect_entries(
    directory: &str,
    prefix: &str,
    options: &Options,
    diagnostics: &mut dyn Write,
) -> Result<Vec<Entry>> {
    let dir = Path::new(directory);
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let list_error = |source| Error::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut notebooks: Vec<(String, PathBuf)> = Vec::new();
    for dirent in fs::read_dir(dir).map_err(list_error)? {
        let dirent = dirent.map_err(list_error)?;
        let name = match dirent.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!(name = ?raw, "skipping entry with a non-UTF-8 name");
                continue;
            }
        };
        if !options.matches(&name) {
            continue;
        }
        let path = dirent.path();
        if path.is_dir() {
            continue;
        }
        notebooks.push((name, path));
    }
    notebooks.sort_by(|a, b| a.0.cmp(&b.0));

    let mut entries = Vec::with_capacity(notebooks.len());
    for (name, path) in notebooks {
        let title = extract_title_with(&path, diagnostics)
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| options.placeholder.clone());
        debug!(%name, %title, "indexed notebook");
        entries.push(Entry {
            title,
            display_path: format!("{}/{}", directory, name),
            badge: options.badge(&options.viewer_link(prefix, &name)),
        });
    }
    Ok(entries)
}

/// Sorts entries by title, ignoring case.  Equal titles keep their relative order.
///
/// ```rust
/// # use nblist::{sort_entries, Entry};
/// let entry = |title: &str| Entry {
///     title: title.to_string(),
///     display_path: String::new(),
///     badge: String::new(),
/// };
/// let mut entries = vec![entry("Banana"), entry("apple"), entry("Cherry")];
/// sort_entries(&mut entries);
/// let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
/// assert_eq!(titles, ["apple", "Banana", "Cherry"]);
/// ```
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by_cached_key(|entry| caseless::default_case_fold_str(&entry.title));
}

/// Writes one markdown list line per entry, separated by newlines, with no
/// trailing newline.
pub fn render_list(entries: &[Entry], output: &mut dyn fmt::Write) -> fmt::Result {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            output.write_char('\n')?;
        }
        write!(output, "{}", entry)?;
    }
    Ok(())
}

/// Builds the sorted markdown index of the notebooks in `directory`.
///
/// `directory` is used verbatim in the link targets, so callers strip trailing
/// slashes first.  Diagnostics go to `diagnostics`.
pub fn generate_list_with(
    directory: &str,
    prefix: &str,
    options: &Options,
    diagnostics: &mut dyn Write,
) -> Result<String> {
    let mut entries = collect_entries(directory, prefix, options, diagnostics)?;
    sort_entries(&mut entries);
    Ok(entries
        .iter()
        .map(Entry::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Builds the sorted markdown index with default options, reporting per-file
/// failures on standard error.
pub fn generate_list(directory: &str, prefix: &str) -> Result<String> {
    generate_list_with(directory, prefix, &Options::default(), &mut io::stderr())
}
