//! Builds a markdown index of a directory of Jupyter notebooks.
//!
//! Each notebook is titled by the first line of its first markdown cell, and the
//! index links both to the notebook file and to an "Open In Colab" badge.
//!
//! ```rust,no_run
//! let index = nblist::generate_list("notebooks", "org/repo/blob/main/notebooks")?;
//! println!("{}", index);
//! # Ok::<(), nblist::Error>(())
//! ```
//!
//! The pieces are also available separately:
//!
//! ```rust
//! use nblist::{render_list, sort_entries, Entry, Options};
//!
//! let options = Options::default();
//! let entry = |title: &str, name: &str| Entry {
//!     title: title.to_string(),
//!     display_path: format!("notebooks/{}", name),
//!     badge: options.badge(&options.viewer_link("org/repo", name)),
//! };
//! let mut entries = vec![entry("Demo", "demo.ipynb")];
//! sort_entries(&mut entries);
//!
//! let mut out = String::new();
//! render_list(&entries, &mut out).unwrap();
//! assert_eq!(
//!     out,
//!     "* [Demo](notebooks/demo.ipynb) <a target=\"_blank\" \
//!      href=\"https://colab.research.google.com/github/org/repo/demo.ipynb\">\
//!      <img src=\"https://colab.research.google.com/assets/colab-badge.svg\" \
//!      alt=\"Open In Colab\"/></a>"
//! );
//! ```

mod error;
pub mod listing;
pub mod notebook;
mod options;

pub use error::{Error, Result, TitleError};
pub use listing::{
    collect_entries, generate_list, generate_list_with, render_list, sort_entries, Entry,
};
pub use notebook::{
    extract_title, extract_title_with, read_title, Cell, CellType, Notebook, Source,
};
pub use options::{
    Options, DEFAULT_BADGE_ALT, DEFAULT_BADGE_IMAGE, DEFAULT_EXTENSION, DEFAULT_PLACEHOLDER,
    DEFAULT_VIEWER_URL,
};
