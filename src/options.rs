//! Configuration for the listing.  Defaults produce Colab badges for `.ipynb` files.

#[cfg(feature = "bon")]
use bon::Builder;

/// Suffix a directory entry must end with to be listed.
pub const DEFAULT_EXTENSION: &str = ".ipynb";

/// Title used for notebooks whose title couldn't be extracted.
pub const DEFAULT_PLACEHOLDER: &str = "(No Title Found)";

/// Base URL the prefix and notebook path are appended to.
pub const DEFAULT_VIEWER_URL: &str = "https://colab.research.google.com/github";

/// Image shown in the badge.
pub const DEFAULT_BADGE_IMAGE: &str = "https://colab.research.google.com/assets/colab-badge.svg";

/// Alt text of the badge image.
pub const DEFAULT_BADGE_ALT: &str = "Open In Colab";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Umbrella options struct.
///
/// ```rust
/// # use nblist::Options;
/// let options = Options::default();
/// assert_eq!(options.extension, ".ipynb");
/// assert_eq!(options.placeholder, "(No Title Found)");
/// ```
pub struct Options {
    /// Case-sensitive suffix selecting notebook files.
    ///
    /// ```rust
    /// # use nblist::Options;
    /// let mut options = Options::default();
    /// options.extension = ".nb.json".to_string();
    /// assert!(options.matches("intro.nb.json"));
    /// assert!(!options.matches("intro.ipynb"));
    /// ```
    #[cfg_attr(feature = "bon", builder(into, default = DEFAULT_EXTENSION.to_string()))]
    pub extension: String,

    /// Title rendered when a notebook yields none.
    #[cfg_attr(feature = "bon", builder(into, default = DEFAULT_PLACEHOLDER.to_string()))]
    pub placeholder: String,

    /// Base URL of the external viewer, without a trailing slash.
    #[cfg_attr(feature = "bon", builder(into, default = DEFAULT_VIEWER_URL.to_string()))]
    pub viewer_url: String,

    /// Image URL of the badge.
    #[cfg_attr(feature = "bon", builder(into, default = DEFAULT_BADGE_IMAGE.to_string()))]
    pub badge_image: String,

    /// Alt text of the badge.
    #[cfg_attr(feature = "bon", builder(into, default = DEFAULT_BADGE_ALT.to_string()))]
    pub badge_alt: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            extension: DEFAULT_EXTENSION.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            viewer_url: DEFAULT_VIEWER_URL.to_string(),
            badge_image: DEFAULT_BADGE_IMAGE.to_string(),
            badge_alt: DEFAULT_BADGE_ALT.to_string(),
        }
    }
}

impl Options {
    /// Whether a directory entry named `name` is a notebook.
    pub fn matches(&self, name: &str) -> bool {
        name.ends_with(&self.extension)
    }

    /// The viewer link for the notebook at `relative_path` under `prefix`.
    pub fn viewer_link(&self, prefix: &str, relative_path: &str) -> String {
        format!("{}/{}/{}", self.viewer_url, prefix, relative_path)
    }

    /// The inline badge markup linking to `link`.
    pub fn badge(&self, link: &str) -> String {
        format!(
            "<a target=\"_blank\" href=\"{}\"><img src=\"{}\" alt=\"{}\"/></a>",
            link, self.badge_image, self.badge_alt
        )
    }
}
