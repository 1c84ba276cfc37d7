//! Page configuration parsed from the URL query string.
//!
//! The page has no server and no config file; the only knobs are query
//! parameters:
//!
//! - `debug`: `1`/`true`/`on` enables verbose logging and the status bar
//! - `data`: dataset URL, default [`DEFAULT_DATASET_URL`]
//!
//! Unknown parameters and unparsable values fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::form_urlencoded;

use crate::consts::DEFAULT_DATASET_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasConfig {
    /// Where the dataset JSON is fetched from.
    pub dataset_url: String,
    /// Emit per-event diagnostic lines to the console.
    pub verbose: bool,
    /// Render the debug status bar.
    pub status_bar: bool,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self { dataset_url: DEFAULT_DATASET_URL.to_owned(), verbose: false, status_bar: false }
    }
}

impl AtlasConfig {
    /// Build config from a `location.search` string (with or without the
    /// leading `?`). Keys and values are percent-decoded before matching.
    #[must_use]
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        for (key, value) in form_urlencoded::parse(search.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "debug" => {
                    let enabled = parse_flag(&value);
                    config.verbose = enabled;
                    config.status_bar = enabled;
                }
                "data" if !value.trim().is_empty() => {
                    config.dataset_url = value.trim().to_owned();
                }
                _ => {}
            }
        }
        config
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "on" | "yes")
}
