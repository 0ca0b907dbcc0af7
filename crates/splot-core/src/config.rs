//! Runtime configuration
//!
//! The only setting is the URL of the source repository shown by the
//! frontend; `SPLOT_REPO_URL` overrides the built-in default.

/// Environment variable overriding [`DEFAULT_REPO_URL`]
pub const REPO_URL_VAR: &str = "SPLOT_REPO_URL";

pub const DEFAULT_REPO_URL: &str = "https://gitlab.firstrf.com/first-rf-web/splot-docker";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub repo_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; unset or empty values fall
    /// back to the defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let repo_url = lookup(REPO_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REPO_URL.to_string());
        Self { repo_url }
    }
}
