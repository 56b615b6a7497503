use std::path::Path;

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Configuration for building a [`crate::Matcher`].
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of states in the deterministic automaton. Building a
    /// matcher fails with [`crate::Error::TooLarge`] above this limit.
    pub max_states: usize,
    /// Maximum nesting depth of parenthesized groups. Deeper patterns fail
    /// with [`crate::Error::TooDeep`]. The parser recurses once per level,
    /// so very large values can exhaust the stack.
    pub max_depth: usize,
    /// Minimize the deterministic automaton.
    pub minimize: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_states: Self::DEFAULT_MAX_STATES,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            minimize: true,
        }
    }
}

impl Config {
    /// Default value for [`Config::max_states`].
    pub const DEFAULT_MAX_STATES: usize = 10_000;

    /// Default value for [`Config::max_depth`].
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of states in the deterministic automaton.
    pub fn max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    /// Sets the maximum nesting depth of groups.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables or disables minimization.
    pub fn minimize(mut self, yes: bool) -> Self {
        self.minimize = yes;
        self
    }
}

/// Load config file from a given path. Path must contain a valid TOML file or
/// this function will propagate the error. Keys missing from the file keep
/// their default values, for instance:
///
/// ```toml
/// max_states = 500
/// max_depth = 64
/// minimize = false
/// ```
pub fn load_config_from_file(
    config_file: &Path,
) -> Result<Config, figment::Error> {
    let config: Config =
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file_exact(config_file))
            .extract()?;
    Ok(config)
}
