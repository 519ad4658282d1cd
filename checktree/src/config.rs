//! Tree-wide configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::node::Mode;

/// Options shared by every node of a tree.
///
/// Built either in code through the builder methods or loaded from a JSON
/// document with camelCase keys; missing keys take their default.
///
/// # Example
///
/// ```
/// use checktree::config::TreeConfig;
/// use checktree::node::Mode;
///
/// let config = TreeConfig::new(Mode::Hierarchical)
///     .show_partially_selected()
///     .defaults_enabled(true);
/// assert!(config.show_partially_selected);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeConfig {
    /// Selection mode.
    pub mode: Mode,

    /// Keep the tree structure visible while searching.
    pub keep_tree_on_search: bool,

    /// Keep the children of matching nodes visible while searching.
    /// Only honored together with `keep_tree_on_search`.
    pub keep_children_on_search: bool,

    /// Render the partial (mixed) state.
    pub show_partially_selected: bool,

    /// A search is currently filtering the tree.
    pub search_mode_on: bool,

    /// Apply `selected_by_default` hints on activation.
    pub defaults_enabled: bool,
}

impl TreeConfig {
    /// Create a config with the given mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the selection mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Keep the tree visible during search.
    pub fn keep_tree_on_search(mut self) -> Self {
        self.keep_tree_on_search = true;
        self
    }

    /// Keep children of matches visible during search.
    pub fn keep_children_on_search(mut self) -> Self {
        self.keep_children_on_search = true;
        self
    }

    /// Render partial selection.
    pub fn show_partially_selected(mut self) -> Self {
        self.show_partially_selected = true;
        self
    }

    /// Set whether a search is active.
    pub fn search_mode_on(mut self, on: bool) -> Self {
        self.search_mode_on = on;
        self
    }

    /// Set whether default selection runs on activation.
    pub fn defaults_enabled(mut self, enabled: bool) -> Self {
        self.defaults_enabled = enabled;
        self
    }
}
