//! Error types.

use thiserror::Error;

/// Errors returned by the selection mutation channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No node with this id is registered.
    #[error("Node '{0}' not found")]
    NodeNotFound(String),

    /// The node cannot be checked or unchecked.
    #[error("Node '{0}' is not selectable")]
    NotSelectable(String),

    /// The node is disabled.
    #[error("Node '{0}' is disabled")]
    Disabled(String),

    /// The store's state could not be locked.
    #[error("Tree store is unavailable")]
    StoreUnavailable,
}

/// Errors that can occur while loading a tree configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid configuration JSON.
    #[error("Invalid tree configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
