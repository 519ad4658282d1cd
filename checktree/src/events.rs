//! Events the tree store queues for the host.

use serde::Serialize;

/// A user-visible change forwarded to the host's handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeEvent {
    /// A branch was expanded or collapsed (`onNodeToggle`).
    Toggle { id: String, expanded: bool },
    /// A node's checkbox changed (`onCheckboxChange`).
    CheckboxChange { id: String, checked: bool },
    /// A row action was triggered (`onAction`).
    Action { id: String, action: String },
}

impl NodeEvent {
    /// Id of the node the event concerns.
    pub fn node_id(&self) -> &str {
        match self {
            NodeEvent::Toggle { id, .. }
            | NodeEvent::CheckboxChange { id, .. }
            | NodeEvent::Action { id, .. } => id,
        }
    }
}
