//! Full presentation of a node row.
//!
//! [`project`] is the single entry point the rendering layer calls on every
//! pass. It is pure and reads nothing but the node and the tree config.

use serde::Serialize;

use crate::aria::{AriaAttributes, aria_attributes};
use crate::classes::{ClassList, node_classes};
use crate::config::TreeConfig;
use crate::dataset::dataset_attributes;
use crate::node::Node;

/// Left padding per depth level.
pub const INDENT_STEP: u32 = 20;

/// Everything a renderer needs to draw a node row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// Identifier of the row element.
    pub row_id: String,
    pub classes: ClassList,
    pub aria: AriaAttributes,
    /// Left padding, `None` when the row is not indented.
    pub padding_left: Option<u32>,
    /// `data-*` attributes.
    pub data: Vec<(String, String)>,
}

/// Identifier of the row element of node `id`.
pub fn row_id(id: &str) -> String {
    format!("{id}_li")
}

/// Left padding of the row.
///
/// Rows are indented by depth unless a search is flattening the tree.
pub fn indent(node: &Node, config: &TreeConfig) -> Option<u32> {
    (config.keep_tree_on_search || !config.search_mode_on)
        .then(|| u32::from(node.level_depth()) * INDENT_STEP)
}

/// Project a node into its presentation.
pub fn project(node: &Node, config: &TreeConfig) -> Presentation {
    Presentation {
        row_id: row_id(&node.id),
        classes: node_classes(node, config),
        aria: aria_attributes(node, config),
        padding_left: indent(node, config),
        data: dataset_attributes(&node.dataset),
    }
}
