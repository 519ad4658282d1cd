//! Node records held by the tree store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selection mode of the whole tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Any number of nodes can be checked.
    #[default]
    MultiSelect,
    /// A single node, rendered as a flat listbox of options.
    SimpleSelect,
    /// A single node, rendered as a tree of radio buttons.
    RadioSelect,
    /// Any number of nodes, parents and children checked independently.
    Hierarchical,
}

impl Mode {
    /// Whether checking a node clears every other checked node.
    pub fn is_single(self) -> bool {
        matches!(self, Mode::SimpleSelect | Mode::RadioSelect)
    }
}

/// Checked state of a node.
///
/// A node is either unchecked, fully checked, or partially checked through a
/// mixed selection of its descendants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionState {
    #[default]
    Unchecked,
    Checked,
    Partial,
}

impl SelectionState {
    /// Build from the `checked`/`partial` flag pair. `partial` wins.
    pub fn from_flags(checked: bool, partial: bool) -> Self {
        match (checked, partial) {
            (_, true) => SelectionState::Partial,
            (true, false) => SelectionState::Checked,
            (false, false) => SelectionState::Unchecked,
        }
    }

    pub fn is_checked(self) -> bool {
        self == SelectionState::Checked
    }

    pub fn is_partial(self) -> bool {
        self == SelectionState::Partial
    }
}

/// One entry of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Node {
    /// Unique, stable identifier.
    pub id: String,
    /// Identifier of the parent node, `None` at root level.
    pub parent_id: Option<String>,
    /// Ordered child identifiers. Empty for leaves.
    pub children: Vec<String>,
    /// Display label.
    pub label: String,
    /// Value reported to the host on selection.
    pub value: String,
    /// Tooltip text.
    pub title: Option<String>,
    pub state: SelectionState,
    pub expanded: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub not_selectable: bool,
    pub hidden: bool,
    pub focused: bool,
    /// Hint to check the node when it is first activated.
    pub selected_by_default: bool,
    /// Distance from the root. Absent means 0.
    pub depth: Option<u16>,
    /// A descendant matches the current search.
    pub match_in_children: bool,
    /// An ancestor matches the current search.
    pub match_in_parent: bool,
    /// Extra class appended after the derived ones.
    pub class_name: Option<String>,
    /// Opaque data attributes.
    pub dataset: BTreeMap<String, String>,
}

impl Node {
    /// Create a root-level node whose label and value are both `label`.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: id.into(),
            value: label.clone(),
            label,
            ..Default::default()
        }
    }

    /// Set the parent id.
    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Append a child id.
    pub fn child(mut self, child_id: impl Into<String>) -> Self {
        self.children.push(child_id.into());
        self
    }

    /// Set the value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the tooltip.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn state(mut self, state: SelectionState) -> Self {
        self.state = state;
        self
    }

    pub fn checked(self) -> Self {
        self.state(SelectionState::Checked)
    }

    pub fn partial(self) -> Self {
        self.state(SelectionState::Partial)
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn not_selectable(mut self, not_selectable: bool) -> Self {
        self.not_selectable = not_selectable;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn selected_by_default(mut self, selected: bool) -> Self {
        self.selected_by_default = selected;
        self
    }

    pub fn depth(mut self, depth: u16) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn match_in_children(mut self, matched: bool) -> Self {
        self.match_in_children = matched;
        self
    }

    pub fn match_in_parent(mut self, matched: bool) -> Self {
        self.match_in_parent = matched;
        self
    }

    /// Set the extra class name.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Add a data attribute.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.insert(key.into(), value.into());
        self
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth with the root default applied.
    pub fn level_depth(&self) -> u16 {
        self.depth.unwrap_or(0)
    }

    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    pub fn is_partial(&self) -> bool {
        self.state.is_partial()
    }

    /// Capture the fields the default-selection rule reads.
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot::from(self)
    }
}

/// Immutable view of a node as returned by a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub id: String,
    pub parent_id: Option<String>,
    pub checked: bool,
    pub not_selectable: bool,
    pub selected_by_default: bool,
}

impl From<&Node> for NodeSnapshot {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            parent_id: node.parent_id.clone(),
            checked: node.is_checked(),
            not_selectable: node.not_selectable,
            selected_by_default: node.selected_by_default,
        }
    }
}
