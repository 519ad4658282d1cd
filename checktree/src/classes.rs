//! Style classes derived from node state.

use serde::Serialize;

use crate::config::TreeConfig;
use crate::node::Node;

/// Class every node row carries.
pub const BASE_CLASS: &str = "node";

/// A state flag rendered as a style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFlag {
    Leaf,
    Tree,
    Disabled,
    Hide,
    MatchInChildren,
    MatchInParent,
    Partial,
    ReadOnly,
    Checked,
    Focused,
}

impl StyleFlag {
    /// Every flag, in emission order.
    pub const ALL: [StyleFlag; 10] = [
        StyleFlag::Leaf,
        StyleFlag::Tree,
        StyleFlag::Disabled,
        StyleFlag::Hide,
        StyleFlag::MatchInChildren,
        StyleFlag::MatchInParent,
        StyleFlag::Partial,
        StyleFlag::ReadOnly,
        StyleFlag::Checked,
        StyleFlag::Focused,
    ];

    /// Class name of the flag.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleFlag::Leaf => "leaf",
            StyleFlag::Tree => "tree",
            StyleFlag::Disabled => "disabled",
            StyleFlag::Hide => "hide",
            StyleFlag::MatchInChildren => "match-in-children",
            StyleFlag::MatchInParent => "match-in-parent",
            StyleFlag::Partial => "partial",
            StyleFlag::ReadOnly => "readOnly",
            StyleFlag::Checked => "checked",
            StyleFlag::Focused => "focused",
        }
    }

    /// Whether the flag applies to `node` under `config`.
    pub fn is_active(self, node: &Node, config: &TreeConfig) -> bool {
        match self {
            StyleFlag::Leaf => node.is_leaf(),
            StyleFlag::Tree => !node.is_leaf(),
            StyleFlag::Disabled => node.disabled,
            StyleFlag::Hide => node.hidden,
            StyleFlag::MatchInChildren => config.keep_tree_on_search && node.match_in_children,
            StyleFlag::MatchInParent => {
                config.keep_tree_on_search
                    && config.keep_children_on_search
                    && node.match_in_parent
            }
            StyleFlag::Partial => config.show_partially_selected && node.is_partial(),
            StyleFlag::ReadOnly => node.read_only,
            StyleFlag::Checked => node.is_checked(),
            StyleFlag::Focused => node.focused,
        }
    }
}

impl std::fmt::Display for StyleFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of class names.
///
/// Serializes as a JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one or more whitespace-separated classes.
    pub fn push(&mut self, classes: impl AsRef<str>) {
        self.0
            .extend(classes.as_ref().split_whitespace().map(str::to_string));
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Flags active for `node`, in emission order.
pub fn active_flags(node: &Node, config: &TreeConfig) -> Vec<StyleFlag> {
    StyleFlag::ALL
        .into_iter()
        .filter(|flag| flag.is_active(node, config))
        .collect()
}

/// Full class list of a node row: base class, active flags, then the
/// node's extra class name.
pub fn node_classes(node: &Node, config: &TreeConfig) -> ClassList {
    let mut classes = ClassList::new();
    classes.push(BASE_CLASS);
    for flag in active_flags(node, config) {
        classes.push(flag.as_str());
    }
    if let Some(extra) = &node.class_name {
        classes.push(extra);
    }
    classes
}
