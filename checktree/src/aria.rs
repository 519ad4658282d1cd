//! Accessibility attributes derived from node state.

use serde::{Serialize, Serializer};

use crate::config::TreeConfig;
use crate::node::{Mode, Node};

/// ARIA role of a node row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    #[serde(rename = "option")]
    Option,
    #[serde(rename = "treeitem")]
    TreeItem,
}

impl Role {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::SimpleSelect => Role::Option,
            Mode::MultiSelect | Mode::RadioSelect | Mode::Hierarchical => Role::TreeItem,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Option => "option",
            Role::TreeItem => "treeitem",
        }
    }
}

/// Value of `aria-checked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaChecked {
    Mixed,
    Bool(bool),
}

impl std::fmt::Display for AriaChecked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AriaChecked::Mixed => f.write_str("mixed"),
            AriaChecked::Bool(checked) => write!(f, "{checked}"),
        }
    }
}

impl Serialize for AriaChecked {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AriaChecked::Mixed => serializer.serialize_str("mixed"),
            AriaChecked::Bool(checked) => serializer.serialize_bool(*checked),
        }
    }
}

/// ARIA attributes of a node row.
///
/// `checked`, `level` and `expanded` are never set in simple-select mode,
/// where rows are plain listbox options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AriaAttributes {
    pub role: Role,
    #[serde(rename = "aria-disabled")]
    pub disabled: bool,
    #[serde(rename = "aria-selected")]
    pub selected: bool,
    #[serde(rename = "aria-checked", skip_serializing_if = "Option::is_none")]
    pub checked: Option<AriaChecked>,
    #[serde(rename = "aria-level", skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// `"true"`/`"false"` as strings, present only on branches.
    #[serde(
        rename = "aria-expanded",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_expanded"
    )]
    pub expanded: Option<bool>,
}

fn serialize_expanded<S: Serializer>(
    expanded: &Option<bool>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match expanded {
        Some(true) => serializer.serialize_str("true"),
        Some(false) => serializer.serialize_str("false"),
        None => serializer.serialize_none(),
    }
}

impl AriaAttributes {
    /// Attribute name/value pairs in emission order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("role", self.role.as_str().to_string()),
            ("aria-disabled", self.disabled.to_string()),
            ("aria-selected", self.selected.to_string()),
        ];
        if let Some(checked) = self.checked {
            pairs.push(("aria-checked", checked.to_string()));
        }
        if let Some(level) = self.level {
            pairs.push(("aria-level", level.to_string()));
        }
        if let Some(expanded) = self.expanded {
            pairs.push(("aria-expanded", expanded.to_string()));
        }
        pairs
    }

    /// Look up a single attribute by name.
    pub fn get(&self, name: &str) -> Option<String> {
        self.to_pairs()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

/// Derive the ARIA attributes of `node` under `config`.
pub fn aria_attributes(node: &Node, config: &TreeConfig) -> AriaAttributes {
    let role = Role::for_mode(config.mode);
    let mut attributes = AriaAttributes {
        role,
        disabled: node.disabled || node.read_only,
        selected: node.is_checked(),
        checked: None,
        level: None,
        expanded: None,
    };

    if role == Role::TreeItem {
        attributes.checked = Some(if node.is_partial() {
            AriaChecked::Mixed
        } else {
            AriaChecked::Bool(node.is_checked())
        });
        attributes.level = Some(u32::from(node.level_depth()) + 1);
        attributes.expanded = (!node.is_leaf()).then_some(node.expanded);
    }

    attributes
}
