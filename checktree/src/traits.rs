//! Capabilities the tree store provides to the node core.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::SelectionError;
use crate::node::{Node, NodeSnapshot};

/// Read-only lookup of nodes by id.
///
/// An id that cannot be resolved yields `None`; callers treat it as an
/// absent node rather than an error.
pub trait NodeLookup {
    fn get_node_by_id(&self, id: &str) -> Option<NodeSnapshot>;
}

/// Typed command channel for changing a node's checked state.
///
/// Takes `&self`: implementors hold their state behind interior
/// mutability, so the same value can serve as both lookup and mutator.
pub trait SelectionMutator {
    fn set_checked(&self, id: &str, checked: bool) -> Result<(), SelectionError>;
}

impl<S: BuildHasher> NodeLookup for HashMap<String, Node, S> {
    fn get_node_by_id(&self, id: &str) -> Option<NodeSnapshot> {
        self.get(id).map(NodeSnapshot::from)
    }
}

impl NodeLookup for BTreeMap<String, Node> {
    fn get_node_by_id(&self, id: &str) -> Option<NodeSnapshot> {
        self.get(id).map(NodeSnapshot::from)
    }
}

impl NodeLookup for [Node] {
    fn get_node_by_id(&self, id: &str) -> Option<NodeSnapshot> {
        self.iter().find(|n| n.id == id).map(NodeSnapshot::from)
    }
}

/// Adapter turning a closure into a [`NodeLookup`].
///
/// ```
/// use checktree::node::NodeSnapshot;
/// use checktree::traits::{LookupFn, NodeLookup};
///
/// let lookup = LookupFn(|id: &str| {
///     (id == "root").then(|| NodeSnapshot {
///         id: id.to_string(),
///         ..Default::default()
///     })
/// });
/// assert!(lookup.get_node_by_id("root").is_some());
/// assert!(lookup.get_node_by_id("gone").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LookupFn<F>(pub F);

impl<F> NodeLookup for LookupFn<F>
where
    F: Fn(&str) -> Option<NodeSnapshot>,
{
    fn get_node_by_id(&self, id: &str) -> Option<NodeSnapshot> {
        (self.0)(id)
    }
}
