//! In-memory tree store.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::config::TreeConfig;
use crate::defaults::{DefaultSelectionResolver, Outcome};
use crate::error::SelectionError;
use crate::events::NodeEvent;
use crate::node::{Node, NodeSnapshot, SelectionState};
use crate::presentation::{Presentation, project};
use crate::traits::{NodeLookup, SelectionMutator};

/// Unique identifier for a TreeStore instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId(usize);

impl StoreId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__tree_store_{}", self.0)
    }
}

/// Internal state for the TreeStore.
#[derive(Debug, Default)]
struct StoreInner {
    config: TreeConfig,
    /// Nodes by id.
    nodes: HashMap<String, Node>,
    /// Ids in insertion order.
    order: Vec<String>,
    /// Ids whose activation hook already ran.
    activated: HashSet<String>,
    /// Events not yet taken by the host.
    events: Vec<NodeEvent>,
}

/// Owns the nodes of one tree.
///
/// `TreeStore` is both the [`NodeLookup`] and the [`SelectionMutator`] the
/// node core works against, and it owns the activation hook: the first
/// [`activate`](Self::activate) of a node runs default selection, later
/// calls do nothing.
///
/// # Example
///
/// ```
/// use checktree::prelude::*;
///
/// let store = TreeStore::new(TreeConfig::default().defaults_enabled(true));
/// store.insert(Node::new("fruit", "Fruit").selected_by_default(true));
///
/// assert!(store.activate("fruit").is_some_and(|o| o.is_checked()));
/// assert!(store.activate("fruit").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TreeStore {
    id: StoreId,
    inner: Arc<RwLock<StoreInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new(TreeConfig::default())
    }
}

impl TreeStore {
    /// Create an empty store.
    pub fn new(config: TreeConfig) -> Self {
        Self {
            id: StoreId::new(),
            inner: Arc::new(RwLock::new(StoreInner {
                config,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a store holding `nodes`, inserted in order.
    pub fn with_nodes(config: TreeConfig, nodes: impl IntoIterator<Item = Node>) -> Self {
        let store = Self::new(config);
        for node in nodes {
            store.insert(node);
        }
        store
    }

    pub fn id(&self) -> StoreId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    pub fn config(&self) -> TreeConfig {
        self.inner
            .read()
            .map(|g| g.config.clone())
            .unwrap_or_default()
    }

    pub fn set_config(&self, config: TreeConfig) {
        if let Ok(mut guard) = self.inner.write() {
            guard.config = config;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Nodes
    // -------------------------------------------------------------------------

    /// Insert or replace a node.
    ///
    /// When the parent is already present, the node is appended to the
    /// parent's children and, if it has no depth, placed one level below it.
    /// Nodes already stored with this node as their parent are adopted.
    ///
    /// Replacing a node keeps the children already linked to it and, if its
    /// parent changed, unlinks it from the previous parent. Depths below a
    /// replaced node or adopted children are derived again from their parent.
    pub fn insert(&self, mut node: Node) {
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        let inner = &mut *guard;

        let previous = inner
            .nodes
            .get(&node.id)
            .map(|p| (p.parent_id.clone(), p.children.clone()));
        let replaced = previous.is_some();
        if let Some((old_parent_id, stored_children)) = previous {
            for child_id in stored_children {
                if !node.children.contains(&child_id) {
                    node.children.push(child_id);
                }
            }
            if old_parent_id != node.parent_id
                && let Some(old_parent_id) = old_parent_id
                && let Some(old_parent) = inner.nodes.get_mut(&old_parent_id)
            {
                old_parent.children.retain(|c| *c != node.id);
            }
        }

        let orphans: Vec<String> = inner
            .order
            .iter()
            .filter(|id| {
                **id != node.id
                    && !node.children.contains(*id)
                    && inner
                        .nodes
                        .get(*id)
                        .is_some_and(|n| n.parent_id.as_deref() == Some(node.id.as_str()))
            })
            .cloned()
            .collect();
        let adopted = !orphans.is_empty();
        node.children.extend(orphans);

        if let Some(parent_id) = node.parent_id.clone()
            && let Some(parent) = inner.nodes.get_mut(&parent_id)
        {
            if node.depth.is_none() {
                node.depth = Some(parent.level_depth() + 1);
            }
            if !parent.children.contains(&node.id) {
                parent.children.push(node.id.clone());
            }
        }

        let id = node.id.clone();
        if inner.nodes.insert(id.clone(), node).is_none() {
            inner.order.push(id.clone());
        }
        if replaced || adopted {
            Self::relink_depths(inner, &id);
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Set the depth of every descendant of `id` from its parent's depth.
    fn relink_depths(inner: &mut StoreInner, id: &str) {
        let mut visited = HashSet::from([id.to_string()]);
        let mut pending = vec![id.to_string()];
        while let Some(parent_id) = pending.pop() {
            let Some(parent) = inner.nodes.get(&parent_id) else {
                continue;
            };
            let depth = parent.level_depth() + 1;
            for child_id in parent.children.clone() {
                if let Some(child) = inner.nodes.get_mut(&child_id)
                    && visited.insert(child_id.clone())
                {
                    child.depth = Some(depth);
                    pending.push(child_id);
                }
            }
        }
    }

    /// Remove a node and its descendants.
    ///
    /// Removed ids forget their activation, so a node inserted again under
    /// the same id is activated anew.
    pub fn remove(&self, id: &str) -> Option<Node> {
        let mut guard = self.inner.write().ok()?;
        let node = guard.nodes.remove(id)?;

        if let Some(parent_id) = &node.parent_id
            && let Some(parent) = guard.nodes.get_mut(parent_id)
        {
            parent.children.retain(|c| c != id);
        }

        let mut removed: HashSet<String> = HashSet::from([id.to_string()]);
        let mut pending = node.children.clone();
        while let Some(child_id) = pending.pop() {
            if let Some(child) = guard.nodes.remove(&child_id) {
                pending.extend(child.children);
            }
            removed.insert(child_id);
        }

        guard.order.retain(|i| !removed.contains(i));
        guard.activated.retain(|i| !removed.contains(i));
        self.dirty.store(true, Ordering::SeqCst);
        Some(node)
    }

    /// Get a copy of a node.
    pub fn node(&self, id: &str) -> Option<Node> {
        self.inner.read().ok().and_then(|g| g.nodes.get(id).cloned())
    }

    /// All node ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.order.clone())
            .unwrap_or_default()
    }

    /// Ids of all checked nodes, in insertion order.
    pub fn checked_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| {
                g.order
                    .iter()
                    .filter(|id| g.nodes.get(*id).is_some_and(Node::is_checked))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.nodes.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -------------------------------------------------------------------------
    // Activation
    // -------------------------------------------------------------------------

    /// Run the activation hook of a node.
    ///
    /// Returns `None` when the node was already activated. An unknown id is
    /// reported as skipped and is not remembered.
    pub fn activate(&self, id: &str) -> Option<Outcome> {
        let resolver = {
            let mut guard = self.inner.write().ok()?;
            if guard.activated.contains(id) {
                return None;
            }
            if guard.nodes.contains_key(id) {
                guard.activated.insert(id.to_string());
            }
            DefaultSelectionResolver::from_config(&guard.config)
        };

        Some(resolver.resolve(id, self, self))
    }

    /// Activate every node in insertion order.
    pub fn activate_all(&self) -> Vec<(String, Outcome)> {
        self.ids()
            .into_iter()
            .filter_map(|id| self.activate(&id).map(|outcome| (id, outcome)))
            .collect()
    }

    pub fn is_activated(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.activated.contains(id))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Expand or collapse a branch.
    ///
    /// Returns the new expanded state, or `None` for leaves and unknown ids.
    pub fn toggle_expanded(&self, id: &str) -> Option<bool> {
        let mut guard = self.inner.write().ok()?;
        let node = guard.nodes.get_mut(id)?;
        if node.is_leaf() {
            return None;
        }
        node.expanded = !node.expanded;
        let expanded = node.expanded;
        guard.events.push(NodeEvent::Toggle {
            id: id.to_string(),
            expanded,
        });
        self.dirty.store(true, Ordering::SeqCst);
        Some(expanded)
    }

    /// Forward a row action. Returns false for unknown ids and read-only
    /// nodes.
    pub fn trigger_action(&self, id: &str, action: impl Into<String>) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if !guard.nodes.get(id).is_some_and(|n| !n.read_only) {
            return false;
        }
        guard.events.push(NodeEvent::Action {
            id: id.to_string(),
            action: action.into(),
        });
        true
    }

    /// Take all queued events.
    pub fn take_events(&self) -> Vec<NodeEvent> {
        self.inner
            .write()
            .map(|mut g| std::mem::take(&mut g.events))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    /// Project a node with the store's config.
    pub fn presentation(&self, id: &str) -> Option<Presentation> {
        let guard = self.inner.read().ok()?;
        guard.nodes.get(id).map(|node| project(node, &guard.config))
    }

    /// Check if the store changed since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl NodeLookup for TreeStore {
    fn get_node_by_id(&self, id: &str) -> Option<NodeSnapshot> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.nodes.get(id).map(NodeSnapshot::from))
    }
}

impl SelectionMutator for TreeStore {
    /// Check or uncheck a node and queue a `CheckboxChange` for it.
    ///
    /// In simple-select and radio-select modes, checking a node also
    /// unchecks every other checked node. Those implicit unchecks queue no
    /// events; hosts read the resulting state through `checked_ids` or
    /// `node`.
    fn set_checked(&self, id: &str, checked: bool) -> Result<(), SelectionError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| SelectionError::StoreUnavailable)?;
        let single = guard.config.mode.is_single();

        let node = guard
            .nodes
            .get_mut(id)
            .ok_or_else(|| SelectionError::NodeNotFound(id.to_string()))?;
        if node.not_selectable {
            return Err(SelectionError::NotSelectable(id.to_string()));
        }
        if node.disabled {
            return Err(SelectionError::Disabled(id.to_string()));
        }

        let state = if checked {
            SelectionState::Checked
        } else {
            SelectionState::Unchecked
        };
        if node.state == state {
            return Ok(());
        }
        node.state = state;

        if checked && single {
            for other in guard.nodes.values_mut() {
                if other.id != id && other.is_checked() {
                    other.state = SelectionState::Unchecked;
                }
            }
        }

        debug!("Node '{}' checked: {}", id, checked);
        guard.events.push(NodeEvent::CheckboxChange {
            id: id.to_string(),
            checked,
        });
        self.dirty.store(true, Ordering::SeqCst);
        Ok(())
    }
}
