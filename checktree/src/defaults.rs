//! Default selection applied when a node is first activated.
//!
//! A node carrying the `selected_by_default` hint is checked on activation
//! when either:
//! - it has no grandparent (it sits in the top two levels), or
//! - its grandparent is already checked.
//!
//! The immediate parent's state is not consulted. Nodes that are not
//! selectable or already checked are left alone, and the resolver never
//! unchecks anything.

use log::{debug, trace};

use crate::config::TreeConfig;
use crate::error::SelectionError;
use crate::node::NodeSnapshot;
use crate::traits::{NodeLookup, SelectionMutator};

/// The node and its two closest ancestors, read once at activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorSnapshot {
    pub node: NodeSnapshot,
    pub parent: Option<NodeSnapshot>,
    pub grandparent: Option<NodeSnapshot>,
}

impl AncestorSnapshot {
    /// Read the node `id` and its ancestors through `lookup`.
    ///
    /// Returns `None` if `id` itself cannot be resolved. Dangling parent or
    /// grandparent ids resolve to absent ancestors.
    pub fn capture<L: NodeLookup + ?Sized>(lookup: &L, id: &str) -> Option<Self> {
        let node = lookup.get_node_by_id(id)?;
        let parent = node
            .parent_id
            .as_deref()
            .and_then(|parent_id| lookup.get_node_by_id(parent_id));
        let grandparent = parent
            .as_ref()
            .and_then(|parent| parent.parent_id.as_deref())
            .and_then(|grandparent_id| lookup.get_node_by_id(grandparent_id));

        Some(Self {
            node,
            parent,
            grandparent,
        })
    }
}

/// Why default selection left a node untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The node id no longer resolves.
    StaleIdentity,
    /// The node is not selectable.
    NotSelectable,
    /// Default selection is disabled for this pass.
    DefaultsDisabled,
    /// The grandparent exists and is unchecked.
    GrandparentUnchecked,
    /// The node has no `selected_by_default` hint.
    NotSelectedByDefault,
    /// The node is already checked.
    AlreadyChecked,
}

/// Pure outcome of the default-selection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Check the node.
    Check,
    /// Leave the node as it is.
    Skip(SkipReason),
}

/// What happened when the resolver ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The node was checked.
    Checked,
    /// Nothing was requested.
    Skipped(SkipReason),
    /// The check was requested and the store refused it.
    Rejected(SelectionError),
}

impl Outcome {
    pub fn is_checked(&self) -> bool {
        matches!(self, Outcome::Checked)
    }
}

/// Applies default selection to a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultSelectionResolver {
    defaults_enabled: bool,
}

impl DefaultSelectionResolver {
    pub fn new(defaults_enabled: bool) -> Self {
        Self { defaults_enabled }
    }

    pub fn from_config(config: &TreeConfig) -> Self {
        Self::new(config.defaults_enabled)
    }

    pub fn defaults_enabled(&self) -> bool {
        self.defaults_enabled
    }

    /// Evaluate the rule against a snapshot without side effects.
    pub fn decide(&self, snapshot: &AncestorSnapshot) -> Decision {
        let node = &snapshot.node;

        if node.not_selectable {
            return Decision::Skip(SkipReason::NotSelectable);
        }
        // TODO: check nodes restored as checked from persisted selections
        // once the store exposes the persisted flag.
        if !self.defaults_enabled {
            return Decision::Skip(SkipReason::DefaultsDisabled);
        }
        if let Some(grandparent) = &snapshot.grandparent
            && !grandparent.checked
        {
            return Decision::Skip(SkipReason::GrandparentUnchecked);
        }
        if !node.selected_by_default {
            return Decision::Skip(SkipReason::NotSelectedByDefault);
        }
        if node.checked {
            return Decision::Skip(SkipReason::AlreadyChecked);
        }
        Decision::Check
    }

    /// Evaluate the rule for `id` and request the check through `mutator`.
    ///
    /// The request is made at most once and never retried.
    pub fn resolve<L, M>(&self, id: &str, lookup: &L, mutator: &M) -> Outcome
    where
        L: NodeLookup + ?Sized,
        M: SelectionMutator + ?Sized,
    {
        let Some(snapshot) = AncestorSnapshot::capture(lookup, id) else {
            return Outcome::Skipped(SkipReason::StaleIdentity);
        };

        match self.decide(&snapshot) {
            Decision::Skip(reason) => {
                trace!("Default selection skipped for '{}': {:?}", id, reason);
                Outcome::Skipped(reason)
            }
            Decision::Check => match mutator.set_checked(id, true) {
                Ok(()) => {
                    trace!("Default selection checked '{}'", id);
                    Outcome::Checked
                }
                Err(e) => {
                    debug!("Default selection for '{}' rejected: {}", id, e);
                    Outcome::Rejected(e)
                }
            },
        }
    }
}
