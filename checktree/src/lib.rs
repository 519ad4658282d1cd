//! State core of a hierarchical checkbox tree.
//!
//! Each node row is projected from its state into style classes and ARIA
//! attributes ([`presentation::project`]), and checked on first activation
//! when its default-selection hint applies ([`defaults`]).

pub mod aria;
pub mod classes;
pub mod config;
pub mod dataset;
pub mod defaults;
pub mod error;
pub mod events;
pub mod node;
pub mod presentation;
pub mod store;
pub mod traits;

pub use store::TreeStore;

pub mod prelude {
    pub use crate::aria::{AriaAttributes, AriaChecked, Role, aria_attributes};
    pub use crate::classes::{ClassList, StyleFlag, node_classes};
    pub use crate::config::TreeConfig;
    pub use crate::defaults::{
        AncestorSnapshot, Decision, DefaultSelectionResolver, Outcome, SkipReason,
    };
    pub use crate::error::{ConfigError, SelectionError};
    pub use crate::events::NodeEvent;
    pub use crate::node::{Mode, Node, NodeSnapshot, SelectionState};
    pub use crate::presentation::{Presentation, project};
    pub use crate::store::{StoreId, TreeStore};
    pub use crate::traits::{LookupFn, NodeLookup, SelectionMutator};
}
