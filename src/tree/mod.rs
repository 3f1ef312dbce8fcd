//! The arena-backed interface tree.
//!
//! [`Tree`] stores every node; the sibling modules add the per-variant
//! operations: [`element`] for the leaf state machine, [`bin`], [`paned`],
//! and [`notebook`] for the container family.

pub mod node;
#[allow(clippy::module_inception)]
pub mod tree;

pub mod bin;
pub mod element;
pub mod notebook;
pub mod paned;

pub use node::{Kind, NodeId, PanedSlot, TabLabel};
pub use notebook::NO_CHILD_LABEL;
pub use tree::Tree;
