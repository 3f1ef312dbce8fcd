//! Crate-wide error type and result alias.
//!
//! Every fallible mutation returns [`Error`] synchronously; nothing is retried
//! internally. A returned error means the tree was left in its pre-mutation
//! state — operations validate before they attach or detach anything.

use crate::tree::node::Kind;

/// Errors raised by tree mutations and snapshot restoration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An operation needed a populated element but found an empty one.
    #[error("element has no child")]
    EmptyElement,

    /// A container is already at its child-count limit.
    #[error("{view} cannot hold any more children")]
    Capacity {
        /// The container that rejected the child.
        view: Kind,
    },

    /// The referenced child is not present in the container.
    #[error("child is not in the {view}")]
    NotFound {
        /// The container that was searched.
        view: Kind,
    },

    /// The child's kind does not match what the container accepts.
    #[error("a {target} cannot hold a child of kind {child}")]
    TypeKind {
        /// The node that rejected the child.
        target: Kind,
        /// The kind of the rejected child.
        child: Kind,
    },

    /// A structural count in a snapshot is outside its valid range.
    #[error("{value} is out of range for {what}")]
    Range {
        /// What the value was supposed to describe.
        what: &'static str,
        /// The offending value.
        value: i64,
    },

    /// A snapshot's action-button count disagrees with the notebook built
    /// by the factory.
    #[error(
        "expected {expected} action button(s) for notebook as per given properties, but got {actual}"
    )]
    Mismatch {
        /// Count recorded in the snapshot.
        expected: u8,
        /// Count on the freshly constructed notebook.
        actual: u8,
    },

    /// A snapshot names a provider that is not in the registry.
    #[error("no provider registered under {0:?}")]
    UnknownProvider(String),

    /// A provider rejected a request (unknown child name, missing props
    /// field, and so on).
    #[error("provider error: {0}")]
    Provider(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
