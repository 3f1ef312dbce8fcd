//! Tree events: synchronous notifications raised by mutations.
//!
//! Events are delivered within the same call stack as the mutation that
//! caused them, after the mutation has fully applied. Observers receive the
//! event by shared reference and cannot re-enter the tree; the embedding
//! application typically records what happened and reacts once the mutating
//! call returns.

use crate::tree::node::NodeId;

/// Which mouse button was pressed on an action control.
///
/// The core does not interpret the button; it only forwards it to the
/// application as part of [`TreeEvent::ActionClicked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// The conventional numeric code: 1 for left, 2 for middle, 3 for right.
    pub fn code(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
        }
    }
}

/// A notification raised by a tree mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    /// A child bundle was attached to an element.
    ChildAdded {
        /// The element that gained content.
        element: NodeId,
    },
    /// An element's child was cleared (handed back to its provider).
    ChildCleared {
        /// The element that lost content.
        element: NodeId,
    },
    /// An element's child was removed (handed to the caller for reuse).
    ChildRemoved {
        /// The element that lost content.
        element: NodeId,
    },
    /// An action control was pressed.
    ActionClicked {
        /// The element or notebook owning the pressed control.
        source: NodeId,
        /// Which mouse button was used.
        button: MouseButton,
    },
}

/// Boxed observer callback registered with [`Tree::subscribe`](crate::tree::Tree::subscribe).
pub type Observer = Box<dyn FnMut(&TreeEvent)>;
