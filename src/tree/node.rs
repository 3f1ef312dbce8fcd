//! Node types: NodeId, Kind, per-variant payloads.

use std::fmt;
use std::rc::Rc;

use slotmap::new_key_type;

use crate::content::Content;
use crate::props::{Orientation, PackSide, TabPosition};
use crate::provider::Provider;

new_key_type! {
    /// Unique identifier for a tree node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Closed set of node kinds.
///
/// `Display` yields the stable tags used in serialized snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Element,
    Bin,
    Paned,
    Notebook,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Kind::Element => "element",
            Kind::Bin => "bin",
            Kind::Paned => "paned",
            Kind::Notebook => "notebook",
        };
        f.write_str(tag)
    }
}

/// One of a paned container's two slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanedSlot {
    First,
    Second,
}

impl PanedSlot {
    /// The other slot.
    pub fn complement(self) -> Self {
        match self {
            PanedSlot::First => PanedSlot::Second,
            PanedSlot::Second => PanedSlot::First,
        }
    }
}

/// Leaf block holding provider-supplied content.
///
/// Invariant: `child`, `child_name`, `icon`, and `provider` are either all
/// set (populated) or all unset (empty). `header_child` is optional even
/// when populated.
pub struct ElementNode {
    pub(crate) child: Option<Box<dyn Content>>,
    pub(crate) child_name: Option<String>,
    pub(crate) icon: Option<Box<dyn Content>>,
    pub(crate) header_child: Option<Box<dyn Content>>,
    pub(crate) provider: Option<Rc<dyn Provider>>,
    pub(crate) pack_side: PackSide,
    pub(crate) action_button_enabled: bool,
}

impl ElementNode {
    pub(crate) fn new() -> Self {
        Self {
            child: None,
            child_name: None,
            icon: None,
            header_child: None,
            provider: None,
            pack_side: PackSide::Start,
            action_button_enabled: true,
        }
    }

    /// Whether the element currently holds content.
    pub fn is_populated(&self) -> bool {
        self.child_name.is_some()
    }
}

/// Container holding zero or one child of any kind.
pub struct BinNode {
    pub(crate) child: Option<NodeId>,
}

impl BinNode {
    pub(crate) fn new() -> Self {
        Self { child: None }
    }
}

/// Container with two pinned slots, a split direction, and a split offset.
pub struct PanedNode {
    pub(crate) child_1: Option<NodeId>,
    pub(crate) child_2: Option<NodeId>,
    pub(crate) orientation: Orientation,
    pub(crate) position: i32,
}

impl PanedNode {
    pub(crate) fn new(orientation: Orientation) -> Self {
        Self {
            child_1: None,
            child_2: None,
            orientation,
            position: 0,
        }
    }

    pub(crate) fn slot(&self, slot: PanedSlot) -> Option<NodeId> {
        match slot {
            PanedSlot::First => self.child_1,
            PanedSlot::Second => self.child_2,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: PanedSlot) -> &mut Option<NodeId> {
        match slot {
            PanedSlot::First => &mut self.child_1,
            PanedSlot::Second => &mut self.child_2,
        }
    }
}

/// Tab label derived from an element's `child_name`.
///
/// The angle is 0 for flat tab strips (top/bottom) and 90 for side-mounted
/// ones, fixed at label creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    pub text: String,
    pub angle: u16,
}

/// One notebook page: an element plus its tab label.
pub struct Page {
    pub(crate) element: NodeId,
    pub(crate) label: TabLabel,
}

/// Ordered container of elements with a tab strip and up to two edge
/// controls.
pub struct NotebookNode {
    pub(crate) pages: Vec<Page>,
    pub(crate) tab_position: TabPosition,
    pub(crate) action_buttons: [Option<Box<dyn Content>>; 2],
}

impl NotebookNode {
    pub(crate) fn new() -> Self {
        Self {
            pages: Vec::new(),
            tab_position: TabPosition::Top,
            action_buttons: [None, None],
        }
    }
}

/// Tagged union over the four node variants.
pub enum Node {
    Element(ElementNode),
    Bin(BinNode),
    Paned(PanedNode),
    Notebook(NotebookNode),
}

impl Node {
    /// The kind tag of this node.
    pub fn kind(&self) -> Kind {
        match self {
            Node::Element(_) => Kind::Element,
            Node::Bin(_) => Kind::Bin,
            Node::Paned(_) => Kind::Paned,
            Node::Notebook(_) => Kind::Notebook,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_match_serialized_form() {
        assert_eq!(Kind::Element.to_string(), "element");
        assert_eq!(Kind::Bin.to_string(), "bin");
        assert_eq!(Kind::Paned.to_string(), "paned");
        assert_eq!(Kind::Notebook.to_string(), "notebook");
    }

    #[test]
    fn paned_slot_complement() {
        assert_eq!(PanedSlot::First.complement(), PanedSlot::Second);
        assert_eq!(PanedSlot::Second.complement(), PanedSlot::First);
    }

    #[test]
    fn fresh_element_is_empty() {
        let node = ElementNode::new();
        assert!(!node.is_populated());
        assert!(node.action_button_enabled);
        assert_eq!(node.pack_side, PackSide::Start);
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
