//! The arena tree: node storage, parent links, generic container contract.
//!
//! All nodes live in a single `SlotMap`; parent links sit in a secondary map
//! while each container stores its own children in its payload, so slot
//! semantics (bin child, paned slots, notebook page order) stay typed.
//! Variant-specific operations live in the sibling modules (`element`,
//! `bin`, `paned`, `notebook`); this module holds construction, queries,
//! event delivery, and the kind-dispatched `add_child` / `remove_child` /
//! `replace_child` contract shared by every container.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{
    BinNode, ElementNode, Kind, Node, NodeId, NotebookNode, PanedNode,
};
use crate::error::{Error, Result};
use crate::event::{Observer, TreeEvent};
use crate::props::{Orientation, Props};
use crate::provider::ChildBundle;

/// A live interface tree.
///
/// The tree owns every node exclusively; a child is referenced by exactly
/// one container at a time, and reparenting operations detach before they
/// attach. Mutations run synchronously on the calling thread and fire
/// [`TreeEvent`]s to subscribed observers before returning.
pub struct Tree {
    pub(crate) nodes: SlotMap<NodeId, Node>,
    pub(crate) parent: SecondaryMap<NodeId, NodeId>,
    observers: Vec<Observer>,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            parent: SecondaryMap::new(),
            observers: Vec::new(),
        }
    }

    // -----------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------

    /// Insert an empty element (action button enabled, packed at the start).
    pub fn new_element(&mut self) -> NodeId {
        self.nodes.insert(Node::Element(ElementNode::new()))
    }

    /// Insert an element pre-populated from a bundle.
    ///
    /// Emits the same `ChildAdded` event as [`set_child`](Self::set_child).
    pub fn new_element_with(&mut self, bundle: ChildBundle) -> NodeId {
        let id = self.new_element();
        self.set_child(id, bundle);
        id
    }

    /// Insert an empty bin.
    pub fn new_bin(&mut self) -> NodeId {
        self.nodes.insert(Node::Bin(BinNode::new()))
    }

    /// Insert an empty paned with the default (horizontal) orientation.
    pub fn new_paned(&mut self) -> NodeId {
        self.new_paned_with(Orientation::default())
    }

    /// Insert an empty paned with the given orientation.
    pub fn new_paned_with(&mut self, orientation: Orientation) -> NodeId {
        self.nodes.insert(Node::Paned(PanedNode::new(orientation)))
    }

    /// Insert an empty notebook (tabs on top, no action buttons).
    pub fn new_notebook(&mut self) -> NodeId {
        self.nodes.insert(Node::Notebook(NotebookNode::new()))
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    /// Whether the tree contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// The kind tag of a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    pub fn kind(&self, id: NodeId) -> Kind {
        self.node(id).kind()
    }

    /// The parent of a node, if it is attached to one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Ordered children of a node. Elements have none; a paned reports slot
    /// one before slot two; a notebook reports page order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        match self.node(id) {
            Node::Element(_) => Vec::new(),
            Node::Bin(bin) => bin.child.into_iter().collect(),
            Node::Paned(paned) => paned.child_1.into_iter().chain(paned.child_2).collect(),
            Node::Notebook(notebook) => notebook.pages.iter().map(|p| p.element).collect(),
        }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -----------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------

    /// Register an observer for tree events.
    ///
    /// Observers run synchronously inside the mutating call, after the
    /// mutation has applied.
    pub fn subscribe(&mut self, observer: impl FnMut(&TreeEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub(crate) fn emit(&mut self, event: TreeEvent) {
        let mut observers = std::mem::take(&mut self.observers);
        for observer in observers.iter_mut() {
            observer(&event);
        }
        // Observers registered during delivery are kept for the next event.
        let late = std::mem::replace(&mut self.observers, observers);
        self.observers.extend(late);
    }

    // -----------------------------------------------------------------
    // Generic container contract
    // -----------------------------------------------------------------

    /// Add `child` to a container, kind-dispatched.
    ///
    /// A paned fills its first free slot; a notebook appends. Fails with
    /// [`Error::Capacity`], [`Error::TypeKind`] per the target's policy.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `child` already has a parent.
    pub fn add_child(&mut self, view: NodeId, child: NodeId) -> Result<()> {
        match self.kind(view) {
            Kind::Bin => self.bin_add(view, child),
            Kind::Paned => self.paned_add_child(view, child, None),
            Kind::Notebook => self.notebook_insert(view, child, None),
            Kind::Element => Err(Error::TypeKind {
                target: Kind::Element,
                child: self.kind(child),
            }),
        }
    }

    /// Remove `child` from a container, detaching it as an orphan.
    ///
    /// Fails with [`Error::NotFound`] if `child` is not in `view`.
    pub fn remove_child(&mut self, view: NodeId, child: NodeId) -> Result<()> {
        match self.kind(view) {
            Kind::Bin => self.bin_remove(view, child),
            Kind::Paned => self.paned_remove(view, child),
            Kind::Notebook => self.notebook_remove(view, child),
            Kind::Element => Err(Error::TypeKind {
                target: Kind::Element,
                child: self.kind(child),
            }),
        }
    }

    /// Replace `old` with `new` in a container, preserving slot or page
    /// position.
    ///
    /// `new` must be an orphan. Propagates the container's `remove_child`
    /// and kind-policy errors.
    pub fn replace_child(&mut self, view: NodeId, old: NodeId, new: NodeId) -> Result<()> {
        match self.kind(view) {
            Kind::Bin => self.bin_replace(view, old, new),
            Kind::Paned => self.paned_replace(view, old, new),
            Kind::Notebook => self.notebook_replace(view, old, new),
            Kind::Element => Err(Error::TypeKind {
                target: Kind::Element,
                child: self.kind(new),
            }),
        }
    }

    /// Serialize the subtree rooted at `id` into a symbolic snapshot.
    pub fn props(&self, id: NodeId) -> Props {
        match self.node(id) {
            Node::Element(_) => self.element_props(id),
            Node::Bin(_) => self.bin_props(id),
            Node::Paned(_) => self.paned_props(id),
            Node::Notebook(_) => self.notebook_props(id),
        }
    }

    /// Drop a node and its whole subtree from the tree.
    ///
    /// The node is detached from its parent first, so the surrounding tree
    /// stays consistent. Content owned by removed elements is dropped
    /// without consulting its provider; clear elements beforehand if the
    /// provider must be notified.
    pub fn remove(&mut self, id: NodeId) {
        if !self.contains(id) {
            return;
        }
        if let Some(parent) = self.parent(id) {
            // The child is known to be present; the container kind is too.
            let _ = self.remove_child(parent, id);
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            stack.extend(self.children(current));
            self.parent.remove(current);
            self.nodes.remove(current);
        }
    }

    // -----------------------------------------------------------------
    // Internal node access and link bookkeeping
    // -----------------------------------------------------------------

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id).expect("stale node id")
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes.get_mut(id).expect("stale node id")
    }

    pub(crate) fn element_ref(&self, id: NodeId) -> &ElementNode {
        match self.node(id) {
            Node::Element(element) => element,
            other => panic!("node {id:?} is not an element (kind {})", other.kind()),
        }
    }

    pub(crate) fn element_mut(&mut self, id: NodeId) -> &mut ElementNode {
        match self.node_mut(id) {
            Node::Element(element) => element,
            other => panic!("node {id:?} is not an element (kind {})", other.kind()),
        }
    }

    pub(crate) fn bin_ref(&self, id: NodeId) -> &BinNode {
        match self.node(id) {
            Node::Bin(bin) => bin,
            other => panic!("node {id:?} is not a bin (kind {})", other.kind()),
        }
    }

    pub(crate) fn bin_mut(&mut self, id: NodeId) -> &mut BinNode {
        match self.node_mut(id) {
            Node::Bin(bin) => bin,
            other => panic!("node {id:?} is not a bin (kind {})", other.kind()),
        }
    }

    pub(crate) fn paned_ref(&self, id: NodeId) -> &PanedNode {
        match self.node(id) {
            Node::Paned(paned) => paned,
            other => panic!("node {id:?} is not a paned (kind {})", other.kind()),
        }
    }

    pub(crate) fn paned_mut(&mut self, id: NodeId) -> &mut PanedNode {
        match self.node_mut(id) {
            Node::Paned(paned) => paned,
            other => panic!("node {id:?} is not a paned (kind {})", other.kind()),
        }
    }

    pub(crate) fn notebook_ref(&self, id: NodeId) -> &NotebookNode {
        match self.node(id) {
            Node::Notebook(notebook) => notebook,
            other => panic!("node {id:?} is not a notebook (kind {})", other.kind()),
        }
    }

    pub(crate) fn notebook_mut(&mut self, id: NodeId) -> &mut NotebookNode {
        match self.node_mut(id) {
            Node::Notebook(notebook) => notebook,
            other => panic!("node {id:?} is not a notebook (kind {})", other.kind()),
        }
    }

    /// Record `parent` as the owner of `child`.
    pub(crate) fn link(&mut self, child: NodeId, parent: NodeId) {
        debug_assert!(
            self.parent(child).is_none(),
            "child already has a parent; detach it first"
        );
        self.parent.insert(child, parent);
    }

    /// Drop the parent link of `child`, leaving it an orphan.
    pub(crate) fn unlink(&mut self, child: NodeId) {
        self.parent.remove(child);
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
