//! Structural helpers: reparenting, splitting, and collapsing live subtrees.
//!
//! These operations move existing nodes around while preserving the
//! single-owner invariant: a child is detached from its old parent before it
//! is attached anywhere else, and every constraint of the target container is
//! checked before the first mutation, so a returned error leaves the tree
//! untouched.

use std::rc::Rc;

use log::debug;

use crate::error::{Error, Result};
use crate::provider::{ChildBundle, Provider};
use crate::tree::{Kind, NodeId, PanedSlot, Tree};

/// Add `child` to `view`, swapping `view` into the place `child` occupied.
///
/// When `child` has a parent, that parent's slot is handed to `view` and the
/// now-orphaned `child` is added to `view`. A fall-back operation: the target
/// view's own policy still applies, so this may fail with
/// [`Error::Capacity`] or [`Error::TypeKind`] depending on `view`.
pub fn add_to_view(tree: &mut Tree, child: NodeId, view: NodeId) -> Result<()> {
    ensure_can_add(tree, view, child)?;
    if let Some(parent) = tree.parent(child) {
        debug!("reparenting {parent:?} slot from {child:?} to {view:?}");
        tree.replace_child(parent, child, view)?;
    }
    tree.add_child(view, child)
}

/// Insert `element` into `notebook` at `index` (append when `None`),
/// swapping `notebook` into the place `element` occupied.
///
/// Fails with [`Error::TypeKind`] unless `element` is an element.
pub fn add_to_notebook(
    tree: &mut Tree,
    element: NodeId,
    notebook: NodeId,
    index: Option<usize>,
) -> Result<()> {
    let kind = tree.kind(element);
    if kind != Kind::Element {
        return Err(Error::TypeKind {
            target: Kind::Notebook,
            child: kind,
        });
    }
    if let Some(parent) = tree.parent(element) {
        debug!("reparenting {parent:?} slot from {element:?} to {notebook:?}");
        tree.replace_child(parent, element, notebook)?;
    }
    tree.notebook_insert(notebook, element, index)
}

/// Split `child_1`'s place with a paned holding `child_1` and `child_2`.
///
/// `child_1` goes to `slot`, `child_2` to the complement slot. When
/// `child_1` has a parent, the paned takes over its place first. `child_2`
/// must be an orphan, and both target slots of `paned` must be free.
pub fn add_to_paned(
    tree: &mut Tree,
    child_1: NodeId,
    child_2: NodeId,
    paned: NodeId,
    slot: PanedSlot,
) -> Result<()> {
    debug_assert!(
        tree.parent(child_2).is_none(),
        "second paned child must be an orphan"
    );
    let (first, second) = tree.paned_children(paned);
    if first.is_some() || second.is_some() {
        return Err(Error::Capacity { view: Kind::Paned });
    }
    if let Some(parent) = tree.parent(child_1) {
        debug!("splitting {parent:?} slot: {child_1:?} moves under {paned:?}");
        tree.replace_child(parent, child_1, paned)?;
    }
    tree.paned_add_child(paned, child_1, Some(slot))?;
    tree.paned_add_child(paned, child_2, Some(slot.complement()))
}

/// Remove `element` from `view`, collapsing `view` when it becomes
/// redundant.
///
/// A bin keeps the element and only clears its content. For other views the
/// element is removed; if exactly one sibling remains, `view` is replaced in
/// its own parent by that sibling and the emptied `view` is returned as an
/// orphan for the caller to dispose of (for example via
/// [`Tree::remove`]).
pub fn remove_element(tree: &mut Tree, element: NodeId, view: NodeId) -> Result<Option<NodeId>> {
    if tree.kind(view) == Kind::Bin {
        tree.clear_child(element)?;
        return Ok(None);
    }
    tree.remove_child(view, element)?;
    let remaining = tree.children(view);
    if remaining.len() == 1 {
        if let Some(parent) = tree.parent(view) {
            let survivor = remaining[0];
            debug!("collapsing {view:?}: promoting {survivor:?} into {parent:?}");
            tree.remove_child(view, survivor)?;
            tree.replace_child(parent, view, survivor)?;
            return Ok(Some(view));
        }
    }
    Ok(None)
}

/// Replace `old` with `new` in `view`.
///
/// Fails with [`Error::TypeKind`] when `view` is not a container, and
/// propagates the container's own replacement errors.
pub fn replace_child(tree: &mut Tree, view: NodeId, old: NodeId, new: NodeId) -> Result<()> {
    tree.replace_child(view, old, new)
}

/// Swap the content of `element` for the named child of `provider`.
///
/// The previous content, if any, is cleared through its own provider before
/// the new bundle is attached.
pub fn change_child_at_element(
    tree: &mut Tree,
    element: NodeId,
    provider: Rc<dyn Provider>,
    child_name: &str,
) -> Result<()> {
    let parts = provider.create_child(child_name)?;
    tree.set_child(element, ChildBundle::new(child_name, provider, parts));
    Ok(())
}

/// Check `view`'s add policy against `child` without mutating anything.
fn ensure_can_add(tree: &Tree, view: NodeId, child: NodeId) -> Result<()> {
    match tree.kind(view) {
        Kind::Bin if tree.bin_child(view).is_some() => Err(Error::Capacity { view: Kind::Bin }),
        Kind::Paned => {
            let (first, second) = tree.paned_children(view);
            if first.is_some() && second.is_some() {
                Err(Error::Capacity { view: Kind::Paned })
            } else {
                Ok(())
            }
        }
        Kind::Notebook if tree.kind(child) != Kind::Element => Err(Error::TypeKind {
            target: Kind::Notebook,
            child: tree.kind(child),
        }),
        Kind::Element => Err(Error::TypeKind {
            target: Kind::Element,
            child: tree.kind(child),
        }),
        _ => Ok(()),
    }
}
