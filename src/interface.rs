//! Interface driver: whole-tree serialization and reconstruction.
//!
//! [`get_interface`] walks the live tree into a symbolic [`Props`] snapshot.
//! [`set_interface`] is the inverse: it resolves the snapshot's symbolic
//! references — node types through a [`ViewFactory`], provider names through
//! a [`ProviderRegistry`] — while rebuilding the subtree, then swaps it in
//! as the root's child. The subtree is built detached and attached only at
//! the end, so a failed restore leaves the existing tree untouched.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::props::Props;
use crate::provider::{ChildBundle, ProviderRegistry};
use crate::tree::{NodeId, PanedSlot, Tree};

/// Creates the live node for each snapshot type tag.
///
/// The typed rendition of a creator map: one hook per kind, with defaults
/// that insert plain nodes. Applications override a hook to pre-configure
/// what a tag constructs — a notebook with its action buttons already
/// mounted, an element with its action button disabled, and so on. The
/// notebook hook in particular must produce as many action buttons as the
/// snapshot records, or restoration fails with [`Error::Mismatch`].
pub trait ViewFactory {
    /// Construct the node for an `element` tag.
    fn create_element(&self, tree: &mut Tree) -> NodeId {
        tree.new_element()
    }

    /// Construct the node for a `bin` tag.
    fn create_bin(&self, tree: &mut Tree) -> NodeId {
        tree.new_bin()
    }

    /// Construct the node for a `paned` tag.
    fn create_paned(&self, tree: &mut Tree) -> NodeId {
        tree.new_paned()
    }

    /// Construct the node for a `notebook` tag.
    fn create_notebook(&self, tree: &mut Tree) -> NodeId {
        tree.new_notebook()
    }
}

/// Factory producing plain, unconfigured nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultViewFactory;

impl ViewFactory for DefaultViewFactory {}

/// Serialize the whole interface below `top_level` into a symbolic snapshot.
pub fn get_interface(tree: &Tree, top_level: NodeId) -> Props {
    tree.props(top_level)
}

/// Rebuild an interface from a snapshot and swap it in under `top_level`.
///
/// Returns the detached previous child of `top_level` (if any) so the caller
/// can dispose of it, typically via [`Tree::remove`].
pub fn set_interface(
    tree: &mut Tree,
    snapshot: &Props,
    top_level: NodeId,
    factory: &dyn ViewFactory,
    providers: &ProviderRegistry,
) -> Result<Option<NodeId>> {
    debug!("restoring interface snapshot under {top_level:?}");
    let mut created = Vec::new();
    let new_child = match restore(tree, snapshot, factory, providers, &mut created) {
        Ok(id) => id,
        Err(err) => {
            // Nodes built so far are orphans; drop them from the arena.
            for id in created {
                tree.remove(id);
            }
            return Err(err);
        }
    };
    let old_child = tree.children(top_level).first().copied();
    let attached = match old_child {
        Some(old) => tree.replace_child(top_level, old, new_child),
        None => tree.add_child(top_level, new_child),
    };
    if let Err(err) = attached {
        tree.remove(new_child);
        return Err(err);
    }
    Ok(old_child)
}

/// Rebuild one snapshot node (and its subtree) as a detached node.
///
/// Every node inserted into the arena is recorded in `created` so the
/// caller can dispose of the partial subtree when restoration fails.
fn restore(
    tree: &mut Tree,
    props: &Props,
    factory: &dyn ViewFactory,
    providers: &ProviderRegistry,
    created: &mut Vec<NodeId>,
) -> Result<NodeId> {
    match props {
        Props::Element { provider, child } => {
            let id = factory.create_element(tree);
            created.push(id);
            if let Some(name) = provider {
                let child_props = child.as_ref().ok_or_else(|| {
                    Error::Provider(format!(
                        "element props name provider {name:?} but carry no child props"
                    ))
                })?;
                let provider = providers
                    .get(name)
                    .ok_or_else(|| Error::UnknownProvider(name.clone()))?;
                trace!("restoring element child {:?} via {name:?}", child_props.child_name);
                let parts = provider.child_from_props(child_props)?;
                tree.set_child(
                    id,
                    ChildBundle::new(child_props.child_name.clone(), provider, parts),
                );
            }
            Ok(id)
        }
        Props::Bin { child } => {
            let id = factory.create_bin(tree);
            created.push(id);
            if let Some(child_props) = child {
                let child = restore(tree, child_props, factory, providers, created)?;
                tree.add_child(id, child)?;
            }
            Ok(id)
        }
        Props::Paned {
            child_1,
            child_2,
            orientation,
            position,
        } => {
            let id = factory.create_paned(tree);
            created.push(id);
            if let Some(child_props) = child_1 {
                let child = restore(tree, child_props, factory, providers, created)?;
                tree.paned_add_child(id, child, Some(PanedSlot::First))?;
            }
            if let Some(child_props) = child_2 {
                let child = restore(tree, child_props, factory, providers, created)?;
                tree.paned_add_child(id, child, Some(PanedSlot::Second))?;
            }
            tree.set_orientation(id, *orientation);
            tree.set_split_position(id, *position);
            Ok(id)
        }
        Props::Notebook {
            tab_position,
            n_action_button,
            elements,
        } => {
            if *n_action_button > 2 {
                return Err(Error::Range {
                    what: "action button count",
                    value: i64::from(*n_action_button),
                });
            }
            let id = factory.create_notebook(tree);
            created.push(id);
            let actual = tree.notebook_action_button_count(id);
            if actual != *n_action_button {
                return Err(Error::Mismatch {
                    expected: *n_action_button,
                    actual,
                });
            }
            tree.set_tab_position(id, *tab_position);
            for element_props in elements {
                let element = restore(tree, element_props, factory, providers, created)?;
                tree.notebook_insert(id, element, None)?;
            }
            Ok(id)
        }
    }
}
