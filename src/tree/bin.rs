//! Bin: a container holding zero or one child of any kind.

use super::node::{Kind, NodeId};
use crate::error::{Error, Result};
use crate::props::Props;
use crate::tree::Tree;

impl Tree {
    /// The bin's current child, if any.
    ///
    /// # Panics
    ///
    /// Panics if `bin` is not a bin node.
    pub fn bin_child(&self, bin: NodeId) -> Option<NodeId> {
        self.bin_ref(bin).child
    }

    pub(crate) fn bin_add(&mut self, bin: NodeId, child: NodeId) -> Result<()> {
        if self.bin_ref(bin).child.is_some() {
            return Err(Error::Capacity { view: Kind::Bin });
        }
        self.link(child, bin);
        self.bin_mut(bin).child = Some(child);
        Ok(())
    }

    pub(crate) fn bin_remove(&mut self, bin: NodeId, child: NodeId) -> Result<()> {
        if self.bin_ref(bin).child != Some(child) {
            return Err(Error::NotFound { view: Kind::Bin });
        }
        self.bin_mut(bin).child = None;
        self.unlink(child);
        Ok(())
    }

    pub(crate) fn bin_replace(&mut self, bin: NodeId, old: NodeId, new: NodeId) -> Result<()> {
        self.bin_remove(bin, old)?;
        self.bin_add(bin, new)
    }

    pub(crate) fn bin_props(&self, bin: NodeId) -> Props {
        Props::Bin {
            child: self.bin_ref(bin).child.map(|child| Box::new(self.props(child))),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn add_and_query_child() {
        let mut tree = Tree::new();
        let bin = tree.new_bin();
        let element = tree.new_element();
        tree.add_child(bin, element).unwrap();
        assert_eq!(tree.bin_child(bin), Some(element));
        assert_eq!(tree.parent(element), Some(bin));
    }

    #[test]
    fn second_child_hits_capacity() {
        let mut tree = Tree::new();
        let bin = tree.new_bin();
        let first = tree.new_element();
        let second = tree.new_element();
        tree.add_child(bin, first).unwrap();
        let err = tree.add_child(bin, second).unwrap_err();
        assert!(matches!(err, Error::Capacity { view: Kind::Bin }));
        // The rejected child stays an orphan.
        assert_eq!(tree.parent(second), None);
    }

    #[test]
    fn remove_foreign_child_is_not_found() {
        let mut tree = Tree::new();
        let bin = tree.new_bin();
        let inside = tree.new_element();
        let outside = tree.new_element();
        tree.add_child(bin, inside).unwrap();
        let err = tree.remove_child(bin, outside).unwrap_err();
        assert!(matches!(err, Error::NotFound { view: Kind::Bin }));
        assert_eq!(tree.bin_child(bin), Some(inside));
    }

    #[test]
    fn remove_child_leaves_orphan() {
        let mut tree = Tree::new();
        let bin = tree.new_bin();
        let element = tree.new_element();
        tree.add_child(bin, element).unwrap();
        tree.remove_child(bin, element).unwrap();
        assert_eq!(tree.bin_child(bin), None);
        assert_eq!(tree.parent(element), None);
    }

    #[test]
    fn replace_child_swaps_in_place() {
        let mut tree = Tree::new();
        let bin = tree.new_bin();
        let old = tree.new_element();
        let new = tree.new_paned();
        tree.add_child(bin, old).unwrap();
        tree.replace_child(bin, old, new).unwrap();
        assert_eq!(tree.bin_child(bin), Some(new));
        assert_eq!(tree.parent(old), None);
        assert_eq!(tree.parent(new), Some(bin));
    }

    #[test]
    fn replace_missing_child_propagates_not_found() {
        let mut tree = Tree::new();
        let bin = tree.new_bin();
        let stranger = tree.new_element();
        let new = tree.new_element();
        let err = tree.replace_child(bin, stranger, new).unwrap_err();
        assert!(matches!(err, Error::NotFound { view: Kind::Bin }));
    }

    #[test]
    fn empty_bin_props() {
        let mut tree = Tree::new();
        let bin = tree.new_bin();
        let value = serde_json::to_value(tree.props(bin)).unwrap();
        assert_eq!(value, json!({ "type": "bin" }));
    }

    #[test]
    fn bin_props_nest_child_props() {
        let mut tree = Tree::new();
        let bin = tree.new_bin();
        let element = tree.new_element();
        tree.add_child(bin, element).unwrap();
        let value = serde_json::to_value(tree.props(bin)).unwrap();
        assert_eq!(
            value,
            json!({ "type": "bin", "child": { "type": "element" } })
        );
    }
}
