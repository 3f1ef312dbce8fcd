//! Paned: a two-slot split container with orientation and split offset.
//!
//! Slots are addressed with [`PanedSlot`], so an out-of-range slot is
//! unrepresentable. An explicit add to an occupied slot is a capacity
//! error, never an overwrite.

use super::node::{Kind, NodeId, PanedSlot};
use crate::error::{Error, Result};
use crate::props::{Orientation, Props};
use crate::tree::Tree;

impl Tree {
    /// Add a child to a paned.
    ///
    /// With `Some(slot)` the child goes to that slot, failing with
    /// [`Error::Capacity`] when the slot is taken. With `None` the first
    /// free slot is used (slot one before slot two), failing when both are
    /// taken.
    ///
    /// # Panics
    ///
    /// Panics if `paned` is not a paned node; panics (debug) if `child`
    /// already has a parent.
    pub fn paned_add_child(
        &mut self,
        paned: NodeId,
        child: NodeId,
        slot: Option<PanedSlot>,
    ) -> Result<()> {
        let node = self.paned_ref(paned);
        let slot = match slot {
            Some(slot) => {
                if node.slot(slot).is_some() {
                    return Err(Error::Capacity { view: Kind::Paned });
                }
                slot
            }
            None => {
                if node.child_1.is_none() {
                    PanedSlot::First
                } else if node.child_2.is_none() {
                    PanedSlot::Second
                } else {
                    return Err(Error::Capacity { view: Kind::Paned });
                }
            }
        };
        self.link(child, paned);
        *self.paned_mut(paned).slot_mut(slot) = Some(child);
        Ok(())
    }

    /// The children of both slots, in slot order.
    pub fn paned_children(&self, paned: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let node = self.paned_ref(paned);
        (node.child_1, node.child_2)
    }

    /// The slot a child occupies, if it is in this paned.
    pub fn paned_slot_of(&self, paned: NodeId, child: NodeId) -> Option<PanedSlot> {
        let node = self.paned_ref(paned);
        if node.child_1 == Some(child) {
            Some(PanedSlot::First)
        } else if node.child_2 == Some(child) {
            Some(PanedSlot::Second)
        } else {
            None
        }
    }

    /// The paned's split direction.
    pub fn orientation(&self, paned: NodeId) -> Orientation {
        self.paned_ref(paned).orientation
    }

    /// Set the paned's split direction.
    pub fn set_orientation(&mut self, paned: NodeId, orientation: Orientation) {
        self.paned_mut(paned).orientation = orientation;
    }

    /// The paned's split offset.
    pub fn split_position(&self, paned: NodeId) -> i32 {
        self.paned_ref(paned).position
    }

    /// Set the paned's split offset.
    pub fn set_split_position(&mut self, paned: NodeId, position: i32) {
        self.paned_mut(paned).position = position;
    }

    pub(crate) fn paned_remove(&mut self, paned: NodeId, child: NodeId) -> Result<()> {
        let slot = self
            .paned_slot_of(paned, child)
            .ok_or(Error::NotFound { view: Kind::Paned })?;
        *self.paned_mut(paned).slot_mut(slot) = None;
        self.unlink(child);
        Ok(())
    }

    pub(crate) fn paned_replace(&mut self, paned: NodeId, old: NodeId, new: NodeId) -> Result<()> {
        let slot = self
            .paned_slot_of(paned, old)
            .ok_or(Error::NotFound { view: Kind::Paned })?;
        *self.paned_mut(paned).slot_mut(slot) = None;
        self.unlink(old);
        self.link(new, paned);
        *self.paned_mut(paned).slot_mut(slot) = Some(new);
        Ok(())
    }

    pub(crate) fn paned_props(&self, paned: NodeId) -> Props {
        let node = self.paned_ref(paned);
        Props::Paned {
            child_1: node.child_1.map(|child| Box::new(self.props(child))),
            child_2: node.child_2.map(|child| Box::new(self.props(child))),
            orientation: node.orientation,
            position: node.position,
        }
    }
}
