//! Notebook: an ordered sequence of elements with a tab strip and up to two
//! edge-mounted action controls.
//!
//! Tab label text tracks each element's `child_name` live; the tree refreshes
//! the label on the element's added/cleared/removed transitions. Labels on a
//! side-mounted tab strip are rotated 90° at creation time.

use super::node::{Kind, NodeId, Page, TabLabel};
use crate::content::Content;
use crate::error::{Error, Result};
use crate::event::{MouseButton, TreeEvent};
use crate::props::{PackSide, Props, TabPosition};
use crate::tree::Tree;

/// Label text used for pages whose element is empty.
pub const NO_CHILD_LABEL: &str = "No child";

impl Tree {
    /// Insert an element into a notebook.
    ///
    /// `index` of `None` appends; an out-of-bounds index clamps to the end.
    /// Fails with [`Error::TypeKind`] unless the child is an element.
    ///
    /// # Panics
    ///
    /// Panics if `notebook` is not a notebook node; panics (debug) if
    /// `element` already has a parent.
    pub fn notebook_insert(
        &mut self,
        notebook: NodeId,
        element: NodeId,
        index: Option<usize>,
    ) -> Result<()> {
        let child_kind = self.kind(element);
        if child_kind != Kind::Element {
            return Err(Error::TypeKind {
                target: Kind::Notebook,
                child: child_kind,
            });
        }
        let label = self.make_tab(notebook, element);
        self.link(element, notebook);
        let node = self.notebook_mut(notebook);
        let at = index.unwrap_or(node.pages.len()).min(node.pages.len());
        node.pages.insert(at, Page { element, label });
        Ok(())
    }

    /// Build a tab label for an element as this notebook would display it.
    ///
    /// Text comes from the element's `child_name` (or [`NO_CHILD_LABEL`]);
    /// the angle is 90 when the tab strip sits on a side edge.
    pub fn make_tab(&self, notebook: NodeId, element: NodeId) -> TabLabel {
        let angle = if self.notebook_ref(notebook).tab_position.is_side() {
            90
        } else {
            0
        };
        let text = self
            .element_ref(element)
            .child_name
            .clone()
            .unwrap_or_else(|| NO_CHILD_LABEL.to_owned());
        TabLabel { text, angle }
    }

    /// The tab label currently shown for an element of this notebook.
    pub fn tab_label(&self, notebook: NodeId, element: NodeId) -> Option<&TabLabel> {
        self.notebook_ref(notebook)
            .pages
            .iter()
            .find(|page| page.element == element)
            .map(|page| &page.label)
    }

    /// Recompute the tab label text for one element.
    ///
    /// Called by the tree itself whenever an element's content changes; a
    /// no-op when the element is not a notebook page.
    pub fn refresh_tab_label(&mut self, element: NodeId) {
        let Some(notebook) = self.parent(element) else {
            return;
        };
        if self.node(notebook).kind() != Kind::Notebook {
            return;
        }
        let text = self
            .element_ref(element)
            .child_name
            .clone()
            .unwrap_or_else(|| NO_CHILD_LABEL.to_owned());
        if let Some(page) = self
            .notebook_mut(notebook)
            .pages
            .iter_mut()
            .find(|page| page.element == element)
        {
            page.label.text = text;
        }
    }

    /// The edge on which the notebook mounts its tab strip.
    pub fn tab_position(&self, notebook: NodeId) -> TabPosition {
        self.notebook_ref(notebook).tab_position
    }

    /// Move the tab strip to another edge. Existing labels keep their angle.
    pub fn set_tab_position(&mut self, notebook: NodeId, position: TabPosition) {
        self.notebook_mut(notebook).tab_position = position;
    }

    // -----------------------------------------------------------------
    // Action buttons
    // -----------------------------------------------------------------

    /// Mount an action control on one edge, returning the displaced control
    /// if that edge was already populated.
    pub fn notebook_set_action_button(
        &mut self,
        notebook: NodeId,
        side: PackSide,
        control: Box<dyn Content>,
    ) -> Option<Box<dyn Content>> {
        self.notebook_mut(notebook).action_buttons[side.index()].replace(control)
    }

    /// Unmount and return the action control on one edge.
    pub fn notebook_take_action_button(
        &mut self,
        notebook: NodeId,
        side: PackSide,
    ) -> Option<Box<dyn Content>> {
        self.notebook_mut(notebook).action_buttons[side.index()].take()
    }

    /// Borrow the action control on one edge.
    pub fn notebook_action_button(&self, notebook: NodeId, side: PackSide) -> Option<&dyn Content> {
        self.notebook_ref(notebook).action_buttons[side.index()].as_deref()
    }

    /// How many edges currently carry an action control (0, 1, or 2).
    pub fn notebook_action_button_count(&self, notebook: NodeId) -> u8 {
        self.notebook_ref(notebook)
            .action_buttons
            .iter()
            .filter(|slot| slot.is_some())
            .count() as u8
    }

    /// Forward a press on one of the notebook's action controls as an
    /// [`TreeEvent::ActionClicked`] event. Ignored when that edge holds no
    /// control.
    pub fn click_notebook_action(&mut self, notebook: NodeId, side: PackSide, button: MouseButton) {
        if self.notebook_ref(notebook).action_buttons[side.index()].is_none() {
            return;
        }
        self.emit(TreeEvent::ActionClicked {
            source: notebook,
            button,
        });
    }

    // -----------------------------------------------------------------
    // Container contract internals
    // -----------------------------------------------------------------

    pub(crate) fn notebook_remove(&mut self, notebook: NodeId, element: NodeId) -> Result<()> {
        let node = self.notebook_mut(notebook);
        let Some(index) = node.pages.iter().position(|page| page.element == element) else {
            return Err(Error::NotFound {
                view: Kind::Notebook,
            });
        };
        node.pages.remove(index);
        self.unlink(element);
        Ok(())
    }

    pub(crate) fn notebook_replace(
        &mut self,
        notebook: NodeId,
        old: NodeId,
        new: NodeId,
    ) -> Result<()> {
        let new_kind = self.kind(new);
        if new_kind != Kind::Element {
            return Err(Error::TypeKind {
                target: Kind::Notebook,
                child: new_kind,
            });
        }
        let Some(index) = self
            .notebook_ref(notebook)
            .pages
            .iter()
            .position(|page| page.element == old)
        else {
            return Err(Error::NotFound {
                view: Kind::Notebook,
            });
        };
        self.notebook_remove(notebook, old)?;
        self.notebook_insert(notebook, new, Some(index))
    }

    pub(crate) fn notebook_props(&self, notebook: NodeId) -> Props {
        let node = self.notebook_ref(notebook);
        Props::Notebook {
            tab_position: node.tab_position,
            n_action_button: self.notebook_action_button_count(notebook),
            elements: node
                .pages
                .iter()
                .map(|page| self.props(page.element))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::provider::{ChildBundle, Provider};
    use crate::testing::{Glyph, TextProvider};

    fn populated_element(tree: &mut Tree, provider: &Rc<TextProvider>, name: &str) -> NodeId {
        let parts = provider.create_child(name).unwrap();
        tree.new_element_with(ChildBundle::new(
            name,
            Rc::clone(provider) as Rc<dyn Provider>,
            parts,
        ))
    }

    #[test]
    fn insert_appends_in_order() {
        let mut tree = Tree::new();
        let notebook = tree.new_notebook();
        let a = tree.new_element();
        let b = tree.new_element();
        tree.add_child(notebook, a).unwrap();
        tree.add_child(notebook, b).unwrap();
        assert_eq!(tree.children(notebook), vec![a, b]);
        assert_eq!(tree.parent(a), Some(notebook));
    }

    #[test]
    fn insert_at_index() {
        let mut tree = Tree::new();
        let notebook = tree.new_notebook();
        let a = tree.new_element();
        let b = tree.new_element();
        let c = tree.new_element();
        tree.add_child(notebook, a).unwrap();
        tree.add_child(notebook, b).unwrap();
        tree.notebook_insert(notebook, c, Some(1)).unwrap();
        assert_eq!(tree.children(notebook), vec![a, c, b]);
    }

    #[test]
    fn non_element_child_is_a_kind_error() {
        let mut tree = Tree::new();
        let notebook = tree.new_notebook();
        let bin = tree.new_bin();
        let err = tree.add_child(notebook, bin).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeKind {
                target: Kind::Notebook,
                child: Kind::Bin
            }
        ));
        assert_eq!(tree.parent(bin), None);
    }

    #[test]
    fn tab_label_tracks_child_name() {
        let mut tree = Tree::new();
        let provider = Rc::new(TextProvider::new("notes"));
        let notebook = tree.new_notebook();
        let element = tree.new_element();
        tree.add_child(notebook, element).unwrap();
        assert_eq!(tree.tab_label(notebook, element).unwrap().text, NO_CHILD_LABEL);

        let parts = provider.create_child("draft").unwrap();
        tree.set_child(
            element,
            ChildBundle::new("draft", Rc::clone(&provider) as Rc<dyn Provider>, parts),
        );
        assert_eq!(tree.tab_label(notebook, element).unwrap().text, "draft");

        tree.clear_child(element).unwrap();
        assert_eq!(tree.tab_label(notebook, element).unwrap().text, NO_CHILD_LABEL);
    }

    #[test]
    fn side_tab_strip_rotates_labels() {
        let mut tree = Tree::new();
        let notebook = tree.new_notebook();
        tree.set_tab_position(notebook, TabPosition::Left);
        let element = tree.new_element();
        tree.add_child(notebook, element).unwrap();
        assert_eq!(tree.tab_label(notebook, element).unwrap().angle, 90);

        let flat = tree.new_notebook();
        let other = tree.new_element();
        tree.add_child(flat, other).unwrap();
        assert_eq!(tree.tab_label(flat, other).unwrap().angle, 0);
    }

    #[test]
    fn remove_missing_element_is_not_found() {
        let mut tree = Tree::new();
        let notebook = tree.new_notebook();
        let stranger = tree.new_element();
        let err = tree.remove_child(notebook, stranger).unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                view: Kind::Notebook
            }
        ));
    }

    #[test]
    fn replace_preserves_page_index() {
        let mut tree = Tree::new();
        let notebook = tree.new_notebook();
        let a = tree.new_element();
        let b = tree.new_element();
        let c = tree.new_element();
        let replacement = tree.new_element();
        tree.add_child(notebook, a).unwrap();
        tree.add_child(notebook, b).unwrap();
        tree.add_child(notebook, c).unwrap();
        tree.replace_child(notebook, b, replacement).unwrap();
        assert_eq!(tree.children(notebook), vec![a, replacement, c]);
        assert_eq!(tree.parent(b), None);
    }

    #[test]
    fn replace_with_non_element_is_a_kind_error() {
        let mut tree = Tree::new();
        let notebook = tree.new_notebook();
        let element = tree.new_element();
        let paned = tree.new_paned();
        tree.add_child(notebook, element).unwrap();
        let err = tree.replace_child(notebook, element, paned).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeKind {
                target: Kind::Notebook,
                child: Kind::Paned
            }
        ));
        assert_eq!(tree.children(notebook), vec![element]);
    }

    #[test]
    fn action_button_count() {
        let mut tree = Tree::new();
        let notebook = tree.new_notebook();
        assert_eq!(tree.notebook_action_button_count(notebook), 0);
        tree.notebook_set_action_button(notebook, PackSide::Start, Box::new(Glyph::new("plus")));
        assert_eq!(tree.notebook_action_button_count(notebook), 1);
        tree.notebook_set_action_button(notebook, PackSide::End, Box::new(Glyph::new("menu")));
        assert_eq!(tree.notebook_action_button_count(notebook), 2);
        tree.notebook_take_action_button(notebook, PackSide::Start);
        assert_eq!(tree.notebook_action_button_count(notebook), 1);
    }

    #[test]
    fn set_action_button_displaces_previous() {
        let mut tree = Tree::new();
        let notebook = tree.new_notebook();
        tree.notebook_set_action_button(notebook, PackSide::Start, Box::new(Glyph::new("plus")));
        let displaced = tree
            .notebook_set_action_button(notebook, PackSide::Start, Box::new(Glyph::new("minus")))
            .unwrap();
        assert_eq!(displaced.downcast_ref::<Glyph>().unwrap().name, "plus");
        let current = tree
            .notebook_action_button(notebook, PackSide::Start)
            .unwrap();
        assert_eq!(current.downcast_ref::<Glyph>().unwrap().name, "minus");
    }

    #[test]
    fn action_click_requires_a_mounted_control() {
        let mut tree = Tree::new();
        let notebook = tree.new_notebook();
        let clicks = Rc::new(std::cell::Cell::new(0u32));
        let sink = Rc::clone(&clicks);
        tree.subscribe(move |event| {
            if matches!(event, TreeEvent::ActionClicked { .. }) {
                sink.set(sink.get() + 1);
            }
        });

        tree.click_notebook_action(notebook, PackSide::Start, MouseButton::Left);
        assert_eq!(clicks.get(), 0);

        tree.notebook_set_action_button(notebook, PackSide::Start, Box::new(Glyph::new("plus")));
        tree.click_notebook_action(notebook, PackSide::Start, MouseButton::Left);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn props_list_elements_in_insertion_order() {
        let mut tree = Tree::new();
        let provider = Rc::new(TextProvider::new("notes"));
        let notebook = tree.new_notebook();
        let first = populated_element(&mut tree, &provider, "alpha");
        let second = populated_element(&mut tree, &provider, "beta");
        tree.add_child(notebook, first).unwrap();
        tree.add_child(notebook, second).unwrap();
        tree.notebook_set_action_button(notebook, PackSide::End, Box::new(Glyph::new("menu")));

        let props = tree.props(notebook);
        let Props::Notebook {
            tab_position,
            n_action_button,
            elements,
        } = props
        else {
            panic!("expected notebook props");
        };
        assert_eq!(tab_position, TabPosition::Top);
        assert_eq!(n_action_button, 1);
        assert_eq!(elements.len(), 2);
        let names: Vec<_> = elements
            .iter()
            .map(|element| match element {
                Props::Element {
                    child: Some(child), ..
                } => child.child_name.as_str(),
                _ => panic!("expected populated element props"),
            })
            .collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn empty_notebook_props_wire_shape() {
        let mut tree = Tree::new();
        let notebook = tree.new_notebook();
        let value = serde_json::to_value(tree.props(notebook)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "notebook",
                "tab_position": "top",
                "n_action_button": 0,
                "elements": []
            })
        );
    }
}
