//! Element operations: populate, clear, remove, serialize.
//!
//! An element is a state machine between **empty** and **populated**.
//! Populating attaches a [`ChildBundle`]; clearing hands the parts back to
//! the provider that produced them; taking hands the full bundle to the
//! caller for reuse elsewhere. Each transition fires the matching
//! [`TreeEvent`] and refreshes the tab label when the element sits inside a
//! notebook.

use std::rc::Rc;

use super::node::NodeId;
use crate::content::Content;
use crate::error::{Error, Result};
use crate::event::{MouseButton, TreeEvent};
use crate::props::{PackSide, Props};
use crate::provider::{ChildBundle, ProvidedChild, Provider};
use crate::tree::Tree;

impl Tree {
    /// Attach a bundle to an element.
    ///
    /// A populated element is cleared first (emitting `ChildCleared`), then
    /// the new parts are attached and `ChildAdded` is emitted. The header is
    /// attached only when the bundle supplies one.
    ///
    /// # Panics
    ///
    /// Panics if `element` is not an element node.
    pub fn set_child(&mut self, element: NodeId, bundle: ChildBundle) {
        if self.element_ref(element).is_populated() {
            self.clear_child(element)
                .expect("populated element clears cleanly");
        }
        let node = self.element_mut(element);
        node.child = Some(bundle.child);
        node.icon = Some(bundle.icon);
        node.header_child = bundle.header_child;
        node.child_name = Some(bundle.child_name);
        node.provider = Some(bundle.provider);
        self.refresh_tab_label(element);
        self.emit(TreeEvent::ChildAdded { element });
    }

    /// Clear an element, handing its parts back to the producing provider.
    ///
    /// Fails with [`Error::EmptyElement`] when nothing is attached.
    pub fn clear_child(&mut self, element: NodeId) -> Result<()> {
        let (child_name, provider, parts) = self.take_child_parts(element)?;
        provider.clear_child(&child_name, parts);
        self.refresh_tab_label(element);
        self.emit(TreeEvent::ChildCleared { element });
        Ok(())
    }

    /// Detach an element's content and return the full bundle to the caller.
    ///
    /// Unlike [`clear_child`](Self::clear_child) this transfers ownership
    /// out for reuse; the provider is not consulted. Fails with
    /// [`Error::EmptyElement`] when nothing is attached.
    pub fn take_child(&mut self, element: NodeId) -> Result<ChildBundle> {
        let (child_name, provider, parts) = self.take_child_parts(element)?;
        self.refresh_tab_label(element);
        self.emit(TreeEvent::ChildRemoved { element });
        Ok(ChildBundle::new(child_name, provider, parts))
    }

    fn take_child_parts(
        &mut self,
        element: NodeId,
    ) -> Result<(String, Rc<dyn Provider>, ProvidedChild)> {
        let node = self.element_mut(element);
        if !node.is_populated() {
            return Err(Error::EmptyElement);
        }
        let child_name = node.child_name.take().expect("populated element has a name");
        let provider = node.provider.take().expect("populated element has a provider");
        let child = node.child.take().expect("populated element has content");
        let icon = node.icon.take().expect("populated element has an icon");
        let header_child = node.header_child.take();
        Ok((
            child_name,
            provider,
            ProvidedChild {
                child,
                icon,
                header_child,
            },
        ))
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// Whether the element currently holds content.
    pub fn is_populated(&self, element: NodeId) -> bool {
        self.element_ref(element).is_populated()
    }

    /// The name of the content the element holds, if populated.
    pub fn child_name(&self, element: NodeId) -> Option<&str> {
        self.element_ref(element).child_name.as_deref()
    }

    /// The provider that produced the element's content, if populated.
    pub fn provider(&self, element: NodeId) -> Option<Rc<dyn Provider>> {
        self.element_ref(element).provider.clone()
    }

    /// Borrow the element's main content.
    pub fn content(&self, element: NodeId) -> Option<&dyn Content> {
        self.element_ref(element).child.as_deref()
    }

    /// Borrow the element's header content.
    pub fn header_child(&self, element: NodeId) -> Option<&dyn Content> {
        self.element_ref(element).header_child.as_deref()
    }

    /// Borrow the icon shown on the element's action button.
    pub fn icon(&self, element: NodeId) -> Option<&dyn Content> {
        self.element_ref(element).icon.as_deref()
    }

    // -----------------------------------------------------------------
    // Action button
    // -----------------------------------------------------------------

    /// Edge at which the element packs its action button.
    pub fn pack_side(&self, element: NodeId) -> PackSide {
        self.element_ref(element).pack_side
    }

    /// Move the element's action button to the given edge.
    pub fn set_pack_side(&mut self, element: NodeId, side: PackSide) {
        self.element_mut(element).pack_side = side;
    }

    /// Whether the element's action button is attached.
    pub fn action_button_enabled(&self, element: NodeId) -> bool {
        self.element_ref(element).action_button_enabled
    }

    /// Attach the element's action button. No-op when already attached.
    pub fn enable_action_button(&mut self, element: NodeId) {
        self.element_mut(element).action_button_enabled = true;
    }

    /// Detach the element's action button. No-op when already detached.
    pub fn disable_action_button(&mut self, element: NodeId) {
        self.element_mut(element).action_button_enabled = false;
    }

    /// Forward a press on the element's action button as an
    /// [`TreeEvent::ActionClicked`] event. Ignored while the button is
    /// detached.
    pub fn click_action_button(&mut self, element: NodeId, button: MouseButton) {
        if !self.element_ref(element).action_button_enabled {
            return;
        }
        self.emit(TreeEvent::ActionClicked {
            source: element,
            button,
        });
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    pub(crate) fn element_props(&self, element: NodeId) -> Props {
        let node = self.element_ref(element);
        match (&node.child_name, &node.provider, &node.child) {
            (Some(child_name), Some(provider), Some(child)) => Props::Element {
                provider: Some(provider.name().to_owned()),
                child: Some(provider.child_props(
                    child_name,
                    child.as_ref(),
                    node.header_child.as_deref(),
                )),
            },
            _ => Props::empty_element(),
        }
    }
}
