//! Content trait: the object-safe boundary between the tree and
//! provider-supplied leaf content.
//!
//! The core never inspects content beyond moving it between elements and
//! bundles; providers downcast back to their concrete types when they need
//! the real value. Providers that want a single shared piece of content
//! across several elements implement that sharing inside their content type
//! (for example by holding an `Rc` to common state) — the tree itself only
//! ever moves boxes.

use std::any::Any;

/// A piece of leaf content produced by a provider.
///
/// Object-safe on purpose: elements, bundles, and notebook action buttons
/// all hold `Box<dyn Content>`.
pub trait Content: Any {
    /// Upcast to `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Upcast to `&mut dyn Any` for mutable downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn Content {
    /// Attempt to downcast to a concrete content type.
    pub fn downcast_ref<T: Content>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Attempt to mutably downcast to a concrete content type.
    pub fn downcast_mut<T: Content>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
