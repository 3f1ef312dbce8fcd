//! Provider plugin contract and the registry used during restoration.
//!
//! A [`Provider`] produces, tears down, and serializes the leaf content held
//! by elements. Providers are owned by the application and shared into the
//! tree as `Rc<dyn Provider>`; the serialized snapshot refers to them only by
//! name, resolved through a [`ProviderRegistry`] at load time.

use std::collections::HashMap;
use std::rc::Rc;

use crate::content::Content;
use crate::error::Result;
use crate::props::ChildProps;

/// Content produced by a provider for one element: the main child, the icon
/// shown on the element's action button, and an optional header.
pub struct ProvidedChild {
    pub child: Box<dyn Content>,
    pub icon: Box<dyn Content>,
    pub header_child: Option<Box<dyn Content>>,
}

/// Source of element content.
///
/// `create_child` must be deterministic for a given provider state; whether
/// repeated calls share underlying state is the provider's own aliasing
/// policy. The round-trip contract:
/// `child_from_props(child_props(name, child, header))` yields content that
/// carries the same name and is behaviorally equivalent within the
/// provider's domain.
pub trait Provider {
    /// Stable identity used as the provider reference key in snapshots.
    fn name(&self) -> &str;

    /// Produce fresh content for the named child variant.
    fn create_child(&self, child_name: &str) -> Result<ProvidedChild>;

    /// Tear down content this provider produced earlier. Default: drop it.
    fn clear_child(&self, child_name: &str, parts: ProvidedChild) {
        let _ = (child_name, parts);
    }

    /// Project live content to a serializable mapping. Must not mutate the
    /// content.
    fn child_props(
        &self,
        child_name: &str,
        child: &dyn Content,
        header_child: Option<&dyn Content>,
    ) -> ChildProps;

    /// Rebuild content from a mapping previously produced by `child_props`
    /// (or hand-authored).
    fn child_from_props(&self, props: &ChildProps) -> Result<ProvidedChild>;
}

/// Everything an element needs to become populated: provider-produced parts
/// plus the identity under which they were produced.
///
/// Consumed by [`Tree::set_child`](crate::tree::Tree::set_child) and handed
/// back whole by [`Tree::take_child`](crate::tree::Tree::take_child).
pub struct ChildBundle {
    pub child_name: String,
    pub provider: Rc<dyn Provider>,
    pub child: Box<dyn Content>,
    pub icon: Box<dyn Content>,
    pub header_child: Option<Box<dyn Content>>,
}

impl ChildBundle {
    /// Stamp provider identity onto freshly produced parts.
    pub fn new(
        child_name: impl Into<String>,
        provider: Rc<dyn Provider>,
        parts: ProvidedChild,
    ) -> Self {
        Self {
            child_name: child_name.into(),
            provider,
            child: parts.child,
            icon: parts.icon,
            header_child: parts.header_child,
        }
    }

    /// Split back into identity and parts.
    pub fn into_parts(self) -> (String, Rc<dyn Provider>, ProvidedChild) {
        (
            self.child_name,
            self.provider,
            ProvidedChild {
                child: self.child,
                icon: self.icon,
                header_child: self.header_child,
            },
        )
    }
}

/// Name-to-instance map of the application's providers.
///
/// Passed into [`set_interface`](crate::interface::set_interface) so symbolic
/// provider references in a snapshot can be resolved without any ambient
/// global state.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Rc<dyn Provider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own name.
    ///
    /// Returns the previously registered provider with that name, if any.
    pub fn register(&mut self, provider: Rc<dyn Provider>) -> Option<Rc<dyn Provider>> {
        self.providers.insert(provider.name().to_owned(), provider)
    }

    /// Look up a provider by name.
    pub fn get(&self, name: &str) -> Option<Rc<dyn Provider>> {
        self.providers.get(name).cloned()
    }

    /// Whether a provider is registered under the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
