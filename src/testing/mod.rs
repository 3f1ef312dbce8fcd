//! Reusable test doubles: simple content types and a text provider.
//!
//! [`TextProvider`] mirrors what a minimal real provider looks like: it
//! produces a [`Text`] body, a [`Glyph`] icon, and a [`Text`] header for any
//! child name, serializes them to `child_text`/`header_text` fields, and
//! counts how many bundles it has been asked to tear down so tests can
//! observe the clear-versus-remove distinction.

use std::any::Any;
use std::cell::Cell;

use crate::content::Content;
use crate::error::{Error, Result};
use crate::props::ChildProps;
use crate::provider::{ProvidedChild, Provider};

/// Plain text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Content for Text {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Named icon content, also used as a notebook action control in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub name: String,
}

impl Glyph {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Content for Glyph {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A provider of text children.
pub struct TextProvider {
    name: String,
    clears: Cell<usize>,
}

impl TextProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clears: Cell::new(0),
        }
    }

    /// How many bundles this provider has been asked to tear down.
    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }
}

impl Provider for TextProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_child(&self, child_name: &str) -> Result<ProvidedChild> {
        Ok(ProvidedChild {
            child: Box::new(Text::new(format!("{child_name} content"))),
            icon: Box::new(Glyph::new("document")),
            header_child: Some(Box::new(Text::new(format!("{child_name} header")))),
        })
    }

    fn clear_child(&self, _child_name: &str, parts: ProvidedChild) {
        drop(parts);
        self.clears.set(self.clears.get() + 1);
    }

    fn child_props(
        &self,
        child_name: &str,
        child: &dyn Content,
        header_child: Option<&dyn Content>,
    ) -> ChildProps {
        let mut props = ChildProps::new(child_name);
        if let Some(text) = child.downcast_ref::<Text>() {
            props = props.with("child_text", text.value.clone());
        }
        if let Some(text) = header_child.and_then(|header| header.downcast_ref::<Text>()) {
            props = props.with("header_text", text.value.clone());
        }
        props
    }

    fn child_from_props(&self, props: &ChildProps) -> Result<ProvidedChild> {
        let child_text = props
            .get_str("child_text")
            .ok_or_else(|| Error::Provider("missing child_text field".to_owned()))?;
        let header_child: Option<Box<dyn Content>> = props
            .get_str("header_text")
            .map(|text| Box::new(Text::new(text)) as Box<dyn Content>);
        Ok(ProvidedChild {
            child: Box::new(Text::new(child_text)),
            icon: Box::new(Glyph::new("document")),
            header_child,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_round_trips_its_own_props() {
        let provider = TextProvider::new("notes");
        let parts = provider.create_child("draft").unwrap();
        let props =
            provider.child_props("draft", parts.child.as_ref(), parts.header_child.as_deref());

        let rebuilt = provider.child_from_props(&props).unwrap();
        let body = rebuilt.child.downcast_ref::<Text>().unwrap();
        assert_eq!(body.value, "draft content");
        let header = rebuilt.header_child.unwrap();
        assert_eq!(header.downcast_ref::<Text>().unwrap().value, "draft header");
    }

    #[test]
    fn child_from_props_requires_child_text() {
        let provider = TextProvider::new("notes");
        assert!(matches!(
            provider.child_from_props(&ChildProps::new("draft")),
            Err(Error::Provider(_))
        ));
    }

    #[test]
    fn headerless_props_round_trip() {
        let provider = TextProvider::new("notes");
        let props = ChildProps::new("draft").with("child_text", "body");
        let rebuilt = provider.child_from_props(&props).unwrap();
        assert!(rebuilt.header_child.is_none());
    }

    #[test]
    fn clear_count_tracks_teardowns() {
        let provider = TextProvider::new("notes");
        assert_eq!(provider.clear_count(), 0);
        let parts = provider.create_child("draft").unwrap();
        provider.clear_child("draft", parts);
        assert_eq!(provider.clear_count(), 1);
    }
}
