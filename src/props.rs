//! Snapshot property tree: the serialized form of an interface.
//!
//! [`Props`] is a typed, tagged tree rather than an untyped nested mapping:
//! each container variant carries exactly the keys its live counterpart
//! serializes, with absent children encoded as `None` (omitted on the wire;
//! `null` and an empty mapping are accepted as absent on input).
//! Provider-specific leaf content is the only open-ended part and lives in
//! [`ChildProps`], a `child_name` plus a flattened bag of provider fields.
//!
//! The tree derives `serde` so a snapshot can be written to any textual
//! structured-data encoding; the crate itself performs no file I/O.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Split direction of a paned container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Edge on which a notebook mounts its tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TabPosition {
    /// Whether the tab strip is mounted on a side edge (labels rotate 90°).
    pub fn is_side(self) -> bool {
        matches!(self, TabPosition::Left | TabPosition::Right)
    }
}

/// Edge at which an action control is packed (element action buttons and
/// notebook edge controls).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackSide {
    #[default]
    Start,
    End,
}

impl PackSide {
    /// Stable slot index: 0 for start, 1 for end.
    pub fn index(self) -> usize {
        match self {
            PackSide::Start => 0,
            PackSide::End => 1,
        }
    }
}

/// Serialized form of a node and its subtree.
///
/// Tagged with a `type` key so hand-authored snapshots stay readable. The
/// symbolic `provider` reference is resolved against a
/// [`ProviderRegistry`](crate::provider::ProviderRegistry) at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Props {
    /// A leaf element; `provider` and `child` are both present or both absent.
    Element {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        provider: Option<String>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "child_or_empty"
        )]
        child: Option<ChildProps>,
    },
    /// A single-child container.
    Bin {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "node_or_empty"
        )]
        child: Option<Box<Props>>,
    },
    /// A two-slot split container.
    Paned {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "node_or_empty"
        )]
        child_1: Option<Box<Props>>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "node_or_empty"
        )]
        child_2: Option<Box<Props>>,
        orientation: Orientation,
        position: i32,
    },
    /// An ordered sequence of elements with a tab strip.
    Notebook {
        tab_position: TabPosition,
        n_action_button: u8,
        /// Pages in insertion order; the sequence length is the element count.
        elements: Vec<Props>,
    },
}

impl Props {
    /// An empty element snapshot (`provider` and `child` both absent).
    pub fn empty_element() -> Self {
        Props::Element {
            provider: None,
            child: None,
        }
    }

    /// An empty bin snapshot.
    pub fn empty_bin() -> Self {
        Props::Bin { child: None }
    }
}

// Hand-authored snapshots sometimes write an absent part as `null` or an
// empty mapping instead of omitting the key; accept all three as `None`.

fn node_or_empty<'de, D>(deserializer: D) -> Result<Option<Box<Props>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(|props| Some(Box::new(props)))
            .map_err(serde::de::Error::custom),
    }
}

fn child_or_empty<'de, D>(deserializer: D) -> Result<Option<ChildProps>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Provider-specific leaf props: the `child_name` the provider produced the
/// content under, plus whatever fields the provider needs to rebuild it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildProps {
    /// Name of the content variant the provider produced.
    pub child_name: String,
    /// Provider-defined fields, flattened into the same mapping.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ChildProps {
    /// Create props for the given child name with no extra fields.
    pub fn new(child_name: impl Into<String>) -> Self {
        Self {
            child_name: child_name.into(),
            fields: Map::new(),
        }
    }

    /// Add a provider field (builder).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up a provider field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up a provider field expected to be a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_element_wire_shape() {
        let value = serde_json::to_value(Props::empty_element()).unwrap();
        assert_eq!(value, json!({ "type": "element" }));
    }

    #[test]
    fn empty_bin_wire_shape() {
        let value = serde_json::to_value(Props::empty_bin()).unwrap();
        assert_eq!(value, json!({ "type": "bin" }));
    }

    #[test]
    fn populated_element_wire_shape() {
        let props = Props::Element {
            provider: Some("notes".to_owned()),
            child: Some(ChildProps::new("scratchpad").with("child_text", "lorem")),
        };
        let value = serde_json::to_value(&props).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "element",
                "provider": "notes",
                "child": { "child_name": "scratchpad", "child_text": "lorem" }
            })
        );
    }

    #[test]
    fn paned_roundtrips_through_json() {
        let props = Props::Paned {
            child_1: Some(Box::new(Props::empty_element())),
            child_2: None,
            orientation: Orientation::Vertical,
            position: 240,
        };
        let text = serde_json::to_string(&props).unwrap();
        let back: Props = serde_json::from_str(&text).unwrap();
        assert_eq!(back, props);
    }

    #[test]
    fn notebook_roundtrips_through_json() {
        let props = Props::Notebook {
            tab_position: TabPosition::Left,
            n_action_button: 1,
            elements: vec![Props::empty_element(), Props::empty_element()],
        };
        let text = serde_json::to_string(&props).unwrap();
        let back: Props = serde_json::from_str(&text).unwrap();
        assert_eq!(back, props);
    }

    #[test]
    fn hand_authored_snapshot_parses() {
        let props: Props = serde_json::from_value(json!({
            "type": "bin",
            "child": {
                "type": "notebook",
                "tab_position": "bottom",
                "n_action_button": 0,
                "elements": [{ "type": "element" }]
            }
        }))
        .unwrap();
        let Props::Bin { child: Some(inner) } = props else {
            panic!("expected a bin with a child");
        };
        assert!(matches!(*inner, Props::Notebook { ref elements, .. } if elements.len() == 1));
    }

    #[test]
    fn empty_mapping_and_null_parse_as_absent() {
        let props: Props = serde_json::from_value(json!({
            "type": "paned",
            "child_1": {},
            "child_2": null,
            "orientation": "horizontal",
            "position": 0
        }))
        .unwrap();
        assert!(matches!(
            props,
            Props::Paned {
                child_1: None,
                child_2: None,
                ..
            }
        ));

        let props: Props = serde_json::from_value(json!({
            "type": "element",
            "provider": null,
            "child": {}
        }))
        .unwrap();
        assert_eq!(props, Props::empty_element());

        let props: Props = serde_json::from_value(json!({ "type": "bin", "child": {} })).unwrap();
        assert_eq!(props, Props::empty_bin());
    }

    #[test]
    fn tab_position_side_detection() {
        assert!(TabPosition::Left.is_side());
        assert!(TabPosition::Right.is_side());
        assert!(!TabPosition::Top.is_side());
        assert!(!TabPosition::Bottom.is_side());
    }

    #[test]
    fn pack_side_indices() {
        assert_eq!(PackSide::Start.index(), 0);
        assert_eq!(PackSide::End.index(), 1);
    }

    #[test]
    fn child_props_field_access() {
        let props = ChildProps::new("sheet").with("rows", 4).with("title", "Q3");
        assert_eq!(props.get_str("title"), Some("Q3"));
        assert_eq!(props.get("rows"), Some(&json!(4)));
        assert!(props.get("missing").is_none());
    }
}
