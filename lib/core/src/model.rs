// Node and relationship resources as served by the graph store REST layer
use crate::url::extract_id;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A property value the viewer knows how to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

/// Property value as decoded from a node's `data` map.
///
/// Lists, nested objects and `null` are not rendered structurally; they keep
/// their compact JSON text and are displayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Scalar(Scalar),
    Unsupported(String),
}

impl PropertyValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => PropertyValue::Scalar(Scalar::Text(s.clone())),
            Value::Number(n) => PropertyValue::Scalar(Scalar::Number(n.clone())),
            Value::Bool(b) => PropertyValue::Scalar(Scalar::Bool(*b)),
            other => PropertyValue::Unsupported(other.to_string()),
        }
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, PropertyValue::Scalar(_))
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Scalar(Scalar::Text(s)) => f.write_str(s),
            PropertyValue::Scalar(Scalar::Number(n)) => write!(f, "{}", n),
            PropertyValue::Scalar(Scalar::Bool(b)) => write!(f, "{}", b),
            PropertyValue::Unsupported(raw) => f.write_str(raw),
        }
    }
}

/// Ordered property map. Iteration order is the decode order of the JSON
/// object, so two renders of the same map always agree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyMap {
    entries: Vec<(String, PropertyValue)>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        Self {
            entries: map
                .iter()
                .map(|(key, value)| (key.clone(), PropertyValue::from_json(value)))
                .collect(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.entries.push((key.into(), value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Deserialize)]
struct NodeBody {
    data: Map<String, Value>,
    all_relationships: String,
}

/// A node resource (`GET <base>/node/<id>`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeResource {
    pub url: String,
    pub id: String,
    pub properties: PropertyMap,
    pub all_relationships: String,
}

impl NodeResource {
    /// Interprets the JSON body fetched from `url`.
    pub fn from_json(url: &str, body: Value) -> Result<Self> {
        let body: NodeBody = serde_json::from_value(body).map_err(|e| Error::MalformedResponse {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            url: url.to_string(),
            id: extract_id(url).to_string(),
            properties: PropertyMap::from_json_map(&body.data),
            all_relationships: body.all_relationships,
        })
    }
}

/// A relationship between two node resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipResource {
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub rel_type: String,
}

impl RelationshipResource {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        rel_type: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            rel_type: rel_type.into(),
        }
    }

    #[inline]
    pub fn start_id(&self) -> &str {
        extract_id(&self.start)
    }

    #[inline]
    pub fn end_id(&self) -> &str {
        extract_id(&self.end)
    }

    /// Interprets the JSON array fetched from a relationships collection URL.
    pub fn list_from_json(url: &str, body: Value) -> Result<Vec<Self>> {
        serde_json::from_value(body).map_err(|e| Error::MalformedResponse {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
