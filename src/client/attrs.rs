use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::proto::client::attribute;
use crate::proto::client::Attribute;

/// Operation outcome taxonomy.
///
/// Every GET/PUT/PARTIAL-GET/DELETE resolves to exactly one of these.
/// Outcomes are returned, never thrown, so callers can branch on expected
/// conditions like [`Status::NotFound`]. Transport and protocol faults are
/// surfaced separately as [`crate::client::ClientApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Operation accepted; for reads the attribute mapping is populated
    Success,
    /// Key absent from the space (an expected outcome, not a fault)
    NotFound,
    /// The named space does not exist on the store
    UnknownSpace,
    /// The store reported an internal failure for this operation
    ServerError,
}

/// A scalar attribute value: string or signed integer.
///
/// Mirrors the wire `oneof`; the client never invents values, so there is
/// no default-padding variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Str(String),
    Int(i64),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Str(s) => Some(s),
            AttributeValue::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Str(_) => None,
            AttributeValue::Int(i) => Some(*i),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Str(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            AttributeValue::Str(s) => write!(f, "{s}"),
            AttributeValue::Int(i) => write!(f, "{i}"),
        }
    }
}

/// Mapping from attribute name to scalar value for one record.
///
/// Keys are unique; iteration order is name order and carries no meaning.
/// A PUT with a partial attribute set merges into the stored record, so a
/// mapping read back may contain attributes this client never wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AttributeValue> {
        self.0.iter()
    }

    /// Relaxed equality between two attribute mappings.
    ///
    /// Two mappings are sloppy-equal when every key present in BOTH maps to
    /// the same value; keys present on only one side never block equality.
    /// This tolerates stores that pad unset attributes with type defaults
    /// without asserting any specific padding policy.
    pub fn sloppy_eq(
        &self,
        other: &Attributes,
    ) -> bool {
        for (name, value) in &self.0 {
            if let Some(theirs) = other.0.get(name) {
                if theirs != value {
                    return false;
                }
            }
        }
        true
    }

    /// Decode a wire attribute list, dropping attributes with no value set
    pub(crate) fn from_proto(attributes: Vec<Attribute>) -> Self {
        let mut mapping = BTreeMap::new();
        for attr in attributes {
            let value = match attr.value {
                Some(attribute::Value::Str(s)) => AttributeValue::Str(s),
                Some(attribute::Value::Int(i)) => AttributeValue::Int(i),
                None => continue,
            };
            mapping.insert(attr.name, value);
        }
        Self(mapping)
    }

    /// Encode into the wire attribute list
    pub(crate) fn to_proto(&self) -> Vec<Attribute> {
        self.0
            .iter()
            .map(|(name, value)| match value {
                AttributeValue::Str(s) => Attribute::str(name.clone(), s.clone()),
                AttributeValue::Int(i) => Attribute::int(name.clone(), *i),
            })
            .collect()
    }
}

impl<N, V> FromIterator<(N, V)> for Attributes
where
    N: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Attributes {
    type Item = (String, AttributeValue);
    type IntoIter = btree_map::IntoIter<String, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
