//! Identifier and reference shapes shared by all catalog records.
//!
//! The catalog API is inconsistent about identifiers: records carry `id` or
//! `_id`, as strings or numbers, and a course points at its category and
//! department either with a bare identifier or with an embedded object. Both
//! shapes are captured here and collapsed into a [`RefKey`] before any
//! filtering happens.

use serde::{Deserialize, Serialize};

/// Identifier as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

/// Picks the record identifier, preferring `id` over `_id`.
///
/// Blank identifiers are treated as absent.
pub(crate) fn pick_id(id: Option<RawId>, mongo_id: Option<RawId>) -> Option<String> {
    [id, mongo_id]
        .into_iter()
        .flatten()
        .map(RawId::into_string)
        .find(|s| !s.trim().is_empty())
}

/// A course's pointer at its category or department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "WireRef")]
pub enum EntityRef {
    /// Bare identifier, e.g. `"categoryId": "c1"`.
    Bare(String),
    /// Populated object, e.g. `"categoryId": {"_id": "c1", "name": "Science"}`.
    Embedded {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl EntityRef {
    /// Normalizes either shape into a [`RefKey`].
    pub fn key(&self) -> RefKey {
        match self {
            Self::Bare(id) => RefKey {
                id: Some(id.clone()).filter(|s| !s.trim().is_empty()),
                name: None,
            },
            Self::Embedded { id, name } => RefKey {
                id: id.clone(),
                name: name.clone(),
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireRef {
    Id(RawId),
    Object {
        #[serde(default)]
        id: Option<RawId>,
        #[serde(default, rename = "_id")]
        mongo_id: Option<RawId>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<WireRef> for EntityRef {
    fn from(wire: WireRef) -> Self {
        match wire {
            WireRef::Id(id) => Self::Bare(id.into_string()),
            WireRef::Object { id, mongo_id, name } => Self::Embedded {
                id: pick_id(id, mongo_id),
                name,
            },
        }
    }
}

/// Canonical form of an [`EntityRef`]; absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefKey {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl RefKey {
    /// Normalizes an optional reference; a missing reference yields an empty key.
    pub fn of(reference: Option<&EntityRef>) -> Self {
        reference.map(EntityRef::key).unwrap_or_default()
    }

    /// True when the key carries exactly this identifier.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// True when the key carries exactly this display name.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}
