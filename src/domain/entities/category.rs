//! Category entity: a grouping of courses (e.g. "Science", "Commerce").

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

use super::entity_ref::{RawId, pick_id};

/// A course category as served by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CategoryWire")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

#[serde_as]
#[derive(Deserialize)]
struct CategoryWire {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<RawId>,
    #[serde(default)]
    name: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<CategoryWire> for Category {
    type Error = String;

    fn try_from(wire: CategoryWire) -> Result<Self, Self::Error> {
        let id = pick_id(wire.id, wire.mongo_id)
            .ok_or_else(|| format!("category '{}' has no identifier", wire.name))?;

        Ok(Self {
            id,
            name: wire.name,
            description: wire.description,
        })
    }
}
