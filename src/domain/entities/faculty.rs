//! Faculty member entity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DefaultOnError, serde_as};

use super::entity_ref::{RawId, pick_id};

/// A member of teaching staff.
///
/// `department` holds the department's display name, not its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FacultyWire")]
pub struct Faculty {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Faculty {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: None,
            designation: None,
            extra: Map::new(),
        }
    }

    pub fn in_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Exact, case-sensitive match on the department name.
    pub fn belongs_to(&self, department_name: &str) -> bool {
        self.department.as_deref() == Some(department_name)
    }
}

#[serde_as]
#[derive(Deserialize)]
struct FacultyWire {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<RawId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    department: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    designation: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<FacultyWire> for Faculty {
    type Error = String;

    fn try_from(wire: FacultyWire) -> Result<Self, Self::Error> {
        let id = pick_id(wire.id, wire.mongo_id)
            .ok_or_else(|| format!("faculty member '{}' has no identifier", wire.name))?;

        Ok(Self {
            id,
            name: wire.name,
            department: wire.department,
            designation: wire.designation,
            extra: wire.extra,
        })
    }
}
