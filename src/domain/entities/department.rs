//! Department entity and the two shapes of the department-by-name response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnError, serde_as};

use super::course::Course;
use super::entity_ref::{RawId, pick_id};
use super::faculty::Faculty;
use super::records::decode_records;

/// An academic department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DepartmentWire")]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Department {
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
struct DepartmentWire {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<RawId>,
    name: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<DepartmentWire> for Department {
    type Error = String;

    fn try_from(wire: DepartmentWire) -> Result<Self, Self::Error> {
        let id = pick_id(wire.id, wire.mongo_id)
            .ok_or_else(|| format!("department '{}' has no identifier", wire.name))?;

        Ok(Self {
            id,
            name: wire.name,
            description: wire.description,
        })
    }
}

/// Department pre-joined with its courses and faculty by the catalog API.
///
/// Malformed course and faculty records are skipped; only the department
/// itself must decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "DepartmentBundleWire")]
pub struct DepartmentBundle {
    pub department: Department,
    pub courses: Vec<Course>,
    pub faculty: Vec<Faculty>,
}

#[serde_as]
#[derive(Deserialize)]
struct DepartmentBundleWire {
    department: Department,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    courses: Vec<Value>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    faculty: Vec<Value>,
}

impl From<DepartmentBundleWire> for DepartmentBundle {
    fn from(wire: DepartmentBundleWire) -> Self {
        Self {
            department: wire.department,
            courses: decode_records("department courses", wire.courses),
            faculty: decode_records("department faculty", wire.faculty),
        }
    }
}

/// Response of the department-by-name endpoint.
///
/// Newer backends answer with the composite envelope
/// `{"success": true, "data": {"department", "courses", "faculty"}}`; older
/// ones return the department record alone, bare or under `data`.
#[derive(Debug, Clone, PartialEq)]
pub enum DepartmentResponse {
    Composite(DepartmentBundle),
    Legacy(Department),
}

impl DepartmentResponse {
    /// Classifies a raw response body.
    ///
    /// Returns `None` when the body matches neither shape.
    pub fn from_value(body: Value) -> Option<Self> {
        let success = body.get("success").and_then(Value::as_bool) == Some(true);

        if success
            && let Some(data) = body.get("data")
            && data.get("department").is_some()
            && let Ok(bundle) = serde_json::from_value::<DepartmentBundle>(data.clone())
        {
            return Some(Self::Composite(bundle));
        }

        let record = match body.get("data") {
            Some(data) if data.is_object() => data.clone(),
            _ => body,
        };

        serde_json::from_value::<Department>(record)
            .ok()
            .map(Self::Legacy)
    }
}
