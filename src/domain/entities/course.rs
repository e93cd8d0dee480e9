//! Course entity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};

use super::entity_ref::{EntityRef, RawId, RefKey, pick_id};

/// Registration and full fee of a course.
///
/// Amounts arrive as numbers or numeric strings; anything else reads as absent.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeStructure {
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    pub registration_fee: Option<f64>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    pub full_fee: Option<f64>,
}

/// A course offered by the institution.
///
/// Fields the portal does not interpret are kept in `extra` and passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CourseWire")]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category: Option<EntityRef>,
    #[serde(rename = "departmentId", skip_serializing_if = "Option::is_none")]
    pub department: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_structure: Option<FeeStructure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            department: None,
            fee_structure: None,
            thumbnail_url: None,
            description: None,
            duration: None,
            extra: Map::new(),
        }
    }

    pub fn with_category(mut self, category: EntityRef) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_department(mut self, department: EntityRef) -> Self {
        self.department = Some(department);
        self
    }

    /// Normalized category reference.
    pub fn category_key(&self) -> RefKey {
        RefKey::of(self.category.as_ref())
    }

    /// Normalized department reference.
    pub fn department_key(&self) -> RefKey {
        RefKey::of(self.department.as_ref())
    }
}

/// Only the identifier and the references decide whether a course is kept;
/// display fields of an unexpected type are dropped.
#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CourseWire {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<RawId>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    category_id: Option<EntityRef>,
    #[serde(default)]
    department_id: Option<EntityRef>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    fee_structure: Option<FeeStructure>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    thumbnail_url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    duration: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Text of a string or number; other shapes read as absent.
fn display_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl TryFrom<CourseWire> for Course {
    type Error = String;

    fn try_from(wire: CourseWire) -> Result<Self, Self::Error> {
        let name = display_text(wire.name).unwrap_or_default();
        let id = pick_id(wire.id, wire.mongo_id)
            .ok_or_else(|| format!("course '{}' has no identifier", name))?;

        Ok(Self {
            id,
            name,
            category: wire.category_id,
            department: wire.department_id,
            fee_structure: wire.fee_structure,
            thumbnail_url: wire.thumbnail_url,
            description: wire.description,
            duration: display_text(wire.duration),
            extra: wire.extra,
        })
    }
}
