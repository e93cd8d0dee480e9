//! Display models for page templates.
//!
//! Templates only see plain strings; formatting and link building happen here.

use crate::domain::entities::{Category, Course, Department, Faculty, FeeStructure};

/// Course tile shown on category, department and related-course lists.
#[derive(Debug, Clone)]
pub struct CourseCard {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub fee: String,
}

impl From<&Course> for CourseCard {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            thumbnail_url: course.thumbnail_url.clone().unwrap_or_default(),
            fee: fee_label(course.fee_structure.as_ref()),
        }
    }
}

/// Category or department entry on a listing page.
#[derive(Debug, Clone)]
pub struct ListingEntry {
    pub key: String,
    pub name: String,
    pub description: String,
}

impl From<&Category> for ListingEntry {
    fn from(category: &Category) -> Self {
        Self {
            key: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }
}

impl From<&Department> for ListingEntry {
    fn from(department: &Department) -> Self {
        Self {
            key: department.name.clone(),
            name: department.name.clone(),
            description: department.description.clone().unwrap_or_default(),
        }
    }
}

/// Faculty member row on a department page.
#[derive(Debug, Clone)]
pub struct FacultyRow {
    pub name: String,
    pub designation: String,
}

impl From<&Faculty> for FacultyRow {
    fn from(member: &Faculty) -> Self {
        Self {
            name: member.name.clone(),
            designation: member.designation.clone().unwrap_or_default(),
        }
    }
}

/// Human-readable fee line, empty when the course has no fee structure.
pub fn fee_label(fees: Option<&FeeStructure>) -> String {
    let Some(fees) = fees else {
        return String::new();
    };

    let parts: Vec<String> = [
        ("Registration", fees.registration_fee),
        ("Full course", fees.full_fee),
    ]
    .into_iter()
    .filter_map(|(label, amount)| amount.map(|a| format!("{}: {}", label, format_amount(a))))
    .collect();

    parts.join(" · ")
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Collects display models from a slice of entities.
pub fn cards<'a, T, V>(items: &'a [T]) -> Vec<V>
where
    V: From<&'a T>,
{
    items.iter().map(V::from).collect()
}
