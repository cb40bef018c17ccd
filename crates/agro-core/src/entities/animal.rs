use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AnimalKind, Sex};

/// An animal profile owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Animal {
    pub id: String,
    pub owner_id: String,
    pub kind: AnimalKind,
    pub name: String,
    /// Free-text species; required for `AnimalKind::Other` (e.g. "sheep", "hen").
    pub species: Option<String>,
    pub tag_number: String,
    pub age_months: Option<u32>,
    pub birth_date: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub sex: Sex,
    pub breed: Option<String>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for registering an animal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewAnimal {
    pub kind: AnimalKind,
    pub name: String,
    pub species: Option<String>,
    pub tag_number: String,
    pub age_months: Option<u32>,
    pub birth_date: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub sex: Sex,
    pub breed: Option<String>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
}

impl NewAnimal {
    /// Minimal input; optional fields start empty.
    #[must_use]
    pub fn new(kind: AnimalKind, name: impl Into<String>, tag_number: impl Into<String>, sex: Sex) -> Self {
        Self {
            kind,
            name: name.into(),
            species: None,
            tag_number: tag_number.into(),
            age_months: None,
            birth_date: None,
            weight_kg: None,
            sex,
            breed: None,
            purpose: None,
            notes: None,
        }
    }
}
