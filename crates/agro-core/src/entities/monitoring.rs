use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Species;

/// A veterinary consultation: diagnosis and observed activity level.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MedicalMonitoring {
    pub id: String,
    pub owner_id: String,
    pub animal_name: String,
    pub species: Species,
    pub consulted_on: NaiveDate,
    pub diagnosis: String,
    pub activity_level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewMedicalMonitoring {
    pub animal_name: String,
    pub species: Species,
    pub consulted_on: NaiveDate,
    pub diagnosis: String,
    pub activity_level: String,
}
