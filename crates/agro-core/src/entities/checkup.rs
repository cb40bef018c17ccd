use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Species;

/// A routine checkup and its results.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoutineCheckup {
    pub id: String,
    pub owner_id: String,
    pub animal_name: String,
    pub species: Species,
    pub checked_on: NaiveDate,
    pub results: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRoutineCheckup {
    pub animal_name: String,
    pub species: Species,
    pub checked_on: NaiveDate,
    pub results: String,
    pub notes: Option<String>,
}
