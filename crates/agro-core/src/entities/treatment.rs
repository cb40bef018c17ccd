use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Species;

/// A course of treatment. `ended_on` is `None` while ongoing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Treatment {
    pub id: String,
    pub owner_id: String,
    pub animal_name: String,
    pub species: Species,
    pub treatment: String,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Treatment {
    /// Whether the treatment is still running on `today`.
    #[must_use]
    pub fn is_ongoing(&self, today: NaiveDate) -> bool {
        self.started_on <= today && self.ended_on.is_none_or(|end| end >= today)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTreatment {
    pub animal_name: String,
    pub species: Species,
    pub treatment: String,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub notes: Option<String>,
}
