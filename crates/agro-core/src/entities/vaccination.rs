use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Species;

/// A vaccine dose given to an animal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Vaccination {
    pub id: String,
    pub owner_id: String,
    pub animal_name: String,
    pub species: Species,
    pub vaccine: String,
    pub vaccinated_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewVaccination {
    pub animal_name: String,
    pub species: Species,
    pub vaccine: String,
    pub vaccinated_on: NaiveDate,
    pub notes: Option<String>,
}
