//! Routine checkup update builder.

use agro_core::enums::Species;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

#[derive(Default)]
pub struct CheckupUpdateBuilder(CheckupUpdate);

impl CheckupUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn animal_name(mut self, val: impl Into<String>) -> Self {
        self.0.animal_name = Some(val.into());
        self
    }

    #[must_use]
    pub const fn species(mut self, val: Species) -> Self {
        self.0.species = Some(val);
        self
    }

    #[must_use]
    pub const fn checked_on(mut self, val: NaiveDate) -> Self {
        self.0.checked_on = Some(val);
        self
    }

    #[must_use]
    pub fn results(mut self, val: impl Into<String>) -> Self {
        self.0.results = Some(val.into());
        self
    }

    #[must_use]
    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> CheckupUpdate {
        self.0
    }
}
