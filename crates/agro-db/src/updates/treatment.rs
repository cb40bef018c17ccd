//! Treatment update builder.

use agro_core::enums::Species;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TreatmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_on: Option<NaiveDate>,
    /// `Some(None)` reopens a finished treatment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_on: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

#[derive(Default)]
pub struct TreatmentUpdateBuilder(TreatmentUpdate);

impl TreatmentUpdateBuilder {
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
    pub fn treatment(mut self, val: impl Into<String>) -> Self {
        self.0.treatment = Some(val.into());
        self
    }

    #[must_use]
    pub const fn started_on(mut self, val: NaiveDate) -> Self {
        self.0.started_on = Some(val);
        self
    }

    #[must_use]
    pub const fn ended_on(mut self, val: Option<NaiveDate>) -> Self {
        self.0.ended_on = Some(val);
        self
    }

    #[must_use]
    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> TreatmentUpdate {
        self.0
    }
}
