//! Vaccination update builder.

use agro_core::enums::Species;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct VaccinationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccinated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

#[derive(Default)]
pub struct VaccinationUpdateBuilder(VaccinationUpdate);

impl VaccinationUpdateBuilder {
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
    pub fn vaccine(mut self, val: impl Into<String>) -> Self {
        self.0.vaccine = Some(val.into());
        self
    }

    #[must_use]
    pub const fn vaccinated_on(mut self, val: NaiveDate) -> Self {
        self.0.vaccinated_on = Some(val);
        self
    }

    #[must_use]
    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> VaccinationUpdate {
        self.0
    }
}
