//! Medical monitoring update builder.

use agro_core::enums::Species;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MonitoringUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consulted_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
}

#[derive(Default)]
pub struct MonitoringUpdateBuilder(MonitoringUpdate);

impl MonitoringUpdateBuilder {
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
    pub const fn consulted_on(mut self, val: NaiveDate) -> Self {
        self.0.consulted_on = Some(val);
        self
    }

    #[must_use]
    pub fn diagnosis(mut self, val: impl Into<String>) -> Self {
        self.0.diagnosis = Some(val.into());
        self
    }

    #[must_use]
    pub fn activity_level(mut self, val: impl Into<String>) -> Self {
        self.0.activity_level = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> MonitoringUpdate {
        self.0
    }
}
