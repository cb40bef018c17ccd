//! Animal update builder.

use agro_core::entities::{Animal, NewAnimal};
use agro_core::enums::Sex;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnimalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_months: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl AnimalUpdate {
    /// `current` with this update applied, as a create input (for validation).
    #[must_use]
    pub fn applied_to(&self, current: &Animal) -> NewAnimal {
        NewAnimal {
            kind: current.kind,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            species: self.species.clone().unwrap_or_else(|| current.species.clone()),
            tag_number: self
                .tag_number
                .clone()
                .unwrap_or_else(|| current.tag_number.clone()),
            age_months: self.age_months.unwrap_or(current.age_months),
            birth_date: self.birth_date.unwrap_or(current.birth_date),
            weight_kg: self.weight_kg.unwrap_or(current.weight_kg),
            sex: self.sex.unwrap_or(current.sex),
            breed: self.breed.clone().unwrap_or_else(|| current.breed.clone()),
            purpose: self.purpose.clone().unwrap_or_else(|| current.purpose.clone()),
            notes: self.notes.clone().unwrap_or_else(|| current.notes.clone()),
        }
    }
}

pub struct AnimalUpdateBuilder(AnimalUpdate);

impl Default for AnimalUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimalUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AnimalUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn species(mut self, val: Option<String>) -> Self {
        self.0.species = Some(val);
        self
    }

    #[must_use]
    pub fn tag_number(mut self, val: impl Into<String>) -> Self {
        self.0.tag_number = Some(val.into());
        self
    }

    #[must_use]
    pub const fn age_months(mut self, val: Option<u32>) -> Self {
        self.0.age_months = Some(val);
        self
    }

    #[must_use]
    pub const fn birth_date(mut self, val: Option<NaiveDate>) -> Self {
        self.0.birth_date = Some(val);
        self
    }

    #[must_use]
    pub const fn weight_kg(mut self, val: Option<f64>) -> Self {
        self.0.weight_kg = Some(val);
        self
    }

    #[must_use]
    pub const fn sex(mut self, val: Sex) -> Self {
        self.0.sex = Some(val);
        self
    }

    #[must_use]
    pub fn breed(mut self, val: Option<String>) -> Self {
        self.0.breed = Some(val);
        self
    }

    #[must_use]
    pub fn purpose(mut self, val: Option<String>) -> Self {
        self.0.purpose = Some(val);
        self
    }

    #[must_use]
    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> AnimalUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_set_fields_are_serialized() {
        let update = AnimalUpdateBuilder::new()
            .name("Lola")
            .breed(None)
            .weight_kg(Some(400.0))
            .build();
        let json = serde_json::to_value(&update).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(json["name"], "Lola");
        assert!(json["breed"].is_null());
        assert_eq!(json["weight_kg"], 400.0);
    }
}
