//! Input checks applied before a record reaches the store.
//!
//! Each `New*` input gets a `validate()` returning `CoreError::Validation`
//! with a message naming the offending field.

use chrono::{Datelike, NaiveDate};

use crate::entities::{
    NewAnimal, NewMedicalMonitoring, NewRoutineCheckup, NewTreatment, NewVaccination,
    ProfileFields,
};
use crate::enums::AnimalKind;
use crate::errors::CoreError;

/// Upper bound on an animal's age: 30 years.
pub const MAX_AGE_MONTHS: u32 = 360;

/// Whole calendar months from `birth` to `today`, clamped at zero.
///
/// Only year and month are compared; the day of month is ignored.
#[must_use]
pub fn months_since(birth: NaiveDate, today: NaiveDate) -> u32 {
    let months = (today.year() - birth.year()) * 12 + today.month0() as i32 - birth.month0() as i32;
    u32::try_from(months).unwrap_or(0)
}

fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

impl NewAnimal {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        require("tag_number", &self.tag_number)?;
        if let Some(age) = self.age_months
            && age > MAX_AGE_MONTHS
        {
            return Err(CoreError::Validation(format!(
                "age_months must be at most {MAX_AGE_MONTHS}, got {age}"
            )));
        }
        if let Some(weight) = self.weight_kg
            && (!weight.is_finite() || weight <= 0.0)
        {
            return Err(CoreError::Validation(format!(
                "weight_kg must be positive, got {weight}"
            )));
        }
        if self.kind == AnimalKind::Other
            && self.species.as_deref().is_none_or(|s| s.trim().is_empty())
        {
            return Err(CoreError::Validation(
                "species is required for other animals".to_string(),
            ));
        }
        Ok(())
    }

    /// Fill `age_months` from `birth_date` when only the latter was given.
    #[must_use]
    pub fn with_derived_age(mut self, today: NaiveDate) -> Self {
        if self.age_months.is_none()
            && let Some(birth) = self.birth_date
        {
            self.age_months = Some(months_since(birth, today));
        }
        self
    }
}

impl NewVaccination {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("animal_name", &self.animal_name)?;
        require("vaccine", &self.vaccine)
    }
}

impl NewMedicalMonitoring {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("animal_name", &self.animal_name)?;
        require("diagnosis", &self.diagnosis)?;
        require("activity_level", &self.activity_level)
    }
}

impl NewTreatment {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("animal_name", &self.animal_name)?;
        require("treatment", &self.treatment)?;
        check_treatment_dates(self.started_on, self.ended_on)
    }
}

/// `ended_on`, when set, must not precede `started_on`.
pub fn check_treatment_dates(
    started_on: NaiveDate,
    ended_on: Option<NaiveDate>,
) -> Result<(), CoreError> {
    if let Some(end) = ended_on
        && end < started_on
    {
        return Err(CoreError::Validation(format!(
            "ended_on ({end}) is before started_on ({started_on})"
        )));
    }
    Ok(())
}

impl NewRoutineCheckup {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("animal_name", &self.animal_name)?;
        require("results", &self.results)
    }
}

impl ProfileFields {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("first_name", &self.first_name)?;
        require("last_name", &self.last_name)?;
        require("email", &self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Sex, Species};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn months_since_counts_calendar_months() {
        assert_eq!(months_since(date(2023, 3, 28), date(2024, 5, 1)), 14);
        assert_eq!(months_since(date(2024, 5, 31), date(2024, 5, 1)), 0);
        assert_eq!(months_since(date(2024, 12, 1), date(2025, 1, 1)), 1);
    }

    #[test]
    fn months_since_clamps_future_births() {
        assert_eq!(months_since(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn animal_requires_name_and_tag() {
        let animal = NewAnimal::new(AnimalKind::Cow, "  ", "T-1", Sex::Female);
        let err = animal.validate().unwrap_err();
        assert!(err.to_string().contains("name"));

        let animal = NewAnimal::new(AnimalKind::Cow, "Lola", "", Sex::Female);
        assert!(animal.validate().unwrap_err().to_string().contains("tag_number"));
    }

    #[test]
    fn animal_age_and_weight_ranges() {
        let mut animal = NewAnimal::new(AnimalKind::Pig, "Pinta", "P-7", Sex::Male);
        animal.age_months = Some(361);
        assert!(animal.validate().is_err());

        animal.age_months = Some(360);
        animal.weight_kg = Some(0.0);
        assert!(animal.validate().is_err());

        animal.weight_kg = Some(82.5);
        assert!(animal.validate().is_ok());
    }

    #[test]
    fn other_animals_need_species() {
        let mut animal = NewAnimal::new(AnimalKind::Other, "Copito", "O-1", Sex::Male);
        assert!(animal.validate().is_err());
        animal.species = Some("sheep".into());
        assert!(animal.validate().is_ok());
    }

    #[test]
    fn derived_age_does_not_override_explicit_age() {
        let mut animal = NewAnimal::new(AnimalKind::Goat, "Blanca", "G-2", Sex::Female);
        animal.birth_date = Some(date(2024, 1, 15));
        let derived = animal.clone().with_derived_age(date(2024, 7, 1));
        assert_eq!(derived.age_months, Some(6));

        animal.age_months = Some(12);
        let kept = animal.with_derived_age(date(2024, 7, 1));
        assert_eq!(kept.age_months, Some(12));
    }

    #[test]
    fn treatment_end_before_start_is_rejected() {
        let treatment = NewTreatment {
            animal_name: "Lola".into(),
            species: Species::Cattle,
            treatment: "Oxytetracycline".into(),
            started_on: date(2024, 3, 10),
            ended_on: Some(date(2024, 3, 9)),
            notes: None,
        };
        assert!(treatment.validate().is_err());
        assert!(check_treatment_dates(date(2024, 3, 10), Some(date(2024, 3, 10))).is_ok());
        assert!(check_treatment_dates(date(2024, 3, 10), None).is_ok());
    }

    #[test]
    fn vaccination_requires_vaccine() {
        let vaccination = NewVaccination {
            animal_name: "Lola".into(),
            species: Species::Cattle,
            vaccine: String::new(),
            vaccinated_on: date(2024, 3, 10),
            notes: None,
        };
        assert!(vaccination.validate().is_err());
    }
}
