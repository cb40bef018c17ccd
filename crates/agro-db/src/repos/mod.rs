//! Repository traits, one per entity, and their libSQL implementation on
//! `AgroService`.
//!
//! Every method is scoped to the service's owner: rows of other users are
//! never returned, and updating or deleting them yields `NotFound`.

mod animal;
mod checkup;
mod monitoring;
mod profile;
mod treatment;
mod vaccination;

use agro_core::entities::{
    Animal, MedicalMonitoring, NewAnimal, NewMedicalMonitoring, NewRoutineCheckup, NewTreatment,
    NewVaccination, ProfileFields, RoutineCheckup, Treatment, UserProfile, Vaccination,
};
use agro_core::enums::AnimalKind;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::error::DatabaseError;
use crate::helpers::format_date;
use crate::updates::{
    AnimalUpdate, CheckupUpdate, MonitoringUpdate, ProfileUpdate, TreatmentUpdate,
    VaccinationUpdate,
};

#[async_trait]
pub trait AnimalRepo: Send + Sync {
    async fn create_animal(&self, input: NewAnimal) -> Result<Animal, DatabaseError>;
    async fn get_animal(&self, id: &str) -> Result<Animal, DatabaseError>;
    /// Newest first, optionally restricted to one kind.
    async fn list_animals(
        &self,
        kind: Option<AnimalKind>,
        limit: u32,
    ) -> Result<Vec<Animal>, DatabaseError>;
    async fn update_animal(&self, id: &str, update: AnimalUpdate) -> Result<Animal, DatabaseError>;
    async fn delete_animal(&self, id: &str) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait VaccinationRepo: Send + Sync {
    async fn create_vaccination(&self, input: NewVaccination)
    -> Result<Vaccination, DatabaseError>;
    async fn get_vaccination(&self, id: &str) -> Result<Vaccination, DatabaseError>;
    /// Most recent dose first, optionally for one animal.
    async fn list_vaccinations(
        &self,
        animal_name: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Vaccination>, DatabaseError>;
    async fn update_vaccination(
        &self,
        id: &str,
        update: VaccinationUpdate,
    ) -> Result<Vaccination, DatabaseError>;
    async fn delete_vaccination(&self, id: &str) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait MonitoringRepo: Send + Sync {
    async fn create_monitoring(
        &self,
        input: NewMedicalMonitoring,
    ) -> Result<MedicalMonitoring, DatabaseError>;
    async fn get_monitoring(&self, id: &str) -> Result<MedicalMonitoring, DatabaseError>;
    async fn list_monitoring(
        &self,
        animal_name: Option<&str>,
        limit: u32,
    ) -> Result<Vec<MedicalMonitoring>, DatabaseError>;
    async fn update_monitoring(
        &self,
        id: &str,
        update: MonitoringUpdate,
    ) -> Result<MedicalMonitoring, DatabaseError>;
    async fn delete_monitoring(&self, id: &str) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait TreatmentRepo: Send + Sync {
    async fn create_treatment(&self, input: NewTreatment) -> Result<Treatment, DatabaseError>;
    async fn get_treatment(&self, id: &str) -> Result<Treatment, DatabaseError>;
    async fn list_treatments(
        &self,
        animal_name: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Treatment>, DatabaseError>;
    async fn update_treatment(
        &self,
        id: &str,
        update: TreatmentUpdate,
    ) -> Result<Treatment, DatabaseError>;
    async fn delete_treatment(&self, id: &str) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait CheckupRepo: Send + Sync {
    async fn create_checkup(&self, input: NewRoutineCheckup)
    -> Result<RoutineCheckup, DatabaseError>;
    async fn get_checkup(&self, id: &str) -> Result<RoutineCheckup, DatabaseError>;
    async fn list_checkups(
        &self,
        animal_name: Option<&str>,
        limit: u32,
    ) -> Result<Vec<RoutineCheckup>, DatabaseError>;
    async fn update_checkup(
        &self,
        id: &str,
        update: CheckupUpdate,
    ) -> Result<RoutineCheckup, DatabaseError>;
    async fn delete_checkup(&self, id: &str) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait ProfileRepo: Send + Sync {
    /// The signed-in user's profile, if one was stored.
    async fn get_profile(&self) -> Result<Option<UserProfile>, DatabaseError>;
    async fn upsert_profile(&self, fields: ProfileFields) -> Result<UserProfile, DatabaseError>;
    /// `NotFound` when no profile exists yet.
    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, DatabaseError>;
}

// ---------------------------------------------------------------------------
// Shared SQL plumbing
// ---------------------------------------------------------------------------

/// SET clauses and their positional parameters for a dynamic UPDATE.
#[derive(Default)]
pub(crate) struct SetClauses {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl SetClauses {
    pub(crate) fn set(&mut self, column: &str, value: libsql::Value) {
        self.params.push(value);
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Finish as `UPDATE {table} … WHERE {key} = ? AND owner_id = ?`,
    /// bumping `updated_at`.
    pub(crate) fn into_update(
        self,
        table: &str,
        key: &str,
        id: &str,
        owner_id: &str,
    ) -> (String, Vec<libsql::Value>) {
        self.finish(table, &[(key, id), ("owner_id", owner_id)])
    }

    /// Finish as `UPDATE {table} … WHERE {key} = ?` for tables keyed by the
    /// owner itself.
    pub(crate) fn into_update_by_key(
        self,
        table: &str,
        key: &str,
        id: &str,
    ) -> (String, Vec<libsql::Value>) {
        self.finish(table, &[(key, id)])
    }

    fn finish(mut self, table: &str, filters: &[(&str, &str)]) -> (String, Vec<libsql::Value>) {
        self.set("updated_at", Utc::now().to_rfc3339().into());
        let mut conditions = Vec::with_capacity(filters.len());
        for (column, value) in filters {
            self.params.push((*value).into());
            conditions.push(format!("{column} = ?{}", self.params.len()));
        }
        let sql = format!(
            "UPDATE {table} SET {} WHERE {}",
            self.sets.join(", "),
            conditions.join(" AND ")
        );
        (sql, self.params)
    }
}

pub(crate) fn text(value: &str) -> libsql::Value {
    libsql::Value::Text(value.to_string())
}

pub(crate) fn opt_text(value: Option<&str>) -> libsql::Value {
    crate::helpers::opt_text(value)
}

pub(crate) fn date(value: NaiveDate) -> libsql::Value {
    libsql::Value::Text(format_date(value))
}

pub(crate) fn opt_date(value: Option<NaiveDate>) -> libsql::Value {
    value.map_or(libsql::Value::Null, date)
}

/// `Some("")` or whitespace is rejected for required text fields.
pub(crate) fn require_text(field: &str, value: Option<&String>) -> Result<(), DatabaseError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(DatabaseError::Validation(format!(
            "{field} must not be empty"
        ))),
        _ => Ok(()),
    }
}

/// Read a nullable INTEGER column as `u32`.
pub(crate) fn get_opt_u32(row: &libsql::Row, idx: i32) -> Result<Option<u32>, DatabaseError> {
    row.get::<Option<i64>>(idx)?
        .map(u32::try_from)
        .transpose()
        .map_err(|e| DatabaseError::Query(format!("column {idx} out of range: {e}")))
}

/// Collect every row of a query through `parse`.
pub(crate) async fn collect_rows<T>(
    mut rows: libsql::Rows,
    parse: fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<Vec<T>, DatabaseError> {
    let mut items = Vec::new();
    while let Some(row) = rows.next().await? {
        items.push(parse(&row)?);
    }
    Ok(items)
}
