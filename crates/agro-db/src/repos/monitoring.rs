//! Medical monitoring repository.

use agro_core::entities::{MedicalMonitoring, NewMedicalMonitoring};
use agro_core::ids::PREFIX_MONITORING;
use async_trait::async_trait;
use chrono::Utc;

use super::{MonitoringRepo, SetClauses, collect_rows, date, require_text, text};
use crate::error::DatabaseError;
use crate::helpers::{parse_date, parse_datetime, parse_enum};
use crate::service::AgroService;
use crate::updates::MonitoringUpdate;

const COLUMNS: &str = "id, owner_id, animal_name, species, consulted_on, diagnosis, \
                       activity_level, created_at, updated_at";

fn row_to_monitoring(row: &libsql::Row) -> Result<MedicalMonitoring, DatabaseError> {
    Ok(MedicalMonitoring {
        id: row.get::<String>(0)?,
        owner_id: row.get::<String>(1)?,
        animal_name: row.get::<String>(2)?,
        species: parse_enum(&row.get::<String>(3)?)?,
        consulted_on: parse_date(&row.get::<String>(4)?)?,
        diagnosis: row.get::<String>(5)?,
        activity_level: row.get::<String>(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

#[async_trait]
impl MonitoringRepo for AgroService {
    async fn create_monitoring(
        &self,
        input: NewMedicalMonitoring,
    ) -> Result<MedicalMonitoring, DatabaseError> {
        input.validate()?;
        let owner_id = self.owner_id()?;
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_MONITORING).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO medical_monitoring ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"),
                libsql::params_from_iter(vec![
                    text(&id),
                    text(owner_id),
                    text(input.animal_name.trim()),
                    text(input.species.as_str()),
                    date(input.consulted_on),
                    text(input.diagnosis.trim()),
                    text(input.activity_level.trim()),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ]),
            )
            .await?;

        Ok(MedicalMonitoring {
            id,
            owner_id: owner_id.to_string(),
            animal_name: input.animal_name.trim().to_string(),
            species: input.species,
            consulted_on: input.consulted_on,
            diagnosis: input.diagnosis.trim().to_string(),
            activity_level: input.activity_level.trim().to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_monitoring(&self, id: &str) -> Result<MedicalMonitoring, DatabaseError> {
        let owner_id = self.owner_id()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM medical_monitoring WHERE id = ?1 AND owner_id = ?2"),
                [id, owner_id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "monitoring",
            id: id.to_string(),
        })?;
        row_to_monitoring(&row)
    }

    async fn list_monitoring(
        &self,
        animal_name: Option<&str>,
        limit: u32,
    ) -> Result<Vec<MedicalMonitoring>, DatabaseError> {
        let owner_id = self.owner_id()?;
        let mut params = vec![text(owner_id)];
        let animal_filter = match animal_name {
            Some(name) => {
                params.push(text(name.trim()));
                "AND animal_name = ?2 COLLATE NOCASE"
            }
            None => "",
        };
        let sql = format!(
            "SELECT {COLUMNS} FROM medical_monitoring WHERE owner_id = ?1 {animal_filter}
             ORDER BY consulted_on DESC, created_at DESC LIMIT {limit}"
        );
        let rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        collect_rows(rows, row_to_monitoring).await
    }

    async fn update_monitoring(
        &self,
        id: &str,
        update: MonitoringUpdate,
    ) -> Result<MedicalMonitoring, DatabaseError> {
        require_text("animal_name", update.animal_name.as_ref())?;
        require_text("diagnosis", update.diagnosis.as_ref())?;
        require_text("activity_level", update.activity_level.as_ref())?;

        let mut clauses = SetClauses::default();
        if let Some(ref animal_name) = update.animal_name {
            clauses.set("animal_name", text(animal_name.trim()));
        }
        if let Some(species) = update.species {
            clauses.set("species", text(species.as_str()));
        }
        if let Some(consulted_on) = update.consulted_on {
            clauses.set("consulted_on", date(consulted_on));
        }
        if let Some(ref diagnosis) = update.diagnosis {
            clauses.set("diagnosis", text(diagnosis.trim()));
        }
        if let Some(ref activity_level) = update.activity_level {
            clauses.set("activity_level", text(activity_level.trim()));
        }

        if clauses.is_empty() {
            return self.get_monitoring(id).await;
        }
        let (sql, params) = clauses.into_update("medical_monitoring", "id", id, self.owner_id()?);
        self.execute_owned(&sql, params, "monitoring", id).await?;
        self.get_monitoring(id).await
    }

    async fn delete_monitoring(&self, id: &str) -> Result<(), DatabaseError> {
        let owner_id = self.owner_id()?;
        self.execute_owned(
            "DELETE FROM medical_monitoring WHERE id = ?1 AND owner_id = ?2",
            vec![text(id), text(owner_id)],
            "monitoring",
            id,
        )
        .await
    }
}
