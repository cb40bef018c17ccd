//! Treatment repository.

use agro_core::entities::{NewTreatment, Treatment};
use agro_core::ids::PREFIX_TREATMENT;
use agro_core::validation::check_treatment_dates;
use async_trait::async_trait;
use chrono::Utc;

use super::{
    SetClauses, TreatmentRepo, collect_rows, date, opt_date, opt_text, require_text, text,
};
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_date, parse_datetime, parse_enum, parse_optional_date};
use crate::service::AgroService;
use crate::updates::TreatmentUpdate;

const COLUMNS: &str = "id, owner_id, animal_name, species, treatment, started_on, ended_on, \
                       notes, created_at, updated_at";

fn row_to_treatment(row: &libsql::Row) -> Result<Treatment, DatabaseError> {
    Ok(Treatment {
        id: row.get::<String>(0)?,
        owner_id: row.get::<String>(1)?,
        animal_name: row.get::<String>(2)?,
        species: parse_enum(&row.get::<String>(3)?)?,
        treatment: row.get::<String>(4)?,
        started_on: parse_date(&row.get::<String>(5)?)?,
        ended_on: parse_optional_date(get_opt_string(row, 6)?.as_deref())?,
        notes: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

#[async_trait]
impl TreatmentRepo for AgroService {
    async fn create_treatment(&self, input: NewTreatment) -> Result<Treatment, DatabaseError> {
        input.validate()?;
        let owner_id = self.owner_id()?;
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TREATMENT).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO treatments ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"),
                libsql::params_from_iter(vec![
                    text(&id),
                    text(owner_id),
                    text(input.animal_name.trim()),
                    text(input.species.as_str()),
                    text(input.treatment.trim()),
                    date(input.started_on),
                    opt_date(input.ended_on),
                    opt_text(input.notes.as_deref()),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ]),
            )
            .await?;

        Ok(Treatment {
            id,
            owner_id: owner_id.to_string(),
            animal_name: input.animal_name.trim().to_string(),
            species: input.species,
            treatment: input.treatment.trim().to_string(),
            started_on: input.started_on,
            ended_on: input.ended_on,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_treatment(&self, id: &str) -> Result<Treatment, DatabaseError> {
        let owner_id = self.owner_id()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM treatments WHERE id = ?1 AND owner_id = ?2"),
                [id, owner_id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "treatment",
            id: id.to_string(),
        })?;
        row_to_treatment(&row)
    }

    async fn list_treatments(
        &self,
        animal_name: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Treatment>, DatabaseError> {
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
            "SELECT {COLUMNS} FROM treatments WHERE owner_id = ?1 {animal_filter}
             ORDER BY started_on DESC, created_at DESC LIMIT {limit}"
        );
        let rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        collect_rows(rows, row_to_treatment).await
    }

    async fn update_treatment(
        &self,
        id: &str,
        update: TreatmentUpdate,
    ) -> Result<Treatment, DatabaseError> {
        require_text("animal_name", update.animal_name.as_ref())?;
        require_text("treatment", update.treatment.as_ref())?;
        let current = self.get_treatment(id).await?;
        check_treatment_dates(
            update.started_on.unwrap_or(current.started_on),
            update.ended_on.unwrap_or(current.ended_on),
        )?;

        let mut clauses = SetClauses::default();
        if let Some(ref animal_name) = update.animal_name {
            clauses.set("animal_name", text(animal_name.trim()));
        }
        if let Some(species) = update.species {
            clauses.set("species", text(species.as_str()));
        }
        if let Some(ref treatment) = update.treatment {
            clauses.set("treatment", text(treatment.trim()));
        }
        if let Some(started_on) = update.started_on {
            clauses.set("started_on", date(started_on));
        }
        if let Some(ended_on) = update.ended_on {
            clauses.set("ended_on", opt_date(ended_on));
        }
        if let Some(ref notes) = update.notes {
            clauses.set("notes", opt_text(notes.as_deref()));
        }

        if clauses.is_empty() {
            return Ok(current);
        }
        let (sql, params) = clauses.into_update("treatments", "id", id, self.owner_id()?);
        self.execute_owned(&sql, params, "treatment", id).await?;
        self.get_treatment(id).await
    }

    async fn delete_treatment(&self, id: &str) -> Result<(), DatabaseError> {
        let owner_id = self.owner_id()?;
        self.execute_owned(
            "DELETE FROM treatments WHERE id = ?1 AND owner_id = ?2",
            vec![text(id), text(owner_id)],
            "treatment",
            id,
        )
        .await
    }
}
