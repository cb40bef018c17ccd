//! Routine checkup repository.

use agro_core::entities::{NewRoutineCheckup, RoutineCheckup};
use agro_core::ids::PREFIX_CHECKUP;
use async_trait::async_trait;
use chrono::Utc;

use super::{CheckupRepo, SetClauses, collect_rows, date, opt_text, require_text, text};
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_date, parse_datetime, parse_enum};
use crate::service::AgroService;
use crate::updates::CheckupUpdate;

const COLUMNS: &str =
    "id, owner_id, animal_name, species, checked_on, results, notes, created_at, updated_at";

fn row_to_checkup(row: &libsql::Row) -> Result<RoutineCheckup, DatabaseError> {
    Ok(RoutineCheckup {
        id: row.get::<String>(0)?,
        owner_id: row.get::<String>(1)?,
        animal_name: row.get::<String>(2)?,
        species: parse_enum(&row.get::<String>(3)?)?,
        checked_on: parse_date(&row.get::<String>(4)?)?,
        results: row.get::<String>(5)?,
        notes: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

#[async_trait]
impl CheckupRepo for AgroService {
    async fn create_checkup(
        &self,
        input: NewRoutineCheckup,
    ) -> Result<RoutineCheckup, DatabaseError> {
        input.validate()?;
        let owner_id = self.owner_id()?;
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_CHECKUP).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO routine_checkups ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"),
                libsql::params_from_iter(vec![
                    text(&id),
                    text(owner_id),
                    text(input.animal_name.trim()),
                    text(input.species.as_str()),
                    date(input.checked_on),
                    text(input.results.trim()),
                    opt_text(input.notes.as_deref()),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ]),
            )
            .await?;

        Ok(RoutineCheckup {
            id,
            owner_id: owner_id.to_string(),
            animal_name: input.animal_name.trim().to_string(),
            species: input.species,
            checked_on: input.checked_on,
            results: input.results.trim().to_string(),
            notes: input.notes,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_checkup(&self, id: &str) -> Result<RoutineCheckup, DatabaseError> {
        let owner_id = self.owner_id()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM routine_checkups WHERE id = ?1 AND owner_id = ?2"),
                [id, owner_id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "checkup",
            id: id.to_string(),
        })?;
        row_to_checkup(&row)
    }

    async fn list_checkups(
        &self,
        animal_name: Option<&str>,
        limit: u32,
    ) -> Result<Vec<RoutineCheckup>, DatabaseError> {
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
            "SELECT {COLUMNS} FROM routine_checkups WHERE owner_id = ?1 {animal_filter}
             ORDER BY checked_on DESC, created_at DESC LIMIT {limit}"
        );
        let rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        collect_rows(rows, row_to_checkup).await
    }

    async fn update_checkup(
        &self,
        id: &str,
        update: CheckupUpdate,
    ) -> Result<RoutineCheckup, DatabaseError> {
        require_text("animal_name", update.animal_name.as_ref())?;
        require_text("results", update.results.as_ref())?;

        let mut clauses = SetClauses::default();
        if let Some(ref animal_name) = update.animal_name {
            clauses.set("animal_name", text(animal_name.trim()));
        }
        if let Some(species) = update.species {
            clauses.set("species", text(species.as_str()));
        }
        if let Some(checked_on) = update.checked_on {
            clauses.set("checked_on", date(checked_on));
        }
        if let Some(ref results) = update.results {
            clauses.set("results", text(results.trim()));
        }
        if let Some(ref notes) = update.notes {
            clauses.set("notes", opt_text(notes.as_deref()));
        }

        if clauses.is_empty() {
            return self.get_checkup(id).await;
        }
        let (sql, params) = clauses.into_update("routine_checkups", "id", id, self.owner_id()?);
        self.execute_owned(&sql, params, "checkup", id).await?;
        self.get_checkup(id).await
    }

    async fn delete_checkup(&self, id: &str) -> Result<(), DatabaseError> {
        let owner_id = self.owner_id()?;
        self.execute_owned(
            "DELETE FROM routine_checkups WHERE id = ?1 AND owner_id = ?2",
            vec![text(id), text(owner_id)],
            "checkup",
            id,
        )
        .await
    }
}
