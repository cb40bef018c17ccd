//! Vaccination repository.

use agro_core::entities::{NewVaccination, Vaccination};
use agro_core::ids::PREFIX_VACCINATION;
use async_trait::async_trait;
use chrono::Utc;

use super::{
    SetClauses, VaccinationRepo, collect_rows, date, opt_text, require_text, text,
};
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_date, parse_datetime, parse_enum};
use crate::service::AgroService;
use crate::updates::VaccinationUpdate;

const COLUMNS: &str =
    "id, owner_id, animal_name, species, vaccine, vaccinated_on, notes, created_at, updated_at";

fn row_to_vaccination(row: &libsql::Row) -> Result<Vaccination, DatabaseError> {
    Ok(Vaccination {
        id: row.get::<String>(0)?,
        owner_id: row.get::<String>(1)?,
        animal_name: row.get::<String>(2)?,
        species: parse_enum(&row.get::<String>(3)?)?,
        vaccine: row.get::<String>(4)?,
        vaccinated_on: parse_date(&row.get::<String>(5)?)?,
        notes: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

#[async_trait]
impl VaccinationRepo for AgroService {
    async fn create_vaccination(
        &self,
        input: NewVaccination,
    ) -> Result<Vaccination, DatabaseError> {
        input.validate()?;
        let owner_id = self.owner_id()?;
        if !agro_core::catalog::is_recommended(input.species, &input.vaccine) {
            tracing::debug!(species = %input.species, vaccine = %input.vaccine, "vaccine not in catalog");
        }
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_VACCINATION).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO vaccinations ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"),
                libsql::params_from_iter(vec![
                    text(&id),
                    text(owner_id),
                    text(input.animal_name.trim()),
                    text(input.species.as_str()),
                    text(input.vaccine.trim()),
                    date(input.vaccinated_on),
                    opt_text(input.notes.as_deref()),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ]),
            )
            .await?;

        Ok(Vaccination {
            id,
            owner_id: owner_id.to_string(),
            animal_name: input.animal_name.trim().to_string(),
            species: input.species,
            vaccine: input.vaccine.trim().to_string(),
            vaccinated_on: input.vaccinated_on,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_vaccination(&self, id: &str) -> Result<Vaccination, DatabaseError> {
        let owner_id = self.owner_id()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM vaccinations WHERE id = ?1 AND owner_id = ?2"),
                [id, owner_id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "vaccination",
            id: id.to_string(),
        })?;
        row_to_vaccination(&row)
    }

    async fn list_vaccinations(
        &self,
        animal_name: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Vaccination>, DatabaseError> {
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
            "SELECT {COLUMNS} FROM vaccinations WHERE owner_id = ?1 {animal_filter}
             ORDER BY vaccinated_on DESC, created_at DESC LIMIT {limit}"
        );
        let rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        collect_rows(rows, row_to_vaccination).await
    }

    async fn update_vaccination(
        &self,
        id: &str,
        update: VaccinationUpdate,
    ) -> Result<Vaccination, DatabaseError> {
        require_text("animal_name", update.animal_name.as_ref())?;
        require_text("vaccine", update.vaccine.as_ref())?;

        let mut clauses = SetClauses::default();
        if let Some(ref animal_name) = update.animal_name {
            clauses.set("animal_name", text(animal_name.trim()));
        }
        if let Some(species) = update.species {
            clauses.set("species", text(species.as_str()));
        }
        if let Some(ref vaccine) = update.vaccine {
            clauses.set("vaccine", text(vaccine.trim()));
        }
        if let Some(vaccinated_on) = update.vaccinated_on {
            clauses.set("vaccinated_on", date(vaccinated_on));
        }
        if let Some(ref notes) = update.notes {
            clauses.set("notes", opt_text(notes.as_deref()));
        }

        if clauses.is_empty() {
            return self.get_vaccination(id).await;
        }
        let (sql, params) = clauses.into_update("vaccinations", "id", id, self.owner_id()?);
        self.execute_owned(&sql, params, "vaccination", id).await?;
        self.get_vaccination(id).await
    }

    async fn delete_vaccination(&self, id: &str) -> Result<(), DatabaseError> {
        let owner_id = self.owner_id()?;
        self.execute_owned(
            "DELETE FROM vaccinations WHERE id = ?1 AND owner_id = ?2",
            vec![text(id), text(owner_id)],
            "vaccination",
            id,
        )
        .await
    }
}
