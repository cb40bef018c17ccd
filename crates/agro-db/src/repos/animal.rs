//! Animal repository.

use agro_core::entities::{Animal, NewAnimal};
use agro_core::enums::AnimalKind;
use agro_core::ids::PREFIX_ANIMAL;
use agro_core::validation::months_since;
use async_trait::async_trait;
use chrono::Utc;

use super::{AnimalRepo, SetClauses, collect_rows, get_opt_u32, opt_date, opt_text, text};
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_date};
use crate::service::AgroService;
use crate::updates::AnimalUpdate;

const COLUMNS: &str = "id, owner_id, kind, name, species, tag_number, age_months, birth_date, \
                       weight_kg, sex, breed, purpose, notes, created_at, updated_at";

fn row_to_animal(row: &libsql::Row) -> Result<Animal, DatabaseError> {
    Ok(Animal {
        id: row.get::<String>(0)?,
        owner_id: row.get::<String>(1)?,
        kind: parse_enum(&row.get::<String>(2)?)?,
        name: row.get::<String>(3)?,
        species: get_opt_string(row, 4)?,
        tag_number: row.get::<String>(5)?,
        age_months: get_opt_u32(row, 6)?,
        birth_date: parse_optional_date(get_opt_string(row, 7)?.as_deref())?,
        weight_kg: row.get::<Option<f64>>(8)?,
        sex: parse_enum(&row.get::<String>(9)?)?,
        breed: get_opt_string(row, 10)?,
        purpose: get_opt_string(row, 11)?,
        notes: get_opt_string(row, 12)?,
        created_at: parse_datetime(&row.get::<String>(13)?)?,
        updated_at: parse_datetime(&row.get::<String>(14)?)?,
    })
}

fn opt_real(value: Option<f64>) -> libsql::Value {
    value.map_or(libsql::Value::Null, libsql::Value::Real)
}

fn opt_int(value: Option<u32>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |v| libsql::Value::Integer(i64::from(v)))
}

#[async_trait]
impl AnimalRepo for AgroService {
    async fn create_animal(&self, input: NewAnimal) -> Result<Animal, DatabaseError> {
        let now = Utc::now();
        let input = input.with_derived_age(now.date_naive());
        input.validate()?;
        let owner_id = self.owner_id()?;
        let id = self.db().generate_id(PREFIX_ANIMAL).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO animals ({COLUMNS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)"
                ),
                libsql::params_from_iter(vec![
                    text(&id),
                    text(owner_id),
                    text(input.kind.as_str()),
                    text(input.name.trim()),
                    opt_text(input.species.as_deref().map(str::trim)),
                    text(input.tag_number.trim()),
                    opt_int(input.age_months),
                    opt_date(input.birth_date),
                    opt_real(input.weight_kg),
                    text(input.sex.as_str()),
                    opt_text(input.breed.as_deref()),
                    opt_text(input.purpose.as_deref()),
                    opt_text(input.notes.as_deref()),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ]),
            )
            .await?;
        tracing::debug!(%id, kind = %input.kind, "animal created");

        Ok(Animal {
            id,
            owner_id: owner_id.to_string(),
            kind: input.kind,
            name: input.name.trim().to_string(),
            species: input.species.map(|s| s.trim().to_string()),
            tag_number: input.tag_number.trim().to_string(),
            age_months: input.age_months,
            birth_date: input.birth_date,
            weight_kg: input.weight_kg,
            sex: input.sex,
            breed: input.breed,
            purpose: input.purpose,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_animal(&self, id: &str) -> Result<Animal, DatabaseError> {
        let owner_id = self.owner_id()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM animals WHERE id = ?1 AND owner_id = ?2"),
                [id, owner_id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "animal",
            id: id.to_string(),
        })?;
        row_to_animal(&row)
    }

    async fn list_animals(
        &self,
        kind: Option<AnimalKind>,
        limit: u32,
    ) -> Result<Vec<Animal>, DatabaseError> {
        let owner_id = self.owner_id()?;
        let mut params = vec![text(owner_id)];
        let kind_filter = match kind {
            Some(kind) => {
                params.push(text(kind.as_str()));
                "AND kind = ?2"
            }
            None => "",
        };
        let sql = format!(
            "SELECT {COLUMNS} FROM animals WHERE owner_id = ?1 {kind_filter}
             ORDER BY created_at DESC, id LIMIT {limit}"
        );
        let rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        collect_rows(rows, row_to_animal).await
    }

    async fn update_animal(
        &self,
        id: &str,
        mut update: AnimalUpdate,
    ) -> Result<Animal, DatabaseError> {
        let current = self.get_animal(id).await?;
        // A new birth date without an explicit age re-derives the age.
        if update.age_months.is_none()
            && let Some(Some(birth)) = update.birth_date
        {
            update.age_months = Some(Some(months_since(birth, Utc::now().date_naive())));
        }
        update.applied_to(&current).validate()?;

        let mut clauses = SetClauses::default();
        if let Some(ref name) = update.name {
            clauses.set("name", text(name.trim()));
        }
        if let Some(ref species) = update.species {
            clauses.set("species", opt_text(species.as_deref().map(str::trim)));
        }
        if let Some(ref tag_number) = update.tag_number {
            clauses.set("tag_number", text(tag_number.trim()));
        }
        if let Some(age_months) = update.age_months {
            clauses.set("age_months", opt_int(age_months));
        }
        if let Some(birth_date) = update.birth_date {
            clauses.set("birth_date", opt_date(birth_date));
        }
        if let Some(weight_kg) = update.weight_kg {
            clauses.set("weight_kg", opt_real(weight_kg));
        }
        if let Some(sex) = update.sex {
            clauses.set("sex", text(sex.as_str()));
        }
        if let Some(ref breed) = update.breed {
            clauses.set("breed", opt_text(breed.as_deref()));
        }
        if let Some(ref purpose) = update.purpose {
            clauses.set("purpose", opt_text(purpose.as_deref()));
        }
        if let Some(ref notes) = update.notes {
            clauses.set("notes", opt_text(notes.as_deref()));
        }

        if clauses.is_empty() {
            return Ok(current);
        }
        let (sql, params) = clauses.into_update("animals", "id", id, self.owner_id()?);
        self.execute_owned(&sql, params, "animal", id).await?;
        self.get_animal(id).await
    }

    async fn delete_animal(&self, id: &str) -> Result<(), DatabaseError> {
        let owner_id = self.owner_id()?;
        self.execute_owned(
            "DELETE FROM animals WHERE id = ?1 AND owner_id = ?2",
            vec![text(id), text(owner_id)],
            "animal",
            id,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{anonymous_service, service_for};
    use crate::updates::AnimalUpdateBuilder;
    use agro_core::enums::Sex;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn cow(name: &str, tag: &str) -> NewAnimal {
        let mut input = NewAnimal::new(AnimalKind::Cow, name, tag, Sex::Female);
        input.weight_kg = Some(410.0);
        input.breed = Some("Brahman".into());
        input
    }

    #[tokio::test]
    async fn create_and_get() {
        let svc = service_for("u1").await;
        let created = svc.create_animal(cow("Lola", "NI-1")).await.unwrap();
        assert!(created.id.starts_with("ani-"));
        assert_eq!(created.owner_id, "u1");

        let fetched = svc.get_animal(&created.id).await.unwrap();
        assert_eq!(fetched.name, "Lola");
        assert_eq!(fetched.weight_kg, Some(410.0));
        assert_eq!(fetched.breed.as_deref(), Some("Brahman"));
        assert_eq!(fetched.kind, AnimalKind::Cow);
    }

    #[tokio::test]
    async fn create_derives_age_from_birth_date() {
        let svc = service_for("u1").await;
        let mut input = cow("Lola", "NI-1");
        input.birth_date = NaiveDate::from_ymd_opt(2000, 1, 1);
        let created = svc.create_animal(input).await.unwrap();
        assert!(created.age_months.is_some_and(|age| age > 12 * 20));
    }

    #[rstest]
    #[case::negative_weight(|a: &mut NewAnimal| a.weight_kg = Some(-3.0))]
    #[case::too_old(|a: &mut NewAnimal| a.age_months = Some(361))]
    #[case::blank_name(|a: &mut NewAnimal| a.name = "  ".into())]
    #[case::blank_tag(|a: &mut NewAnimal| a.tag_number = String::new())]
    #[case::other_without_species(|a: &mut NewAnimal| a.kind = AnimalKind::Other)]
    #[case::derived_age_too_old(|a: &mut NewAnimal| a.birth_date = NaiveDate::from_ymd_opt(1980, 1, 1))]
    #[tokio::test]
    async fn create_rejects_invalid_input(#[case] spoil: fn(&mut NewAnimal)) {
        let svc = service_for("u1").await;
        let mut input = cow("Lola", "NI-1");
        spoil(&mut input);
        assert!(matches!(
            svc.create_animal(input).await,
            Err(DatabaseError::Validation(_))
        ));
        assert!(svc.list_animals(None, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn anonymous_service_is_rejected() {
        let svc = anonymous_service().await;
        assert!(matches!(
            svc.create_animal(cow("Lola", "NI-1")).await,
            Err(DatabaseError::NotAuthenticated)
        ));
        assert!(matches!(
            svc.list_animals(None, 10).await,
            Err(DatabaseError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn list_filters_by_kind_and_limit() {
        let svc = service_for("u1").await;
        svc.create_animal(cow("Lola", "NI-1")).await.unwrap();
        svc.create_animal(cow("Mora", "NI-2")).await.unwrap();
        svc.create_animal(NewAnimal::new(AnimalKind::Pig, "Pinta", "P-1", Sex::Male))
            .await
            .unwrap();

        assert_eq!(svc.list_animals(None, 10).await.unwrap().len(), 3);
        assert_eq!(svc.list_animals(Some(AnimalKind::Cow), 10).await.unwrap().len(), 2);
        assert_eq!(svc.list_animals(None, 1).await.unwrap().len(), 1);
        assert!(svc.list_animals(Some(AnimalKind::Goat), 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let svc = service_for("u1").await;
        let created = svc.create_animal(cow("Lola", "NI-1")).await.unwrap();

        let update = AnimalUpdateBuilder::new()
            .name("Lolita")
            .breed(None)
            .build();
        let updated = svc.update_animal(&created.id, update).await.unwrap();
        assert_eq!(updated.name, "Lolita");
        assert_eq!(updated.breed, None);
        assert_eq!(updated.tag_number, "NI-1");
        assert_eq!(updated.weight_kg, Some(410.0));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_birth_date_rederives_age() {
        let svc = service_for("u1").await;
        let mut input = cow("Lola", "NI-1");
        input.birth_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        let created = svc.create_animal(input).await.unwrap();

        let born = NaiveDate::from_ymd_opt(2010, 3, 1).unwrap();
        let update = AnimalUpdateBuilder::new().birth_date(Some(born)).build();
        let updated = svc.update_animal(&created.id, update).await.unwrap();
        assert_eq!(updated.birth_date, Some(born));
        assert_eq!(
            updated.age_months,
            Some(months_since(born, Utc::now().date_naive()))
        );
        assert!(updated.age_months > created.age_months);
    }

    #[tokio::test]
    async fn update_birth_date_with_explicit_age_keeps_age() {
        let svc = service_for("u1").await;
        let created = svc.create_animal(cow("Lola", "NI-1")).await.unwrap();

        let update = AnimalUpdateBuilder::new()
            .birth_date(NaiveDate::from_ymd_opt(2015, 6, 1))
            .age_months(Some(24))
            .build();
        let updated = svc.update_animal(&created.id, update).await.unwrap();
        assert_eq!(updated.age_months, Some(24));
    }

    #[tokio::test]
    async fn update_rejects_birth_date_past_age_limit() {
        let svc = service_for("u1").await;
        let created = svc.create_animal(cow("Lola", "NI-1")).await.unwrap();

        let update = AnimalUpdateBuilder::new()
            .birth_date(NaiveDate::from_ymd_opt(1980, 1, 1))
            .build();
        assert!(matches!(
            svc.update_animal(&created.id, update).await,
            Err(DatabaseError::Validation(_))
        ));
        assert_eq!(svc.get_animal(&created.id).await.unwrap().birth_date, None);
    }

    #[tokio::test]
    async fn update_keeps_species_rule_for_other_animals() {
        let svc = service_for("u1").await;
        let mut input = NewAnimal::new(AnimalKind::Other, "Copito", "O-1", Sex::Male);
        input.species = Some("sheep".into());
        let created = svc.create_animal(input).await.unwrap();

        let update = AnimalUpdateBuilder::new().species(None).build();
        assert!(matches!(
            svc.update_animal(&created.id, update).await,
            Err(DatabaseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn empty_update_returns_current() {
        let svc = service_for("u1").await;
        let created = svc.create_animal(cow("Lola", "NI-1")).await.unwrap();
        let same = svc
            .update_animal(&created.id, AnimalUpdate::default())
            .await
            .unwrap();
        assert_eq!(same, svc.get_animal(&created.id).await.unwrap());
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service_for("u1").await;
        let created = svc.create_animal(cow("Lola", "NI-1")).await.unwrap();
        svc.delete_animal(&created.id).await.unwrap();
        assert!(matches!(
            svc.get_animal(&created.id).await,
            Err(DatabaseError::NotFound { entity: "animal", .. })
        ));
        assert!(matches!(
            svc.delete_animal(&created.id).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }
}
