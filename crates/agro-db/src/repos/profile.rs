//! Profile repository. One row per user, keyed by the auth user id.

use agro_core::entities::{ProfileFields, UserProfile};
use async_trait::async_trait;
use chrono::Utc;

use super::{ProfileRepo, SetClauses, opt_text, require_text, text};
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};
use crate::service::AgroService;
use crate::updates::ProfileUpdate;

const COLUMNS: &str = "user_id, first_name, last_name, email, role, department, sex, updated_at";

fn row_to_profile(row: &libsql::Row) -> Result<UserProfile, DatabaseError> {
    Ok(UserProfile {
        user_id: row.get::<String>(0)?,
        first_name: row.get::<String>(1)?,
        last_name: row.get::<String>(2)?,
        email: row.get::<String>(3)?,
        role: parse_enum(&row.get::<String>(4)?)?,
        department: parse_enum(&row.get::<String>(5)?)?,
        sex: get_opt_string(row, 6)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

#[async_trait]
impl ProfileRepo for AgroService {
    async fn get_profile(&self) -> Result<Option<UserProfile>, DatabaseError> {
        let owner_id = self.owner_id()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM profiles WHERE user_id = ?1"),
                [owner_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_profile(&self, fields: ProfileFields) -> Result<UserProfile, DatabaseError> {
        fields.validate()?;
        let owner_id = self.owner_id()?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO profiles ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                     ON CONFLICT(user_id) DO UPDATE SET
                         first_name = excluded.first_name,
                         last_name = excluded.last_name,
                         email = excluded.email,
                         role = excluded.role,
                         department = excluded.department,
                         sex = excluded.sex,
                         updated_at = excluded.updated_at"
                ),
                libsql::params_from_iter(vec![
                    text(owner_id),
                    text(fields.first_name.trim()),
                    text(fields.last_name.trim()),
                    text(fields.email.trim()),
                    text(fields.role.as_str()),
                    text(fields.department.as_str()),
                    opt_text(fields.sex.as_deref()),
                    now.to_rfc3339().into(),
                ]),
            )
            .await?;

        Ok(UserProfile {
            user_id: owner_id.to_string(),
            first_name: fields.first_name.trim().to_string(),
            last_name: fields.last_name.trim().to_string(),
            email: fields.email.trim().to_string(),
            role: fields.role,
            department: fields.department,
            sex: fields.sex,
            updated_at: now,
        })
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, DatabaseError> {
        require_text("first_name", update.first_name.as_ref())?;
        require_text("last_name", update.last_name.as_ref())?;
        let owner_id = self.owner_id()?;

        let mut clauses = SetClauses::default();
        if let Some(ref first_name) = update.first_name {
            clauses.set("first_name", text(first_name.trim()));
        }
        if let Some(ref last_name) = update.last_name {
            clauses.set("last_name", text(last_name.trim()));
        }
        if let Some(role) = update.role {
            clauses.set("role", text(role.as_str()));
        }
        if let Some(department) = update.department {
            clauses.set("department", text(department.as_str()));
        }
        if let Some(ref sex) = update.sex {
            clauses.set("sex", opt_text(sex.as_deref()));
        }

        if !clauses.is_empty() {
            let (sql, params) = clauses.into_update_by_key("profiles", "user_id", owner_id);
            self.execute_owned(&sql, params, "profile", owner_id).await?;
        }
        self.get_profile().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "profile",
            id: owner_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::service_for;
    use crate::updates::ProfileUpdateBuilder;
    use agro_core::enums::{Department, Role};
    use pretty_assertions::assert_eq;

    fn fields() -> ProfileFields {
        ProfileFields {
            first_name: "Ana".into(),
            last_name: "López".into(),
            email: "ana@example.com".into(),
            role: Role::Farmer,
            department: Department::Matagalpa,
            sex: None,
        }
    }

    #[tokio::test]
    async fn missing_profile_is_none() {
        let svc = service_for("u1").await;
        assert_eq!(svc.get_profile().await.unwrap(), None);
        assert!(matches!(
            svc.update_profile(ProfileUpdateBuilder::new().role(Role::Researcher).build())
                .await,
            Err(DatabaseError::NotFound { entity: "profile", .. })
        ));
    }

    #[tokio::test]
    async fn upsert_then_update() {
        let svc = service_for("u1").await;
        let stored = svc.upsert_profile(fields()).await.unwrap();
        assert_eq!(stored.user_id, "u1");

        let mut again = fields();
        again.first_name = "Ana María".into();
        svc.upsert_profile(again).await.unwrap();

        let updated = svc
            .update_profile(
                ProfileUpdateBuilder::new()
                    .department(Department::Esteli)
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name, "Ana María");
        assert_eq!(updated.department, Department::Esteli);
        assert_eq!(updated.role, Role::Farmer);
    }
}
