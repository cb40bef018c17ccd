//! Medical history: the four health tables merged into one timeline.

use agro_core::entities::{HistoryEntry, MedicalHistory};
use agro_core::enums::RecordKind;

use crate::error::DatabaseError;
use crate::repos::{CheckupRepo, MonitoringRepo, TreatmentRepo, VaccinationRepo};

/// Fetch vaccinations, monitoring, treatments, and checkups (optionally for
/// one animal) and merge them newest first. Same-day entries are ordered by
/// record kind, then id, so the output is stable.
///
/// Any failing fetch fails the whole history; partial timelines are never
/// returned.
pub async fn medical_history<R>(
    repos: &R,
    animal_name: Option<&str>,
) -> Result<MedicalHistory, DatabaseError>
where
    R: VaccinationRepo + MonitoringRepo + TreatmentRepo + CheckupRepo + ?Sized,
{
    let (vaccinations, monitoring, treatments, checkups) = tokio::try_join!(
        repos.list_vaccinations(animal_name, u32::MAX),
        repos.list_monitoring(animal_name, u32::MAX),
        repos.list_treatments(animal_name, u32::MAX),
        repos.list_checkups(animal_name, u32::MAX),
    )?;

    let mut entries = Vec::with_capacity(
        vaccinations.len() + monitoring.len() + treatments.len() + checkups.len(),
    );
    entries.extend(vaccinations.into_iter().map(|v| HistoryEntry {
        kind: RecordKind::Vaccination,
        id: v.id,
        animal_name: v.animal_name,
        species: v.species,
        date: v.vaccinated_on,
        summary: v.vaccine,
    }));
    entries.extend(monitoring.into_iter().map(|m| HistoryEntry {
        kind: RecordKind::Monitoring,
        id: m.id,
        animal_name: m.animal_name,
        species: m.species,
        date: m.consulted_on,
        summary: format!("{} (activity: {})", m.diagnosis, m.activity_level),
    }));
    entries.extend(treatments.into_iter().map(|t| {
        let summary = match t.ended_on {
            Some(end) => format!("{} (until {end})", t.treatment),
            None => format!("{} (ongoing)", t.treatment),
        };
        HistoryEntry {
            kind: RecordKind::Treatment,
            id: t.id,
            animal_name: t.animal_name,
            species: t.species,
            date: t.started_on,
            summary,
        }
    }));
    entries.extend(checkups.into_iter().map(|c| HistoryEntry {
        kind: RecordKind::Checkup,
        id: c.id,
        animal_name: c.animal_name,
        species: c.species,
        date: c.checked_on,
        summary: c.results,
    }));

    entries.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.kind.as_str().cmp(b.kind.as_str()))
            .then_with(|| a.id.cmp(&b.id))
    });
    tracing::debug!(entries = entries.len(), animal = ?animal_name, "medical history assembled");
    Ok(MedicalHistory { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{anonymous_service, service_for};
    use agro_core::entities::{
        NewMedicalMonitoring, NewRoutineCheckup, NewTreatment, NewVaccination,
    };
    use agro_core::enums::Species;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[tokio::test]
    async fn merges_all_tables_newest_first() {
        let svc = service_for("u1").await;
        svc.create_vaccination(NewVaccination {
            animal_name: "Lola".into(),
            species: Species::Cattle,
            vaccine: "Rabies".into(),
            vaccinated_on: day(1),
            notes: None,
        })
        .await
        .unwrap();
        svc.create_monitoring(NewMedicalMonitoring {
            animal_name: "Lola".into(),
            species: Species::Cattle,
            consulted_on: day(12),
            diagnosis: "Mastitis".into(),
            activity_level: "low".into(),
        })
        .await
        .unwrap();
        svc.create_treatment(NewTreatment {
            animal_name: "Lola".into(),
            species: Species::Cattle,
            treatment: "Oxytetracycline".into(),
            started_on: day(12),
            ended_on: None,
            notes: None,
        })
        .await
        .unwrap();
        svc.create_checkup(NewRoutineCheckup {
            animal_name: "Mora".into(),
            species: Species::Goats,
            checked_on: day(20),
            results: "Healthy".into(),
            notes: None,
        })
        .await
        .unwrap();

        let history = medical_history(&svc, None).await.unwrap();
        let order: Vec<(RecordKind, NaiveDate)> =
            history.entries.iter().map(|e| (e.kind, e.date)).collect();
        assert_eq!(
            order,
            vec![
                (RecordKind::Checkup, day(20)),
                (RecordKind::Monitoring, day(12)),
                (RecordKind::Treatment, day(12)),
                (RecordKind::Vaccination, day(1)),
            ]
        );
        assert_eq!(history.entries[2].summary, "Oxytetracycline (ongoing)");

        let lola = medical_history(&svc, Some("Lola")).await.unwrap();
        assert_eq!(lola.entries.len(), 3);
        assert_eq!(lola.count(RecordKind::Checkup), 0);
    }

    #[tokio::test]
    async fn empty_history_is_not_an_error() {
        let svc = service_for("u1").await;
        assert!(medical_history(&svc, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn anonymous_history_fails() {
        let svc = anonymous_service().await;
        assert!(matches!(
            medical_history(&svc, None).await,
            Err(DatabaseError::NotAuthenticated)
        ));
    }
}
