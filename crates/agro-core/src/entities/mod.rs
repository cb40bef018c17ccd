//! Entity structs for all AgroSalud records.
//!
//! Each persisted entity maps to a table in the relational store (see
//! `agro-db/migrations`). `New*` structs are the inputs to the create
//! operations; the store fills in `id`, `owner_id`, and timestamps.

mod animal;
mod checkup;
mod history;
mod monitoring;
mod profile;
mod treatment;
mod vaccination;

pub use animal::{Animal, NewAnimal};
pub use checkup::{NewRoutineCheckup, RoutineCheckup};
pub use history::{HistoryEntry, MedicalHistory};
pub use monitoring::{MedicalMonitoring, NewMedicalMonitoring};
pub use profile::{ProfileFields, UserProfile};
pub use treatment::{NewTreatment, Treatment};
pub use vaccination::{NewVaccination, Vaccination};
