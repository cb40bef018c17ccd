//! Update builder types for record mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL. Nullable columns use
//! `Option<Option<T>>`: `Some(None)` clears the column.

pub mod animal;
pub mod checkup;
pub mod monitoring;
pub mod profile;
pub mod treatment;
pub mod vaccination;

pub use animal::{AnimalUpdate, AnimalUpdateBuilder};
pub use checkup::{CheckupUpdate, CheckupUpdateBuilder};
pub use monitoring::{MonitoringUpdate, MonitoringUpdateBuilder};
pub use profile::{ProfileUpdate, ProfileUpdateBuilder};
pub use treatment::{TreatmentUpdate, TreatmentUpdateBuilder};
pub use vaccination::{VaccinationUpdate, VaccinationUpdateBuilder};
