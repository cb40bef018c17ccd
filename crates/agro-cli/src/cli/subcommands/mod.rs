mod animal;
mod auth;
mod profile;
mod records;

pub use animal::{AnimalCommands, AnimalCreateArgs, AnimalUpdateArgs};
pub use auth::{AuthCommands, AuthLoginArgs, AuthRegisterArgs};
pub use profile::{ProfileCommands, ProfileUpdateArgs};
pub use records::{
    CheckupCommands, CheckupCreateArgs, CheckupUpdateArgs, MonitoringCommands,
    MonitoringCreateArgs, MonitoringUpdateArgs, TreatmentCommands, TreatmentCreateArgs,
    TreatmentUpdateArgs, VaccinationCommands, VaccinationCreateArgs, VaccinationUpdateArgs,
};
