//! Health record commands: vaccination, monitoring, treatment, checkup.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum VaccinationCommands {
    /// Record a vaccination.
    Create(VaccinationCreateArgs),
    /// List vaccinations, most recent dose first.
    List {
        #[arg(long)]
        animal: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a vaccination by ID.
    Get { id: String },
    /// Update a vaccination.
    Update(VaccinationUpdateArgs),
    /// Delete a vaccination.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct VaccinationCreateArgs {
    #[arg(long)]
    pub animal: String,
    #[arg(long)]
    pub species: String,
    /// Free text; see `agrosalud vaccines --species` for suggestions.
    #[arg(long)]
    pub vaccine: String,
    /// Date of the dose (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct VaccinationUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub animal: Option<String>,
    #[arg(long)]
    pub species: Option<String>,
    #[arg(long)]
    pub vaccine: Option<String>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Fields to empty: notes
    #[arg(long, value_delimiter = ',')]
    pub clear: Vec<String>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum MonitoringCommands {
    /// Record a veterinary consultation.
    Create(MonitoringCreateArgs),
    /// List monitoring records, most recent first.
    List {
        #[arg(long)]
        animal: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a monitoring record by ID.
    Get { id: String },
    /// Update a monitoring record.
    Update(MonitoringUpdateArgs),
    /// Delete a monitoring record.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct MonitoringCreateArgs {
    #[arg(long)]
    pub animal: String,
    #[arg(long)]
    pub species: String,
    /// Consultation date (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,
    #[arg(long)]
    pub diagnosis: String,
    /// Observed activity level, e.g. low, normal, high.
    #[arg(long)]
    pub activity: String,
}

#[derive(Clone, Debug, Args)]
pub struct MonitoringUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub animal: Option<String>,
    #[arg(long)]
    pub species: Option<String>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub diagnosis: Option<String>,
    #[arg(long)]
    pub activity: Option<String>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum TreatmentCommands {
    /// Record a treatment.
    Create(TreatmentCreateArgs),
    /// List treatments, most recently started first.
    List {
        #[arg(long)]
        animal: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a treatment by ID.
    Get { id: String },
    /// Update a treatment.
    Update(TreatmentUpdateArgs),
    /// Delete a treatment.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct TreatmentCreateArgs {
    #[arg(long)]
    pub animal: String,
    #[arg(long)]
    pub species: String,
    #[arg(long)]
    pub treatment: String,
    #[arg(long)]
    pub started_on: NaiveDate,
    /// Omit while the treatment is ongoing.
    #[arg(long)]
    pub ended_on: Option<NaiveDate>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TreatmentUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub animal: Option<String>,
    #[arg(long)]
    pub species: Option<String>,
    #[arg(long)]
    pub treatment: Option<String>,
    #[arg(long)]
    pub started_on: Option<NaiveDate>,
    #[arg(long)]
    pub ended_on: Option<NaiveDate>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Fields to empty: ended-on, notes
    #[arg(long, value_delimiter = ',')]
    pub clear: Vec<String>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum CheckupCommands {
    /// Record a routine checkup.
    Create(CheckupCreateArgs),
    /// List checkups, most recent first.
    List {
        #[arg(long)]
        animal: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a checkup by ID.
    Get { id: String },
    /// Update a checkup.
    Update(CheckupUpdateArgs),
    /// Delete a checkup.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct CheckupCreateArgs {
    #[arg(long)]
    pub animal: String,
    #[arg(long)]
    pub species: String,
    /// Checkup date (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,
    #[arg(long)]
    pub results: String,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CheckupUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub animal: Option<String>,
    #[arg(long)]
    pub species: Option<String>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub results: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Fields to empty: notes
    #[arg(long, value_delimiter = ',')]
    pub clear: Vec<String>,
}
