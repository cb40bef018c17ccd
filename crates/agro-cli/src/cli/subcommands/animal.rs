use agro_auth::Route;
use agro_core::enums::AnimalKind;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::commands::shared::parse::parse_enum;

/// Animal profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnimalCommands {
    /// Register an animal.
    Create(AnimalCreateArgs),
    /// List animals, newest first.
    List {
        /// cow, pig, goat, other
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an animal by ID.
    Get { id: String },
    /// Update an animal.
    Update(AnimalUpdateArgs),
    /// Delete an animal.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct AnimalCreateArgs {
    /// cow, pig, goat, other
    #[arg(long)]
    pub kind: String,
    #[arg(long)]
    pub name: String,
    /// Ear tag or registration number.
    #[arg(long)]
    pub tag: String,
    /// male, female
    #[arg(long)]
    pub sex: String,
    /// Required for kind `other`.
    #[arg(long)]
    pub species: Option<String>,
    #[arg(long)]
    pub age_months: Option<u32>,
    /// YYYY-MM-DD; age is derived from it when --age-months is absent.
    #[arg(long)]
    pub birth_date: Option<NaiveDate>,
    #[arg(long)]
    pub weight_kg: Option<f64>,
    #[arg(long)]
    pub breed: Option<String>,
    #[arg(long)]
    pub purpose: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AnimalUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub tag: Option<String>,
    #[arg(long)]
    pub sex: Option<String>,
    #[arg(long)]
    pub species: Option<String>,
    #[arg(long)]
    pub age_months: Option<u32>,
    #[arg(long)]
    pub birth_date: Option<NaiveDate>,
    #[arg(long)]
    pub weight_kg: Option<f64>,
    #[arg(long)]
    pub breed: Option<String>,
    #[arg(long)]
    pub purpose: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Fields to empty: species, age-months, birth-date, weight-kg, breed, purpose, notes
    #[arg(long, value_delimiter = ',')]
    pub clear: Vec<String>,
}

impl AnimalCommands {
    /// Kind-specific screens for creating and listing one kind; the animal
    /// profile screen otherwise.
    #[must_use]
    pub fn route(&self) -> Route {
        let raw = match self {
            Self::Create(args) => Some(args.kind.as_str()),
            Self::List { kind, .. } => kind.as_deref(),
            Self::Get { .. } | Self::Update(_) | Self::Delete { .. } => None,
        };
        // Unparseable kinds fall through; the handler reports them.
        match raw.and_then(|raw| parse_enum::<AnimalKind>(raw, "kind").ok()) {
            Some(AnimalKind::Cow) => Route::Cow,
            Some(AnimalKind::Pig) => Route::Pig,
            Some(AnimalKind::Goat) => Route::Goat,
            Some(AnimalKind::Other) => Route::OtherAnimals,
            None => Route::AnimalProfile,
        }
    }
}
