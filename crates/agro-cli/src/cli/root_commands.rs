use agro_auth::Route;
use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AnimalCommands, AuthCommands, CheckupCommands, MonitoringCommands, ProfileCommands,
    TreatmentCommands, VaccinationCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, register, sign out, or show the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Animal profiles (cows, pigs, goats, other animals).
    Animal {
        #[command(subcommand)]
        action: AnimalCommands,
    },
    /// Vaccination records.
    Vaccination {
        #[command(subcommand)]
        action: VaccinationCommands,
    },
    /// Medical monitoring records.
    Monitoring {
        #[command(subcommand)]
        action: MonitoringCommands,
    },
    /// Treatment records.
    Treatment {
        #[command(subcommand)]
        action: TreatmentCommands,
    },
    /// Routine checkup records.
    Checkup {
        #[command(subcommand)]
        action: CheckupCommands,
    },
    /// Vaccines recommended for a species.
    Vaccines(VaccinesArgs),
    /// Merged medical history across all health records.
    History(HistoryArgs),
    /// The signed-in user's profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Print the JSON schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct VaccinesArgs {
    /// Species (cattle, pigs, goats, horses, poultry, dogs, cats, sheep, rabbits, ostriches).
    #[arg(long)]
    pub species: String,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Only records for this animal name.
    #[arg(long)]
    pub animal: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type: animal, vaccination, monitoring, treatment, checkup, profile, history.
    pub type_name: String,
}

impl Commands {
    /// The screen a command belongs to, and so the guard it passes through.
    ///
    /// `None` for commands that work regardless of the session.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        match self {
            Self::Auth { action } => match action {
                AuthCommands::Login(_) => Some(Route::Login),
                AuthCommands::Register(_) => Some(Route::Register),
                AuthCommands::Logout => Some(Route::Home),
                AuthCommands::Status => None,
            },
            Self::Animal { action } => Some(action.route()),
            Self::Vaccination { .. }
            | Self::Treatment { .. }
            | Self::Checkup { .. }
            | Self::History(_) => Some(Route::HealthManagement),
            Self::Monitoring { .. } => Some(Route::WelfareMonitoring),
            Self::Profile { .. } => Some(Route::Dashboard),
            Self::Vaccines(_) | Self::Schema(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use agro_auth::{Gate, Route};

    use crate::cli::Cli;

    fn route_of(args: &[&str]) -> Option<Route> {
        let mut argv = vec!["agrosalud"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("cli should parse").command.route()
    }

    #[test]
    fn auth_entry_points_are_anonymous_only() {
        let login = route_of(&["auth", "login", "--email", "a@b.c", "--password", "secret"]);
        assert_eq!(login, Some(Route::Login));
        assert_eq!(login.map(Route::gate), Some(Gate::AnonymousOnly));
        assert_eq!(route_of(&["auth", "status"]), None);
        assert_eq!(route_of(&["auth", "logout"]), Some(Route::Home));
    }

    #[test]
    fn animal_commands_route_by_kind() {
        assert_eq!(route_of(&["animal", "list", "--kind", "pig"]), Some(Route::Pig));
        assert_eq!(
            route_of(&["animal", "list", "--kind", "other"]),
            Some(Route::OtherAnimals)
        );
        assert_eq!(
            route_of(&["animal", "list", "--kind", "Cow"]),
            Some(Route::Cow)
        );
        assert_eq!(
            route_of(&["animal", "list", "--kind", "unicorn"]),
            Some(Route::AnimalProfile)
        );
        assert_eq!(route_of(&["animal", "list"]), Some(Route::AnimalProfile));
        assert_eq!(route_of(&["animal", "get", "ani-1"]), Some(Route::AnimalProfile));
    }

    #[test]
    fn record_commands_are_authenticated_only() {
        for args in [
            &["vaccination", "list"][..],
            &["monitoring", "list"],
            &["treatment", "list"],
            &["checkup", "list"],
            &["history"],
            &["profile", "get"],
        ] {
            let route = route_of(args).expect("record commands are routed");
            assert_eq!(route.gate(), Gate::AuthenticatedOnly, "{args:?}");
        }
        assert_eq!(route_of(&["vaccines", "--species", "cattle"]), None);
        assert_eq!(route_of(&["schema", "animal"]), None);
    }
}
