//! Navigation targets and the guard each one sits behind.

use std::fmt;

use crate::gate::Gate;

/// Every screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Register,
    Login,
    Cow,
    Pig,
    Goat,
    OtherAnimals,
    Dashboard,
    DashboardCow,
    DashboardPig,
    DashboardGoat,
    DashboardOtherAnimals,
    AnimalProfile,
    HealthManagement,
    WelfareMonitoring,
    Communication,
    DataAnalysis,
}

impl Route {
    pub const ALL: [Self; 17] = [
        Self::Home,
        Self::Register,
        Self::Login,
        Self::Cow,
        Self::Pig,
        Self::Goat,
        Self::OtherAnimals,
        Self::Dashboard,
        Self::DashboardCow,
        Self::DashboardPig,
        Self::DashboardGoat,
        Self::DashboardOtherAnimals,
        Self::AnimalProfile,
        Self::HealthManagement,
        Self::WelfareMonitoring,
        Self::Communication,
        Self::DataAnalysis,
    ];

    /// Where anonymous users are sent.
    pub const LOGIN_REDIRECT: Self = Self::Login;
    /// Where signed-in users are sent away from the login and register screens.
    pub const HOME_REDIRECT: Self = Self::Home;

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Register => "/registro",
            Self::Login => "/login",
            Self::Cow => "/cow",
            Self::Pig => "/pig",
            Self::Goat => "/goat",
            Self::OtherAnimals => "/other_animals",
            Self::Dashboard => "/dashboard",
            Self::DashboardCow => "/dashboard/cow",
            Self::DashboardPig => "/dashboard/pig",
            Self::DashboardGoat => "/dashboard/goat",
            Self::DashboardOtherAnimals => "/dashboard/other_animals",
            Self::AnimalProfile => "/dashboard/perfil-animal",
            Self::HealthManagement => "/dashboard/gestion-salud-animal",
            Self::WelfareMonitoring => "/dashboard/monitoreo-bienestar-animal",
            Self::Communication => "/dashboard/comunicacion-coordinacion",
            Self::DataAnalysis => "/dashboard/analisis-automatizacion-datos",
        }
    }

    /// Exact path lookup; a single trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path {
            "/" => path,
            other => other.strip_suffix('/').unwrap_or(other),
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Login and registration are for anonymous users; everything else
    /// requires a session.
    #[must_use]
    pub const fn gate(self) -> Gate {
        match self {
            Self::Login | Self::Register => Gate::AnonymousOnly,
            _ => Gate::AuthenticatedOnly,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/nope"), None);
    }

    #[test]
    fn dashboard_animal_forms_are_protected() {
        for (path, route) in [
            ("/dashboard/cow", Route::DashboardCow),
            ("/dashboard/pig", Route::DashboardPig),
            ("/dashboard/goat", Route::DashboardGoat),
            ("/dashboard/other_animals/", Route::DashboardOtherAnimals),
        ] {
            assert_eq!(Route::from_path(path), Some(route));
            assert_eq!(route.gate(), Gate::AuthenticatedOnly);
        }
    }

    #[test]
    fn only_login_and_register_are_anonymous() {
        let anonymous: Vec<Route> = Route::ALL
            .into_iter()
            .filter(|route| route.gate() == Gate::AnonymousOnly)
            .collect();
        assert_eq!(anonymous, vec![Route::Register, Route::Login]);
    }
}
