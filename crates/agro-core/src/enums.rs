//! Animal kinds, species, sexes, roles, departments, and record kinds.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `as_str()` gives the value stored in SQL; `label()` (where present) gives the
//! human-readable name shown in table output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AnimalKind
// ---------------------------------------------------------------------------

/// The four animal profile categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnimalKind {
    Cow,
    Pig,
    Goat,
    Other,
}

impl AnimalKind {
    pub const ALL: [Self; 4] = [Self::Cow, Self::Pig, Self::Goat, Self::Other];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cow => "cow",
            Self::Pig => "pig",
            Self::Goat => "goat",
            Self::Other => "other",
        }
    }

    /// Species implied by the kind. `Other` carries its species on the record.
    #[must_use]
    pub const fn species(self) -> Option<Species> {
        match self {
            Self::Cow => Some(Species::Cattle),
            Self::Pig => Some(Species::Pigs),
            Self::Goat => Some(Species::Goats),
            Self::Other => None,
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// Species selectable on health records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Cattle,
    Pigs,
    Goats,
    Horses,
    Poultry,
    Dogs,
    Cats,
    Sheep,
    Rabbits,
    Ostriches,
}

impl Species {
    pub const ALL: [Self; 10] = [
        Self::Cattle,
        Self::Pigs,
        Self::Goats,
        Self::Horses,
        Self::Poultry,
        Self::Dogs,
        Self::Cats,
        Self::Sheep,
        Self::Rabbits,
        Self::Ostriches,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cattle => "cattle",
            Self::Pigs => "pigs",
            Self::Goats => "goats",
            Self::Horses => "horses",
            Self::Poultry => "poultry",
            Self::Dogs => "dogs",
            Self::Cats => "cats",
            Self::Sheep => "sheep",
            Self::Rabbits => "rabbits",
            Self::Ostriches => "ostriches",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role a user picks at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Farmer,
    Veterinarian,
    Administrator,
    Technician,
    Researcher,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Veterinarian => "veterinarian",
            Self::Administrator => "administrator",
            Self::Technician => "technician",
            Self::Researcher => "researcher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

/// Departments and autonomous regions of Nicaragua.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Boaco,
    Carazo,
    Chinandega,
    Chontales,
    Esteli,
    Granada,
    Jinotega,
    Leon,
    Madriz,
    Managua,
    Masaya,
    Matagalpa,
    NuevaSegovia,
    RioSanJuan,
    Rivas,
    Raccn,
    Raccs,
}

impl Department {
    pub const ALL: [Self; 17] = [
        Self::Boaco,
        Self::Carazo,
        Self::Chinandega,
        Self::Chontales,
        Self::Esteli,
        Self::Granada,
        Self::Jinotega,
        Self::Leon,
        Self::Madriz,
        Self::Managua,
        Self::Masaya,
        Self::Matagalpa,
        Self::NuevaSegovia,
        Self::RioSanJuan,
        Self::Rivas,
        Self::Raccn,
        Self::Raccs,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boaco => "boaco",
            Self::Carazo => "carazo",
            Self::Chinandega => "chinandega",
            Self::Chontales => "chontales",
            Self::Esteli => "esteli",
            Self::Granada => "granada",
            Self::Jinotega => "jinotega",
            Self::Leon => "leon",
            Self::Madriz => "madriz",
            Self::Managua => "managua",
            Self::Masaya => "masaya",
            Self::Matagalpa => "matagalpa",
            Self::NuevaSegovia => "nueva_segovia",
            Self::RioSanJuan => "rio_san_juan",
            Self::Rivas => "rivas",
            Self::Raccn => "raccn",
            Self::Raccs => "raccs",
        }
    }

    /// Official name, with accents.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boaco => "Boaco",
            Self::Carazo => "Carazo",
            Self::Chinandega => "Chinandega",
            Self::Chontales => "Chontales",
            Self::Esteli => "Estelí",
            Self::Granada => "Granada",
            Self::Jinotega => "Jinotega",
            Self::Leon => "León",
            Self::Madriz => "Madriz",
            Self::Managua => "Managua",
            Self::Masaya => "Masaya",
            Self::Matagalpa => "Matagalpa",
            Self::NuevaSegovia => "Nueva Segovia",
            Self::RioSanJuan => "Río San Juan",
            Self::Rivas => "Rivas",
            Self::Raccn => "RACCN",
            Self::Raccs => "RACCS",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// The four health record tables, as tagged in the medical history timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Vaccination,
    Monitoring,
    Treatment,
    Checkup,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vaccination => "vaccination",
            Self::Monitoring => "monitoring",
            Self::Treatment => "treatment",
            Self::Checkup => "checkup",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
