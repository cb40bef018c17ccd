//! Vaccine catalog per species.
//!
//! The suggestions offered when registering a vaccination. Species without
//! an entry return an empty slice; any free-text vaccine is still accepted.

use crate::enums::Species;

const CATTLE: &[&str] = &[
    "Foot-and-mouth disease",
    "Brucellosis",
    "Anthrax",
    "Clostridiosis",
    "Leptospirosis",
    "Rabies",
    "Pasteurellosis",
    "IBR (infectious bovine rhinotracheitis)",
    "BVD (bovine viral diarrhea)",
];

const GOATS: &[&str] = &["Anthrax", "Clostridiosis", "Brucellosis", "Rabies"];

const HORSES: &[&str] = &[
    "Venezuelan equine encephalomyelitis",
    "Rabies",
    "Tetanus",
];

const PIGS: &[&str] = &[
    "Classical swine fever",
    "Leptospirosis",
    "Swine erysipelas",
    "Circovirus",
];

const DOGS: &[&str] = &[
    "Canine parvovirus",
    "Canine distemper",
    "Infectious canine hepatitis",
    "Rabies",
    "Leptospirosis",
    "Canine coronavirus",
];

const CATS: &[&str] = &[
    "Feline panleukopenia",
    "Feline viral rhinotracheitis",
    "Feline calicivirus",
    "Rabies",
    "Feline leukemia",
];

const RABBITS: &[&str] = &[
    "Myxomatosis",
    "Rabbit hemorrhagic disease",
    "Pasteurellosis",
    "Coccidiosis",
];

/// Vaccines suggested for `species`.
#[must_use]
pub const fn vaccines_for(species: Species) -> &'static [&'static str] {
    match species {
        Species::Cattle => CATTLE,
        Species::Goats => GOATS,
        Species::Horses => HORSES,
        Species::Pigs => PIGS,
        Species::Dogs => DOGS,
        Species::Cats => CATS,
        Species::Rabbits => RABBITS,
        Species::Poultry | Species::Sheep | Species::Ostriches => &[],
    }
}

/// Whether `vaccine` (case-insensitive) is in the catalog for `species`.
#[must_use]
pub fn is_recommended(species: Species, vaccine: &str) -> bool {
    vaccines_for(species)
        .iter()
        .any(|known| known.eq_ignore_ascii_case(vaccine.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rabies_is_shared_across_species() {
        for species in [
            Species::Cattle,
            Species::Goats,
            Species::Horses,
            Species::Dogs,
            Species::Cats,
        ] {
            assert!(is_recommended(species, "rabies"), "{species}");
        }
    }

    #[test]
    fn species_without_catalog_is_empty() {
        assert!(vaccines_for(Species::Poultry).is_empty());
        assert!(!is_recommended(Species::Sheep, "Rabies"));
    }

    #[test]
    fn cattle_catalog_is_complete() {
        assert_eq!(vaccines_for(Species::Cattle).len(), 9);
        assert!(is_recommended(Species::Cattle, "  Brucellosis "));
    }
}
