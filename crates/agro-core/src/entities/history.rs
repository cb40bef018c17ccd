use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RecordKind, Species};

/// One line of an animal's medical history, whatever table it came from.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: RecordKind,
    pub id: String,
    pub animal_name: String,
    pub species: Species,
    pub date: NaiveDate,
    pub summary: String,
}

/// Merged timeline of vaccinations, monitoring, treatments, and checkups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MedicalHistory {
    pub entries: Vec<HistoryEntry>,
}

impl MedicalHistory {
    /// Number of entries of `kind`.
    #[must_use]
    pub fn count(&self, kind: RecordKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
