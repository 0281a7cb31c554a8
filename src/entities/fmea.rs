//! FMEA findings table

use serde::{Deserialize, Serialize};

use crate::entities::catalog::FailureScenario;

/// One FMEA row
///
/// Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FmeaEntry {
    pub failure_mode: String,
    pub effect: String,
    pub cause: String,
    pub detection_control: String,
}

impl FmeaEntry {
    /// CSV header, in declaration order
    pub const HEADERS: [&'static str; 4] = ["failure_mode", "effect", "cause", "detection_control"];

    /// All text fields, in declaration order
    pub fn fields(&self) -> [&str; 4] {
        [
            &self.failure_mode,
            &self.effect,
            &self.cause,
            &self.detection_control,
        ]
    }

    /// Apply `f` to every text field
    pub fn map_fields(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            failure_mode: f(&self.failure_mode),
            effect: f(&self.effect),
            cause: f(&self.cause),
            detection_control: f(&self.detection_control),
        }
    }
}

impl From<&FailureScenario> for FmeaEntry {
    fn from(s: &FailureScenario) -> Self {
        Self {
            failure_mode: s.failure_mode.clone(),
            effect: s.effect.clone(),
            cause: s.cause.clone(),
            detection_control: s.detection_control.clone(),
        }
    }
}

/// Rows generated for one simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FmeaTable {
    entries: Vec<FmeaEntry>,
}

impl FmeaTable {
    pub fn new(entries: Vec<FmeaEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FmeaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FmeaEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a FmeaTable {
    type Item = &'a FmeaEntry;
    type IntoIter = std::slice::Iter<'a, FmeaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
