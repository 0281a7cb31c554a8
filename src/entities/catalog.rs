//! FMEA lookup catalog - the reference scenarios an FMEA table is drawn from

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::ReliabilityError;

/// One coherent failure scenario: row i of every lookup list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureScenario {
    pub failure_mode: String,
    pub effect: String,
    pub cause: String,
    pub detection_control: String,
}

/// Column-oriented catalog as written in a YAML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogColumns {
    #[serde(default)]
    pub failure_modes: Vec<String>,

    #[serde(default)]
    pub effects: Vec<String>,

    #[serde(default)]
    pub causes: Vec<String>,

    #[serde(default)]
    pub detection_controls: Vec<String>,
}

/// Ordered list of failure scenarios
///
/// Only constructible through [`LookupCatalog::from_columns`], which checks
/// that all four lookup lists have the same, non-zero length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCatalog {
    scenarios: Vec<FailureScenario>,
}

impl LookupCatalog {
    /// Zip four parallel lookup lists into a catalog
    pub fn from_columns(columns: CatalogColumns) -> Result<Self, ReliabilityError> {
        let CatalogColumns {
            failure_modes,
            effects,
            causes,
            detection_controls,
        } = columns;

        let n = failure_modes.len();
        if effects.len() != n || causes.len() != n || detection_controls.len() != n {
            return Err(ReliabilityError::InconsistentCatalog {
                failure_modes: n,
                effects: effects.len(),
                causes: causes.len(),
                detection_controls: detection_controls.len(),
            });
        }
        if n == 0 {
            return Err(ReliabilityError::EmptyCatalog);
        }

        let scenarios = failure_modes
            .into_iter()
            .zip(effects)
            .zip(causes)
            .zip(detection_controls)
            .map(|(((failure_mode, effect), cause), detection_control)| FailureScenario {
                failure_mode,
                effect,
                cause,
                detection_control,
            })
            .collect();

        Ok(Self { scenarios })
    }

    /// Load a catalog from a YAML file with four list keys
    pub fn load(path: &Path) -> Result<Self, ReliabilityError> {
        let content = fs::read_to_string(path)?;
        let columns: CatalogColumns =
            serde_yml::from_str(&content).map_err(|e| ReliabilityError::CatalogParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::from_columns(columns)
    }

    /// Built-in gas compression catalog
    pub fn gas_compression() -> Self {
        let row = |failure_mode: &str, effect: &str, cause: &str, detection_control: &str| {
            FailureScenario {
                failure_mode: failure_mode.to_string(),
                effect: effect.to_string(),
                cause: cause.to_string(),
                detection_control: detection_control.to_string(),
            }
        };

        Self {
            scenarios: vec![
                row(
                    "Falla del motor",
                    "Parada del sistema",
                    "Desgaste mecánico",
                    "Monitoreo de vibraciones",
                ),
                row(
                    "Fuga de gas",
                    "Pérdida de eficiencia",
                    "Defectos en las juntas",
                    "Inspecciones regulares",
                ),
                row(
                    "Bloqueo del filtro",
                    "Aumento de la presión",
                    "Falta de mantenimiento",
                    "Cambio de filtros",
                ),
                row(
                    "Fallo del sensor de presión",
                    "Lecturas incorrectas",
                    "Fallos electrónicos",
                    "Calibración de sensores",
                ),
                row(
                    "Sobrecalentamiento del compresor",
                    "Daño en componentes",
                    "Lubricación inadecuada",
                    "Sistemas de enfriamiento",
                ),
            ],
        }
    }

    /// Number of scenarios (N)
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FailureScenario> {
        self.scenarios.get(index)
    }

    pub fn scenarios(&self) -> &[FailureScenario] {
        &self.scenarios
    }

    /// Split back into the four lookup lists
    pub fn to_columns(&self) -> CatalogColumns {
        let mut columns = CatalogColumns::default();
        for s in &self.scenarios {
            columns.failure_modes.push(s.failure_mode.clone());
            columns.effects.push(s.effect.clone());
            columns.causes.push(s.cause.clone());
            columns.detection_controls.push(s.detection_control.clone());
        }
        columns
    }
}

impl Default for LookupCatalog {
    fn default() -> Self {
        Self::gas_compression()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_gas_compression_catalog_has_five_scenarios() {
        let catalog = LookupCatalog::gas_compression();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(0).unwrap().failure_mode, "Falla del motor");
        assert_eq!(catalog.get(4).unwrap().detection_control, "Sistemas de enfriamiento");
    }

    #[test]
    fn test_from_columns_zips_by_index() {
        let catalog = LookupCatalog::from_columns(CatalogColumns {
            failure_modes: strings(&["M0", "M1"]),
            effects: strings(&["E0", "E1"]),
            causes: strings(&["C0", "C1"]),
            detection_controls: strings(&["D0", "D1"]),
        })
        .unwrap();

        let second = catalog.get(1).unwrap();
        assert_eq!(second.failure_mode, "M1");
        assert_eq!(second.effect, "E1");
        assert_eq!(second.cause, "C1");
        assert_eq!(second.detection_control, "D1");
    }

    #[test]
    fn test_from_columns_rejects_length_mismatch() {
        let result = LookupCatalog::from_columns(CatalogColumns {
            failure_modes: strings(&["M0", "M1"]),
            effects: strings(&["E0", "E1"]),
            causes: strings(&["C0"]),
            detection_controls: strings(&["D0", "D1"]),
        });

        match result {
            Err(ReliabilityError::InconsistentCatalog {
                failure_modes,
                causes,
                ..
            }) => {
                assert_eq!(failure_modes, 2);
                assert_eq!(causes, 1);
            }
            other => panic!("expected InconsistentCatalog, got {:?}", other),
        }
    }

    #[test]
    fn test_from_columns_rejects_empty() {
        let result = LookupCatalog::from_columns(CatalogColumns::default());
        assert!(matches!(result, Err(ReliabilityError::EmptyCatalog)));
    }

    #[test]
    fn test_columns_round_trip() {
        let catalog = LookupCatalog::gas_compression();
        let rebuilt = LookupCatalog::from_columns(catalog.to_columns()).unwrap();
        assert_eq!(catalog, rebuilt);
    }

    #[test]
    fn test_load_from_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        fs::write(
            &path,
            "failure_modes: [Seal leak]\neffects: [Gas loss]\ncauses: [Worn seal]\ndetection_controls: [Leak test]\n",
        )
        .unwrap();

        let catalog = LookupCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().cause, "Worn seal");
    }

    #[test]
    fn test_load_from_yaml_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        fs::write(
            &path,
            "failure_modes: [A, B]\neffects: [X]\ncauses: [Y]\ndetection_controls: [Z]\n",
        )
        .unwrap();

        assert!(matches!(
            LookupCatalog::load(&path),
            Err(ReliabilityError::InconsistentCatalog { .. })
        ));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        fs::write(&path, "failure_modes: [unterminated\n").unwrap();

        assert!(matches!(
            LookupCatalog::load(&path),
            Err(ReliabilityError::CatalogParse { .. })
        ));
    }
}
