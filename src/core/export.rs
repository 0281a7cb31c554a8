//! CSV export of FMEA tables
//!
//! Text fields are transliterated to ASCII before writing so the file opens
//! cleanly in spreadsheet tools regardless of their encoding guess.

use deunicode::deunicode;
use std::fs;
use std::path::Path;

use crate::core::error::ReliabilityError;
use crate::entities::fmea::{FmeaEntry, FmeaTable};

/// File name used when the caller does not pick one
pub const DEFAULT_EXPORT_FILE: &str = "resultados_fmea.csv";

/// Strip diacritics and transliterate to ASCII
pub fn strip_accents(text: &str) -> String {
    if text.is_empty() || text.is_ascii() {
        return text.to_string();
    }
    deunicode(text)
}

/// Serialize the table as CSV with a header row
pub fn export(table: &FmeaTable) -> Result<Vec<u8>, ReliabilityError> {
    if table.is_empty() {
        return Err(ReliabilityError::EmptyExport);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in table {
        writer.serialize(entry.map_fields(strip_accents))?;
    }
    writer
        .into_inner()
        .map_err(|e| ReliabilityError::Io(e.into_error()))
}

/// Export the table and write it to `path`
pub fn write_to(table: &FmeaTable, path: &Path) -> Result<usize, ReliabilityError> {
    let bytes = export(table)?;
    fs::write(path, &bytes)?;
    Ok(table.len())
}

/// Read an exported CSV back into rows
pub fn parse(bytes: &[u8]) -> Result<Vec<FmeaEntry>, ReliabilityError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        entries.push(record?);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fmea;
    use crate::entities::catalog::LookupCatalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn entry(failure_mode: &str, effect: &str, cause: &str, detection_control: &str) -> FmeaEntry {
        FmeaEntry {
            failure_mode: failure_mode.to_string(),
            effect: effect.to_string(),
            cause: cause.to_string(),
            detection_control: detection_control.to_string(),
        }
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("Señal defectuosa"), "Senal defectuosa");
        assert_eq!(strip_accents("Pérdida de eficiencia"), "Perdida de eficiencia");
        assert_eq!(strip_accents("Calibración de sensores"), "Calibracion de sensores");
        assert_eq!(strip_accents(""), "");
        assert_eq!(strip_accents("plain"), "plain");
    }

    #[test]
    fn test_export_strips_accents() {
        let table = FmeaTable::new(vec![entry(
            "Señal defectuosa",
            "Daño en componentes",
            "Lubricación inadecuada",
            "Calibración de sensores",
        )]);

        let bytes = export(&table).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("Senal defectuosa"));
        assert!(text.contains("Dano en componentes"));
        assert!(!text.contains('ñ'));
        assert!(text.is_ascii());
    }

    #[test]
    fn test_export_header_row() {
        let table = FmeaTable::new(vec![entry("A", "B", "C", "D")]);
        let text = String::from_utf8(export(&table).unwrap()).unwrap();

        assert_eq!(
            text,
            "failure_mode,effect,cause,detection_control\nA,B,C,D\n"
        );
    }

    #[test]
    fn test_export_quotes_embedded_delimiters() {
        let table = FmeaTable::new(vec![entry("Leak, minor", "Says \"hi\"", "C", "")]);
        let text = String::from_utf8(export(&table).unwrap()).unwrap();

        assert!(text.contains("\"Leak, minor\""));
        assert!(text.contains("\"Says \"\"hi\"\"\""));

        let parsed = parse(text.as_bytes()).unwrap();
        assert_eq!(parsed[0].failure_mode, "Leak, minor");
        assert_eq!(parsed[0].effect, "Says \"hi\"");
        assert_eq!(parsed[0].detection_control, "");
    }

    #[test]
    fn test_export_empty_table_fails() {
        let result = export(&FmeaTable::default());
        assert!(matches!(result, Err(ReliabilityError::EmptyExport)));
    }

    #[test]
    fn test_round_trip_preserves_rows() {
        let catalog = LookupCatalog::gas_compression();
        let mut rng = StdRng::seed_from_u64(42);
        let table = fmea::build(&mut rng, 12, &catalog);

        let parsed = parse(&export(&table).unwrap()).unwrap();

        assert_eq!(parsed.len(), table.len());
        for (original, read_back) in table.iter().zip(&parsed) {
            assert_eq!(*read_back, original.map_fields(strip_accents));
        }
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        let table = FmeaTable::new(vec![entry("Fuga de gas", "E", "C", "D")]);

        let rows = write_to(&table, &path).unwrap();

        assert_eq!(rows, 1);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("failure_mode,"));
        assert!(content.contains("Fuga de gas"));
    }

    #[test]
    fn test_write_to_empty_table_creates_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        assert!(write_to(&FmeaTable::default(), &path).is_err());
        assert!(!path.exists());
    }
}
