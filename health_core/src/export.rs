//! CSV export of the entry collection.
//!
//! `Day` is the 1-based position at export time. Absent measurements and an
//! absent BMI export as empty cells.

use crate::{Entry, Error, Result};
use std::path::Path;

/// File name used when no output path is configured
pub const DEFAULT_EXPORT_FILE: &str = "health_data.csv";

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    #[serde(rename = "Day")]
    day: usize,
    #[serde(rename = "Sleep")]
    sleep: String,
    #[serde(rename = "Exercise")]
    exercise: String,
    #[serde(rename = "Diet")]
    diet: String,
    #[serde(rename = "Ethnicity")]
    ethnicity: String,
    #[serde(rename = "Height(cm)")]
    height_cm: Option<String>,
    #[serde(rename = "Weight(kg)")]
    weight_kg: Option<String>,
    #[serde(rename = "BMI")]
    bmi: Option<String>,
}

impl CsvRow {
    fn new(index: usize, entry: &Entry) -> Self {
        CsvRow {
            day: index + 1,
            sleep: entry.sleep_hours.to_string(),
            exercise: entry.exercise_minutes.to_string(),
            diet: entry.diet.clone(),
            ethnicity: entry.ethnicity.clone(),
            height_cm: entry.height_cm.map(|h| h.to_string()),
            weight_kg: entry.weight_kg.map(|w| w.to_string()),
            bmi: entry.bmi.map(|b| format!("{:.1}", b)),
        }
    }
}

/// Serialize the collection to CSV text
///
/// Refuses an empty collection with [`Error::NothingToExport`].
pub fn export_csv(entries: &[Entry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_rows(&mut writer, entries)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Write the collection as CSV to `path`, creating parent directories
///
/// Returns the number of rows written. No file is created for an empty
/// collection.
pub fn write_export(entries: &[Entry], path: &Path) -> Result<usize> {
    if entries.is_empty() {
        return Err(Error::NothingToExport);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    write_rows(&mut writer, entries)?;

    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    file.sync_all()?;

    tracing::info!("Exported {} entries to {:?}", entries.len(), path);
    Ok(entries.len())
}

fn write_rows<W: std::io::Write>(writer: &mut csv::Writer<W>, entries: &[Entry]) -> Result<()> {
    if entries.is_empty() {
        return Err(Error::NothingToExport);
    }

    for (index, entry) in entries.iter().enumerate() {
        writer.serialize(CsvRow::new(index, entry))?;
    }
    writer.flush()?;
    Ok(())
}
