//! Core domain types for Healthlog.
//!
//! This module defines the fundamental types used throughout the system:
//! - Daily entries and the form values they are built from
//! - BMI categories
//! - Aggregated views (weekly averages, chart series)

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Entry Types
// ============================================================================

/// Values submitted for one day, before an [`Entry`] exists
///
/// This is also what the edit workflow hands back for re-entry.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryInput {
    pub sleep_hours: f64,
    pub exercise_minutes: f64,
    pub diet: String,
    pub ethnicity: String,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

/// One day's stored record
///
/// `bmi` is derived once at creation and never recomputed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_nan")]
    pub sleep_hours: f64,
    #[serde(deserialize_with = "null_as_nan")]
    pub exercise_minutes: f64,
    pub diet: String,
    pub ethnicity: String,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub bmi: Option<f64>,
}

/// JSON has no NaN or infinity; serde_json writes them as `null`
fn null_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Entry {
    /// Build an entry from submitted values
    ///
    /// Category strings are stored lowercased; BMI is present only when
    /// both height and weight are present and non-zero.
    pub fn new(input: EntryInput) -> Self {
        let bmi = crate::bmi::compute_bmi(input.weight_kg, input.height_cm);
        Self {
            id: Uuid::new_v4(),
            sleep_hours: input.sleep_hours,
            exercise_minutes: input.exercise_minutes,
            diet: input.diet.to_lowercase(),
            ethnicity: input.ethnicity.to_lowercase(),
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            bmi,
        }
    }

    /// The submitted values, as presented again for editing
    pub fn to_input(&self) -> EntryInput {
        EntryInput {
            sleep_hours: self.sleep_hours,
            exercise_minutes: self.exercise_minutes,
            diet: self.diet.clone(),
            ethnicity: self.ethnicity.clone(),
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
        }
    }

    /// Category for the stored BMI, if there is one
    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi.map(crate::bmi::bmi_category)
    }
}

impl From<EntryInput> for Entry {
    fn from(input: EntryInput) -> Self {
        Entry::new(input)
    }
}

// ============================================================================
// BMI Types
// ============================================================================

/// Weight band derived from a BMI value
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Aggregate Types
// ============================================================================

/// Rolling averages over the most recent entries
#[derive(Clone, Debug, PartialEq)]
pub enum WeeklyAverages {
    /// The collection is empty
    NoData,
    /// Means over the trailing window, rounded to one decimal
    Available {
        avg_sleep: f64,
        avg_exercise: f64,
        /// Number of entries the means were taken over (at most 7)
        days: usize,
    },
}

/// A labelled time series with one point per entry, keyed "Day N"
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub points: Vec<(String, f64)>,
}

impl ChartSeries {
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|(label, _)| label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, value)| *value)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
