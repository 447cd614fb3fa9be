//! Body Mass Index calculation and banding.

use crate::BmiCategory;

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute BMI from weight in kilograms and height in centimeters
///
/// Returns `None` when either value is missing or zero. A NaN input is not
/// rejected and yields a NaN result.
pub fn compute_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight = weight_kg.filter(|w| *w != 0.0)?;
    let height = height_cm.filter(|h| *h != 0.0)?;

    let height_m = height / 100.0;
    Some(round1(weight / (height_m * height_m)))
}

/// Band a BMI value; boundaries belong to the higher band
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.9 {
        BmiCategory::NormalWeight
    } else if bmi < 29.9 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Parse an optional numeric form field
///
/// Blank, non-numeric and non-finite text is treated as absent.
pub fn parse_measurement(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
