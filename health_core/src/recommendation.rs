//! Rule-based advice for a single entry.
//!
//! Advice is assembled from independent fragments in a fixed order:
//! sleep, exercise, diet, ethnicity, BMI. Sleep, exercise and ethnicity
//! always contribute exactly one fragment; diet and BMI may be absent.

use crate::{bmi::bmi_category, Entry};
use std::fmt;

pub const SLEEP_TARGET_HOURS: f64 = 7.0;
pub const EXERCISE_TARGET_MINUTES: f64 = 30.0;

const HEADING: &str = "Based on today’s input:";

/// Diet tokens in match priority order
const DIET_ADVICE: &[(&str, &str)] = &[
    ("vegan", "🥗 Get protein from lentils, tofu, beans."),
    ("vegetarian", "🥕 Balance dairy/eggs with fiber-rich foods."),
    ("omnivore", "🍗 Balance meat with whole grains and veggies."),
];

/// Ethnicity tokens in match priority order; a tip may have several tokens
const ETHNICITY_ADVICE: &[(&[&str], &str)] = &[
    (&["asian"], "🥛 Add calcium-rich foods (less dairy is common)."),
    (
        &["mediterranean"],
        "🐟 Keep olive oil, veggies, and fish in your meals.",
    ),
    (
        &["african"],
        "🌽 Include traditional grains (millet, sorghum) for nutrition.",
    ),
    (
        &["latino", "hispanic"],
        "🍅 Balance rice/beans with fresh vegetables.",
    ),
    (
        &["indian"],
        "🥬 Use spices wisely, and include leafy greens + lentils.",
    ),
    (
        &["nordic"],
        "🥔 Keep whole grains, fish, and root veggies in meals.",
    ),
];

const GENERIC_ETHNICITY_TIP: &str = "🌍 General tip: balance protein, fiber, and hydration.";

/// Which rule produced a fragment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentKind {
    Sleep,
    Exercise,
    Diet,
    Ethnicity,
    Bmi,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

impl Fragment {
    fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Advice for one entry; `Display` renders the full text block
#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub fragments: Vec<Fragment>,
}

impl Recommendation {
    pub fn count(&self, kind: FragmentKind) -> usize {
        self.fragments.iter().filter(|f| f.kind == kind).count()
    }

    pub fn fragment(&self, kind: FragmentKind) -> Option<&Fragment> {
        self.fragments.iter().find(|f| f.kind == kind)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADING)?;
        writeln!(f)?;
        for fragment in &self.fragments {
            if fragment.kind == FragmentKind::Bmi {
                writeln!(f)?;
            }
            writeln!(f, "{}", fragment.text)?;
        }
        Ok(())
    }
}

/// Build the advice for an entry
pub fn generate_recommendation(entry: &Entry) -> Recommendation {
    let mut fragments = Vec::with_capacity(5);

    fragments.push(if entry.sleep_hours < SLEEP_TARGET_HOURS {
        Fragment::new(
            FragmentKind::Sleep,
            "😴 You need more sleep (7–9 hrs is ideal).",
        )
    } else {
        Fragment::new(FragmentKind::Sleep, "✅ Great job on sleep!")
    });

    fragments.push(if entry.exercise_minutes < EXERCISE_TARGET_MINUTES {
        Fragment::new(
            FragmentKind::Exercise,
            "🏃 Aim for at least 30 mins of activity.",
        )
    } else {
        Fragment::new(FragmentKind::Exercise, "💪 Nice workout effort!")
    });

    if let Some(advice) = diet_advice(&entry.diet) {
        fragments.push(Fragment::new(FragmentKind::Diet, advice));
    }

    fragments.push(Fragment::new(
        FragmentKind::Ethnicity,
        ethnicity_advice(&entry.ethnicity),
    ));

    if let Some(bmi) = entry.bmi {
        fragments.push(Fragment::new(
            FragmentKind::Bmi,
            format!("⚖️ Your BMI: {:.1} ({})", bmi, bmi_category(bmi)),
        ));
    }

    Recommendation { fragments }
}

/// First diet tip whose token appears in `diet`, if any
fn diet_advice(diet: &str) -> Option<&'static str> {
    let diet = diet.to_lowercase();
    DIET_ADVICE
        .iter()
        .find(|(token, _)| diet.contains(token))
        .map(|(_, advice)| *advice)
}

/// First ethnicity tip whose tokens appear in `ethnicity`, else the generic tip
fn ethnicity_advice(ethnicity: &str) -> &'static str {
    let ethnicity = ethnicity.to_lowercase();
    ETHNICITY_ADVICE
        .iter()
        .find(|(tokens, _)| tokens.iter().any(|t| ethnicity.contains(t)))
        .map(|(_, advice)| *advice)
        .unwrap_or(GENERIC_ETHNICITY_TIP)
}
