use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One `{amount, percentage, apr}` triple of a hand-authored preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PresetPoint {
    pub amount: f64,
    /// Position as a percent of the preset's largest amount (informational).
    pub percentage: f64,
    pub apr: f64,
}

/// A named starting shape for a new range order curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrategyPreset {
    pub name: String,
    pub description: String,
    pub points: Vec<PresetPoint>,
}

const fn pt(amount: f64, percentage: f64, apr: f64) -> PresetPoint {
    PresetPoint {
        amount,
        percentage,
        apr,
    }
}

const CONSERVATIVE: &[PresetPoint] = &[
    pt(0.0, 0.0, 8.0),
    pt(1_000_000.0, 25.0, 6.0),
    pt(2_500_000.0, 62.5, 9.0),
    pt(4_000_000.0, 100.0, 12.0),
];

const BALANCED: &[PresetPoint] = &[
    pt(0.0, 0.0, 45.0),
    pt(900_000.0, 23.08, 19.0),
    pt(3_400_000.0, 87.18, 35.0),
    pt(3_900_000.0, 100.0, 45.0),
];

const AGGRESSIVE: &[PresetPoint] = &[
    pt(0.0, 0.0, 60.0),
    pt(500_000.0, 16.67, 30.0),
    pt(1_500_000.0, 50.0, 40.0),
    pt(3_000_000.0, 100.0, 70.0),
];

fn build(name: &str, description: &str, points: &[PresetPoint]) -> StrategyPreset {
    StrategyPreset {
        name: name.to_string(),
        description: description.to_string(),
        points: points.to_vec(),
    }
}

/// All built-in presets, in display order.
pub fn all() -> Vec<StrategyPreset> {
    vec![
        build(
            "conservative",
            "Low, gently rising rates across a deep range",
            CONSERVATIVE,
        ),
        build(
            "balanced",
            "High entry rate dipping mid-range, recovering at size",
            BALANCED,
        ),
        build(
            "aggressive",
            "Steep rates concentrated in a shallow range",
            AGGRESSIVE,
        ),
    ]
}

/// Look up a built-in preset by name (case-insensitive).
pub fn find(name: &str) -> Option<StrategyPreset> {
    all()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}
