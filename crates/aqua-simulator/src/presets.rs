//! Named example intervention bundles.

use aqua_types::{SimulationInput, SimulationResult};
use serde::Serialize;

use crate::error::{SimulatorError, SimulatorResult};
use crate::model::simulate;

/// A named intervention bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub input: SimulationInput,
}

const PRESETS: [Preset; 3] = [
    Preset {
        name: "minimal",
        input: SimulationInput::new(2, 15, 50, 10),
    },
    Preset {
        name: "moderate",
        input: SimulationInput::new(7, 45, 200, 35),
    },
    Preset {
        name: "aggressive",
        input: SimulationInput::new(15, 80, 400, 70),
    },
];

/// A preset's inputs together with its projected outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetOutcome {
    pub name: &'static str,
    pub inputs: SimulationInput,
    pub results: SimulationResult,
}

impl Preset {
    pub fn outcome(&self) -> PresetOutcome {
        PresetOutcome {
            name: self.name,
            inputs: self.input,
            results: simulate(&self.input),
        }
    }
}

/// All presets with their outcomes, mildest first.
pub fn presets() -> Vec<PresetOutcome> {
    PRESETS.iter().map(Preset::outcome).collect()
}

/// Look up a preset by name.
pub fn preset(name: &str) -> SimulatorResult<Preset> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .copied()
        .ok_or_else(|| SimulatorError::UnknownPreset(name.to_string()))
}
