//! # AquaSentinel Simulator
//!
//! Closed-form projection of what a bundle of mitigation levers (check dams,
//! drip irrigation, rainwater harvesting, crop diversification) does to a
//! region's groundwater outlook.
//!
//! ## Example
//!
//! ```
//! use aqua_simulator::run;
//! use aqua_types::{SimulationInput, Verdict};
//!
//! let result = run(&SimulationInput::new(15, 80, 400, 70)).unwrap();
//! assert_eq!(result.verdict, Verdict::Strong);
//! assert_eq!(result.extraction_reduction_pct, 49);
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod error;
mod model;
mod presets;

pub use error::{SimulatorError, SimulatorResult};
pub use model::{run, simulate, validate, MAX_EXTRACTION_REDUCTION_PCT};
pub use presets::{preset, presets, Preset, PresetOutcome};
