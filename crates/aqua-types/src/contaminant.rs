//! Regulated groundwater contaminants and their safe limits (BIS / WHO).

use serde::{Deserialize, Serialize};

/// Fluoride safe limit in mg/L.
pub const FLUORIDE_SAFE_LIMIT_MGL: f64 = 1.5;

/// Arsenic safe limit in mg/L.
pub const ARSENIC_SAFE_LIMIT_MGL: f64 = 0.01;

/// Iron safe limit in mg/L.
pub const IRON_SAFE_LIMIT_MGL: f64 = 0.3;

/// A contaminant tracked per region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contaminant {
    Fluoride,
    Arsenic,
    Iron,
}

impl Contaminant {
    /// All contaminants, in reporting order.
    pub const ALL: [Contaminant; 3] = [
        Contaminant::Fluoride,
        Contaminant::Arsenic,
        Contaminant::Iron,
    ];

    /// Fixed safe limit in mg/L.
    pub const fn safe_limit(self) -> f64 {
        match self {
            Contaminant::Fluoride => FLUORIDE_SAFE_LIMIT_MGL,
            Contaminant::Arsenic => ARSENIC_SAFE_LIMIT_MGL,
            Contaminant::Iron => IRON_SAFE_LIMIT_MGL,
        }
    }

    /// Lowercase identifier used in payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Contaminant::Fluoride => "fluoride",
            Contaminant::Arsenic => "arsenic",
            Contaminant::Iron => "iron",
        }
    }

    /// Capitalised name used in alert text.
    pub const fn display_name(self) -> &'static str {
        match self {
            Contaminant::Fluoride => "Fluoride",
            Contaminant::Arsenic => "Arsenic",
            Contaminant::Iron => "Iron",
        }
    }
}

impl std::fmt::Display for Contaminant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
