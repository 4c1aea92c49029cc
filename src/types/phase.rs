//! Fluid phase identifiers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fluid phase of a black-oil model.
///
/// The naming follows the ECLIPSE convention: aqueous (water), liquid (oil)
/// and vapour (gas).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseIndex {
    /// Water.
    Aqua,
    /// Oil.
    Liquid,
    /// Gas.
    Vapour,
}

impl PhaseIndex {
    /// All phases, in canonical order.
    pub const ALL: [PhaseIndex; 3] = [PhaseIndex::Aqua, PhaseIndex::Liquid, PhaseIndex::Vapour];

    /// Canonical upper-case name (`"WATER"`, `"OIL"`, `"GAS"`).
    pub fn name(self) -> &'static str {
        match self {
            PhaseIndex::Aqua => "WATER",
            PhaseIndex::Liquid => "OIL",
            PhaseIndex::Vapour => "GAS",
        }
    }
}

impl fmt::Display for PhaseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a phase name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown phase: {0}")]
pub struct ParsePhaseError(pub String);

impl FromStr for PhaseIndex {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WATER" | "AQUA" | "W" => Ok(PhaseIndex::Aqua),
            "OIL" | "LIQUID" | "O" => Ok(PhaseIndex::Liquid),
            "GAS" | "VAPOUR" | "VAPOR" | "G" => Ok(PhaseIndex::Vapour),
            _ => Err(ParsePhaseError(s.to_string())),
        }
    }
}
