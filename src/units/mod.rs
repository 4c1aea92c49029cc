//! Unit systems and conversion to SI.
//!
//! Restart files store values in the unit convention of the run that wrote
//! them. Everything inside this crate is SI: pressures in pascals,
//! viscosities in pascal-seconds, transmissibilities in m³.
//!
//! # Example
//!
//! ```
//! use ecl_flux::units::{UnitSystem, UnitConverter, unit};
//!
//! let to_si: UnitConverter = UnitSystem::pressure;
//! assert_eq!(to_si(&UnitSystem::Metric), unit::BARSA);
//! ```

use std::fmt;

/// SI prefixes.
pub mod prefix {
    /// 10⁻².
    pub const CENTI: f64 = 1.0e-2;
    /// 10⁻³.
    pub const MILLI: f64 = 1.0e-3;
}

/// SI values of the non-SI units restart data is written in.
pub mod unit {
    /// Pascal.
    pub const PASCAL: f64 = 1.0;
    /// Bar (absolute), 10⁵ Pa.
    pub const BARSA: f64 = 1.0e5;
    /// Pound-force per square inch (absolute).
    pub const PSIA: f64 = 6_894.757_293_168_361;
    /// Standard atmosphere.
    pub const ATM: f64 = 101_325.0;
    /// Poise, 0.1 Pa·s.
    pub const POISE: f64 = 0.1;
}

/// Viscosity every phase is assumed to have when converting relative
/// permeability to mobility: one centipoise, in Pa·s.
///
/// This is a modeling limitation of the single-effective-viscosity flux
/// estimate, not a fluid property.
pub const REFERENCE_VISCOSITY: f64 = 1.0 * prefix::CENTI * unit::POISE;

/// Unit convention of a restart data set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// bar, cP, m.
    #[default]
    Metric,
    /// psi, cP, ft.
    Field,
    /// atm, cP, cm.
    Lab,
    /// PVT-M: atm, cP, m.
    PvtM,
}

impl UnitSystem {
    /// Factor taking a pressure in this unit system to pascals.
    pub fn pressure(&self) -> f64 {
        match self {
            UnitSystem::Metric => unit::BARSA,
            UnitSystem::Field => unit::PSIA,
            UnitSystem::Lab | UnitSystem::PvtM => unit::ATM,
        }
    }

    /// Factor taking a viscosity in this unit system to Pa·s.
    ///
    /// All supported conventions report viscosity in centipoise.
    pub fn viscosity(&self) -> f64 {
        prefix::CENTI * unit::POISE
    }

    /// Identity conversion for dimensionless fields such as saturations.
    pub fn dimensionless(&self) -> f64 {
        1.0
    }

    /// Upper-case name as written in restart headers.
    pub fn name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "METRIC",
            UnitSystem::Field => "FIELD",
            UnitSystem::Lab => "LAB",
            UnitSystem::PvtM => "PVT-M",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conversion selector handed to field extraction, e.g. `UnitSystem::pressure`.
pub type UnitConverter = fn(&UnitSystem) -> f64;
