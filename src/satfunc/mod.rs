//! Relative permeability (saturation function) providers.
//!
//! - [`SaturationFunction`]: per-cell relative permeability for a phase
//! - [`CoreyRelperm`]: Brooks-Corey curves evaluated from `SWAT`/`SGAS`

mod corey;
pub mod traits;

pub use corey::{CoreyParams, CoreyRelperm};
pub use traits::{BoxedSaturationFunction, SatFuncError, SaturationFunction};
