//! Strongly-typed domain types.
//!
//! - Index newtypes keep cell and connection numbering apart.
//! - [`PhaseIndex`] names the fluid phase a flux request is made for.
//!
//! # Example
//!
//! ```
//! use ecl_flux::types::{CellIndex, PhaseIndex};
//!
//! let oil: PhaseIndex = "OIL".parse().unwrap();
//! assert_eq!(oil, PhaseIndex::Liquid);
//! assert_eq!(CellIndex::new(5).get(), 5);
//! ```

mod indices;
mod phase;

pub use indices::{CellIndex, ConnectionIndex};
pub use phase::{ParsePhaseError, PhaseIndex};
