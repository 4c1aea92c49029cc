//! Inter-cell flux evaluation.
//!
//! Provides:
//! - Upwind Darcy flux for one connection ([`connection_flux`], [`upwind_cell`],
//!   [`darcy_flux`])
//! - [`FluxCalculator`]: flux on every connection of a graph for a restart
//!   step and phase
//! - [`FluxConfig`]: evaluation options (parallel map, pressure field name)
//!
//! # Upwinding
//!
//! Mobility is taken from the cell with the higher pressure. On a pressure
//! tie the first cell of the connection is upstream, which makes the result
//! deterministic but irrelevant to the flux (the pressure difference is zero).

mod calculator;
mod config;
mod dynamic;
mod upwind;

pub use calculator::{FluxCalculator, FluxError};
pub use config::{FluxConfig, PRESSURE_FIELD};
pub use dynamic::DynamicData;
pub use upwind::{connection_flux, darcy_flux, upwind_cell};
