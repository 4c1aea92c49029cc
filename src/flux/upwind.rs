//! Upwind Darcy flux across a single connection.
//!
//! For a connection (c1, c2) with transmissibility T:
//!
//! q = (k_r,up / μ) · T · (p₁ - p₂)
//!
//! where "up" is the cell with the higher pressure (c1 on ties) and μ is
//! [`REFERENCE_VISCOSITY`]. Positive q flows from c1 to c2.

use crate::graph::Connection;
use crate::types::CellIndex;
use crate::units::REFERENCE_VISCOSITY;

/// Upstream cell of a connection.
///
/// `c2` only if its pressure is strictly higher; `c1` otherwise, including
/// when the pressures are equal.
#[inline]
pub fn upwind_cell(c1: CellIndex, c2: CellIndex, pressure: &[f64]) -> CellIndex {
    if pressure[c2] > pressure[c1] { c2 } else { c1 }
}

/// Darcy flux given the upstream relative permeability.
///
/// # Arguments
/// * `kr_upstream` - Relative permeability of the upstream cell
/// * `transmissibility` - Connection transmissibility (SI)
/// * `p1` - Pressure in the first cell (Pa)
/// * `p2` - Pressure in the second cell (Pa)
///
/// # Returns
/// Volumetric flux from the first cell to the second (m³/s).
#[inline]
pub fn darcy_flux(kr_upstream: f64, transmissibility: f64, p1: f64, p2: f64) -> f64 {
    let mobility = kr_upstream / REFERENCE_VISCOSITY;
    mobility * transmissibility * (p1 - p2)
}

/// Flux across `conn` for the given per-cell pressure and relative
/// permeability.
///
/// # Panics
/// Panics if either cell of the connection is out of range for `pressure`
/// or `relperm`.
#[inline]
pub fn connection_flux(conn: &Connection, pressure: &[f64], relperm: &[f64]) -> f64 {
    let upwind = upwind_cell(conn.c1, conn.c2, pressure);
    darcy_flux(
        relperm[upwind],
        conn.transmissibility,
        pressure[conn.c1],
        pressure[conn.c2],
    )
}
