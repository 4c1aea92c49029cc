//! Per-request dynamic field data.

/// Pressure and relative permeability for one report step and phase.
///
/// Both arrays are indexed by active cell. Pressure is in pascals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DynamicData {
    pub pressure: Vec<f64>,
    pub relperm: Vec<f64>,
}

impl DynamicData {
    /// Bundle already-extracted arrays.
    pub fn new(pressure: Vec<f64>, relperm: Vec<f64>) -> Self {
        Self { pressure, relperm }
    }
}
