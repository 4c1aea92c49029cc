//! Brooks-Corey relative permeability.
//!
//! For phase α with connate/critical saturation S_αc:
//!
//! k_rα = k_rα,max · clamp((S_α - S_αc) / (1 - S_wc - S_or - S_gc), 0, 1)^n_α
//!
//! Saturations are read from the `SWAT` and `SGAS` restart fields. Oil
//! saturation is `1 - SWAT - SGAS`. A step without `SGAS` is treated as an
//! oil-water run: gas saturation is zero and the gas phase is inactive.

use crate::graph::ConnectivityGraph;
use crate::restart::RestartData;
use crate::types::PhaseIndex;
use crate::units::UnitSystem;

use super::traits::{SatFuncError, SaturationFunction};

/// Curve end points and exponents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoreyParams {
    /// Connate water saturation.
    pub swc: f64,
    /// Residual oil saturation.
    pub sor: f64,
    /// Critical gas saturation.
    pub sgc: f64,
    /// Water exponent.
    pub n_water: f64,
    /// Oil exponent.
    pub n_oil: f64,
    /// Gas exponent.
    pub n_gas: f64,
    /// Water relative permeability at maximum water saturation.
    pub krw_max: f64,
    /// Oil relative permeability at maximum oil saturation.
    pub kro_max: f64,
    /// Gas relative permeability at maximum gas saturation.
    pub krg_max: f64,
}

impl Default for CoreyParams {
    fn default() -> Self {
        Self {
            swc: 0.0,
            sor: 0.0,
            sgc: 0.0,
            n_water: 2.0,
            n_oil: 2.0,
            n_gas: 2.0,
            krw_max: 1.0,
            kro_max: 1.0,
            krg_max: 1.0,
        }
    }
}

impl CoreyParams {
    /// Set residual saturations.
    pub fn with_residuals(mut self, swc: f64, sor: f64, sgc: f64) -> Self {
        self.swc = swc;
        self.sor = sor;
        self.sgc = sgc;
        self
    }

    /// Set the Corey exponents.
    pub fn with_exponents(mut self, n_water: f64, n_oil: f64, n_gas: f64) -> Self {
        self.n_water = n_water;
        self.n_oil = n_oil;
        self.n_gas = n_gas;
        self
    }

    /// Set the end-point relative permeabilities.
    pub fn with_end_points(mut self, krw_max: f64, kro_max: f64, krg_max: f64) -> Self {
        self.krw_max = krw_max;
        self.kro_max = kro_max;
        self.krg_max = krg_max;
        self
    }

    /// Width of the mobile saturation range.
    #[inline]
    fn mobile_range(&self) -> f64 {
        1.0 - self.swc - self.sor - self.sgc
    }

    fn validate(&self) -> Result<(), SatFuncError> {
        let residuals = [self.swc, self.sor, self.sgc];
        if residuals.iter().any(|s| !(0.0..1.0).contains(s)) {
            return Err(SatFuncError::InvalidParameters(format!(
                "residual saturations must lie in [0, 1), got swc={}, sor={}, sgc={}",
                self.swc, self.sor, self.sgc
            )));
        }
        if self.mobile_range() <= 0.0 {
            return Err(SatFuncError::InvalidParameters(format!(
                "empty mobile saturation range: 1 - swc - sor - sgc = {}",
                self.mobile_range()
            )));
        }
        if [self.n_water, self.n_oil, self.n_gas]
            .iter()
            .any(|n| !n.is_finite() || *n <= 0.0)
        {
            return Err(SatFuncError::InvalidParameters(
                "Corey exponents must be positive".to_string(),
            ));
        }
        if [self.krw_max, self.kro_max, self.krg_max]
            .iter()
            .any(|k| !(0.0..=1.0).contains(k))
        {
            return Err(SatFuncError::InvalidParameters(
                "end-point relative permeabilities must lie in [0, 1]".to_string(),
            ));
        }
        Ok(())
    }

    /// Relative permeability of one phase at the given phase saturation.
    pub fn kr(&self, phase: PhaseIndex, saturation: f64) -> f64 {
        let (critical, exponent, kr_max) = match phase {
            PhaseIndex::Aqua => (self.swc, self.n_water, self.krw_max),
            PhaseIndex::Liquid => (self.sor, self.n_oil, self.kro_max),
            PhaseIndex::Vapour => (self.sgc, self.n_gas, self.krg_max),
        };
        let normalized = ((saturation - critical) / self.mobile_range()).clamp(0.0, 1.0);
        kr_max * normalized.powf(exponent)
    }
}

/// Brooks-Corey saturation function shared by all cells.
///
/// # Example
/// ```
/// use ecl_flux::satfunc::{CoreyParams, CoreyRelperm};
/// use ecl_flux::types::PhaseIndex;
///
/// let satfunc = CoreyRelperm::new(CoreyParams::default().with_residuals(0.2, 0.2, 0.0)).unwrap();
/// assert_eq!(satfunc.params().kr(PhaseIndex::Aqua, 0.2), 0.0);
/// assert_eq!(satfunc.params().kr(PhaseIndex::Aqua, 0.8), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct CoreyRelperm {
    params: CoreyParams,
}

impl CoreyRelperm {
    /// Water saturation field name.
    pub const WATER_SATURATION: &'static str = "SWAT";
    /// Gas saturation field name.
    pub const GAS_SATURATION: &'static str = "SGAS";

    /// Validate parameters and build the saturation function.
    pub fn new(params: CoreyParams) -> Result<Self, SatFuncError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Curve parameters.
    pub fn params(&self) -> &CoreyParams {
        &self.params
    }

    /// Phase saturation per active cell.
    fn saturation(
        &self,
        graph: &dyn ConnectivityGraph,
        rstrt: &dyn RestartData,
        phase: PhaseIndex,
    ) -> Result<Vec<f64>, SatFuncError> {
        let has_gas = rstrt.has_field(Self::GAS_SATURATION);
        let extract = |name: &str| {
            graph
                .linearised_cell_data(rstrt, name, UnitSystem::dimensionless)
                .map_err(SatFuncError::from)
        };

        match phase {
            PhaseIndex::Aqua => extract(Self::WATER_SATURATION),
            PhaseIndex::Vapour if has_gas => extract(Self::GAS_SATURATION),
            PhaseIndex::Vapour => Err(SatFuncError::InactivePhase(phase)),
            PhaseIndex::Liquid => {
                let mut so = extract(Self::WATER_SATURATION)?;
                so.iter_mut().for_each(|s| *s = 1.0 - *s);
                if has_gas {
                    let sg = extract(Self::GAS_SATURATION)?;
                    so.iter_mut().zip(&sg).for_each(|(s, g)| *s -= g);
                }
                Ok(so)
            }
        }
    }
}

impl SaturationFunction for CoreyRelperm {
    fn relperm(
        &self,
        graph: &dyn ConnectivityGraph,
        rstrt: &dyn RestartData,
        phase: PhaseIndex,
    ) -> Result<Vec<f64>, SatFuncError> {
        let saturation = self.saturation(graph, rstrt, phase)?;
        Ok(saturation
            .into_iter()
            .map(|s| self.params.kr(phase, s))
            .collect())
    }

    fn name(&self) -> &'static str {
        "brooks-corey"
    }
}
