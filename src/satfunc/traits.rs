//! Saturation function abstraction.

use thiserror::Error;

use crate::graph::{ConnectivityGraph, GraphError};
use crate::restart::RestartData;
use crate::types::PhaseIndex;

/// Errors raised while evaluating relative permeability.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SatFuncError {
    /// Field extraction through the graph failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The phase is not present in this run.
    #[error("Phase {0} is not active")]
    InactivePhase(PhaseIndex),

    /// Curve parameters do not describe a valid saturation range.
    #[error("Invalid saturation function parameters: {0}")]
    InvalidParameters(String),
}

/// Per-cell relative permeability for a phase.
///
/// Implementations pull whatever saturations they need from the restart
/// step through the graph, so the result is indexed by active cell.
pub trait SaturationFunction: Send + Sync {
    /// Relative permeability of `phase` in every active cell of `graph`.
    fn relperm(
        &self,
        graph: &dyn ConnectivityGraph,
        rstrt: &dyn RestartData,
        phase: PhaseIndex,
    ) -> Result<Vec<f64>, SatFuncError>;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Type alias for a boxed saturation function (runtime polymorphism).
pub type BoxedSaturationFunction = Box<dyn SaturationFunction>;

impl<S: SaturationFunction + ?Sized> SaturationFunction for Box<S> {
    fn relperm(
        &self,
        graph: &dyn ConnectivityGraph,
        rstrt: &dyn RestartData,
        phase: PhaseIndex,
    ) -> Result<Vec<f64>, SatFuncError> {
        (**self).relperm(graph, rstrt, phase)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
