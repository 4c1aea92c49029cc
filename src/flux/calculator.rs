//! Per-connection flux evaluation for a restart step.
//!
//! The calculator binds a graph's static topology once, then for every
//! request extracts pressure and relative permeability and maps
//! [`connection_flux`] over all connections. Connections are independent,
//! so with the `parallel` feature the map can run on rayon's pool.

use thiserror::Error;

use crate::graph::{ConnectivityGraph, GraphError, Topology};
use crate::restart::RestartData;
use crate::satfunc::{SatFuncError, SaturationFunction};
use crate::types::{ConnectionIndex, PhaseIndex};
use crate::units::UnitSystem;

use super::config::FluxConfig;
use super::dynamic::DynamicData;
use super::upwind::connection_flux;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Errors from a flux calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FluxError {
    /// Graph query or field extraction failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Relative permeability evaluation failed.
    #[error(transparent)]
    SatFunc(#[from] SatFuncError),

    /// A dynamic array does not cover every cell the connections reference.
    #[error("Dynamic field {field} has {actual} values, connections reference {required} cells")]
    ShapeMismatch {
        field: &'static str,
        required: usize,
        actual: usize,
    },
}

/// Upwind flux calculator over a borrowed connectivity graph.
///
/// The graph must outlive the calculator (`'g`); the saturation function is
/// owned. Flux requests take `&self` and never change the calculator.
///
/// Every phase is assumed to have the viscosity
/// [`REFERENCE_VISCOSITY`](crate::units::REFERENCE_VISCOSITY). The fluxes
/// are therefore a single-effective-viscosity estimate, not phase rates.
///
/// # Example
/// ```
/// use ecl_flux::flux::FluxCalculator;
/// use ecl_flux::graph::InMemoryGraph;
/// use ecl_flux::restart::InMemoryRestart;
/// use ecl_flux::satfunc::{CoreyParams, CoreyRelperm};
/// use ecl_flux::types::PhaseIndex;
///
/// let graph = InMemoryGraph::cartesian([3, 1, 1], [1.0e-12, 0.0, 0.0]);
/// let satfunc = CoreyRelperm::new(CoreyParams::default()).unwrap();
/// let calc = FluxCalculator::new(&graph, satfunc).unwrap();
///
/// let rstrt = InMemoryRestart::new()
///     .with_field("PRESSURE", vec![250.0, 240.0, 240.0])
///     .with_field("SWAT", vec![0.3, 0.3, 0.3]);
///
/// let q = calc.flux(&rstrt, PhaseIndex::Aqua).unwrap();
/// assert_eq!(q.len(), 2);
/// assert!(q[0] > 0.0);
/// assert_eq!(q[1], 0.0);
/// ```
pub struct FluxCalculator<'g, G: ConnectivityGraph, S: SaturationFunction> {
    graph: &'g G,
    satfunc: S,
    topology: Topology,
    config: FluxConfig,
}

impl<'g, G: ConnectivityGraph, S: SaturationFunction> FluxCalculator<'g, G, S> {
    /// Bind `graph` with default options.
    ///
    /// # Errors
    /// Propagates graph errors and rejects malformed topology.
    pub fn new(graph: &'g G, satfunc: S) -> Result<Self, FluxError> {
        Self::with_config(graph, satfunc, FluxConfig::default())
    }

    /// Bind `graph` with explicit options.
    pub fn with_config(graph: &'g G, satfunc: S, config: FluxConfig) -> Result<Self, FluxError> {
        let topology = Topology::from_graph(graph)?;
        log::debug!(
            "Bound flux topology: {} connections over {} cells ({} saturation function)",
            topology.num_connections(),
            graph.num_cells(),
            satfunc.name()
        );

        Ok(Self {
            graph,
            satfunc,
            topology,
            config,
        })
    }

    /// Flux on every connection for `phase` at the given restart step.
    ///
    /// The result has one entry per connection, in connection order.
    /// Positive values flow from the first cell of a connection to the second.
    ///
    /// # Errors
    /// Any failure of the graph or saturation function is returned as-is;
    /// no partial result is produced.
    pub fn flux(&self, rstrt: &dyn RestartData, phase: PhaseIndex) -> Result<Vec<f64>, FluxError> {
        let dyn_data = self.dynamic_data(rstrt, phase)?;
        log::trace!(
            "Evaluating {} flux on {} connections ({})",
            phase,
            self.topology.num_connections(),
            if self.config.runs_parallel() { "parallel" } else { "serial" }
        );
        Ok(self.evaluate(&dyn_data.pressure, &dyn_data.relperm))
    }

    /// Flux for several phases, extracting pressure once.
    ///
    /// Returns one flux vector per entry of `phases`, in the same order.
    pub fn flux_by_phase(
        &self,
        rstrt: &dyn RestartData,
        phases: &[PhaseIndex],
    ) -> Result<Vec<Vec<f64>>, FluxError> {
        let pressure = self.pressure(rstrt)?;
        phases
            .iter()
            .map(|&phase| {
                let relperm = self.relperm(rstrt, phase)?;
                Ok(self.evaluate(&pressure, &relperm))
            })
            .collect()
    }

    /// Extract the dynamic fields a flux request reads.
    pub fn dynamic_data(
        &self,
        rstrt: &dyn RestartData,
        phase: PhaseIndex,
    ) -> Result<DynamicData, FluxError> {
        let pressure = self.pressure(rstrt)?;
        let relperm = self.relperm(rstrt, phase)?;
        Ok(DynamicData::new(pressure, relperm))
    }

    /// Flux across a single connection.
    ///
    /// # Panics
    /// Panics if `connection` is out of range, or if `dyn_data` does not
    /// cover the connection's cells.
    pub fn single_flux(&self, connection: ConnectionIndex, dyn_data: &DynamicData) -> f64 {
        connection_flux(
            &self.topology.connection(connection),
            &dyn_data.pressure,
            &dyn_data.relperm,
        )
    }

    /// Number of connections, i.e. the length of every flux vector.
    pub fn num_connections(&self) -> usize {
        self.topology.num_connections()
    }

    /// Cached static topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The bound graph.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// The owned saturation function.
    pub fn saturation_function(&self) -> &S {
        &self.satfunc
    }

    /// Evaluation options.
    pub fn config(&self) -> &FluxConfig {
        &self.config
    }

    fn pressure(&self, rstrt: &dyn RestartData) -> Result<Vec<f64>, FluxError> {
        let pressure = self.graph.linearised_cell_data(
            rstrt,
            &self.config.pressure_field,
            UnitSystem::pressure,
        )?;
        self.check_coverage("pressure", pressure.len())?;
        Ok(pressure)
    }

    fn relperm(&self, rstrt: &dyn RestartData, phase: PhaseIndex) -> Result<Vec<f64>, FluxError> {
        let relperm = self.satfunc.relperm(self.graph, rstrt, phase)?;
        self.check_coverage("relperm", relperm.len())?;
        Ok(relperm)
    }

    fn check_coverage(&self, field: &'static str, actual: usize) -> Result<(), FluxError> {
        let required = self.topology.required_cells();
        if actual < required {
            return Err(FluxError::ShapeMismatch {
                field,
                required,
                actual,
            });
        }
        Ok(())
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate(&self, pressure: &[f64], relperm: &[f64]) -> Vec<f64> {
        self.evaluate_serial(pressure, relperm)
    }

    #[cfg(feature = "parallel")]
    fn evaluate(&self, pressure: &[f64], relperm: &[f64]) -> Vec<f64> {
        if self.config.parallel {
            self.evaluate_parallel(pressure, relperm)
        } else {
            self.evaluate_serial(pressure, relperm)
        }
    }

    fn evaluate_serial(&self, pressure: &[f64], relperm: &[f64]) -> Vec<f64> {
        self.topology
            .connections()
            .map(|conn| connection_flux(&conn, pressure, relperm))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_parallel(&self, pressure: &[f64], relperm: &[f64]) -> Vec<f64> {
        let topology = &self.topology;
        (0..topology.num_connections())
            .into_par_iter()
            .map(|i| {
                let conn = topology.connection(ConnectionIndex::new(i));
                connection_flux(&conn, pressure, relperm)
            })
            .collect()
    }
}
