//! Connectivity graph abstraction.

use thiserror::Error;

use crate::restart::RestartData;
use crate::units::UnitConverter;

/// Errors raised by a connectivity graph or by topology validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Neighbour and transmissibility arrays disagree on connection count.
    #[error(
        "Topology mismatch: {neighbours} neighbour entries for {transmissibility} transmissibilities"
    )]
    TopologyMismatch {
        neighbours: usize,
        transmissibility: usize,
    },

    /// Transmissibility is negative or not finite.
    #[error("Invalid transmissibility {value} on connection {connection}")]
    InvalidTransmissibility { connection: usize, value: f64 },

    /// A connection references a cell the graph does not have.
    #[error("Cell {cell} out of range for graph with {num_cells} cells")]
    CellOutOfRange { cell: usize, num_cells: usize },

    /// The restart step does not carry the requested field.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A field's length matches neither the active nor the global cell count.
    #[error("Field {field} has {actual} values, expected {expected}")]
    CellCountMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },
}

/// Static connectivity of a grid plus field linearisation.
///
/// Connections are numbered `0..n` in the order the graph reports them.
/// `neighbours()[2 * i]` and `neighbours()[2 * i + 1]` are the two cells of
/// connection `i`, and `transmissibility()[i]` its transmissibility in SI
/// units. Positive flux on connection `i` runs from the first cell to the
/// second.
pub trait ConnectivityGraph: Send + Sync {
    /// Number of active cells, i.e. the length of every linearised field.
    fn num_cells(&self) -> usize;

    /// Flat neighbour list, two cell indices per connection.
    fn neighbours(&self) -> Vec<usize>;

    /// Transmissibility per connection.
    fn transmissibility(&self) -> Vec<f64>;

    /// Extract a named field from a restart step as one value per active
    /// cell, scaled to SI by `unit` applied to the restart's unit system.
    ///
    /// # Errors
    /// [`GraphError::MissingField`] if the step lacks the field and
    /// [`GraphError::CellCountMismatch`] if its length cannot be mapped onto
    /// the cells of this graph.
    fn linearised_cell_data(
        &self,
        rstrt: &dyn RestartData,
        vector: &str,
        unit: UnitConverter,
    ) -> Result<Vec<f64>, GraphError>;

    /// Number of connections.
    fn num_connections(&self) -> usize {
        self.transmissibility().len()
    }
}
