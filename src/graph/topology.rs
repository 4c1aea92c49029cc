//! Cached static topology.
//!
//! A [`Topology`] is copied out of a [`ConnectivityGraph`] once and then read
//! for every flux request, so the graph is never traversed on the hot path.

use crate::types::{CellIndex, ConnectionIndex};

use super::traits::{ConnectivityGraph, GraphError};

/// One connection between two cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    /// Position in the connection list.
    pub index: ConnectionIndex,
    /// First cell; positive flux leaves this cell.
    pub c1: CellIndex,
    /// Second cell; positive flux enters this cell.
    pub c2: CellIndex,
    /// Transmissibility (SI).
    pub transmissibility: f64,
}

impl Connection {
    /// The same connection with its cells in the opposite order.
    pub fn reversed(self) -> Self {
        Self {
            c1: self.c2,
            c2: self.c1,
            ..self
        }
    }
}

/// Validated neighbour/transmissibility arrays.
#[derive(Clone, Debug, PartialEq)]
pub struct Topology {
    neighbours: Vec<usize>,
    transmissibility: Vec<f64>,
    /// Smallest per-cell array length that covers every referenced cell.
    required_cells: usize,
}

impl Topology {
    /// Build from flat arrays.
    ///
    /// # Errors
    /// [`GraphError::TopologyMismatch`] if `neighbours.len() != 2 * transmissibility.len()`,
    /// [`GraphError::InvalidTransmissibility`] for negative or non-finite entries,
    /// [`GraphError::CellOutOfRange`] if a cell index leaves no room for a per-cell array.
    pub fn new(neighbours: Vec<usize>, transmissibility: Vec<f64>) -> Result<Self, GraphError> {
        if neighbours.len() != 2 * transmissibility.len() {
            return Err(GraphError::TopologyMismatch {
                neighbours: neighbours.len(),
                transmissibility: transmissibility.len(),
            });
        }

        if let Some((connection, &value)) = transmissibility
            .iter()
            .enumerate()
            .find(|(_, t)| !t.is_finite() || **t < 0.0)
        {
            return Err(GraphError::InvalidTransmissibility { connection, value });
        }

        let required_cells = match neighbours.iter().max() {
            Some(&cell) => cell.checked_add(1).ok_or(GraphError::CellOutOfRange {
                cell,
                num_cells: usize::MAX,
            })?,
            None => 0,
        };

        Ok(Self {
            neighbours,
            transmissibility,
            required_cells,
        })
    }

    /// Copy and validate the static arrays of a graph.
    pub fn from_graph<G: ConnectivityGraph + ?Sized>(graph: &G) -> Result<Self, GraphError> {
        Self::new(graph.neighbours(), graph.transmissibility())
    }

    /// Number of connections.
    #[inline]
    pub fn num_connections(&self) -> usize {
        self.transmissibility.len()
    }

    /// Minimum length of a per-cell array indexed through this topology.
    #[inline]
    pub fn required_cells(&self) -> usize {
        self.required_cells
    }

    /// Flat neighbour list.
    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }

    /// Transmissibility per connection.
    pub fn transmissibility(&self) -> &[f64] {
        &self.transmissibility
    }

    /// Connection by index.
    ///
    /// # Panics
    /// Panics if `index` is not below [`num_connections`](Self::num_connections).
    #[inline]
    pub fn connection(&self, index: ConnectionIndex) -> Connection {
        let i = index.get();
        Connection {
            index,
            c1: CellIndex::new(self.neighbours[2 * i]),
            c2: CellIndex::new(self.neighbours[2 * i + 1]),
            transmissibility: self.transmissibility[i],
        }
    }

    /// All connections, in order.
    pub fn connections(&self) -> impl ExactSizeIterator<Item = Connection> + '_ {
        (0..self.num_connections()).map(|i| self.connection(ConnectionIndex::new(i)))
    }
}
