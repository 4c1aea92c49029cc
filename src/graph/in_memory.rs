//! In-memory connectivity graph.
//!
//! Holds an explicit neighbour list. Cells are numbered in active order; an
//! optional active-to-global map lets restart fields written for the full
//! (global) grid be gathered onto active cells, as ECLIPSE output with
//! inactive cells requires.

use crate::restart::RestartData;
use crate::units::UnitConverter;

use super::traits::{ConnectivityGraph, GraphError};

/// Connectivity graph stored as plain vectors.
///
/// # Example
/// ```
/// use ecl_flux::graph::{ConnectivityGraph, InMemoryGraph};
///
/// // 3 x 1 x 1 box, transmissibility 1e-12 m³ in x.
/// let graph = InMemoryGraph::cartesian([3, 1, 1], [1.0e-12, 0.0, 0.0]);
/// assert_eq!(graph.num_cells(), 3);
/// assert_eq!(graph.neighbours(), vec![0, 1, 1, 2]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryGraph {
    num_cells: usize,
    neighbours: Vec<usize>,
    transmissibility: Vec<f64>,
    /// `active_to_global[a]` is the global cell number of active cell `a`.
    active_to_global: Option<Vec<usize>>,
    global_cells: usize,
}

impl InMemoryGraph {
    /// Graph with `num_cells` active cells and no connections.
    pub fn new(num_cells: usize) -> Self {
        Self {
            num_cells,
            global_cells: num_cells,
            ..Self::default()
        }
    }

    /// Graph from flat arrays, checking that every cell is in range.
    pub fn from_connections(
        num_cells: usize,
        neighbours: Vec<usize>,
        transmissibility: Vec<f64>,
    ) -> Result<Self, GraphError> {
        if neighbours.len() != 2 * transmissibility.len() {
            return Err(GraphError::TopologyMismatch {
                neighbours: neighbours.len(),
                transmissibility: transmissibility.len(),
            });
        }
        if let Some(&cell) = neighbours.iter().find(|&&c| c >= num_cells) {
            return Err(GraphError::CellOutOfRange { cell, num_cells });
        }

        Ok(Self {
            neighbours,
            transmissibility,
            ..Self::new(num_cells)
        })
    }

    /// Regular `nx * ny * nz` box with constant transmissibility per axis.
    ///
    /// Cells are numbered `i + nx * (j + ny * k)`. Connections are listed
    /// axis by axis (all x faces, then y, then z), each from the lower to the
    /// higher cell. An axis with zero transmissibility still gets its
    /// connections.
    pub fn cartesian(dims: [usize; 3], trans: [f64; 3]) -> Self {
        let [nx, ny, nz] = dims;
        let cell = |i: usize, j: usize, k: usize| i + nx * (j + ny * k);

        let mut graph = Self::new(nx * ny * nz);
        for (axis, &t) in trans.iter().enumerate() {
            for k in 0..nz {
                for j in 0..ny {
                    for i in 0..nx {
                        let next = match axis {
                            0 if i + 1 < nx => Some(cell(i + 1, j, k)),
                            1 if j + 1 < ny => Some(cell(i, j + 1, k)),
                            2 if k + 1 < nz => Some(cell(i, j, k + 1)),
                            _ => None,
                        };
                        if let Some(other) = next {
                            graph.neighbours.extend([cell(i, j, k), other]);
                            graph.transmissibility.push(t);
                        }
                    }
                }
            }
        }
        graph
    }

    /// Append a connection, returning its index.
    pub fn add_connection(
        &mut self,
        c1: usize,
        c2: usize,
        transmissibility: f64,
    ) -> Result<usize, GraphError> {
        for cell in [c1, c2] {
            if cell >= self.num_cells {
                return Err(GraphError::CellOutOfRange {
                    cell,
                    num_cells: self.num_cells,
                });
            }
        }
        self.neighbours.extend([c1, c2]);
        self.transmissibility.push(transmissibility);
        Ok(self.transmissibility.len() - 1)
    }

    /// Declare the global grid size and which global cells are active.
    ///
    /// Restart fields may then have either `num_cells` values (already
    /// active-ordered) or `global_cells` values (gathered through the map).
    pub fn with_active_cells(
        mut self,
        global_cells: usize,
        active_to_global: Vec<usize>,
    ) -> Result<Self, GraphError> {
        if active_to_global.len() != self.num_cells {
            return Err(GraphError::CellCountMismatch {
                field: "ACTNUM".to_string(),
                expected: self.num_cells,
                actual: active_to_global.len(),
            });
        }
        if let Some(&cell) = active_to_global.iter().find(|&&g| g >= global_cells) {
            return Err(GraphError::CellOutOfRange {
                cell,
                num_cells: global_cells,
            });
        }
        self.global_cells = global_cells;
        self.active_to_global = Some(active_to_global);
        Ok(self)
    }
}

impl ConnectivityGraph for InMemoryGraph {
    fn num_cells(&self) -> usize {
        self.num_cells
    }

    fn neighbours(&self) -> Vec<usize> {
        self.neighbours.clone()
    }

    fn transmissibility(&self) -> Vec<f64> {
        self.transmissibility.clone()
    }

    fn linearised_cell_data(
        &self,
        rstrt: &dyn RestartData,
        vector: &str,
        unit: UnitConverter,
    ) -> Result<Vec<f64>, GraphError> {
        let raw = rstrt
            .field(vector)
            .ok_or_else(|| GraphError::MissingField(vector.to_string()))?;
        let scale = unit(&rstrt.unit_system());

        // A global-length field goes through the map even when the global and
        // active counts coincide.
        match &self.active_to_global {
            Some(map) if raw.len() == self.global_cells => {
                Ok(map.iter().map(|&g| raw[g] * scale).collect())
            }
            _ if raw.len() == self.num_cells => Ok(raw.iter().map(|v| v * scale).collect()),
            _ => Err(GraphError::CellCountMismatch {
                field: vector.to_string(),
                expected: self.num_cells,
                actual: raw.len(),
            }),
        }
    }

    fn num_connections(&self) -> usize {
        self.transmissibility.len()
    }
}
