//! Cell connectivity graphs.
//!
//! This module provides:
//! - [`ConnectivityGraph`]: static neighbour pairs and transmissibilities,
//!   plus extraction of restart fields onto active cells
//! - [`Topology`]: the validated, cached copy of a graph's static arrays
//! - [`InMemoryGraph`]: a vector-backed graph, including regular boxes

mod in_memory;
mod topology;
pub mod traits;

pub use in_memory::InMemoryGraph;
pub use topology::{Connection, Topology};
pub use traits::{ConnectivityGraph, GraphError};
