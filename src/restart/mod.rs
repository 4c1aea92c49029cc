//! Restart (result) data for a single report step.
//!
//! A restart is an opaque bag of named per-cell fields in the run's own unit
//! convention. Field extraction onto the active-cell numbering is the
//! connectivity graph's job; this module only hands out raw arrays.

use std::collections::HashMap;

use crate::units::UnitSystem;

/// Read access to one report step of simulation output.
pub trait RestartData: Send + Sync {
    /// Raw values of a named field, or `None` if the step does not carry it.
    fn field(&self, name: &str) -> Option<&[f64]>;

    /// Unit convention the field values are expressed in.
    fn unit_system(&self) -> UnitSystem;

    /// Whether the step carries a field with this name.
    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// Restart data held in memory.
///
/// # Example
/// ```
/// use ecl_flux::restart::{InMemoryRestart, RestartData};
/// use ecl_flux::units::UnitSystem;
///
/// let rstrt = InMemoryRestart::new()
///     .with_unit_system(UnitSystem::Field)
///     .with_field("PRESSURE", vec![3000.0, 2900.0]);
///
/// assert!(rstrt.has_field("PRESSURE"));
/// assert!(!rstrt.has_field("SWAT"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryRestart {
    fields: HashMap<String, Vec<f64>>,
    unit_system: UnitSystem,
    report_step: usize,
}

impl InMemoryRestart {
    /// Empty Metric-unit restart at report step 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a field.
    pub fn with_field(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.fields.insert(name.into(), values);
        self
    }

    /// Set the unit convention.
    pub fn with_unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = unit_system;
        self
    }

    /// Set the report step number.
    pub fn with_report_step(mut self, step: usize) -> Self {
        self.report_step = step;
        self
    }

    /// Report step number.
    pub fn report_step(&self) -> usize {
        self.report_step
    }

    /// Names of all fields present, in no particular order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl RestartData for InMemoryRestart {
    fn field(&self, name: &str) -> Option<&[f64]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }
}
