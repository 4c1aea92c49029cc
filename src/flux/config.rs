//! Flux evaluation options.

/// Default name of the restart pressure field.
pub const PRESSURE_FIELD: &str = "PRESSURE";

/// Options for a [`FluxCalculator`](super::FluxCalculator).
///
/// # Example
/// ```
/// use ecl_flux::flux::FluxConfig;
///
/// let config = FluxConfig::new().with_parallel(true);
/// assert!(config.parallel);
/// assert_eq!(config.pressure_field, "PRESSURE");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FluxConfig {
    /// Evaluate connections with rayon.
    ///
    /// Only honoured when built with the `parallel` feature. The result is
    /// bit-identical to the serial evaluation.
    pub parallel: bool,
    /// Restart field holding cell pressures.
    pub pressure_field: String,
}

impl Default for FluxConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            pressure_field: PRESSURE_FIELD.to_string(),
        }
    }
}

impl FluxConfig {
    /// Serial evaluation reading `PRESSURE`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Read pressure from a differently named field.
    pub fn with_pressure_field(mut self, name: impl Into<String>) -> Self {
        self.pressure_field = name.into();
        self
    }

    /// Whether evaluation will actually run in parallel in this build.
    pub fn runs_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }
}
