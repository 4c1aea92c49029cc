//! Integration tests for the flux calculator.
//!
//! These tests verify:
//! - Upwinding and sign convention on small hand-checked graphs
//! - Pressure unit conversion from restart unit systems
//! - Structural properties (length, zero flux, antisymmetry, determinism)
//! - Error propagation from graph and saturation function

use ecl_flux::units::unit;
use ecl_flux::{
    BoxedSaturationFunction, ConnectivityGraph, CoreyParams, CoreyRelperm, FluxCalculator,
    FluxError, GraphError, InMemoryGraph, InMemoryRestart, PhaseIndex, REFERENCE_VISCOSITY,
    RestartData, SatFuncError, SaturationFunction, UnitSystem,
};

const NU: f64 = REFERENCE_VISCOSITY;
const REL_TOL: f64 = 1e-12;

/// Relative permeability given directly per cell, the same for every phase.
struct FixedRelperm(Vec<f64>);

impl SaturationFunction for FixedRelperm {
    fn relperm(
        &self,
        _graph: &dyn ConnectivityGraph,
        _rstrt: &dyn RestartData,
        _phase: PhaseIndex,
    ) -> Result<Vec<f64>, SatFuncError> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= REL_TOL * scale,
        "expected {expected}, got {actual}"
    );
}

/// Pressures in bar for a Metric restart.
fn metric_restart(pressure_bar: Vec<f64>) -> InMemoryRestart {
    InMemoryRestart::new()
        .with_unit_system(UnitSystem::Metric)
        .with_field("PRESSURE", pressure_bar)
}

#[test_log::test]
fn test_hand_checked_example_c1_upstream() {
    let graph = InMemoryGraph::from_connections(2, vec![0, 1], vec![2.0]).unwrap();
    let calc = FluxCalculator::new(&graph, FixedRelperm(vec![0.5, 0.8])).unwrap();

    let q = calc
        .flux(&metric_restart(vec![300.0, 100.0]), PhaseIndex::Liquid)
        .unwrap();

    assert_eq!(q.len(), 1);
    assert_close(q[0], 200.0 / NU * unit::BARSA);
}

#[test_log::test]
fn test_hand_checked_example_c2_upstream() {
    let graph = InMemoryGraph::from_connections(2, vec![0, 1], vec![2.0]).unwrap();
    let calc = FluxCalculator::new(&graph, FixedRelperm(vec![0.5, 0.8])).unwrap();

    let q = calc
        .flux(&metric_restart(vec![100.0, 300.0]), PhaseIndex::Liquid)
        .unwrap();

    assert_close(q[0], -320.0 / NU * unit::BARSA);
}

#[test_log::test]
fn test_field_units_scale_by_psi() {
    let graph = InMemoryGraph::from_connections(2, vec![0, 1], vec![1.0]).unwrap();
    let calc = FluxCalculator::new(&graph, FixedRelperm(vec![1.0, 1.0])).unwrap();

    let field = InMemoryRestart::new()
        .with_unit_system(UnitSystem::Field)
        .with_field("PRESSURE", vec![3000.0, 2990.0]);

    let q = calc.flux(&field, PhaseIndex::Liquid).unwrap();
    assert_close(q[0], 10.0 * unit::PSIA / NU);
}

#[test_log::test]
fn test_output_length_matches_connections() {
    let graph = InMemoryGraph::cartesian([5, 4, 3], [1.0e-12, 1.0e-12, 1.0e-13]);
    let n = graph.num_cells();
    let calc = FluxCalculator::new(&graph, FixedRelperm(vec![0.5; n])).unwrap();

    let pressure = (0..n).map(|i| 200.0 + i as f64 * 0.1).collect();
    let q = calc
        .flux(&metric_restart(pressure), PhaseIndex::Aqua)
        .unwrap();

    assert_eq!(q.len(), graph.num_connections());
    assert_eq!(q.len(), calc.num_connections());
}

#[test_log::test]
fn test_uniform_pressure_gives_zero_flux() {
    let graph = InMemoryGraph::cartesian([4, 4, 1], [1.0, 2.0, 0.0]);
    let n = graph.num_cells();
    let relperm = (0..n).map(|i| i as f64 / n as f64).collect();
    let calc = FluxCalculator::new(&graph, FixedRelperm(relperm)).unwrap();

    let q = calc
        .flux(&metric_restart(vec![250.0; n]), PhaseIndex::Liquid)
        .unwrap();

    assert!(q.iter().all(|&v| v == 0.0));
}

#[test_log::test]
fn test_zero_transmissibility_axis_gives_zero_flux() {
    // y-direction connections carry zero transmissibility.
    let graph = InMemoryGraph::cartesian([3, 3, 1], [1.0e-12, 0.0, 0.0]);
    let n = graph.num_cells();
    let calc = FluxCalculator::new(&graph, FixedRelperm(vec![1.0; n])).unwrap();

    let pressure = (0..n).map(|i| 100.0 + (i * i) as f64).collect();
    let q = calc
        .flux(&metric_restart(pressure), PhaseIndex::Liquid)
        .unwrap();

    let trans = graph.transmissibility();
    for (flux, t) in q.iter().zip(&trans) {
        if *t == 0.0 {
            assert_eq!(*flux, 0.0);
        } else {
            assert!(*flux != 0.0);
        }
    }
}

#[test_log::test]
fn test_reversed_neighbour_order_negates_flux() {
    let forward = InMemoryGraph::from_connections(3, vec![0, 1, 1, 2, 2, 0], vec![1.0, 2.0, 3.0])
        .unwrap();
    let backward = InMemoryGraph::from_connections(3, vec![1, 0, 2, 1, 0, 2], vec![1.0, 2.0, 3.0])
        .unwrap();
    let relperm = vec![0.2, 0.5, 0.9];

    let rstrt = metric_restart(vec![210.0, 190.0, 205.0]);
    let q_fwd = FluxCalculator::new(&forward, FixedRelperm(relperm.clone()))
        .unwrap()
        .flux(&rstrt, PhaseIndex::Aqua)
        .unwrap();
    let q_bwd = FluxCalculator::new(&backward, FixedRelperm(relperm))
        .unwrap()
        .flux(&rstrt, PhaseIndex::Aqua)
        .unwrap();

    for (f, b) in q_fwd.iter().zip(&q_bwd) {
        assert_eq!(*f, -*b);
    }
}

#[test_log::test]
fn test_repeated_requests_are_bit_identical() {
    let graph = InMemoryGraph::cartesian([6, 5, 2], [3.0e-13, 2.0e-13, 1.0e-14]);
    let n = graph.num_cells();
    let satfunc = CoreyRelperm::new(CoreyParams::default().with_residuals(0.15, 0.2, 0.0)).unwrap();
    let calc = FluxCalculator::new(&graph, satfunc).unwrap();

    let rstrt = InMemoryRestart::new()
        .with_field("PRESSURE", (0..n).map(|i| 180.0 + (i % 7) as f64).collect())
        .with_field("SWAT", (0..n).map(|i| 0.1 + (i % 9) as f64 * 0.08).collect());

    let first = calc.flux(&rstrt, PhaseIndex::Liquid).unwrap();
    let second = calc.flux(&rstrt, PhaseIndex::Liquid).unwrap();
    assert_eq!(first, second);
}

#[test_log::test]
fn test_corey_water_flux_uses_upstream_saturation() {
    // Cell 0 at high pressure is water-saturated, cell 1 holds no mobile water.
    let graph = InMemoryGraph::cartesian([2, 1, 1], [1.0e-12, 0.0, 0.0]);
    let satfunc = CoreyRelperm::new(CoreyParams::default()).unwrap();
    let calc = FluxCalculator::new(&graph, satfunc).unwrap();

    let swat = InMemoryRestart::new()
        .with_field("SWAT", vec![1.0, 0.0])
        .with_field("PRESSURE", vec![200.0, 100.0]);
    let q = calc.flux(&swat, PhaseIndex::Aqua).unwrap();
    assert_close(q[0], 1.0 / NU * 1.0e-12 * 100.0 * unit::BARSA);

    // Reversing the pressure gradient makes the dry cell upstream.
    let reversed = InMemoryRestart::new()
        .with_field("SWAT", vec![1.0, 0.0])
        .with_field("PRESSURE", vec![100.0, 200.0]);
    let q = calc.flux(&reversed, PhaseIndex::Aqua).unwrap();
    assert_eq!(q[0], 0.0);
}

#[test_log::test]
fn test_boxed_saturation_function() {
    let graph = InMemoryGraph::from_connections(2, vec![0, 1], vec![2.0]).unwrap();
    let satfunc: BoxedSaturationFunction = Box::new(FixedRelperm(vec![0.5, 0.8]));
    let calc = FluxCalculator::new(&graph, satfunc).unwrap();

    assert_eq!(calc.saturation_function().name(), "fixed");
    let q = calc
        .flux(&metric_restart(vec![300.0, 100.0]), PhaseIndex::Liquid)
        .unwrap();
    assert_close(q[0], 200.0 / NU * unit::BARSA);
}

#[test_log::test]
fn test_inactive_cells_gathered_from_global_restart() {
    // Global 1D row of 4 cells, cell 2 inactive; active cells 0, 1, 3.
    let graph = InMemoryGraph::from_connections(3, vec![0, 1, 1, 2], vec![1.0, 1.0])
        .unwrap()
        .with_active_cells(4, vec![0, 1, 3])
        .unwrap();
    let calc = FluxCalculator::new(&graph, FixedRelperm(vec![1.0; 3])).unwrap();

    let q = calc
        .flux(&metric_restart(vec![4.0, 3.0, 99.0, 1.0]), PhaseIndex::Liquid)
        .unwrap();

    assert_close(q[0], 1.0 / NU * unit::BARSA);
    assert_close(q[1], 2.0 / NU * unit::BARSA);
}

#[test_log::test]
fn test_missing_pressure_field() {
    let graph = InMemoryGraph::from_connections(2, vec![0, 1], vec![1.0]).unwrap();
    let calc = FluxCalculator::new(&graph, FixedRelperm(vec![1.0, 1.0])).unwrap();

    let err = calc
        .flux(&InMemoryRestart::new(), PhaseIndex::Liquid)
        .unwrap_err();
    assert_eq!(
        err,
        FluxError::Graph(GraphError::MissingField("PRESSURE".to_string()))
    );
    assert_eq!(err.to_string(), "Missing field: PRESSURE");
}

#[test_log::test]
fn test_inactive_gas_phase() {
    let graph = InMemoryGraph::cartesian([2, 1, 1], [1.0, 0.0, 0.0]);
    let calc = FluxCalculator::new(&graph, CoreyRelperm::new(CoreyParams::default()).unwrap())
        .unwrap();
    let rstrt = metric_restart(vec![1.0, 2.0]).with_field("SWAT", vec![0.3, 0.3]);

    assert_eq!(
        calc.flux(&rstrt, PhaseIndex::Vapour),
        Err(FluxError::SatFunc(SatFuncError::InactivePhase(
            PhaseIndex::Vapour
        )))
    );
}

#[test_log::test]
fn test_relperm_too_short() {
    let graph = InMemoryGraph::from_connections(3, vec![0, 2], vec![1.0]).unwrap();
    let calc = FluxCalculator::new(&graph, FixedRelperm(vec![1.0, 1.0])).unwrap();

    assert_eq!(
        calc.flux(&metric_restart(vec![1.0, 2.0, 3.0]), PhaseIndex::Liquid),
        Err(FluxError::ShapeMismatch {
            field: "relperm",
            required: 3,
            actual: 2
        })
    );
}

#[test_log::test]
fn test_negative_transmissibility_rejected() {
    let graph = InMemoryGraph::from_connections(2, vec![0, 1], vec![-1.0]).unwrap();
    let result = FluxCalculator::new(&graph, FixedRelperm(vec![1.0, 1.0]));

    assert!(matches!(
        result,
        Err(FluxError::Graph(GraphError::InvalidTransmissibility { connection: 0, .. }))
    ));
}
