//! End-to-end recall behaviour on small hand-checked networks.
//!
//! Every expected state here was worked out by hand from the Hebbian rule and
//! the synchronous threshold update.

use hopfield_core::recall::{recall, RecallConfig, RecallStatus, RelaxationEngine};
use hopfield_core::{Pattern, WeightMatrix, WeightError};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn v1() -> Pattern<4> {
    Pattern::new([1, 1, -1, -1]).unwrap()
}

fn v2() -> Pattern<4> {
    Pattern::new([1, -1, 1, -1]).unwrap()
}

fn v3() -> Pattern<4> {
    Pattern::new([-1, 1, 1, 1]).unwrap()
}

// ─── training ────────────────────────────────────────────────────────────────

/// Two orthogonal patterns: only the anti-diagonal pairs (0,3) and (1,2) carry weight.
#[test]
fn test_orthogonal_pair_weights() {
    let w = WeightMatrix::train(&[v1(), v2()]);
    let expected = [
        [0, 0, 0, -2],
        [0, 0, -2, 0],
        [0, -2, 0, 0],
        [-2, 0, 0, 0],
    ];
    assert_eq!(w.rows(), &expected);
    assert_eq!(w.pattern_count(), 2);
}

/// Training order never changes the matrix.
#[test]
fn test_training_is_order_independent() {
    let reference = WeightMatrix::train(&[v1(), v2(), v3()]);
    let orders = [
        [v1(), v3(), v2()],
        [v2(), v1(), v3()],
        [v2(), v3(), v1()],
        [v3(), v1(), v2()],
        [v3(), v2(), v1()],
    ];
    for order in orders {
        assert_eq!(WeightMatrix::train(&order).rows(), reference.rows());
    }
}

#[test]
fn test_trained_matrix_is_symmetric_with_zero_diagonal() {
    let w = WeightMatrix::train(&[v1(), v2(), v3()]);
    assert!(w.is_symmetric());
    assert!(w.has_zero_diagonal());
    assert!(w.max_abs() <= 3);
    assert!(WeightMatrix::from_rows(*w.rows()).is_ok());
}

#[test]
fn test_from_rows_rejects_invalid_matrices() {
    let asymmetric = [[0, 1, 0], [0, 0, 0], [0, 0, 0]];
    assert_eq!(
        WeightMatrix::from_rows(asymmetric).unwrap_err(),
        WeightError::NotSymmetric { row: 0, col: 1 }
    );
    let diagonal = [[0, 0, 0], [0, 2, 0], [0, 0, 0]];
    assert_eq!(
        WeightMatrix::from_rows(diagonal).unwrap_err(),
        WeightError::NonZeroDiagonal { index: 1 }
    );
}

// ─── recall ──────────────────────────────────────────────────────────────────

/// A stored pattern needs exactly one transition to be confirmed stable.
#[test]
fn test_stored_patterns_are_fixed_points() {
    let w = WeightMatrix::train(&[v1(), v2()]);
    for p in [v1(), v2()] {
        let out = recall(&p, &w, &RecallConfig::new(10));
        assert_eq!(out.state, p);
        assert_eq!(out.iterations, 1);
        assert_eq!(out.status, RecallStatus::Converged);
    }
}

/// With nothing stored every net input is zero, so every unit holds.
#[test]
fn test_empty_training_set_returns_input() {
    let w = WeightMatrix::<4>::train(&[]);
    assert_eq!(w.max_abs(), 0);
    let probe = Pattern::new([1, -1, -1, 1]).unwrap();
    let out = recall(&probe, &w, &RecallConfig::default());
    assert_eq!(out.state, probe);
    assert_eq!(out.iterations, 1);
    assert!(out.is_converged());
}

/// All-ones is not an attractor of the orthogonal pair: it flips between all
/// +1 and all -1 until the cap stops it.
#[test]
fn test_two_cycle_stops_at_cap() {
    let w = WeightMatrix::train(&[v1(), v2()]);
    let probe = Pattern::uniform(true);

    let out = recall(&probe, &w, &RecallConfig::new(3));
    assert_eq!(out.status, RecallStatus::IterationCapReached);
    assert_eq!(out.iterations, 3);
    assert_eq!(out.state, Pattern::uniform(false));

    let out = recall(&probe, &w, &RecallConfig::new(50));
    assert_eq!(out.status, RecallStatus::IterationCapReached);
    assert_eq!(out.iterations, 50);
    assert_eq!(out.state, Pattern::uniform(true));
}

/// A zero cap still performs the first transition.
#[test]
fn test_zero_cap_runs_one_transition() {
    let w = WeightMatrix::train(&[v1(), v2()]);
    let out = recall(&v1(), &w, &RecallConfig::new(0));
    assert_eq!(out.iterations, 1);
    assert_eq!(out.status, RecallStatus::Converged);

    let out = recall(&Pattern::uniform(true), &w, &RecallConfig::new(0));
    assert_eq!(out.iterations, 1);
    assert_eq!(out.status, RecallStatus::IterationCapReached);
    assert_eq!(out.state, Pattern::uniform(false));
}

/// Units with zero net input keep their previous value rather than snapping to +1.
#[test]
fn test_zero_net_input_holds_previous_value() {
    let w = WeightMatrix::from_rows([[0, 1, -1], [1, 0, 1], [-1, 1, 0]]).unwrap();
    let probe = Pattern::new([-1, 1, 1]).unwrap();
    let engine = RelaxationEngine::new(&w, RecallConfig::new(5));

    let (next, activation) = engine.step(&probe);
    assert_eq!(activation, [0, 0, 2]);
    assert_eq!(next, probe);

    let out = engine.recall(&probe);
    assert_eq!(out.state, probe);
    assert_eq!(out.iterations, 1);
    assert_eq!(out.status, RecallStatus::Converged);
}

/// Recall is deterministic: the same probe always yields the same outcome.
#[test]
fn test_recall_is_deterministic() {
    let w = WeightMatrix::train(&[v1(), v2(), v3()]);
    let probe = Pattern::new([1, 1, 1, -1]).unwrap();
    let config = RecallConfig::new(20);
    let first = recall(&probe, &w, &config);
    for _ in 0..5 {
        assert_eq!(recall(&probe, &w, &config), first);
    }
}
