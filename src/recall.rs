/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Synchronous relaxation: recall a stored pattern from a noisy probe.
//!
//! # The update rule
//!
//! Every unit is updated at once from the same prior state `U`:
//!
//! ```text
//! y[j]      = Σ_i U[i] · W[i][j]
//! U_next[j] = +1      if y[j] > 0
//!             -1      if y[j] < 0
//!             U[j]    if y[j] == 0      (a tie holds the unit, it does not default to +1)
//! ```
//!
//! # Termination
//!
//! The loop runs one transition unconditionally and only then checks:
//!
//! 1. `U_next == U` → [`RecallStatus::Converged`] (fixed point).
//! 2. `k >= max_iterations` → [`RecallStatus::IterationCapReached`]. Synchronous
//!    dynamics can settle into a two-state cycle; the cap is the only guard
//!    and hitting it is a reported outcome, not an error.
//!
//! Even a probe that already is a fixed point costs one transition.

use crate::pattern::Pattern;
use crate::weights::WeightMatrix;

/// Default cap on synchronous transitions per recall.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

// ─── Config ─────────────────────────────────────────────────────────────────

/// Recall parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecallConfig {
    /// Maximum number of transitions. A value of 0 behaves like 1, since the
    /// first transition always runs. Default: 50.
    pub max_iterations: usize,

    /// Surface the input and every iterate to the observer. Default: `false`.
    pub emit_intermediate: bool,
}

impl RecallConfig {
    /// Config with the given cap and no intermediate output.
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            emit_intermediate: false,
        }
    }

    /// Same config with intermediate output switched on.
    pub fn traced(mut self) -> Self {
        self.emit_intermediate = true;
        self
    }
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

// ─── Outcome ────────────────────────────────────────────────────────────────

/// Why a recall stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecallStatus {
    /// The last transition left the state unchanged.
    Converged,
    /// The cap was reached first. The state may be part of a cycle.
    IterationCapReached,
}

/// Result of one recall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecallOutcome<const N: usize> {
    /// Final state (the last computed iterate).
    pub state: Pattern<N>,
    /// Why the loop stopped.
    pub status: RecallStatus,
    /// Transitions performed, always at least 1.
    pub iterations: usize,
}

impl<const N: usize> RecallOutcome<N> {
    /// `true` if the network reached a fixed point.
    pub fn is_converged(&self) -> bool {
        self.status == RecallStatus::Converged
    }
}

// ─── Observer ───────────────────────────────────────────────────────────────

/// Receives intermediate states when [`RecallConfig::emit_intermediate`] is set.
///
/// Observers only read; they cannot influence the numerical result.
/// `()` is the no-op observer.
pub trait RecallObserver<const N: usize> {
    /// The probe, labelled iteration 0.
    fn on_input(&mut self, _state: &Pattern<N>) {}

    /// Iterate `iteration` (1-based) and the activation `y` it was computed from.
    fn on_iteration(&mut self, _iteration: usize, _activation: &[i32; N], _state: &Pattern<N>) {}
}

impl<const N: usize> RecallObserver<N> for () {}

impl<const N: usize, O: RecallObserver<N> + ?Sized> RecallObserver<N> for &mut O {
    fn on_input(&mut self, state: &Pattern<N>) {
        (**self).on_input(state);
    }

    fn on_iteration(&mut self, iteration: usize, activation: &[i32; N], state: &Pattern<N>) {
        (**self).on_iteration(iteration, activation, state);
    }
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Relaxation engine bound to one trained weight matrix.
///
/// The matrix is only borrowed; every call owns its own state, so one engine
/// can serve any number of independent recalls.
#[derive(Clone, Debug)]
pub struct RelaxationEngine<'w, const N: usize> {
    weights: &'w WeightMatrix<N>,
    config: RecallConfig,
}

impl<'w, const N: usize> RelaxationEngine<'w, N> {
    /// Bind an engine to `weights`.
    pub fn new(weights: &'w WeightMatrix<N>, config: RecallConfig) -> Self {
        Self { weights, config }
    }

    /// Recall parameters.
    pub fn config(&self) -> &RecallConfig {
        &self.config
    }

    /// The matrix this engine reads.
    pub fn weights(&self) -> &'w WeightMatrix<N> {
        self.weights
    }

    /// One synchronous transition. Returns the next state and the activation
    /// it was computed from.
    pub fn step(&self, state: &Pattern<N>) -> (Pattern<N>, [i32; N]) {
        let activation = self.weights.activation(state);
        (state.relax(&activation), activation)
    }

    /// Relax `input` until it is stable or the cap is reached.
    pub fn recall(&self, input: &Pattern<N>) -> RecallOutcome<N> {
        self.recall_observed(input, &mut ())
    }

    /// [`RelaxationEngine::recall`], surfacing intermediate states to `observer`
    /// when the config asks for it.
    pub fn recall_observed<O>(&self, input: &Pattern<N>, observer: &mut O) -> RecallOutcome<N>
    where
        O: RecallObserver<N> + ?Sized,
    {
        let emit = self.config.emit_intermediate;
        let mut current = *input;
        let mut iteration = 0usize;

        if emit {
            observer.on_input(&current);
        }

        loop {
            let (next, activation) = self.step(&current);
            iteration += 1;

            if emit {
                observer.on_iteration(iteration, &activation, &next);
            }
            tracing::trace!(iteration, active = next.active_count(), "relaxation step");

            if next == current {
                tracing::debug!(iterations = iteration, "recall converged");
                return RecallOutcome {
                    state: next,
                    status: RecallStatus::Converged,
                    iterations: iteration,
                };
            }
            if iteration >= self.config.max_iterations {
                tracing::debug!(
                    iterations = iteration,
                    "recall stopped at iteration cap, state may be cycling"
                );
                return RecallOutcome {
                    state: next,
                    status: RecallStatus::IterationCapReached,
                    iterations: iteration,
                };
            }
            current = next;
        }
    }
}

/// Recall `input` against `weights` with `config`; no observer.
pub fn recall<const N: usize>(
    input: &Pattern<N>,
    weights: &WeightMatrix<N>,
    config: &RecallConfig,
) -> RecallOutcome<N> {
    RelaxationEngine::new(weights, config.clone()).recall(input)
}
