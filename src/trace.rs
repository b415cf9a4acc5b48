//! Recording observer: keeps every state a recall passes through.
//!
//! Requires the `std` feature.
//!
//! ```rust
//! use hopfield_core::pattern::Pattern;
//! use hopfield_core::recall::{RecallConfig, RelaxationEngine};
//! use hopfield_core::trace::RecallTrace;
//! use hopfield_core::weights::WeightMatrix;
//!
//! let v1 = Pattern::new([1, 1, -1, -1]).unwrap();
//! let w = WeightMatrix::train(&[v1]);
//! let mut trace = RecallTrace::new();
//! let out = RelaxationEngine::new(&w, RecallConfig::default().traced())
//!     .recall_observed(&v1, &mut trace);
//! assert_eq!(trace.len(), out.iterations + 1);
//! ```

use std::vec::Vec;

use crate::pattern::Pattern;
use crate::recall::RecallObserver;

/// One recorded state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceFrame<const N: usize> {
    /// 0 for the input, then 1, 2, … per transition.
    pub iteration: usize,
    /// Net input the state was computed from; `None` for the input frame.
    pub activation: Option<[i32; N]>,
    /// The state itself.
    pub state: Pattern<N>,
}

/// Every frame of one or more recalls, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecallTrace<const N: usize> {
    frames: Vec<TraceFrame<N>>,
}

impl<const N: usize> RecallTrace<N> {
    /// Empty trace.
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Recorded frames.
    pub fn frames(&self) -> &[TraceFrame<N>] {
        &self.frames
    }

    /// Recorded states, input first.
    pub fn states(&self) -> impl Iterator<Item = &Pattern<N>> {
        self.frames.iter().map(|f| &f.state)
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Last recorded state.
    pub fn last_state(&self) -> Option<&Pattern<N>> {
        self.frames.last().map(|f| &f.state)
    }

    /// Drop all frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl<const N: usize> RecallObserver<N> for RecallTrace<N> {
    fn on_input(&mut self, state: &Pattern<N>) {
        self.frames.push(TraceFrame {
            iteration: 0,
            activation: None,
            state: *state,
        });
    }

    fn on_iteration(&mut self, iteration: usize, activation: &[i32; N], state: &Pattern<N>) {
        self.frames.push(TraceFrame {
            iteration,
            activation: Some(*activation),
            state: *state,
        });
    }
}
