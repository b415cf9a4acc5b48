//! # hopfield-core
//!
//! Discrete Hopfield associative memory: store a handful of bipolar patterns,
//! then recover a clean stored pattern from a noisy or partial probe by
//! iterative relaxation.
//!
//! ## The pipeline
//!
//! ```text
//! Grid<R, C> ──flatten/to_bipolar──▶ Pattern<N> ──train──▶ WeightMatrix<N>
//!                                        │                      │
//!                                        └────── probe ─────▶ RelaxationEngine ──▶ RecallOutcome<N>
//!                                                                 │
//!                                                          RecallObserver (iterates)
//! ```
//!
//! Three pieces carry all of the numerical content:
//!
//! **Codec.** A binary `R × C` grid flattens row-major into `N = R·C` units,
//! `0 ↦ -1` and `1 ↦ +1`.
//!
//! **Hebbian training.** The weight matrix is the sum of the outer products of
//! the stored patterns with the diagonal forced to zero. Integer arithmetic, so
//! the result does not depend on training order.
//!
//! **Synchronous recall.** Every unit is updated from the same prior state.
//! A unit whose net input is exactly zero keeps its previous value. The loop
//! always runs one transition before checking for a fixed point, and stops at
//! an iteration cap otherwise, reporting which of the two happened.
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`grid`] | [`Grid`] | Fixed-shape 0/1 grids; text parsing; flattening |
//! | [`pattern`] | [`Pattern`] | Bipolar vectors, codec, activation rule |
//! | [`weights`] | [`WeightMatrix`] | Hebbian training |
//! | [`recall`] | [`RelaxationEngine`], [`RecallOutcome`], [`RecallObserver`] | Synchronous relaxation |
//! | [`network`] | [`HopfieldNetwork`] | Bounded labelled pattern store + identification |
//! | [`shapes`] | [`shapes::Shape`] | Reference 8×5 shape dataset |
//! | [`render`] | [`render::GridView`] | Glyph rendering of iterates |
//! | `trace` | `RecallTrace` | Recording observer (requires `std`) |
//! | `io` | `read_grid`, `LoadError` | Grid files (requires `std`) |
//!
//! ## Example
//!
//! ```rust
//! use hopfield_core::{Pattern, RecallConfig, RecallStatus, WeightMatrix};
//! use hopfield_core::recall::recall;
//!
//! let v1 = Pattern::new([1, 1, -1, -1]).unwrap();
//! let v2 = Pattern::new([1, -1, 1, -1]).unwrap();
//! let w = WeightMatrix::train(&[v1, v2]);
//!
//! let out = recall(&v1, &w, &RecallConfig::new(10));
//! assert_eq!(out.state, v1);
//! assert_eq!(out.iterations, 1);
//! assert_eq!(out.status, RecallStatus::Converged);
//! ```
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default with no heap required: patterns and
//! matrices are fixed-size arrays sized by const generics. Enable `std` for
//! grid files and recall traces, `serde` for serialisation of patterns and
//! configuration, and `python-ffi` for the PyO3 bindings.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod error;
pub mod grid;
pub mod network;
pub mod pattern;
pub mod recall;
pub mod render;
pub mod shapes;
pub mod weights;

#[cfg(feature = "std")]
pub mod io;
#[cfg(feature = "std")]
pub mod trace;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use error::{FormatError, NetworkError, WeightError};
pub use grid::Grid;
pub use network::HopfieldNetwork;
pub use pattern::Pattern;
pub use recall::{RecallConfig, RecallObserver, RecallOutcome, RecallStatus, RelaxationEngine};
pub use weights::WeightMatrix;
