// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Perceptron Lab Developers
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Perceptron Lab
//!
//! Educational core of an interactive single-layer Perceptron visualizer.
//! The umbrella crate re-exports the three member crates:
//!
//! - [`neural`]: activation function family and forward pass
//! - [`trainer`]: gate catalog, trace-first training simulator, memo cache
//! - [`geometry`]: decision-boundary derivation clipped to a display window
//!
//! ## Quick Start
//!
//! ```rust
//! use perceptron_lab::prelude::*;
//!
//! // Train the AND gate with the classical rule (δ = 0.2, θ = 0, 20 epochs)
//! let result = simulate(GateKind::And.definition());
//! assert!(result.converged);
//!
//! // Boundary before and after any selected update, as O(1) trace reads
//! let record = result.record_at(1, 2).unwrap();
//! let before = record.pre_update();
//! let after = record.post_update();
//! let _ = decision_boundary(before.w1, before.w2, before.b, DEFAULT_RANGE);
//! let _ = decision_boundary(after.w1, after.w2, after.b, DEFAULT_RANGE);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use perceptron_geometry as geometry;
pub use perceptron_neural as neural;
pub use perceptron_trainer as trainer;

/// Convenience re-exports for callers that want everything in scope
pub mod prelude {
    pub use perceptron_geometry::{
        boundary_segments, decision_boundary, BoundaryLine, Point, Segment, DEFAULT_RANGE,
    };
    pub use perceptron_neural::{forward, net_input, Activation};
    pub use perceptron_trainer::{
        gate_catalog, simulate, simulate_with, EpochSummary, GateDefinition, GateKind,
        IterationRecord, SimulationCache, SimulationResult, TrainerError, TrainingConfig,
        TrainingState, PATTERNS,
    };
}
