// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Perceptron Lab Developers
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Perceptron Boundary Geometry
//!
//! Derivation of the decision boundary `w1·x1 + w2·x2 + b = level` as a line
//! segment clipped to a square display window. Always total: degenerate
//! weight vectors and lines missing the window yield `None`, never an error.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod boundary;

// Re-export everything for convenience
pub use boundary::{
    boundary_segments, decision_boundary, BoundaryLine, Point, Segment, DEFAULT_RANGE,
};
