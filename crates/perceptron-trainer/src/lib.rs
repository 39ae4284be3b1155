// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Perceptron Lab Developers
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Perceptron Training Simulator
//!
//! This crate implements the classical Perceptron learning rule over small,
//! fixed 2-input logic-gate datasets:
//! - Gate catalog (AND, OR, NAND, NOR, XOR, XNOR) over a shared pattern set
//! - Trace-first training: a run produces the complete ordered sequence of
//!   per-sample updates, so replay and random access are pure reads
//! - Epoch/convergence semantics and per-epoch summaries
//! - Memoized per-gate results for the presentation layer
//!
//! ## Architecture
//! - Deterministic, total, synchronous computation (at most
//!   `max_epochs × 4` sample-steps per run)
//! - No shared mutable state across runs; every run starts from zero weights
//! - Presentation scrubbing ("epoch E, sample S") is O(1) over the trace

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cache;
pub mod config;
pub mod error;
pub mod gates;
pub mod simulator;

// Re-export key types
pub use cache::SimulationCache;
pub use config::TrainingConfig;
pub use error::TrainerError;
pub use gates::{gate_catalog, GateDefinition, GateKind, PATTERNS};
pub use simulator::{
    simulate, simulate_with, EpochSummary, IterationRecord, SimulationResult, TrainingState,
};
