// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Perceptron Lab Developers
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Perceptron Neural Computation
//!
//! ALL shared neuron computation in one place:
//! - **Activation**: the activation function family (limiar, step, sigmoid,
//!   tanh, ReLU, gaussian) parameterized by threshold
//! - **Forward**: net input (weighted sum + bias) and single-shot forward pass
//!
//! The three-way "limiar" decision at threshold θ is the same function the
//! training simulator uses at θ = 0, so the constant lives here exactly once.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod activation;
pub mod forward;

// Re-export everything for convenience
pub use activation::{gaussian_z_cutoff, Activation, UnknownActivation};
pub use forward::{forward, net_input};
