// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

//! Net input and single-shot forward pass
//!
//! ```text
//! net = Σ(xᵢ · wᵢ) + b
//! y   = f(net)
//! ```

use crate::activation::Activation;

/// Weighted sum of inputs plus bias, prior to activation
///
/// `inputs` and `weights` must have the same length; this is a programming
/// error, not a runtime condition.
#[inline]
pub fn net_input(inputs: &[f64], weights: &[f64], bias: f64) -> f64 {
    debug_assert_eq!(inputs.len(), weights.len());
    inputs
        .iter()
        .zip(weights.iter())
        .map(|(x, w)| x * w)
        .sum::<f64>()
        + bias
}

/// Full forward pass: net input followed by the chosen activation
#[inline]
pub fn forward(
    inputs: &[f64],
    weights: &[f64],
    bias: f64,
    activation: Activation,
    theta: f64,
) -> f64 {
    activation.apply(net_input(inputs, weights, bias), theta)
}
