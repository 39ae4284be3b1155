// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

//! # Activation Function Family
//!
//! All activations the neuron visualizer offers, as one pure function
//! parameterized by the threshold θ.
//!
//! ## Conventions
//!
//! ```text
//! Limiar (three-way decision at ±θ):
//!     y = +1  when net >  θ
//!     y = -1  when net < -θ
//!     y =  0  otherwise
//!
//! Step:      y = 1 when net ≥ 0, else 0
//! Sigmoid:   y = 1 / (1 + e^(-net))
//! Tanh:      y = tanh(net)
//! ReLU:      y = max(0, net)
//! Gaussian:  y = e^(-net²)
//! ```
//!
//! The limiar rule with θ = 0 is the training activation of the classical
//! Perceptron learning rule: a bipolar prediction with an explicit 0 at the
//! exact threshold.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when parsing an activation key that is not in the family
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown activation function: {0}")]
pub struct UnknownActivation(pub String);

/// Activation function selector
///
/// `Limiar` and `Gaussian` are the two members whose class-1/class-0 decision
/// does not reduce to "output > 0"; see [`Activation::classify`] and
/// [`Activation::boundary_levels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Three-way sign decision at ±θ (bipolar output with explicit zero)
    Limiar,
    /// Heaviside step at zero (binary output)
    Step,
    /// Logistic sigmoid
    Sigmoid,
    /// Hyperbolic tangent
    Tanh,
    /// Rectified linear unit
    Relu,
    /// Symmetric bump `e^(-x²)`
    Gaussian,
}

/// Net-input magnitude where the gaussian output crosses 0.5: `√ln 2`
///
/// `exp(-z²) ≥ 0.5` exactly when `|z| ≤ √ln 2`, so the gaussian decision
/// boundary is a symmetric pair of crossings rather than a single line.
pub fn gaussian_z_cutoff() -> f64 {
    core::f64::consts::LN_2.sqrt()
}

impl Activation {
    /// All family members, in presentation order
    pub const ALL: [Activation; 6] = [
        Activation::Limiar,
        Activation::Step,
        Activation::Sigmoid,
        Activation::Tanh,
        Activation::Relu,
        Activation::Gaussian,
    ];

    /// Stable lower-case key (matches the serde form)
    pub fn key(self) -> &'static str {
        match self {
            Activation::Limiar => "limiar",
            Activation::Step => "step",
            Activation::Sigmoid => "sigmoid",
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Gaussian => "gaussian",
        }
    }

    /// Human-facing display label
    pub fn label(self) -> &'static str {
        match self {
            Activation::Limiar => "Limiar (θ)",
            Activation::Step => "Step",
            Activation::Sigmoid => "Sigmoid",
            Activation::Tanh => "Tanh",
            Activation::Relu => "ReLU",
            Activation::Gaussian => "Gaussian",
        }
    }

    /// Apply the activation to a net input
    ///
    /// `theta` only affects `Limiar`; the other members ignore it.
    #[inline]
    pub fn apply(self, net: f64, theta: f64) -> f64 {
        match self {
            Activation::Limiar => {
                if net > theta {
                    1.0
                } else if net < -theta {
                    -1.0
                } else {
                    0.0
                }
            }
            Activation::Step => {
                if net >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Sigmoid => 1.0 / (1.0 + (-net).exp()),
            Activation::Tanh => net.tanh(),
            Activation::Relu => net.max(0.0),
            Activation::Gaussian => (-(net * net)).exp(),
        }
    }

    /// Class-1/class-0 decision over an already-activated output
    ///
    /// Bounded activations whose midpoint is 0.5 classify at 0.5; tanh at 0;
    /// the rest at "strictly positive".
    #[inline]
    pub fn classify(self, output: f64) -> u8 {
        let active = match self {
            Activation::Sigmoid | Activation::Gaussian => output >= 0.5,
            Activation::Tanh => output >= 0.0,
            _ => output > 0.0,
        };
        if active {
            1
        } else {
            0
        }
    }

    /// Net-input levels where the class decision flips
    ///
    /// These are the crossing levels the boundary geometry renders: one line
    /// for most members, a symmetric pair for the gaussian bump.
    pub fn boundary_levels(self, theta: f64) -> Vec<f64> {
        match self {
            Activation::Limiar => vec![theta],
            Activation::Gaussian => {
                let z = gaussian_z_cutoff();
                vec![-z, z]
            }
            _ => vec![0.0],
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Activation {
    type Err = UnknownActivation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activation::ALL
            .iter()
            .copied()
            .find(|a| a.key() == s)
            .ok_or_else(|| UnknownActivation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limiar_three_way_decision() {
        let f = Activation::Limiar;
        assert_eq!(f.apply(0.3, 0.0), 1.0);
        assert_eq!(f.apply(-0.3, 0.0), -1.0);
        assert_eq!(f.apply(0.0, 0.0), 0.0);

        // Nonzero threshold opens a dead zone [-θ, θ]
        assert_eq!(f.apply(0.4, 0.5), 0.0);
        assert_eq!(f.apply(0.6, 0.5), 1.0);
        assert_eq!(f.apply(-0.6, 0.5), -1.0);
    }

    #[test]
    fn test_apply_spot_values() {
        assert_eq!(Activation::Step.apply(0.0, 0.0), 1.0);
        assert_eq!(Activation::Step.apply(-0.1, 0.0), 0.0);
        assert!((Activation::Sigmoid.apply(0.0, 0.0) - 0.5).abs() < 1e-6);
        assert_eq!(Activation::Relu.apply(-2.0, 0.0), 0.0);
        assert_eq!(Activation::Relu.apply(1.5, 0.0), 1.5);
        assert!((Activation::Gaussian.apply(0.0, 0.0) - 1.0).abs() < 1e-6);
        assert!((Activation::Tanh.apply(0.0, 0.0)).abs() < 1e-6);
    }

    #[test]
    fn test_classify_rules() {
        assert_eq!(Activation::Sigmoid.classify(0.5), 1);
        assert_eq!(Activation::Sigmoid.classify(0.49), 0);
        assert_eq!(Activation::Tanh.classify(0.0), 1);
        assert_eq!(Activation::Tanh.classify(-0.1), 0);
        assert_eq!(Activation::Limiar.classify(0.0), 0);
        assert_eq!(Activation::Limiar.classify(1.0), 1);
    }

    #[test]
    fn test_gaussian_cutoff_matches_half_output() {
        let z = gaussian_z_cutoff();
        assert!((Activation::Gaussian.apply(z, 0.0) - 0.5).abs() < 1e-6);
        assert!((Activation::Gaussian.apply(-z, 0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_boundary_levels() {
        assert_eq!(Activation::Limiar.boundary_levels(0.7), vec![0.7]);
        assert_eq!(Activation::Step.boundary_levels(0.7), vec![0.0]);
        let levels = Activation::Gaussian.boundary_levels(0.0);
        assert_eq!(levels.len(), 2);
        assert!((levels[0] + levels[1]).abs() < 1e-6);
    }

    #[test]
    fn test_key_round_trip() {
        for a in Activation::ALL {
            assert_eq!(a.key().parse::<Activation>().unwrap(), a);
        }
        assert!("softmax".parse::<Activation>().is_err());
    }
}
