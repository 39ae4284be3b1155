// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

//! Training configuration
//!
//! The defaults are the fixed constants of the worked material: δ = 0.2,
//! α = 1, θ = 0, 20-epoch cap. `simulate` always uses the defaults; callers
//! that override them go through `validate`.

use serde::{Deserialize, Serialize};

use crate::error::TrainerError;

/// Hyperparameters of the Perceptron learning rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Learning rate δ applied to every delta
    pub learning_rate: f64,

    /// Bipolar output scale α
    ///
    /// Kept at 1 for parity with the presented formulas; the three-way sign
    /// decision never scales its output.
    pub output_scale: f64,

    /// Threshold θ of the three-way training activation
    pub theta: f64,

    /// Hard cap on epochs when a gate never reaches a zero-error epoch
    pub max_epochs: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.2,
            output_scale: 1.0,
            theta: 0.0,
            max_epochs: 20,
        }
    }
}

impl TrainingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate caller-supplied hyperparameters
    pub fn validate(&self) -> Result<(), TrainerError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(TrainerError::InvalidLearningRate(self.learning_rate));
        }
        if !self.theta.is_finite() || self.theta < 0.0 {
            return Err(TrainerError::InvalidThreshold(self.theta));
        }
        if self.max_epochs == 0 {
            return Err(TrainerError::ZeroEpochCap);
        }
        Ok(())
    }
}
