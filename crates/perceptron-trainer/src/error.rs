// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

//! Error types for trainer operations
//!
//! The simulation itself is total; only external inputs (gate keys, training
//! configuration supplied by a caller) can be malformed.

use thiserror::Error;

/// Error types for trainer operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainerError {
    #[error("unknown gate key: {0}")]
    UnknownGate(String),

    #[error("learning rate must be finite and positive, got {0}")]
    InvalidLearningRate(f64),

    #[error("threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),

    #[error("epoch cap must be at least 1")]
    ZeroEpochCap,
}

pub type Result<T> = core::result::Result<T, TrainerError>;
