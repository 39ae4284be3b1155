// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

//! Trace-first Perceptron training
//!
//! ## Learning Rule
//!
//! ```text
//! Per sample, in fixed pattern order:
//!     net  = x1·w1 + x2·w2 + b
//!     y    = +1 when net > θ, -1 when net < -θ, else 0   (θ = 0)
//!     e    = d - y
//!     Δw1  = δ·e·x1     Δw2 = δ·e·x2     Δb = δ·e
//!
//! Deltas are applied unconditionally; a correct sample has e = 0 and
//! therefore zero deltas. An epoch with no nonzero-error sample converges
//! the run; otherwise training stops at the epoch cap.
//! ```
//!
//! Running training up-front keeps the presentation layer a pure read over an
//! immutable trace: "jump to epoch E, sample S" and "boundary before vs.
//! after this update" are O(1) lookups, never a replay.

use perceptron_neural::{net_input, Activation};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::TrainingConfig;
use crate::gates::{GateDefinition, GateKind, PATTERNS};

/// The evolving (w1, w2, b) triple of a training run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingState {
    pub w1: f64,
    pub w2: f64,
    pub b: f64,
}

impl TrainingState {
    /// Initial state of every run
    pub const ZERO: TrainingState = TrainingState {
        w1: 0.0,
        w2: 0.0,
        b: 0.0,
    };

    /// Net input of a pattern under this state
    #[inline]
    pub fn net(&self, x1: f64, x2: f64) -> f64 {
        net_input(&[x1, x2], &[self.w1, self.w2], self.b)
    }
}

/// Immutable snapshot of one processed (epoch, sample) pair
///
/// `w1`/`w2`/`b` are the post-update values; the pre-update state is
/// recovered by subtracting the deltas (see [`IterationRecord::pre_update`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// Global iteration counter, 1-based, monotonic across the whole run
    pub iteration: u32,
    /// Epoch number, 1-based
    pub epoch: u32,
    /// In-epoch sample index, 1-based (1..=4)
    pub sample: u32,
    pub x1: f64,
    pub x2: f64,
    /// Bipolar target d
    pub target: f64,
    /// Net input at this step (pre-update weights)
    pub net: f64,
    /// Three-way prediction y ∈ {-1, 0, +1}
    pub prediction: f64,
    /// Signed error e = d - y
    pub error: f64,
    pub delta_w1: f64,
    pub delta_w2: f64,
    pub delta_b: f64,
    /// Post-update weights and bias
    pub w1: f64,
    pub w2: f64,
    pub b: f64,
}

impl IterationRecord {
    /// State after this sample's update
    pub fn post_update(&self) -> TrainingState {
        TrainingState {
            w1: self.w1,
            w2: self.w2,
            b: self.b,
        }
    }

    /// State before this sample's update (post-update minus the deltas)
    pub fn pre_update(&self) -> TrainingState {
        TrainingState {
            w1: self.w1 - self.delta_w1,
            w2: self.w2 - self.delta_w2,
            b: self.b - self.delta_b,
        }
    }
}

/// Aggregate view of one epoch of the trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EpochSummary {
    pub epoch: u32,
    /// Samples processed in this epoch (always the full pattern set)
    pub samples: u32,
    /// Samples with zero error
    pub hits: u32,
    /// Samples with nonzero error
    pub errors: u32,
    /// Global iteration numbers covered by this epoch
    pub first_iteration: u32,
    pub last_iteration: u32,
    /// True when every sample of the epoch had zero error
    pub converged: bool,
}

/// Complete outcome of one training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub gate: GateKind,
    /// True when some epoch finished with zero errors within the cap
    pub converged: bool,
    /// Epochs actually executed (the converging epoch, or the cap)
    pub epochs_completed: u32,
    /// Full ordered trace, one record per processed sample
    pub records: Vec<IterationRecord>,
    /// Weights and bias after the last processed sample
    pub final_state: TrainingState,
}

impl SimulationResult {
    /// Epoch numbers present in the trace, in order
    pub fn epochs(&self) -> Vec<u32> {
        let mut epochs = Vec::with_capacity(self.epochs_completed as usize);
        for record in &self.records {
            if epochs.last() != Some(&record.epoch) {
                epochs.push(record.epoch);
            }
        }
        epochs
    }

    /// Records of one epoch (empty slice when the epoch was never run)
    ///
    /// Records are contiguous per epoch, so this is a subslice of the trace.
    pub fn epoch_records(&self, epoch: u32) -> &[IterationRecord] {
        match self.records.iter().position(|r| r.epoch == epoch) {
            Some(start) => {
                let len = self.records[start..]
                    .iter()
                    .take_while(|r| r.epoch == epoch)
                    .count();
                &self.records[start..start + len]
            }
            None => &[],
        }
    }

    /// One record addressed by (epoch, 1-based sample index)
    pub fn record_at(&self, epoch: u32, sample: u32) -> Option<&IterationRecord> {
        self.epoch_records(epoch).iter().find(|r| r.sample == sample)
    }

    /// Aggregate view of one epoch, or `None` when the epoch was never run
    pub fn epoch_summary(&self, epoch: u32) -> Option<EpochSummary> {
        let records = self.epoch_records(epoch);
        let (first, last) = match (records.first(), records.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return None,
        };
        let errors = records.iter().filter(|r| r.error != 0.0).count() as u32;
        let samples = records.len() as u32;
        Some(EpochSummary {
            epoch,
            samples,
            hits: samples - errors,
            errors,
            first_iteration: first.iteration,
            last_iteration: last.iteration,
            converged: errors == 0,
        })
    }
}

/// Run the Perceptron learning rule for one gate with the default constants
///
/// Deterministic and total: the same gate always yields a bit-identical
/// trace. See [`simulate_with`] for custom hyperparameters.
pub fn simulate(gate: &GateDefinition) -> SimulationResult {
    simulate_with(gate, &TrainingConfig::default())
}

/// Run the Perceptron learning rule for one gate
///
/// Starts from (0, 0, 0) regardless of any state configured elsewhere in the
/// application, processes the pattern set in fixed order once per epoch, and
/// stops at the first zero-error epoch or at `config.max_epochs`.
pub fn simulate_with(gate: &GateDefinition, config: &TrainingConfig) -> SimulationResult {
    let mut state = TrainingState::ZERO;
    let mut records = Vec::with_capacity(PATTERNS.len() * config.max_epochs as usize);
    let mut iteration = 0u32;
    let mut converged = false;
    let mut epochs_completed = config.max_epochs;

    for epoch in 1..=config.max_epochs {
        let mut epoch_errors = 0u32;

        for (index, &[x1, x2]) in PATTERNS.iter().enumerate() {
            iteration += 1;
            let target = gate.targets[index];
            let net = state.net(x1, x2);
            let prediction = Activation::Limiar.apply(net, config.theta);
            let error = target - prediction;
            let delta_w1 = config.learning_rate * error * x1;
            let delta_w2 = config.learning_rate * error * x2;
            let delta_b = config.learning_rate * error;

            state.w1 += delta_w1;
            state.w2 += delta_w2;
            state.b += delta_b;

            if error != 0.0 {
                epoch_errors += 1;
            }

            records.push(IterationRecord {
                iteration,
                epoch,
                sample: (index + 1) as u32,
                x1,
                x2,
                target,
                net,
                prediction,
                error,
                delta_w1,
                delta_w2,
                delta_b,
                w1: state.w1,
                w2: state.w2,
                b: state.b,
            });
        }

        debug!(gate = %gate.kind, epoch, errors = epoch_errors, "epoch complete");

        if epoch_errors == 0 {
            converged = true;
            epochs_completed = epoch;
            break;
        }
    }

    if converged {
        info!(
            gate = %gate.kind,
            epochs = epochs_completed,
            w1 = state.w1,
            w2 = state.w2,
            b = state.b,
            "training converged"
        );
    } else {
        warn!(
            gate = %gate.kind,
            max_epochs = config.max_epochs,
            "epoch cap reached without convergence"
        );
    }

    SimulationResult {
        gate: gate.kind,
        converged,
        epochs_completed,
        records,
        final_state: state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::GateKind;

    #[test]
    fn test_first_record_starts_from_zero_state() {
        for kind in GateKind::ALL {
            let result = simulate(kind.definition());
            let first = &result.records[0];
            assert_eq!(first.pre_update(), TrainingState::ZERO);
            assert_eq!(first.iteration, 1);
            assert_eq!(first.epoch, 1);
            assert_eq!(first.sample, 1);
        }
    }

    #[test]
    fn test_and_gate_converges() {
        let result = simulate(GateKind::And.definition());
        assert!(result.converged);
        assert!(result.epochs_completed <= 20);

        // Final weights classify every pattern under the θ=0 three-way rule
        for (index, &[x1, x2]) in PATTERNS.iter().enumerate() {
            let net = result.final_state.net(x1, x2);
            let y = Activation::Limiar.apply(net, 0.0);
            assert_eq!(y, GateKind::And.definition().targets[index]);
        }
    }

    #[test]
    fn test_xor_gate_hits_epoch_cap() {
        let result = simulate(GateKind::Xor.definition());
        assert!(!result.converged);
        assert_eq!(result.epochs_completed, 20);
        assert_eq!(result.records.len(), 20 * PATTERNS.len());
    }

    #[test]
    fn test_error_values_are_zero_or_bipolar_double() {
        for kind in GateKind::ALL {
            let result = simulate(kind.definition());
            for record in &result.records {
                // Bipolar target minus three-way prediction
                assert!(
                    record.error == 0.0 || record.error.abs() == 1.0 || record.error.abs() == 2.0,
                    "unexpected error {}",
                    record.error
                );
            }
        }
    }

    #[test]
    fn test_epoch_records_are_contiguous_subslices() {
        let result = simulate(GateKind::Or.definition());
        for epoch in result.epochs() {
            let records = result.epoch_records(epoch);
            assert_eq!(records.len(), PATTERNS.len());
            assert!(records.iter().all(|r| r.epoch == epoch));
        }
        assert!(result.epoch_records(999).is_empty());
        assert!(result.epoch_summary(999).is_none());
    }

    #[test]
    fn test_record_at_addresses_by_sample() {
        let result = simulate(GateKind::Nand.definition());
        let record = result.record_at(1, 3).unwrap();
        assert_eq!(record.epoch, 1);
        assert_eq!(record.sample, 3);
        assert_eq!([record.x1, record.x2], [0.0, 1.0]);
        assert!(result.record_at(1, 5).is_none());
    }

    #[test]
    fn test_final_epoch_summary_of_converged_run() {
        let result = simulate(GateKind::Nor.definition());
        assert!(result.converged);
        let summary = result.epoch_summary(result.epochs_completed).unwrap();
        assert!(summary.converged);
        assert_eq!(summary.errors, 0);
        assert_eq!(summary.hits, summary.samples);
    }

    #[test]
    fn test_custom_config_epoch_cap() {
        let config = TrainingConfig {
            max_epochs: 3,
            ..TrainingConfig::default()
        };
        let result = simulate_with(GateKind::Xor.definition(), &config);
        assert!(!result.converged);
        assert_eq!(result.epochs_completed, 3);
        assert_eq!(result.records.len(), 3 * PATTERNS.len());
    }
}
