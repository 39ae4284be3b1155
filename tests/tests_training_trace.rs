// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

//! Trace-level invariants of the training simulator, across the full catalog.

use perceptron_lab::prelude::*;

const LEARNING_RATE: f64 = 0.2;

#[test]
fn trace_continuity_from_zero_state() {
    for gate in gate_catalog() {
        let result = simulate(gate);
        let mut previous = TrainingState::ZERO;
        for record in &result.records {
            assert_eq!(
                record.pre_update(),
                previous,
                "{}: record {} does not continue from the previous state",
                gate.kind,
                record.iteration
            );
            previous = record.post_update();
        }
        assert_eq!(previous, result.final_state);
    }
}

#[test]
fn learning_rule_holds_for_every_record() {
    for gate in gate_catalog() {
        let result = simulate(gate);
        for record in &result.records {
            assert_eq!(record.error, record.target - record.prediction);
            assert!((record.delta_b - LEARNING_RATE * record.error).abs() < 1e-6);
            assert!((record.delta_w1 - LEARNING_RATE * record.error * record.x1).abs() < 1e-6);
            assert!((record.delta_w2 - LEARNING_RATE * record.error * record.x2).abs() < 1e-6);
        }
    }
}

#[test]
fn predictions_follow_the_three_way_rule() {
    for gate in gate_catalog() {
        let result = simulate(gate);
        for record in &result.records {
            let expected = Activation::Limiar.apply(record.net, 0.0);
            assert_eq!(record.prediction, expected);
            let pre = record.pre_update();
            assert!((record.net - pre.net(record.x1, record.x2)).abs() < 1e-6);
        }
    }
}

#[test]
fn global_iteration_counter_is_strictly_sequential() {
    for gate in gate_catalog() {
        let result = simulate(gate);
        for (index, record) in result.records.iter().enumerate() {
            assert_eq!(record.iteration, (index + 1) as u32);
        }
    }
}

#[test]
fn separable_gates_converge_and_classify() {
    for kind in [GateKind::And, GateKind::Or, GateKind::Nand, GateKind::Nor] {
        let gate = kind.definition();
        let result = simulate(gate);
        assert!(result.converged, "{} should converge", kind);
        assert!(result.epochs_completed <= 20);

        for (index, &[x1, x2]) in PATTERNS.iter().enumerate() {
            let y = Activation::Limiar.apply(result.final_state.net(x1, x2), 0.0);
            assert_eq!(
                y, gate.targets[index],
                "{}: pattern ({}, {}) misclassified after convergence",
                kind, x1, x2
            );
        }
    }
}

#[test]
fn inseparable_gates_hit_the_epoch_cap() {
    for kind in [GateKind::Xor, GateKind::Xnor] {
        let result = simulate(kind.definition());
        assert!(!result.converged, "{} must not converge", kind);
        assert_eq!(result.epochs_completed, 20);
    }
}

#[test]
fn simulation_is_idempotent() {
    for gate in gate_catalog() {
        let first = simulate(gate);
        let second = simulate(gate);
        assert_eq!(first, second, "{}: traces differ between runs", gate.kind);
    }
}

#[test]
fn epoch_summaries_partition_the_trace() {
    for gate in gate_catalog() {
        let result = simulate(gate);
        let epochs = result.epochs();
        assert_eq!(epochs.len(), result.epochs_completed as usize);

        let mut total_samples = 0;
        for &epoch in &epochs {
            let summary = result.epoch_summary(epoch).unwrap();
            assert_eq!(summary.samples, summary.hits + summary.errors);
            assert_eq!(
                summary.last_iteration - summary.first_iteration + 1,
                summary.samples
            );
            total_samples += summary.samples as usize;
        }
        assert_eq!(total_samples, result.records.len());

        if result.converged {
            let last = result.epoch_summary(result.epochs_completed).unwrap();
            assert!(last.converged);
        }
    }
}

#[test]
fn cache_memoizes_per_gate() {
    let mut cache = SimulationCache::new();
    let first = cache.get_or_simulate(GateKind::Xnor);
    let second = cache.get_or_simulate(GateKind::Xnor);
    assert!(std::sync::Arc::ptr_eq(&first, &second));

    for kind in GateKind::ALL {
        cache.get_or_simulate(kind);
    }
    assert_eq!(cache.len(), 6);
}

#[test]
fn result_serializes_and_round_trips() {
    let result = simulate(GateKind::And.definition());
    let json = serde_json::to_string(&result).unwrap();
    let back: SimulationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
