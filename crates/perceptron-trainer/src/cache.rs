// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

//! Memoized per-gate simulation results
//!
//! A trace is reproducible from the gate definition alone, so the cache is a
//! plain map keyed by gate kind. Results are handed out as `Arc` so the
//! presentation layer can hold a trace across selection changes without
//! cloning 80 records.

use std::sync::Arc;

use ahash::AHashMap;

use crate::config::TrainingConfig;
use crate::gates::GateKind;
use crate::simulator::{simulate_with, SimulationResult};

/// Cache of completed training runs, keyed by gate kind
#[derive(Debug, Clone)]
pub struct SimulationCache {
    results: AHashMap<GateKind, Arc<SimulationResult>>,
    config: TrainingConfig,
}

impl Default for SimulationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationCache {
    /// Cache running with the default training constants
    pub fn new() -> Self {
        Self::with_config(TrainingConfig::default())
    }

    /// Cache running with custom hyperparameters
    pub fn with_config(config: TrainingConfig) -> Self {
        Self {
            results: AHashMap::with_capacity(GateKind::ALL.len()),
            config,
        }
    }

    /// The configuration every cached run was produced with
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Result for one gate, simulating on first access
    pub fn get_or_simulate(&mut self, kind: GateKind) -> Arc<SimulationResult> {
        let config = self.config;
        self.results
            .entry(kind)
            .or_insert_with(|| Arc::new(simulate_with(kind.definition(), &config)))
            .clone()
    }

    /// Already-cached result for one gate, without simulating
    pub fn get(&self, kind: GateKind) -> Option<Arc<SimulationResult>> {
        self.results.get(&kind).cloned()
    }

    /// Drop one gate's cached result; returns whether anything was dropped
    pub fn invalidate(&mut self, kind: GateKind) -> bool {
        self.results.remove(&kind).is_some()
    }

    /// Drop all cached results
    pub fn clear(&mut self) {
        self.results.clear();
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
