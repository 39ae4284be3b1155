// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

//! Logic-gate catalog
//!
//! Six fixed 2-input gates with bipolar (+1/−1) targets, positionally aligned
//! to one shared, ordered pattern set. The pattern order defines sample
//! presentation order within every training epoch.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrainerError;

/// Fixed input pattern set shared by all gates, in presentation order
pub const PATTERNS: [[f64; 2]; 4] = [[1.0, 1.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]];

/// Gate identifier with a stable lower-case string form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xnor,
}

/// Immutable gate definition: key, display label, description, bipolar targets
///
/// `targets[i]` is the desired output for `PATTERNS[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GateDefinition {
    pub kind: GateKind,
    pub label: &'static str,
    pub description: &'static str,
    pub targets: [f64; 4],
}

static GATE_CATALOG: [GateDefinition; 6] = [
    GateDefinition {
        kind: GateKind::And,
        label: "AND",
        description: "Outputs +1 only when x1 = 1 and x2 = 1.",
        targets: [1.0, -1.0, -1.0, -1.0],
    },
    GateDefinition {
        kind: GateKind::Or,
        label: "OR",
        description: "Outputs +1 when at least one input is 1.",
        targets: [1.0, 1.0, 1.0, -1.0],
    },
    GateDefinition {
        kind: GateKind::Nand,
        label: "NAND",
        description: "Negation of AND.",
        targets: [-1.0, 1.0, 1.0, 1.0],
    },
    GateDefinition {
        kind: GateKind::Nor,
        label: "NOR",
        description: "Negation of OR.",
        targets: [-1.0, -1.0, -1.0, 1.0],
    },
    GateDefinition {
        kind: GateKind::Xor,
        label: "XOR",
        description: "Outputs +1 when the inputs differ.",
        targets: [-1.0, 1.0, 1.0, -1.0],
    },
    GateDefinition {
        kind: GateKind::Xnor,
        label: "XNOR",
        description: "Outputs +1 when the inputs are equal.",
        targets: [1.0, -1.0, -1.0, 1.0],
    },
];

/// The fixed catalog of six gates, in presentation order
pub fn gate_catalog() -> &'static [GateDefinition] {
    &GATE_CATALOG
}

impl GateKind {
    /// All gate kinds, in catalog order
    pub const ALL: [GateKind; 6] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Xor,
        GateKind::Xnor,
    ];

    /// Stable lower-case key (matches the serde form)
    pub fn key(self) -> &'static str {
        match self {
            GateKind::And => "and",
            GateKind::Or => "or",
            GateKind::Nand => "nand",
            GateKind::Nor => "nor",
            GateKind::Xor => "xor",
            GateKind::Xnor => "xnor",
        }
    }

    /// The catalog entry for this kind
    pub fn definition(self) -> &'static GateDefinition {
        let index = GateKind::ALL.iter().position(|&k| k == self);
        // ALL and GATE_CATALOG are aligned by construction
        &GATE_CATALOG[index.unwrap_or(0)]
    }

    /// Whether the gate's truth table is linearly separable
    ///
    /// The Perceptron converges exactly for the separable gates; XOR and XNOR
    /// hit the epoch cap instead.
    pub fn linearly_separable(self) -> bool {
        !matches!(self, GateKind::Xor | GateKind::Xnor)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GateKind {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::ALL
            .iter()
            .copied()
            .find(|k| k.key() == s)
            .ok_or_else(|| TrainerError::UnknownGate(s.to_string()))
    }
}
