// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Trace Dump Tool

Runs the Perceptron training simulation for one gate and prints the complete
iteration trace as pretty JSON.

Usage:
  cargo run --bin trace_dump -- <gate>

Example:
  cargo run --bin trace_dump -- and
  RUST_LOG=debug cargo run --bin trace_dump -- xor
*/

use std::env;

use perceptron_lab::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <gate>", args[0]);
        eprintln!(
            "\nGates: {}",
            gate_catalog()
                .iter()
                .map(|g| g.kind.key())
                .collect::<Vec<_>>()
                .join(", ")
        );
        std::process::exit(1);
    }

    let kind: GateKind = args[1].parse()?;
    let gate = kind.definition();

    println!("Perceptron Trace Dump");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Gate: {} - {}", gate.label, gate.description);
    println!();

    let result = simulate(gate);
    println!("{}", serde_json::to_string_pretty(&result)?);

    if result.converged {
        println!(
            "\nConverged in {} epoch(s): {}",
            result.epochs_completed,
            BoundaryLine::new(
                result.final_state.w1,
                result.final_state.w2,
                result.final_state.b
            )
        );
    } else {
        println!(
            "\nDid not converge within {} epochs (expected for non-separable gates).",
            result.epochs_completed
        );
    }

    Ok(())
}
