// Copyright 2025 Perceptron Lab Developers
// SPDX-License-Identifier: Apache-2.0

//! Boundary segment derivation
//!
//! The decision boundary of a 2-input neuron is the zero set of
//! `w1·x1 + w2·x2 + b`. For display it is intersected with the four edges of
//! the window `[min, max]²`: each vertical edge is solved for x2 when |w2| is
//! non-negligible, each horizontal edge for x1 when |w1| is non-negligible.
//! Points outside the window are discarded and coincident points collapsed;
//! the first two survivors form the rendered segment.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Display window of the training-trace charts, slightly padded around the
/// unit square of the pattern set
pub const DEFAULT_RANGE: (f64, f64) = (-0.2, 1.2);

/// Tolerance for near-zero weights and window-bounds checks
const SOLVE_EPSILON: f64 = 1e-9;

/// Tolerance for collapsing coincident candidate points
const DEDUP_EPSILON: f64 = 1e-6;

/// A point in pattern space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x1: f64,
    pub x2: f64,
}

/// A boundary segment clipped to the display window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

fn push_candidate(points: &mut Vec<Point>, x1: f64, x2: f64, min: f64, max: f64) {
    if x1 < min - SOLVE_EPSILON || x1 > max + SOLVE_EPSILON {
        return;
    }
    if x2 < min - SOLVE_EPSILON || x2 > max + SOLVE_EPSILON {
        return;
    }
    let coincident = points
        .iter()
        .any(|p| (p.x1 - x1).abs() < DEDUP_EPSILON && (p.x2 - x2).abs() < DEDUP_EPSILON);
    if !coincident {
        points.push(Point { x1, x2 });
    }
}

/// Zero-level decision boundary of (w1, w2, b), clipped to `[min, max]²`
///
/// Returns `None` when the weight vector is degenerate (net input is the
/// constant b everywhere) or when the line does not cross the window.
pub fn decision_boundary(w1: f64, w2: f64, b: f64, range: (f64, f64)) -> Option<Segment> {
    if w1.abs() < SOLVE_EPSILON && w2.abs() < SOLVE_EPSILON {
        return None;
    }
    let (min, max) = range;
    let mut points: Vec<Point> = Vec::with_capacity(4);

    if w2.abs() >= SOLVE_EPSILON {
        push_candidate(&mut points, min, -(w1 * min + b) / w2, min, max);
        push_candidate(&mut points, max, -(w1 * max + b) / w2, min, max);
    }
    if w1.abs() >= SOLVE_EPSILON {
        push_candidate(&mut points, -(w2 * min + b) / w1, min, min, max);
        push_candidate(&mut points, -(w2 * max + b) / w1, max, min, max);
    }

    if points.len() < 2 {
        return None;
    }
    Some(Segment {
        start: points[0],
        end: points[1],
    })
}

/// Boundary segments for several crossing levels of the same weight vector
///
/// Level ℓ is the locus `w1·x1 + w2·x2 + b = ℓ`, derived as the zero set
/// with bias `b - ℓ`. Levels whose line misses the window are skipped; the
/// gaussian activation's symmetric pair yields two parallel segments.
pub fn boundary_segments(
    w1: f64,
    w2: f64,
    b: f64,
    levels: &[f64],
    range: (f64, f64),
) -> Vec<Segment> {
    levels
        .iter()
        .filter_map(|&level| decision_boundary(w1, w2, b - level, range))
        .collect()
}

/// Displayable boundary equation of a weight/bias triple
///
/// Formats as `w1·x1 + w2·x2 + b = 0`, or an explicit undefined-boundary
/// sentinel for a degenerate weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryLine {
    pub w1: f64,
    pub w2: f64,
    pub b: f64,
}

impl BoundaryLine {
    pub fn new(w1: f64, w2: f64, b: f64) -> Self {
        Self { w1, w2, b }
    }

    /// Whether the net input is constant everywhere
    pub fn is_degenerate(&self) -> bool {
        self.w1.abs() < SOLVE_EPSILON && self.w2.abs() < SOLVE_EPSILON
    }

    /// The clipped segment of this line, if it crosses the window
    pub fn segment(&self, range: (f64, f64)) -> Option<Segment> {
        decision_boundary(self.w1, self.w2, self.b, range)
    }
}

impl fmt::Display for BoundaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_degenerate() {
            write!(f, "undefined boundary (w1 = w2 = 0)")
        } else {
            write!(
                f,
                "{:.2}·x1 + {:.2}·x2 + {:.2} = 0",
                self.w1, self.w2, self.b
            )
        }
    }
}
