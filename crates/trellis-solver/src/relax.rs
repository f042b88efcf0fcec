//! Damped fixed-point iteration over the operator list.
//!
//! The constraint set is neither guaranteed acyclic nor guaranteed to have a
//! closed form (a Background depends on a Stack, an Align may depend on a
//! Distribute's output), so the solver relaxes: each pass evaluates every
//! operator in declaration order and blends the proposal into the live state
//! immediately, so later operators in the same pass see the partially
//! updated geometry (successive relaxation rather than a stale snapshot).

use trellis_core::LayoutResult;

use crate::state::{slot_base, GeometryState};
use crate::Scene;

/// Solver tuning knobs.
///
/// Values are deliberately unvalidated to keep the hot loop branch-free: a
/// damping outside `(0, 1]` or non-finite geometry defaults risk
/// non-convergence or NaN propagation, which still terminates at the
/// iteration budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    pub max_iterations: usize,
    pub epsilon: f64,
    pub damping: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self { max_iterations: 100, epsilon: 1e-6, damping: 0.5 }
    }
}

impl SolveOptions {
    /// Undamped updates: proposals are adopted wholesale each pass.
    pub fn undamped() -> Self {
        Self { damping: 1.0, ..Self::default() }
    }
}

/// How a solve run ended. Non-convergence is not an error; the layout is
/// whatever state the final pass left behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    /// Passes actually executed.
    pub iterations: usize,
    /// Largest proposed per-slot change observed in the final pass.
    pub residual: f64,
    pub converged: bool,
}

/// Relax the scene to a fixed point and extract the layout.
pub fn solve(scene: &Scene, options: &SolveOptions) -> LayoutResult {
    solve_with_stats(scene, options).0
}

/// Like [`solve`], also reporting how the run converged.
pub fn solve_with_stats(scene: &Scene, options: &SolveOptions) -> (LayoutResult, Convergence) {
    let mut cur = GeometryState::from_nodes(&scene.nodes).into_values();
    let mut next = cur.clone();
    let mut owned: Vec<usize> = Vec::new();

    let mut iterations = 0;
    let mut residual = f64::INFINITY;
    while iterations < options.max_iterations && residual > options.epsilon {
        residual = 0.0;
        for op in &scene.operators {
            owned.clear();
            op.owned_slots(&mut owned);
            for &slot in &owned {
                next[slot] = cur[slot];
            }
            op.eval(&cur, &mut next);
            for &slot in &owned {
                let delta = next[slot] - cur[slot];
                if delta.abs() > residual {
                    residual = delta.abs();
                }
                cur[slot] += options.damping * delta;
            }
        }
        iterations += 1;
        log::trace!("pass {iterations}: residual {residual:.3e}");
    }

    let converged = residual <= options.epsilon;
    if converged {
        log::debug!("layout converged after {iterations} passes (residual {residual:.3e})");
    } else {
        log::debug!(
            "layout iteration budget exhausted after {iterations} passes (residual {residual:.3e})"
        );
    }

    let mut layout = LayoutResult::with_capacity(scene.nodes.len());
    for (i, node) in scene.nodes.iter().enumerate() {
        let base = slot_base(i);
        layout.insert(
            node.id.clone(),
            trellis_core::Bounds::new(cur[base], cur[base + 1], cur[base + 2], cur[base + 3]),
        );
    }
    (layout, Convergence { iterations, residual, converged })
}
