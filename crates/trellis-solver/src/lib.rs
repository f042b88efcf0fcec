//! Constraint operators and the relaxation solver.
//!
//! A [`Scene`] pairs the node records produced by the scene compiler with an
//! ordered list of [`Operator`]s over a flat geometry buffer (4 slots per
//! node: x, y, width, height). [`solve`] drives repeated evaluation of the
//! operator list until the geometry reaches a fixed point:
//!
//! 1. **Geometry state**: initialized from each record's default geometry
//! 2. **Passes**: every operator evaluated in declaration order; each
//!    operator's proposal is blended into the live state immediately, so
//!    later operators in the same pass observe earlier updates
//! 3. **Convergence**: stop when the largest proposed per-slot change drops
//!    below epsilon, or the iteration budget runs out (best effort, never an
//!    error)

mod operators;
mod relax;
mod state;

pub use operators::{Direction, Operator, SlotPair, StackAlignment};
pub use relax::{solve, solve_with_stats, Convergence, SolveOptions};
pub use state::{slot_base, GeometryState, SLOTS_PER_NODE, SLOT_HEIGHT, SLOT_WIDTH, SLOT_X, SLOT_Y};

use trellis_core::NodeRecord;

/// A compiled scene: node records in slot order plus the operator list in
/// declaration order. Immutable once built; only the geometry buffer mutates
/// during solving.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub nodes: Vec<NodeRecord>,
    pub operators: Vec<Operator>,
}
