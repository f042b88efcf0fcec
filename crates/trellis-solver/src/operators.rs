//! The closed catalog of layout operators.
//!
//! Every operator is an immutable value parameterized at compile time with
//! resolved integer slot offsets (never string ids). `eval` reads only the
//! current buffer and writes only the slots the operator owns in the
//! proposal buffer, so a single operator's effect is order-independent;
//! operators as a whole are evaluated in declaration order and observe each
//! other's updates across a pass.

use smallvec::SmallVec;

use crate::state::{SLOT_HEIGHT, SLOT_WIDTH, SLOT_X, SLOT_Y};

/// A (position, size) slot pair addressing one entity on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPair {
    pub pos: usize,
    pub size: usize,
}

impl SlotPair {
    /// The horizontal pair (x, width) for an entity base offset.
    pub fn x(base: usize) -> Self {
        Self { pos: base + SLOT_X, size: base + SLOT_WIDTH }
    }

    /// The vertical pair (y, height) for an entity base offset.
    pub fn y(base: usize) -> Self {
        Self { pos: base + SLOT_Y, size: base + SLOT_HEIGHT }
    }
}

/// Main axis of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Cross-axis placement of stack children relative to the container.
///
/// `Start` is left (vertical stacks) or top (horizontal stacks); `End` is
/// right or bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackAlignment {
    #[default]
    Start,
    Center,
    End,
}

/// One constraint operator over the flat geometry buffer.
///
/// Axis symmetry is handled by the slot pairs: the same variant serves both
/// axes, addressed through [`SlotPair::x`] or [`SlotPair::y`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    /// AlignLeft / AlignTop: snap every position slot to the current minimum.
    AlignMin { slots: SmallVec<[usize; 4]> },
    /// AlignRight / AlignBottom: move positions so every far edge
    /// (pos + size) meets the current maximum.
    AlignMax { entries: SmallVec<[SlotPair; 4]> },
    /// AlignCenterX / AlignCenterY: move centers to the mean of the current
    /// centers.
    AlignCenter { entries: SmallVec<[SlotPair; 4]> },
    /// Every other entry adopts the anchor's current center; the anchor
    /// itself is untouched.
    AlignCenterTo {
        anchor: SlotPair,
        others: SmallVec<[SlotPair; 4]>,
    },
    /// DistributeX / DistributeY. With `spacing == 0`, re-space positions
    /// into an arithmetic sequence between the current min and max. With
    /// `spacing > 0`, the last entry anchors and each prior entry chains
    /// backward at `following_pos - own_size - spacing`. Fewer than two
    /// entries is a no-op.
    Distribute {
        entries: SmallVec<[SlotPair; 4]>,
        spacing: f64,
    },
    /// StackV / StackH: children placed sequentially along the main axis
    /// from 0, separated by `spacing`; cross-axis placement per `alignment`
    /// against the container's current cross size. The container's main size
    /// becomes the total extent (0 when empty), its cross size the max child
    /// cross size.
    Stack {
        direction: Direction,
        children: SmallVec<[usize; 4]>,
        container: usize,
        spacing: f64,
        alignment: StackAlignment,
    },
    /// The box entity becomes the child expanded by `padding` on all sides.
    Background {
        child: usize,
        boxed: usize,
        padding: f64,
    },
}

impl Operator {
    /// Vertical stack (children laid top to bottom, cross axis = x).
    pub fn stack_v(
        children: SmallVec<[usize; 4]>,
        container: usize,
        spacing: f64,
        alignment: StackAlignment,
    ) -> Self {
        Self::Stack { direction: Direction::Vertical, children, container, spacing, alignment }
    }

    /// Horizontal stack (children laid left to right, cross axis = y).
    pub fn stack_h(
        children: SmallVec<[usize; 4]>,
        container: usize,
        spacing: f64,
        alignment: StackAlignment,
    ) -> Self {
        Self::Stack { direction: Direction::Horizontal, children, container, spacing, alignment }
    }

    /// Apply this operator: read from `cur`, write owned slots of `next`.
    pub fn eval(&self, cur: &[f64], next: &mut [f64]) {
        match self {
            Self::AlignMin { slots } => {
                let mut min = f64::INFINITY;
                for &slot in slots {
                    if cur[slot] < min {
                        min = cur[slot];
                    }
                }
                for &slot in slots {
                    next[slot] = min;
                }
            }
            Self::AlignMax { entries } => {
                let mut max = f64::NEG_INFINITY;
                for entry in entries {
                    let edge = cur[entry.pos] + cur[entry.size];
                    if edge > max {
                        max = edge;
                    }
                }
                for entry in entries {
                    next[entry.pos] = max - cur[entry.size];
                }
            }
            Self::AlignCenter { entries } => {
                let mut sum = 0.0;
                for entry in entries {
                    sum += cur[entry.pos] + cur[entry.size] / 2.0;
                }
                let mean = sum / entries.len() as f64;
                for entry in entries {
                    next[entry.pos] = mean - cur[entry.size] / 2.0;
                }
            }
            Self::AlignCenterTo { anchor, others } => {
                let center = cur[anchor.pos] + cur[anchor.size] / 2.0;
                for entry in others {
                    next[entry.pos] = center - cur[entry.size] / 2.0;
                }
            }
            Self::Distribute { entries, spacing } => {
                if entries.len() < 2 {
                    return;
                }
                if *spacing > 0.0 {
                    // Last entry stays put; everything before it chains
                    // backward, each separated from its follower by spacing.
                    let last = entries[entries.len() - 1];
                    let mut pos = cur[last.pos];
                    next[last.pos] = pos;
                    for entry in entries[..entries.len() - 1].iter().rev() {
                        pos -= cur[entry.size] + spacing;
                        next[entry.pos] = pos;
                    }
                } else {
                    let mut min = f64::INFINITY;
                    let mut max = f64::NEG_INFINITY;
                    for entry in entries {
                        min = min.min(cur[entry.pos]);
                        max = max.max(cur[entry.pos]);
                    }
                    let gap = (max - min) / (entries.len() - 1) as f64;
                    for (i, entry) in entries.iter().enumerate() {
                        next[entry.pos] = min + i as f64 * gap;
                    }
                }
            }
            Self::Stack { direction, children, container, spacing, alignment } => {
                let (main, cross) = match direction {
                    Direction::Horizontal => (SLOT_X, SLOT_Y),
                    Direction::Vertical => (SLOT_Y, SLOT_X),
                };
                let container_cross = cur[container + 2 + cross];
                let mut offset = 0.0;
                let mut max_cross = 0.0_f64;
                for &base in children {
                    let main_size = cur[base + 2 + main];
                    let cross_size = cur[base + 2 + cross];
                    next[base + main] = offset;
                    next[base + cross] = match alignment {
                        StackAlignment::Start => 0.0,
                        StackAlignment::Center => (container_cross - cross_size) / 2.0,
                        StackAlignment::End => container_cross - cross_size,
                    };
                    offset += main_size + spacing;
                    max_cross = max_cross.max(cross_size);
                }
                next[container + 2 + cross] = max_cross;
                next[container + 2 + main] =
                    if children.is_empty() { 0.0 } else { offset - spacing };
            }
            Self::Background { child, boxed, padding } => {
                next[boxed + SLOT_X] = cur[child + SLOT_X] - padding;
                next[boxed + SLOT_Y] = cur[child + SLOT_Y] - padding;
                next[boxed + SLOT_WIDTH] = cur[child + SLOT_WIDTH] + padding * 2.0;
                next[boxed + SLOT_HEIGHT] = cur[child + SLOT_HEIGHT] + padding * 2.0;
            }
        }
    }

    /// Append every slot this operator may write to `out`.
    ///
    /// The solver copies these slots from the current buffer before `eval`
    /// and blends exactly these slots afterwards, so an operator that
    /// declines to write (e.g. Distribute with one entry) proposes no
    /// change.
    pub fn owned_slots(&self, out: &mut Vec<usize>) {
        match self {
            Self::AlignMin { slots } => out.extend_from_slice(slots),
            Self::AlignMax { entries } | Self::AlignCenter { entries } => {
                out.extend(entries.iter().map(|e| e.pos));
            }
            Self::AlignCenterTo { others, .. } => {
                out.extend(others.iter().map(|e| e.pos));
            }
            Self::Distribute { entries, .. } => {
                out.extend(entries.iter().map(|e| e.pos));
            }
            Self::Stack { direction, children, container, .. } => {
                let (main, cross) = match direction {
                    Direction::Horizontal => (SLOT_X, SLOT_Y),
                    Direction::Vertical => (SLOT_Y, SLOT_X),
                };
                for &base in children {
                    out.push(base + main);
                    out.push(base + cross);
                }
                out.push(container + 2 + main);
                out.push(container + 2 + cross);
            }
            Self::Background { boxed, .. } => {
                out.extend([
                    boxed + SLOT_X,
                    boxed + SLOT_Y,
                    boxed + SLOT_WIDTH,
                    boxed + SLOT_HEIGHT,
                ]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn eval_once(op: &Operator, cur: &[f64]) -> Vec<f64> {
        let mut next = cur.to_vec();
        op.eval(cur, &mut next);
        next
    }

    #[test]
    fn test_align_min() {
        let cur = vec![30.0, 0.0, 10.0, 10.0, 10.0, 0.0, 10.0, 10.0, 20.0, 0.0, 10.0, 10.0];
        let op = Operator::AlignMin { slots: smallvec![0, 4, 8] };
        let next = eval_once(&op, &cur);
        assert_eq!(next[0], 10.0);
        assert_eq!(next[4], 10.0);
        assert_eq!(next[8], 10.0);
    }

    #[test]
    fn test_align_max_far_edges_meet() {
        // A at x=0 w=10, B at x=5 w=20 -> far edge 25
        let cur = vec![0.0, 0.0, 10.0, 0.0, 5.0, 0.0, 20.0, 0.0];
        let op = Operator::AlignMax {
            entries: smallvec![SlotPair::x(0), SlotPair::x(4)],
        };
        let next = eval_once(&op, &cur);
        assert_eq!(next[0] + cur[2], 25.0);
        assert_eq!(next[4] + cur[6], 25.0);
    }

    #[test]
    fn test_align_center_uses_mean() {
        // centers at 5 and 15 -> mean 10
        let cur = vec![0.0, 0.0, 10.0, 0.0, 10.0, 0.0, 10.0, 0.0];
        let op = Operator::AlignCenter {
            entries: smallvec![SlotPair::x(0), SlotPair::x(4)],
        };
        let next = eval_once(&op, &cur);
        assert_eq!(next[0], 5.0);
        assert_eq!(next[4], 5.0);
    }

    #[test]
    fn test_align_center_to_leaves_anchor() {
        let cur = vec![0.0, 0.0, 10.0, 0.0, 40.0, 0.0, 20.0, 0.0];
        let op = Operator::AlignCenterTo {
            anchor: SlotPair::x(4),
            others: smallvec![SlotPair::x(0)],
        };
        let next = eval_once(&op, &cur);
        // anchor center is 50; other (width 10) lands at 45
        assert_eq!(next[0], 45.0);
        assert_eq!(next[4], 40.0);
    }

    #[test]
    fn test_distribute_single_entry_is_noop() {
        let cur = vec![7.0, 0.0, 10.0, 10.0];
        let op = Operator::Distribute { entries: smallvec![SlotPair::x(0)], spacing: 0.0 };
        let next = eval_once(&op, &cur);
        assert_eq!(next, cur);
    }

    #[test]
    fn test_distribute_spacing_chains_backward_from_last() {
        // A h=16 at y=0, B h=30 at y=100; spacing 60 -> A lands at 100-16-60
        let cur = vec![0.0, 0.0, 0.0, 16.0, 0.0, 100.0, 0.0, 30.0];
        let op = Operator::Distribute {
            entries: smallvec![SlotPair::y(0), SlotPair::y(4)],
            spacing: 60.0,
        };
        let next = eval_once(&op, &cur);
        assert_eq!(next[5], 100.0);
        assert_eq!(next[1], 24.0);
    }

    #[test]
    fn test_stack_v_empty_container_sizes_to_zero() {
        let cur = vec![0.0, 0.0, 50.0, 50.0];
        let op = Operator::stack_v(smallvec![], 0, 12.0, StackAlignment::Start);
        let next = eval_once(&op, &cur);
        assert_eq!(next[2], 0.0);
        assert_eq!(next[3], 0.0);
    }

    #[test]
    fn test_background_expands_child() {
        let cur = vec![10.0, 20.0, 30.0, 40.0, 0.0, 0.0, 0.0, 0.0];
        let op = Operator::Background { child: 0, boxed: 4, padding: 5.0 };
        let next = eval_once(&op, &cur);
        assert_eq!(&next[4..8], &[5.0, 15.0, 40.0, 50.0]);
    }

    #[test]
    fn test_owned_slots_cover_stack_writes() {
        let op = Operator::stack_h(smallvec![0, 4], 8, 0.0, StackAlignment::Center);
        let mut owned = Vec::new();
        op.owned_slots(&mut owned);
        owned.sort_unstable();
        assert_eq!(owned, vec![0, 1, 4, 5, 10, 11]);
    }
}
