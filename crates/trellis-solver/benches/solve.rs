//! Solver benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smallvec::SmallVec;
use trellis_core::{NodeKind, NodeRecord};
use trellis_solver::{slot_base, solve, Operator, Scene, SlotPair, SolveOptions, StackAlignment};

/// A row of circles stacked horizontally, wrapped by a padded background,
/// with an even distribution over every other circle.
fn chain_scene(n: usize) -> Scene {
    let mut nodes = vec![
        NodeRecord::new("box", NodeKind::Rect),
        NodeRecord::new("row", NodeKind::Group),
    ];
    for i in 0..n {
        let r = 10.0 + (i % 7) as f64;
        nodes.push(
            NodeRecord::new(format!("c{i}"), NodeKind::Circle { r })
                .with_geometry(0.0, 0.0, r * 2.0, r * 2.0),
        );
    }

    let children: SmallVec<[usize; 4]> = (0..n).map(|i| slot_base(i + 2)).collect();
    let sampled: SmallVec<[SlotPair; 4]> =
        (0..n).step_by(2).map(|i| SlotPair::x(slot_base(i + 2))).collect();
    let operators = vec![
        Operator::stack_h(children, slot_base(1), 8.0, StackAlignment::Center),
        Operator::Distribute { entries: sampled, spacing: 0.0 },
        Operator::Background { child: slot_base(1), boxed: slot_base(0), padding: 12.0 },
    ];
    Scene { nodes, operators }
}

fn solve_small(c: &mut Criterion) {
    let scene = chain_scene(8);
    c.bench_function("solve_small", |b| {
        b.iter(|| solve(black_box(&scene), &SolveOptions::default()))
    });
}

fn solve_large(c: &mut Criterion) {
    let scene = chain_scene(256);
    c.bench_function("solve_large", |b| {
        b.iter(|| solve(black_box(&scene), &SolveOptions::default()))
    });
}

criterion_group!(benches, solve_small, solve_large);
criterion_main!(benches);
