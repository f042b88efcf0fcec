//! Trellis: a declarative 2D diagram layout engine.
//!
//! A tree of shapes (`Rect`, `Circle`, `Text`, `Arrow`) and layout
//! containers (`StackV`, `StackH`, `Align`, `Distribute`, `Background`) is
//! compiled into a flat geometry buffer plus an ordered list of constraint
//! operators, relaxed to a fixed point by damped iteration, and emitted as
//! an SVG document.
//!
//! # Example
//!
//! ```
//! use trellis::{render_svg, Props, TreeBuilder};
//!
//! let mut b = TreeBuilder::new();
//! let small = b.circle(Props::new().with_radius(15.0));
//! let large = b.circle(Props::new().with_radius(30.0));
//! let row = b.stack_h(12.0, "centerY", vec![small, large]);
//! let tree = b.root(vec![row]);
//!
//! let svg = render_svg(&tree).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! Each pipeline stage is also available on its own:
//! [`build_scene`] -> [`solve`] -> [`layout_to_svg`].

pub use trellis_core::{Bounds, BuildError, LayoutResult, NodeKind, NodeRecord};
pub use trellis_scene::{
    build_scene, build_scene_from_str, build_scene_from_value, Props, SceneNode, TreeBuilder,
};
pub use trellis_solver::{
    solve, solve_with_stats, Convergence, Operator, Scene, SolveOptions, StackAlignment,
};
pub use trellis_svg::{
    document_to_svg, layout_bounds, layout_to_document, layout_to_svg, SvgDocument, SvgElement,
};

/// Compile, solve, and emit in one call, with default solver options and no
/// outer margin.
pub fn render_svg(tree: &SceneNode) -> Result<String, BuildError> {
    render_svg_with(tree, &SolveOptions::default(), 0.0)
}

/// Like [`render_svg`] with explicit solver options and margin.
pub fn render_svg_with(
    tree: &SceneNode,
    options: &SolveOptions,
    margin: f64,
) -> Result<String, BuildError> {
    let scene = build_scene(tree)?;
    let layout = solve(&scene, options);
    Ok(layout_to_svg(&layout, &scene.nodes, margin))
}
