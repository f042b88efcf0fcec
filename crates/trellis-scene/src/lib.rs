//! Scene compilation: declarative input trees to solvable scenes.
//!
//! The input is a JSON-compatible tree of shapes (`Rect`, `Circle`, `Text`,
//! `Arrow`) and layout containers (`StackV`, `StackH`, `Align`,
//! `Distribute`, `Background`), plus `Ref` pseudo-nodes that point back at
//! already-declared nodes. [`build_scene`] walks the tree once, assigns
//! stable identifiers, creates one node record per element, and compiles the
//! containers' deferred descriptors into slot-indexed operators for the
//! solver.
//!
//! Compilation is a pure function of the input tree: identical trees produce
//! identical id sequences and operator parameterizations on every call.

mod compile;
mod dsl;
mod input;

pub use compile::{build_scene, build_scene_from_str, build_scene_from_value};
pub use dsl::TreeBuilder;
pub use input::{Props, SceneNode};
