//! Core types for the Trellis layout engine.
//!
//! Trellis turns a declarative tree of shapes and layout containers into a
//! fully-positioned 2D scene. This crate holds the vocabulary shared by the
//! scene compiler, the relaxation solver, and the SVG emitter:
//!
//! - [`NodeRecord`] / [`NodeKind`]: one record per visual or container node
//! - [`Bounds`] / [`LayoutResult`]: solved geometry
//! - [`BuildError`]: the compile-time failure taxonomy

mod error;
mod geometry;
mod node;

pub use error::BuildError;
pub use geometry::{Bounds, LayoutResult};
pub use node::{NodeKind, NodeRecord};
