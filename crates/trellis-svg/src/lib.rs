//! SVG emission: solved geometry plus node records to a renderable document.
//!
//! Emission happens in two stages so tests and tooling can inspect the
//! structured form:
//!
//! 1. [`layout_to_document`] computes the stroke-aware bounding box, shifts
//!    everything so the minimum visible coordinate lands on the margin, and
//!    builds an [`SvgDocument`] of resolved drawables (including derived
//!    arrow shafts and heads)
//! 2. [`document_to_svg`] serializes the document as attribute-tag markup
//!
//! [`layout_to_svg`] composes the two. Emission never fails: container
//! nodes contribute bounds but no drawables, and arrows whose endpoints are
//! missing from the layout are silently skipped.

mod arrow;
mod ast;
mod serialize;

pub use ast::{
    layout_bounds, layout_to_document, CircleElement, LineElement, PolygonElement, RectElement,
    SvgDocument, SvgElement, TextElement, DEFAULT_ARROW_STROKE_WIDTH,
};
pub use serialize::document_to_svg;

use trellis_core::{LayoutResult, NodeRecord};

/// Render a solved layout straight to SVG markup.
pub fn layout_to_svg(layout: &LayoutResult, nodes: &[NodeRecord], margin: f64) -> String {
    document_to_svg(&layout_to_document(layout, nodes, margin))
}
