//! The SVG element AST and layout-to-document conversion.

use std::collections::HashMap;

use glam::DVec2;
use trellis_core::{Bounds, LayoutResult, NodeKind, NodeRecord};

use crate::arrow;

/// Stroke width assumed for arrows that do not carry an explicit one, both
/// for bounds expansion and for the emitted attributes.
pub const DEFAULT_ARROW_STROKE_WIDTH: f64 = 3.0;

/// A drawable in the output document, carrying resolved absolute
/// coordinates and copied visual attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgElement {
    Rect(RectElement),
    Circle(CircleElement),
    Text(TextElement),
    Line(LineElement),
    Polygon(PolygonElement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectElement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleElement {
    pub id: String,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineElement {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonElement {
    /// Arrow heads are anonymous; the id stays on the shaft line.
    pub id: Option<String>,
    pub points: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

/// The renderable output document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
    pub children: Vec<SvgElement>,
}

/// Visual attributes as they appear in the output.
#[derive(Debug, Clone)]
pub(crate) struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

pub(crate) fn resolved_style(record: &NodeRecord) -> Style {
    let fill = record.fill.clone().or_else(|| {
        Some(match record.kind {
            NodeKind::Text { .. } => "black".to_string(),
            _ => "none".to_string(),
        })
    });
    let stroke = record.stroke.clone().or_else(|| Some("black".to_string()));
    let stroke_width = record.stroke_width.or(match record.kind {
        NodeKind::Arrow { .. } => Some(DEFAULT_ARROW_STROKE_WIDTH),
        _ => None,
    });
    Style { fill, stroke, stroke_width }
}

fn bounds_stroke_width(record: &NodeRecord) -> f64 {
    match record.stroke_width {
        Some(width) => width,
        None => match record.kind {
            NodeKind::Arrow { .. } => DEFAULT_ARROW_STROKE_WIDTH,
            _ => 0.0,
        },
    }
}

/// Union bounding box over all laid-out entities, each expanded by half its
/// stroke width (vector strokes straddle the geometric edge). Entities with
/// no record are treated as strokeless. An empty layout yields a zero box.
pub fn layout_bounds(layout: &LayoutResult, nodes: &[NodeRecord]) -> Bounds {
    let by_id: HashMap<&str, &NodeRecord> =
        nodes.iter().map(|node| (node.id.as_str(), node)).collect();

    let mut bounds: Option<Bounds> = None;
    for (id, bx) in layout {
        let stroke = by_id.get(id.as_str()).map_or(0.0, |record| bounds_stroke_width(record));
        let expanded = bx.expand(stroke / 2.0);
        bounds = Some(match bounds {
            Some(acc) => acc.union(&expanded),
            None => expanded,
        });
    }
    bounds.unwrap_or_default()
}

/// Build the output document from a solved layout.
///
/// All coordinates are shifted so the minimum stroke-expanded coordinate
/// maps to `margin` on each axis; no drawable ends up at a negative
/// coordinate for margin >= 0. Document size is the stroke-expanded extent
/// plus the margin on every side.
pub fn layout_to_document(
    layout: &LayoutResult,
    nodes: &[NodeRecord],
    margin: f64,
) -> SvgDocument {
    let by_id: HashMap<&str, &NodeRecord> =
        nodes.iter().map(|node| (node.id.as_str(), node)).collect();

    let bounds = layout_bounds(layout, nodes);
    let offset = DVec2::new(margin - bounds.x, margin - bounds.y);

    let mut children = Vec::new();
    for (id, bx) in layout {
        let Some(record) = by_id.get(id.as_str()) else {
            continue;
        };
        match &record.kind {
            NodeKind::Group => {}
            NodeKind::Rect => children.push(build_rect(id, bx, record, offset)),
            NodeKind::Circle { r } => children.push(build_circle(id, bx, *r, record, offset)),
            NodeKind::Text { text } => children.push(build_text(id, bx, text, record, offset)),
            NodeKind::Arrow { from, to } => {
                let endpoints = from
                    .as_deref()
                    .and_then(|f| layout.get(f))
                    .zip(to.as_deref().and_then(|t| layout.get(t)));
                if let Some((from_box, to_box)) = endpoints {
                    let style = resolved_style(record);
                    let (line, head) = arrow::arrow_elements(id, from_box, to_box, offset, &style);
                    children.push(SvgElement::Line(line));
                    children.push(SvgElement::Polygon(head));
                }
            }
        }
    }

    SvgDocument {
        width: bounds.width + margin * 2.0,
        height: bounds.height + margin * 2.0,
        children,
    }
}

fn build_rect(id: &str, bx: &Bounds, record: &NodeRecord, offset: DVec2) -> SvgElement {
    let stroke = record.stroke_width.unwrap_or(0.0);
    let style = resolved_style(record);
    SvgElement::Rect(RectElement {
        id: id.to_string(),
        x: bx.x + offset.x - stroke / 2.0,
        y: bx.y + offset.y - stroke / 2.0,
        width: bx.width + stroke,
        height: bx.height + stroke,
        fill: style.fill,
        stroke: style.stroke,
        stroke_width: style.stroke_width,
    })
}

fn build_circle(id: &str, bx: &Bounds, r: f64, record: &NodeRecord, offset: DVec2) -> SvgElement {
    let style = resolved_style(record);
    SvgElement::Circle(CircleElement {
        id: id.to_string(),
        cx: bx.x + offset.x + r,
        cy: bx.y + offset.y + r,
        r,
        fill: style.fill,
        stroke: style.stroke,
        stroke_width: style.stroke_width,
    })
}

fn build_text(id: &str, bx: &Bounds, text: &str, record: &NodeRecord, offset: DVec2) -> SvgElement {
    let style = resolved_style(record);
    SvgElement::Text(TextElement {
        id: id.to_string(),
        x: bx.x + offset.x,
        y: bx.y + offset.y,
        text: text.to_string(),
        fill: style.fill,
        stroke: style.stroke,
        stroke_width: style.stroke_width,
    })
}
