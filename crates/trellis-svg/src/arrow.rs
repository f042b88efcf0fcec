//! Derived arrow geometry: a shaft line plus a triangular head.
//!
//! Arrows are not solved; their drawables are computed at emission time from
//! the resolved boxes of the two endpoint entities. The shaft leaves the
//! `from` box at its bottom center and aims at the `to` box's top center,
//! with a small clearance off both edges so the arrow never overlaps the
//! shapes it connects.

use glam::DVec2;
use trellis_core::Bounds;

use crate::ast::{LineElement, PolygonElement, Style};

/// Gap kept between the arrow and each endpoint's edge.
const CLEARANCE: f64 = 5.0;
/// Length of the triangular head along the shaft direction.
const HEAD_LENGTH: f64 = 6.0;
/// Head width as a fraction of its length.
const HEAD_WIDTH_RATIO: f64 = 0.6;

pub(crate) fn arrow_elements(
    id: &str,
    from: &Bounds,
    to: &Bounds,
    offset: DVec2,
    style: &Style,
) -> (LineElement, PolygonElement) {
    let start = DVec2::new(
        from.x + offset.x + from.width / 2.0,
        from.y + offset.y + from.height + CLEARANCE,
    );
    let tip = DVec2::new(to.x + offset.x + to.width / 2.0, to.y + offset.y - CLEARANCE);

    let dir = tip - start;
    let len = dir.length();
    // Pull the shaft back so the head tip, not the line cap, touches the
    // target point. A degenerate zero-length arrow collapses onto start.
    let ratio = if len > 0.0 { (len - HEAD_LENGTH) / len } else { 0.0 };
    let shaft_end = start + dir * ratio;
    let unit = if len == 0.0 { DVec2::ZERO } else { dir / len };
    let perp = unit.perp();
    let half_width = HEAD_LENGTH * HEAD_WIDTH_RATIO / 2.0;
    let left = shaft_end + perp * half_width;
    let right = shaft_end - perp * half_width;

    let line = LineElement {
        id: id.to_string(),
        x1: start.x,
        y1: start.y,
        x2: shaft_end.x,
        y2: shaft_end.y,
        fill: style.fill.clone(),
        stroke: style.stroke.clone(),
        stroke_width: style.stroke_width,
    };
    let head = PolygonElement {
        id: None,
        points: format!("{},{} {},{} {},{}", tip.x, tip.y, left.x, left.y, right.x, right.y),
        fill: style.fill.clone(),
        stroke: style.stroke.clone(),
        stroke_width: style.stroke_width,
    };
    (line, head)
}
