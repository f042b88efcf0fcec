//! The planet-row example, end to end: a padded background around a
//! horizontally stacked, vertically centered row of circles, with a label
//! aligned to and connected to the first circle.

use trellis::{
    build_scene, layout_bounds, layout_to_document, solve, LayoutResult, Props, Scene, SceneNode,
    SolveOptions, SvgElement, TreeBuilder,
};

const EPS: f64 = 1e-6;

fn planet_tree() -> SceneNode {
    let mut b = TreeBuilder::new();
    let mercury = b.circle(styled(15.0, "#EBE3CF")).with_key("mercury");
    let venus = b.circle(styled(36.0, "#DC933C")).with_key("venus");
    let earth = b.circle(styled(38.0, "#179DD7")).with_key("earth");
    let mars = b.circle(styled(21.0, "#F1CF8E")).with_key("mars");
    let planets = b
        .stack_h(50.0, "centerY", vec![mercury, venus, earth, mars])
        .with_key("planets");
    let frame = b.background(10.0, Props::new(), planets).with_key("frame");
    let label = b.text(Props::new(), "Mercury").with_key("label");
    let centered = b.align("centerX", vec![label, b.reference("mercury")]);
    let spread = b.distribute("vertical", 60.0, vec![b.reference("label"), b.reference("mercury")]);
    let link = b.arrow(b.reference("label"), b.reference("mercury"));
    b.root(vec![frame, centered, spread, link])
}

fn styled(r: f64, fill: &str) -> Props {
    Props::new().with_radius(r).with_fill(fill).with_stroke("black").with_stroke_width(3.0)
}

fn solved() -> (Scene, LayoutResult) {
    let scene = build_scene(&planet_tree()).unwrap();
    let layout = solve(&scene, &SolveOptions::undamped());
    (scene, layout)
}

fn center(layout: &LayoutResult, id: &str) -> (f64, f64) {
    let bx = &layout[id];
    (bx.center_x(), bx.center_y())
}

#[test]
fn test_circles_stay_within_stack_and_do_not_overlap() {
    let (_, layout) = solved();
    let container = layout["planets"];
    let ids = ["mercury", "venus", "earth", "mars"];
    for id in ids {
        assert!(container.contains(&layout[id], EPS), "{id} escaped the stack");
    }
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            let (ax, ay) = center(&layout, a);
            let (bx, by) = center(&layout, b);
            let dist = ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt();
            let min_dist = layout[*a].width / 2.0 + layout[*b].width / 2.0;
            assert!(dist + EPS >= min_dist, "{a} and {b} overlap");
        }
    }
}

#[test]
fn test_circle_centers_share_one_baseline() {
    let (_, layout) = solved();
    let (_, first) = center(&layout, "mercury");
    for id in ["venus", "earth", "mars"] {
        let (_, cy) = center(&layout, id);
        assert!((cy - first).abs() < EPS);
    }
}

#[test]
fn test_stack_sizes_to_its_children() {
    let (_, layout) = solved();
    // cross size = the largest diameter, main size = diameters plus gaps
    assert!((layout["planets"].height - 76.0).abs() < EPS);
    assert!((layout["planets"].width - (30.0 + 72.0 + 76.0 + 42.0 + 3.0 * 50.0)).abs() < EPS);
}

#[test]
fn test_background_wraps_the_stack_with_padding() {
    let (_, layout) = solved();
    let frame = layout["frame"];
    let planets = layout["planets"];
    assert!((frame.x - (planets.x - 10.0)).abs() < EPS);
    assert!((frame.y - (planets.y - 10.0)).abs() < EPS);
    assert!((frame.width - (planets.width + 20.0)).abs() < EPS);
    assert!((frame.height - (planets.height + 20.0)).abs() < EPS);
}

#[test]
fn test_label_is_centered_on_mercury() {
    let (_, layout) = solved();
    let (label_cx, _) = center(&layout, "label");
    let (mercury_cx, _) = center(&layout, "mercury");
    assert!((label_cx - mercury_cx).abs() < EPS);
}

#[test]
fn test_arrow_runs_from_label_toward_mercury_with_clearance() {
    let (scene, layout) = solved();
    let doc = layout_to_document(&layout, &scene.nodes, 0.0);
    let shift_y = -layout_bounds(&layout, &scene.nodes).y;

    let lines: Vec<_> = doc
        .children
        .iter()
        .filter_map(|el| match el {
            SvgElement::Line(line) => Some(line),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 1);
    assert!(doc.children.iter().any(|el| matches!(el, SvgElement::Polygon(_))));

    let line = lines[0];
    let label = layout["label"];
    let mercury = layout["mercury"];
    assert!(line.y1 > label.bottom() + shift_y);
    assert!(line.y2 < mercury.y + shift_y);
    assert_eq!(line.stroke_width, Some(3.0));
}

#[test]
fn test_document_covers_the_padded_frame() {
    let (scene, layout) = solved();
    let doc = layout_to_document(&layout, &scene.nodes, 10.0);
    // frame is 96 tall before stroke expansion and the outer margin
    assert!(doc.height >= 76.0 + 2.0 * 10.0);
    assert!(doc.width >= 370.0 + 2.0 * 10.0);
}
