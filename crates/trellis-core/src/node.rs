//! Node records: one per visual or layout-container element.

/// What a node draws, if anything.
///
/// `Group` covers every pure container (stacks, align/distribute groups,
/// unrecognized element types): it participates in layout and contributes to
/// the document bounds, but is never emitted as a drawable.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    #[default]
    Group,
    Rect,
    Circle {
        r: f64,
    },
    Text {
        text: String,
    },
    /// A connector between two other nodes, identified by id. The endpoints
    /// are wired during compilation; an arrow that never received two
    /// children keeps `None` endpoints and emits nothing.
    Arrow {
        from: Option<String>,
        to: Option<String>,
    },
}

/// One entity in a compiled scene.
///
/// `x`/`y`/`width`/`height` are the initial geometry defaults seeding the
/// solver; the solved values live in the
/// [`LayoutResult`](crate::LayoutResult). Records are created once per build
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRecord {
    /// Globally unique within the scene, stable across rebuilds of the same
    /// input tree.
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: NodeKind,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl NodeRecord {
    /// Create a record with zeroed geometry and no visual attributes.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            kind,
            fill: None,
            stroke: None,
            stroke_width: None,
        }
    }

    /// Set the initial geometry.
    pub fn with_geometry(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Set the fill color.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Set the stroke color.
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Whether the emitter produces drawables for this node.
    pub fn is_drawable(&self) -> bool {
        !matches!(self.kind, NodeKind::Group)
    }
}
