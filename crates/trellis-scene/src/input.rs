//! The raw input tree model and its one-shot narrowing.
//!
//! Host adapters hand over duck-typed JSON; deserialization into
//! [`SceneNode`]/[`Props`] is the structural validation pass, and
//! [`ElementKind::from_type`] narrows the open `type` string into the closed
//! set of element kinds the compiler works with. Unrecognized types become
//! generic containers, unknown prop keys are ignored.

use serde::{Deserialize, Serialize};

/// One node of the declarative input tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Element type, e.g. `"Circle"` or `"StackH"`.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Legacy explicit identifier; `key` wins when both are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Preferred explicit identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub props: Props,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
    /// Target id, only meaningful for `Ref` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl SceneNode {
    /// Create a childless node of the given type.
    pub fn new(node_type: impl Into<String>) -> Self {
        Self { node_type: node_type.into(), ..Self::default() }
    }

    /// Attach an explicit key (takes priority over `id` and auto ids).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Attach a legacy explicit id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.children = children;
        self
    }
}

/// Recognized node properties. Everything is optional; per-kind defaults are
/// applied while the compiler creates node records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Props {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Circle radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(rename = "stroke-width", skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Stack/Distribute gap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    /// Stack cross-axis mode or Align mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    /// Legacy alias for `alignment` on Align containers.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub align_type: Option<String>,
    /// Align/Distribute axis: `"x"` or `"y"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<String>,
    /// Alternative spelling for `axis`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Background padding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_radius(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

/// The closed element-kind set the compiler dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    Group,
    Rect,
    Circle,
    Text,
    Arrow,
    Background,
    StackV,
    StackH,
    Align,
    Distribute,
    Ref,
    /// Generic fallback container for unrecognized types.
    Other,
}

impl ElementKind {
    pub(crate) fn from_type(node_type: &str) -> Self {
        match node_type {
            "Group" => Self::Group,
            "Rect" => Self::Rect,
            "Circle" => Self::Circle,
            "Text" => Self::Text,
            "Arrow" => Self::Arrow,
            "Background" => Self::Background,
            "StackV" => Self::StackV,
            "StackH" => Self::StackH,
            "Align" => Self::Align,
            "Distribute" => Self::Distribute,
            "Ref" => Self::Ref,
            _ => Self::Other,
        }
    }
}

/// Layout axis named by `axis`/`direction` props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    /// `axis` wins over `direction`; anything unrecognized falls back to X.
    pub(crate) fn from_props(props: &Props) -> Self {
        let named = props.axis.as_deref().or(props.direction.as_deref());
        match named {
            Some("y") => Self::Y,
            _ => Self::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tree() {
        let json = r#"{
            "type": "StackH",
            "key": "row",
            "props": { "spacing": 50, "alignment": "centerY" },
            "children": [
                { "type": "Circle", "props": { "r": 15, "stroke-width": 3 } },
                { "type": "Ref", "target": "elsewhere" }
            ]
        }"#;
        let node: SceneNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.node_type, "StackH");
        assert_eq!(node.key.as_deref(), Some("row"));
        assert_eq!(node.props.spacing, Some(50.0));
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].props.stroke_width, Some(3.0));
        assert_eq!(node.children[1].target.as_deref(), Some("elsewhere"));
    }

    #[test]
    fn test_unknown_prop_keys_are_ignored() {
        let json = r#"{ "type": "Rect", "props": { "width": 4, "glow": true } }"#;
        let node: SceneNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.props.width, Some(4.0));
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let json = r#"{ "props": { "r": 3 } }"#;
        assert!(serde_json::from_str::<SceneNode>(json).is_err());
    }

    #[test]
    fn test_axis_narrowing() {
        let mut props = Props::new();
        assert_eq!(Axis::from_props(&props), Axis::X);
        props.direction = Some("y".into());
        assert_eq!(Axis::from_props(&props), Axis::Y);
        props.axis = Some("x".into());
        assert_eq!(Axis::from_props(&props), Axis::X);
    }

    #[test]
    fn test_unrecognized_type_is_generic_container() {
        assert_eq!(ElementKind::from_type("Sparkle"), ElementKind::Other);
        assert_eq!(ElementKind::from_type("Circle"), ElementKind::Circle);
    }
}
