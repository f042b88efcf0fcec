//! Ergonomic construction helpers for input trees.
//!
//! [`TreeBuilder`] owns the auto-increment counter that names anonymous
//! helper nodes (`circle1`, `stackH2`, …), so builds stay pure and
//! reentrant: two builders never share naming state, and rebuilding with a
//! fresh builder reproduces the same tree. Nodes that matter to layout
//! references should still get an explicit key via
//! [`SceneNode::with_key`](crate::SceneNode::with_key).

use crate::input::{Props, SceneNode};

/// Stateful constructor for [`SceneNode`] trees.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    counter: u64,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn uid(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{prefix}{}", self.counter)
    }

    /// The canonical scene root: a `Group` with id `scene`.
    pub fn root(&mut self, children: Vec<SceneNode>) -> SceneNode {
        SceneNode::new("Group").with_id("scene").with_children(children)
    }

    /// An anonymous grouping container.
    pub fn group(&mut self, children: Vec<SceneNode>) -> SceneNode {
        let id = self.uid("group");
        SceneNode::new("Group").with_id(id).with_children(children)
    }

    pub fn rect(&mut self, props: Props) -> SceneNode {
        let id = self.uid("rect");
        SceneNode::new("Rect").with_id(id).with_props(props)
    }

    pub fn circle(&mut self, props: Props) -> SceneNode {
        let id = self.uid("circle");
        SceneNode::new("Circle").with_id(id).with_props(props)
    }

    pub fn text(&mut self, props: Props, text: impl Into<String>) -> SceneNode {
        let id = self.uid("text");
        let props = Props { text: Some(text.into()), ..props };
        SceneNode::new("Text").with_id(id).with_props(props)
    }

    /// A padded box drawn behind `child`.
    pub fn background(&mut self, padding: f64, props: Props, child: SceneNode) -> SceneNode {
        let id = self.uid("bg");
        let props = Props { padding: Some(padding), ..props };
        SceneNode::new("Background").with_id(id).with_props(props).with_children(vec![child])
    }

    /// Horizontal stack; `alignment` is the cross-axis mode
    /// (`top`/`centerY`/`bottom`).
    pub fn stack_h(
        &mut self,
        spacing: f64,
        alignment: &str,
        children: Vec<SceneNode>,
    ) -> SceneNode {
        let id = self.uid("stackH");
        let props = Props {
            spacing: Some(spacing),
            alignment: Some(alignment.to_string()),
            ..Props::default()
        };
        SceneNode::new("StackH").with_id(id).with_props(props).with_children(children)
    }

    /// Vertical stack; `alignment` is the cross-axis mode
    /// (`left`/`centerX`/`right`).
    pub fn stack_v(
        &mut self,
        spacing: f64,
        alignment: &str,
        children: Vec<SceneNode>,
    ) -> SceneNode {
        let id = self.uid("stackV");
        let props = Props {
            spacing: Some(spacing),
            alignment: Some(alignment.to_string()),
            ..Props::default()
        };
        SceneNode::new("StackV").with_id(id).with_props(props).with_children(children)
    }

    /// An alignment group. Axis-suffixed modes (`centerX`, `centerY`) are
    /// split into axis + mode; `top`/`bottom` imply the y axis, everything
    /// else defaults to x.
    pub fn align(&mut self, alignment: &str, children: Vec<SceneNode>) -> SceneNode {
        let id = self.uid("align");
        let (axis, mode) = match alignment {
            _ if alignment.ends_with('X') => ("x", alignment.trim_end_matches('X')),
            _ if alignment.ends_with('Y') => ("y", alignment.trim_end_matches('Y')),
            "top" | "bottom" => ("y", alignment),
            _ => ("x", alignment),
        };
        let props = Props {
            axis: Some(axis.to_string()),
            alignment: Some(mode.to_string()),
            ..Props::default()
        };
        SceneNode::new("Align").with_id(id).with_props(props).with_children(children)
    }

    /// A distribution group; `direction` is `horizontal`/`vertical` (or the
    /// bare axis name).
    pub fn distribute(
        &mut self,
        direction: &str,
        spacing: f64,
        children: Vec<SceneNode>,
    ) -> SceneNode {
        let id = self.uid("dist");
        let axis = match direction {
            "vertical" | "y" => "y",
            _ => "x",
        };
        let props = Props {
            axis: Some(axis.to_string()),
            spacing: Some(spacing),
            ..Props::default()
        };
        SceneNode::new("Distribute").with_id(id).with_props(props).with_children(children)
    }

    /// A connector from `from` to `to` (usually two [`reference`]s).
    ///
    /// [`reference`]: Self::reference
    pub fn arrow(&mut self, from: SceneNode, to: SceneNode) -> SceneNode {
        let id = self.uid("arrow");
        SceneNode::new("Arrow").with_id(id).with_children(vec![from, to])
    }

    /// A pointer at an already-declared node; creates no record of its own.
    pub fn reference(&self, target: impl Into<String>) -> SceneNode {
        SceneNode { target: Some(target.into()), ..SceneNode::new("Ref") }
    }
}
