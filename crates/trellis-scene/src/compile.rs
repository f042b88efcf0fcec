//! Tree walking, identity assignment, and operator compilation.
//!
//! The walk is a single preorder pass: every visual or container node gets a
//! record (slot order = discovery order), while container semantics are
//! recorded as id-based descriptors. Slot offsets are only final once the
//! whole tree is walked, so descriptors are compiled into slot-indexed
//! operators at the end.

use indexmap::IndexMap;
use smallvec::SmallVec;
use trellis_core::{BuildError, NodeKind, NodeRecord};
use trellis_solver::{slot_base, Direction, Operator, Scene, SlotPair, StackAlignment};

use crate::input::{Axis, ElementKind, Props, SceneNode};

/// Compile an input tree into a solvable scene.
///
/// Fails fast on structural problems, duplicate explicit ids, or unresolved
/// references; no partial scene is ever returned.
pub fn build_scene(tree: &SceneNode) -> Result<Scene, BuildError> {
    let mut compiler = Compiler::default();
    compiler.walk(tree, "0")?;
    compiler.into_scene()
}

/// Deserialize a JSON value into an input tree, then compile it.
pub fn build_scene_from_value(value: &serde_json::Value) -> Result<Scene, BuildError> {
    let tree: SceneNode = serde_json::from_value(value.clone())
        .map_err(|err| BuildError::schema(err.to_string()))?;
    build_scene(&tree)
}

/// Parse a JSON string into an input tree, then compile it.
pub fn build_scene_from_str(json: &str) -> Result<Scene, BuildError> {
    let tree: SceneNode =
        serde_json::from_str(json).map_err(|err| BuildError::schema(err.to_string()))?;
    build_scene(&tree)
}

/// Deferred, id-based record of a container's intended operator.
#[derive(Debug)]
enum Descriptor {
    Stack {
        direction: Direction,
        container: String,
        children: Vec<String>,
        spacing: f64,
        alignment: StackAlignment,
    },
    Align {
        axis: Axis,
        alignment: String,
        children: Vec<String>,
    },
    Distribute {
        axis: Axis,
        children: Vec<String>,
        spacing: f64,
    },
    Background {
        child: String,
        boxed: String,
        padding: f64,
    },
}

#[derive(Default)]
struct Compiler {
    nodes: Vec<NodeRecord>,
    index_of: IndexMap<String, usize>,
    descriptors: Vec<Descriptor>,
}

impl Compiler {
    /// Walk one node; returns the id of the record it resolved to.
    fn walk(&mut self, node: &SceneNode, path: &str) -> Result<String, BuildError> {
        let kind = ElementKind::from_type(&node.node_type);

        if kind == ElementKind::Ref {
            let target = node
                .target
                .as_deref()
                .ok_or_else(|| BuildError::schema("Ref node without a target"))?;
            if !self.index_of.contains_key(target) {
                return Err(BuildError::UnresolvedRef { id: target.to_string() });
            }
            return Ok(target.to_string());
        }

        let id = self.assign_id(node, path)?;
        self.index_of.insert(id.clone(), self.nodes.len());
        self.nodes.push(make_record(&id, kind, &node.props));

        let mut child_ids = Vec::with_capacity(node.children.len());
        for (i, child) in node.children.iter().enumerate() {
            child_ids.push(self.walk(child, &format!("{path}.{i}"))?);
        }

        match kind {
            ElementKind::StackV | ElementKind::StackH => {
                let direction = if kind == ElementKind::StackV {
                    Direction::Vertical
                } else {
                    Direction::Horizontal
                };
                self.descriptors.push(Descriptor::Stack {
                    direction,
                    container: id.clone(),
                    children: child_ids,
                    spacing: node.props.spacing.unwrap_or(0.0),
                    alignment: stack_alignment(direction, &node.props),
                });
            }
            ElementKind::Align => {
                let alignment = node
                    .props
                    .alignment
                    .clone()
                    .or_else(|| node.props.align_type.clone())
                    .unwrap_or_else(|| "left".to_string());
                self.descriptors.push(Descriptor::Align {
                    axis: Axis::from_props(&node.props),
                    alignment,
                    children: child_ids,
                });
            }
            ElementKind::Distribute => {
                self.descriptors.push(Descriptor::Distribute {
                    axis: Axis::from_props(&node.props),
                    children: child_ids,
                    spacing: node.props.spacing.unwrap_or(0.0),
                });
            }
            ElementKind::Background => {
                if let Some(first) = child_ids.first() {
                    self.descriptors.push(Descriptor::Background {
                        child: first.clone(),
                        boxed: id.clone(),
                        padding: node.props.padding.unwrap_or(0.0),
                    });
                }
            }
            ElementKind::Arrow => {
                if child_ids.len() >= 2 {
                    let index = self.index_of[&id];
                    if let NodeKind::Arrow { from, to } = &mut self.nodes[index].kind {
                        *from = Some(child_ids[0].clone());
                        *to = Some(child_ids[1].clone());
                    }
                }
            }
            _ => {}
        }

        Ok(id)
    }

    /// Pick an id: explicit `key`, then explicit `id`, then a deterministic
    /// auto id derived from the element type and tree path. Explicit
    /// collisions are hard errors; auto collisions get a numeric suffix.
    fn assign_id(&self, node: &SceneNode, path: &str) -> Result<String, BuildError> {
        if let Some(key) = &node.key {
            if self.index_of.contains_key(key) {
                return Err(BuildError::DuplicateId { id: key.clone() });
            }
            return Ok(key.clone());
        }
        if let Some(id) = &node.id {
            if self.index_of.contains_key(id) {
                return Err(BuildError::DuplicateId { id: id.clone() });
            }
            return Ok(id.clone());
        }

        let mut id = format!("{}-{}", node.node_type.to_lowercase(), path);
        if self.index_of.contains_key(&id) {
            let mut counter = 1;
            while self.index_of.contains_key(&format!("{id}-{counter}")) {
                counter += 1;
            }
            id = format!("{id}-{counter}");
        }
        Ok(id)
    }

    fn base_of(&self, id: &str) -> Result<usize, BuildError> {
        self.index_of
            .get(id)
            .map(|&index| slot_base(index))
            .ok_or_else(|| BuildError::UnresolvedRef { id: id.to_string() })
    }

    fn pair_of(&self, id: &str, axis: Axis) -> Result<SlotPair, BuildError> {
        let base = self.base_of(id)?;
        Ok(match axis {
            Axis::X => SlotPair::x(base),
            Axis::Y => SlotPair::y(base),
        })
    }

    /// Resolve descriptors into slot-indexed operators, in declaration order.
    fn into_scene(self) -> Result<Scene, BuildError> {
        let mut operators = Vec::with_capacity(self.descriptors.len());
        for descriptor in &self.descriptors {
            match descriptor {
                Descriptor::Stack { direction, container, children, spacing, alignment } => {
                    let bases = children
                        .iter()
                        .map(|id| self.base_of(id))
                        .collect::<Result<SmallVec<[usize; 4]>, _>>()?;
                    operators.push(Operator::Stack {
                        direction: *direction,
                        children: bases,
                        container: self.base_of(container)?,
                        spacing: *spacing,
                        alignment: *alignment,
                    });
                }
                Descriptor::Align { axis, alignment, children } => {
                    if let Some(op) = self.align_operator(*axis, alignment, children)? {
                        operators.push(op);
                    }
                }
                Descriptor::Distribute { axis, children, spacing } => {
                    let entries = children
                        .iter()
                        .map(|id| self.pair_of(id, *axis))
                        .collect::<Result<SmallVec<[SlotPair; 4]>, _>>()?;
                    operators.push(Operator::Distribute { entries, spacing: *spacing });
                }
                Descriptor::Background { child, boxed, padding } => {
                    operators.push(Operator::Background {
                        child: self.base_of(child)?,
                        boxed: self.base_of(boxed)?,
                        padding: *padding,
                    });
                }
            }
        }
        Ok(Scene { nodes: self.nodes, operators })
    }

    /// An alignment string the axis does not recognize compiles to nothing.
    fn align_operator(
        &self,
        axis: Axis,
        alignment: &str,
        children: &[String],
    ) -> Result<Option<Operator>, BuildError> {
        let pairs = |ids: &[String]| {
            ids.iter()
                .map(|id| self.pair_of(id, axis))
                .collect::<Result<SmallVec<[SlotPair; 4]>, _>>()
        };

        let op = match (axis, alignment) {
            (Axis::X, "left") | (Axis::Y, "top") => {
                let slots = children
                    .iter()
                    .map(|id| -> Result<usize, BuildError> { Ok(self.pair_of(id, axis)?.pos) })
                    .collect::<Result<SmallVec<[usize; 4]>, BuildError>>()?;
                Some(Operator::AlignMin { slots })
            }
            (Axis::X, "right") | (Axis::Y, "bottom") => {
                Some(Operator::AlignMax { entries: pairs(children)? })
            }
            (Axis::X, "center") if children.len() >= 2 => {
                // Anchor on the last participant so label-like nodes snap to
                // the shape they annotate instead of averaging with it.
                let last = &children[children.len() - 1];
                let rest = &children[..children.len() - 1];
                Some(Operator::AlignCenterTo {
                    anchor: self.pair_of(last, axis)?,
                    others: pairs(rest)?,
                })
            }
            (Axis::X, "center") | (Axis::Y, "center") => {
                Some(Operator::AlignCenter { entries: pairs(children)? })
            }
            _ => None,
        };
        Ok(op)
    }
}

fn stack_alignment(direction: Direction, props: &Props) -> StackAlignment {
    match (direction, props.alignment.as_deref()) {
        (Direction::Vertical, Some("centerX")) | (Direction::Horizontal, Some("centerY")) => {
            StackAlignment::Center
        }
        (Direction::Vertical, Some("right")) | (Direction::Horizontal, Some("bottom")) => {
            StackAlignment::End
        }
        _ => StackAlignment::Start,
    }
}

/// Create the node record for one element, applying per-kind defaults.
fn make_record(id: &str, kind: ElementKind, props: &Props) -> NodeRecord {
    let base = NodeRecord {
        id: id.to_string(),
        x: props.x.unwrap_or(0.0),
        y: props.y.unwrap_or(0.0),
        width: props.width.unwrap_or(0.0),
        height: props.height.unwrap_or(0.0),
        kind: NodeKind::Group,
        fill: props.fill.clone(),
        stroke: props.stroke.clone(),
        stroke_width: props.stroke_width,
    };
    match kind {
        ElementKind::Rect => NodeRecord {
            kind: NodeKind::Rect,
            stroke_width: props.stroke_width.or(Some(3.0)),
            ..base
        },
        // The background box is a rect; its geometry comes entirely from the
        // Background operator, never from props.
        ElementKind::Background => NodeRecord {
            kind: NodeKind::Rect,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            stroke_width: props.stroke_width.or(Some(3.0)),
            ..base
        },
        ElementKind::Circle => {
            let r = props.r.unwrap_or(0.0);
            NodeRecord {
                kind: NodeKind::Circle { r },
                width: r * 2.0,
                height: r * 2.0,
                stroke_width: props.stroke_width.or(Some(1.0)),
                ..base
            }
        }
        ElementKind::Text => {
            let text = props.text.clone().unwrap_or_default();
            NodeRecord {
                width: props.width.unwrap_or(text.len() as f64 * 8.0),
                height: props.height.unwrap_or(16.0),
                kind: NodeKind::Text { text },
                fill: props.fill.clone().or(Some("black".to_string())),
                ..base
            }
        }
        ElementKind::Arrow => NodeRecord {
            kind: NodeKind::Arrow { from: None, to: None },
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            stroke_width: props.stroke_width.or(Some(3.0)),
            ..base
        },
        // Containers and unrecognized types: pure layout participants.
        _ => NodeRecord {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            fill: None,
            stroke: None,
            stroke_width: None,
            ..base
        },
    }
}
