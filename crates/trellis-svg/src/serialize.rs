//! Attribute-tag serialization of the SVG document.

use crate::ast::{SvgDocument, SvgElement};

/// One attribute; `None` values are omitted from the output.
type Attr<'a> = (&'a str, Option<String>);

fn number(value: f64) -> Option<String> {
    // f64 Display is locale-independent and drops trailing ".0"
    Some(value.to_string())
}

fn open_tag(out: &mut String, name: &str, attrs: &[Attr<'_>]) {
    out.push('<');
    out.push_str(name);
    for (key, value) in attrs {
        if let Some(value) = value {
            out.push_str(&format!(" {key}=\"{value}\""));
        }
    }
}

/// `<tag attr=".." />`
fn self_closing(out: &mut String, name: &str, attrs: &[Attr<'_>]) {
    open_tag(out, name, attrs);
    out.push_str(" />");
}

/// `<tag attr="..">escaped content</tag>`
fn with_content(out: &mut String, name: &str, attrs: &[Attr<'_>], content: &str) {
    open_tag(out, name, attrs);
    out.push('>');
    out.push_str(&escape_xml(content));
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn serialize_element(out: &mut String, element: &SvgElement) {
    match element {
        SvgElement::Rect(rect) => self_closing(
            out,
            "rect",
            &[
                ("id", Some(rect.id.clone())),
                ("x", number(rect.x)),
                ("y", number(rect.y)),
                ("width", number(rect.width)),
                ("height", number(rect.height)),
                ("fill", rect.fill.clone()),
                ("stroke", rect.stroke.clone()),
                ("stroke-width", rect.stroke_width.and_then(number)),
            ],
        ),
        SvgElement::Circle(circle) => self_closing(
            out,
            "circle",
            &[
                ("id", Some(circle.id.clone())),
                ("cx", number(circle.cx)),
                ("cy", number(circle.cy)),
                ("r", number(circle.r)),
                ("fill", circle.fill.clone()),
                ("stroke", circle.stroke.clone()),
                ("stroke-width", circle.stroke_width.and_then(number)),
            ],
        ),
        SvgElement::Text(text) => with_content(
            out,
            "text",
            &[
                ("id", Some(text.id.clone())),
                ("x", number(text.x)),
                ("y", number(text.y)),
                ("dominant-baseline", Some("hanging".to_string())),
                ("font-family", Some("sans-serif".to_string())),
                ("fill", text.fill.clone()),
                ("stroke", text.stroke.clone()),
                ("stroke-width", text.stroke_width.and_then(number)),
            ],
            &text.text,
        ),
        SvgElement::Line(line) => self_closing(
            out,
            "line",
            &[
                ("id", Some(line.id.clone())),
                ("x1", number(line.x1)),
                ("y1", number(line.y1)),
                ("x2", number(line.x2)),
                ("y2", number(line.y2)),
                ("fill", line.fill.clone()),
                ("stroke", line.stroke.clone()),
                ("stroke-width", line.stroke_width.and_then(number)),
            ],
        ),
        SvgElement::Polygon(polygon) => self_closing(
            out,
            "polygon",
            &[
                ("id", polygon.id.clone()),
                ("points", Some(polygon.points.clone())),
                ("fill", polygon.fill.clone()),
                ("stroke", polygon.stroke.clone()),
                ("stroke-width", polygon.stroke_width.and_then(number)),
            ],
        ),
    }
}

/// Serialize the document as a standalone `<svg>` element.
pub fn document_to_svg(document: &SvgDocument) -> String {
    let mut body = String::new();
    for element in &document.children {
        serialize_element(&mut body, element);
    }
    let mut out = String::new();
    open_tag(
        &mut out,
        "svg",
        &[
            ("xmlns", Some("http://www.w3.org/2000/svg".to_string())),
            ("width", number(document.width)),
            ("height", number(document.height)),
        ],
    );
    out.push('>');
    out.push_str(&body);
    out.push_str("</svg>");
    out
}
