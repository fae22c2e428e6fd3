use super::{Dom, NodeId, NodeKind};

const VOID_ELEMENTS: &[&str] = &["area", "br", "hr", "img", "input", "link", "meta", "source"];

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub(super) fn write_node(dom: &Dom, node: NodeId, out: &mut String) {
    match dom.kind(node) {
        NodeKind::Document => {
            for child in dom.children(node) {
                write_node(dom, *child, out);
            }
        }
        NodeKind::Text(text) => out.push_str(&escape_html(text)),
        NodeKind::Element(el) => {
            out.push('<');
            out.push_str(el.tag());
            for (name, value) in el.attrs() {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&escape_html(value));
                    out.push('"');
                }
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&el.tag()) {
                return;
            }
            for child in dom.children(node) {
                write_node(dom, *child, out);
            }
            out.push_str("</");
            out.push_str(el.tag());
            out.push('>');
        }
    }
}
