use encoding_rs::Encoding;
use html5ever::interface::{Attribute, QualName};
use html5ever::parse_document;
use html5ever::tendril::{format_tendril, TendrilSink};
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parses HTML bytes into a DOM, decoding with the given charset label and
/// falling back to lossy UTF-8 when the label is unknown or empty
pub fn html_to_dom(data: &[u8], document_encoding: String) -> RcDom {
    let s: String;

    if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (string, _, _) = encoding.decode(data);
        s = string.to_string();
    } else {
        s = String::from_utf8_lossy(data).to_string();
    }

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())
        .unwrap()
}

/// Returns every element under `node` (inclusive) matching `predicate`, in
/// document order
pub fn find_elements(node: &Handle, predicate: &dyn Fn(&Handle) -> bool) -> Vec<Handle> {
    let mut found_elements: Vec<Handle> = Vec::new();
    collect_elements(node, predicate, &mut found_elements);
    found_elements
}

fn collect_elements(node: &Handle, predicate: &dyn Fn(&Handle) -> bool, found: &mut Vec<Handle>) {
    if let NodeData::Element { .. } = node.data {
        if predicate(node) {
            found.push(node.clone());
        }
    }

    for child_node in node.children.borrow().iter() {
        collect_elements(child_node, predicate, found);
    }
}

/// Reads an attribute's value off an element node
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Returns the element's tag name
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Sets, replaces, or (with `None`) removes an attribute on an element node
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: Option<String>) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let attrs_mut = &mut attrs.borrow_mut();

        match attr_value {
            Some(attr_value) => {
                if let Some(attr) = attrs_mut
                    .iter_mut()
                    .find(|attr| &*attr.name.local == attr_name)
                {
                    attr.value.clear();
                    attr.value.push_slice(attr_value.as_str());
                } else {
                    attrs_mut.push(Attribute {
                        name: QualName::new(None, ns!(), LocalName::from(attr_name)),
                        value: format_tendril!("{}", attr_value),
                    });
                }
            }
            None => {
                attrs_mut.retain(|attr| &*attr.name.local != attr_name);
            }
        }
    };
}
