/*!
 * Thin helpers over html5ever and rcdom.
 *
 * This module wraps parsing, serialization, and the handful of node
 * operations the extractor and renderer need: attribute access, class-list
 * manipulation, element creation, and plain-text extraction.
 */

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::interface::{Attribute, QualName};
use html5ever::serialize::{SerializeOpts, serialize};
use html5ever::tendril::{TendrilSink, format_tendril};
use html5ever::tree_builder::create_element;
use html5ever::{LocalName, namespace_url, ns, parse_document};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};

/// Parse HTML bytes into a DOM
///
/// Input is treated as UTF-8; invalid sequences are replaced.
pub fn html_to_dom(data: &[u8]) -> RcDom {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut &*data)
        .expect("reading from a byte slice cannot fail")
}

/// Serialize a DOM back into HTML bytes
pub fn serialize_document(dom: &RcDom) -> Result<Vec<u8>, std::io::Error> {
    let mut buf: Vec<u8> = Vec::new();
    let serializable: SerializableHandle = dom.document.clone().into();
    serialize(&mut buf, &serializable, SerializeOpts::default())?;
    Ok(buf)
}

/// Get the tag name of an element node
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Get a node attribute value
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => {
            for attr in attrs.borrow().iter() {
                if &*attr.name.local == attr_name {
                    return Some(attr.value.to_string());
                }
            }
            None
        }
        _ => None,
    }
}

/// Set a node attribute, removing it when the value is None
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: Option<String>) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let attrs_mut = &mut attrs.borrow_mut();
        let mut i = 0;
        let mut found_existing_attr: bool = false;

        while i < attrs_mut.len() {
            if &attrs_mut[i].name.local == attr_name {
                found_existing_attr = true;

                if let Some(attr_value) = attr_value.clone() {
                    let _ = &attrs_mut[i].value.clear();
                    let _ = &attrs_mut[i].value.push_slice(attr_value.as_str());
                } else {
                    // Remove attr completely if attr_value is not defined
                    attrs_mut.remove(i);
                    continue;
                }
            }

            i += 1;
        }

        if !found_existing_attr {
            if let Some(attr_value) = attr_value {
                let name = LocalName::from(attr_name);

                attrs_mut.push(Attribute {
                    name: QualName::new(None, ns!(), name),
                    value: format_tendril!("{}", attr_value),
                });
            }
        }
    };
}

/// Check whether an element's class attribute contains the given token
pub fn has_class(node: &Handle, class_name: &str) -> bool {
    get_node_attr(node, "class")
        .map(|classes| classes.split_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

/// Append a class token to an element's class attribute
pub fn add_class(node: &Handle, class_name: &str) {
    if has_class(node, class_name) {
        return;
    }

    let new_value = match get_node_attr(node, "class") {
        Some(existing) if !existing.trim().is_empty() => {
            format!("{} {}", existing, class_name)
        }
        _ => class_name.to_string(),
    };
    set_node_attr(node, "class", Some(new_value));
}

/// Get the parent of a node, if it is still alive
pub fn get_parent_node(child: &Handle) -> Option<Handle> {
    let weak = child.parent.take();
    let parent = weak.as_ref().and_then(|node| node.upgrade());
    child.parent.set(weak);
    parent
}

/// Create a new element node with an optional class attribute
pub fn create_html_element(dom: &RcDom, tag: &str, class: Option<&str>) -> Handle {
    let mut attrs = Vec::new();
    if let Some(class) = class {
        attrs.push(Attribute {
            name: QualName::new(None, ns!(), LocalName::from("class")),
            value: format_tendril!("{}", class),
        });
    }

    create_element(dom, QualName::new(None, ns!(), LocalName::from(tag)), attrs)
}

/// Create a new text node
pub fn create_text_node(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(text.to_string().into()),
    })
}

/// Insert a node into the parent's child list right after the reference node
///
/// Returns false when the reference node has no parent or is not among the
/// parent's children.
pub fn insert_sibling_after(reference: &Handle, sibling: Handle) -> bool {
    let Some(parent) = get_parent_node(reference) else {
        return false;
    };

    let mut children = parent.children.borrow_mut();
    match children.iter().position(|c| Rc::ptr_eq(c, reference)) {
        Some(pos) => {
            sibling.parent.set(Some(Rc::downgrade(&parent)));
            children.insert(pos + 1, sibling);
            true
        }
        None => false,
    }
}

/// Replace a node in its parent's child list with another node
///
/// The replaced node keeps its children; the caller decides where it goes
/// afterwards. Returns false when the node has no parent.
pub fn replace_in_parent(original: &Handle, replacement: &Handle) -> bool {
    let Some(parent) = get_parent_node(original) else {
        return false;
    };

    let mut children = parent.children.borrow_mut();
    match children.iter().position(|c| Rc::ptr_eq(c, original)) {
        Some(pos) => {
            replacement.parent.set(Some(Rc::downgrade(&parent)));
            children[pos] = replacement.clone();
            true
        }
        None => false,
    }
}

/// Append a child node to a parent
pub fn append_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Extract the concatenated text content of a subtree
///
/// Script and style subtrees contribute nothing, mirroring what a reader
/// sees rather than what the markup contains.
pub fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Handle, out: &mut String) {
    match node.data {
        NodeData::Text { ref contents } => {
            out.push_str(&contents.borrow());
        }
        NodeData::Element { ref name, .. } => {
            let tag = name.local.as_ref();
            if tag == "script" || tag == "style" {
                return;
            }
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
        _ => {
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
    }
}

/// Find all descendant elements with the given tag name, in document order
pub fn find_nodes_by_name(node: &Handle, node_name: &str) -> Vec<Handle> {
    let mut found_nodes = Vec::new();

    if let NodeData::Element { ref name, .. } = node.data {
        if &*name.local == node_name {
            found_nodes.push(node.clone());
        }
    }

    for child_node in node.children.borrow().iter() {
        found_nodes.append(&mut find_nodes_by_name(child_node, node_name));
    }

    found_nodes
}
