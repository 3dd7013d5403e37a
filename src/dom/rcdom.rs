//! `TableDom` over html5ever's reference DOM (`markup5ever_rcdom`).

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

use super::TableDom;
use super::node_util::{get_node_tag_name, get_parent_node, index_in_parent, set_parent_node};

/// Owns a parsed `RcDom` and edits it in place
pub struct RcDomTree {
    dom: RcDom,
}

impl RcDomTree {
    #[must_use]
    pub fn new(dom: RcDom) -> Self {
        Self { dom }
    }

    #[must_use]
    pub fn dom(&self) -> &RcDom {
        &self.dom
    }
}

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

fn attribute_name(name: &str) -> QualName {
    QualName::new(None, Namespace::from(""), LocalName::from(name))
}

fn is_plain_attribute(attr: &Attribute, name: &str) -> bool {
    attr.name.ns.is_empty() && &*attr.name.local == name
}

impl TableDom for RcDomTree {
    type Node = Handle;

    fn root(&self) -> Handle {
        self.dom.document.clone()
    }

    fn tag_name(&self, node: &Handle) -> Option<String> {
        get_node_tag_name(node).map(str::to_string)
    }

    fn children(&self, node: &Handle) -> Vec<Handle> {
        node.children.borrow().clone()
    }

    fn attribute(&self, node: &Handle, name: &str) -> Option<String> {
        let NodeData::Element { attrs, .. } = &node.data else {
            return None;
        };
        attrs
            .borrow()
            .iter()
            .find(|attr| is_plain_attribute(attr, name))
            .map(|attr| attr.value.to_string())
    }

    fn set_attribute(&mut self, node: &Handle, name: &str, value: &str) {
        let NodeData::Element { attrs, .. } = &node.data else {
            return;
        };
        let mut attrs = attrs.borrow_mut();
        match attrs.iter_mut().find(|attr| is_plain_attribute(attr, name)) {
            Some(existing) => existing.value = StrTendril::from(value),
            None => attrs.push(Attribute {
                name: attribute_name(name),
                value: StrTendril::from(value),
            }),
        }
    }

    fn rename(&mut self, node: &Handle, tag: &str) -> Handle {
        let NodeData::Element {
            name,
            attrs,
            template_contents,
            mathml_annotation_xml_integration_point,
        } = &node.data
        else {
            return node.clone();
        };
        if &*name.local == tag {
            return node.clone();
        }

        // rcdom element names are immutable, so build a twin and swap it in.
        let replacement = Node::new(NodeData::Element {
            name: QualName::new(name.prefix.clone(), name.ns.clone(), LocalName::from(tag)),
            attrs: RefCell::new(attrs.borrow().clone()),
            template_contents: RefCell::new(template_contents.borrow().clone()),
            mathml_annotation_xml_integration_point: *mathml_annotation_xml_integration_point,
        });

        let children = std::mem::take(&mut *node.children.borrow_mut());
        for child in &children {
            set_parent_node(child, Some(&replacement));
        }
        *replacement.children.borrow_mut() = children;

        if let Some(parent) = get_parent_node(node) {
            if let Some(index) = index_in_parent(&parent, node) {
                parent.children.borrow_mut()[index] = replacement.clone();
            }
            set_parent_node(&replacement, Some(&parent));
        }
        set_parent_node(node, None);

        replacement
    }

    fn insert_element_before(&mut self, reference: &Handle, tag: &str, text: &str) -> Handle {
        let element = Node::new(NodeData::Element {
            name: QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag)),
            attrs: RefCell::new(Vec::new()),
            template_contents: RefCell::new(None),
            mathml_annotation_xml_integration_point: false,
        });
        let text_node = Node::new(NodeData::Text {
            contents: RefCell::new(StrTendril::from(text)),
        });
        set_parent_node(&text_node, Some(&element));
        element.children.borrow_mut().push(text_node);

        if let Some(parent) = get_parent_node(reference) {
            let index = index_in_parent(&parent, reference).unwrap_or(0);
            parent.children.borrow_mut().insert(index, element.clone());
            set_parent_node(&element, Some(&parent));
        } else {
            tracing::warn!("Cannot insert <{tag}> before a detached node");
        }

        element
    }
}
