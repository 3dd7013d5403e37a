use std::rc::Rc;
use std::rc::Weak;

use markup5ever_rcdom::{Node, NodeData};

/// RAII guard to ensure parent reference is restored even on panic.
///
/// rcdom keeps the parent link in a `Cell<Option<Weak<Node>>>`, which can
/// only be read by taking it out. The guard puts it back on drop.
struct ParentGuard<'a> {
    node: &'a Rc<Node>,
    value: Option<Option<Weak<Node>>>,
}

impl Drop for ParentGuard<'_> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.node.parent.set(value);
        }
    }
}

impl<'a> ParentGuard<'a> {
    fn new(node: &'a Rc<Node>) -> Self {
        let value = node.parent.take();
        Self {
            node,
            value: Some(value),
        }
    }

    fn get(&self) -> Option<&Weak<Node>> {
        self.value.as_ref().and_then(Option::as_ref)
    }
}

pub(crate) fn get_node_tag_name(node: &Rc<Node>) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&name.local),
        _ => None,
    }
}

pub(crate) fn get_parent_node(node: &Rc<Node>) -> Option<Rc<Node>> {
    let guard = ParentGuard::new(node);
    guard.get()?.upgrade()
}

pub(crate) fn set_parent_node(child: &Rc<Node>, parent: Option<&Rc<Node>>) {
    child.parent.set(parent.map(Rc::downgrade));
}

/// Position of `node` among its parent's children
pub(crate) fn index_in_parent(parent: &Rc<Node>, node: &Rc<Node>) -> Option<usize> {
    parent
        .children
        .borrow()
        .iter()
        .position(|child| Rc::ptr_eq(child, node))
}
