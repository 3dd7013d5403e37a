//! Tree-editing interface the table annotator works against.
//!
//! The annotator never touches a concrete DOM type. Everything it needs
//! (walking children, reading and writing attributes, renaming elements,
//! inserting a new element) goes through [`TableDom`], so any HTML tree
//! library can back it. [`RcDomTree`] is the html5ever-backed implementation
//! the rest of the crate uses.

pub(crate) mod node_util;
pub mod rcdom;

pub use rcdom::RcDomTree;

/// Minimal mutable view over an HTML element tree
pub trait TableDom {
    /// Handle to a node in the tree. Handles stay valid across edits,
    /// except that [`TableDom::rename`] hands back a new handle for the
    /// renamed element.
    type Node: Clone;

    /// The document node
    fn root(&self) -> Self::Node;

    /// Lowercase local tag name, or `None` for text, comments and other non-elements
    fn tag_name(&self, node: &Self::Node) -> Option<String>;

    /// Direct children in document order
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Value of the attribute `name`, if present
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Set `name` to `value`, replacing any existing value. No-op on non-elements.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Change an element's tag name in place, keeping attributes, children
    /// and position. Returns the handle to use from now on.
    fn rename(&mut self, node: &Self::Node, tag: &str) -> Self::Node;

    /// Create `<tag>text</tag>` and insert it immediately before `reference`
    fn insert_element_before(&mut self, reference: &Self::Node, tag: &str, text: &str)
    -> Self::Node;

    /// All descendant elements named `tag`, in document order, excluding `node` itself
    fn descendants_with_tag(&self, node: &Self::Node, tag: &str) -> Vec<Self::Node> {
        self.descendants_with_tags(node, &[tag], None)
    }

    /// Descendant elements whose tag is one of `tags`, in document order.
    ///
    /// Elements named `boundary` are still reported if they match, but
    /// nothing inside them is visited.
    fn descendants_with_tags(
        &self,
        node: &Self::Node,
        tags: &[&str],
        boundary: Option<&str>,
    ) -> Vec<Self::Node> {
        let mut found = Vec::new();
        let mut stack: Vec<Self::Node> = self.children(node).into_iter().rev().collect();
        while let Some(current) = stack.pop() {
            let tag = self.tag_name(&current);
            let Some(tag) = tag.as_deref() else {
                continue;
            };
            if tags.contains(&tag) {
                found.push(current.clone());
            }
            if boundary != Some(tag) {
                stack.extend(self.children(&current).into_iter().rev());
            }
        }
        found
    }

    /// Whether `node` is an element named `tag`
    fn is_element(&self, node: &Self::Node, tag: &str) -> bool {
        self.tag_name(node).as_deref() == Some(tag)
    }
}
