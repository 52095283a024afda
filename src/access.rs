use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::xmlvalue::Value;
use crate::xtreedata::{Node, Xtree};

/// Node edges.
///
/// Used by [`Xtree::traverse`]. In case of an element the start edge
/// is the start tag and the end edge the end tag; for any other value
/// the end edge comes immediately after the start edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node.
    Start(Node),
    /// The end edge of a node.
    End(Node),
}

/// ## Read-only access
impl Xtree {
    /// Get parent node.
    ///
    /// Returns [`None`] if this is the document root or if the node is
    /// unattached.
    ///
    /// ```rust
    /// use xtree::Xtree;
    ///
    /// let mut xtree = Xtree::new();
    /// let root = xtree.parse("<p>Example</p>").unwrap();
    /// let p = xtree.document_element(root).unwrap();
    /// let text = xtree.first_child(p).unwrap();
    /// assert_eq!(xtree.parent(text), Some(p));
    /// assert_eq!(xtree.parent(p), Some(root));
    /// assert_eq!(xtree.parent(root), None);
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    ///
    /// Returns [`None`] if this is the last child of its parent.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get previous sibling.
    ///
    /// Returns [`None`] if this is the first child of its parent.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Iterator over ancestor nodes, including this one.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over the child nodes of this node.
    ///
    /// ```rust
    /// use xtree::Xtree;
    ///
    /// let mut xtree = Xtree::new();
    /// let root = xtree.parse("<p><a/><b/></p>").unwrap();
    /// let p = xtree.document_element(root).unwrap();
    /// let a = xtree.first_child(p).unwrap();
    /// let b = xtree.next_sibling(a).unwrap();
    /// let children = xtree.children(p).collect::<Vec<_>>();
    /// assert_eq!(children, vec![a, b]);
    /// ```
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Iterator over of the descendants of this node, including this
    /// one, in document order.
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Traverse the subtree of a node as [`NodeEdge`]s in depth-first
    /// order. The serializer is built on this.
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }

    /// The document root above this node, found by walking up the
    /// parent links. If the node is detached this is the top of its
    /// fragment.
    pub fn root(&self, node: Node) -> Node {
        // ancestors always yields at least the node itself
        self.ancestors(node).last().unwrap_or(node)
    }

    /// Obtain the first element below the document root.
    ///
    /// Returns [`None`] if `node` is not a document root or the
    /// document has no element.
    pub fn document_element(&self, node: Node) -> Option<Node> {
        if !self.is_root(node) {
            return None;
        }
        self.children(node).find(|child| self.is_element(*child))
    }

    /// The text of the first text child of an element, in storage
    /// form.
    ///
    /// ```rust
    /// use xtree::Xtree;
    ///
    /// let mut xtree = Xtree::new();
    /// let root = xtree.parse("<item>x</item>").unwrap();
    /// let item = xtree.document_element(root).unwrap();
    /// assert_eq!(xtree.get_text(item), Some("x"));
    /// ```
    pub fn get_text(&self, node: Node) -> Option<&str> {
        if !self.is_element(node) {
            return None;
        }
        self.children(node)
            .find(|child| self.is_text(*child))
            .and_then(|child| self.text_str(child))
    }

    /// Structural equality of two subtrees: same types, names,
    /// attributes and text, child for child. Node identity and parents
    /// are not compared.
    pub fn compare(&self, a: Node, b: Node) -> bool {
        if !self.compare_value(a, b) {
            return false;
        }
        let mut a_children = self.children(a);
        let mut b_children = self.children(b);
        loop {
            match (a_children.next(), b_children.next()) {
                (None, None) => return true,
                (Some(a_child), Some(b_child)) => {
                    if !self.compare(a_child, b_child) {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }

    fn compare_value(&self, a: Node, b: Node) -> bool {
        match (self.value(a), self.value(b)) {
            (Value::Root, Value::Root) => true,
            (Value::Element(a), Value::Element(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Cdata(a), Value::Cdata(b)) => a == b,
            (Value::Comment(a), Value::Comment(b)) => a == b,
            (Value::EntityDecl(a), Value::EntityDecl(b)) => a == b,
            (Value::ProcessingInstruction(a), Value::ProcessingInstruction(b)) => a == b,
            _ => false,
        }
    }
}
