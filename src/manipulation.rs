use crate::error::Error;
use crate::xmlvalue::ValueType;
use crate::xtreedata::{Node, Xtree};

/// ## Manipulation
///
/// Structure rules are loose by design: a document root or an element
/// can hold any sequence of child nodes, in any number. The only hard
/// rules are that a document root cannot be moved and that leaf values
/// (text, CDATA, comments, entity declarations, processing
/// instructions) cannot have children.
impl Xtree {
    /// Append a child to the end of the children of the given parent.
    ///
    /// If the child was attached elsewhere it is moved; its subtree
    /// comes along. Adjacent text nodes are left as they are; use
    /// [`Xtree::normalize`] to merge them.
    ///
    /// ```rust
    /// use xtree::Xtree;
    ///
    /// let mut xtree = Xtree::new();
    /// let root = xtree.new_root();
    /// let doc = xtree.new_element("doc");
    /// xtree.append(root, doc).unwrap();
    /// assert_eq!(xtree.to_string(root).unwrap(), "<doc/>\n");
    /// ```
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(parent, child)?;
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Append a new text node to a parent, given raw text.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        let node = self.new_text(text);
        self.append(parent, node)?;
        Ok(node)
    }

    /// Append a new element node to a parent, given a name.
    pub fn append_element(&mut self, parent: Node, name: &str) -> Result<Node, Error> {
        let node = self.new_element(name);
        self.append(parent, node)?;
        Ok(node)
    }

    /// Detach a node (and its descendants) from the tree without
    /// destroying anything. The node becomes the top of its own
    /// fragment and is returned for further use.
    pub fn detach(&mut self, node: Node) -> Result<Node, Error> {
        self.remove_structure_check(node)?;
        node.get().detach(self.arena_mut());
        Ok(node)
    }

    /// Remove a node and its whole subtree from the arena.
    ///
    /// Only the subtree below the node is destroyed; siblings stay
    /// attached to the parent. Removing a document root releases the
    /// whole document.
    pub fn remove(&mut self, node: Node) {
        node.get().remove_subtree(self.arena_mut());
    }

    /// Merge adjacent text children of a node.
    ///
    /// Any run of consecutive text children collapses into the first
    /// of them, concatenating in document order. Only the direct
    /// children of `node` are touched; a full-tree normalize walks the
    /// tree and calls this per node. Idempotent.
    ///
    /// ```rust
    /// use xtree::Xtree;
    ///
    /// let mut xtree = Xtree::new();
    /// let root = xtree.new_root();
    /// let doc = xtree.new_element("doc");
    /// xtree.append(root, doc).unwrap();
    /// xtree.append_text(doc, "a").unwrap();
    /// xtree.append_text(doc, "b").unwrap();
    /// xtree.normalize(doc);
    /// assert_eq!(xtree.get_text(doc), Some("ab"));
    /// assert_eq!(xtree.children(doc).count(), 1);
    /// ```
    pub fn normalize(&mut self, node: Node) {
        let mut child = self.first_child(node);
        while let Some(current) = child {
            if self.is_text(current) {
                while let Some(sibling) = self.next_sibling(current) {
                    if !self.is_text(sibling) {
                        break;
                    }
                    let extra = self
                        .text_str(sibling)
                        .map(|text| text.to_string())
                        .unwrap_or_default();
                    sibling.get().remove_subtree(self.arena_mut());
                    if let Some(text) = self.text_mut(current) {
                        text.text.push_str(&extra);
                    }
                }
            }
            child = self.next_sibling(current);
        }
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        if !matches!(
            self.value_type(parent),
            ValueType::Element | ValueType::Root
        ) {
            return Err(Error::InvalidOperation(
                "cannot add children to a leaf node".into(),
            ));
        }
        if self.value_type(child) == ValueType::Root {
            return Err(Error::InvalidOperation(
                "cannot attach a document root".into(),
            ));
        }
        Ok(())
    }

    fn remove_structure_check(&self, node: Node) -> Result<(), Error> {
        if self.value_type(node) == ValueType::Root {
            return Err(Error::InvalidOperation(
                "cannot detach a document root".into(),
            ));
        }
        Ok(())
    }
}
