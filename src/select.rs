//! A minimal path selector.
//!
//! Paths are slash-separated name steps, each matching among the
//! children of the nodes matched so far. A leading slash anchors the
//! walk at the document root, so the first step names the document
//! element. A final `@name` or `@name=value` step filters the matched
//! elements by attribute instead of descending further.
//!
//! Name steps compare against the part of a node's name after its
//! last colon, so `b` matches both `<b>` and `<ns:b>`.

use crate::xtreedata::{Node, Xtree};

fn step_matches(name: &str, step: &str) -> bool {
    let local = name.rsplit(':').next().unwrap_or(name);
    local == step
}

/// ## Selection
impl Xtree {
    /// All nodes matching a path, in document order.
    ///
    /// A relative path starts among the children of `node`; an
    /// absolute path (leading `/`) starts among the children of the
    /// root of `node`'s tree.
    ///
    /// ```rust
    /// use xtree::Xtree;
    ///
    /// let mut xtree = Xtree::new();
    /// let root = xtree
    ///     .parse(r#"<a><b id="5">x</b><b id="6">y</b></a>"#)
    ///     .unwrap();
    /// assert_eq!(xtree.select_nodes(root, "/a/b").len(), 2);
    /// let picked = xtree.select_nodes(root, "/a/b/@id=5");
    /// assert_eq!(picked.len(), 1);
    /// assert_eq!(xtree.get_text(picked[0]), Some("x"));
    /// ```
    pub fn select_nodes(&self, node: Node, path: &str) -> Vec<Node> {
        let mut current = Vec::new();
        let path = match path.strip_prefix('/') {
            Some(rest) => {
                current.push(self.root(node));
                rest
            }
            None => {
                current.push(node);
                path
            }
        };
        for step in path.split('/') {
            if step.is_empty() {
                continue;
            }
            if let Some(attribute) = step.strip_prefix('@') {
                let (name, value) = match attribute.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (attribute, None),
                };
                current.retain(|&candidate| {
                    self.element(candidate)
                        .and_then(|element| element.get_attribute(name))
                        .map_or(false, |found| value.map_or(true, |value| found == value))
                });
                continue;
            }
            let mut next = Vec::new();
            for &candidate in &current {
                for child in self.children(candidate) {
                    if let Some(name) = self.node_name(child) {
                        if step_matches(name, step) {
                            next.push(child);
                        }
                    }
                }
            }
            current = next;
        }
        current
    }

    /// The first node matching a path, if any.
    pub fn select(&self, node: Node, path: &str) -> Option<Node> {
        self.select_nodes(node, path).into_iter().next()
    }

    /// Look up an attribute on an element by selector step.
    ///
    /// The step may carry a leading `@` and a trailing `=value`; both
    /// are ignored, so a step taken from a path can be passed through
    /// unchanged.
    pub fn select_attribute(&self, node: Node, step: &str) -> Option<&str> {
        let step = step.strip_prefix('@').unwrap_or(step);
        let name = step.split('=').next().unwrap_or(step);
        self.element(node)?.get_attribute(name)
    }
}
