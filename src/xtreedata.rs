use indextree::{Arena, NodeId};

use crate::xmlvalue::Value;

pub(crate) type XmlArena = Arena<Value>;

/// A node in an XML tree.
///
/// This is a lightweight stable index into the arena held by
/// [`Xtree`]; it can be copied freely. A `Node` stays valid for as
/// long as the `Xtree` it came from exists, even if the node has been
/// removed from its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `Xtree` struct manages all XML tree data in your program. It
/// lets you parse, access, manipulate and serialize one or more XML
/// documents and fragments.
///
/// Parsing is streaming: the parser works through a fixed-size double
/// buffer over any [`std::io::Read`] source, so memory use during a
/// parse is bounded by the size of the resulting tree, not of the
/// input handling machinery.
///
/// `Xtree` is implemented in several sections focusing on different
/// aspects of accessing and manipulating XML data.
pub struct Xtree {
    pub(crate) arena: XmlArena,
}

impl Xtree {
    /// Create a new `Xtree` instance.
    pub fn new() -> Self {
        Xtree {
            arena: XmlArena::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }
}

impl Default for Xtree {
    fn default() -> Self {
        Self::new()
    }
}
