use crate::escape::escape;
use crate::xmlvalue::{
    Cdata, Comment, Element, EntityDecl, ProcessingInstruction, Text, Value,
};
use crate::xtreedata::{Node, Xtree};

/// ## Creation
///
/// The text codec is applied here, at node-creation time: text,
/// comment and attribute payloads are stored in escaped form. CDATA
/// sections, entity declarations and processing instructions keep
/// their payload verbatim.
impl Xtree {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena.new_node(value))
    }

    /// Create a new, empty document root.
    ///
    /// This is the only node kind with no parent and no siblings; use
    /// it as the top of a programmatically built tree.
    pub fn new_root(&mut self) -> Node {
        self.new_node(Value::Root)
    }

    /// Create a new element node with the given name.
    pub fn new_element(&mut self, name: &str) -> Node {
        self.new_node(Value::Element(Element::new(name.to_string())))
    }

    /// Create a new text node. The text goes through the codec.
    ///
    /// ```rust
    /// use xtree::Xtree;
    ///
    /// let mut xtree = Xtree::new();
    /// let text = xtree.new_text("a < b");
    /// assert_eq!(xtree.text_str(text), Some("a &lt; b"));
    /// ```
    pub fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(escape(text))))
    }

    /// Create a new CDATA node. The payload is stored verbatim; the
    /// codec does not apply inside CDATA.
    pub fn new_cdata(&mut self, text: &str) -> Node {
        self.new_node(Value::Cdata(Cdata::new(text.to_string())))
    }

    /// Create a new comment node. The text goes through the codec.
    pub fn new_comment(&mut self, comment: &str) -> Node {
        self.new_node(Value::Comment(Comment::new(escape(comment))))
    }

    /// Create a new entity declaration node. Name and body are stored
    /// verbatim.
    pub fn new_entity_decl(&mut self, name: &str, text: &str) -> Node {
        self.new_node(Value::EntityDecl(EntityDecl::new(
            name.to_string(),
            text.to_string(),
        )))
    }

    /// Create a new processing instruction node with a verbatim body.
    pub fn new_processing_instruction(&mut self, target: &str, data: &str) -> Node {
        self.new_node(Value::ProcessingInstruction(ProcessingInstruction::new(
            target.to_string(),
            data.to_string(),
        )))
    }
}
