use crate::xmlvalue::{
    Cdata, Comment, Element, EntityDecl, ProcessingInstruction, Text, Value, ValueType,
};
use crate::xtreedata::{Node, Xtree};

/// ## Value access
impl Xtree {
    /// Access the value of a node.
    pub fn value(&self, node: Node) -> &Value {
        self.arena()[node.get()].get()
    }

    /// Access the value of a node mutably.
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena_mut()[node.get()].get_mut()
    }

    /// The type of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Whether the node is the document root.
    pub fn is_root(&self, node: Node) -> bool {
        matches!(self.value(node), Value::Root)
    }

    /// Whether the node is an element.
    pub fn is_element(&self, node: Node) -> bool {
        matches!(self.value(node), Value::Element(_))
    }

    /// Whether the node is text.
    pub fn is_text(&self, node: Node) -> bool {
        matches!(self.value(node), Value::Text(_))
    }

    /// Whether the node is a CDATA section.
    pub fn is_cdata(&self, node: Node) -> bool {
        matches!(self.value(node), Value::Cdata(_))
    }

    /// Whether the node is a comment.
    pub fn is_comment(&self, node: Node) -> bool {
        matches!(self.value(node), Value::Comment(_))
    }

    /// Whether the node is an entity declaration.
    pub fn is_entity_decl(&self, node: Node) -> bool {
        matches!(self.value(node), Value::EntityDecl(_))
    }

    /// Whether the node is a processing instruction.
    pub fn is_processing_instruction(&self, node: Node) -> bool {
        matches!(self.value(node), Value::ProcessingInstruction(_))
    }

    /// The element value, if this node is an element.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The mutable element value, if this node is an element.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        match self.value_mut(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The text value, if this node is text.
    pub fn text(&self, node: Node) -> Option<&Text> {
        match self.value(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The mutable text value, if this node is text.
    pub fn text_mut(&mut self, node: Node) -> Option<&mut Text> {
        match self.value_mut(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The text of a text node as a string slice (storage form).
    pub fn text_str(&self, node: Node) -> Option<&str> {
        self.text(node).map(|text| text.get())
    }

    /// The CDATA value, if this node is a CDATA section.
    pub fn cdata(&self, node: Node) -> Option<&Cdata> {
        match self.value(node) {
            Value::Cdata(cdata) => Some(cdata),
            _ => None,
        }
    }

    /// The comment value, if this node is a comment.
    pub fn comment(&self, node: Node) -> Option<&Comment> {
        match self.value(node) {
            Value::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    /// The entity declaration value, if this node is one.
    pub fn entity_decl(&self, node: Node) -> Option<&EntityDecl> {
        match self.value(node) {
            Value::EntityDecl(entity) => Some(entity),
            _ => None,
        }
    }

    /// The processing instruction value, if this node is one.
    pub fn processing_instruction(&self, node: Node) -> Option<&ProcessingInstruction> {
        match self.value(node) {
            Value::ProcessingInstruction(pi) => Some(pi),
            _ => None,
        }
    }

    /// The name of a node, for the kinds that carry one: the element
    /// name, the entity declaration name, or the processing
    /// instruction target.
    pub fn node_name(&self, node: Node) -> Option<&str> {
        match self.value(node) {
            Value::Element(element) => Some(element.name()),
            Value::EntityDecl(entity) => Some(entity.name()),
            Value::ProcessingInstruction(pi) => Some(pi.target()),
            _ => None,
        }
    }
}
