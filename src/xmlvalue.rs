use std::fmt::Debug;

use crate::escape::escape;

/// The type of an XML node.
///
/// Access it using [`Xtree::value_type`](crate::Xtree::value_type)
/// when you are interested in the type of a value without needing to
/// match on it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document root that holds everything. Exactly one node per tree
    /// has this type; it has no parent and no siblings.
    Root,
    /// Element; it has a name and attributes.
    Element,
    /// Text. Stored in escaped form.
    Text,
    /// CDATA section. Stored verbatim, never escaped.
    Cdata,
    /// Comment. Stored in escaped form.
    Comment,
    /// Entity declaration (`<!NAME body>`), stored verbatim.
    EntityDecl,
    /// Processing instruction (`<?xml body?>`), stored verbatim.
    ProcessingInstruction,
}

/// An XML value, the payload of a tree node.
///
/// Access it using [`Xtree::value`](crate::Xtree::value) or mutably
/// using [`Xtree::value_mut`](crate::Xtree::value_mut).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Document root that holds everything.
    Root,
    /// Element with a name and attributes.
    Element(Element),
    /// Text.
    Text(Text),
    /// CDATA section.
    Cdata(Cdata),
    /// Comment.
    Comment(Comment),
    /// Entity declaration.
    EntityDecl(EntityDecl),
    /// Processing instruction.
    ProcessingInstruction(ProcessingInstruction),
}

impl Value {
    /// Returns the type of the XML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Root => ValueType::Root,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::Cdata(_) => ValueType::Cdata,
            Value::Comment(_) => ValueType::Comment,
            Value::EntityDecl(_) => ValueType::EntityDecl,
            Value::ProcessingInstruction(_) => ValueType::ProcessingInstruction,
        }
    }
}

/// A single attribute. The value is stored in escaped form.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub(crate) name: String,
    pub(crate) value: String,
}

impl Attribute {
    /// The attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value, in escaped storage form.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The attributes of an element.
///
/// Attributes keep their insertion order and names are unique:
/// inserting a name that already exists overwrites the value in place
/// instead of appending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    /// Create an empty attribute list.
    pub fn new() -> Self {
        Attributes::default()
    }

    /// Get an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Insert an attribute. The value must already be in storage form;
    /// callers outside the crate go through
    /// [`Element::set_attribute`], which applies the codec.
    pub(crate) fn insert(&mut self, name: String, value: String) {
        for attribute in &mut self.entries {
            if attribute.name == name {
                attribute.value = value;
                return;
            }
        }
        self.entries.push(Attribute { name, value });
    }

    /// Remove an attribute by name. Does nothing if it is absent.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|attribute| attribute.name != name);
    }

    /// Iterate over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }

    /// The number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// XML element value.
///
/// Example: `<foo/>` or `<foo bar="baz"/>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
}

impl Element {
    pub(crate) fn new(name: String) -> Self {
        Element {
            name,
            attributes: Attributes::new(),
        }
    }

    /// The name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes of the element.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute value by name.
    ///
    /// ```rust
    /// use xtree::Xtree;
    ///
    /// let mut xtree = Xtree::new();
    /// let root = xtree.parse(r#"<doc a="A"/>"#).unwrap();
    /// let doc = xtree.document_element(root).unwrap();
    /// let element = xtree.element(doc).unwrap();
    /// assert_eq!(element.get_attribute("a"), Some("A"));
    /// ```
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Set an attribute value. The value goes through the text codec,
    /// so what is stored is the escaped form. Setting a name that
    /// already exists overwrites the old value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: &str) {
        self.attributes.insert(name.into(), escape(value));
    }

    /// Remove an attribute. Does nothing if it is absent.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

/// XML text value.
///
/// The text is stored in escaped form: `<` is stored as `&lt;`, and so
/// on. See [`escape`](crate::escape()) for the exact rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// The text in storage (escaped) form.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Replace the text. The raw argument goes through the codec.
    pub fn set(&mut self, text: &str) {
        self.text = escape(text);
    }
}

/// CDATA section value. The payload is verbatim; the codec is never
/// applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cdata {
    pub(crate) text: String,
}

impl Cdata {
    pub(crate) fn new(text: String) -> Self {
        Cdata { text }
    }

    /// The raw CDATA payload.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Replace the payload, verbatim.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Comment value, stored in escaped form.
///
/// Comment nodes only appear if the parser ran with
/// [`ParseOptions::parse_comments`](crate::ParseOptions) enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// The comment text in storage form.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Replace the comment text. The raw argument goes through the codec.
    pub fn set(&mut self, text: &str) {
        self.text = escape(text);
    }
}

/// Entity declaration value: `<!NAME body>`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDecl {
    pub(crate) name: String,
    pub(crate) text: String,
}

impl EntityDecl {
    pub(crate) fn new(name: String, text: String) -> Self {
        EntityDecl { name, text }
    }

    /// The declaration name, the run of non-whitespace after `<!`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaration body, verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Processing instruction value: `<?xml body?>`.
///
/// Only the `xml` target is ever produced by the parser; anything else
/// is a parse error.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingInstruction {
    pub(crate) target: String,
    pub(crate) data: String,
}

impl ProcessingInstruction {
    pub(crate) fn new(target: String, data: String) -> Self {
        ProcessingInstruction { target, data }
    }

    /// The target, `xml`.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The instruction body, verbatim.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Replace the instruction body.
    pub fn set_data(&mut self, data: impl Into<String>) {
        self.data = data.into();
    }
}
