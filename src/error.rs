use std::fmt;

/// Everything that can go wrong while parsing or manipulating a tree.
///
/// End of input is not represented here; the parser treats it as a
/// normal terminator at sequence level and reports
/// [`SyntaxErrorKind::UnexpectedEnd`] when it cuts a construct short.
#[derive(Debug)]
pub enum Error {
    /// I/O failure reported by the underlying byte source.
    Io(std::io::Error),
    /// Grammar violation. Parsing stops at the first one; there is no
    /// resynchronization.
    Syntax(SyntaxError),
    /// The text accumulator could not grow. The text gathered so far
    /// is preserved in `partial` rather than discarded.
    Allocation {
        /// Text accumulated up to the failure.
        partial: String,
        /// Recently consumed input, for diagnostics.
        window: String,
    },
    /// A tree operation that would break the tree structure, such as
    /// appending a child to a text node or detaching the document root.
    InvalidOperation(String),
}

/// A grammar violation together with where it happened.
#[derive(Debug)]
pub struct SyntaxError {
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// Name of the element being parsed, when known.
    pub element: Option<String>,
    /// The last bytes consumed from the stream (at most 79).
    pub window: String,
}

/// The closed set of grammar violations.
#[derive(Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A `<` with no complete construct behind it.
    IncompleteTag,
    /// An element tag with an empty name.
    InvalidElementName,
    /// The closing tag names a different element than the open tag.
    InvalidCloseTag {
        /// Name of the open element.
        expected: String,
        /// Name found in the closing tag.
        found: String,
    },
    /// Input ended while a closing tag was still required.
    MissingCloseTag {
        /// Name of the element left open.
        expected: String,
    },
    /// An attribute token without a `=`.
    MissingAttributeValue {
        /// The offending token.
        token: String,
    },
    /// `<!` followed by an empty entity name.
    InvalidEntityName,
    /// A `<?` construct other than `<?xml`.
    InvalidProcessingInstruction,
    /// A `<![` construct that is not `<![CDATA[`.
    InvalidCdata,
    /// Input ended in the middle of a construct.
    UnexpectedEnd,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyntaxErrorKind::IncompleteTag => write!(f, "incomplete tag"),
            SyntaxErrorKind::InvalidElementName => write!(f, "invalid element name"),
            SyntaxErrorKind::InvalidCloseTag { expected, found } => {
                write!(f, "invalid end tag {:?} for {:?}", found, expected)
            }
            SyntaxErrorKind::MissingCloseTag { expected } => {
                write!(f, "no end tag for {:?}", expected)
            }
            SyntaxErrorKind::MissingAttributeValue { token } => {
                write!(f, "attribute {:?} has no value", token)
            }
            SyntaxErrorKind::InvalidEntityName => write!(f, "invalid entity name"),
            SyntaxErrorKind::InvalidProcessingInstruction => {
                write!(f, "invalid processing instruction")
            }
            SyntaxErrorKind::InvalidCdata => write!(f, "invalid CDATA section"),
            SyntaxErrorKind::UnexpectedEnd => write!(f, "unexpected end of input"),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(element) = &self.element {
            write!(f, " in element {:?}", element)?;
        }
        if !self.window.is_empty() {
            write!(f, " near {:?}", self.window)?;
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "stream error: {}", e),
            Error::Syntax(e) => write!(f, "{}", e),
            Error::Allocation { window, .. } => {
                write!(f, "out of memory while accumulating text near {:?}", window)
            }
            Error::InvalidOperation(msg) => write!(f, "invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<SyntaxError> for Error {
    #[inline]
    fn from(e: SyntaxError) -> Self {
        Error::Syntax(e)
    }
}

impl From<indextree::NodeError> for Error {
    #[inline]
    fn from(e: indextree::NodeError) -> Self {
        Error::InvalidOperation(e.to_string())
    }
}
