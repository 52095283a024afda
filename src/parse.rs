//! The recursive-descent parser.
//!
//! One method per grammar production, each consuming bytes from the
//! double-buffered [`Stream`] and appending finished nodes to a
//! caller-supplied parent. There is no recovery: the first grammar
//! violation or stream failure aborts the parse and the partially
//! built tree is removed from the arena.

use std::io::{Cursor, Read};

use crate::error::{Error, SyntaxError, SyntaxErrorKind};
use crate::stream::Stream;
use crate::xtreedata::{Node, Xtree};

/// Options controlling a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// When true, comment text is kept as comment nodes in the tree.
    /// When false (the default) comments are scanned and discarded.
    pub parse_comments: bool,
}

/// What ends a text accumulation run.
///
/// The single-character terminators end on their character; the
/// multi-character ones probe the stream for the rest of their end
/// token and push the probed bytes back on a false match.
#[derive(Debug, Clone, Copy)]
enum Terminator {
    /// A bare character, consumed when found.
    Char(u8),
    /// `-->`
    CommentEnd,
    /// `]]>`
    CdataEnd,
    /// `?>`
    PiEnd,
}

impl Terminator {
    fn trigger(&self) -> u8 {
        match self {
            Terminator::Char(c) => *c,
            Terminator::CommentEnd => b'-',
            Terminator::CdataEnd => b']',
            Terminator::PiEnd => b'?',
        }
    }
}

/// ## Parsing
impl Xtree {
    /// Parse a string into a new document and return its root.
    ///
    /// Comments are discarded; use [`Xtree::parse_read_with`] to keep
    /// them.
    ///
    /// ```rust
    /// use xtree::Xtree;
    ///
    /// let mut xtree = Xtree::new();
    /// let root = xtree.parse("<doc><p>hello</p></doc>").unwrap();
    /// let doc = xtree.document_element(root).unwrap();
    /// let p = xtree.first_child(doc).unwrap();
    /// assert_eq!(xtree.get_text(p), Some("hello"));
    /// ```
    pub fn parse(&mut self, xml: &str) -> Result<Node, Error> {
        self.parse_read_with(Cursor::new(xml.as_bytes()), ParseOptions::default())
    }

    /// Parse from any byte source with default options.
    ///
    /// The source is consumed through a fixed-size double buffer, so
    /// inputs of any size parse in bounded working memory beyond the
    /// tree itself.
    pub fn parse_read<R: Read>(&mut self, source: R) -> Result<Node, Error> {
        self.parse_read_with(source, ParseOptions::default())
    }

    /// Parse from any byte source with the given [`ParseOptions`].
    pub fn parse_read_with<R: Read>(
        &mut self,
        source: R,
        options: ParseOptions,
    ) -> Result<Node, Error> {
        let stream = Stream::open(source)?;
        let root = self.new_root();
        let mut parser = Parser {
            tree: self,
            stream,
            options,
        };
        let outcome = parser.parse_nodes(root, None);
        match outcome {
            Ok(()) => Ok(root),
            Err(e) => {
                // a failed parse leaves no tree behind
                root.get().remove_subtree(self.arena_mut());
                Err(e)
            }
        }
    }
}

struct Parser<'a, R: Read> {
    tree: &'a mut Xtree,
    stream: Stream<R>,
    options: ParseOptions,
}

impl<'a, R: Read> Parser<'a, R> {
    fn syntax(&self, kind: SyntaxErrorKind, element: Option<&str>) -> Error {
        Error::Syntax(SyntaxError {
            kind,
            element: element.map(|name| name.to_string()),
            window: self.stream.recent_window(),
        })
    }

    /// The next byte, or the given syntax error if input ended here.
    fn next_or(&mut self, kind: SyntaxErrorKind, element: Option<&str>) -> Result<u8, Error> {
        match self.stream.next()? {
            Some(c) => Ok(c),
            None => Err(self.syntax(kind, element)),
        }
    }

    /// Consume whitespace; returns the first non-whitespace byte
    /// (consumed), or `None` on end of input.
    fn skip_whitespace(&mut self) -> Result<Option<u8>, Error> {
        loop {
            match self.stream.next()? {
                None => return Ok(None),
                Some(c) if c <= 0x20 => continue,
                Some(c) => return Ok(Some(c)),
            }
        }
    }

    /// Parse a node sequence (document body or element body) into
    /// `parent`. Returns cleanly at end of input or when a closing tag
    /// for the enclosing level comes up; the closing tag itself is
    /// pushed back for the caller.
    fn parse_nodes(&mut self, parent: Node, parent_name: Option<&str>) -> Result<(), Error> {
        loop {
            let c = match self.skip_whitespace()? {
                Some(c) => c,
                None => return Ok(()),
            };
            if c != b'<' {
                self.stream.pushback(1);
                self.parse_text(parent, parent_name)?;
                continue;
            }
            let c1 = self.next_or(SyntaxErrorKind::IncompleteTag, parent_name)?;
            match c1 {
                // closing tag at this level; the caller reads it
                b'/' => {
                    self.stream.pushback(2);
                    return Ok(());
                }
                b'!' => {
                    let c2 = self.next_or(SyntaxErrorKind::IncompleteTag, parent_name)?;
                    if c2 == b'-' {
                        let c3 = self.next_or(SyntaxErrorKind::IncompleteTag, parent_name)?;
                        if c3 == b'-' {
                            self.parse_comment(parent, parent_name)?;
                        } else {
                            self.stream.pushback(4);
                            self.parse_entity_decl(parent, parent_name)?;
                        }
                    } else if c2 == b'[' {
                        self.stream.pushback(3);
                        self.parse_cdata(parent, parent_name)?;
                    } else {
                        self.stream.pushback(3);
                        self.parse_entity_decl(parent, parent_name)?;
                    }
                }
                b'?' => {
                    self.stream.pushback(2);
                    self.parse_pi(parent, parent_name)?;
                }
                _ => {
                    self.stream.pushback(2);
                    self.parse_element(parent)?;
                }
            }
        }
    }

    /// Parse one element: name, attribute list, body, closing tag.
    /// The element joins its parent only once its subtree is complete.
    fn parse_element(&mut self, parent: Node) -> Result<(), Error> {
        let c = self.next_or(SyntaxErrorKind::IncompleteTag, None)?;
        if c != b'<' {
            return Err(self.syntax(SyntaxErrorKind::IncompleteTag, None));
        }

        let mut name_bytes = Vec::new();
        let mut has_children = true;
        let ended_by_space;
        loop {
            let c = self.next_or(SyntaxErrorKind::UnexpectedEnd, None)?;
            if c == b'>' {
                ended_by_space = false;
                break;
            }
            if c <= 0x20 {
                ended_by_space = true;
                break;
            }
            name_bytes.push(c);
        }
        if !ended_by_space && name_bytes.last() == Some(&b'/') {
            name_bytes.pop();
            has_children = false;
        }
        if name_bytes.is_empty() {
            return Err(self.syntax(SyntaxErrorKind::InvalidElementName, None));
        }
        let name = String::from_utf8_lossy(&name_bytes).into_owned();

        let element = self.tree.new_element(&name);
        match self.parse_element_rest(element, &name, ended_by_space, has_children) {
            Ok(()) => {
                self.tree.append(parent, element)?;
                Ok(())
            }
            Err(e) => {
                element.get().remove_subtree(self.tree.arena_mut());
                Err(e)
            }
        }
    }

    fn parse_element_rest(
        &mut self,
        element: Node,
        name: &str,
        ended_by_space: bool,
        mut has_children: bool,
    ) -> Result<(), Error> {
        if ended_by_space {
            self.parse_attributes(element, name, &mut has_children)?;
        }
        if has_children {
            self.parse_nodes(element, Some(name))?;
            self.parse_close_tag(name)?;
        }
        Ok(())
    }

    /// Read the `</name>` closing tag and match it against the open
    /// element.
    fn parse_close_tag(&mut self, expected: &str) -> Result<(), Error> {
        let missing = || SyntaxErrorKind::MissingCloseTag {
            expected: expected.to_string(),
        };
        let mut name_bytes = Vec::new();
        loop {
            let c = self.next_or(missing(), Some(expected))?;
            if c == b'<' {
                let c2 = self.next_or(missing(), Some(expected))?;
                if c2 == b'/' {
                    continue;
                }
                return Err(self.syntax(missing(), Some(expected)));
            }
            if c == b'>' {
                break;
            }
            name_bytes.push(c);
        }
        let found = String::from_utf8_lossy(&name_bytes).into_owned();
        if found != expected {
            return Err(self.syntax(
                SyntaxErrorKind::InvalidCloseTag {
                    expected: expected.to_string(),
                    found,
                },
                Some(expected),
            ));
        }
        Ok(())
    }

    /// Scan `name=value` tokens up to `>`. Whitespace splits tokens
    /// except inside double quotes; a `/` right before the `>` marks
    /// the element self-closing.
    fn parse_attributes(
        &mut self,
        element: Node,
        name: &str,
        has_children: &mut bool,
    ) -> Result<(), Error> {
        if self.skip_whitespace()?.is_none() {
            return Err(self.syntax(SyntaxErrorKind::UnexpectedEnd, Some(name)));
        }
        self.stream.pushback(1);

        let mut token: Vec<u8> = Vec::new();
        let mut in_quote = false;
        loop {
            let c = self.next_or(SyntaxErrorKind::UnexpectedEnd, Some(name))?;
            if c == b'>' {
                if token.last() == Some(&b'/') {
                    token.pop();
                    *has_children = false;
                }
                self.add_attribute(element, &token, name)?;
                return Ok(());
            }
            if c == b'"' {
                in_quote = !in_quote;
            }
            if c <= 0x20 && !in_quote {
                self.add_attribute(element, &token, name)?;
                token.clear();
                if self.skip_whitespace()?.is_none() {
                    return Err(self.syntax(SyntaxErrorKind::UnexpectedEnd, Some(name)));
                }
                self.stream.pushback(1);
                continue;
            }
            token.push(c);
        }
    }

    /// Split one attribute token on its last `=` and store it on the
    /// element. One pair of surrounding double quotes is stripped from
    /// the value; the codec is applied by the element.
    fn add_attribute(&mut self, element: Node, token: &[u8], name: &str) -> Result<(), Error> {
        if token.is_empty() {
            return Ok(());
        }
        let token = String::from_utf8_lossy(token).into_owned();
        let eq = match token.rfind('=') {
            Some(eq) => eq,
            None => {
                return Err(self.syntax(
                    SyntaxErrorKind::MissingAttributeValue { token },
                    Some(name),
                ))
            }
        };
        let attribute_name = &token[..eq];
        let mut value = &token[eq + 1..];
        if let Some(stripped) = value.strip_prefix('"') {
            value = stripped;
            if let Some(end) = value.find('"') {
                value = &value[..end];
            }
        }
        if let Some(element) = self.tree.element_mut(element) {
            element.set_attribute(attribute_name, value);
        }
        Ok(())
    }

    /// Accumulate a text run up to the next `<`, which stays in the
    /// stream for the node loop.
    fn parse_text(&mut self, parent: Node, parent_name: Option<&str>) -> Result<(), Error> {
        let bytes = self.read_text(Terminator::Char(b'<'), parent_name)?;
        self.stream.pushback(1);
        let text = String::from_utf8_lossy(&bytes);
        let node = self.tree.new_text(&text);
        self.tree.append(parent, node)?;
        Ok(())
    }

    /// Comment body, entered with `<!--` already consumed.
    fn parse_comment(&mut self, parent: Node, parent_name: Option<&str>) -> Result<(), Error> {
        if !self.options.parse_comments {
            return self.scan_comment(parent_name);
        }
        let bytes = self.read_text(Terminator::CommentEnd, parent_name)?;
        if !bytes.is_empty() {
            let text = String::from_utf8_lossy(&bytes);
            let node = self.tree.new_comment(&text);
            self.tree.append(parent, node)?;
        }
        Ok(())
    }

    /// Skip to `-->` without building anything.
    fn scan_comment(&mut self, parent_name: Option<&str>) -> Result<(), Error> {
        let mut prev = 0u8;
        let mut prev2 = 0u8;
        loop {
            let c = self.next_or(SyntaxErrorKind::UnexpectedEnd, parent_name)?;
            if c == b'>' && prev == b'-' && prev2 == b'-' {
                return Ok(());
            }
            prev2 = prev;
            prev = c;
        }
    }

    /// CDATA section, entered at the `<`. The 9-byte prefix
    /// `<![CDATA[` is matched literally; the payload is stored
    /// verbatim, bypassing the codec.
    fn parse_cdata(&mut self, parent: Node, parent_name: Option<&str>) -> Result<(), Error> {
        let mut prefix = [0u8; 9];
        for slot in prefix.iter_mut() {
            *slot = self.next_or(SyntaxErrorKind::IncompleteTag, parent_name)?;
        }
        if prefix != *b"<![CDATA[" {
            self.stream.pushback(9);
            return Err(self.syntax(SyntaxErrorKind::InvalidCdata, parent_name));
        }
        let bytes = self.read_text(Terminator::CdataEnd, parent_name)?;
        let text = String::from_utf8_lossy(&bytes);
        let node = self.tree.new_cdata(&text);
        self.tree.append(parent, node)?;
        Ok(())
    }

    /// Entity declaration `<!NAME body>`, entered at the `<`. Name and
    /// body are stored verbatim.
    fn parse_entity_decl(&mut self, parent: Node, parent_name: Option<&str>) -> Result<(), Error> {
        let c = self.next_or(SyntaxErrorKind::IncompleteTag, parent_name)?;
        let c1 = self.next_or(SyntaxErrorKind::IncompleteTag, parent_name)?;
        if c != b'<' || c1 != b'!' {
            return Err(self.syntax(SyntaxErrorKind::InvalidEntityName, parent_name));
        }

        let mut name_bytes = Vec::new();
        let ended_by_gt;
        loop {
            let c = self.next_or(SyntaxErrorKind::InvalidEntityName, parent_name)?;
            if c <= 0x20 {
                ended_by_gt = false;
                break;
            }
            if c == b'>' {
                ended_by_gt = true;
                break;
            }
            name_bytes.push(c);
        }
        if name_bytes.is_empty() {
            return Err(self.syntax(SyntaxErrorKind::InvalidEntityName, parent_name));
        }
        let name = String::from_utf8_lossy(&name_bytes).into_owned();

        let text = if ended_by_gt {
            String::new()
        } else {
            let bytes = self.read_text(Terminator::Char(b'>'), parent_name)?;
            String::from_utf8_lossy(&bytes).into_owned()
        };
        let node = self.tree.new_entity_decl(&name, &text);
        self.tree.append(parent, node)?;
        Ok(())
    }

    /// Processing instruction, entered at the `<`. Only `<?xml` is
    /// recognized, case-insensitively on the target; the body runs to
    /// `?>` and is stored verbatim.
    fn parse_pi(&mut self, parent: Node, parent_name: Option<&str>) -> Result<(), Error> {
        let mut prefix = [0u8; 5];
        for slot in prefix.iter_mut() {
            *slot = self.next_or(SyntaxErrorKind::IncompleteTag, parent_name)?;
        }
        let recognized = prefix[0] == b'<'
            && prefix[1] == b'?'
            && prefix[2].eq_ignore_ascii_case(&b'x')
            && prefix[3].eq_ignore_ascii_case(&b'm')
            && prefix[4].eq_ignore_ascii_case(&b'l');
        if !recognized {
            self.stream.pushback(5);
            return Err(self.syntax(
                SyntaxErrorKind::InvalidProcessingInstruction,
                parent_name,
            ));
        }
        let bytes = self.read_text(Terminator::PiEnd, parent_name)?;
        let data = String::from_utf8_lossy(&bytes);
        let node = self
            .tree
            .new_processing_instruction("xml", data.trim_start());
        self.tree.append(parent, node)?;
        Ok(())
    }

    /// Accumulate bytes until the terminator. The terminator token is
    /// consumed and not part of the result. On allocation failure the
    /// bytes gathered so far are preserved in the error.
    fn read_text(
        &mut self,
        terminator: Terminator,
        element: Option<&str>,
    ) -> Result<Vec<u8>, Error> {
        let mut out: Vec<u8> = Vec::new();
        loop {
            let c = self.next_or(SyntaxErrorKind::UnexpectedEnd, element)?;
            if c == terminator.trigger() && self.at_end_token(terminator, element)? {
                return Ok(out);
            }
            if out.try_reserve(1).is_err() {
                return Err(Error::Allocation {
                    partial: String::from_utf8_lossy(&out).into_owned(),
                    window: self.stream.recent_window(),
                });
            }
            out.push(c);
        }
    }

    /// Whether the stream sits at the rest of the terminator's end
    /// token. Probed bytes are pushed back on a false match.
    fn at_end_token(&mut self, terminator: Terminator, element: Option<&str>) -> Result<bool, Error> {
        match terminator {
            Terminator::Char(_) => Ok(true),
            Terminator::CommentEnd => self.probe_two(b'-', b'>', element),
            Terminator::CdataEnd => self.probe_two(b']', b'>', element),
            Terminator::PiEnd => self.probe_one(b'>', element),
        }
    }

    fn probe_one(&mut self, expected: u8, element: Option<&str>) -> Result<bool, Error> {
        let c = self.next_or(SyntaxErrorKind::UnexpectedEnd, element)?;
        if c == expected {
            Ok(true)
        } else {
            self.stream.pushback(1);
            Ok(false)
        }
    }

    fn probe_two(&mut self, first: u8, second: u8, element: Option<&str>) -> Result<bool, Error> {
        let c1 = self.next_or(SyntaxErrorKind::UnexpectedEnd, element)?;
        if c1 != first {
            self.stream.pushback(1);
            return Ok(false);
        }
        let c2 = self.next_or(SyntaxErrorKind::UnexpectedEnd, element)?;
        if c2 == second {
            Ok(true)
        } else {
            self.stream.pushback(2);
            Ok(false)
        }
    }
}
