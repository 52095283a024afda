//! Pretty-printing serialization.
//!
//! Output is indentation-based: every node starts on its own line,
//! indented with one tab per level of element nesting. Stored text is
//! written back as stored, so escaped entities produced by the codec
//! survive a round trip.

use std::io::Write;

use crate::access::NodeEdge;
use crate::error::Error;
use crate::xmlvalue::Value;
use crate::xtreedata::{Node, Xtree};

fn indent(w: &mut impl Write, depth: usize) -> std::io::Result<()> {
    for _ in 0..depth {
        w.write_all(b"\t")?;
    }
    Ok(())
}

/// ## Serialization
impl Xtree {
    /// Pretty-print the subtree under `node` to a writer.
    ///
    /// A root node writes its children at depth zero; an element with
    /// children opens and closes on separate lines; a childless
    /// element collapses to the self-closing form.
    pub fn write(&self, node: Node, w: &mut impl Write) -> Result<(), Error> {
        let mut depth: usize = 0;
        for edge in self.traverse(node) {
            match edge {
                NodeEdge::Start(current) => match self.value(current) {
                    Value::Root => {}
                    Value::Element(element) => {
                        indent(w, depth)?;
                        write!(w, "<{}", element.name())?;
                        for attribute in element.attributes().iter() {
                            write!(w, " {}=\"{}\"", attribute.name(), attribute.value())?;
                        }
                        if self.first_child(current).is_some() {
                            writeln!(w, ">")?;
                            depth += 1;
                        } else {
                            writeln!(w, "/>")?;
                        }
                    }
                    Value::Text(text) => {
                        indent(w, depth)?;
                        writeln!(w, "{}", text.get())?;
                    }
                    Value::Cdata(cdata) => {
                        indent(w, depth)?;
                        writeln!(w, "<![CDATA[{}]]>", cdata.get())?;
                    }
                    Value::Comment(comment) => {
                        indent(w, depth)?;
                        writeln!(w, "<!--{}-->", comment.get())?;
                    }
                    Value::EntityDecl(entity) => {
                        indent(w, depth)?;
                        if entity.text().is_empty() {
                            writeln!(w, "<!{}>", entity.name())?;
                        } else {
                            writeln!(w, "<!{} {}>", entity.name(), entity.text())?;
                        }
                    }
                    Value::ProcessingInstruction(pi) => {
                        indent(w, depth)?;
                        if pi.data().is_empty() {
                            writeln!(w, "<?{}?>", pi.target())?;
                        } else {
                            writeln!(w, "<?{} {}?>", pi.target(), pi.data())?;
                        }
                    }
                },
                NodeEdge::End(current) => {
                    if let Value::Element(element) = self.value(current) {
                        if self.first_child(current).is_some() {
                            depth -= 1;
                            indent(w, depth)?;
                            writeln!(w, "</{}>", element.name())?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Pretty-print the subtree under `node` to a string.
    ///
    /// ```rust
    /// use xtree::Xtree;
    ///
    /// let mut xtree = Xtree::new();
    /// let root = xtree.parse("<doc><p>hi</p></doc>").unwrap();
    /// assert_eq!(
    ///     xtree.to_string(root).unwrap(),
    ///     "<doc>\n\t<p>\n\t\thi\n\t</p>\n</doc>\n"
    /// );
    /// ```
    pub fn to_string(&self, node: Node) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.write(node, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
