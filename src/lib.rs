#![forbid(unsafe_code)]

mod access;
mod creation;
mod error;
mod escape;
mod manipulation;
mod parse;
mod select;
mod serialize;
mod stream;
mod valueaccess;
mod xmlvalue;
mod xtreedata;

pub use access::NodeEdge;
pub use error::{Error, SyntaxError, SyntaxErrorKind};
pub use escape::escape;
pub use parse::ParseOptions;
pub use xmlvalue::{
    Attribute, Attributes, Cdata, Comment, Element, EntityDecl, ProcessingInstruction, Text,
    Value, ValueType,
};
pub use xtreedata::{Node, Xtree};
