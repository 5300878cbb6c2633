pub mod ast;
pub mod captures;
pub mod cursor;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod pattern;

pub use ast::{Class, Node};
pub use captures::Captures;
pub use error::ParseError;
pub use matcher::{Match, match_all, match_node};
pub use parser::{MAX_DEPTH, compile};
pub use pattern::Regex;
