use std::fmt;
use std::str::FromStr;

use crate::regex::ast::Node;
use crate::regex::error::ParseError;
use crate::regex::matcher::{Match, match_all};
use crate::regex::parser::compile;

/// A compiled pattern together with the text it was compiled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regex {
    source: String,
    nodes: Vec<Node>,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self, ParseError> {
        Ok(Regex {
            source: pattern.to_string(),
            nodes: compile(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of capture groups in the pattern.
    pub fn group_count(&self) -> usize {
        self.nodes.iter().map(|n| n.capture_ids().len()).sum()
    }

    /// Anchored match: only ever tries the start of `text`.
    pub fn matches_at_start<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        match_all(&self.nodes, text)
    }
}

impl FromStr for Regex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Regex::new(s)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.nodes.iter().try_for_each(|n| write!(f, "{n}"))
    }
}
