//! Anchored regular-expression engine built from matching combinators.
//!
//! A pattern is compiled into a list of [`Node`] trees which are then
//! interpreted against the start of a text. Nodes never backtrack into their
//! siblings: each one commits to what it greedily consumed.
//!
//! ```
//! use anchored_regex::Regex;
//!
//! let re = Regex::new(r"(-|\+)?(\d*)\.?(\d*)").unwrap();
//! let found = re.matches_at_start("-8588.9").unwrap();
//! assert_eq!(found.as_str(), "-8588.9");
//! assert_eq!(found.captures().get(1), Some(&["8588"][..]));
//! ```

pub mod regex;

pub use regex::{Captures, Match, Node, ParseError, Regex, compile, match_all, match_node};
