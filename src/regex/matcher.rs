use crate::regex::ast::Node;
use crate::regex::captures::Captures;

/// Result of matching a whole pattern at the start of a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t> {
    matched: &'t str,
    captures: Captures<'t>,
}

impl<'t> Match<'t> {
    pub fn as_str(&self) -> &'t str {
        self.matched
    }

    /// Matched length in bytes.
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.matched.chars().count()
    }

    pub fn captures(&self) -> &Captures<'t> {
        &self.captures
    }

    pub fn into_captures(self) -> Captures<'t> {
        self.captures
    }
}

/// Matches `node` against the start of `text`, returning the consumed prefix.
///
/// Every node commits to what it consumes: nothing is retried with a shorter
/// split when a later sibling fails. Captures recorded along the way are kept
/// even if an enclosing node fails afterwards.
pub fn match_node<'t>(node: &Node, text: &'t str, captures: &mut Captures<'t>) -> Option<&'t str> {
    match node {
        Node::Literal(l) => match_char(text, |c| c == *l),
        Node::Any => match_char(text, |_| true),
        Node::Class(class) => match_char(text, |c| class.matches(c)),
        Node::Negation(inner) => {
            if match_node(inner, text, captures).is_some() {
                return None;
            }
            // a failed inner attempt still consumes exactly one character
            match_char(text, |_| true)
        }
        Node::Sequence(inner) => match_sequence(inner, text, captures),
        Node::Capture(inner, id) => {
            let matched = match_sequence(inner, text, captures)?;
            captures.record(*id, matched);
            Some(matched)
        }
        Node::Alternation(left, right) => {
            match_node(left, text, captures).or_else(|| match_node(right, text, captures))
        }
        Node::Optional(inner) => Some(match_node(inner, text, captures).unwrap_or(&text[..0])),
        Node::ZeroOrMore(inner) => Some(repeat(inner, text, captures).0),
        Node::OneOrMore(inner) => match repeat(inner, text, captures) {
            (_, 0) => None,
            (matched, _) => Some(matched),
        },
    }
}

/// Matches each node in turn against what the previous ones left over.
pub fn match_all<'t>(nodes: &[Node], text: &'t str) -> Option<Match<'t>> {
    let mut captures = Captures::new();
    let matched = match_sequence(nodes, text, &mut captures)?;
    Some(Match { matched, captures })
}

fn match_char(text: &str, pred: impl Fn(char) -> bool) -> Option<&str> {
    let c = text.chars().next()?;
    pred(c).then(|| &text[..c.len_utf8()])
}

fn match_sequence<'t>(
    nodes: &[Node],
    text: &'t str,
    captures: &mut Captures<'t>,
) -> Option<&'t str> {
    let mut offset = 0;
    for node in nodes {
        offset += match_node(node, &text[offset..], captures)?.len();
    }
    Some(&text[..offset])
}

/// Greedy repetition. Returns the consumed prefix and how many iterations
/// succeeded; stops after an iteration that consumed nothing.
fn repeat<'t>(node: &Node, text: &'t str, captures: &mut Captures<'t>) -> (&'t str, usize) {
    let mut offset = 0;
    let mut count = 0;
    while let Some(matched) = match_node(node, &text[offset..], captures) {
        offset += matched.len();
        count += 1;
        if matched.is_empty() {
            break;
        }
    }
    (&text[..offset], count)
}

#[cfg(test)]
mod tests {
    use crate::regex::{compile, match_all};

    fn m(pattern: &str, text: &str) -> Option<String> {
        let nodes = compile(pattern).unwrap();
        match_all(&nodes, text).map(|found| found.as_str().to_string())
    }

    fn caps(pattern: &str, text: &str) -> Vec<Vec<String>> {
        let nodes = compile(pattern).unwrap();
        let found = match_all(&nodes, text).expect("pattern should match");
        found
            .captures()
            .iter()
            .map(|(_, entries)| entries.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn matches_literal_prefix() {
        assert_eq!(m("abc", "abcdef"), Some("abc".into()));
        assert_eq!(m("abc", "ab"), None);
        assert_eq!(m("abc", "xabc"), None);
        assert_eq!(m("", "anything"), Some("".into()));
    }

    #[test]
    fn matches_wildcard_and_classes() {
        assert_eq!(m("a.c", "axc"), Some("axc".into()));
        assert_eq!(m("a.c", "ac"), None);
        assert_eq!(m(r"\d\d", "42xx"), Some("42".into()));
        assert_eq!(m(r"\d\d", "4axx"), None);
        assert_eq!(m(r"\l\w\l", "a b"), Some("a b".into()));
        assert_eq!(m(r"\l", "1"), None);
        assert_eq!(m(r"\.", "x"), None);
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        assert_eq!(m(r"..\l", "€éü!"), Some("€éü".into()));
        let nodes = compile("..").unwrap();
        let found = match_all(&nodes, "€é").unwrap();
        assert_eq!(found.char_len(), 2);
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn quantifiers_are_greedy() {
        assert_eq!(m("ab?c", "abc"), Some("abc".into()));
        assert_eq!(m("ab?c", "ac"), Some("ac".into()));
        assert_eq!(m("ab*c", "abbbc"), Some("abbbc".into()));
        assert_eq!(m("ab+c", "ac"), None);
        assert_eq!(m("ab+c", "abbbc"), Some("abbbc".into()));
    }

    #[test]
    fn one_or_more_fails_where_zero_or_more_succeeds() {
        assert_eq!(m(r"\d+", "abc"), None);
        assert_eq!(m(r"\d*", "abc"), Some("".into()));
    }

    #[test]
    fn zero_length_match_is_not_failure() {
        let nodes = compile("x?").unwrap();
        let found = match_all(&nodes, "abc").unwrap();
        assert!(found.is_empty());
        assert!(found.captures().is_empty());
    }

    #[test]
    fn greedy_repetition_does_not_give_back() {
        // a* eats every 'a', so the trailing literal has nothing left
        assert_eq!(m("a*ab", "aaab"), None);
        assert_eq!(m("a*b", "aaab"), Some("aaab".into()));
    }

    #[test]
    fn alternation_tries_left_first() {
        assert_eq!(m("a|b", "b"), Some("b".into()));
        assert_eq!(m("a|b", "ab"), Some("a".into()));
        assert_eq!(m("a|b", "c"), None);
        // left commits even when the right branch would let the rest match
        assert_eq!(m("[a]|[ab]c", "abc"), None);
    }

    #[test]
    fn alternation_of_sequences() {
        assert_eq!(m("[GET]|[POST]", "POST"), Some("POST".into()));
        assert_eq!(m("[GET]|[POST]", "GET /"), Some("GET".into()));
        assert_eq!(m("[GET]|[POST]", "PUT"), None);
    }

    #[test]
    fn negation_consumes_one_character() {
        assert_eq!(m("^[:]", "a"), Some("a".into()));
        assert_eq!(m("^[:]", ":"), None);
        assert_eq!(m("^a", ""), None);
        // the inner sequence fails on "ac", yet only one character is taken
        assert_eq!(m("^[ab]", "ac"), Some("a".into()));
        assert_eq!(m("^[ab]", "ab"), None);
        assert_eq!(m(r"^\w+", "key value"), Some("key".into()));
    }

    #[test]
    fn signed_decimal_scenario() {
        let nodes = compile(r"(-|\+)?(\d*)\.?(\d*)").unwrap();
        let found = match_all(&nodes, "-8588.9").unwrap();
        assert_eq!(found.char_len(), 7);
        assert_eq!(found.captures().to_vec(), vec![vec!["-"], vec!["8588"], vec!["9"]]);
    }

    #[test]
    fn capture_outside_repetition_records_once() {
        assert_eq!(caps("(ab)c", "abcd"), vec![vec!["ab".to_string()]]);
    }

    #[test]
    fn capture_inside_repetition_records_each_iteration() {
        assert_eq!(caps(r"(\d)+", "123x"), vec![vec!["1", "2", "3"]]);
        // "c" is kept although its iteration fails on the missing digit
        assert_eq!(caps(r"[(\l)\d]*", "a1b2c"), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn unmatched_starred_capture_leaves_slot_absent() {
        let nodes = compile("x(y)*").unwrap();
        let found = match_all(&nodes, "xz").unwrap();
        assert_eq!(found.as_str(), "x");
        assert_eq!(found.captures().get(0), None);
        assert_eq!(found.captures().slot_count(), 0);
    }

    #[test]
    fn skipped_group_keeps_slot_positions() {
        let nodes = compile("(a)?(b)").unwrap();
        let found = match_all(&nodes, "b").unwrap();
        assert_eq!(found.captures().get(0), None);
        assert_eq!(found.captures().get(1), Some(&["b"][..]));
    }

    #[test]
    fn nested_captures_use_opening_order() {
        let nodes = compile("((a)b)").unwrap();
        let found = match_all(&nodes, "ab").unwrap();
        assert_eq!(found.captures().to_vec(), vec![vec!["ab"], vec!["a"]]);
    }

    #[test]
    fn empty_iterations_terminate() {
        assert_eq!(m("(a?)*b", "b"), Some("b".into()));
        assert_eq!(caps("(x*)+", "y"), vec![vec![""]]);
    }

    #[test]
    fn failed_sequence_returns_no_partial_match() {
        assert_eq!(m("[abc]?x", "abx"), None);
        assert_eq!(m("[abc]?x", "x"), Some("x".into()));
    }
}
