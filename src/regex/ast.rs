use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Digit,      // \d
    Letter,     // \l
    Whitespace, // \w
}

impl Class {
    pub fn matches(self, c: char) -> bool {
        match self {
            Class::Digit => c.is_numeric(),
            Class::Letter => c.is_alphabetic(),
            Class::Whitespace => c.is_whitespace(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(char),
    Any,                                // .
    Class(Class),                       // \d, \l, \w
    Sequence(Vec<Node>),                // [...]
    Capture(Vec<Node>, usize),          // (...) with its group id
    Alternation(Box<Node>, Box<Node>),  // left | right
    Negation(Box<Node>),                // ^X
    Optional(Box<Node>),                // ?
    ZeroOrMore(Box<Node>),              // *
    OneOrMore(Box<Node>),               // +
}

impl Node {
    /// Height of the tree rooted at this node; leaves have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Literal(_) | Node::Any | Node::Class(_) => 1,
            Node::Sequence(inner) | Node::Capture(inner, _) => {
                1 + inner.iter().map(Node::depth).max().unwrap_or(0)
            }
            Node::Alternation(left, right) => 1 + left.depth().max(right.depth()),
            Node::Negation(inner)
            | Node::Optional(inner)
            | Node::ZeroOrMore(inner)
            | Node::OneOrMore(inner) => 1 + inner.depth(),
        }
    }

    /// Group ids of every capture in this subtree, in pre-order.
    pub fn capture_ids(&self) -> Vec<usize> {
        let mut ids = Vec::new();
        self.collect_capture_ids(&mut ids);
        ids
    }

    fn collect_capture_ids(&self, out: &mut Vec<usize>) {
        match self {
            Node::Literal(_) | Node::Any | Node::Class(_) => {}
            Node::Capture(inner, id) => {
                out.push(*id);
                inner.iter().for_each(|n| n.collect_capture_ids(out));
            }
            Node::Sequence(inner) => inner.iter().for_each(|n| n.collect_capture_ids(out)),
            Node::Alternation(left, right) => {
                left.collect_capture_ids(out);
                right.collect_capture_ids(out);
            }
            Node::Negation(inner)
            | Node::Optional(inner)
            | Node::ZeroOrMore(inner)
            | Node::OneOrMore(inner) => inner.collect_capture_ids(out),
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Node::Literal(c) => writeln!(f, "{pad}CHAR ({c})"),
            Node::Any => writeln!(f, "{pad}ANY"),
            Node::Class(Class::Digit) => writeln!(f, "{pad}DIGIT"),
            Node::Class(Class::Letter) => writeln!(f, "{pad}LETTER"),
            Node::Class(Class::Whitespace) => writeln!(f, "{pad}WHITESPACE"),
            Node::Sequence(inner) => {
                writeln!(f, "{pad}SEQUENCE")?;
                inner.iter().try_for_each(|n| n.write_tree(f, indent + 1))
            }
            Node::Capture(inner, id) => {
                writeln!(f, "{pad}CAPTURE #{id}")?;
                inner.iter().try_for_each(|n| n.write_tree(f, indent + 1))
            }
            Node::Alternation(left, right) => {
                writeln!(f, "{pad}OR")?;
                writeln!(f, "{pad}  A:")?;
                left.write_tree(f, indent + 2)?;
                writeln!(f, "{pad}  B:")?;
                right.write_tree(f, indent + 2)
            }
            Node::Negation(inner) => {
                writeln!(f, "{pad}NOT")?;
                inner.write_tree(f, indent + 1)
            }
            Node::Optional(inner) => {
                writeln!(f, "{pad}0..1")?;
                inner.write_tree(f, indent + 1)
            }
            Node::ZeroOrMore(inner) => {
                writeln!(f, "{pad}0..")?;
                inner.write_tree(f, indent + 1)
            }
            Node::OneOrMore(inner) => {
                writeln!(f, "{pad}1..")?;
                inner.write_tree(f, indent + 1)
            }
        }
    }
}

/// Indented tree dump, one node per line.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
