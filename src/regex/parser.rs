use crate::regex::ast::{Class, Node};
use crate::regex::cursor::Cursor;
use crate::regex::error::ParseError;

/// Deepest nesting a compiled pattern may reach, both in parser recursion
/// and in the height of the resulting tree.
pub const MAX_DEPTH: usize = 256;

pub fn compile(pattern: &str) -> Result<Vec<Node>, ParseError> {
    let mut parser = Parser {
        cursor: Cursor::new(pattern),
        next_group: 0,
        closers: Vec::new(),
    };
    let mut siblings = Vec::new();
    while !parser.cursor.is_exhausted() {
        parser.parse_token(&mut siblings)?;
    }
    Ok(siblings)
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    next_group: usize,
    // one entry per open group or operand, innermost last; operands
    // inherit the closing delimiter of the group they sit in
    closers: Vec<Option<&'static str>>,
}

impl Parser<'_> {
    /// Parses one token and pushes the resulting node onto `siblings`.
    /// Postfix operators and `|` take their left operand from `siblings`.
    fn parse_token(&mut self, siblings: &mut Vec<Node>) -> Result<(), ParseError> {
        let start = self.cursor.position();
        let Some(c) = self.cursor.peek_char() else {
            return Ok(());
        };
        self.cursor.advance(1);

        let node = match c {
            '(' => {
                // reserve the id before the body so ids follow opening order
                let id = self.next_group;
                self.next_group += 1;
                Node::Capture(self.parse_group(")", start)?, id)
            }
            '[' => Node::Sequence(self.parse_group("]", start)?),
            '|' => {
                let left = pop_operand(siblings, c, start)?;
                let right = self.parse_operand(c, start)?;
                Node::Alternation(Box::new(left), Box::new(right))
            }
            '?' => Node::Optional(Box::new(pop_operand(siblings, c, start)?)),
            '*' => Node::ZeroOrMore(Box::new(pop_operand(siblings, c, start)?)),
            '+' => Node::OneOrMore(Box::new(pop_operand(siblings, c, start)?)),
            '.' => Node::Any,
            '^' => Node::Negation(Box::new(self.parse_operand(c, start)?)),
            '\\' => {
                let Some(escaped) = self.cursor.peek_char() else {
                    return Err(ParseError::TrailingEscape { position: start });
                };
                self.cursor.advance(1);
                match escaped {
                    'l' => Node::Class(Class::Letter),
                    'd' => Node::Class(Class::Digit),
                    'w' => Node::Class(Class::Whitespace),
                    other => Node::Literal(other),
                }
            }
            other => Node::Literal(other),
        };

        if node.depth() > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                position: start,
            });
        }
        siblings.push(node);
        Ok(())
    }

    /// Parses the body of a group whose opening delimiter is already consumed,
    /// up to and including `close`. The body gets its own sibling list.
    fn parse_group(&mut self, close: &'static str, open: usize) -> Result<Vec<Node>, ParseError> {
        self.enter(open, Some(close))?;
        let mut siblings = Vec::new();
        loop {
            if self.cursor.is_exhausted() {
                return Err(ParseError::UnterminatedGroup {
                    expected: close,
                    position: open,
                });
            }
            if self.cursor.is_at(close) {
                self.cursor.advance(1);
                break;
            }
            self.parse_token(&mut siblings)?;
        }
        self.closers.pop();
        Ok(siblings)
    }

    /// Parses exactly one following token as the operand of `operator`.
    fn parse_operand(&mut self, operator: char, position: usize) -> Result<Node, ParseError> {
        let close = self.closers.last().copied().flatten();
        let at_close = close.is_some_and(|close| self.cursor.is_at(close));
        if self.cursor.is_exhausted() || at_close {
            return Err(ParseError::MissingOperand { operator, position });
        }

        self.enter(position, close)?;
        let mut operand = Vec::new();
        self.parse_token(&mut operand)?;
        self.closers.pop();

        match (operand.pop(), operand.is_empty()) {
            (None, _) => Err(ParseError::MissingOperand { operator, position }),
            (Some(node), true) => Ok(node),
            (Some(_), false) => Err(ParseError::OperandTooWide { operator, position }),
        }
    }

    fn enter(&mut self, position: usize, close: Option<&'static str>) -> Result<(), ParseError> {
        if self.closers.len() >= MAX_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                position,
            });
        }
        self.closers.push(close);
        Ok(())
    }
}

fn pop_operand(
    siblings: &mut Vec<Node>,
    operator: char,
    position: usize,
) -> Result<Node, ParseError> {
    siblings
        .pop()
        .ok_or(ParseError::MissingOperand { operator, position })
}
