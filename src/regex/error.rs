use thiserror::Error;

/// Why a pattern failed to compile. Positions are byte offsets into the
/// pattern text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("`{operator}` at position {position} has no operand")]
    MissingOperand { operator: char, position: usize },

    #[error("operand of `{operator}` at position {position} is more than one atom")]
    OperandTooWide { operator: char, position: usize },

    #[error("trailing `\\` at position {position}")]
    TrailingEscape { position: usize },

    #[error("group opened at position {position} is never closed with `{expected}`")]
    UnterminatedGroup {
        expected: &'static str,
        position: usize,
    },

    #[error("pattern nests deeper than {limit} levels at position {position}")]
    TooDeep { limit: usize, position: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::MissingOperand { position, .. }
            | ParseError::OperandTooWide { position, .. }
            | ParseError::TrailingEscape { position }
            | ParseError::UnterminatedGroup { position, .. }
            | ParseError::TooDeep { position, .. } => *position,
        }
    }
}
