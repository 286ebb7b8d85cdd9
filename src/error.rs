//! Errors and warnings produced while loading and converting grammars.

use serde::Serialize;
use thiserror::Error;

/// A grammar source could not be loaded.
#[derive(Debug, Error)]
pub struct ParsingError {
    line: Option<usize>,
    msg: String,
}

impl ParsingError {
    pub(crate) fn new<S: Into<String>>(line: Option<usize>, msg: S) -> Self {
        Self {
            line,
            msg: msg.into(),
        }
    }

    /// The 1-based line of the source the error refers to, if known.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// A human readable description of the problem.
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "ParsingError in line {}: {}", line, self.msg),
            None => write!(f, "ParsingError: {}", self.msg),
        }
    }
}

/// Fatal conditions that abort a conversion.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The grammar source could not be loaded
    #[error(transparent)]
    Parsing(#[from] ParsingError),

    /// A single body contains too many nullable variables to expand
    #[error("Grammar too complex: a body of '{variable}' contains {nullable} nullable variables (limit is {limit})")]
    GrammarTooComplex {
        /// Left-hand side of the offending body
        variable: String,
        /// Number of nullable positions in the body
        nullable: usize,
        /// Configured limit
        limit: usize,
    },
}

/// Recoverable findings. The conversion still produces a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// An alternative contained no symbols and no ε marker
    #[error("Alternative #{index} of '{variable}' is empty; write ε for an empty production")]
    EmptyAlternative {
        /// Left-hand side the alternative belongs to
        variable: String,
        /// 0-based position in the alternative list
        index: usize,
    },

    /// An ε marker was removed from an alternative that contains other symbols
    #[error("Alternative #{index} of '{variable}' mixes ε with other symbols; the ε was dropped")]
    EpsilonDropped {
        /// Left-hand side the alternative belongs to
        variable: String,
        /// 0-based position in the alternative list
        index: usize,
    },

    /// A line had a `->` but nothing in front of it
    #[error("Line {line} has no left-hand side and was skipped")]
    MissingLeftHandSide {
        /// 1-based line number
        line: usize,
    },

    /// The configured start symbol is never defined
    #[error("The start symbol '{symbol}' is never defined")]
    UnknownStartSymbol {
        /// Name of the configured start symbol
        symbol: String,
    },
}
