use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::grammar::Grammar;

/// The stages of the conversion, in pipeline order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Grammar as parsed from the source
    Parsed,
    /// ε-productions removed
    EpsilonElimination,
    /// Unit productions removed
    UnitElimination,
    /// Bodies longer than two symbols broken up
    LongRuleElimination,
    /// Terminals in binary bodies replaced by variables
    TerminalIsolation,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 5] = [
        Stage::Parsed,
        Stage::EpsilonElimination,
        Stage::UnitElimination,
        Stage::LongRuleElimination,
        Stage::TerminalIsolation,
    ];

    /// Human readable heading of this stage.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Parsed => "Parsed Grammar",
            Stage::EpsilonElimination => "After ε-Elimination",
            Stage::UnitElimination => "After Unit Production Elimination",
            Stage::LongRuleElimination => "After Long Rule Elimination",
            Stage::TerminalIsolation => "After Terminal Pair Replacement",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.label())
    }
}

/// The rendered grammar after one stage of the conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    stage: Stage,
    text: String,
}

impl Snapshot {
    pub(crate) fn capture(stage: Stage, grammar: &Grammar) -> Self {
        Self {
            stage,
            text: grammar.to_string(),
        }
    }

    /// The stage this snapshot was taken after.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Shorthand for `self.stage().label()`.
    pub fn label(&self) -> &'static str {
        self.stage.label()
    }

    /// The grammar, one `LHS → body | body` line per variable.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}:\n{}", self.label(), self.text)
    }
}
