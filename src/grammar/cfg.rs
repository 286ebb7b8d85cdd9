use std::fmt::{Display, Formatter, Result as FmtResult};

use indexmap::IndexMap;
use itertools::Itertools;

/// The character that marks an empty production body.
pub const EPSILON: char = 'ε';

/// A variable (non-terminal). Source-level variables are single uppercase
/// ASCII letters, variables introduced by the conversion are longer.
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Variable(String);

impl Variable {
    /// Create a variable with the given name.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The name of this variable.
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A terminal. The distinguished terminal `ε` only appears as the sole
/// symbol of an empty production.
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Terminal(String);

impl Terminal {
    /// Create a terminal with the given content.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The ε marker.
    pub fn epsilon() -> Self {
        Self(EPSILON.to_string())
    }

    /// The content of this terminal.
    pub fn content(&self) -> &str {
        &self.0
    }

    /// Whether this is the ε marker.
    pub fn is_epsilon(&self) -> bool {
        self.0.chars().eq(std::iter::once(EPSILON))
    }
}

/// A symbol on the right-hand side of a production.
/// Every symbol is either a variable or a terminal, nothing else.
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Symbol {
    /// A terminal
    Terminal(Terminal),
    /// A variable
    Variable(Variable),
}

impl Symbol {
    /// Classify a single source character. Uppercase ASCII letters are variables,
    /// every other character (including digits, punctuation and ε) is a terminal.
    pub fn classify(c: char) -> Self {
        if c.is_ascii_uppercase() {
            Symbol::Variable(Variable::new(c))
        } else {
            Symbol::Terminal(Terminal::new(c))
        }
    }

    /// Shorthand for `Symbol::Variable(Variable::new(name))`.
    pub fn variable<S: Into<String>>(name: S) -> Self {
        Symbol::Variable(Variable::new(name))
    }

    /// Shorthand for `Symbol::Terminal(Terminal::new(content))`.
    pub fn terminal<S: Into<String>>(content: S) -> Self {
        Symbol::Terminal(Terminal::new(content))
    }

    /// Returns the variable if this symbol is one.
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Symbol::Variable(var) => Some(var),
            Symbol::Terminal(_) => None,
        }
    }

    /// Returns the terminal if this symbol is one.
    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            Symbol::Terminal(term) => Some(term),
            Symbol::Variable(_) => None,
        }
    }

    /// Whether this symbol is a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Symbol::Variable(_))
    }
}

/// The right-hand side of a single production.
pub type Body = Vec<Symbol>;

/// Returns true if `body` is exactly `[ε]`.
pub fn is_epsilon_body(body: &[Symbol]) -> bool {
    matches!(body, [Symbol::Terminal(term)] if term.is_epsilon())
}

/// If `body` is a unit production, returns the variable it points to.
pub fn unit_target(body: &[Symbol]) -> Option<&Variable> {
    match body {
        [Symbol::Variable(var)] => Some(var),
        _ => None,
    }
}

/// A context-free grammar: every variable maps to its ordered list of alternatives.
///
/// The order in which variables were defined is preserved, so printing a
/// grammar or running a conversion on it is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    rules: IndexMap<Variable, Vec<Body>>,
}

impl Grammar {
    /// Create an empty grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alternatives of `lhs`, replacing any earlier definition.
    /// A replaced variable keeps its original position.
    pub fn define(&mut self, lhs: Variable, bodies: Vec<Body>) {
        self.rules.insert(lhs, bodies);
    }

    /// Make sure `lhs` is present, possibly with no alternatives.
    pub fn declare(&mut self, lhs: Variable) {
        self.rules.entry(lhs).or_default();
    }

    /// Append `body` to the alternatives of `lhs` unless it is already there.
    /// Returns whether the body was added.
    pub fn push_unique(&mut self, lhs: &Variable, body: Body) -> bool {
        let bodies = self.rules.entry(lhs.clone()).or_default();

        if bodies.contains(&body) {
            false
        } else {
            bodies.push(body);
            true
        }
    }

    /// The alternatives of `lhs`. Undefined variables have none.
    pub fn alternatives(&self, lhs: &Variable) -> &[Body] {
        self.rules.get(lhs).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All defined variables in definition order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.rules.keys()
    }

    /// All variables together with their alternatives in definition order.
    pub fn rules(&self) -> impl Iterator<Item = (&Variable, &[Body])> {
        self.rules.iter().map(|(lhs, bodies)| (lhs, bodies.as_slice()))
    }

    /// Number of defined variables.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no variable is defined.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total number of productions over all variables.
    pub fn production_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    /// Whether `var` is defined.
    pub fn contains(&self, var: &Variable) -> bool {
        self.rules.contains_key(var)
    }

    /// Whether `var` occurs on any right-hand side.
    pub fn occurs_in_body(&self, var: &Variable) -> bool {
        self.rules
            .values()
            .flatten()
            .flatten()
            .any(|symbol| symbol.as_variable() == Some(var))
    }

    /// Check whether this grammar is in Chomsky Normal Form with `start` as
    /// its start symbol.
    pub fn is_in_cnf(&self, start: &Variable) -> bool {
        let start_hidden = !self.occurs_in_body(start);

        self.rules().all(|(lhs, bodies)| {
            bodies.iter().all(|body| match body.as_slice() {
                [Symbol::Terminal(term)] => !term.is_epsilon() || (lhs == start && start_hidden),
                [Symbol::Variable(_), Symbol::Variable(_)] => true,
                _ => false,
            })
        })
    }

    /// Display adapter that concatenates the symbols of a body without spaces.
    pub fn compact(&self) -> Compact<'_> {
        Compact(self)
    }

    fn render(&self, f: &mut Formatter, sep: &str) -> FmtResult {
        for (i, (lhs, bodies)) in self.rules().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            let bodies = bodies.iter().map(|body| body.iter().join(sep)).join(" | ");
            write!(f, "{} → {}", lhs, bodies)?;
        }

        Ok(())
    }
}

impl FromIterator<(Variable, Vec<Body>)> for Grammar {
    fn from_iter<I: IntoIterator<Item = (Variable, Vec<Body>)>>(iter: I) -> Self {
        let mut grammar = Grammar::new();

        for (lhs, bodies) in iter {
            grammar.define(lhs, bodies);
        }

        grammar
    }
}

/// Compact rendering of a [`Grammar`], see [`Grammar::compact`].
pub struct Compact<'a>(&'a Grammar);

impl Display for Compact<'_> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        self.0.render(f, "")
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl Display for Terminal {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Symbol::Terminal(term) => write!(f, "{}", term),
            Symbol::Variable(var) => write!(f, "{}", var),
        }
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        self.render(f, " ")
    }
}
