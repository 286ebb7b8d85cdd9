use indexmap::IndexSet;

use crate::{
    error::ConversionError,
    grammar::{is_epsilon_body, Body, Grammar, Symbol, Terminal, Variable},
};

fn is_nullable(symbol: &Symbol, nullable: &IndexSet<Variable>) -> bool {
    matches!(symbol, Symbol::Variable(var) if nullable.contains(var))
}

/// An `ε` marker inside a body of more than one symbol stands for nothing.
fn is_epsilon_marker(symbol: &Symbol) -> bool {
    matches!(symbol, Symbol::Terminal(term) if term.is_epsilon())
}

/// Generate every variant of `body` that keeps or drops each nullable occurrence.
/// Variants are produced in keep-before-drop order and the fully empty one is discarded.
/// `ε` markers are never kept.
fn expand_nullable(lhs: &Variable, body: &[Symbol], nullable: &IndexSet<Variable>, limit: usize) -> Result<Vec<Body>, ConversionError> {
    let count = body.iter().filter(|symbol| is_nullable(symbol, nullable)).count();

    if count > limit {
        return Err(ConversionError::GrammarTooComplex {
            variable: lhs.id().to_string(),
            nullable: count,
            limit,
        });
    }

    let mut variants: Vec<Body> = vec![Vec::with_capacity(body.len())];

    for symbol in body {
        if is_epsilon_marker(symbol) {
            continue;
        }

        let droppable = is_nullable(symbol, nullable);
        let mut next = Vec::with_capacity(if droppable { variants.len() * 2 } else { variants.len() });

        for partial in variants {
            let mut kept = partial.clone();
            kept.push(symbol.clone());
            next.push(kept);

            if droppable {
                next.push(partial);
            }
        }

        variants = next;
    }

    variants.retain(|variant| !variant.is_empty());
    Ok(variants)
}

impl Grammar {
    /// Compute the set of variables that can derive the empty string.
    ///
    /// Seeded with every variable that has an explicit `ε` body, then saturated:
    /// a variable whose body consists only of nullable variables (and `ε`
    /// markers) is nullable too.
    /// Each round either adds a variable or terminates, so there are at most
    /// `len() + 1` rounds.
    pub fn nullable(&self) -> IndexSet<Variable> {
        let mut nullable: IndexSet<Variable> = self
            .rules()
            .filter(|(_, bodies)| bodies.iter().any(|body| is_epsilon_body(body)))
            .map(|(lhs, _)| lhs.clone())
            .collect();

        loop {
            let before = nullable.len();

            for (lhs, bodies) in self.rules() {
                if nullable.contains(lhs) {
                    continue;
                }

                let derives_empty = bodies.iter().any(|body| {
                    !body.is_empty() && body.iter().all(|symbol| is_epsilon_marker(symbol) || is_nullable(symbol, &nullable))
                });

                if derives_empty {
                    nullable.insert(lhs.clone());
                }
            }

            if nullable.len() == before {
                break;
            }
        }

        nullable
    }

    /// Remove all ε-productions.
    ///
    /// Every body is replaced by all of its variants with nullable occurrences
    /// kept or dropped. `ε` markers inside longer bodies are removed, so the
    /// result never contains `ε` as an ordinary symbol. If `keep_start_epsilon` is set, `start` is nullable and
    /// `start` appears on no right-hand side of the result, `start → ε` is kept.
    /// Fails if a single body has more than `limit` nullable occurrences.
    pub fn eliminate_epsilon(&self, start: &Variable, keep_start_epsilon: bool, limit: usize) -> Result<Grammar, ConversionError> {
        let nullable = self.nullable();
        tracing::debug!("Nullable variables: {:?}", nullable.iter().map(Variable::id).collect::<Vec<_>>());

        let mut result = Grammar::new();

        for (lhs, bodies) in self.rules() {
            result.declare(lhs.clone());

            for body in bodies {
                if is_epsilon_body(body) {
                    continue;
                }

                for variant in expand_nullable(lhs, body, &nullable, limit)? {
                    result.push_unique(lhs, variant);
                }
            }
        }

        if keep_start_epsilon && nullable.contains(start) && !result.occurs_in_body(start) {
            result.push_unique(start, vec![Symbol::Terminal(Terminal::epsilon())]);
        }

        Ok(result)
    }
}
