use crate::{
    error::Warning,
    grammar::{Body, Grammar, Symbol, Terminal, Variable, EPSILON},
};

const SEPARATOR: &str = "->";
const ALTERNATIVE: char = '|';

/// A grammar together with the problems found while loading it.
#[derive(Debug, Default)]
pub(crate) struct Parsed {
    pub(crate) grammar: Grammar,
    pub(crate) warnings: Vec<Warning>,
}

/// Decompose a single alternative character by character.
/// `ε` stands for the empty string: it is dropped from longer bodies and
/// a body made only of `ε` becomes the canonical `[ε]`.
/// The flag is set if any `ε` had to be dropped.
fn parse_alternative(alt: &str) -> (Body, bool) {
    let mut body = Vec::with_capacity(alt.len());
    let mut epsilons = 0;

    for c in alt.trim().chars() {
        if c == EPSILON {
            epsilons += 1;
        } else {
            body.push(Symbol::classify(c));
        }
    }

    let dropped = epsilons > 0 && (!body.is_empty() || epsilons > 1);

    if body.is_empty() && epsilons > 0 {
        body.push(Symbol::Terminal(Terminal::epsilon()));
    }

    (body, dropped)
}

/// Define `lhs` with the given alternative strings, replacing an earlier definition.
pub(crate) fn define_rule<'a, I>(parsed: &mut Parsed, lhs: &str, alternatives: I)
where
    I: IntoIterator<Item = &'a str>,
{
    let lhs = Variable::new(lhs);
    let mut bodies = Vec::new();

    for (index, alt) in alternatives.into_iter().enumerate() {
        let (body, dropped) = parse_alternative(alt);

        if dropped {
            parsed.warnings.push(Warning::EpsilonDropped {
                variable: lhs.id().to_string(),
                index,
            });
        }

        if body.is_empty() {
            parsed.warnings.push(Warning::EmptyAlternative {
                variable: lhs.id().to_string(),
                index,
            });
        }

        bodies.push(body);
    }

    if parsed.grammar.contains(&lhs) {
        tracing::debug!("Redefinition of {} replaces its earlier alternatives", lhs);
    }

    parsed.grammar.define(lhs, bodies);
}

/// Parse lines of the form `LHS -> RHS1 | RHS2 | ...`.
///
/// Lines without `->` are skipped. Uppercase ASCII letters are variables,
/// every other character is a terminal. Whitespace is only trimmed around
/// the left-hand side and around each alternative.
pub(crate) fn parse(source: &str) -> Parsed {
    let mut parsed = Parsed::default();

    for (i, line) in source.lines().enumerate() {
        let Some((lhs, rhs)) = line.split_once(SEPARATOR) else {
            if !line.trim().is_empty() {
                tracing::trace!("Skipping line {}: no '{}'", i + 1, SEPARATOR);
            }
            continue;
        };

        let lhs = lhs.trim();

        if lhs.is_empty() {
            parsed.warnings.push(Warning::MissingLeftHandSide {
                line: i + 1,
            });
            continue;
        }

        define_rule(&mut parsed, lhs, rhs.split(ALTERNATIVE));
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A -> a\nA -> b", "A → b")]
    #[case("this line is ignored\nS -> a", "S → a")]
    #[case("S -> aXb\nX -> a | ε", "S → a X b\nX → a | ε")]
    #[case("S -> a->b", "S → a - > b")]
    #[case("S -> a\r\nA -> b\r\n", "S → a\nA → b")]
    #[case("S -> (S) | 1+2", "S → ( S ) | 1 + 2")]
    #[case("", "")]
    fn test_parse(#[case] source: &str, #[case] expected: &str) {
        let parsed = parse(source);
        assert_eq!(parsed.grammar.to_string(), expected);
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_lhs_keeps_position() {
        let parsed = parse("A -> a\nB -> b\nA -> c");
        assert_eq!(parsed.grammar.to_string(), "A → c\nB → b");
    }

    #[test]
    fn test_internal_whitespace_is_a_terminal() {
        let parsed = parse("S ->  a b  ");
        let bodies = parsed.grammar.alternatives(&Variable::new("S"));
        assert_eq!(bodies, &[vec![Symbol::terminal("a"), Symbol::terminal(" "), Symbol::terminal("b")]]);
    }

    #[test]
    fn test_empty_alternative() {
        let parsed = parse("S -> a || b");
        let bodies = parsed.grammar.alternatives(&Variable::new("S"));

        assert_eq!(bodies.len(), 3);
        assert!(bodies[1].is_empty());
        assert_eq!(parsed.warnings, vec![Warning::EmptyAlternative {
            variable: "S".to_string(),
            index: 1,
        }]);
    }

    #[test]
    fn test_epsilon_dropped() {
        let parsed = parse("X -> aε | ε | εε");
        assert_eq!(parsed.grammar.to_string(), "X → a | ε | ε");
        assert_eq!(parsed.warnings, vec![
            Warning::EpsilonDropped {
                variable: "X".to_string(),
                index: 0,
            },
            Warning::EpsilonDropped {
                variable: "X".to_string(),
                index: 2,
            },
        ]);
    }

    #[test]
    fn test_missing_lhs() {
        let parsed = parse("S -> a\n  -> b");
        assert_eq!(parsed.grammar.len(), 1);
        assert_eq!(parsed.warnings, vec![Warning::MissingLeftHandSide { line: 2 }]);
    }
}
