//! Property-based tests for the conversion stages
//!
//! Random small grammars over the variables S, A, B, C and the terminals a, b
//! are checked against the normal form invariants and against brute-force
//! reference computations.

use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};

use cnf_normalizer::grammar::{is_epsilon_body, unit_target, Converter, Grammar, Symbol, Variable};

/// Generate a single alternative
fn alternative_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[SABCab]{1,3}",
        1 => Just("ε".to_string()),
    ]
}

/// Generate a grammar source with one line per variable
fn grammar_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::sample::select(vec!['S', 'A', 'B', 'C']), prop::collection::vec(alternative_strategy(), 1..4)),
        1..6,
    )
    .prop_map(|lines| {
        lines
            .into_iter()
            .map(|(lhs, alts)| format!("{} -> {}", lhs, alts.join(" | ")))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn parse(source: &str) -> Grammar {
    Converter::new().parse(source).unwrap().0
}

/// Search derivation trees of bounded height for one that yields the empty word.
fn derives_empty(grammar: &Grammar, var: &Variable, height: usize) -> bool {
    if height == 0 {
        return false;
    }

    grammar.alternatives(var).iter().any(|body| {
        is_epsilon_body(body)
            || (!body.is_empty()
                && body.iter().all(|symbol| match symbol {
                    Symbol::Variable(next) => derives_empty(grammar, next, height - 1),
                    Symbol::Terminal(_) => false,
                }))
    })
}

/// Every variable reachable from `var` through one or more unit productions.
fn unit_reachable(grammar: &Grammar, var: &Variable) -> HashSet<Variable> {
    let mut seen = HashSet::new();
    let mut queue: VecDeque<Variable> = VecDeque::new();
    queue.push_back(var.clone());

    while let Some(current) = queue.pop_front() {
        for target in grammar.alternatives(&current).iter().filter_map(|body| unit_target(body)) {
            if seen.insert(target.clone()) {
                queue.push_back(target.clone());
            }
        }
    }

    seen
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn test_final_grammar_is_in_cnf(source in grammar_strategy(), keep in any::<bool>()) {
            let conversion = Converter::new().keep_start_epsilon(keep).convert(&source).unwrap();
            let start = conversion.start().clone();

            for (lhs, bodies) in conversion.grammar().rules() {
                for body in bodies {
                    match body.as_slice() {
                        [Symbol::Variable(_), Symbol::Variable(_)] => {},
                        [Symbol::Terminal(term)] => {
                            prop_assert!(!term.is_epsilon() || (keep && lhs == &start), "{} → ε in\n{}", lhs, conversion.grammar());
                        },
                        _ => prop_assert!(false, "{} has a body of invalid shape in\n{}", lhs, conversion.grammar()),
                    }
                }
            }

            prop_assert!(conversion.grammar().is_in_cnf(&start));
        }

        #[test]
        fn test_nullable_matches_derivations(source in grammar_strategy()) {
            let grammar = parse(&source);
            let nullable = grammar.nullable();
            let height = grammar.len() + 1;

            for var in grammar.variables() {
                prop_assert_eq!(nullable.contains(var), derives_empty(&grammar, var, height), "variable {} in\n{}", var, source);
            }
        }

        #[test]
        fn test_unit_closure_is_complete(source in grammar_strategy()) {
            let start = Variable::new("S");
            let grammar = parse(&source).eliminate_epsilon(&start, false, 16).unwrap();
            let result = grammar.eliminate_unit_productions();

            for var in grammar.variables() {
                for target in unit_reachable(&grammar, var) {
                    for body in grammar.alternatives(&target) {
                        if unit_target(body).is_none() {
                            prop_assert!(result.alternatives(var).contains(body), "{} misses {:?} of {}", var, body, target);
                        }
                    }
                }
            }

            for (_, bodies) in result.rules() {
                prop_assert!(bodies.iter().all(|body| unit_target(body).is_none()));
            }
        }

        #[test]
        fn test_terminal_isolation_is_idempotent(source in grammar_strategy()) {
            let conversion = Converter::new().convert(&source).unwrap();
            let again = conversion.grammar().isolate_terminals();
            prop_assert_eq!(&again, conversion.grammar());
        }

        #[test]
        fn test_long_rules_are_binary(source in grammar_strategy()) {
            let grammar = parse(&source).eliminate_long_rules();

            for (_, bodies) in grammar.rules() {
                prop_assert!(bodies.iter().all(|body| body.len() <= 2));
            }
        }
    }
}
