use indexmap::IndexMap;

use crate::grammar::{fresh::FreshNames, Grammar, Symbol, Terminal, Variable};

impl Grammar {
    /// Replace every terminal inside a two-symbol body by a dedicated `T<k>`
    /// variable with the single production `T<k> → terminal`.
    ///
    /// Each distinct terminal gets exactly one variable, no matter how often
    /// or where it occurs. Bodies of any other length are left alone.
    pub fn isolate_terminals(&self) -> Grammar {
        let mut fresh = FreshNames::new('T', self);
        let mut isolated: IndexMap<Terminal, Variable> = IndexMap::new();
        let mut result = Grammar::new();

        for (lhs, bodies) in self.rules() {
            let mut new_bodies = Vec::with_capacity(bodies.len());

            for body in bodies {
                if body.len() != 2 {
                    new_bodies.push(body.clone());
                    continue;
                }

                let mut new_body = Vec::with_capacity(2);

                for symbol in body {
                    match symbol {
                        Symbol::Terminal(term) => {
                            let var = isolated.entry(term.clone()).or_insert_with(|| fresh.next());
                            new_body.push(Symbol::Variable(var.clone()));
                        },
                        Symbol::Variable(_) => new_body.push(symbol.clone()),
                    }
                }

                new_bodies.push(new_body);
            }

            result.define(lhs.clone(), new_bodies);
        }

        tracing::debug!("Isolated {} terminals", isolated.len());

        for (term, var) in isolated {
            result.define(var, vec![vec![Symbol::Terminal(term)]]);
        }

        result
    }
}
