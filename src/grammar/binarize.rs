use crate::grammar::{fresh::FreshNames, Body, Grammar, Symbol, Variable};

impl Grammar {
    /// Break every body with three or more symbols into a left-associative
    /// chain of binary productions.
    ///
    /// `A → X1 X2 ... Xn` becomes `N1 → X1 X2`, `N2 → N1 X3`, ..., and
    /// `A → N(n-2) Xn`. The `N<k>` numbering is shared by the whole grammar and
    /// follows its definition order. Introduced variables are appended after
    /// all existing ones.
    pub fn eliminate_long_rules(&self) -> Grammar {
        let mut fresh = FreshNames::new('N', self);
        let mut introduced: Vec<(Variable, Vec<Body>)> = Vec::new();
        let mut result = Grammar::new();

        for (lhs, bodies) in self.rules() {
            let mut new_bodies = Vec::with_capacity(bodies.len());

            for body in bodies {
                match body.as_slice() {
                    [first, middle @ .., last] if !middle.is_empty() => {
                        let mut prev = first.clone();

                        for symbol in middle {
                            let var = fresh.next();
                            introduced.push((var.clone(), vec![vec![prev, symbol.clone()]]));
                            prev = Symbol::Variable(var);
                        }

                        new_bodies.push(vec![prev, last.clone()]);
                    },
                    _ => new_bodies.push(body.clone()),
                }
            }

            result.define(lhs.clone(), new_bodies);
        }

        tracing::debug!("Introduced {} variables for long rules", introduced.len());

        for (var, bodies) in introduced {
            result.define(var, bodies);
        }

        result
    }
}
