use indexmap::IndexSet;

use crate::grammar::{unit_target, Body, Grammar, Variable};

impl Grammar {
    /// Compute all pairs `(A, B)` such that `A` reaches `B` through one or more
    /// unit productions.
    ///
    /// The direct pairs seed a worklist; popping `(A, B)` adds `(A, C)` for
    /// every unit production `B → C`. Every pair enters the set at most once,
    /// so cycles (including self-pairs) terminate.
    pub fn unit_pairs(&self) -> IndexSet<(Variable, Variable)> {
        let mut pairs: IndexSet<(Variable, Variable)> = self
            .rules()
            .flat_map(|(lhs, bodies)| {
                bodies
                    .iter()
                    .filter_map(|body| unit_target(body))
                    .map(move |target| (lhs.clone(), target.clone()))
            })
            .collect();

        let mut cursor = 0;

        while let Some((from, via)) = pairs.get_index(cursor).cloned() {
            for target in self.alternatives(&via).iter().filter_map(|body| unit_target(body)) {
                pairs.insert((from.clone(), target.clone()));
            }

            cursor += 1;
        }

        pairs
    }

    /// Remove all unit productions `A → B`.
    ///
    /// Every variable keeps its non-unit bodies and, for each pair `(A, B)`
    /// of [`Grammar::unit_pairs`], inherits the non-unit bodies of `B` it does
    /// not have yet. Variables left without any body stay in the grammar.
    pub fn eliminate_unit_productions(&self) -> Grammar {
        let pairs = self.unit_pairs();
        tracing::debug!("{} unit pairs after closure", pairs.len());

        let mut result: Grammar = self
            .rules()
            .map(|(lhs, bodies)| {
                let bodies: Vec<Body> = bodies.iter().filter(|body| unit_target(body).is_none()).cloned().collect();
                (lhs.clone(), bodies)
            })
            .collect();

        for (from, via) in &pairs {
            for body in self.alternatives(via) {
                if unit_target(body).is_none() {
                    result.push_unique(from, body.clone());
                }
            }
        }

        result
    }
}
