use ahash::AHashSet;

use crate::grammar::{Grammar, Variable};

/// Hands out fresh variable names of the form `<prefix><k>`.
///
/// The counter starts at 1 and only ever grows. Names that are already
/// defined in the grammar the generator was created for are skipped.
pub(crate) struct FreshNames {
    prefix: char,
    counter: usize,
    taken: AHashSet<String>,
}

impl FreshNames {
    pub(crate) fn new(prefix: char, grammar: &Grammar) -> Self {
        let taken = grammar
            .rules()
            .flat_map(|(lhs, bodies)| {
                std::iter::once(lhs).chain(bodies.iter().flatten().filter_map(|symbol| symbol.as_variable()))
            })
            .map(|var| var.id().to_string())
            .collect();

        Self {
            prefix,
            counter: 1,
            taken,
        }
    }

    pub(crate) fn next(&mut self) -> Variable {
        loop {
            let name = format!("{}{}", self.prefix, self.counter);
            self.counter += 1;

            if self.taken.insert(name.clone()) {
                tracing::trace!("Introducing fresh variable {}", name);
                return Variable::new(name);
            }
        }
    }
}
