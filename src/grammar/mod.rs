//! Grammars and their conversion into Chomsky Normal Form.
//!
//! Use it like so:
//! ```
//! let conversion = Converter::new()
//!     // The start symbol is "S" unless configured otherwise
//!     .start_symbol("S")
//!     .convert("S -> aXb\nX -> a | ε")?;
//!
//! // Every stage left a rendered copy of the grammar behind
//! for snapshot in conversion.snapshots() {
//!     println!("{}:\n{}", snapshot.label(), snapshot.text());
//! }
//! ```
//! You can inspect the resulting grammar like this:
//! ```
//! for (lhs, bodies) in conversion.grammar().rules() {
//!     for body in bodies {
//!         // A body is a sequence of terminals and variables.
//!         // This is captured in the enum "Symbol".
//!         for symbol in body {
//!             match symbol {
//!                 Symbol::Terminal(terminal) => println!("{}: terminal {}", lhs, terminal.content()),
//!                 Symbol::Variable(variable) => println!("{}: variable {}", lhs, variable.id()),
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! The individual stages are available as methods on [`Grammar`] and each
//! returns a new grammar:
//! 1. [`Grammar::eliminate_epsilon`]
//! 2. [`Grammar::eliminate_unit_productions`]
//! 3. [`Grammar::eliminate_long_rules`]
//! 4. [`Grammar::isolate_terminals`]

mod binarize;
mod builder;
mod cfg;
mod epsilon;
mod fresh;
mod snapshot;
mod terminals;
mod unit;

pub use builder::*;
pub use cfg::*;
pub use snapshot::*;
