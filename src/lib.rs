//! This library converts context-free grammars into Chomsky Normal Form.
//!
//! It consists of
//! - __frontend__: Load grammars from `LHS -> RHS1 | RHS2` lines or from a JSON object.
//! - __conversion__: Remove ε-productions, remove unit productions, break up long
//!   rules and isolate terminals. Every stage leaves a [`Snapshot`](grammar::Snapshot) behind.
//! - __backend__: Write the result somewhere.
//!   Current backends are
//!   - `json`: Dump the converted grammar and its snapshots as JSON
//!
//! ## Getting Started
//! Use a [`Converter`](grammar::Converter) like this:
//! ```
//! let conversion = Converter::new()
//!     // Keep S → ε if the language contains the empty word
//!     .keep_start_epsilon(true)
//!     .convert("S -> aXb\nX -> a | ε").unwrap();
//!
//! println!("{}", conversion.grammar());
//! ```
//! Then, you can plug the result into one of the provided backends:
//! ```
//! backends::json::JsonGenerator::new().generate("output-file.json", &conversion).unwrap();
//! ```
//! And that's it.

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod backends;
pub mod error;
pub mod grammar;

pub use grammar::{convert, Conversion, ConversionOptions, Converter};
