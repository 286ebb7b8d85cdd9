//! Dump a converted grammar as JSON.
//! 
//! Use it like so:
//! ```
//! // First, convert a grammar
//! let conversion = Converter::new()
//!     .convert("S -> aXb\nX -> a | ε").unwrap();
//! 
//! // Then, write the rules and every intermediate step into a file.
//! JsonGenerator::new().generate("cnf.json", &conversion).unwrap();
//! ```
//! The output looks like this:
//! ```json
//! {
//!     "start": "S",
//!     "rules": {
//!         "S": [["N1", "T1"], ["T2", "T1"]],
//!         ...
//!     },
//!     "steps": [{"stage": "parsed", "label": "Parsed Grammar", "text": "S → a X b\nX → a | ε"}, ...],
//!     "warnings": []
//! }
//! ```

mod generator;

pub use generator::JsonGenerator;
