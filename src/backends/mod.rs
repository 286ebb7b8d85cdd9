//! Backends take a finished [`Conversion`](crate::grammar::Conversion) and do something with it.

pub mod json;
