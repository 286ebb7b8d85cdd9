use json_comments::{CommentSettings, StripComments};
use serde_json as json;

use crate::{
    error::ParsingError,
    parser::text::{define_rule, Parsed},
};

fn parse_grammar(value: json::Value) -> Result<Parsed, String> {
    let mut parsed = Parsed::default();

    let object = match value {
        json::Value::Object(object) => object,
        _ => return Err("Grammar must be specified as an object".to_string()),
    };

    for (key, value) in &object {
        let lhs = key.trim();

        if lhs.is_empty() {
            return Err("Left-hand-side must not be empty".to_string());
        }

        // RHS is an array of alternative strings
        let rhs = match value {
            json::Value::Array(rhs) => rhs,
            _ => return Err(format!("Right-hand-side of '{}' must be an array", key)),
        };

        let mut alternatives = Vec::with_capacity(rhs.len());

        for alt in rhs {
            match alt.as_str() {
                Some(alt) => alternatives.push(alt),
                None => return Err(format!("Right-hand-side of '{}' must be an array of strings", key)),
            }
        }

        define_rule(&mut parsed, lhs, alternatives);
    }

    Ok(parsed)
}

/// Parse a grammar given as a JSON object that maps every left-hand side to
/// an array of alternatives, e.g. `{"S": ["aXb"], "X": ["a", "ε"]}`.
/// Alternatives are decomposed exactly like in the text format.
/// C-style comments are allowed.
pub(crate) fn parse(source: &str) -> Result<Parsed, ParsingError> {
    let reader = StripComments::with_settings(CommentSettings::c_style(), source.as_bytes());

    let value: json::Value = match json::from_reader(reader) {
        Ok(value) => value,
        Err(e) => {
            return Err(ParsingError::new(Some(e.line()), format!("Invalid JSON syntax: {}", e)));
        },
    };

    parse_grammar(value).map_err(|e| ParsingError::new(None, e))
}
