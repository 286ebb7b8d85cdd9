use serde::ser::Serialize;
use serde_json::{
    self as json,
    json,
    ser::PrettyFormatter,
    Serializer,
    Value,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::grammar::{Body, Conversion};

fn body_value(body: &Body) -> Value {
    Value::Array(body.iter().map(|symbol| Value::String(symbol.to_string())).collect())
}

/// This is the main struct of the [`json`](crate::backends::json) backend that turns a conversion into JSON.
pub struct JsonGenerator {
    snapshots: bool,
}

impl JsonGenerator {
    /// Create a new JsonGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            snapshots: true,
        }
    }

    /// Whether to include the snapshot of every stage. On by default.
    pub fn snapshots(mut self, snapshots: bool) -> Self {
        self.snapshots = snapshots;
        self
    }

    /// Build the JSON document for `conversion`.
    pub fn to_value(&self, conversion: &Conversion) -> json::Result<Value> {
        let mut rules = json::Map::new();

        for (lhs, bodies) in conversion.grammar().rules() {
            rules.insert(lhs.id().to_string(), Value::Array(bodies.iter().map(body_value).collect()));
        }

        let mut document = json!({
            "start": conversion.start().id(),
            "rules": rules,
        });

        if self.snapshots {
            let steps = conversion
                .snapshots()
                .iter()
                .map(|snapshot| {
                    json!({
                        "stage": snapshot.stage(),
                        "label": snapshot.label(),
                        "text": snapshot.text(),
                    })
                })
                .collect();
            document["steps"] = Value::Array(steps);
        }

        document["warnings"] = json::to_value(conversion.warnings())?;

        Ok(document)
    }

    /// Write the JSON document for `conversion` into `stream`.
    pub fn write<W: Write>(&self, stream: W, conversion: &Conversion) -> std::io::Result<()> {
        let document = self.to_value(conversion)?;

        let mut stream = BufWriter::new(stream);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut stream, formatter);
        document.serialize(&mut ser)?;
        writeln!(&mut stream)?;
        stream.flush()
    }

    /// Write the JSON document for `conversion` into the output file `path`.
    pub fn generate<P: AsRef<Path>>(self, path: P, conversion: &Conversion) -> std::io::Result<()> {
        let file = File::create(path)?;
        self.write(file, conversion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Converter;

    #[test]
    fn test_generator() {
        let conversion = Converter::new().convert("S -> aXb\nX -> a | ε").unwrap();
        let value = JsonGenerator::new().to_value(&conversion).unwrap();

        assert_eq!(value["start"], "S");
        assert_eq!(value["rules"]["S"], json!([["N1", "T1"], ["T2", "T1"]]));
        assert_eq!(value["rules"]["T2"], json!([["a"]]));
        assert_eq!(value["steps"].as_array().unwrap().len(), 5);
        assert_eq!(value["steps"][0]["stage"], "parsed");
        assert_eq!(value["steps"][1]["label"], "After ε-Elimination");
        assert_eq!(value["warnings"], json!([]));

        let keys: Vec<_> = value["rules"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["S", "X", "N1", "T1", "T2"]);
    }

    #[test]
    fn test_without_snapshots() {
        let conversion = Converter::new().start_symbol("E").convert("S -> a").unwrap();
        let value = JsonGenerator::new().snapshots(false).to_value(&conversion).unwrap();

        assert!(value.get("steps").is_none());
        assert_eq!(value["warnings"], json!([{"kind": "unknown_start_symbol", "symbol": "E"}]));
    }

    #[test]
    fn test_generate_file() {
        let path = std::env::temp_dir().join(format!("cnf-normalizer-{}.json", std::process::id()));
        let conversion = Converter::new().convert("S -> ab").unwrap();
        JsonGenerator::new().generate(&path, &conversion).unwrap();

        let written: Value = json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, JsonGenerator::new().to_value(&conversion).unwrap());
        std::fs::remove_file(&path).unwrap();
    }
}
