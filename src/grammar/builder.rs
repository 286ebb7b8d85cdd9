use serde::{Deserialize, Serialize};

use crate::{
    error::{ConversionError, Warning},
    grammar::{Grammar, Snapshot, Stage, Variable},
    parser::{json, text},
};

/// The default start symbol of a grammar
pub const DEFAULT_START_SYMBOL: &str = "S";

/// The default limit of nullable occurrences in a single body
pub const DEFAULT_MAX_NULLABLE: usize = 16;

/// The syntax of a grammar source.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GrammarFormat {
    /// One `LHS -> RHS1 | RHS2 | ...` rule per line
    #[default]
    Text,
    /// A JSON object mapping each left-hand side to an array of alternatives
    Json,
}

/// Everything that can be configured about a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Keep `start → ε` if the start symbol is nullable and appears on no right-hand side
    pub keep_start_epsilon: bool,

    /// Name of the start symbol
    pub start_symbol: String,

    /// Maximum number of nullable occurrences in a single body before the
    /// conversion gives up with [`ConversionError::GrammarTooComplex`]
    pub max_nullable_per_body: usize,

    /// Syntax of the grammar source
    pub format: GrammarFormat,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            keep_start_epsilon: false,
            start_symbol: DEFAULT_START_SYMBOL.to_string(),
            max_nullable_per_body: DEFAULT_MAX_NULLABLE,
            format: GrammarFormat::default(),
        }
    }
}

/// The outcome of a conversion: the grammar in Chomsky Normal Form and one
/// snapshot per stage, in pipeline order.
#[derive(Debug, Clone)]
pub struct Conversion {
    start: Variable,
    grammar: Grammar,
    snapshots: Vec<Snapshot>,
    warnings: Vec<Warning>,
}

impl Conversion {
    /// The start symbol the conversion was done for.
    pub fn start(&self) -> &Variable {
        &self.start
    }

    /// The final grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Rendered grammars after each stage, beginning with the parsed grammar.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Recoverable problems found along the way.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Split into the final grammar and the snapshots.
    pub fn into_parts(self) -> (Grammar, Vec<Snapshot>) {
        (self.grammar, self.snapshots)
    }
}

/// The Converter parses a grammar source and runs it through all stages of
/// the conversion into Chomsky Normal Form.
///
/// Use it like so:
/// ```
/// let conversion = Converter::new()
///     .start_symbol("S")
///     .keep_start_epsilon(true)
///     .convert("S -> aXb\nX -> a | ε")?;
///
/// for snapshot in conversion.snapshots() {
///     println!("{}", snapshot);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConversionOptions,
}

impl Converter {
    /// Create a Converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options at once.
    pub fn options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the start symbol.
    pub fn start_symbol<S: Into<String>>(mut self, start_symbol: S) -> Self {
        self.options.start_symbol = start_symbol.into();
        self
    }

    /// Keep `start → ε` where possible.
    pub fn keep_start_epsilon(mut self, keep_start_epsilon: bool) -> Self {
        self.options.keep_start_epsilon = keep_start_epsilon;
        self
    }

    /// Limit the number of nullable occurrences in a single body.
    pub fn max_nullable_per_body(mut self, limit: usize) -> Self {
        self.options.max_nullable_per_body = limit;
        self
    }

    /// Set the syntax of the sources passed to [`Converter::convert`].
    pub fn format(mut self, format: GrammarFormat) -> Self {
        self.options.format = format;
        self
    }

    /// Parse `source` without converting it.
    pub fn parse(&self, source: &str) -> Result<(Grammar, Vec<Warning>), ConversionError> {
        let parsed = match self.options.format {
            GrammarFormat::Text => text::parse(source),
            GrammarFormat::Json => json::parse(source)?,
        };

        Ok((parsed.grammar, parsed.warnings))
    }

    /// Parse `source` and convert it.
    pub fn convert(&self, source: &str) -> Result<Conversion, ConversionError> {
        let (grammar, warnings) = self.parse(source)?;
        self.run(grammar, warnings)
    }

    /// Convert an already constructed grammar.
    pub fn convert_grammar(&self, grammar: Grammar) -> Result<Conversion, ConversionError> {
        self.run(grammar, Vec::new())
    }

    fn run(&self, grammar: Grammar, mut warnings: Vec<Warning>) -> Result<Conversion, ConversionError> {
        let start = Variable::new(&self.options.start_symbol);

        if !grammar.contains(&start) {
            warnings.push(Warning::UnknownStartSymbol {
                symbol: start.id().to_string(),
            });
        }

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        let mut snapshots = Vec::with_capacity(Stage::ALL.len());
        let mut record = |stage: Stage, grammar: &Grammar| {
            tracing::debug!("{}: {} variables, {} productions", stage, grammar.len(), grammar.production_count());
            snapshots.push(Snapshot::capture(stage, grammar));
        };

        record(Stage::Parsed, &grammar);

        let grammar = grammar.eliminate_epsilon(&start, self.options.keep_start_epsilon, self.options.max_nullable_per_body)?;
        record(Stage::EpsilonElimination, &grammar);

        let grammar = grammar.eliminate_unit_productions();
        record(Stage::UnitElimination, &grammar);

        let grammar = grammar.eliminate_long_rules();
        record(Stage::LongRuleElimination, &grammar);

        let grammar = grammar.isolate_terminals();
        record(Stage::TerminalIsolation, &grammar);

        Ok(Conversion {
            start,
            grammar,
            snapshots,
            warnings,
        })
    }
}

/// Convert `source` into Chomsky Normal Form with the given options.
pub fn convert(source: &str, options: &ConversionOptions) -> Result<Conversion, ConversionError> {
    Converter::new().options(options.clone()).convert(source)
}
