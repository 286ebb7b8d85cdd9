use anyhow::{Context, Result};
use clap::Parser;
use std::io::{stdin, stdout, BufWriter, Read, Write};
use tracing_subscriber::EnvFilter;

use cnf_normalizer::{
    backends::json::JsonGenerator,
    grammar::{Converter, GrammarFormat, DEFAULT_MAX_NULLABLE, DEFAULT_START_SYMBOL},
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a context-free grammar into Chomsky Normal Form", long_about = None)]
struct Args {
    /// Grammar file. Reads from stdin if omitted.
    grammar: Option<String>,

    #[arg(long, default_value_t = GrammarFormat::Text, value_enum)]
    format: GrammarFormat,

    /// Start symbol of the grammar
    #[arg(short, long, default_value_t = String::from(DEFAULT_START_SYMBOL))]
    start: String,

    /// Keep start → ε if the start symbol is nullable and appears on no right-hand side
    #[arg(long, default_value_t = false)]
    keep_start_epsilon: bool,

    /// Give up if a single body contains more nullable variables than this
    #[arg(long, default_value_t = DEFAULT_MAX_NULLABLE)]
    max_nullable: usize,

    /// Print the grammar after every stage
    #[arg(long, default_value_t = false)]
    steps: bool,

    /// Print the symbols of a body without spaces
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Write the result as JSON into this file ("-" for stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Log what every stage does
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("Could not read grammar file {}", path)),
        None => {
            let mut source = String::new();
            stdin().read_to_string(&mut source).context("Could not read grammar from stdin")?;
            Ok(source)
        },
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = read_source(args.grammar.as_deref())?;

    let conversion = Converter::new()
        .format(args.format)
        .start_symbol(args.start)
        .keep_start_epsilon(args.keep_start_epsilon)
        .max_nullable_per_body(args.max_nullable)
        .convert(&source)?;

    if let Some(output) = args.output.as_deref() {
        let generator = JsonGenerator::new().snapshots(args.steps);

        if output == "-" {
            generator.write(stdout(), &conversion).context("Could not write JSON to stdout")?;
        } else {
            generator.generate(output, &conversion).with_context(|| format!("Could not write {}", output))?;
        }

        return Ok(());
    }

    let mut stream = BufWriter::new(stdout());

    if args.steps {
        for snapshot in conversion.snapshots() {
            writeln!(&mut stream, "{}\n", snapshot)?;
        }

        writeln!(&mut stream, "Chomsky Normal Form:")?;
    }

    if args.compact {
        writeln!(&mut stream, "{}", conversion.grammar().compact())?;
    } else {
        writeln!(&mut stream, "{}", conversion.grammar())?;
    }

    stream.flush()?;
    Ok(())
}
