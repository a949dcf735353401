//! `jsval` CLI — load JSON into a variant, walk an index path, print it.
//!
//! ## Usage
//!
//! ```sh
//! # Render the value at a dotted path (stdin → stdout)
//! echo '{"users":[{"name":"Ada"}]}' | jsval get users.0.name
//!
//! # Show which shape a value holds
//! jsval tag -i data.json users
//!
//! # Print the selected value back as pretty JSON
//! jsval json -i data.json users.0 -o user.json
//! ```
//!
//! On a sequence, a segment made only of ASCII digits is a position; on a
//! mapping every segment is used verbatim as a text key, so `a.007` looks up
//! the key `"007"`. An empty path selects the whole document.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsval_core::{console_log, Console, Key, Variant};
use std::fs::File;
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(
    name = "jsval",
    version,
    about = "Load JSON into dynamic values and index into them"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the value at PATH as text
    Get {
        /// Dotted index path, e.g. `items.0.name`
        #[arg(default_value = "")]
        path: String,
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the shape held at PATH
    Tag {
        /// Dotted index path, e.g. `items.0.name`
        #[arg(default_value = "")]
        path: String,
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the value at PATH as pretty JSON
    Json {
        /// Dotted index path, e.g. `items.0.name`
        #[arg(default_value = "")]
        path: String,
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            path,
            input,
            output,
        } => {
            let root = load(input.as_deref())?;
            let value = walk(&root, &path)?;
            let mut console = Console::new(open_output(output.as_deref())?);
            console_log!(console, value).context("Failed to write rendered value")?;
            console.flush()?;
        }
        Commands::Tag { path, input } => {
            let root = load(input.as_deref())?;
            let value = walk(&root, &path)?;
            let mut console = Console::stdout();
            console_log!(console, value.tag())?;
        }
        Commands::Json {
            path,
            input,
            output,
        } => {
            let root = load(input.as_deref())?;
            let value = walk(&root, &path)?;
            let json = value
                .to_json_pretty()
                .context("Failed to serialize value as JSON")?;
            let mut console = Console::new(open_output(output.as_deref())?);
            console_log!(console, json)?;
            console.flush()?;
        }
    }

    Ok(())
}

/// Split a dotted path into its segments. An empty path has none.
fn parse_path(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').collect()
}

/// Turn a segment into a key for `current`. Segments stay text keys unless
/// `current` is a sequence and the segment is made only of digits.
fn segment_key(current: &Variant, segment: &str) -> Result<Key> {
    let Some(seq) = current.as_sequence() else {
        return Ok(Key::from(segment));
    };
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Key::from(segment));
    }
    let position = segment
        .parse::<usize>()
        .ok()
        .filter(|&p| p < seq.len())
        .with_context(|| {
            format!(
                "Index {} out of range for sequence of length {}",
                segment,
                seq.len()
            )
        })?;
    Ok(Key::from(position))
}

/// Follow `path` from `root`. Sequence positions are bounds-checked here so
/// a bad path is reported instead of trapping.
fn walk<'a>(root: &'a Variant, path: &str) -> Result<&'a Variant> {
    let mut current = root;
    for segment in parse_path(path) {
        let key = segment_key(current, segment)?;
        current = current
            .at(key)
            .with_context(|| format!("Cannot index with '{}'", segment))?;
    }
    tracing::debug!(path, tag = %current.tag(), "resolved path");
    Ok(current)
}

fn load(path: Option<&str>) -> Result<Variant> {
    let json = read_input(path)?;
    Variant::from_json(&json).context("Failed to parse JSON input")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to write file: {}", path))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
