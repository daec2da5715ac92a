use std::fs::File;
use std::io::{Read, stdin};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use datautils::{LinkOptions, PrettifyOptions};

#[derive(Parser, Debug)]
#[command(
    name = "datautils",
    about = "Normalize and curate JSON API payloads",
    version
)]
struct Args {
    /// Pretty-print JSON output
    #[arg(long, global = true, default_value_t = false)]
    pretty: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Curate a link list: drop ignored relations, fill in titles, sort by title
    Links {
        /// Keep the input order instead of sorting by title
        #[arg(long)]
        no_sort: bool,

        /// Relation type to drop (repeatable, replaces the default `self`)
        #[arg(long = "ignore-rel", value_name = "REL")]
        ignore_rel: Vec<String>,

        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Turn an identifier (or an array of identifiers) into a readable phrase
    Prettify {
        /// Separator between prettified array elements
        #[arg(long, default_value = "; ")]
        separator: String,

        /// Tokens shorter than this are left untouched
        #[arg(long, default_value_t = 3)]
        min_len: usize,

        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Remove duplicate array elements, keeping first occurrences
    Unique {
        /// Compare arrays and objects structurally
        #[arg(long)]
        deep: bool,

        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Print the element or key count of the input
    Size {
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Keep only the given keys of an object
    Pick {
        /// Key to select (repeatable)
        #[arg(short, long = "key", value_name = "KEY", required = true)]
        keys: Vec<String>,

        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Remove the given keys from an object
    Omit {
        /// Key to remove (repeatable)
        #[arg(short, long = "key", value_name = "KEY", required = true)]
        keys: Vec<String>,

        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Fill `{name}` placeholders in a message from a JSON object
    Placeholders {
        /// Message template
        #[arg(short, long)]
        message: String,

        /// Input file with the placeholder object (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Join a base URL and an optional path
    NormalizeUrl { base: String, path: Option<String> },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "datautils=debug" } else { "datautils=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json(input: Option<&Path>) -> Result<Value> {
    let mut buf = String::new();
    match input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }
    debug!(bytes = buf.len(), "read input");
    serde_json::from_str(&buf).context("input is not valid JSON")
}

fn read_object(input: Option<&Path>) -> Result<serde_json::Map<String, Value>> {
    match read_json(input)? {
        Value::Object(m) => Ok(m),
        other => bail!(
            "expected a JSON object, found {}",
            datautils::coerce::type_name(&other)
        ),
    }
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", serde_json::to_string(value)?);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Links {
            no_sort,
            ignore_rel,
            input,
        } => {
            let mut opts = LinkOptions {
                sort: !no_sort,
                ..LinkOptions::default()
            };
            if !ignore_rel.is_empty() {
                opts.ignore_rel = ignore_rel;
            }
            let value = read_json(input.as_deref())?;
            let links = datautils::friendly_links_value(&value, &opts)?;
            emit(&links, args.pretty)?;
        }
        Command::Prettify {
            separator,
            min_len,
            input,
        } => {
            let opts = PrettifyOptions { min_len, separator };
            let value = read_json(input.as_deref())?;
            emit(&datautils::prettify_value(&value, &opts), args.pretty)?;
        }
        Command::Unique { deep, input } => {
            let value = read_json(input.as_deref())?;
            emit(&datautils::unique_value(&value, deep)?, args.pretty)?;
        }
        Command::Size { input } => {
            let value = read_json(input.as_deref())?;
            println!("{}", datautils::size(&value));
        }
        Command::Pick { keys, input } => {
            let obj = read_object(input.as_deref())?;
            emit(&datautils::pick(&obj, &keys), args.pretty)?;
        }
        Command::Omit { keys, input } => {
            let obj = read_object(input.as_deref())?;
            emit(&datautils::omit(&obj, &keys), args.pretty)?;
        }
        Command::Placeholders { message, input } => {
            let vars = read_object(input.as_deref())?;
            println!("{}", datautils::replace_placeholders(&message, &vars));
        }
        Command::NormalizeUrl { base, path } => {
            println!("{}", datautils::normalize_url(&base, path.as_deref()));
        }
    }

    Ok(())
}
