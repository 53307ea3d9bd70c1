mod render;

use std::fs;
use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use cmdline_core::{
    CommandLine, Parameter, join_args, parse_str, process_command_line, tokenize,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::render::{Format, print_parameter_line, print_parameters, render_tokens_pretty};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "cmdline",
    version,
    about = "Inspect how raw command lines tokenize into commands, arguments, and text"
)]
struct Cli {
    /// Output mode: "pretty" for human-readable output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Parse a command line and print its parameters.
    Parse {
        /// Command line text. Read from stdin when omitted or "-".
        #[arg(allow_hyphen_values = true, conflicts_with = "file")]
        input: Option<String>,
        /// Read the command line from a file instead.
        #[arg(long)]
        file: Option<String>,
        /// Also show the token stream.
        #[arg(long)]
        tokens: bool,
    },

    /// Look up commands in a command line. Exits 1 when nothing matches.
    #[command(group(
        ArgGroup::new("lookup")
            .required(true)
            .multiple(true)
            .args(["short", "long", "find"])
    ))]
    Query {
        /// Command line text.
        #[arg(allow_hyphen_values = true)]
        input: String,
        /// Short command letter to aggregate (case-sensitive).
        #[arg(long)]
        short: Option<char>,
        /// Long command name to aggregate (case-insensitive).
        #[arg(long)]
        long: Option<String>,
        /// Find the first parameter of any kind with this text.
        #[arg(long, conflicts_with_all = ["short", "long"])]
        find: Option<String>,
        /// Compare `--find` text case-insensitively.
        #[arg(long, requires = "find")]
        ignore_case: bool,
    },

    /// Join arguments into one command line, re-quoting where needed.
    Quote {
        /// Arguments to join. Use `--` before arguments that start with `-`.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Parse this process's own command line.
    Env {
        /// Extra arguments. They reach the parse through the process's own
        /// argv, not through this field, which is only counted for logging.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Parse {
            input,
            file,
            tokens,
        } => cmd_parse(input.as_deref(), file.as_deref(), tokens, format)?,
        Cmd::Query {
            input,
            short,
            long,
            find,
            ignore_case,
        } => cmd_query(
            &input,
            short,
            long.as_deref(),
            find.as_deref(),
            ignore_case,
            format,
        )?,
        Cmd::Quote { args } => cmd_quote(&args, format)?,
        Cmd::Env { args } => cmd_env(&args, format)?,
    }

    Ok(())
}

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_parse(
    input: Option<&str>,
    file: Option<&str>,
    show_tokens: bool,
    format: Format,
) -> Result<()> {
    let (source, name) = read_input(input, file)?;
    let cl = parse_str(&source);
    print_command_line(&cl, &source, &name, show_tokens, format)
}

fn cmd_query(
    input: &str,
    short: Option<char>,
    long: Option<&str>,
    find: Option<&str>,
    ignore_case: bool,
    format: Format,
) -> Result<()> {
    let cl = parse_str(input);

    if let Some(text) = find {
        let index = cl.find_index(text, !ignore_case);
        match format {
            Format::Json => {
                let out = serde_json::json!({ "found": index.is_some(), "index": index });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            Format::Pretty => match index {
                Some(i) => println!("{i}"),
                None => eprintln!("not found: {text}"),
            },
        }
        exit_if_missing(index.is_some());
        return Ok(());
    }

    let data = match (short, long) {
        (Some(c), Some(name)) => cl.data_for_either(c, name),
        (Some(c), None) => cl.data_for_short(c),
        (None, Some(name)) => cl.data_for_long(name),
        (None, None) => None,
    };
    tracing::debug!(found = data.is_some(), "query");

    match format {
        Format::Json => {
            let out = QueryOutput {
                found: data.is_some(),
                parameter: data.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => match &data {
            Some(p) => print_parameter_line(None, p),
            None => eprintln!("not found"),
        },
    }

    exit_if_missing(data.is_some());
    Ok(())
}

fn cmd_quote(args: &[String], format: Format) -> Result<()> {
    let line = join_args(args);
    match format {
        Format::Json => {
            let out = serde_json::json!({ "command_line": line });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => println!("{line}"),
    }
    Ok(())
}

fn cmd_env(args: &[String], format: Format) -> Result<()> {
    tracing::debug!(extra_args = args.len(), "parsing process command line");
    let source = process_command_line();
    let cl = CommandLine::from_env();
    print_command_line(&cl, &source, "<process>", false, format)
}

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct QueryOutput<'a> {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter: Option<&'a Parameter>,
}

fn print_command_line(
    cl: &CommandLine,
    source: &str,
    name: &str,
    show_tokens: bool,
    format: Format,
) -> Result<()> {
    match format {
        Format::Json => {
            let mut out = serde_json::json!({ "command_line": cl });
            if show_tokens {
                out["tokens"] = serde_json::to_value(tokenize(source))?;
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            print_parameters(cl);
            if show_tokens {
                render_tokens_pretty(source, name, &tokenize(source));
            }
        }
    }
    Ok(())
}

/// Resolve the command line text and a display name for it.
fn read_input(input: Option<&str>, file: Option<&str>) -> Result<(String, String)> {
    if let Some(path) = file {
        let text = fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))?;
        return Ok((text, path.to_string()));
    }
    match input {
        Some(text) if text != "-" => Ok((text.to_string(), "<arg>".to_string())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read command line from stdin")?;
            Ok((text, "<stdin>".to_string()))
        }
    }
}

/// Exit with code 1 when a lookup found nothing.
fn exit_if_missing(found: bool) {
    if !found {
        process::exit(1);
    }
}
