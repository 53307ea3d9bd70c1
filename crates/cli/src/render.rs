//! Pretty rendering of parse results using ariadne.
//!
//! Parameters go to stdout as a compact table. The token view annotates the
//! source line with one label per token and goes to stderr, so stdout stays
//! usable in pipes.

use std::io::{self, IsTerminal};

use ariadne::{Color, Config, Fmt, Label, Report, ReportKind, Source};
use cmdline_core::{CommandLine, ParamKind, Parameter, Token, TokenKind};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Human-readable, coloured output.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Use the explicit choice, else pretty on a TTY and JSON in pipes.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Kind labels ─────────────────────────────────────────────────────────

fn kind_label(kind: ParamKind) -> &'static str {
    match kind {
        ParamKind::General => "general",
        ParamKind::ShortCommand => "short",
        ParamKind::LongCommand => "long",
        ParamKind::Both => "both",
    }
}

fn kind_color(kind: ParamKind) -> Color {
    match kind {
        ParamKind::General => Color::White,
        ParamKind::ShortCommand => Color::Green,
        ParamKind::LongCommand => Color::Cyan,
        ParamKind::Both => Color::Magenta,
    }
}

fn display_name(p: &Parameter) -> String {
    match p.kind {
        ParamKind::ShortCommand => format!("-{}", p.text),
        ParamKind::LongCommand | ParamKind::Both => format!("--{}", p.text),
        ParamKind::General => format!("{:?}", p.text),
    }
}

// ── Parameters ──────────────────────────────────────────────────────────

/// Print one parameter per line, with its index, kind, and arguments.
pub(crate) fn print_parameters(cl: &CommandLine) {
    if cl.image_path().is_empty() {
        println!("image path: (none)");
    } else {
        println!("image path: {}", cl.image_path());
    }
    println!(
        "parameters: {} ({} command{})",
        cl.count(),
        cl.command_count(),
        if cl.command_count() == 1 { "" } else { "s" }
    );
    for (i, p) in cl.parameters().iter().enumerate() {
        print_parameter_line(Some(i), p);
    }
}

/// Print a single (possibly aggregated) parameter.
pub(crate) fn print_parameter_line(index: Option<usize>, p: &Parameter) {
    let prefix = index.map(|i| format!("{i:>4}  ")).unwrap_or_default();
    let kind = format!("{:<7}", kind_label(p.kind)).fg(kind_color(p.kind));
    if p.arguments.is_empty() {
        println!("{prefix}{kind} {}", display_name(p));
    } else {
        println!("{prefix}{kind} {} {:?}", display_name(p), p.arguments);
    }
}

// ── Tokens ──────────────────────────────────────────────────────────────

fn token_color(kind: TokenKind) -> Color {
    kind_color(kind.into())
}

/// Render the token stream as labels over the source text, to stderr.
pub(crate) fn render_tokens_pretty(source: &str, name: &str, tokens: &[Token<'_>]) {
    if tokens.is_empty() {
        eprintln!("no tokens");
        return;
    }

    let config = Config::default().with_compact(false);
    let mut cache = (name, Source::from(source));

    // Ariadne spans count characters; cover the whole raw span, introducer
    // included, rather than the token's letter position.
    let span_of = |tok: &Token<'_>| {
        let start = source[..tok.start].chars().count();
        start..start + tok.raw.chars().count()
    };
    let whole = span_of(&tokens[0]).start..span_of(&tokens[tokens.len() - 1]).end;

    let mut builder = Report::build(ReportKind::Custom("tokens", Color::Cyan), (name, whole))
        .with_message(format!("{} token(s)", tokens.len()))
        .with_config(config);

    for tok in tokens {
        builder = builder.with_label(
            Label::new((name, span_of(tok)))
                .with_message(format!("{} {:?}", kind_label(tok.kind.into()), tok.text))
                .with_color(token_color(tok.kind)),
        );
    }

    builder.finish().eprint(&mut cache).ok();
}
