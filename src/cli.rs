use std::io;
use std::io::IsTerminal;

use anyhow::{Context, Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorWhen {
    Always,
    Never,
    Auto,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub pattern: String,
    pub only_matching: bool,
    pub show_captures: bool,
    pub show_tree: bool,
    pub color: ColorWhen,
    pub paths: Vec<String>,
}

pub const USAGE: &str =
    "usage: anchored-regex [-o] [-c] [--tree] [--color=always|never|auto] -E <pattern> [paths...]";

/// Parses the arguments after the program name. Flags must come before `-E`;
/// everything after the pattern is an input path.
pub fn parse_args<I>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = String>,
{
    let mut only_matching = false;
    let mut show_captures = false;
    let mut show_tree = false;
    let mut color = ColorWhen::Never;

    let mut args = args.into_iter();
    let pattern = loop {
        let Some(arg) = args.next() else {
            bail!("missing -E <pattern>\n{USAGE}");
        };
        match arg.as_str() {
            "-o" => only_matching = true,
            "-c" => show_captures = true,
            "--tree" => show_tree = true,
            "--color=always" => color = ColorWhen::Always,
            "--color=never" => color = ColorWhen::Never,
            "--color=auto" => color = ColorWhen::Auto,
            "-E" => break args.next().context("-E needs a pattern")?,
            other => bail!("unknown argument `{other}`\n{USAGE}"),
        }
    };

    Ok(Config {
        pattern,
        only_matching,
        show_captures,
        show_tree,
        color,
        paths: args.collect(),
    })
}

pub fn resolve_use_color(color: &ColorWhen) -> bool {
    match color {
        ColorWhen::Always => true,
        ColorWhen::Never => false,
        ColorWhen::Auto => io::stdout().is_terminal(),
    }
}
