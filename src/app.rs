use std::fs;
use std::io::{self, Read, Write};

use anchored_regex::Regex;
use anyhow::{Context, Result};

use crate::cli::{Config, resolve_use_color};
use crate::report::{capture_lines, highlight_prefix, maybe_colorize};

#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub only_matching: bool,
    pub show_captures: bool,
    pub use_color: bool,
}

/// Runs the configured search. Returns whether any line matched.
pub fn run(cfg: Config) -> Result<bool> {
    let regex =
        Regex::new(&cfg.pattern).with_context(|| format!("invalid pattern `{}`", cfg.pattern))?;
    let output = Output {
        only_matching: cfg.only_matching,
        show_captures: cfg.show_captures,
        use_color: resolve_use_color(&cfg.color),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cfg.show_tree {
        write!(out, "{regex}")?;
    }

    let mut global_matched = false;

    if cfg.paths.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        global_matched |= process_input(&buffer, &regex, None, output, &mut out)?;
        return Ok(global_matched);
    }

    let show_filename = cfg.paths.len() > 1;
    for path in &cfg.paths {
        let content = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
        let name = show_filename.then_some(path.as_str());
        global_matched |= process_input(&content, &regex, name, output, &mut out)?;
    }

    Ok(global_matched)
}

/// Matches `regex` at the start of every line of `content` and writes the
/// matching lines to `out`. Returns whether any line matched.
pub fn process_input<W: Write>(
    content: &str,
    regex: &Regex,
    filename: Option<&str>,
    output: Output,
    out: &mut W,
) -> io::Result<bool> {
    let prefix = filename.map(|f| format!("{f}:")).unwrap_or_default();
    let mut matched_any = false;

    for line in content.lines() {
        let Some(found) = regex.matches_at_start(line) else {
            continue;
        };
        matched_any = true;

        if output.only_matching {
            writeln!(out, "{prefix}{}", maybe_colorize(found.as_str(), output.use_color))?;
        } else {
            writeln!(out, "{prefix}{}", highlight_prefix(line, found.len(), output.use_color))?;
        }

        if output.show_captures {
            for capture in capture_lines(found.captures()) {
                writeln!(out, "{capture}")?;
            }
        }
    }

    Ok(matched_any)
}
