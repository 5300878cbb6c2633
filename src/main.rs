use std::env;
use std::process;

mod app;
mod cli;
mod report;

// Usage: anchored-regex [-o] [-c] [--tree] [--color=WHEN] -E <pattern> [paths...]
fn main() {
    let code = match cli::parse_args(env::args().skip(1)).and_then(app::run) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            eprintln!("anchored-regex: {err:#}");
            2
        }
    };
    process::exit(code);
}
