//! Event replay driver.
//!
//! Reads a JSON-lines event script from stdin, feeds it through a provider
//! running on a manual clock, and prints the layout after every event:
//!
//! ```text
//! sidepanes [--viewport <px>] [settings.toml] < events.jsonl
//! ```
//!
//! `{"type":"advance","ms":500}` moves the clock forward and fires due timers.
//! Blank lines and lines starting with `#` are skipped.

use sidepanes::app::{handle_event, Event};
use sidepanes::timing::ManualClock;
use sidepanes::{Config, Result, SidepanesError, SidepanesProvider};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_VIEWPORT_WIDTH: u32 = 1440;

/// One output line.
#[derive(Serialize)]
struct ReplayLine<'a> {
    line: usize,
    at_ms: u64,
    event: &'a Event,
    changed: bool,
    layout: sidepanes::LayoutSnapshot,
}

struct Args {
    settings: Option<PathBuf>,
    viewport_width: u32,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args {
        settings: None,
        viewport_width: DEFAULT_VIEWPORT_WIDTH,
    };

    while let Some(arg) = args.next() {
        if arg == "--viewport" {
            let value = args
                .next()
                .ok_or_else(|| SidepanesError::Config("--viewport needs a width".into()))?;
            parsed.viewport_width = value
                .parse()
                .map_err(|e| SidepanesError::Config(format!("invalid viewport width {value:?}: {e}")))?;
        } else if parsed.settings.is_none() {
            parsed.settings = Some(PathBuf::from(arg));
        } else {
            return Err(SidepanesError::Config(format!("unexpected argument {arg:?}")));
        }
    }
    Ok(parsed)
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = match args.settings.as_deref() {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if config.trace_level.is_some() {
        sidepanes::observability::init_tracing(&config);
    }

    let clock = ManualClock::new();
    let provider = SidepanesProvider::with_clock(config, args.viewport_width, clock.clone());
    let panes = provider.handle();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event: Event = serde_json::from_str(trimmed)
            .map_err(|e| SidepanesError::Config(format!("line {}: {e}", index + 1)))?;
        if let Event::Advance { ms } = event {
            clock.advance(ms);
        }

        let changed = handle_event(&panes, &event)?;
        let output = ReplayLine {
            line: index + 1,
            at_ms: sidepanes::timing::Clock::now(&clock),
            event: &event,
            changed,
            layout: panes.snapshot()?,
        };
        let json = serde_json::to_string(&output)
            .map_err(|e| SidepanesError::Config(format!("failed to serialize output: {e}")))?;
        writeln!(out, "{json}")?;
    }

    out.flush()?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("sidepanes: {e}");
        std::process::exit(1);
    }
}
