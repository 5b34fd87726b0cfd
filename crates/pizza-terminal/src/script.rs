//! Headless command-script runner.
//!
//! Replays a command script (see `pizza_protocol::command_codec`)
//! through an [`OrderDesk`], writing one line per resulting event.
//! Lines that fail to decode or parse are logged and skipped; they
//! never stop the run. Read and write errors do.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use pizza_core::{Event, OrderDesk};
use pizza_protocol::{encode_orders, format_event, parse_input_line};
use tracing::{info, warn};

/// Counts from one script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands processed.
    pub commands: usize,

    /// Lines that could not be parsed.
    pub skipped: usize,
}

/// Process every line of `input` against `desk`, writing event lines to `out`.
pub fn run_script<R, W>(input: R, out: &mut W, desk: &mut OrderDesk) -> Result<ScriptSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ScriptSummary::default();

    for (index, raw) in input.split(b'\n').enumerate() {
        let mut raw = raw.with_context(|| format!("reading script line {}", index + 1))?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = index + 1, error = %e, "skipping script line that is not UTF-8");
                summary.skipped += 1;
                continue;
            }
        };

        let command = match parse_input_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(line = index + 1, error = %e, "skipping script line");
                summary.skipped += 1;
                continue;
            }
        };

        summary.commands += 1;
        for event in desk.process(command) {
            if let Event::CheckedOut { orders } = &event {
                let json = encode_orders(orders)?;
                info!(count = orders.len(), orders = %json, "placed orders");
            }
            writeln!(out, "{}", format_event(&event)).context("writing script output")?;
        }
    }

    Ok(summary)
}

/// Write the pending orders of `desk` as pretty JSON followed by a newline.
pub fn write_orders_json<W: Write>(desk: &OrderDesk, out: &mut W) -> Result<()> {
    let json = encode_orders(&desk.store().get_all())?;
    writeln!(out, "{}", json).context("writing order JSON")?;
    Ok(())
}
