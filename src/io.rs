use std::fs;
use std::io;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use crossterm::event;
use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::debug;

use conway::Grid;

use crate::events::Event;

pub const PROMPT: &str = "Press return for next generation, q to stop.";

/// Converts a crossterm event into a driver event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => match key_event {
            // Windows reports releases as well
            KeyEvent {
                kind: KeyEventKind::Release,
                ..
            } => None,
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Exit),
            KeyEvent {
                code: KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n'),
                ..
            } => Some(Event::Advance),
            _ => None,
        },
        CrossTermEvent::Resize(cols, rows) => {
            debug!(cols, rows, "Terminal resized");

            None
        }
        _ => None,
    }
}

/// Keeps the terminal in raw mode for as long as it lives.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            debug!("Failed to leave raw mode: {e}");
        }
    }
}

/// Block until the user asks for something.
pub fn wait_for_event() -> io::Result<Event> {
    let _raw = RawMode::enable()?;

    loop {
        if let Some(event) = convert_event(event::read()?) {
            return Ok(event);
        }
    }
}

/// Print one generation, with a header and, if `prompt` is set, instructions for the user.
///
/// Raw mode is off while printing, so plain `\n` line breaks are enough.
pub fn print_generation<W: Write>(
    out: &mut W,
    generation: u64,
    grid: &Grid,
    prompt: bool,
) -> io::Result<()> {
    queue!(
        out,
        style::Print(format!("Generation {generation}:\n")),
        style::Print(grid)
    )?;

    if prompt {
        queue!(out, style::Print(format!("{PROMPT}\n")))?;
    }

    queue!(out, style::Print('\n'))?;
    out.flush()
}

/// Read the whole seed, from `path` or from standard input when `path` is absent or `-`.
pub fn read_seed(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to open seed file {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read seed from standard input")?;

            Ok(input)
        }
    }
}
