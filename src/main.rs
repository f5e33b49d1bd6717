use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use conway::Grid;
use conway::seed;

use cli::Cli;
use events::Event;

mod cli;
mod events;
mod io;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout is reserved for the grid
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();

    let grid = load(&cli, || io::read_seed(cli.seed.as_deref()))?;

    info!(
        width = grid.width(),
        height = grid.height(),
        population = grid.population(),
        "Starting simulation"
    );

    let mut stdout = std::io::stdout().lock();

    match cli.auto {
        Some(millis) => run(grid, cli.generations, false, &mut stdout, || {
            thread::sleep(Duration::from_millis(millis));
            Ok(Event::Advance)
        }),
        None => run(grid, cli.generations, true, &mut stdout, || {
            io::wait_for_event().context("Failed to read from the terminal")
        }),
    }
}

/// Build the seeded grid. The dimensions are checked before `read_seed` is called, so a bad
/// size is reported without waiting on the seed.
fn load<F>(cli: &Cli, read_seed: F) -> anyhow::Result<Grid>
where
    F: FnOnce() -> anyhow::Result<String>,
{
    let mut grid = Grid::new(cli.width, cli.height, cli.boundary.into())
        .context("Failed to create grid")?;

    let input = read_seed()?;
    let coords = seed::parse_seed(&input).context("Failed to parse seed")?;
    grid.seed(coords).context("Failed to seed grid")?;

    Ok(grid)
}

/// Show generations `0..limit` (or without end), asking `next_event` what to do between two of
/// them. The prompt is shown on every generation but the last one.
fn run<W, F>(
    grid: Grid,
    limit: Option<u64>,
    prompt: bool,
    out: &mut W,
    mut next_event: F,
) -> anyhow::Result<()>
where
    W: Write,
    F: FnMut() -> anyhow::Result<Event>,
{
    let limit = limit.unwrap_or(u64::MAX);
    let mut generations = grid.generations();

    while generations.generation() < limit {
        let n = generations.generation();
        let Some(grid) = generations.next() else {
            break;
        };

        let last = n + 1 == limit;
        io::print_generation(out, n, &grid, prompt && !last)
            .context("Failed to print generation")?;

        if last {
            break;
        }

        if next_event()? == Event::Exit {
            info!(generation = n, "Exiting");
            break;
        }
    }

    Ok(())
}
