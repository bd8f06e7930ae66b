use std::thread;

use anyhow::Context;
use rand::{SeedableRng, rngs::StdRng};
use toruslife::Grid;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod console;
mod options;
mod stats;

use console::{ConsoleCommand, ConsoleRender};
use stats::Stats;

fn init_logging(console: bool) {
    // anything chattier than a warning would tear the console frame
    let default = if console { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn randomize(grid: &mut Grid, seed: Option<u64>) {
    match seed {
        Some(seed) => grid.randomize_with(&mut StdRng::seed_from_u64(seed)),
        None => grid.randomize(),
    }
}

fn main() -> anyhow::Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };
    init_logging(args.console());

    let size = args.size()?;
    let seed = args.seed()?;
    let generations = args.generations()?;
    let sleep = args.sleep()?;

    let mut grid = Grid::new(size);
    randomize(&mut grid, seed);
    info!(size, ?seed, alive = grid.alive_count(), "grid ready");

    let mut console = if args.console() {
        Some(ConsoleRender::new().context("failed to set up console")?)
    } else {
        None
    };
    // the console starts paused so the first generation can be inspected
    let mut running = console.is_none();

    let mut stats = Stats::new(&grid, args.stats_file().is_some());
    let mut stepped = 0;
    'generations: while stepped < generations {
        let mut step_once = false;

        // render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    ConsoleCommand::Exit => break 'generations,
                    ConsoleCommand::ToggleRunning => {
                        running = !running;
                        debug!(running, "toggled simulation");
                    }
                    ConsoleCommand::Step if !running => step_once = true,
                    ConsoleCommand::Randomize => {
                        randomize(&mut grid, None);
                        stats.reset(&grid);
                        debug!(alive = grid.alive_count(), "randomized grid");
                    }
                    _ => {}
                }
            }
            console.render(&grid)?;
        }

        // report metrics every 500ms
        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                println!("{}", report);
            }
        }

        // compute the next generation
        if running || step_once {
            let transitions = grid.step();
            stepped += 1;
            stats.record(&grid, transitions);
        }
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    std::mem::drop(console);
    info!(generations = stepped, alive = grid.alive_count(), "simulation finished");

    if let Some(file_name) = args.stats_file() {
        stats
            .save(&file_name)
            .with_context(|| format!("failed to write stats to {file_name}"))?;
        info!(file = %file_name, "wrote stats");
    }

    Ok(())
}
