use lemin_rust::colony::Colony;
use lemin_rust::config::{Cli, Config};
use lemin_rust::output::write_moves;
use lemin_rust::solver::{DisjointPathSolver, Solver};

use anyhow::{ensure, Context};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use tracing::info;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = Config::load(&cli).and_then(|config| run(&config)) {
        println!("ERROR: {err:#}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(io::stderr)
        .init();

    let content = std::fs::read_to_string(&config.colony_path)
        .with_context(|| format!("cannot read colony file: {}", config.colony_path))?;
    let colony = Colony::parse(&content).context("invalid data format")?;
    info!(
        "colony: {} ants, {} rooms, {} corridors",
        colony.ants,
        colony.terrain.room_count(),
        colony.terrain.corridor_count()
    );

    let mut solver = DisjointPathSolver::new(&colony.terrain, colony.ants);
    let solution = solver.solve().map_err(|err| {
        let context = if err.is_configuration() {
            "invalid data format"
        } else {
            "path error"
        };
        anyhow::Error::new(err).context(context)
    })?;
    ensure!(
        solution.verify(&colony.terrain),
        "solver produced an invalid solution"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    if config.show_content {
        write!(out, "{content}\n\n# result\n")?;
    }
    write_moves(&mut out, &colony.terrain, &solution)?;
    out.flush()?;

    solver.stats().print();
    if let Some(path) = &config.stats_path {
        solver.stats().write_json(path)?;
    }
    Ok(())
}
