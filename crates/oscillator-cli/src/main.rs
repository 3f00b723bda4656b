//! `oscillator`: run a damped spring oscillator and print its HUD.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use oscillator_cli::{hud, logging, run, Cli, RunConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = RunConfig::resolve(&cli).context("invalid configuration")?;

    let mut trace = match &cli.trace {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create trace file {}", path.display()))?;
            Some(BufWriter::new(file))
        }
        None => None,
    };
    let outcome = run(&config, trace.as_mut().map(|w| w as &mut dyn Write))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &outcome.snapshot)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", hud::render(&outcome.snapshot, cli.graph_width))?;
    }
    Ok(())
}
