mod app;
mod cli;
mod dataset;
mod engine;
mod error;
mod logging;
mod paths;
mod table;

use std::io::{self, BufRead, Write};

use clap::Parser;
use facet_lib::ListFacetOptions;
use log::info;

use crate::app::{App, Command};
use crate::cli::Cli;
use crate::dataset::Dataset;
use crate::error::{CliError, Result};

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = cli.log_file.clone().or_else(paths::log_file) {
        logging::init(&path, cli.log_level)?;
    }

    let dataset = Dataset::load(&cli.data)?;
    if dataset.is_empty() {
        return Err(CliError::InvalidDataset("no rows".to_string()));
    }
    info!("loaded {} rows from {}", dataset.len(), cli.data.display());

    let known = dataset.columns();
    let columns = if cli.columns.is_empty() {
        known
    } else {
        if let Some(missing) = cli.columns.iter().find(|c| !known.contains(c)) {
            return Err(CliError::UnknownColumn(missing.clone()));
        }
        cli.columns
    };

    let options = ListFacetOptions {
        body_height: cli.body_height,
    };
    let mut app = App::new(dataset, columns, options);
    app.start();

    let mut out = io::stdout().lock();
    app.draw(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => match app.execute(command, &mut out) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e @ CliError::UnknownFacet(_)) => writeln!(out, "{e}")?,
                Err(e) => return Err(e),
            },
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    info!("session ended");
    Ok(())
}
