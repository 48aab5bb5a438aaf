#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use std::{fmt::Write as _, fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use serde::Serialize;
use tilegrid_engine_edit::{BlockGrid, Cell, EditState, UndoState};

mod script;
mod settings;

use script::Script;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about = "Run tile map edit scripts", long_about = None)]
pub struct Args {
    /// Write a rotating log file into this directory
    #[arg(long, value_name = "DIR", global = true)]
    log_dir: Option<PathBuf>,

    /// Settings file (defaults to settings.toml in the configuration directory)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an edit script and print the resulting grid
    Run {
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Also write the resulting grid as TOML
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Print the undo history after the grid
        #[arg(long)]
        history: bool,
    },
    /// Check that a script parses without running it
    Check {
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
}

/// Serialized result of a run.
#[derive(Serialize)]
struct GridDump<'a> {
    width: i32,
    height: i32,
    cells: &'a [Cell],
}

fn start_logger(log_dir: Option<&PathBuf>) -> anyhow::Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str("info")?;
    let logger = if let Some(log_dir) = log_dir {
        fs::create_dir_all(log_dir).with_context(|| format!("can't create log directory {}", log_dir.display()))?;
        logger
            .log_to_file(FileSpec::default().directory(log_dir).basename("tilegrid").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
    } else {
        logger.log_to_stderr()
    };
    Ok(logger.start()?)
}

fn render_grid(grid: &BlockGrid) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if x > 0 {
                out.push(' ');
            }
            let tile = grid.tile_id(x, y).unwrap_or_default();
            let _ = write!(out, "{tile:03X}");
        }
        out.push('\n');
    }
    out
}

fn render_history(state: &EditState) -> String {
    let mut out = String::new();
    for command in state.history().commands() {
        let _ = writeln!(
            out,
            "{} {} ({:?}, {} cells)",
            command.action_id,
            command.description(),
            command.surface,
            command.changed_cells()
        );
    }
    if let Some(redo) = state.redo_description() {
        let _ = writeln!(out, "next redo: {redo}");
    }
    out
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = start_logger(args.log_dir.as_ref())?;
    log::info!("Starting tilegrid {}", env!("CARGO_PKG_VERSION"));

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };

    match args.command {
        Command::Run { script, output, history } => {
            let state = Script::load(&script)?.run(&settings)?;
            print!("{}", render_grid(state.grid()));
            if history {
                print!("{}", render_history(&state));
            }
            if let Some(output) = output {
                let dump = GridDump {
                    width: state.grid().width(),
                    height: state.grid().height(),
                    cells: state.grid().cells(),
                };
                let text = toml::to_string_pretty(&dump)?;
                fs::write(&output, text).with_context(|| format!("can't write {}", output.display()))?;
                log::info!("wrote grid to {}", output.display());
            }
        }
        Command::Check { script } => {
            let script = Script::load(&script)?;
            println!("{} steps, {}x{} grid", script.steps.len(), script.grid.width, script.grid.height);
        }
    }
    Ok(())
}
