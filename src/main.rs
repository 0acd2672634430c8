//! stamps-rs - render stamp scenes to SVG
//!
//! Reads a JSON scene file (see `stamps::scene`), fills in anything it
//! leaves out from the user's settings, and writes an SVG document.
//!
//! ```text
//! stamps-rs render scene.json -o out.svg
//! stamps-rs settings [--save]
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use stamps::{SceneConfig, Settings};

#[derive(Parser)]
#[command(name = "stamps-rs")]
#[command(about = "Render rubber-stamp guides and connectors to SVG", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file to use instead of the one in the config directory
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a scene file to SVG
    Render {
        /// Scene description (JSON)
        scene: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print the effective settings as JSON
    Settings {
        /// Also write them to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting stamps-rs");

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    match run(cli.command, cli.settings.as_deref(), &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Command,
    settings_file: Option<&Path>,
    settings: &Settings,
) -> anyhow::Result<()> {
    match command {
        Command::Render { scene, output } => {
            let svg = SceneConfig::load(&scene)
                .with_context(|| format!("loading {}", scene.display()))?
                .build(settings)
                .with_context(|| format!("building {}", scene.display()))?
                .to_svg()
                .with_context(|| format!("rendering {}", scene.display()))?;
            match output {
                Some(path) => {
                    std::fs::write(&path, svg)
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("Wrote {}", path.display());
                }
                None => print!("{svg}"),
            }
        }
        Command::Settings { save } => {
            println!("{}", serde_json::to_string_pretty(settings)?);
            if save {
                match settings_file {
                    Some(path) => settings.save_to(path),
                    None => settings.save(),
                }
            }
        }
    }
    Ok(())
}
