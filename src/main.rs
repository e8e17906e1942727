use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use inkstamp::script::parse_script;
use inkstamp::{Config, DrawingEngine, StampCache};
use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "inkstamp")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INKSTAMP_GIT_HASH"), ")"),
    about = "Replay pointer-event scripts through the inkstamp stroke engine"
)]
struct Cli {
    /// Pointer-event script to replay (down/move/up/mode/brush/grid/clear/redraw/resize)
    #[arg(
        long,
        short = 's',
        value_name = "FILE",
        required_unless_present_any = ["init_config", "save_config"]
    )]
    script: Option<PathBuf>,

    /// Where to write the resulting raster
    #[arg(long, short = 'o', value_name = "PNG", default_value = "inkstamp.png")]
    output: PathBuf,

    /// Config file to use instead of ~/.config/inkstamp/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start with the grid overlay visible
    #[arg(long, action = ArgAction::SetTrue)]
    grid: bool,

    /// Load a stamp image, as NAME=PATH (repeatable)
    #[arg(long = "stamp", value_name = "NAME=PNG")]
    stamps: Vec<String>,

    /// Write the example config to ~/.config/inkstamp/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Save the effective config (after --grid) to the default path and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "init_config")]
    save_config: bool,
}

fn parse_stamp_arg(arg: &str) -> Result<(&str, PathBuf)> {
    let (name, path) = arg
        .split_once('=')
        .filter(|(name, path)| !name.is_empty() && !path.is_empty())
        .with_context(|| format!("Invalid --stamp '{}', expected NAME=PATH", arg))?;
    Ok((name, PathBuf::from(path)))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file {} does not exist", path.display());
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    if cli.grid {
        config.grid.enabled = true;
    }

    if cli.save_config {
        let path = config.save()?;
        println!("Saved {}", path.display());
        return Ok(());
    }

    let stamps = Rc::new(RefCell::new(StampCache::new()));
    for arg in &cli.stamps {
        let (name, path) = parse_stamp_arg(arg)?;
        stamps
            .borrow_mut()
            .load_png(name, &path)
            .with_context(|| format!("Failed to load stamp '{}'", name))?;
    }

    let Some(script_path) = cli.script.as_ref() else {
        anyhow::bail!("--script is required");
    };
    let source = fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let commands = parse_script(&source)
        .with_context(|| format!("Failed to parse script {}", script_path.display()))?;

    let mut engine = DrawingEngine::from_config(&config, Rc::clone(&stamps))
        .context("Failed to create drawing surface")?;
    log::info!(
        "Replaying {} commands onto a {}x{} surface",
        commands.len(),
        engine.surface().width(),
        engine.surface().height()
    );

    for command in &commands {
        command
            .apply(&mut engine)
            .with_context(|| format!("Failed to apply {:?}", command))?;
    }
    if engine.is_drawing() {
        log::warn!("Script ended mid-stroke; closing it");
        engine.stop_drawing();
    }

    let file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    let mut writer = BufWriter::new(file);
    engine
        .surface()
        .write_png(&mut writer)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!(
        "Rendered {} strokes to {}",
        engine.history().len(),
        cli.output.display()
    );
    Ok(())
}
