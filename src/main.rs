use std::io;
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;
use anyhow::Context;
use clap::{ArgAction, Parser};
use glife::config::*;
use glife::{Config, Controller, FileSource, Palette, State};
use itertools::Itertools;
use log::Level;

fn colors_help() -> String {
  let names = Palette::standard().names()
    .chunks(7)
    .map(|line| line.join(" "))
    .join("\n  ");
  format!("Available colors are:\n  {}", names)
}

/// Simulates Conway's Game of Life on a toroidal grid.
#[derive(Debug, Parser)]
#[command(name = "glife", version, about, after_help = colors_help())]
struct Args {
  /// Grid description: `<rows> <cols>`, the alive marker, then the rows.
  #[arg(value_name = "INPUT_CFG_FILE")]
  input: PathBuf,
  /// Maximum number of generations to simulate.
  #[arg(long = "maxgen", value_name = "NUM", default_value_t = DEFAULT_MAX_GEN)]
  max_gen: usize,
  /// Generations presented per second. 0 runs as fast as possible.
  #[arg(long, value_name = "NUM", default_value_t = 0)]
  fps: u32,
  /// Images output directory. No images are written without it.
  #[arg(long = "imgdir", value_name = "PATH")]
  image_dir: Option<PathBuf>,
  /// Pixel size of a square cell in written images.
  #[arg(long = "blocksize", value_name = "NUM", default_value_t = DEFAULT_BLOCK_SIZE)]
  block_size: usize,
  /// Color name for the background.
  #[arg(long = "bkgcolor", value_name = "COLOR", default_value = DEFAULT_DEAD_COLOR)]
  dead_color: String,
  /// Color name for the alive cells.
  #[arg(long = "alivecolor", value_name = "COLOR", default_value = DEFAULT_ALIVE_COLOR)]
  alive_color: String,
  /// Only remember this many past generations when looking for repeats.
  #[arg(long, value_name = "NUM")]
  history_cap: Option<usize>,
  /// More logging on stderr (-v info, -vv debug).
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,
}

impl Args {
  fn config(&self) -> Config {
    Config {
      max_gen: self.max_gen,
      alive_color: self.alive_color.to_lowercase(),
      dead_color: self.dead_color.to_lowercase(),
      image_dir: self.image_dir.clone(),
      block_size: self.block_size,
      fps: self.fps,
      history_cap: self.history_cap,
    }
  }

  fn log_level(&self) -> Level {
    match self.verbose {
      0 => Level::Warn,
      1 => Level::Info,
      _ => Level::Debug,
    }
  }
}

fn main() {
  let args = Args::parse();
  if let Err(err) = run(args) {
    eprintln!("error: {:#}", err);
    process::exit(1);
  }
}

fn run(args: Args) -> anyhow::Result<()> {
  simple_logger::init_with_level(args.log_level())?;

  let config = args.config();
  let delay = match config.fps {
    0 => None,
    fps => Some(Duration::from_secs_f64(1.0 / fps as f64)),
  };

  let stdout = io::stdout();
  let mut controller = Controller::new(config, FileSource(args.input.clone()), stdout.lock())
    .context("invalid options")?;

  while !controller.is_finished() {
    controller.update()
      .with_context(|| format!("simulating {}", args.input.display()))?;
    if let (State::Running, Some(delay)) = (controller.state(), delay) {
      thread::sleep(delay);
    }
  }

  Ok(())
}
