use std::io::Write;
use std::path::PathBuf;
use log::info;
use crate::config::Config;
use crate::error::Result;
use crate::export::{FrameSink, ImageDirSink};
use crate::history::History;
use crate::loader::{self, Pattern};
use crate::narrate::{self, Welcome};
use crate::palette::Palette;
use crate::raster::{self, Scheme};
use crate::universe::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
  Starting,
  Running,
  End,
}

/// Where the initial pattern comes from.
pub trait PatternSource {
  /// Shown in the welcome banner.
  fn describe(&self) -> String;
  fn load(&self) -> Result<Pattern>;
}

pub struct FileSource(pub PathBuf);

impl PatternSource for FileSource {
  fn describe(&self) -> String {
    self.0.display().to_string()
  }

  fn load(&self) -> Result<Pattern> {
    loader::load_file(&self.0)
  }
}

impl PatternSource for Pattern {
  fn describe(&self) -> String {
    "<memory>".to_owned()
  }

  fn load(&self) -> Result<Pattern> {
    Ok(self.clone())
  }
}

/// Drives a simulation one state transition per [`update`](Self::update):
/// load and greet, then render and advance each generation, then say
/// goodbye.
pub struct Controller<'a, W> {
  config: Config,
  scheme: Scheme,
  source: Box<dyn PatternSource + 'a>,
  sink: Option<Box<dyn FrameSink + 'a>>,
  out: W,
  state: State,
  universe: Option<Universe>,
  finished: bool,
}

impl<'a, W: Write> Controller<'a, W> {
  /// Fails if `config` is invalid, before anything is loaded.
  pub fn new(config: Config, source: impl PatternSource + 'a, out: W) -> Result<Self> {
    let scheme = config.validate(&Palette::standard())?;
    Ok(Self {
      config,
      scheme,
      source: Box::new(source),
      sink: None,
      out,
      state: State::Starting,
      universe: None,
      finished: false,
    })
  }

  /// Rasterize every generation into `sink` instead of the configured image
  /// directory.
  pub fn with_sink(mut self, sink: impl FrameSink + 'a) -> Self {
    self.sink = Some(Box::new(sink));
    self
  }

  pub fn state(&self) -> State {
    self.state
  }

  /// True once the farewell has been written.
  pub fn is_finished(&self) -> bool {
    self.finished
  }

  pub fn universe(&self) -> Option<&Universe> {
    self.universe.as_ref()
  }

  pub fn cause(&self) -> Option<TerminationCause> {
    self.universe.as_ref().and_then(Universe::cause)
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn into_output(self) -> W {
    self.out
  }

  pub fn update(&mut self) -> Result<()> {
    match self.state {
      State::Starting => self.start(),
      State::Running => self.run(),
      State::End => self.end(),
    }
  }

  fn start(&mut self) -> Result<()> {
    let pattern = self.source.load()?;
    let grid = pattern.grid;
    info!("loaded {}x{} grid from {}", grid.rows(), grid.cols(), self.source.describe());

    if self.sink.is_none() {
      if let Some(dir) = &self.config.image_dir {
        self.sink = Some(Box::new(ImageDirSink::new(dir.clone())?));
      }
    }

    let history = match self.config.history_cap {
      Some(cap) => History::with_cap(cap),
      None => History::new(),
    };
    let universe = Universe::with_history(grid, self.config.max_gen, history);

    narrate::welcome(&mut self.out, &Welcome {
      input: &self.source.describe(),
      max_gen: self.config.max_gen,
      rows: universe.grid().rows(),
      cols: universe.grid().cols(),
      alive_marker: pattern.alive_marker,
      rule: universe.rule(),
    })?;

    self.universe = Some(universe);
    self.state = State::Running;
    Ok(())
  }

  fn run(&mut self) -> Result<()> {
    let universe = match self.universe.as_mut() {
      Some(universe) => universe,
      None => {
        self.state = State::Starting;
        return Ok(());
      }
    };

    if universe.cause().is_some() {
      self.state = State::End;
      return Ok(());
    }

    narrate::frame(&mut self.out, universe.generation(), universe.grid())?;

    if let Some(sink) = self.sink.as_mut() {
      let canvas = raster::draw(universe.grid(), self.scheme, self.config.block_size);
      sink.emit(universe.generation(), &canvas)?;
    }

    universe.step();
    Ok(())
  }

  fn end(&mut self) -> Result<()> {
    if !self.finished {
      let cause = self.cause();
      narrate::farewell(&mut self.out, cause)?;
      self.finished = true;
    }
    Ok(())
  }
}
