use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use image::{ColorType, ImageFormat};
use log::debug;
use crate::canvas::{Canvas, DEPTH};
use crate::error::ExportError;

/// Expands every canvas pixel into a `block_size`-sided square.
///
/// Returns `(width, height, rgba)` in real pixels.
pub fn scale(canvas: &Canvas) -> (usize, usize, Vec<u8>) {
  let bs = canvas.block_size().max(1);
  let w = canvas.width() * bs;
  let h = canvas.height() * bs;
  if bs == 1 || w == 0 || h == 0 {
    return (w, h, canvas.pixels().to_vec());
  }

  let mut buffer = Vec::with_capacity(w * h * DEPTH);
  for row in canvas.pixels().chunks(canvas.width() * DEPTH) {
    let mut line = Vec::with_capacity(w * DEPTH);
    for px in row.chunks(DEPTH) {
      for _ in 0..bs {
        line.extend_from_slice(px);
      }
    }
    for _ in 0..bs {
      buffer.extend_from_slice(&line);
    }
  }
  (w, h, buffer)
}

pub fn write_png(path: impl AsRef<Path>, canvas: &Canvas) -> Result<(), ExportError> {
  let (w, h, buffer) = scale(canvas);
  image::save_buffer_with_format(
    path,
    &buffer,
    w as u32,
    h as u32,
    ColorType::Rgba8,
    ImageFormat::Png,
  )?;
  Ok(())
}

/// Plain-text (`P3`) PPM. Alpha is dropped.
pub fn write_ppm(mut w: impl Write, canvas: &Canvas) -> Result<(), ExportError> {
  let (width, height, buffer) = scale(canvas);
  write!(w, "P3\n{} {}\n255\n", width, height)?;
  for px in buffer.chunks(DEPTH) {
    writeln!(w, "{} {} {}", px[0], px[1], px[2])?;
  }
  w.flush()?;
  Ok(())
}

/// Frame names: three letters drawn cyclically from `a..z` (`abc`, `def`,
/// ...), followed from the 27th frame on by a bijective base-26 count of
/// completed cycles (`abca`, `defa`, ..., `abcz`, `abcaa`). Distinct indices
/// always get distinct names.
#[derive(Debug, Default, Clone)]
pub struct FrameNamer {
  next: usize,
}

impl FrameNamer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn name(index: usize) -> String {
    const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    let n = LETTERS.len();
    let word = index % n;
    let mut name: String = (0..3)
      .map(|k| LETTERS[(word * 3 + k) % n] as char)
      .collect();

    let mut cycle = index / n;
    let mut suffix = Vec::new();
    while cycle > 0 {
      cycle -= 1;
      suffix.push(LETTERS[cycle % n]);
      cycle /= n;
    }
    name.extend(suffix.iter().rev().map(|&b| b as char));
    name
  }

  pub fn next_name(&mut self) -> String {
    let name = Self::name(self.next);
    self.next += 1;
    name
  }
}

/// Receives every rendered generation.
pub trait FrameSink {
  fn emit(&mut self, generation: usize, canvas: &Canvas) -> Result<(), ExportError>;
}

/// Writes `<dir>/<name>.png` and `<dir>/<name>.ppm` per frame.
pub struct ImageDirSink {
  dir: PathBuf,
  namer: FrameNamer,
}

impl ImageDirSink {
  /// Creates `dir` if it doesn't exist yet.
  pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ExportError> {
    let dir = dir.into();
    fs::create_dir_all(&dir)?;
    Ok(Self {
      dir,
      namer: FrameNamer::new(),
    })
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }
}

impl FrameSink for ImageDirSink {
  fn emit(&mut self, generation: usize, canvas: &Canvas) -> Result<(), ExportError> {
    let base = self.dir.join(self.namer.next_name());
    let png = base.with_extension("png");
    let ppm = base.with_extension("ppm");
    debug!("generation {} -> {}", generation, base.display());

    write_png(&png, canvas)?;
    write_ppm(BufWriter::new(File::create(&ppm)?), canvas)?;
    Ok(())
  }
}
