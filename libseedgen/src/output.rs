use crate::error::Error;
use crate::error::Result;
use crate::point::Point;
use std::fs::create_dir_all;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

pub const HEADER: &str = "plate_id,x,y";

/// Create the parent directory of `path` (recursively) if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
  match path.parent() {
    // A bare file name has an empty parent, which means the working directory.
    Some(dir) if !dir.as_os_str().is_empty() => create_dir_all(dir).map_err(|source| Error::Io {
      path: dir.to_path_buf(),
      source,
    }),
    _ => Ok(()),
  }
}

/// CSV writer for a seed list. The header is written on construction, and
/// each row gets the next `plate_id` starting from 0.
pub struct SeedWriter<W: Write> {
  inner: W,
  path: PathBuf,
  next_id: usize,
}

impl<W: Write> SeedWriter<W> {
  /// `path` is only used to label errors.
  pub fn new(mut inner: W, path: impl Into<PathBuf>) -> Result<Self> {
    let path = path.into();
    writeln!(inner, "{HEADER}").map_err(|source| Error::Io {
      path: path.clone(),
      source,
    })?;
    Ok(Self {
      inner,
      path,
      next_id: 0,
    })
  }

  pub fn write(&mut self, point: Point) -> Result<()> {
    let id = self.next_id;
    writeln!(self.inner, "{id},{},{}", point.x, point.y).map_err(|source| self.io_err(source))?;
    self.next_id += 1;
    Ok(())
  }

  /// Number of data rows written so far.
  pub fn written(&self) -> usize {
    self.next_id
  }

  pub fn finish(mut self) -> Result<W> {
    self.inner.flush().map_err(|source| self.io_err(source))?;
    Ok(self.inner)
  }

  fn io_err(&self, source: std::io::Error) -> Error {
    Error::Io {
      path: self.path.clone(),
      source,
    }
  }
}

/// Ensure the parent directory exists, then create (or truncate) `path` and write the header.
pub fn create_output(path: &Path) -> Result<SeedWriter<BufWriter<File>>> {
  ensure_parent_dir(path)?;
  let file = File::create(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  SeedWriter::new(BufWriter::new(file), path)
}

pub fn write_seeds(path: &Path, seeds: &[Point]) -> Result<()> {
  write_seeds_with(path, seeds, |_| {})
}

/// Like `write_seeds`, calling `on_row` with the number of rows written after each row.
pub fn write_seeds_with(path: &Path, seeds: &[Point], mut on_row: impl FnMut(usize)) -> Result<()> {
  let mut out = create_output(path)?;
  for &p in seeds {
    out.write(p)?;
    on_row(out.written());
  }
  out.finish()?;
  Ok(())
}
