use crate::error::Error;
use crate::error::Result;
use std::str::FromStr;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cfg {
  /// Number of seed points to draw.
  pub count: usize,
  /// Side length of the square domain. Both axes range over `[0, grid_size)`.
  pub grid_size: u32,
  /// Fixed RNG seed. `None` seeds from OS entropy, so runs are not reproducible.
  pub rng_seed: Option<u64>,
}

impl Default for Cfg {
  fn default() -> Self {
    Self {
      count: 0,
      // Grid size the downstream Voronoi tooling assumes when none is given.
      grid_size: 5120,
      rng_seed: None,
    }
  }
}

impl Cfg {
  pub fn new(count: usize, grid_size: u32) -> Result<Self> {
    if grid_size == 0 {
      return Err(Error::EmptyGrid);
    }
    Ok(Self {
      count,
      grid_size,
      ..Default::default()
    })
  }

  pub fn with_rng_seed(mut self, seed: u64) -> Self {
    self.rng_seed = Some(seed);
    self
  }
}

fn parse_int<T: FromStr<Err = std::num::ParseIntError>>(arg: &'static str, text: &str) -> Result<T> {
  text.trim().parse().map_err(|source| Error::Parse {
    arg,
    value: text.to_string(),
    source,
  })
}

pub fn parse_count(text: &str) -> Result<usize> {
  parse_int("seed count", text)
}

pub fn parse_grid_size(text: &str) -> Result<u32> {
  parse_int("grid size", text)
}
