use crate::new_pb;
use clap::Args;
use libseedgen::cfg::parse_count;
use libseedgen::cfg::parse_grid_size;
use libseedgen::cfg::Cfg;
use libseedgen::error::Result;
use libseedgen::generate_to_file_with;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GenerateArgs {
  /// Number of seed points to generate.
  #[arg(allow_hyphen_values = true)]
  seed_count: String,

  /// Side length of the square grid. x and y each range over [0, grid_size).
  #[arg(allow_hyphen_values = true)]
  grid_size: String,

  /// CSV file to write. Missing parent directories are created.
  #[arg(allow_hyphen_values = true)]
  output: PathBuf,

  /// Seed the RNG with this value to make the output reproducible.
  #[arg(long)]
  rng_seed: Option<u64>,
}

impl GenerateArgs {
  pub fn cfg(&self) -> Result<Cfg> {
    let count = parse_count(&self.seed_count)?;
    let grid_size = parse_grid_size(&self.grid_size)?;
    let mut cfg = Cfg::new(count, grid_size)?;
    cfg.rng_seed = self.rng_seed;
    Ok(cfg)
  }

  /// Returns the path written to.
  pub fn exec(self) -> Result<PathBuf> {
    let cfg = self.cfg()?;
    tracing::debug!(?cfg, "parsed arguments");

    let pb = new_pb(cfg.count);
    generate_to_file_with(&cfg, &self.output, |_| pb.inc(1))?;
    pb.finish_and_clear();
    Ok(self.output)
  }
}
