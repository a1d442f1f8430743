use cfg::Cfg;
use error::Result;
use generate::generate_seeds;
use generate::new_rng;
use output::write_seeds_with;
use point::Point;
use std::path::Path;

pub mod cfg;
pub mod error;
pub mod generate;
pub mod output;
pub mod point;

/// Generate `cfg.count` seeds with a run-local RNG and write them to `path` as CSV.
/// Returns the seeds in `plate_id` order.
pub fn generate_to_file(cfg: &Cfg, path: &Path) -> Result<Vec<Point>> {
  generate_to_file_with(cfg, path, |_| {})
}

/// Like `generate_to_file`, calling `on_row` with the number of rows written after each row.
pub fn generate_to_file_with(
  cfg: &Cfg,
  path: &Path,
  on_row: impl FnMut(usize),
) -> Result<Vec<Point>> {
  let mut rng = new_rng(cfg.rng_seed);
  let seeds = generate_seeds(&mut rng, cfg.count, cfg.grid_size);
  tracing::debug!(
    count = seeds.len(),
    grid_size = cfg.grid_size,
    "generated seeds"
  );
  write_seeds_with(path, &seeds, on_row)?;
  tracing::info!(count = seeds.len(), path = %path.display(), "wrote seeds");
  Ok(seeds)
}
