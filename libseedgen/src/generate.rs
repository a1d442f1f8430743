use crate::point::Point;
use rand::distributions::Distribution;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Create the generator owned by a single run.
pub fn new_rng(rng_seed: Option<u64>) -> StdRng {
  match rng_seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  }
}

/// Draw `count` points with x and y each uniform over `[0, grid_size)`.
/// Points are independent of each other, so duplicates are possible.
///
/// # Panics
///
/// Panics if `grid_size` is 0 and `count` is not. `Cfg::new` rejects a zero grid,
/// so values taken from a `Cfg` are always safe.
pub fn generate_seeds<R: Rng + ?Sized>(rng: &mut R, count: usize, grid_size: u32) -> Vec<Point> {
  if count == 0 {
    return Vec::new();
  }
  // Uniform::new panics on an empty range; Cfg rejects a zero grid before we get here.
  assert!(grid_size > 0, "cannot sample from an empty grid");
  let dist_x = Uniform::new(0, grid_size);
  let dist_y = Uniform::new(0, grid_size);
  let mut seeds = Vec::with_capacity(count);
  for _ in 0..count {
    // Draw x before y, per point.
    let x = dist_x.sample(rng);
    let y = dist_y.sample(rng);
    seeds.push(Point::new(x, y));
  }
  seeds
}
