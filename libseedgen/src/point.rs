/// A lattice point in `[0, W) x [0, W)`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
  pub x: u32,
  pub y: u32,
}

impl Point {
  pub fn new(x: u32, y: u32) -> Self {
    Self { x, y }
  }

  pub fn within(&self, grid_size: u32) -> bool {
    self.x < grid_size && self.y < grid_size
  }
}
