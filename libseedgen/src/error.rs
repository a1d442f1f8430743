use std::num::ParseIntError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("invalid {arg} {value:?}: {source}")]
  Parse {
    arg: &'static str,
    value: String,
    source: ParseIntError,
  },

  #[error("grid size must be greater than zero")]
  EmptyGrid,

  #[error("cannot write {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    source: std::io::Error,
  },
}
