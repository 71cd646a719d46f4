// Error types for intbench_data
// intbench_data 错误类型

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to open '{}': {source}", path.display())]
  Open {
    path: PathBuf,
    source: std::io::Error,
  },

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("'{}' size {len} is not a multiple of 4", path.display())]
  Misaligned { path: PathBuf, len: u64 },

  #[error("truncated record: want {want} values, got {got}")]
  Truncated { want: u32, got: u32 },

  #[error("{stray} stray trailing bytes")]
  Stray { stray: usize },

  #[error("invalid integer '{token}' at token {pos}")]
  Parse { pos: usize, token: String },
}

pub type Result<T> = std::result::Result<T, Error>;
