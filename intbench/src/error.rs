use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("equality check failed at {at}: expected {expected}, got {actual}")]
  Integrity { at: usize, expected: u32, actual: u32 },

  #[error("{region} region decoded {actual} values, expected {expected}")]
  Region {
    region: &'static str,
    expected: usize,
    actual: usize,
  },

  #[error("block size must be positive")]
  ZeroBlock,

  #[error("Codec error: {0}")]
  Codec(#[from] intbench_codec::Error),

  #[error("Data error: {0}")]
  Data(#[from] intbench_data::Error),

  #[error("Histogram error: {0}")]
  Histogram(#[from] hdrhistogram::CreationError),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] sonic_rs::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
