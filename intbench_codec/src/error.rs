use thiserror::Error;

/// 编解码错误 Codec error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("output buffer too small: need {need} bytes, have {cap}")]
  Overflow { need: usize, cap: usize },

  #[error("input length {len} is not a multiple of block size {block}")]
  Unaligned { len: usize, block: usize },

  #[error("truncated input at byte {at}")]
  Truncated { at: usize },

  #[error("decoded values exceed output capacity {cap}")]
  TooMany { cap: usize },

  #[error("invalid bit width: {0}")]
  BitWidth(u8),

  #[error("{len} values do not fit a u32 count header")]
  TooLong { len: usize },

  #[error("fastpfor: {0}")]
  FastPFor(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
