// Dataset summary statistics
// 数据集摘要统计

use std::fmt;

use humansize::{BINARY, format_size};
use serde::Serialize;

/// Integer sequence summary / 整数序列摘要
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SeqStats {
  /// Value count / 值个数
  pub len: usize,
  /// Raw size in bytes / 原始大小（字节）
  pub bytes: u64,
  pub min: u32,
  pub max: u32,
  /// Non-decreasing / 非递减
  pub sorted: bool,
  /// Strictly increasing, implies distinct values / 严格递增，即值互不相同
  pub strict: bool,
}

impl SeqStats {
  pub fn new(seq: &[u32]) -> Self {
    Self {
      len: seq.len(),
      bytes: (seq.len() * size_of::<u32>()) as u64,
      min: seq.iter().copied().min().unwrap_or(0),
      max: seq.iter().copied().max().unwrap_or(0),
      sorted: seq.windows(2).all(|w| w[0] <= w[1]),
      strict: seq.windows(2).all(|w| w[0] < w[1]),
    }
  }
}

impl fmt::Display for SeqStats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} values, {}, range [{}, {}]",
      self.len,
      format_size(self.bytes, BINARY),
      self.min,
      self.max
    )?;
    if self.strict {
      write!(f, ", strictly sorted")
    } else if self.sorted {
      write!(f, ", sorted")
    } else {
      Ok(())
    }
  }
}
