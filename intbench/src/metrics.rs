// Compression metrics recorder
// 压缩指标记录器

use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

/// Byte counters accumulated over one measurement pass
/// 一次测量过程中累积的字节计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressionStats {
  input_bytes: u64,
  encoded_bytes: u64,
}

impl CompressionStats {
  pub fn new() -> Self {
    Self::default()
  }

  /// Zero both counters / 清零两个计数器
  #[inline]
  pub fn reset(&mut self) {
    self.input_bytes = 0;
    self.encoded_bytes = 0;
  }

  /// One sequence per pass / 每次测量处理一个序列
  #[inline]
  pub fn set_input_len_bytes(&mut self, len: usize) {
    self.input_bytes = len as u64;
  }

  /// Many sequences per pass / 每次测量处理多个序列
  #[inline]
  pub fn update_input_len_bytes(&mut self, len: usize) {
    self.input_bytes += len as u64;
  }

  #[inline]
  pub fn set_encoded_len_bytes(&mut self, len: usize) {
    self.encoded_bytes = len as u64;
  }

  #[inline]
  pub fn update_encoded_len_bytes(&mut self, len: usize) {
    self.encoded_bytes += len as u64;
  }

  #[inline]
  pub fn input_bytes(&self) -> u64 {
    self.input_bytes
  }

  #[inline]
  pub fn encoded_bytes(&self) -> u64 {
    self.encoded_bytes
  }

  /// encoded / input, `None` when nothing was read
  /// 编码字节 / 输入字节，无输入时为 `None`
  pub fn compression_ratio(&self) -> Option<f64> {
    (self.input_bytes > 0).then(|| self.encoded_bytes as f64 / self.input_bytes as f64)
  }

  /// Derive final metrics for `iterations` passes taking `timed` in total
  /// 根据 `iterations` 次测量、总计时 `timed` 生成最终指标
  pub fn final_stats(&self, iterations: u64, timed: Duration) -> CaseMetrics {
    let compression_ratio = self.compression_ratio();
    if compression_ratio.is_none() {
      warn!("input length is 0, compression ratio skipped");
    }
    let bytes_processed = iterations * self.input_bytes;
    let duration_ns = timed.as_nanos() as u64;
    let bytes_per_sec = if duration_ns > 0 {
      bytes_processed as f64 / timed.as_secs_f64()
    } else {
      0.0
    };

    CaseMetrics {
      input_bytes: self.input_bytes,
      encoded_bytes: self.encoded_bytes,
      compression_ratio,
      iterations,
      bytes_processed,
      duration_ns,
      bytes_per_sec,
    }
  }
}

/// Final metrics of one case / 单个用例的最终指标
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseMetrics {
  /// Input bytes of one pass / 单次测量的输入字节
  pub input_bytes: u64,
  /// Encoded bytes of one pass / 单次测量的编码字节
  pub encoded_bytes: u64,
  /// encoded / input, null on empty input / 空输入时为 null
  pub compression_ratio: Option<f64>,
  pub iterations: u64,
  /// iterations x input bytes / 迭代次数 x 输入字节
  pub bytes_processed: u64,
  /// Total timed duration / 总计时时长
  pub duration_ns: u64,
  pub bytes_per_sec: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ratio() {
    let mut s = CompressionStats::new();
    s.set_input_len_bytes(1000);
    s.set_encoded_len_bytes(250);
    assert_eq!(s.compression_ratio(), Some(0.25));
  }

  #[test]
  fn test_accumulate() {
    let mut s = CompressionStats::new();
    for _ in 0..4 {
      s.update_input_len_bytes(100);
      s.update_encoded_len_bytes(30);
    }
    assert_eq!(s.input_bytes(), 400);
    assert_eq!(s.encoded_bytes(), 120);
    s.set_input_len_bytes(8);
    assert_eq!(s.input_bytes(), 8);
    s.reset();
    assert_eq!(s, CompressionStats::default());
  }

  #[test]
  fn test_final_stats() {
    let mut s = CompressionStats::new();
    s.set_input_len_bytes(1000);
    s.set_encoded_len_bytes(250);
    let m = s.final_stats(10, Duration::from_millis(10));
    assert_eq!(m.bytes_processed, 10_000);
    assert_eq!(m.compression_ratio, Some(0.25));
    assert!((m.bytes_per_sec - 1_000_000.0).abs() < 1e-3);
  }

  #[test]
  fn test_zero_input() {
    let m = CompressionStats::new().final_stats(5, Duration::ZERO);
    assert_eq!(m.compression_ratio, None);
    assert_eq!(m.bytes_processed, 0);
    assert_eq!(m.bytes_per_sec, 0.0);
  }
}
