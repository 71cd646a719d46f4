// Per-iteration timing histogram backed by HdrHistogram
// 基于 HdrHistogram 的单次迭代耗时直方图

use hdrhistogram::Histogram;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Max recordable iteration time: 1 hour in nanoseconds
/// 可记录的最大迭代耗时：1 小时（纳秒）
const MAX_NS: u64 = 3_600_000_000_000;

/// Significant figures for histogram precision
/// 直方图精度的有效数字
const SIGFIG: u8 = 3;

/// Timed nanoseconds of each measured iteration
/// 每次测量迭代的计时纳秒数
#[derive(Debug, Clone)]
pub struct IterHistogram {
  inner: Histogram<u64>,
}

impl IterHistogram {
  pub fn new() -> Result<Self> {
    let inner = Histogram::new_with_bounds(1, MAX_NS, SIGFIG)?;
    Ok(Self { inner })
  }

  /// Record, clamped into the histogram bounds
  /// 记录，超出范围时截断到直方图边界
  pub fn record_saturating(&mut self, ns: u64) {
    let _ = self.inner.record(ns.clamp(1, MAX_NS));
  }

  pub fn p50(&self) -> u64 {
    self.inner.value_at_quantile(0.50)
  }

  pub fn p99(&self) -> u64 {
    self.inner.value_at_quantile(0.99)
  }

  pub fn mean(&self) -> f64 {
    self.inner.mean()
  }

  pub fn min(&self) -> u64 {
    self.inner.min()
  }

  pub fn max(&self) -> u64 {
    self.inner.max()
  }

  pub fn count(&self) -> u64 {
    self.inner.len()
  }
}

/// Serializable iteration time snapshot
/// 可序列化的迭代耗时快照
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IterStats {
  pub min: u64,
  pub max: u64,
  pub mean: f64,
  pub p50: u64,
  pub p99: u64,
  pub count: u64,
}

impl From<&IterHistogram> for IterStats {
  fn from(h: &IterHistogram) -> Self {
    Self {
      min: h.min(),
      max: h.max(),
      mean: h.mean(),
      p50: h.p50(),
      p99: h.p99(),
      count: h.count(),
    }
  }
}
