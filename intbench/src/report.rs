// Run report: JSON file plus one summary line per case
// 运行报告：JSON 文件加每个用例一行摘要

use std::{
  fs,
  path::{Path, PathBuf},
};

use humansize::{BINARY, format_size};
use serde::{Deserialize, Serialize};
use sonic_rs::to_string_pretty;

use crate::{BenchConf, CaseMetrics, Dataset, IterStats, Op, Result};

pub const REPORT_FILE: &str = "intbench.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseReport {
  pub name: String,
  pub dataset: Dataset,
  pub codec: String,
  pub op: Op,
  pub metrics: CaseMetrics,
  /// Per-iteration timing in nanoseconds / 单次迭代耗时（纳秒）
  pub iter: IterStats,
}

impl CaseReport {
  pub fn summary(&self) -> String {
    let m = &self.metrics;
    let ratio = m
      .compression_ratio
      .map_or_else(|| "-".to_owned(), |r| format!("{r:.4}"));
    format!(
      "{:<48} {:>10} -> {:>10} ratio {ratio:>7} {:>12}/s p50 {} p99 {}",
      self.name,
      format_size(m.input_bytes, BINARY),
      format_size(m.encoded_bytes, BINARY),
      format_size(m.bytes_per_sec as u64, BINARY),
      fmt_ns(self.iter.p50),
      fmt_ns(self.iter.p99),
    )
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
  pub conf: BenchConf,
  pub cases: Vec<CaseReport>,
}

/// Write `report_dir/intbench.json`, returns its path
/// 写入 `report_dir/intbench.json`，返回其路径
pub fn write_report(dir: &Path, report: &Report) -> Result<PathBuf> {
  fs::create_dir_all(dir)?;
  let json = to_string_pretty(report)?;
  let path = dir.join(REPORT_FILE);
  fs::write(&path, json)?;
  Ok(path)
}

pub fn fmt_ns(ns: u64) -> String {
  if ns >= 1_000_000_000 {
    format!("{:.2}s", ns as f64 / 1e9)
  } else if ns >= 1_000_000 {
    format!("{:.2}ms", ns as f64 / 1e6)
  } else if ns >= 1_000 {
    format!("{:.2}µs", ns as f64 / 1e3)
  } else {
    format!("{ns}ns")
  }
}
