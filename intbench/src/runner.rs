// Benchmark configuration and timed iteration driver
// 基准测试配置与计时迭代驱动

use std::{
  path::PathBuf,
  time::{Duration, Instant},
};

use intbench_data::SEED;
use serde::{Deserialize, Serialize};

use crate::{IterHistogram, Result};

/// Benchmark configuration / 基准测试配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchConf {
  /// Measured iterations per case / 每个用例的测量迭代次数
  pub iters: u64,
  /// Untimed warmup iterations / 不计时的预热迭代次数
  pub warmup: u64,
  /// Requested sizes of random sets / 随机集合的请求大小
  pub sizes: Vec<usize>,
  /// Random seed / 随机种子
  pub seed: u64,
  /// Report output directory / 报告输出目录
  pub report_dir: PathBuf,
  /// Only run cases whose name contains this / 仅运行名称包含此串的用例
  pub filter: Option<String>,
}

impl Default for BenchConf {
  fn default() -> Self {
    Self {
      iters: 10,
      warmup: 1,
      sizes: (2..=7).map(|e| 10usize.pow(e)).collect(), // 100 - 10M
      seed: SEED,
      report_dir: PathBuf::from("report"),
      filter: None,
    }
  }
}

impl BenchConf {
  pub fn iters(mut self, iters: u64) -> Self {
    self.iters = iters;
    self
  }

  pub fn warmup(mut self, warmup: u64) -> Self {
    self.warmup = warmup;
    self
  }

  pub fn sizes(mut self, sizes: Vec<usize>) -> Self {
    self.sizes = sizes;
    self
  }

  pub fn seed(mut self, seed: u64) -> Self {
    self.seed = seed;
    self
  }

  pub fn report_dir(mut self, dir: PathBuf) -> Self {
    self.report_dir = dir;
    self
  }

  pub fn filter(mut self, filter: Option<String>) -> Self {
    self.filter = filter;
    self
  }

  /// Whether a case name passes the filter / 用例名是否通过过滤
  pub fn selects(&self, name: &str) -> bool {
    self.filter.as_deref().is_none_or(|f| name.contains(f))
  }
}

/// Stopwatch of one iteration, running unless paused
/// 单次迭代的秒表，除非暂停否则一直计时
#[derive(Debug)]
pub struct Timer {
  start: Option<Instant>,
  elapsed: Duration,
}

impl Timer {
  fn started() -> Self {
    Self {
      start: Some(Instant::now()),
      elapsed: Duration::ZERO,
    }
  }

  /// Exclude what follows from timing / 之后的操作不计时
  #[inline]
  pub fn pause(&mut self) {
    if let Some(start) = self.start.take() {
      self.elapsed += start.elapsed();
    }
  }

  /// Time what follows / 之后的操作计时
  #[inline]
  pub fn resume(&mut self) {
    if self.start.is_none() {
      self.start = Some(Instant::now());
    }
  }

  #[inline]
  pub fn is_running(&self) -> bool {
    self.start.is_some()
  }

  fn finish(mut self) -> Duration {
    self.pause();
    self.elapsed
  }
}

/// Runs warmup then measured iterations of one case
/// 运行单个用例的预热与测量迭代
pub struct Bencher {
  iters: u64,
  warmup: u64,
  done: u64,
  timed: Duration,
  hist: IterHistogram,
}

impl Bencher {
  /// At least one measured iteration always runs / 至少运行一次测量迭代
  pub fn new(iters: u64, warmup: u64) -> Result<Self> {
    Ok(Self {
      iters: iters.max(1),
      warmup,
      done: 0,
      timed: Duration::ZERO,
      hist: IterHistogram::new()?,
    })
  }

  pub fn from_conf(conf: &BenchConf) -> Result<Self> {
    Self::new(conf.iters, conf.warmup)
  }

  /// Call `f` once per iteration with a running timer
  /// 每次迭代以运行中的计时器调用 `f`
  pub fn run<F>(&mut self, mut f: F) -> Result<()>
  where
    F: FnMut(&mut Timer) -> Result<()>,
  {
    for _ in 0..self.warmup {
      f(&mut Timer::started())?;
    }
    for _ in 0..self.iters {
      let mut timer = Timer::started();
      f(&mut timer)?;
      let spent = timer.finish();
      self.timed += spent;
      self.hist.record_saturating(spent.as_nanos() as u64);
      self.done += 1;
    }
    Ok(())
  }

  /// Measured iterations completed / 已完成的测量迭代次数
  #[inline]
  pub fn iterations(&self) -> u64 {
    self.done
  }

  /// Total timed duration / 总计时时长
  #[inline]
  pub fn timed(&self) -> Duration {
    self.timed
  }

  #[inline]
  pub fn hist(&self) -> &IterHistogram {
    &self.hist
  }
}

#[cfg(test)]
mod tests {
  use std::thread::sleep;

  use super::*;

  #[test]
  fn test_pause_excluded() {
    let mut t = Timer::started();
    t.pause();
    sleep(Duration::from_millis(30));
    t.resume();
    assert!(t.is_running());
    assert!(t.finish() < Duration::from_millis(30));
  }

  #[test]
  fn test_run_counts() {
    let mut b = Bencher::new(5, 2).unwrap();
    let mut calls = 0;
    b.run(|_| {
      calls += 1;
      Ok(())
    })
    .unwrap();
    assert_eq!(calls, 7);
    assert_eq!(b.iterations(), 5);
    assert_eq!(b.hist().count(), 5);
  }

  #[test]
  fn test_filter() {
    let conf = BenchConf::default().filter(Some("Random".into()));
    assert!(conf.selects("RandomUniform32/Copy/100"));
    assert!(!conf.selects("Timestamps/Copy"));
    assert!(BenchConf::default().selects("anything"));
  }
}
