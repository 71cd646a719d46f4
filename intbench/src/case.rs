// Benchmark cases: dataset x codec x operation
// 基准用例：数据集 x 编解码器 x 操作

use std::fmt;

use intbench_codec::{
  DeltaBp128, DeltaBp256, DeltaFastPFor128, DeltaFastPFor256, DeltaVByte, DeltaVarIntGb, IntCodec,
  Raw,
};
use intbench_data::{DataCtx, LoadNext};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
  BenchConf, Bencher, BlockAdapter, CaseReport, CompressionStats, IterStats, Result, Timer,
};

const WORD: usize = size_of::<u32>();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dataset {
  /// Every record of the posting lists file / 倒排列表文件中的全部记录
  Gov2,
  Timestamps,
  /// Random sorted set of the requested size / 指定请求大小的随机有序集合
  Random(usize),
}

impl Dataset {
  pub fn label(self) -> &'static str {
    match self {
      Self::Gov2 => "Gov2Sorted",
      Self::Timestamps => "Timestamps",
      Self::Random(_) => "RandomUniform32",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecKind {
  Copy,
  DeltaVByte,
  DeltaVarIntGb,
  DeltaBp128,
  DeltaBp256,
  DeltaFastPFor128,
  DeltaFastPFor256,
}

impl CodecKind {
  pub const ALL: [Self; 7] = [
    Self::Copy,
    Self::DeltaVByte,
    Self::DeltaVarIntGb,
    Self::DeltaBp128,
    Self::DeltaBp256,
    Self::DeltaFastPFor128,
    Self::DeltaFastPFor256,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Self::Copy => Raw::NAME,
      Self::DeltaVByte => DeltaVByte::NAME,
      Self::DeltaVarIntGb => DeltaVarIntGb::NAME,
      Self::DeltaBp128 => DeltaBp128::NAME,
      Self::DeltaBp256 => DeltaBp256::NAME,
      Self::DeltaFastPFor128 => DeltaFastPFor128::NAME,
      Self::DeltaFastPFor256 => DeltaFastPFor256::NAME,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
  Encode,
  Decode,
}

impl Op {
  pub const ALL: [Self; 2] = [Self::Encode, Self::Decode];

  pub fn name(self) -> &'static str {
    match self {
      Self::Encode => "Encode",
      Self::Decode => "Decode",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
  pub dataset: Dataset,
  pub codec: CodecKind,
  pub op: Op,
}

impl fmt::Display for Case {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}/{}{}",
      self.dataset.label(),
      self.codec.name(),
      self.op.name()
    )?;
    if let Dataset::Random(n) = self.dataset {
      write!(f, "/{n}")?;
    }
    Ok(())
  }
}

impl Case {
  pub fn new(dataset: Dataset, codec: CodecKind, op: Op) -> Self {
    Self { dataset, codec, op }
  }

  /// Run this case and build its report / 运行该用例并生成报告
  pub fn run(&self, ctx: &DataCtx, conf: &BenchConf) -> Result<CaseReport> {
    let mut bencher = Bencher::from_conf(conf)?;
    let mut stats = CompressionStats::new();
    let b = &mut bencher;
    let s = &mut stats;
    match self.codec {
      CodecKind::Copy => self.drive(Raw, ctx, b, s)?,
      CodecKind::DeltaVByte => self.drive(DeltaVByte, ctx, b, s)?,
      CodecKind::DeltaVarIntGb => self.drive(DeltaVarIntGb, ctx, b, s)?,
      CodecKind::DeltaBp128 => self.drive(DeltaBp128::default(), ctx, b, s)?,
      CodecKind::DeltaBp256 => self.drive(DeltaBp256::default(), ctx, b, s)?,
      CodecKind::DeltaFastPFor128 => self.drive(DeltaFastPFor128::default(), ctx, b, s)?,
      CodecKind::DeltaFastPFor256 => self.drive(DeltaFastPFor256::default(), ctx, b, s)?,
    }

    let metrics = stats.final_stats(bencher.iterations(), bencher.timed());
    Ok(CaseReport {
      name: self.to_string(),
      dataset: self.dataset,
      codec: self.codec.name().into(),
      op: self.op,
      metrics,
      iter: IterStats::from(bencher.hist()),
    })
  }

  fn drive<P: IntCodec + Clone>(
    &self,
    codec: P,
    ctx: &DataCtx,
    b: &mut Bencher,
    stats: &mut CompressionStats,
  ) -> Result<()> {
    match self.dataset {
      Dataset::Gov2 => bench_gov2(codec, self.op, ctx, b, stats),
      Dataset::Timestamps => {
        let ts = ctx.timestamps()?;
        bench_seq(codec, self.op, &ts, b, stats)
      }
      Dataset::Random(n) => {
        let set = ctx.random(n);
        bench_seq(codec, self.op, &set, b, stats)
      }
    }
  }
}

/// Every case of a run in execution order, after the name filter
/// 一次运行的全部用例（按执行顺序，已应用名称过滤）
pub fn cases(conf: &BenchConf) -> Vec<Case> {
  let datasets = [Dataset::Gov2, Dataset::Timestamps]
    .into_iter()
    .chain(conf.sizes.iter().map(|&n| Dataset::Random(n)));
  let mut li = Vec::new();
  for dataset in datasets {
    for codec in CodecKind::ALL {
      for op in Op::ALL {
        let case = Case::new(dataset, codec, op);
        if conf.selects(&case.to_string()) {
          li.push(case);
        }
      }
    }
  }
  li
}

/// Run every selected case, stopping at the first failure
/// 运行所有选中的用例，遇到首个失败即停止
pub fn run_all(ctx: &DataCtx, conf: &BenchConf) -> Result<Vec<CaseReport>> {
  let li = cases(conf);
  info!("{} cases, {} iters, {} warmup", li.len(), conf.iters, conf.warmup);
  let mut reports = Vec::with_capacity(li.len());
  for case in li {
    debug!("run {case}");
    let report = case.run(ctx, conf)?;
    info!("{}", report.summary());
    reports.push(report);
  }
  Ok(reports)
}

/// One in-memory sequence per iteration / 每次迭代处理一个内存序列
fn bench_seq<P: IntCodec>(
  codec: P,
  op: Op,
  seq: &[u32],
  b: &mut Bencher,
  stats: &mut CompressionStats,
) -> Result<()> {
  let mut comp = BlockAdapter::new(codec, seq)?;
  match op {
    Op::Encode => b.run(|t| {
      t.pause();
      comp.reset();
      t.resume();
      comp.encode()
    })?,
    Op::Decode => {
      comp.encode()?;
      b.run(|_| comp.decode())?;
      comp.equality_check()?;
    }
  }
  stats.set_input_len_bytes(comp.input_len() * WORD);
  stats.set_encoded_len_bytes(comp.encoded_len());
  Ok(())
}

/// Stream the whole posting lists file per iteration.
/// File opening and record loading stay untimed.
/// 每次迭代流式处理整个倒排列表文件，打开文件与加载记录不计时。
fn bench_gov2<P: IntCodec + Clone>(
  codec: P,
  op: Op,
  ctx: &DataCtx,
  b: &mut Bencher,
  stats: &mut CompressionStats,
) -> Result<()> {
  let mut set = Vec::new();
  b.run(|t| {
    t.pause();
    stats.reset();
    let mut reader = ctx.gov2()?;
    t.resume();
    loop {
      t.pause();
      if reader.load_next_set(&mut set)? == LoadNext::End {
        return Ok(());
      }
      t.resume();
      gov2_set(&codec, op, &set, t, stats)?;
    }
  })
}

/// Returns with the timer paused / 返回时计时器处于暂停状态
fn gov2_set<P: IntCodec + Clone>(
  codec: &P,
  op: Op,
  set: &[u32],
  t: &mut Timer,
  stats: &mut CompressionStats,
) -> Result<()> {
  t.pause();
  let mut comp = BlockAdapter::new(codec.clone(), set)?;
  if op == Op::Decode {
    comp.encode()?;
  }
  t.resume();
  match op {
    Op::Encode => comp.encode()?,
    Op::Decode => comp.decode()?,
  }
  t.pause();
  if op == Op::Decode {
    comp.equality_check()?;
  }
  stats.update_input_len_bytes(comp.input_len() * WORD);
  stats.update_encoded_len_bytes(comp.encoded_len());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_names() {
    let c = Case::new(Dataset::Random(1000), CodecKind::DeltaBp128, Op::Decode);
    assert_eq!(c.to_string(), "RandomUniform32/DeltaBinaryPacking128Decode/1000");
    let c = Case::new(Dataset::Gov2, CodecKind::Copy, Op::Encode);
    assert_eq!(c.to_string(), "Gov2Sorted/CopyEncode");
    let c = Case::new(Dataset::Timestamps, CodecKind::DeltaFastPFor256, Op::Encode);
    assert_eq!(c.to_string(), "Timestamps/DeltaFastPFor256Encode");
  }

  #[test]
  fn test_cases_order_and_filter() {
    let conf = BenchConf::default().sizes(vec![100, 1000]);
    let li = cases(&conf);
    assert_eq!(li.len(), 4 * CodecKind::ALL.len() * Op::ALL.len());
    assert_eq!(li[0].dataset, Dataset::Gov2);
    assert_eq!(li.last().map(|c| c.dataset), Some(Dataset::Random(1000)));

    let conf = conf.filter(Some("Timestamps/DeltaVariableByte".into()));
    let li = cases(&conf);
    assert_eq!(li.len(), 2);
    assert!(li.iter().all(|c| c.codec == CodecKind::DeltaVByte));
  }
}
