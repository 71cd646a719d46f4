// Block partitioned codec adapter
// 按块划分的编解码适配器
//
// The primary codec takes the block aligned head, the fallback codec the
// remainder. Both regions live back to back in one encode buffer.
// 主编解码器处理按块对齐的头部，后备编解码器处理余下部分。两段在同一编码缓冲区中首尾相接。

use intbench_codec::{DeltaVByte, IntCodec};

use crate::{BlockSplit, Error, Result};

/// Extra encode buffer bytes on top of the codecs' bounds
/// 在编解码器上界之外额外预留的编码缓冲区字节
pub const SLACK: usize = 1024 * 4;

pub struct BlockAdapter<'a, P, F = DeltaVByte> {
  primary: P,
  fallback: F,
  src: &'a [u32],
  split: BlockSplit,
  /// Working copy refreshed by `reset` / 由 `reset` 刷新的工作副本
  work: Vec<u32>,
  enc: Vec<u8>,
  enc_len1: usize,
  enc_len2: usize,
  dec: Vec<u32>,
}

impl<'a, P: IntCodec> BlockAdapter<'a, P> {
  /// Adapter with the default variable byte fallback
  /// 使用默认变长字节后备编解码器的适配器
  pub fn new(primary: P, src: &'a [u32]) -> Result<Self> {
    Self::with_fallback(primary, DeltaVByte, src)
  }
}

impl<'a, P: IntCodec, F: IntCodec> BlockAdapter<'a, P, F> {
  pub fn with_fallback(primary: P, fallback: F, src: &'a [u32]) -> Result<Self> {
    let split = BlockSplit::new(src.len(), P::BLOCK)?;
    let cap = P::max_encoded_len(split.n1) + F::max_encoded_len(split.n2) + SLACK;
    Ok(Self {
      primary,
      fallback,
      src,
      split,
      work: src.to_vec(),
      enc: vec![0; cap],
      enc_len1: 0,
      enc_len2: 0,
      dec: vec![0; src.len()],
    })
  }

  /// Refresh the working copy from the source, outside the timed region
  /// 从源数据刷新工作副本，不计入计时
  #[inline]
  pub fn reset(&mut self) {
    self.work.copy_from_slice(self.src);
  }

  pub fn encode(&mut self) -> Result<()> {
    let (head, tail) = self.work.split_at(self.split.n1);
    self.enc_len1 = self.primary.encode(head, &mut self.enc)?;
    if self.split.n2 > 0 {
      self.enc_len2 = self.fallback.encode(tail, &mut self.enc[self.enc_len1..])?;
    }
    Ok(())
  }

  pub fn decode(&mut self) -> Result<()> {
    let (head, tail) = self.dec.split_at_mut(self.split.n1);
    let got = self.primary.decode(&self.enc[..self.enc_len1], head)?;
    check_region("primary", self.split.n1, got)?;
    if self.split.n2 > 0 {
      let end = self.enc_len1 + self.enc_len2;
      let got = self.fallback.decode(&self.enc[self.enc_len1..end], tail)?;
      check_region("fallback", self.split.n2, got)?;
    }
    Ok(())
  }

  #[inline]
  pub fn input_len(&self) -> usize {
    self.split.n
  }

  /// Combined encoded bytes of both regions / 两段编码的总字节数
  #[inline]
  pub fn encoded_len(&self) -> usize {
    if self.split.n2 > 0 {
      self.enc_len1 + self.enc_len2
    } else {
      self.enc_len1
    }
  }

  #[inline]
  pub fn encoded(&self) -> &[u8] {
    &self.enc[..self.encoded_len()]
  }

  #[inline]
  pub fn decoded(&self) -> &[u32] {
    &self.dec
  }

  #[inline]
  pub fn split(&self) -> BlockSplit {
    self.split
  }

  /// Decoded values must equal the source / 解码结果必须与源数据一致
  pub fn equality_check(&self) -> Result<()> {
    match self.src.iter().zip(&self.dec).position(|(a, b)| a != b) {
      None => Ok(()),
      Some(at) => Err(Error::Integrity {
        at,
        expected: self.src[at],
        actual: self.dec[at],
      }),
    }
  }
}

#[inline]
fn check_region(region: &'static str, expected: usize, actual: usize) -> Result<()> {
  if expected != actual {
    return Err(Error::Region {
      region,
      expected,
      actual,
    });
  }
  Ok(())
}
