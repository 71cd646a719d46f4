// Block split of a sequence between primary and fallback codec
// 序列在主编解码器与后备编解码器之间的块划分

use crate::{Error, Result};

/// `n1` aligned values for the primary codec, `n2 < block` for the fallback
/// `n1` 个对齐的值交给主编解码器，`n2 < block` 个交给后备编解码器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSplit {
  pub n: usize,
  pub block: usize,
  pub n1: usize,
  pub n2: usize,
}

impl BlockSplit {
  pub fn new(n: usize, block: usize) -> Result<Self> {
    if block == 0 {
      return Err(Error::ZeroBlock);
    }
    let n2 = n % block;
    Ok(Self {
      n,
      block,
      n1: n - n2,
      n2,
    })
  }
}
