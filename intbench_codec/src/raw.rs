// Plain little-endian copy, the baseline every ratio is compared to
// 纯小端拷贝，所有压缩比的基线

use crate::{Error, IntCodec, Result};

#[derive(Clone, Copy, Debug, Default)]
pub struct Raw;

impl IntCodec for Raw {
  const NAME: &'static str = "Copy";
  const BLOCK: usize = 1;

  #[inline]
  fn max_encoded_len(n: usize) -> usize {
    n * 4
  }

  fn encode(&mut self, input: &[u32], out: &mut [u8]) -> Result<usize> {
    let need = input.len() * 4;
    if out.len() < need {
      return Err(Error::Overflow {
        need,
        cap: out.len(),
      });
    }
    for (dst, v) in out.chunks_exact_mut(4).zip(input) {
      dst.copy_from_slice(&v.to_le_bytes());
    }
    Ok(need)
  }

  fn decode(&mut self, input: &[u8], out: &mut [u32]) -> Result<usize> {
    if input.len() % 4 != 0 {
      return Err(Error::Truncated {
        at: input.len() - input.len() % 4,
      });
    }
    let n = input.len() / 4;
    if n > out.len() {
      return Err(Error::TooMany { cap: out.len() });
    }
    for (dst, src) in out.iter_mut().zip(input.chunks_exact(4)) {
      *dst = u32::from_le_bytes([src[0], src[1], src[2], src[3]]);
    }
    Ok(n)
  }
}
