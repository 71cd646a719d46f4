// Delta variable byte codec
// 差分变长字节编解码器
//
// 7 payload bits per byte, high bit set while more bytes follow.
// 每字节 7 位有效载荷，高位置 1 表示后续还有字节。

use crate::{Error, IntCodec, Result};

/// Max bytes of one u32 / 单个 u32 的最大字节数
const MAX_BYTES: usize = 5;

#[derive(Clone, Copy, Debug, Default)]
pub struct DeltaVByte;

impl IntCodec for DeltaVByte {
  const NAME: &'static str = "DeltaVariableByte";
  const BLOCK: usize = 1;

  #[inline]
  fn max_encoded_len(n: usize) -> usize {
    n * MAX_BYTES
  }

  fn encode(&mut self, input: &[u32], out: &mut [u8]) -> Result<usize> {
    let cap = out.len();
    let mut pos = 0;
    let mut prev = 0u32;
    for &v in input {
      let mut gap = v.wrapping_sub(prev);
      prev = v;
      // Fast path: room for the widest value / 快路径：足够容纳最宽值
      if cap - pos < MAX_BYTES {
        let need = pos + bytes_of(gap);
        if need > cap {
          return Err(Error::Overflow { need, cap });
        }
      }
      while gap >= 0x80 {
        out[pos] = (gap as u8) | 0x80;
        gap >>= 7;
        pos += 1;
      }
      out[pos] = gap as u8;
      pos += 1;
    }
    Ok(pos)
  }

  fn decode(&mut self, input: &[u8], out: &mut [u32]) -> Result<usize> {
    let mut n = 0;
    let mut prev = 0u32;
    let mut pos = 0;
    while pos < input.len() {
      if n == out.len() {
        return Err(Error::TooMany { cap: out.len() });
      }
      let mut gap = 0u32;
      let mut shift = 0;
      loop {
        let Some(&b) = input.get(pos) else {
          return Err(Error::Truncated { at: pos });
        };
        pos += 1;
        gap |= u32::from(b & 0x7f) << shift;
        if b & 0x80 == 0 {
          break;
        }
        shift += 7;
        if shift >= 32 {
          return Err(Error::Truncated { at: pos });
        }
      }
      prev = prev.wrapping_add(gap);
      out[n] = prev;
      n += 1;
    }
    Ok(n)
  }
}

#[inline]
fn bytes_of(v: u32) -> usize {
  match v {
    0..0x80 => 1,
    0x80..0x4000 => 2,
    0x4000..0x20_0000 => 3,
    0x20_0000..0x1000_0000 => 4,
    _ => 5,
  }
}
