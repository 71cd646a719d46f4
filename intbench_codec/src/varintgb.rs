// Delta group varint codec
// 差分分组变长整数编解码器
//
// Layout: count (u32 LE), then groups of up to 4 gaps behind one selector byte
// holding (bytes - 1) in 2 bits per gap.
// 布局：计数（u32 小端），随后每组最多 4 个差值，前置 1 字节选择符，每个差值 2 位记录（字节数 - 1）。

use crate::{Error, IntCodec, Result, codec::count_header};

const GROUP: usize = 4;
const HEAD: usize = 4;

#[derive(Clone, Copy, Debug, Default)]
pub struct DeltaVarIntGb;

#[inline]
fn width(v: u32) -> usize {
  match v {
    0..0x100 => 1,
    0x100..0x1_0000 => 2,
    0x1_0000..0x100_0000 => 3,
    _ => 4,
  }
}

impl IntCodec for DeltaVarIntGb {
  const NAME: &'static str = "DeltaVarIntGB";
  const BLOCK: usize = 1;

  #[inline]
  fn max_encoded_len(n: usize) -> usize {
    HEAD + n.div_ceil(GROUP) + n * 4
  }

  fn encode(&mut self, input: &[u32], out: &mut [u8]) -> Result<usize> {
    let count = count_header(input.len())?;
    let cap = out.len();
    if cap < HEAD {
      return Err(Error::Overflow { need: HEAD, cap });
    }
    out[..HEAD].copy_from_slice(&count.to_le_bytes());
    let mut pos = HEAD;
    let mut prev = 0u32;
    let mut gaps = [0u32; GROUP];

    for group in input.chunks(GROUP) {
      let mut size = 1;
      for (g, &v) in gaps.iter_mut().zip(group) {
        *g = v.wrapping_sub(prev);
        prev = v;
        size += width(*g);
      }
      if pos + size > cap {
        return Err(Error::Overflow {
          need: pos + size,
          cap,
        });
      }

      let sel = pos;
      pos += 1;
      let mut selector = 0u8;
      for (i, &g) in gaps[..group.len()].iter().enumerate() {
        let w = width(g);
        selector |= ((w - 1) as u8) << (i * 2);
        out[pos..pos + w].copy_from_slice(&g.to_le_bytes()[..w]);
        pos += w;
      }
      out[sel] = selector;
    }
    Ok(pos)
  }

  fn decode(&mut self, input: &[u8], out: &mut [u32]) -> Result<usize> {
    if input.len() < HEAD {
      return Err(Error::Truncated { at: input.len() });
    }
    let count = u32::from_le_bytes([input[0], input[1], input[2], input[3]]) as usize;
    if count > out.len() {
      return Err(Error::TooMany { cap: out.len() });
    }

    let mut pos = HEAD;
    let mut prev = 0u32;
    let mut n = 0;
    while n < count {
      let Some(&selector) = input.get(pos) else {
        return Err(Error::Truncated { at: pos });
      };
      pos += 1;
      let len = (count - n).min(GROUP);
      for i in 0..len {
        let w = ((selector >> (i * 2)) & 0x3) as usize + 1;
        let Some(src) = input.get(pos..pos + w) else {
          return Err(Error::Truncated { at: pos });
        };
        let mut buf = [0u8; 4];
        buf[..w].copy_from_slice(src);
        pos += w;
        prev = prev.wrapping_add(u32::from_le_bytes(buf));
        out[n] = prev;
        n += 1;
      }
    }
    Ok(n)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_partial_group() {
    let vals = [1u32, 2, 3, 4, 70_000];
    let mut out = vec![0u8; DeltaVarIntGb::max_encoded_len(vals.len())];
    let n = DeltaVarIntGb.encode(&vals, &mut out).unwrap();
    // head 4 + (sel 1 + 4 x 1) + (sel 1 + 3)
    assert_eq!(n, 4 + 5 + 4);
    let mut dec = [0u32; 5];
    assert_eq!(DeltaVarIntGb.decode(&out[..n], &mut dec).unwrap(), 5);
    assert_eq!(dec, vals);
  }
}
