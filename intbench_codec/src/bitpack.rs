// Delta binary packing over fixed blocks
// 固定块上的差分位打包
//
// Each block: bit width (1 byte) + packed gaps. Gaps carry across blocks.
// 每块：位宽（1 字节）+ 打包后的差值。差值跨块延续。

use bitpacking::{BitPacker, BitPacker4x, BitPacker8x};

use crate::{Error, IntCodec, Result, delta_decode, delta_encode};

/// Delta bit packing codec / 差分位打包编解码器
#[derive(Clone)]
pub struct DeltaBitPack<B: BitPacker> {
  packer: B,
  /// Reusable gap block / 可复用的差值块
  gaps: Vec<u32>,
}

/// 128 values per block / 每块 128 个值
pub type DeltaBp128 = DeltaBitPack<BitPacker4x>;

/// 256 values per block / 每块 256 个值
pub type DeltaBp256 = DeltaBitPack<BitPacker8x>;

impl<B: BitPacker> Default for DeltaBitPack<B> {
  fn default() -> Self {
    Self {
      packer: B::new(),
      gaps: vec![0; B::BLOCK_LEN],
    }
  }
}

impl<B: BitPacker> DeltaBitPack<B> {
  fn encode_blocks(&mut self, input: &[u32], out: &mut [u8]) -> Result<usize> {
    let cap = out.len();
    let mut pos = 0;
    let mut prev = 0u32;
    for block in input.chunks_exact(B::BLOCK_LEN) {
      self.gaps.copy_from_slice(block);
      prev = delta_encode(prev, &mut self.gaps);
      let bits = self.packer.num_bits(&self.gaps);
      let size = B::compressed_block_size(bits);
      if pos + 1 + size > cap {
        return Err(Error::Overflow {
          need: pos + 1 + size,
          cap,
        });
      }
      out[pos] = bits;
      pos += 1;
      pos += self
        .packer
        .compress(&self.gaps, &mut out[pos..pos + size], bits);
    }
    Ok(pos)
  }
}

impl IntCodec for DeltaBp128 {
  const NAME: &'static str = "DeltaBinaryPacking128";
  const BLOCK: usize = BitPacker4x::BLOCK_LEN;

  fn max_encoded_len(n: usize) -> usize {
    max_len::<BitPacker4x>(n)
  }

  fn encode(&mut self, input: &[u32], out: &mut [u8]) -> Result<usize> {
    check_aligned::<BitPacker4x>(input.len())?;
    self.encode_blocks(input, out)
  }

  fn decode(&mut self, input: &[u8], out: &mut [u32]) -> Result<usize> {
    decode_blocks(&self.packer, input, out)
  }
}

impl IntCodec for DeltaBp256 {
  const NAME: &'static str = "DeltaBinaryPacking256";
  const BLOCK: usize = BitPacker8x::BLOCK_LEN;

  fn max_encoded_len(n: usize) -> usize {
    max_len::<BitPacker8x>(n)
  }

  fn encode(&mut self, input: &[u32], out: &mut [u8]) -> Result<usize> {
    check_aligned::<BitPacker8x>(input.len())?;
    self.encode_blocks(input, out)
  }

  fn decode(&mut self, input: &[u8], out: &mut [u32]) -> Result<usize> {
    decode_blocks(&self.packer, input, out)
  }
}

#[inline]
fn max_len<B: BitPacker>(n: usize) -> usize {
  n.div_ceil(B::BLOCK_LEN) * (1 + B::compressed_block_size(32))
}

#[inline]
fn check_aligned<B: BitPacker>(len: usize) -> Result<()> {
  if len % B::BLOCK_LEN != 0 {
    return Err(Error::Unaligned {
      len,
      block: B::BLOCK_LEN,
    });
  }
  Ok(())
}

fn decode_blocks<B: BitPacker>(packer: &B, input: &[u8], out: &mut [u32]) -> Result<usize> {
  let mut pos = 0;
  let mut n = 0;
  let mut prev = 0u32;
  while pos < input.len() {
    let bits = input[pos];
    if bits > 32 {
      return Err(Error::BitWidth(bits));
    }
    pos += 1;
    let size = B::compressed_block_size(bits);
    let Some(src) = input.get(pos..pos + size) else {
      return Err(Error::Truncated { at: pos });
    };
    let Some(dst) = out.get_mut(n..n + B::BLOCK_LEN) else {
      return Err(Error::TooMany { cap: out.len() });
    };
    packer.decompress(src, dst, bits);
    prev = delta_decode(prev, dst);
    pos += size;
    n += B::BLOCK_LEN;
  }
  Ok(n)
}
