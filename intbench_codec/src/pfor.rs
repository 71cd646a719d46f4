// Delta FastPFor over 128 / 256 value blocks
// 基于 128 / 256 值块的差分 FastPFor
//
// Gaps go through the `fastpfor` word codec, whose u32 output words are
// stored little-endian. The first word is the value count.
// 差值经 `fastpfor` 按字编码，输出的 u32 字以小端存储，首字为值个数。

use std::io::Cursor;

use fastpfor::rust::{DEFAULT_PAGE_SIZE, FastPFOR, Integer};

use crate::{Error, IntCodec, Result, codec::count_header, delta_decode, delta_encode};

const WORD: usize = 4;

/// Words reserved beyond the input length / 在输入长度之外预留的字数
const EXTRA_WORDS: usize = 1024;

/// Delta FastPFor codec with `B` values per block / 每块 `B` 个值的差分 FastPFor
pub struct DeltaFastPFor<const B: u32> {
  codec: FastPFOR,
  gaps: Vec<u32>,
  words: Vec<u32>,
}

pub type DeltaFastPFor128 = DeltaFastPFor<128>;

pub type DeltaFastPFor256 = DeltaFastPFor<256>;

impl<const B: u32> Default for DeltaFastPFor<B> {
  fn default() -> Self {
    Self {
      codec: FastPFOR::new(DEFAULT_PAGE_SIZE, B),
      gaps: Vec::new(),
      words: Vec::new(),
    }
  }
}

/// Only scratch buffers are held, so a clone starts fresh
/// 只持有临时缓冲区，克隆即新建
impl<const B: u32> Clone for DeltaFastPFor<B> {
  fn clone(&self) -> Self {
    Self::default()
  }
}

#[inline]
fn max_words(n: usize) -> usize {
  n + n / 8 + EXTRA_WORDS
}

fn pfor_err(e: impl std::fmt::Display) -> Error {
  Error::FastPFor(e.to_string())
}

impl<const B: u32> DeltaFastPFor<B> {
  fn encode_blocks(&mut self, input: &[u32], out: &mut [u8]) -> Result<usize> {
    let block = B as usize;
    if input.len() % block != 0 {
      return Err(Error::Unaligned {
        len: input.len(),
        block,
      });
    }
    if input.is_empty() {
      return Ok(0);
    }
    let len = count_header(input.len())?;

    self.gaps.clear();
    self.gaps.extend_from_slice(input);
    delta_encode(0, &mut self.gaps);
    self.words.clear();
    self.words.resize(max_words(input.len()), 0);

    let mut in_pos = Cursor::new(0u32);
    let mut out_pos = Cursor::new(0u32);
    self
      .codec
      .compress(&self.gaps, len, &mut in_pos, &mut self.words, &mut out_pos)
      .map_err(pfor_err)?;

    let words = &self.words[..out_pos.position() as usize];
    let need = words.len() * WORD;
    if need > out.len() {
      return Err(Error::Overflow {
        need,
        cap: out.len(),
      });
    }
    for (dst, w) in out.chunks_exact_mut(WORD).zip(words) {
      dst.copy_from_slice(&w.to_le_bytes());
    }
    Ok(need)
  }

  fn decode_blocks(&mut self, input: &[u8], out: &mut [u32]) -> Result<usize> {
    if input.is_empty() {
      return Ok(0);
    }
    if input.len() % WORD != 0 {
      return Err(Error::Truncated {
        at: input.len() - input.len() % WORD,
      });
    }
    self.words.clear();
    self.words.extend(
      input
        .chunks_exact(WORD)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]])),
    );
    if self.words[0] as usize > out.len() {
      return Err(Error::TooMany { cap: out.len() });
    }
    let len = count_header(self.words.len())?;

    let mut in_pos = Cursor::new(0u32);
    let mut out_pos = Cursor::new(0u32);
    self
      .codec
      .uncompress(&self.words, len, &mut in_pos, out, &mut out_pos)
      .map_err(pfor_err)?;

    let n = out_pos.position() as usize;
    delta_decode(0, &mut out[..n]);
    Ok(n)
  }
}

impl IntCodec for DeltaFastPFor128 {
  const NAME: &'static str = "DeltaFastPFor128";
  const BLOCK: usize = 128;

  fn max_encoded_len(n: usize) -> usize {
    max_words(n) * WORD
  }

  fn encode(&mut self, input: &[u32], out: &mut [u8]) -> Result<usize> {
    self.encode_blocks(input, out)
  }

  fn decode(&mut self, input: &[u8], out: &mut [u32]) -> Result<usize> {
    self.decode_blocks(input, out)
  }
}

impl IntCodec for DeltaFastPFor256 {
  const NAME: &'static str = "DeltaFastPFor256";
  const BLOCK: usize = 256;

  fn max_encoded_len(n: usize) -> usize {
    max_words(n) * WORD
  }

  fn encode(&mut self, input: &[u32], out: &mut [u8]) -> Result<usize> {
    self.encode_blocks(input, out)
  }

  fn decode(&mut self, input: &[u8], out: &mut [u32]) -> Result<usize> {
    self.decode_blocks(input, out)
  }
}
