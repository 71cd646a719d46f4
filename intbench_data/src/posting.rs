// Buffered reader for binary posting-list records
// 二进制倒排列表记录的缓冲读取器
//
// Record: count N (u32, native order) followed by N u32 values.
// 记录：计数 N（u32，本机字节序）后跟 N 个 u32 值。

use std::{
  fs::File,
  io::{ErrorKind, Read, Write},
  path::Path,
};

use crate::{Error, Result};

/// Chunk size of the internal buffer / 内部缓冲区块大小
pub const CHUNK: usize = 4096;

const WORD: usize = 4;

/// Outcome of one load attempt / 单次加载结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadNext {
  /// A record was loaded / 已加载一条记录
  Set,
  /// No more records / 没有更多记录
  End,
}

/// Posting list reader / 倒排列表读取器
pub struct PostingReader<R = File> {
  src: R,
  buf: Box<[u8]>,
  pos: usize,
  end: usize,
}

impl PostingReader<File> {
  /// Open file, its size must be a multiple of 4
  /// 打开文件，文件大小必须是 4 的倍数
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let open_err = |source| Error::Open {
      path: path.to_path_buf(),
      source,
    };
    let file = File::open(path).map_err(open_err)?;
    let len = file.metadata().map_err(open_err)?.len();
    if len % WORD as u64 != 0 {
      return Err(Error::Misaligned {
        path: path.to_path_buf(),
        len,
      });
    }
    Ok(Self::new(file))
  }
}

impl<R: Read> PostingReader<R> {
  pub fn new(src: R) -> Self {
    Self {
      src,
      buf: vec![0; CHUNK].into_boxed_slice(),
      pos: 0,
      end: 0,
    }
  }

  /// Refill the chunk, keep unread bytes at the front.
  /// Returns false when no byte is left.
  /// 重新填充缓冲区，未读字节移到开头。无剩余字节时返回 false。
  fn refill(&mut self) -> Result<bool> {
    self.buf.copy_within(self.pos..self.end, 0);
    self.end -= self.pos;
    self.pos = 0;

    while self.end < WORD {
      match self.src.read(&mut self.buf[self.end..]) {
        Ok(0) => break,
        Ok(n) => self.end += n,
        Err(e) if e.kind() == ErrorKind::Interrupted => continue,
        Err(e) => return Err(e.into()),
      }
    }

    match self.end {
      0 => Ok(false),
      n if n < WORD => Err(Error::Stray { stray: n }),
      _ => Ok(true),
    }
  }

  #[inline]
  fn read_u32(&mut self) -> Result<Option<u32>> {
    if self.end - self.pos < WORD && !self.refill()? {
      return Ok(None);
    }
    let b = &self.buf[self.pos..self.pos + WORD];
    self.pos += WORD;
    Ok(Some(u32::from_ne_bytes([b[0], b[1], b[2], b[3]])))
  }

  /// Load exactly one record into `set`
  /// 加载恰好一条记录到 `set`
  ///
  /// `LoadNext::End` is returned only at a record boundary; a record cut
  /// short is `Error::Truncated`.
  /// 仅在记录边界返回 `LoadNext::End`；记录被截断则返回 `Error::Truncated`。
  pub fn load_next_set(&mut self, set: &mut Vec<u32>) -> Result<LoadNext> {
    set.clear();
    let Some(want) = self.read_u32()? else {
      return Ok(LoadNext::End);
    };
    set.reserve((want as usize).min(CHUNK));
    for got in 0..want {
      match self.read_u32()? {
        Some(v) => set.push(v),
        None => return Err(Error::Truncated { want, got }),
      }
    }
    Ok(LoadNext::Set)
  }
}

/// Write records in the reader's framing
/// 按读取器的格式写入记录
pub fn write_sets<'a, W: Write>(
  w: &mut W,
  sets: impl IntoIterator<Item = &'a [u32]>,
) -> Result<()> {
  for set in sets {
    w.write_all(&(set.len() as u32).to_ne_bytes())?;
    for v in set {
      w.write_all(&v.to_ne_bytes())?;
    }
  }
  Ok(())
}
