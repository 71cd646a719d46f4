// Codec contract shared by every scheme under benchmark
// 所有被测方案共享的编解码约定

use crate::{Error, Result};

/// Integer sequence codec / 整数序列编解码器
///
/// Output units are bytes, so the returned encoded length is an exact byte count.
/// 输出单位为字节，返回的编码长度即精确字节数。
pub trait IntCodec {
  /// Codec name used in case names / 用于用例名的编解码器名称
  const NAME: &'static str;

  /// Block granularity, 1 means unconstrained
  /// 块粒度，1 表示无约束
  const BLOCK: usize;

  /// Upper bound of encoded bytes for `n` values
  /// `n` 个值编码后的字节上界
  fn max_encoded_len(n: usize) -> usize;

  /// Encode `input` into `out`, return bytes written
  /// 将 `input` 编码到 `out`，返回写入字节数
  fn encode(&mut self, input: &[u32], out: &mut [u8]) -> Result<usize>;

  /// Decode `input` into `out`, return values written
  /// 将 `input` 解码到 `out`，返回写入值个数
  fn decode(&mut self, input: &[u8], out: &mut [u32]) -> Result<usize>;
}

/// Value count as a u32 header / 以 u32 头部表示的值个数
#[inline]
pub(crate) fn count_header(len: usize) -> Result<u32> {
  u32::try_from(len).map_err(|_| Error::TooLong { len })
}
