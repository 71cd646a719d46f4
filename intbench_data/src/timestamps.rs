// Text timestamp loader
// 文本时间戳加载器

use std::path::Path;

use crate::{Error, Result};

/// Parse whitespace separated decimal u32 values
/// 解析空白分隔的十进制 u32 值
pub fn parse_timestamps(txt: &str) -> Result<Vec<u32>> {
  txt
    .split_ascii_whitespace()
    .enumerate()
    .map(|(pos, token)| {
      token.parse::<u32>().map_err(|_| Error::Parse {
        pos,
        token: token.to_owned(),
      })
    })
    .collect()
}

/// Load timestamps from a text file / 从文本文件加载时间戳
pub fn load_timestamps(path: impl AsRef<Path>) -> Result<Vec<u32>> {
  let path = path.as_ref();
  let txt = std::fs::read_to_string(path).map_err(|source| Error::Open {
    path: path.to_path_buf(),
    source,
  })?;
  parse_timestamps(&txt)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse() {
    let v = parse_timestamps("1 2\n3\r\n  4\t5\n").unwrap();
    assert_eq!(v, [1, 2, 3, 4, 5]);
    assert!(parse_timestamps("").unwrap().is_empty());
  }

  #[test]
  fn test_parse_bad_token() {
    let err = parse_timestamps("7 8 -1 9").unwrap_err();
    assert!(matches!(err, Error::Parse { pos: 2, ref token } if token == "-1"));
    assert!(parse_timestamps("4294967296").is_err());
  }
}
