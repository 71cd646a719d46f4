// Delta transform with wrapping arithmetic
// 环绕算术的差分变换

/// Replace values by gaps to the previous value, return the last input value
/// 用与前一个值的差替换各值，返回最后一个原值
///
/// Wrapping keeps unsorted input lossless.
/// 环绕运算使未排序输入同样无损。
#[inline]
pub fn delta_encode(prev: u32, vals: &mut [u32]) -> u32 {
  let mut prev = prev;
  for v in vals.iter_mut() {
    let cur = *v;
    *v = cur.wrapping_sub(prev);
    prev = cur;
  }
  prev
}

/// Prefix-sum gaps back to values, return the last value
/// 将差值前缀求和还原，返回最后一个值
#[inline]
pub fn delta_decode(prev: u32, vals: &mut [u32]) -> u32 {
  let mut prev = prev;
  for v in vals.iter_mut() {
    prev = prev.wrapping_add(*v);
    *v = prev;
  }
  prev
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_delta_unsorted() {
    let orig = vec![5u32, 3, u32::MAX, 0, 7];
    let mut v = orig.clone();
    let last = delta_encode(0, &mut v);
    assert_eq!(last, 7);
    assert_eq!(v[0], 5);
    assert_eq!(v[1], 3u32.wrapping_sub(5));
    delta_decode(0, &mut v);
    assert_eq!(v, orig);
  }
}
