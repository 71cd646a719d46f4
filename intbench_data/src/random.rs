// Uniform random sorted sets
// 均匀随机有序集合

/// Default random seed / 默认随机种子
pub const SEED: u64 = 42;

/// Draw `len` uniform u32 values, sort and dedup.
/// The result may be shorter than `len`.
/// 抽取 `len` 个均匀分布的 u32，排序并去重。结果可能短于 `len`。
pub fn sorted_set(len: usize, rng: &mut fastrand::Rng) -> Vec<u32> {
  let mut v: Vec<u32> = (0..len).map(|_| rng.u32(..)).collect();
  v.sort_unstable();
  v.dedup();
  v
}

/// Per-size seed so every size is reproducible on its own
/// 按大小派生种子，使每个大小可独立复现
#[inline]
pub fn size_seed(seed: u64, len: usize) -> u64 {
  seed ^ (len as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15)
}
