// Data context shared by all benchmark cases of one run
// 一次运行中所有基准用例共享的数据上下文
//
// Single-threaded: caches are filled once and only read afterwards.
// 单线程：缓存只填充一次，之后只读。

use std::{
  cell::{OnceCell, RefCell},
  collections::HashMap,
  path::{Path, PathBuf},
  rc::Rc,
};

use log::info;

use crate::{PostingReader, Result, SeqStats, load_timestamps, size_seed, sorted_set};

/// Binary posting lists file name / 二进制倒排列表文件名
pub const GOV2_FILE: &str = "gov2.sorted";

/// Text timestamps file name / 文本时间戳文件名
pub const TS_FILE: &str = "ts.txt";

pub struct DataCtx {
  dir: PathBuf,
  seed: u64,
  timestamps: OnceCell<Rc<[u32]>>,
  /// Generated sets keyed by requested size / 按请求大小缓存的生成集合
  random: RefCell<HashMap<usize, Rc<[u32]>>>,
}

impl DataCtx {
  pub fn new(dir: impl Into<PathBuf>, seed: u64) -> Self {
    Self {
      dir: dir.into(),
      seed,
      timestamps: OnceCell::new(),
      random: RefCell::new(HashMap::new()),
    }
  }

  #[inline]
  pub fn dir(&self) -> &Path {
    &self.dir
  }

  #[inline]
  pub fn seed(&self) -> u64 {
    self.seed
  }

  pub fn gov2_path(&self) -> PathBuf {
    self.dir.join(GOV2_FILE)
  }

  pub fn ts_path(&self) -> PathBuf {
    self.dir.join(TS_FILE)
  }

  /// Open a fresh posting list reader / 打开新的倒排列表读取器
  pub fn gov2(&self) -> Result<PostingReader> {
    PostingReader::open(self.gov2_path())
  }

  /// Timestamps, loaded on first call and kept for the context lifetime
  /// 时间戳，首次调用时加载并在上下文生命周期内保留
  pub fn timestamps(&self) -> Result<Rc<[u32]>> {
    if let Some(ts) = self.timestamps.get() {
      return Ok(ts.clone());
    }
    let path = self.ts_path();
    let ts: Rc<[u32]> = load_timestamps(&path)?.into();
    info!("timestamps {}: {}", path.display(), SeqStats::new(&ts));
    Ok(self.timestamps.get_or_init(|| ts).clone())
  }

  /// Random sorted set memoized by requested size.
  /// Its length is the post-dedup length.
  /// 按请求大小记忆化的随机有序集合，长度为去重后的长度。
  pub fn random(&self, len: usize) -> Rc<[u32]> {
    self
      .random
      .borrow_mut()
      .entry(len)
      .or_insert_with(|| {
        let mut rng = fastrand::Rng::with_seed(size_seed(self.seed, len));
        let set: Rc<[u32]> = sorted_set(len, &mut rng).into();
        info!("random {len}: {}", SeqStats::new(&set));
        set
      })
      .clone()
  }
}
