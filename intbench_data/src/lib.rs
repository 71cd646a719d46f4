// Integer sequence datasets for codec benchmarks
// 编解码基准测试的整数序列数据集

#![cfg_attr(docsrs, feature(doc_cfg))]

mod ctx;
mod error;
mod posting;
mod random;
mod stats;
mod timestamps;

pub use ctx::{DataCtx, GOV2_FILE, TS_FILE};
pub use error::{Error, Result};
pub use posting::{CHUNK, LoadNext, PostingReader, write_sets};
pub use random::{SEED, size_seed, sorted_set};
pub use stats::SeqStats;
pub use timestamps::{load_timestamps, parse_timestamps};
