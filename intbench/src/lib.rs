// Integer compression benchmark harness
// 整数压缩基准测试框架

mod adapter;
mod case;
mod error;
mod latency;
mod metrics;
mod report;
mod runner;
mod split;

pub use adapter::{BlockAdapter, SLACK};
pub use case::{Case, CodecKind, Dataset, Op, cases, run_all};
pub use error::{Error, Result};
pub use latency::{IterHistogram, IterStats};
pub use metrics::{CaseMetrics, CompressionStats};
pub use report::{CaseReport, REPORT_FILE, Report, fmt_ns, write_report};
pub use runner::{BenchConf, Bencher, Timer};
pub use split::BlockSplit;
