use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use intbench::{BenchConf, Report, Result, run_all, write_report};
use intbench_data::{DataCtx, SEED};
use log::{error, info};

#[derive(Parser)]
#[command(name = "intbench", about = "Integer sequence compression benchmarks", version)]
struct Cli {
  /// Directory holding gov2.sorted and ts.txt
  #[arg(long)]
  data_dir: PathBuf,
  /// Measured iterations per case
  #[arg(long, default_value_t = 10)]
  iters: u64,
  /// Untimed warmup iterations per case
  #[arg(long, default_value_t = 1)]
  warmup: u64,
  /// Seed of the random sorted sets
  #[arg(long, default_value_t = SEED)]
  seed: u64,
  /// Random set sizes, comma separated (default 100 to 10M, x10 steps)
  #[arg(long, value_delimiter = ',')]
  sizes: Vec<usize>,
  /// Only run cases whose name contains this
  #[arg(long)]
  filter: Option<String>,
  /// Report output directory
  #[arg(long, default_value = "report")]
  report_dir: PathBuf,
}

impl Cli {
  fn conf(self) -> (PathBuf, BenchConf) {
    let mut conf = BenchConf::default()
      .iters(self.iters)
      .warmup(self.warmup)
      .seed(self.seed)
      .filter(self.filter)
      .report_dir(self.report_dir);
    if !self.sizes.is_empty() {
      conf = conf.sizes(self.sizes);
    }
    (self.data_dir, conf)
  }
}

fn run(data_dir: PathBuf, conf: BenchConf) -> Result<()> {
  let ctx = DataCtx::new(data_dir, conf.seed);
  info!("data dir {}, seed {}", ctx.dir().display(), ctx.seed());
  // Both files must be usable before any measurement starts
  drop(ctx.gov2()?);
  ctx.timestamps()?;

  let cases = run_all(&ctx, &conf)?;
  let dir = conf.report_dir.clone();
  let path = write_report(&dir, &Report { conf, cases })?;
  info!("report saved: {}", path.display());
  Ok(())
}

fn main() -> ExitCode {
  log_init::init();
  let (data_dir, conf) = Cli::parse().conf();
  match run(data_dir, conf) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{e}");
      ExitCode::FAILURE
    }
  }
}
