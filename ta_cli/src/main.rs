use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use ta_core::signal::report::render_report;
use ta_core::{AnalyzeConfig, Bar, BarSeries, Classifier, IndicatorEngine, SignalConfig};

/// 批量生成A股日线技术分析报告
#[derive(Debug, Parser)]
#[command(name = "ta_cli", version, about)]
struct Args {
    /// CSV数据目录，每个文件一只股票（date,open,high,low,close,volume,amount）
    data_dir: PathBuf,

    /// 报告输出目录
    #[arg(long, default_value = "reports")]
    out: PathBuf,

    /// 综合信号聚合策略
    #[arg(long, value_enum, default_value = "mean")]
    policy: Policy,

    /// 额外输出 JSON 结论
    #[arg(long)]
    json: bool,

    /// 自动修复可修复的高低价错误
    #[arg(long)]
    autofix: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// 贡献均值过 ±0.3 阈值
    Mean,
    /// 贡献净和过 ±2 档位
    Strict,
}

#[derive(Debug, Deserialize)]
struct CsvBar {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
    amount: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut engine_config = AnalyzeConfig::default();
    engine_config.autofix = args.autofix;
    let engine = IndicatorEngine::new(engine_config);
    let classifier = Classifier::new(match args.policy {
        Policy::Mean => SignalConfig::full(),
        Policy::Strict => SignalConfig::strict(),
    });

    fs::create_dir_all(&args.out)?;

    let mut processed = 0usize;
    for entry in fs::read_dir(&args.data_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("csv") {
            continue;
        }
        match process_csv_file(&path, &engine, &classifier, &args.out, args.json) {
            Ok(()) => processed += 1,
            Err(e) => error!(file = %path.display(), "skipped: {}", e),
        }
    }

    info!(processed, "analysis finished");
    Ok(())
}

fn process_csv_file(
    path: &Path,
    engine: &IndicatorEngine,
    classifier: &Classifier,
    out_dir: &Path,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let code = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string();
    info!(code = %code, file = %path.display(), "processing");

    let mut rdr = csv::Reader::from_path(path)?;
    let mut bars = Vec::new();
    for result in rdr.deserialize() {
        let rec: CsvBar = result?;
        bars.push(Bar {
            date: rec.date,
            open: rec.open,
            high: rec.high,
            low: rec.low,
            close: rec.close,
            volume: rec.volume,
            amount: rec.amount,
        });
    }

    let series = BarSeries::from_bars(bars, engine.config().autofix)?;
    if series.is_empty() {
        warn!(code = %code, "no rows, skipping");
        return Ok(());
    }

    let rows = engine.compute(&series);
    let latest = rows.last().expect("rows non-empty");
    let previous = rows.len().checked_sub(2).and_then(|i| rows.get(i));
    let verdict = classifier.classify(latest, previous);

    info!(
        code = %code,
        trend = %verdict.trend,
        overall = %verdict.overall,
        score = verdict.score,
        "classified"
    );

    let report = render_report(&code, &rows, &verdict);
    let report_path = out_dir.join(format!("{}_analysis_report.md", code));
    fs::write(&report_path, report)?;
    info!(code = %code, file = %report_path.display(), "report written");

    if json {
        let json_path = out_dir.join(format!("{}_verdict.json", code));
        fs::write(&json_path, serde_json::to_string_pretty(&verdict)?)?;
        info!(code = %code, file = %json_path.display(), "verdict written");
    }

    Ok(())
}
