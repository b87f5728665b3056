use std::fmt::Write;

use crate::engine::indicator_row::IndicatorRow;
use crate::signal::verdict::Verdict;

/// 渲染单只股票的 markdown 分析报告
///
/// 纯字符串拼装，不访问时钟和文件系统；落盘由调用方负责。
pub fn render_report(code: &str, rows: &[IndicatorRow], verdict: &Verdict) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "# {} 技术分析报告\n", code);
    if let (Some(first), Some(latest)) = (rows.first(), rows.last()) {
        let _ = writeln!(
            report,
            "- 数据区间: {} 至 {}\n",
            first.bar.date, latest.bar.date
        );

        let _ = writeln!(report, "## 最新交易日数据\n");
        let _ = writeln!(report, "- 日期: {}", latest.bar.date);
        let _ = writeln!(report, "- 开盘价: {:.2}", latest.bar.open);
        let _ = writeln!(report, "- 最高价: {:.2}", latest.bar.high);
        let _ = writeln!(report, "- 最低价: {:.2}", latest.bar.low);
        let _ = writeln!(report, "- 收盘价: {:.2}", latest.bar.close);
        if let Some(change_pct) = verdict.change_pct {
            let _ = writeln!(report, "- 涨跌幅: {:+.2}%", change_pct);
        }
        let _ = writeln!(report, "- 成交量: {}\n", latest.bar.volume);

        let _ = writeln!(report, "## 技术指标分析\n");

        let _ = writeln!(report, "### 移动平均线\n");
        let _ = writeln!(report, "- MA5: {}", fmt_opt(latest.ma5));
        let _ = writeln!(report, "- MA10: {}", fmt_opt(latest.ma10));
        let _ = writeln!(report, "- MA20: {}\n", fmt_opt(latest.ma20));
        let _ = writeln!(report, "{}：{}。\n", verdict.trend.label(), verdict.trend.advice());
        if let Some(cross) = verdict.ma_cross {
            let _ = writeln!(report, "当日形成{}。\n", cross.label());
        }

        let _ = writeln!(report, "### MACD\n");
        if let Some(item) = latest.macd {
            let _ = writeln!(report, "- DIF: {:.4}", item.dif);
            let _ = writeln!(report, "- DEA: {:.4}", item.dea);
            let _ = writeln!(report, "- MACD: {:.4}\n", item.macd);
        }
        let _ = writeln!(report, "{}：{}。\n", verdict.macd.label(), verdict.macd.advice());

        if let (Some(signal), Some(item)) = (verdict.kdj, latest.kdj) {
            let _ = writeln!(report, "### KDJ\n");
            let _ = writeln!(report, "- K值: {:.2}", item.k);
            let _ = writeln!(report, "- D值: {:.2}", item.d);
            let _ = writeln!(report, "- J值: {:.2}\n", item.j);
            let _ = writeln!(report, "{}：{}。\n", signal.label(), signal.advice());
        }

        if let (Some(signal), Some(metric)) = (verdict.boll, latest.boll) {
            let _ = writeln!(report, "### 布林带\n");
            let _ = writeln!(report, "- 上轨: {:.2}", metric.upper);
            let _ = writeln!(report, "- 中轨: {:.2}", metric.middle);
            let _ = writeln!(report, "- 下轨: {:.2}\n", metric.lower);
            let _ = writeln!(report, "{}：{}。\n", signal.label(), signal.advice());
        }

        if let (Some(signal), Some(rsi)) = (verdict.rsi, latest.rsi) {
            let _ = writeln!(report, "### RSI\n");
            let _ = writeln!(report, "- RSI: {:.2}\n", rsi);
            let _ = writeln!(report, "{}：{}。\n", signal.label(), signal.advice());
        }

        let _ = writeln!(report, "## 综合分析\n");
        let _ = writeln!(
            report,
            "**{}（评分 {}）：{}。**\n",
            verdict.overall.label(),
            verdict.score,
            verdict.overall.advice()
        );
    } else {
        let _ = writeln!(report, "暂无数据。\n");
    }

    report.push_str(
        "*注意：本分析报告仅基于技术指标生成，不构成投资建议。\
         投资决策需结合基本面分析和市场环境等多方面因素。*\n",
    );
    report
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "--".to_string(),
    }
}
