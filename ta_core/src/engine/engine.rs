use crate::config::analyze_config::AnalyzeConfig;
use crate::engine::indicator_row::IndicatorRow;
use crate::kline::series::BarSeries;
use crate::math::{boll::Boll, kdj::Kdj, macd::Macd, rsi::Rsi, sma::Sma};

/// 指标引擎：对K线序列批量计算衍生指标
///
/// compute 每次调用都重建内部模型，同一输入必然得到同一输出，
/// 可跨线程对多只股票并行调用。
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    config: AnalyzeConfig,
}

impl IndicatorEngine {
    pub fn new(config: AnalyzeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzeConfig {
        &self.config
    }

    /// Compute one IndicatorRow per input bar, in input order.
    pub fn compute(&self, series: &BarSeries) -> Vec<IndicatorRow> {
        let mut ma5 = Sma::new(5);
        let mut ma10 = Sma::new(10);
        let mut ma20 = Sma::new(20);
        let mut macd = Macd::new(
            self.config.macd_fast,
            self.config.macd_slow,
            self.config.macd_signal,
        );
        let mut kdj = self.config.cal_kdj.then(|| Kdj::new(self.config.kdj_cycle));
        let mut rsi = self.config.cal_rsi.then(|| Rsi::new(self.config.rsi_cycle));
        let mut boll = self
            .config
            .cal_boll
            .then(|| Boll::new(self.config.boll_n, self.config.boll_width));

        series
            .iter()
            .map(|bar| IndicatorRow {
                bar: *bar,
                ma5: ma5.add(bar.close),
                ma10: ma10.add(bar.close),
                ma20: ma20.add(bar.close),
                macd: Some(macd.add(bar.close)),
                kdj: kdj
                    .as_mut()
                    .and_then(|m| m.add(bar.high, bar.low, bar.close)),
                boll: boll.as_mut().and_then(|m| m.add(bar.close)),
                rsi: rsi.as_mut().and_then(|m| m.add(bar.close)),
            })
            .collect()
    }
}
