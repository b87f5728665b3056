use serde::{Deserialize, Serialize};

use crate::kline::bar::Bar;
use crate::math::{boll::BollMetric, kdj::KdjItem, macd::MacdItem};

/// 一根K线及其衍生指标
///
/// Each derived field stays `None` until its warm-up window is satisfied,
/// or when the indicator is disabled in the engine config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub bar: Bar,
    pub ma5: Option<f64>,
    pub ma10: Option<f64>,
    pub ma20: Option<f64>,
    pub macd: Option<MacdItem>,
    pub kdj: Option<KdjItem>,
    pub boll: Option<BollMetric>,
    pub rsi: Option<f64>,
}

impl IndicatorRow {
    pub fn bare(bar: Bar) -> Self {
        Self {
            bar,
            ma5: None,
            ma10: None,
            ma20: None,
            macd: None,
            kdj: None,
            boll: None,
            rsi: None,
        }
    }
}
