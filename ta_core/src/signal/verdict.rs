use serde::{Deserialize, Serialize};

use crate::common::enums::{
    BollSignal, CrossEvent, KdjSignal, MacdSignal, OverallSignal, RsiSignal, TrendSignal,
};

/// 单次分类的咨询结论，临时产物，不落盘
///
/// kdj/rsi/boll 在规则集未启用或指标尚未起算时为 `None`。
/// 建议文案通过各信号枚举的 label()/advice() 获取。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub trend: TrendSignal,
    pub macd: MacdSignal,
    pub kdj: Option<KdjSignal>,
    pub rsi: Option<RsiSignal>,
    pub boll: Option<BollSignal>,
    pub overall: OverallSignal,
    /// 0-100，50 为中性
    pub score: u8,
    /// 相对前一交易日的涨跌幅（百分比）
    pub change_pct: Option<f64>,
    /// 当日新形成的 MA5/MA20 交叉
    pub ma_cross: Option<CrossEvent>,
}

impl Verdict {
    /// 指标全部未起算时的缺省结论
    pub fn neutral() -> Self {
        Self {
            trend: TrendSignal::Sideways,
            macd: MacdSignal::Neutral,
            kdj: None,
            rsi: None,
            boll: None,
            overall: OverallSignal::Neutral,
            score: 50,
            change_pct: None,
            ma_cross: None,
        }
    }
}
