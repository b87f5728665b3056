use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// 趋势信号，按均线排列分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum TrendSignal {
    #[strum(serialize = "STRONG_UPTREND")]
    StrongUptrend,
    #[strum(serialize = "STRONG_DOWNTREND")]
    StrongDowntrend,
    #[strum(serialize = "SHORT_UPTREND")]
    ShortUptrend,
    #[strum(serialize = "SHORT_DOWNTREND")]
    ShortDowntrend,
    #[strum(serialize = "SIDEWAYS")]
    Sideways,
}

impl TrendSignal {
    pub fn label(&self) -> &'static str {
        match self {
            TrendSignal::StrongUptrend => "强势上涨趋势",
            TrendSignal::StrongDowntrend => "强势下跌趋势",
            TrendSignal::ShortUptrend => "短期上涨趋势",
            TrendSignal::ShortDowntrend => "短期下跌趋势",
            TrendSignal::Sideways => "震荡整理",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            TrendSignal::StrongUptrend => "市场呈现强势上涨趋势，可考虑持有或适量买入",
            TrendSignal::StrongDowntrend => "市场呈现强势下跌趋势，建议观望或减仓",
            TrendSignal::ShortUptrend => "短期呈现上涨趋势，可适量参与",
            TrendSignal::ShortDowntrend => "短期呈现下跌趋势，建议谨慎参与",
            TrendSignal::Sideways => "市场处于震荡整理阶段，建议观望或轻仓参与",
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, TrendSignal::StrongUptrend | TrendSignal::ShortUptrend)
    }

    pub fn is_down(&self) -> bool {
        matches!(self, TrendSignal::StrongDowntrend | TrendSignal::ShortDowntrend)
    }
}

/// MACD信号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum MacdSignal {
    #[strum(serialize = "GOLDEN_CROSS")]
    GoldenCross,
    #[strum(serialize = "DEATH_CROSS")]
    DeathCross,
    #[strum(serialize = "NEUTRAL")]
    Neutral,
}

impl MacdSignal {
    pub fn label(&self) -> &'static str {
        match self {
            MacdSignal::GoldenCross => "MACD金叉且柱线为正",
            MacdSignal::DeathCross => "MACD死叉且柱线为负",
            MacdSignal::Neutral => "MACD中性",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            MacdSignal::GoldenCross => "MACD指标显示买入信号",
            MacdSignal::DeathCross => "MACD指标显示卖出信号",
            MacdSignal::Neutral => "MACD指标显示中性信号",
        }
    }
}

/// KDJ信号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum KdjSignal {
    #[strum(serialize = "GOLDEN_CROSS")]
    GoldenCross,
    #[strum(serialize = "DEATH_CROSS")]
    DeathCross,
    #[strum(serialize = "NEUTRAL")]
    Neutral,
}

impl KdjSignal {
    pub fn label(&self) -> &'static str {
        match self {
            KdjSignal::GoldenCross => "KDJ金叉",
            KdjSignal::DeathCross => "KDJ死叉",
            KdjSignal::Neutral => "KDJ中性",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            KdjSignal::GoldenCross => "KDJ指标显示买入信号",
            KdjSignal::DeathCross => "KDJ指标显示卖出信号",
            KdjSignal::Neutral => "KDJ指标显示中性信号",
        }
    }
}

/// RSI信号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum RsiSignal {
    #[strum(serialize = "OVERBOUGHT")]
    Overbought,
    #[strum(serialize = "OVERSOLD")]
    Oversold,
    #[strum(serialize = "NORMAL")]
    Normal,
}

impl RsiSignal {
    pub fn label(&self) -> &'static str {
        match self {
            RsiSignal::Overbought => "RSI超买",
            RsiSignal::Oversold => "RSI超卖",
            RsiSignal::Normal => "RSI正常",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            RsiSignal::Overbought => "RSI指标显示超买，注意回调风险",
            RsiSignal::Oversold => "RSI指标显示超卖，可能出现反弹",
            RsiSignal::Normal => "RSI指标显示正常区间",
        }
    }
}

/// 布林带信号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum BollSignal {
    #[strum(serialize = "ABOVE_UPPER")]
    AboveUpper,
    #[strum(serialize = "BELOW_LOWER")]
    BelowLower,
    #[strum(serialize = "UPPER_HALF")]
    UpperHalf,
    #[strum(serialize = "LOWER_HALF")]
    LowerHalf,
}

impl BollSignal {
    pub fn label(&self) -> &'static str {
        match self {
            BollSignal::AboveUpper => "价格突破布林上轨",
            BollSignal::BelowLower => "价格跌破布林下轨",
            BollSignal::UpperHalf => "价格在布林中轨和上轨之间",
            BollSignal::LowerHalf => "价格在布林中轨和下轨之间",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            BollSignal::AboveUpper => "股价可能超买，注意回调风险",
            BollSignal::BelowLower => "股价可能超卖，可能出现反弹",
            BollSignal::UpperHalf => "股价偏强，可能继续上涨",
            BollSignal::LowerHalf => "股价偏弱，可能继续下跌",
        }
    }
}

/// 综合信号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum OverallSignal {
    #[strum(serialize = "STRONG_BULLISH")]
    StrongBullish,
    #[strum(serialize = "BULLISH")]
    Bullish,
    #[strum(serialize = "NEUTRAL")]
    Neutral,
    #[strum(serialize = "BEARISH")]
    Bearish,
    #[strum(serialize = "STRONG_BEARISH")]
    StrongBearish,
}

impl OverallSignal {
    pub fn label(&self) -> &'static str {
        match self {
            OverallSignal::StrongBullish => "强烈看涨信号",
            OverallSignal::Bullish => "偏多信号",
            OverallSignal::Neutral => "中性信号",
            OverallSignal::Bearish => "偏空信号",
            OverallSignal::StrongBearish => "强烈看跌信号",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            OverallSignal::StrongBullish => "综合技术指标显示强烈的看涨信号",
            OverallSignal::Bullish => "综合技术指标偏多，可考虑适量买入",
            OverallSignal::Neutral => "综合技术指标中性，建议观望等待",
            OverallSignal::Bearish => "综合技术指标偏空，建议观望或减仓",
            OverallSignal::StrongBearish => "综合技术指标显示强烈的看跌信号",
        }
    }
}

/// 均线交叉事件（MA5/MA20 当日新形成的交叉）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum CrossEvent {
    #[strum(serialize = "GOLDEN")]
    Golden,
    #[strum(serialize = "DEATH")]
    Death,
}

impl CrossEvent {
    pub fn label(&self) -> &'static str {
        match self {
            CrossEvent::Golden => "均线金叉",
            CrossEvent::Death => "均线死叉",
        }
    }
}
