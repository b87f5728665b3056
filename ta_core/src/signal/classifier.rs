use crate::common::enums::{
    BollSignal, CrossEvent, KdjSignal, MacdSignal, OverallSignal, RsiSignal, TrendSignal,
};
use crate::config::signal_config::{AggregationPolicy, SignalConfig};
use crate::engine::indicator_row::IndicatorRow;
use crate::signal::verdict::Verdict;

/// 信号分类器：把最新一行指标归类为咨询结论
///
/// 纯函数，未起算的指标一律视为无信号，绝不作为比较的真值。
#[derive(Debug, Clone)]
pub struct Classifier {
    config: SignalConfig,
}

impl Classifier {
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    pub fn classify(&self, latest: &IndicatorRow, previous: Option<&IndicatorRow>) -> Verdict {
        let trend = trend_signal(latest);
        let macd = macd_signal(latest);
        let kdj = self
            .config
            .use_kdj
            .then(|| latest.kdj.map(|item| kdj_signal(item.k, item.d, item.j)))
            .flatten();
        let rsi = self
            .config
            .use_rsi
            .then(|| latest.rsi.map(rsi_signal))
            .flatten();
        let boll = self
            .config
            .use_boll
            .then(|| latest.boll.map(|b| boll_signal(latest.bar.close, b.upper, b.middle, b.lower)))
            .flatten();

        // 每条启用的规则贡献 ±1/0；未起算的指标记 0 但仍计入分母
        let mut signals: Vec<f64> = vec![trend_contribution(trend), cross_contribution(macd)];
        if self.config.use_kdj {
            signals.push(kdj.map_or(0.0, kdj_contribution));
        }
        if self.config.use_rsi {
            signals.push(rsi.map_or(0.0, rsi_contribution));
        }
        if self.config.use_boll {
            signals.push(boll.map_or(0.0, boll_contribution));
        }

        let sum: f64 = signals.iter().sum();
        let mean = sum / signals.len() as f64;

        let overall = match self.config.aggregation {
            AggregationPolicy::MeanThreshold { threshold } => {
                if mean > threshold {
                    OverallSignal::Bullish
                } else if mean < -threshold {
                    OverallSignal::Bearish
                } else {
                    OverallSignal::Neutral
                }
            }
            AggregationPolicy::StrictCount { strong } => {
                if sum >= strong as f64 {
                    OverallSignal::StrongBullish
                } else if sum <= -(strong as f64) {
                    OverallSignal::StrongBearish
                } else if sum > 0.0 {
                    OverallSignal::Bullish
                } else if sum < 0.0 {
                    OverallSignal::Bearish
                } else {
                    OverallSignal::Neutral
                }
            }
        };

        Verdict {
            trend,
            macd,
            kdj,
            rsi,
            boll,
            overall,
            score: score_from_mean(mean),
            change_pct: change_pct(latest, previous),
            ma_cross: ma_cross(latest, previous),
        }
    }
}

fn trend_signal(row: &IndicatorRow) -> TrendSignal {
    let close = row.bar.close;
    if let (Some(ma5), Some(ma10), Some(ma20)) = (row.ma5, row.ma10, row.ma20) {
        if close > ma5 && ma5 > ma10 && ma10 > ma20 {
            return TrendSignal::StrongUptrend;
        }
        if close < ma5 && ma5 < ma10 && ma10 < ma20 {
            return TrendSignal::StrongDowntrend;
        }
    }
    if let (Some(ma5), Some(ma10)) = (row.ma5, row.ma10) {
        if close > ma5 && ma5 > ma10 {
            return TrendSignal::ShortUptrend;
        }
        if close < ma5 && ma5 < ma10 {
            return TrendSignal::ShortDowntrend;
        }
    }
    TrendSignal::Sideways
}

fn macd_signal(row: &IndicatorRow) -> MacdSignal {
    match row.macd {
        Some(item) if item.dif > item.dea && item.macd > 0.0 => MacdSignal::GoldenCross,
        Some(item) if item.dif < item.dea && item.macd < 0.0 => MacdSignal::DeathCross,
        _ => MacdSignal::Neutral,
    }
}

fn kdj_signal(k: f64, d: f64, j: f64) -> KdjSignal {
    if k > d && j > d {
        KdjSignal::GoldenCross
    } else if k < d && j < d {
        KdjSignal::DeathCross
    } else {
        KdjSignal::Neutral
    }
}

fn rsi_signal(rsi: f64) -> RsiSignal {
    if rsi > 70.0 {
        RsiSignal::Overbought
    } else if rsi < 30.0 {
        RsiSignal::Oversold
    } else {
        RsiSignal::Normal
    }
}

fn boll_signal(close: f64, upper: f64, middle: f64, lower: f64) -> BollSignal {
    if close > upper {
        BollSignal::AboveUpper
    } else if close < lower {
        BollSignal::BelowLower
    } else if close > middle {
        BollSignal::UpperHalf
    } else {
        BollSignal::LowerHalf
    }
}

fn trend_contribution(signal: TrendSignal) -> f64 {
    if signal.is_up() {
        1.0
    } else if signal.is_down() {
        -1.0
    } else {
        0.0
    }
}

fn cross_contribution(signal: MacdSignal) -> f64 {
    match signal {
        MacdSignal::GoldenCross => 1.0,
        MacdSignal::DeathCross => -1.0,
        MacdSignal::Neutral => 0.0,
    }
}

fn kdj_contribution(signal: KdjSignal) -> f64 {
    match signal {
        KdjSignal::GoldenCross => 1.0,
        KdjSignal::DeathCross => -1.0,
        KdjSignal::Neutral => 0.0,
    }
}

// 超买看空、超卖看多，与其他指标反向
fn rsi_contribution(signal: RsiSignal) -> f64 {
    match signal {
        RsiSignal::Overbought => -1.0,
        RsiSignal::Oversold => 1.0,
        RsiSignal::Normal => 0.0,
    }
}

// 突破上下轨强势与回调风险抵消，记 0
fn boll_contribution(signal: BollSignal) -> f64 {
    match signal {
        BollSignal::UpperHalf => 1.0,
        BollSignal::LowerHalf => -1.0,
        BollSignal::AboveUpper | BollSignal::BelowLower => 0.0,
    }
}

fn score_from_mean(mean: f64) -> u8 {
    ((mean + 1.0) * 50.0).round().clamp(0.0, 100.0) as u8
}

fn change_pct(latest: &IndicatorRow, previous: Option<&IndicatorRow>) -> Option<f64> {
    previous.map(|prev| (latest.bar.close - prev.bar.close) / prev.bar.close * 100.0)
}

fn ma_cross(latest: &IndicatorRow, previous: Option<&IndicatorRow>) -> Option<CrossEvent> {
    let prev = previous?;
    let (l5, l20) = (latest.ma5?, latest.ma20?);
    let (p5, p20) = (prev.ma5?, prev.ma20?);
    if l5 > l20 && p5 <= p20 {
        Some(CrossEvent::Golden)
    } else if l5 < l20 && p5 >= p20 {
        Some(CrossEvent::Death)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kline::bar::Bar;
    use crate::math::macd::MacdItem;
    use chrono::NaiveDate;

    fn row(close: f64) -> IndicatorRow {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        IndicatorRow::bare(
            Bar::new(date, close, close, close, close, 1000, close * 1000.0).unwrap(),
        )
    }

    fn macd_item(dif: f64, dea: f64) -> MacdItem {
        MacdItem {
            ema_fast: 0.0,
            ema_slow: 0.0,
            dif,
            dea,
            macd: 2.0 * (dif - dea),
        }
    }

    #[test]
    fn test_all_undefined_is_neutral() {
        let classifier = Classifier::new(SignalConfig::full());
        let bare = row(10.0);
        let verdict = classifier.classify(&bare, None);
        assert_eq!(verdict.trend, TrendSignal::Sideways);
        assert_eq!(verdict.macd, MacdSignal::Neutral);
        assert_eq!(verdict.kdj, None);
        assert_eq!(verdict.rsi, None);
        assert_eq!(verdict.boll, None);
        assert_eq!(verdict.overall, OverallSignal::Neutral);
        assert_eq!(verdict.score, 50);
        assert_eq!(verdict.change_pct, None);
        assert_eq!(verdict.ma_cross, None);
    }

    #[test]
    fn test_trend_priority_strong_uptrend() {
        let mut latest = row(110.0);
        latest.ma5 = Some(108.0);
        latest.ma10 = Some(105.0);
        latest.ma20 = Some(100.0);
        let verdict = Classifier::new(SignalConfig::trend_macd()).classify(&latest, None);
        assert_eq!(verdict.trend, TrendSignal::StrongUptrend);
    }

    #[test]
    fn test_trend_short_up_without_ma20() {
        let mut latest = row(110.0);
        latest.ma5 = Some(108.0);
        latest.ma10 = Some(105.0);
        let verdict = Classifier::new(SignalConfig::trend_macd()).classify(&latest, None);
        assert_eq!(verdict.trend, TrendSignal::ShortUptrend);
    }

    #[test]
    fn test_trend_undefined_ma10_is_sideways() {
        let mut latest = row(110.0);
        latest.ma5 = Some(108.0);
        let verdict = Classifier::new(SignalConfig::trend_macd()).classify(&latest, None);
        assert_eq!(verdict.trend, TrendSignal::Sideways);
    }

    #[test]
    fn test_macd_rule() {
        let mut latest = row(10.0);
        latest.macd = Some(macd_item(0.5, 0.2));
        let verdict = Classifier::new(SignalConfig::trend_macd()).classify(&latest, None);
        assert_eq!(verdict.macd, MacdSignal::GoldenCross);

        latest.macd = Some(macd_item(-0.5, -0.2));
        let verdict = Classifier::new(SignalConfig::trend_macd()).classify(&latest, None);
        assert_eq!(verdict.macd, MacdSignal::DeathCross);

        // DIF 与 DEA 持平：中性
        latest.macd = Some(macd_item(0.3, 0.3));
        let verdict = Classifier::new(SignalConfig::trend_macd()).classify(&latest, None);
        assert_eq!(verdict.macd, MacdSignal::Neutral);
    }

    #[test]
    fn test_mean_threshold_aggregation() {
        let mut latest = row(110.0);
        latest.ma5 = Some(108.0);
        latest.ma10 = Some(105.0);
        latest.ma20 = Some(100.0);
        latest.macd = Some(macd_item(0.5, 0.2));
        // trend +1, macd +1 → mean 1.0 → 偏多
        let verdict = Classifier::new(SignalConfig::trend_macd()).classify(&latest, None);
        assert_eq!(verdict.overall, OverallSignal::Bullish);
        assert_eq!(verdict.score, 100);
    }

    #[test]
    fn test_mean_threshold_neutral_band() {
        let mut latest = row(110.0);
        latest.ma5 = Some(108.0);
        latest.ma10 = Some(105.0);
        latest.ma20 = Some(100.0);
        // trend +1, macd 0 → mean 0.5 → 偏多; 加入三条未起算规则后 mean 0.2 → 中性
        let verdict = Classifier::new(SignalConfig::trend_macd()).classify(&latest, None);
        assert_eq!(verdict.overall, OverallSignal::Bullish);
        let verdict = Classifier::new(SignalConfig::full()).classify(&latest, None);
        assert_eq!(verdict.overall, OverallSignal::Neutral);
        assert_eq!(verdict.score, 60);
    }

    #[test]
    fn test_strict_count_aggregation() {
        let mut latest = row(110.0);
        latest.ma5 = Some(108.0);
        latest.ma10 = Some(105.0);
        latest.ma20 = Some(100.0);
        latest.macd = Some(macd_item(0.5, 0.2));
        let verdict = Classifier::new(SignalConfig::strict()).classify(&latest, None);
        // trend +1, macd +1 → 净和 2 → 强烈看涨
        assert_eq!(verdict.overall, OverallSignal::StrongBullish);

        latest.macd = Some(macd_item(0.3, 0.3));
        let verdict = Classifier::new(SignalConfig::strict()).classify(&latest, None);
        // trend +1, macd 0 → 净和 1 → 温和偏多
        assert_eq!(verdict.overall, OverallSignal::Bullish);
    }

    #[test]
    fn test_rsi_contrarian_contribution() {
        let mut latest = row(50.0);
        latest.rsi = Some(80.0);
        let config = SignalConfig {
            use_kdj: false,
            use_boll: false,
            ..SignalConfig::full()
        };
        let verdict = Classifier::new(config).classify(&latest, None);
        assert_eq!(verdict.rsi, Some(RsiSignal::Overbought));
        // trend 0, macd 0, rsi −1 → mean −1/3 → 偏空
        assert_eq!(verdict.overall, OverallSignal::Bearish);
    }

    #[test]
    fn test_change_pct_and_ma_cross() {
        let mut latest = row(102.0);
        latest.ma5 = Some(101.0);
        latest.ma20 = Some(100.0);
        let mut prev = row(100.0);
        prev.ma5 = Some(99.5);
        prev.ma20 = Some(100.0);
        let verdict = Classifier::new(SignalConfig::full()).classify(&latest, Some(&prev));
        assert!((verdict.change_pct.unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(verdict.ma_cross, Some(CrossEvent::Golden));

        // 前一日已在上方：不算新交叉
        prev.ma5 = Some(100.5);
        let verdict = Classifier::new(SignalConfig::full()).classify(&latest, Some(&prev));
        assert_eq!(verdict.ma_cross, None);
    }
}
