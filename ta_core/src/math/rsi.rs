use std::collections::VecDeque;

/// 相对强弱指标
///
/// 涨跌幅取日间收盘差的正负部分，各自做 period 日滚动平均。
/// 平均跌幅为零时 RSI 定义为 100。
#[derive(Debug)]
pub struct Rsi {
    period: usize,
    last_close: Option<f64>,
    gains: VecDeque<f64>,
    losses: VecDeque<f64>,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            last_close: None,
            gains: VecDeque::with_capacity(period + 1),
            losses: VecDeque::with_capacity(period + 1),
        }
    }

    pub fn add(&mut self, close: f64) -> Option<f64> {
        let last = match self.last_close.replace(close) {
            Some(last) => last,
            None => return None,
        };

        let change = close - last;
        self.gains.push_back(change.max(0.0));
        self.losses.push_back((-change).max(0.0));
        if self.gains.len() > self.period {
            self.gains.pop_front();
            self.losses.pop_front();
        }
        if self.gains.len() < self.period {
            return None;
        }

        let avg_gain = self.gains.iter().sum::<f64>() / self.period as f64;
        let avg_loss = self.losses.iter().sum::<f64>() / self.period as f64;

        let rsi = if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        };
        Some(rsi.clamp(0.0, 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_before_enough_deltas() {
        let mut rsi = Rsi::new(14);
        for i in 0..14 {
            assert!(rsi.add(100.0 + i as f64).is_none());
        }
        // 第15根K线给出第14个差值
        assert!(rsi.add(114.0).is_some());
    }

    #[test]
    fn test_zero_loss_is_hundred() {
        let mut rsi = Rsi::new(14);
        let mut last = None;
        for i in 0..20 {
            last = rsi.add(100.0 + i as f64);
        }
        assert_eq!(last.unwrap(), 100.0);
    }

    #[test]
    fn test_flat_series_is_hundred() {
        let mut rsi = Rsi::new(14);
        let mut last = None;
        for _ in 0..20 {
            last = rsi.add(50.0);
        }
        assert_eq!(last.unwrap(), 100.0);
    }

    #[test]
    fn test_bounded() {
        let mut rsi = Rsi::new(14);
        let closes = [
            10.0, 10.4, 10.1, 10.8, 10.2, 10.9, 10.5, 11.2, 10.7, 11.4, 11.0, 11.8, 11.1, 12.0,
            11.3, 12.2, 11.6, 12.5, 11.9,
        ];
        for close in closes {
            if let Some(v) = rsi.add(close) {
                assert!((0.0..=100.0).contains(&v));
            }
        }
    }
}
