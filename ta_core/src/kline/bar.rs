use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::common::ta_error::{ErrCode, TaError};

/// 单个交易日的K线数据
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub amount: f64,
}

impl Bar {
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
        amount: f64,
    ) -> Result<Self, TaError> {
        let mut bar = Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            amount,
        };
        bar.check(false)?;
        Ok(bar)
    }

    /// Validate price consistency. With autofix the high/low bounds are
    /// clamped instead of failing.
    pub fn check(&mut self, autofix: bool) -> Result<(), TaError> {
        for (name, price) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if price <= 0.0 {
                return Err(TaError::new(
                    format!("{} {} price={} is not positive", self.date, name, price),
                    ErrCode::PriceBelowZero,
                ));
            }
        }
        if self.amount < 0.0 {
            return Err(TaError::new(
                format!("{} amount={} is negative", self.date, self.amount),
                ErrCode::KlDataInvalid,
            ));
        }

        let min_price = self.low.min(self.open).min(self.high).min(self.close);
        let max_price = self.low.max(self.open).max(self.high).max(self.close);

        if self.low > min_price {
            if autofix {
                warn!(date = %self.date, low = self.low, fixed = min_price, "autofix low");
                self.low = min_price;
            } else {
                return Err(TaError::new(
                    format!(
                        "{} low price={} is not min of [low={}, open={}, high={}, close={}]",
                        self.date, self.low, self.low, self.open, self.high, self.close
                    ),
                    ErrCode::KlDataInvalid,
                ));
            }
        }

        if self.high < max_price {
            if autofix {
                warn!(date = %self.date, high = self.high, fixed = max_price, "autofix high");
                self.high = max_price;
            } else {
                return Err(TaError::new(
                    format!(
                        "{} high price={} is not max of [low={}, open={}, high={}, close={}]",
                        self.date, self.high, self.low, self.open, self.high, self.close
                    ),
                    ErrCode::KlDataInvalid,
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_valid_bar() {
        let bar = Bar::new(date("2024-01-02"), 10.0, 10.5, 9.8, 10.2, 10000, 1.02e6);
        assert!(bar.is_ok());
    }

    #[test]
    fn test_non_positive_price() {
        let err = Bar::new(date("2024-01-02"), 10.0, 10.5, -0.1, 10.2, 0, 0.0).unwrap_err();
        assert_eq!(err.errcode, ErrCode::PriceBelowZero);
    }

    #[test]
    fn test_inconsistent_high_rejected() {
        let err = Bar::new(date("2024-01-02"), 10.0, 9.0, 8.5, 10.2, 0, 0.0).unwrap_err();
        assert_eq!(err.errcode, ErrCode::KlDataInvalid);
    }

    #[test]
    fn test_autofix_clamps_bounds() {
        let mut bar = Bar {
            date: date("2024-01-02"),
            open: 10.0,
            high: 9.0,
            low: 9.5,
            close: 10.2,
            volume: 100,
            amount: 1000.0,
        };
        bar.check(true).unwrap();
        assert_eq!(bar.high, 10.2);
        assert_eq!(bar.low, 9.0);
    }
}
