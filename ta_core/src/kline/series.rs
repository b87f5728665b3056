use crate::common::ta_error::{ErrCode, TaError};
use crate::kline::bar::Bar;

/// 按日期升序排列的K线序列
///
/// Dates are strictly increasing; calendar gaps from non-trading days are
/// kept as-is, never interpolated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSeries {
    lst: Vec<Bar>,
}

impl BarSeries {
    pub fn new() -> Self {
        Self { lst: Vec::new() }
    }

    /// Build a series from raw bars, validating each one. With autofix,
    /// repairable price inconsistencies are clamped instead of failing.
    pub fn from_bars(bars: Vec<Bar>, autofix: bool) -> Result<Self, TaError> {
        let mut series = Self::new();
        for mut bar in bars {
            bar.check(autofix)?;
            series.push(bar)?;
        }
        Ok(series)
    }

    /// Append a bar. The date must be strictly greater than the last one.
    pub fn push(&mut self, bar: Bar) -> Result<(), TaError> {
        if let Some(last) = self.lst.last() {
            if bar.date <= last.date {
                return Err(TaError::new(
                    format!(
                        "bar date {} is not after last date {}",
                        bar.date, last.date
                    ),
                    ErrCode::KlNotMonotonous,
                ));
            }
        }
        self.lst.push(bar);
        Ok(())
    }

    pub fn last(&self) -> Option<&Bar> {
        self.lst.last()
    }

    pub fn len(&self) -> usize {
        self.lst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lst.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.lst.iter()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.lst
    }
}

impl std::ops::Index<usize> for BarSeries {
    type Output = Bar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lst[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(date: &str, close: f64) -> Bar {
        let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Bar::new(d, close, close, close, close, 100, close * 100.0).unwrap()
    }

    #[test]
    fn test_push_ascending() {
        let mut series = BarSeries::new();
        series.push(bar("2024-01-02", 10.0)).unwrap();
        series.push(bar("2024-01-03", 10.1)).unwrap();
        // 周末跳空
        series.push(bar("2024-01-08", 10.2)).unwrap();
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_push_rejects_non_monotonic() {
        let mut series = BarSeries::new();
        series.push(bar("2024-01-03", 10.0)).unwrap();
        let err = series.push(bar("2024-01-03", 10.1)).unwrap_err();
        assert_eq!(err.errcode, ErrCode::KlNotMonotonous);
        let err = series.push(bar("2024-01-02", 10.1)).unwrap_err();
        assert_eq!(err.errcode, ErrCode::KlNotMonotonous);
    }

    #[test]
    fn test_from_bars() {
        let series =
            BarSeries::from_bars(vec![bar("2024-01-02", 10.0), bar("2024-01-03", 10.1)], false)
                .unwrap();
        assert_eq!(series[0].close, 10.0);
        assert_eq!(series.last().unwrap().close, 10.1);
    }
}
