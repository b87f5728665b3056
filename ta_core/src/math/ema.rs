/// 指数移动平均
///
/// Seeded with the first sample: EMA[0] = x[0]. Reproducibility tests pin
/// this convention; it is a choice, not the only defensible one.
#[derive(Debug)]
pub struct Ema {
    alpha: f64,
    value: Option<f64>,
}

impl Ema {
    /// Span-based smoothing, α = 2/(span+1).
    pub fn new(span: u32) -> Self {
        Self {
            alpha: 2.0 / (span as f64 + 1.0),
            value: None,
        }
    }

    /// Center-of-mass smoothing, α = 1/(1+com). KDJ 的 K/D 线用 com=2。
    pub fn with_com(com: u32) -> Self {
        Self {
            alpha: 1.0 / (1.0 + com as f64),
            value: None,
        }
    }

    pub fn add(&mut self, x: f64) -> f64 {
        let next = match self.value {
            Some(prev) => self.alpha * x + (1.0 - self.alpha) * prev,
            None => x,
        };
        self.value = Some(next);
        next
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_first_sample() {
        let mut ema = Ema::new(12);
        assert_eq!(ema.add(100.0), 100.0);
    }

    #[test]
    fn test_recurrence() {
        let mut ema = Ema::new(3);
        // α = 0.5
        ema.add(10.0);
        assert_eq!(ema.add(20.0), 15.0);
        assert_eq!(ema.add(30.0), 22.5);
    }

    #[test]
    fn test_com_alpha() {
        let mut ema = Ema::with_com(2);
        // α = 1/3
        ema.add(30.0);
        assert!((ema.add(60.0) - 40.0).abs() < 1e-12);
    }
}
