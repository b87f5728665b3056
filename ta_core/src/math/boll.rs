use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollMetric {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// 布林带，中轨为 n 日均线，上下轨为中轨 ± width 倍标准差
///
/// 标准差取样本标准差（分母 n−1）。
#[derive(Debug)]
pub struct Boll {
    period: usize,
    width: f64,
    window: VecDeque<f64>,
}

impl Boll {
    pub fn new(period: usize, width: f64) -> Self {
        Self {
            period,
            width,
            window: VecDeque::with_capacity(period + 1),
        }
    }

    pub fn add(&mut self, close: f64) -> Option<BollMetric> {
        self.window.push_back(close);
        if self.window.len() > self.period {
            self.window.pop_front();
        }
        if self.window.len() < self.period {
            return None;
        }

        let middle = self.window.iter().sum::<f64>() / self.period as f64;
        let variance = self
            .window
            .iter()
            .map(|&x| (x - middle).powi(2))
            .sum::<f64>()
            / (self.period - 1) as f64;
        let std_dev = variance.sqrt();

        Some(BollMetric {
            upper: middle + self.width * std_dev,
            middle,
            lower: middle - self.width * std_dev,
        })
    }
}
