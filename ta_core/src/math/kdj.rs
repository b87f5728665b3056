use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::math::ema::Ema;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KdjItem {
    pub k: f64,
    pub d: f64,
    pub j: f64,
}

/// KDJ 随机指标
///
/// RSV 基于最近 rsv_period 根K线的最高/最低区间；区间走平时 RSV 无定义，
/// 不作除零处理。K、D 为 com=2 (α=1/3) 的指数平滑，以首个有定义的 RSV
/// 为种子；RSV 无定义的当日 K、D 维持前值。
#[derive(Debug)]
pub struct Kdj {
    rsv_period: usize,
    highs: VecDeque<f64>,
    lows: VecDeque<f64>,
    k: Ema,
    d: Ema,
}

impl Kdj {
    pub fn new(rsv_period: usize) -> Self {
        Self {
            rsv_period,
            highs: VecDeque::with_capacity(rsv_period + 1),
            lows: VecDeque::with_capacity(rsv_period + 1),
            k: Ema::with_com(2),
            d: Ema::with_com(2),
        }
    }

    pub fn add(&mut self, high: f64, low: f64, close: f64) -> Option<KdjItem> {
        self.highs.push_back(high);
        self.lows.push_back(low);
        if self.highs.len() > self.rsv_period {
            self.highs.pop_front();
            self.lows.pop_front();
        }
        if self.highs.len() < self.rsv_period {
            return None;
        }

        let highest = self.highs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let lowest = self.lows.iter().copied().fold(f64::INFINITY, f64::min);

        if highest > lowest {
            let rsv = (close - lowest) / (highest - lowest) * 100.0;
            let k = self.k.add(rsv);
            let d = self.d.add(k);
            Some(KdjItem {
                k,
                d,
                j: 3.0 * k - 2.0 * d,
            })
        } else {
            // 区间走平：K、D 维持前值，尚未起算时保持无定义
            match (self.k.value(), self.d.value()) {
                (Some(k), Some(d)) => Some(KdjItem {
                    k,
                    d,
                    j: 3.0 * k - 2.0 * d,
                }),
                _ => None,
            }
        }
    }
}
