use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::common::ta_error::{ErrCode, TaError};
use crate::config::analyze_config::ConfigWithCheck;

/// 综合信号的聚合策略
///
/// 原始调用方在两种口径之间摇摆，这里统一为显式可选项：
/// 按贡献均值过阈值，或按带强弱档位的净计数。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AggregationPolicy {
    /// 贡献均值超过 ±threshold 判多/空，否则中性
    MeanThreshold { threshold: f64 },
    /// 贡献净和达到 ±strong 判强多/强空，非零判温和多/空
    StrictCount { strong: i32 },
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        AggregationPolicy::MeanThreshold { threshold: 0.3 }
    }
}

/// 信号分类器配置：启用哪些规则、用哪种聚合策略
///
/// 趋势与 MACD 规则始终参与。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    pub use_kdj: bool,
    pub use_rsi: bool,
    pub use_boll: bool,
    pub aggregation: AggregationPolicy,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl SignalConfig {
    /// 全指标规则集
    pub fn full() -> Self {
        Self {
            use_kdj: true,
            use_rsi: true,
            use_boll: true,
            aggregation: AggregationPolicy::default(),
        }
    }

    /// 仅均线趋势 + MACD 的精简规则集
    pub fn trend_macd() -> Self {
        Self {
            use_kdj: false,
            use_rsi: false,
            use_boll: false,
            aggregation: AggregationPolicy::default(),
        }
    }

    /// 全指标规则集，净计数聚合
    pub fn strict() -> Self {
        Self {
            use_kdj: true,
            use_rsi: true,
            use_boll: true,
            aggregation: AggregationPolicy::StrictCount { strong: 2 },
        }
    }

    pub fn new(conf: Option<HashMap<String, serde_json::Value>>) -> Result<Self, TaError> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());
        let defaults = Self::default();

        let aggregation = match conf.get::<String>("aggregation")? {
            None => defaults.aggregation,
            Some(name) => match name.as_str() {
                "mean" => AggregationPolicy::MeanThreshold {
                    threshold: conf.get("threshold")?.unwrap_or(0.3),
                },
                "strict" => AggregationPolicy::StrictCount {
                    strong: conf.get("strong")?.unwrap_or(2),
                },
                unknown => {
                    return Err(TaError::new(
                        format!("unknown aggregation={}", unknown),
                        ErrCode::ParaError,
                    ))
                }
            },
        };

        let config = Self {
            use_kdj: conf.get("use_kdj")?.unwrap_or(defaults.use_kdj),
            use_rsi: conf.get("use_rsi")?.unwrap_or(defaults.use_rsi),
            use_boll: conf.get("use_boll")?.unwrap_or(defaults.use_boll),
            aggregation,
        };
        conf.check()?;

        Ok(config)
    }
}
