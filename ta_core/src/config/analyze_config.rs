use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::common::ta_error::{ErrCode, TaError};

/// Key-consuming view over a raw JSON config map. Leftover keys after
/// construction are a parameter error, so typos never pass silently.
#[derive(Debug)]
pub struct ConfigWithCheck {
    conf: HashMap<String, serde_json::Value>,
}

impl ConfigWithCheck {
    pub fn new(conf: HashMap<String, serde_json::Value>) -> Self {
        Self { conf }
    }

    pub fn get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, TaError> {
        match self.conf.remove(key) {
            None => Ok(None),
            Some(v) => serde_json::from_value(v).map(Some).map_err(|e| {
                TaError::new(
                    format!("invalid value for {}: {}", key, e),
                    ErrCode::ConfigError,
                )
            }),
        }
    }

    pub fn check(&self) -> Result<(), TaError> {
        if let Some(key) = self.conf.keys().next() {
            return Err(TaError::new(
                format!("unknown para = {}", key),
                ErrCode::ParaError,
            ));
        }
        Ok(())
    }
}

/// 指标引擎配置
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeConfig {
    pub macd_fast: u32,
    pub macd_slow: u32,
    pub macd_signal: u32,
    pub cal_kdj: bool,
    pub cal_rsi: bool,
    pub cal_boll: bool,
    pub kdj_cycle: usize,
    pub rsi_cycle: usize,
    pub boll_n: usize,
    pub boll_width: f64,
    /// 数据接入时自动修复可修复的高低价错误
    pub autofix: bool,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            cal_kdj: true,
            cal_rsi: true,
            cal_boll: true,
            kdj_cycle: 9,
            rsi_cycle: 14,
            boll_n: 20,
            boll_width: 2.0,
            autofix: false,
        }
    }
}

impl AnalyzeConfig {
    pub fn new(conf: Option<HashMap<String, serde_json::Value>>) -> Result<Self, TaError> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());
        let defaults = Self::default();

        let config = Self {
            macd_fast: conf.get("macd_fast")?.unwrap_or(defaults.macd_fast),
            macd_slow: conf.get("macd_slow")?.unwrap_or(defaults.macd_slow),
            macd_signal: conf.get("macd_signal")?.unwrap_or(defaults.macd_signal),
            cal_kdj: conf.get("cal_kdj")?.unwrap_or(defaults.cal_kdj),
            cal_rsi: conf.get("cal_rsi")?.unwrap_or(defaults.cal_rsi),
            cal_boll: conf.get("cal_boll")?.unwrap_or(defaults.cal_boll),
            kdj_cycle: conf.get("kdj_cycle")?.unwrap_or(defaults.kdj_cycle),
            rsi_cycle: conf.get("rsi_cycle")?.unwrap_or(defaults.rsi_cycle),
            boll_n: conf.get("boll_n")?.unwrap_or(defaults.boll_n),
            boll_width: conf.get("boll_width")?.unwrap_or(defaults.boll_width),
            autofix: conf.get("autofix")?.unwrap_or(defaults.autofix),
        };
        conf.check()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), TaError> {
        if self.macd_fast == 0 || self.macd_fast >= self.macd_slow {
            return Err(TaError::new(
                format!(
                    "macd_fast={} must be positive and less than macd_slow={}",
                    self.macd_fast, self.macd_slow
                ),
                ErrCode::ParaError,
            ));
        }
        if self.macd_signal == 0 {
            return Err(TaError::new("macd_signal must be positive", ErrCode::ParaError));
        }
        if self.kdj_cycle == 0 || self.rsi_cycle == 0 || self.boll_n < 2 {
            return Err(TaError::new(
                "indicator cycles must be positive (boll_n >= 2)",
                ErrCode::ParaError,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = AnalyzeConfig::new(None).unwrap();
        assert_eq!(config, AnalyzeConfig::default());
        assert_eq!(config.macd_fast, 12);
        assert_eq!(config.boll_n, 20);
    }

    #[test]
    fn test_overrides() {
        let mut conf = HashMap::new();
        conf.insert("rsi_cycle".to_string(), json!(7));
        conf.insert("cal_boll".to_string(), json!(false));
        let config = AnalyzeConfig::new(Some(conf)).unwrap();
        assert_eq!(config.rsi_cycle, 7);
        assert!(!config.cal_boll);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut conf = HashMap::new();
        conf.insert("rsi_cycel".to_string(), json!(7));
        let err = AnalyzeConfig::new(Some(conf)).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ParaError);
        assert!(err.msg.contains("rsi_cycel"));
    }

    #[test]
    fn test_bad_value_type_rejected() {
        let mut conf = HashMap::new();
        conf.insert("rsi_cycle".to_string(), json!("fourteen"));
        let err = AnalyzeConfig::new(Some(conf)).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ConfigError);
    }

    #[test]
    fn test_fast_ge_slow_rejected() {
        let mut conf = HashMap::new();
        conf.insert("macd_fast".to_string(), json!(26));
        let err = AnalyzeConfig::new(Some(conf)).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ParaError);
    }
}
