pub mod boll;
pub mod ema;
pub mod kdj;
pub mod macd;
pub mod rsi;
pub mod sma;
