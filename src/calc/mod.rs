//! EV 충전 관련 계산 모듈 모음.

pub mod charging_time;
pub mod constants;
pub mod cost;
pub mod emissions;
pub mod frequency;
pub mod tips;

pub use charging_time::*;
pub use cost::*;
pub use emissions::*;
pub use frequency::*;

/// 소수 `decimals` 자리로 반올림한다.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
