//! 충전 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod calc;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod fields;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod rates;
pub mod store;
pub mod ui_cli;
pub mod units;
