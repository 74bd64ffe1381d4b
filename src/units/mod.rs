//! 단위 정의 및 변환 모듈 모음.

pub mod consumption;
pub mod energy;
pub mod length;
pub mod temperature;

pub use consumption::{convert_consumption, ConsumptionUnit};
pub use energy::{convert_energy, EnergyUnit};
pub use length::{convert_length, LengthUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
