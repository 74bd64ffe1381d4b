use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    UnsupportedQuantity(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "unknown unit: {u}"),
            ConversionError::UnsupportedQuantity(q) => write!(f, "unsupported quantity: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `km`, `mi`, `C`, `F`, `kWh`, `MJ`, `kWh/100km`, `mi/kWh` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Distance => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Energy => {
            let from = parse_energy_unit(from_unit_str)?;
            let to = parse_energy_unit(to_unit_str)?;
            Ok(convert_energy(value, from, to))
        }
        QuantityKind::Consumption => {
            let from = parse_consumption_unit(from_unit_str)?;
            let to = parse_consumption_unit(to_unit_str)?;
            Ok(convert_consumption(value, from, to))
        }
    }
}

/// 물리량 이름과 단위 문자열로 변환한다. CLI `convert` 명령에서 사용한다.
pub fn convert_named(
    kind: &str,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let kind = QuantityKind::parse(kind)
        .ok_or_else(|| ConversionError::UnsupportedQuantity(kind.to_string()))?;
    convert(kind, value, from_unit_str, to_unit_str)
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "km" | "kilometer" | "kilometre" => Ok(LengthUnit::Kilometer),
        "mi" | "mile" | "miles" => Ok(LengthUnit::Mile),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_energy_unit(s: &str) -> Result<EnergyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "wh" => Ok(EnergyUnit::WattHour),
        "kwh" => Ok(EnergyUnit::KilowattHour),
        "mj" | "megajoule" => Ok(EnergyUnit::Megajoule),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_consumption_unit(s: &str) -> Result<ConsumptionUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kwh/100km" => Ok(ConsumptionUnit::KwhPer100Km),
        "wh/km" => Ok(ConsumptionUnit::WhPerKm),
        "kwh/100mi" => Ok(ConsumptionUnit::KwhPer100Mi),
        "mi/kwh" => Ok(ConsumptionUnit::MilePerKwh),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
