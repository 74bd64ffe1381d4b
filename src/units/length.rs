use serde::{Deserialize, Serialize};

const METERS_PER_MILE: f64 = 1609.344;

/// 거리 단위. 내부 기준은 킬로미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Mile,
}

fn to_km(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value / 1000.0,
        LengthUnit::Kilometer => value,
        LengthUnit::Mile => value * METERS_PER_MILE / 1000.0,
    }
}

fn from_km(value_km: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_km * 1000.0,
        LengthUnit::Kilometer => value_km,
        LengthUnit::Mile => value_km * 1000.0 / METERS_PER_MILE,
    }
}

/// 거리를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    from_km(to_km(value, from), to)
}
