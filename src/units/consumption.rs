use serde::{Deserialize, Serialize};

const KM_PER_MILE: f64 = 1.609344;

/// 전비 단위. 내부 기준은 kWh/100km이다.
///
/// `MilePerKwh`는 역수 관계라 0 입력 시 무한대가 된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumptionUnit {
    KwhPer100Km,
    WhPerKm,
    KwhPer100Mi,
    MilePerKwh,
}

fn to_kwh_per_100km(value: f64, unit: ConsumptionUnit) -> f64 {
    match unit {
        ConsumptionUnit::KwhPer100Km => value,
        ConsumptionUnit::WhPerKm => value / 10.0,
        ConsumptionUnit::KwhPer100Mi => value / KM_PER_MILE,
        ConsumptionUnit::MilePerKwh => 100.0 / (value * KM_PER_MILE),
    }
}

fn from_kwh_per_100km(value: f64, unit: ConsumptionUnit) -> f64 {
    match unit {
        ConsumptionUnit::KwhPer100Km => value,
        ConsumptionUnit::WhPerKm => value * 10.0,
        ConsumptionUnit::KwhPer100Mi => value * KM_PER_MILE,
        ConsumptionUnit::MilePerKwh => 100.0 / (value * KM_PER_MILE),
    }
}

/// 전비를 변환한다.
pub fn convert_consumption(value: f64, from: ConsumptionUnit, to: ConsumptionUnit) -> f64 {
    from_kwh_per_100km(to_kwh_per_100km(value, from), to)
}
