//! 계산기 화면별 입력 필드 정의와 폼 값 읽기/쓰기.

use crate::calc::constants::{self, InputRange};
use crate::i18n::keys::*;
use crate::store::CalculatorData;

/// 폼에서 다루는 숫자 입력값.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    WeeklyDistance,
    BatteryCapacity,
    Consumption,
    /// 화면에는 %, 저장은 비율
    UsableBattery,
    InitialCharge,
    TargetCharge,
    ChargingPower,
    ChargingEfficiency,
    Temperature,
    Phases,
    ElectricityRate,
    PeakRate,
    OffPeakRate,
    OffPeakShare,
}

/// 입력 필드 설명.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputField {
    pub key: FieldKey,
    /// 번역 키
    pub label: &'static str,
    pub range: InputRange,
    pub unit: &'static str,
    pub allow_decimals: bool,
}

const fn field(
    key: FieldKey,
    label: &'static str,
    range: InputRange,
    unit: &'static str,
    allow_decimals: bool,
) -> InputField {
    InputField {
        key,
        label,
        range,
        unit,
        allow_decimals,
    }
}

pub const WEEKLY_DISTANCE_FIELD: InputField = field(
    FieldKey::WeeklyDistance,
    FIELD_WEEKLY_DISTANCE,
    constants::WEEKLY_DISTANCE,
    "km",
    false,
);
pub const BATTERY_CAPACITY_FIELD: InputField = field(
    FieldKey::BatteryCapacity,
    FIELD_BATTERY_CAPACITY,
    constants::BATTERY_CAPACITY,
    "kWh",
    false,
);
pub const CONSUMPTION_FIELD: InputField = field(
    FieldKey::Consumption,
    FIELD_CONSUMPTION,
    constants::ENERGY_CONSUMPTION,
    "kWh/100km",
    true,
);
pub const USABLE_BATTERY_FIELD: InputField = field(
    FieldKey::UsableBattery,
    FIELD_USABLE_BATTERY,
    constants::USABLE_BATTERY,
    "%",
    false,
);
pub const INITIAL_CHARGE_FIELD: InputField = field(
    FieldKey::InitialCharge,
    FIELD_INITIAL_CHARGE,
    constants::BATTERY_CHARGE,
    "%",
    false,
);
pub const TARGET_CHARGE_FIELD: InputField = field(
    FieldKey::TargetCharge,
    FIELD_TARGET_CHARGE,
    constants::BATTERY_CHARGE,
    "%",
    false,
);
pub const CHARGING_POWER_FIELD: InputField = field(
    FieldKey::ChargingPower,
    FIELD_CHARGING_POWER,
    constants::CHARGING_POWER,
    "kW",
    true,
);
pub const CHARGING_EFFICIENCY_FIELD: InputField = field(
    FieldKey::ChargingEfficiency,
    FIELD_CHARGING_EFFICIENCY,
    constants::CHARGING_EFFICIENCY,
    "%",
    false,
);
pub const TEMPERATURE_FIELD: InputField = field(
    FieldKey::Temperature,
    FIELD_TEMPERATURE,
    constants::TEMPERATURE,
    "°C",
    false,
);
pub const PHASES_FIELD: InputField = field(
    FieldKey::Phases,
    FIELD_PHASES,
    constants::PHASES,
    "",
    false,
);
pub const ELECTRICITY_RATE_FIELD: InputField = field(
    FieldKey::ElectricityRate,
    FIELD_ELECTRICITY_RATE,
    constants::ELECTRICITY_RATE,
    "/kWh",
    true,
);
pub const PEAK_RATE_FIELD: InputField = field(
    FieldKey::PeakRate,
    FIELD_PEAK_RATE,
    constants::ELECTRICITY_RATE,
    "/kWh",
    true,
);
pub const OFF_PEAK_RATE_FIELD: InputField = field(
    FieldKey::OffPeakRate,
    FIELD_OFF_PEAK_RATE,
    constants::ELECTRICITY_RATE,
    "/kWh",
    true,
);
pub const OFF_PEAK_SHARE_FIELD: InputField = field(
    FieldKey::OffPeakShare,
    FIELD_OFF_PEAK_SHARE,
    constants::OFF_PEAK_SHARE,
    "%",
    false,
);

pub const CHARGING_TIME_FIELDS: [InputField; 7] = [
    BATTERY_CAPACITY_FIELD,
    INITIAL_CHARGE_FIELD,
    TARGET_CHARGE_FIELD,
    CHARGING_POWER_FIELD,
    CHARGING_EFFICIENCY_FIELD,
    TEMPERATURE_FIELD,
    PHASES_FIELD,
];

pub const FREQUENCY_FIELDS: [InputField; 4] = [
    WEEKLY_DISTANCE_FIELD,
    BATTERY_CAPACITY_FIELD,
    CONSUMPTION_FIELD,
    USABLE_BATTERY_FIELD,
];

pub const COST_FIELDS: [InputField; 6] = [
    WEEKLY_DISTANCE_FIELD,
    BATTERY_CAPACITY_FIELD,
    CONSUMPTION_FIELD,
    INITIAL_CHARGE_FIELD,
    TARGET_CHARGE_FIELD,
    CHARGING_EFFICIENCY_FIELD,
];

/// 요금 입력 필드. `time_of_use`에 따라 단일 요금 또는 피크/경부하 요금.
pub fn rate_fields(time_of_use: bool) -> &'static [InputField] {
    const FLAT: [InputField; 1] = [ELECTRICITY_RATE_FIELD];
    const TOU: [InputField; 3] = [PEAK_RATE_FIELD, OFF_PEAK_RATE_FIELD, OFF_PEAK_SHARE_FIELD];
    if time_of_use {
        &TOU
    } else {
        &FLAT
    }
}

/// 폼에 표시할 값을 읽는다.
pub fn get_value(data: &CalculatorData, key: FieldKey) -> f64 {
    match key {
        FieldKey::WeeklyDistance => data.weekly_distance_km,
        FieldKey::BatteryCapacity => data.battery_kwh,
        FieldKey::Consumption => data.consumption_kwh_per_100km,
        FieldKey::UsableBattery => data.usable_fraction * 100.0,
        FieldKey::InitialCharge => data.initial_charge,
        FieldKey::TargetCharge => data.target_charge,
        FieldKey::ChargingPower => data.charging_power,
        FieldKey::ChargingEfficiency => data.charging_efficiency,
        FieldKey::Temperature => data.temperature_c,
        FieldKey::Phases => f64::from(data.phases),
        FieldKey::ElectricityRate => data.electricity_rate,
        FieldKey::PeakRate => data.peak_electricity_rate,
        FieldKey::OffPeakRate => data.off_peak_electricity_rate,
        FieldKey::OffPeakShare => data.charging_during_off_peak,
    }
}

/// 폼 값을 입력값에 반영한다. 정수 필드는 반올림한다.
pub fn set_value(data: &mut CalculatorData, field: &InputField, value: f64) {
    let value = if field.allow_decimals {
        value
    } else {
        value.round()
    };
    match field.key {
        FieldKey::WeeklyDistance => data.weekly_distance_km = value,
        FieldKey::BatteryCapacity => data.battery_kwh = value,
        FieldKey::Consumption => data.consumption_kwh_per_100km = value,
        FieldKey::UsableBattery => data.usable_fraction = value / 100.0,
        FieldKey::InitialCharge => data.initial_charge = value,
        FieldKey::TargetCharge => data.target_charge = value,
        FieldKey::ChargingPower => data.charging_power = value,
        FieldKey::ChargingEfficiency => data.charging_efficiency = value,
        FieldKey::Temperature => data.temperature_c = value,
        FieldKey::Phases => data.phases = value.clamp(1.0, 3.0) as u8,
        FieldKey::ElectricityRate => data.electricity_rate = value,
        FieldKey::PeakRate => data.peak_electricity_rate = value,
        FieldKey::OffPeakRate => data.off_peak_electricity_rate = value,
        FieldKey::OffPeakShare => data.charging_during_off_peak = value,
    }
}

/// 모든 숫자 필드가 0보다 큰지 확인한다. 온도는 유한하기만 하면 되고 초기 충전량은 0이어도 된다.
pub fn is_form_valid(data: &CalculatorData, fields: &[InputField]) -> bool {
    fields.iter().all(|f| {
        let v = get_value(data, f.key);
        match f.key {
            FieldKey::Temperature => v.is_finite(),
            FieldKey::InitialCharge => v.is_finite() && v >= 0.0,
            _ => v.is_finite() && v > 0.0,
        }
    })
}
