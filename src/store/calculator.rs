use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::{read_field, stored_object, Persisted};
use crate::calc::constants::{self, defaults};
use crate::calc::{ChargeRequest, ChargingType, CostSummaryInput, FrequencyInput, Tariff};
use crate::rates::find_currency;

pub const CALCULATOR_KEY: &str = "ev-calculator-data";

/// 계산기 입력값 전체. 동의한 경우에만 저장된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorData {
    pub weekly_distance_km: f64,
    pub battery_kwh: f64,
    pub consumption_kwh_per_100km: f64,
    /// 가용 배터리 비율 (0~1)
    pub usable_fraction: f64,
    pub initial_charge: f64,
    pub target_charge: f64,
    pub charging_power: f64,
    pub charging_efficiency: f64,
    pub temperature_c: f64,
    pub phases: u8,
    pub electricity_rate: f64,
    pub peak_electricity_rate: f64,
    pub off_peak_electricity_rate: f64,
    /// 경부하 시간대 충전 비율 [%]
    pub charging_during_off_peak: f64,
    pub currency: String,
    pub charging_type: ChargingType,
}

impl Default for CalculatorData {
    fn default() -> Self {
        Self {
            weekly_distance_km: defaults::WEEKLY_DISTANCE_KM,
            battery_kwh: defaults::BATTERY_KWH,
            consumption_kwh_per_100km: defaults::CONSUMPTION_KWH_PER_100KM,
            usable_fraction: defaults::USABLE_FRACTION,
            initial_charge: defaults::INITIAL_CHARGE,
            target_charge: defaults::TARGET_CHARGE,
            charging_power: defaults::CHARGING_POWER_KW,
            charging_efficiency: defaults::CHARGING_EFFICIENCY,
            temperature_c: defaults::TEMPERATURE_C,
            phases: defaults::PHASES as u8,
            electricity_rate: defaults::ELECTRICITY_RATE,
            peak_electricity_rate: defaults::PEAK_ELECTRICITY_RATE,
            off_peak_electricity_rate: defaults::OFF_PEAK_ELECTRICITY_RATE,
            charging_during_off_peak: defaults::CHARGING_DURING_OFF_PEAK,
            currency: defaults::CURRENCY.to_string(),
            charging_type: ChargingType::Ac,
        }
    }
}

impl CalculatorData {
    pub fn charge_request(&self) -> ChargeRequest {
        ChargeRequest {
            battery_capacity_kwh: self.battery_kwh,
            initial_charge_percent: self.initial_charge,
            target_charge_percent: self.target_charge,
            requested_power_kw: self.charging_power,
            charging_efficiency_percent: self.charging_efficiency,
            ambient_temperature_c: self.temperature_c,
            phase_count: self.phases,
            charging_type: self.charging_type,
        }
    }

    pub fn frequency_input(&self) -> FrequencyInput {
        FrequencyInput {
            weekly_distance_km: self.weekly_distance_km,
            battery_kwh: self.battery_kwh,
            consumption_kwh_per_100km: self.consumption_kwh_per_100km,
            usable_fraction: self.usable_fraction,
        }
    }

    /// 요금제를 고른다. `time_of_use`가 참이면 피크/경부하 요금을 쓴다.
    pub fn tariff(&self, time_of_use: bool) -> Tariff {
        if time_of_use {
            Tariff::TimeOfUse {
                peak_rate: self.peak_electricity_rate,
                off_peak_rate: self.off_peak_electricity_rate,
                off_peak_share_percent: self.charging_during_off_peak,
            }
        } else {
            Tariff::Flat {
                rate: self.electricity_rate,
            }
        }
    }

    pub fn cost_summary_input(&self, time_of_use: bool) -> CostSummaryInput {
        CostSummaryInput {
            weekly_distance_km: self.weekly_distance_km,
            battery_kwh: self.battery_kwh,
            initial_charge_percent: self.initial_charge,
            target_charge_percent: self.target_charge,
            charging_efficiency_percent: self.charging_efficiency,
            consumption_kwh_per_100km: self.consumption_kwh_per_100km,
            tariff: self.tariff(time_of_use),
        }
    }
}

fn non_negative(v: &f64) -> bool {
    v.is_finite() && *v >= 0.0
}

fn positive(v: &f64) -> bool {
    v.is_finite() && *v > 0.0
}

fn percent(v: &f64) -> bool {
    constants::BATTERY_CHARGE.contains(*v)
}

impl Persisted for CalculatorData {
    const KEY: &'static str = CALCULATOR_KEY;

    fn from_stored(value: &Value) -> Self {
        let d = Self::default();
        let Some(obj) = stored_object(Self::KEY, value) else {
            return d;
        };
        let k = Self::KEY;
        Self {
            weekly_distance_km: read_field(k, obj, "weeklyDistanceKm", d.weekly_distance_km, non_negative),
            battery_kwh: read_field(k, obj, "batteryKwh", d.battery_kwh, positive),
            consumption_kwh_per_100km: read_field(
                k,
                obj,
                "consumptionKwhPer100km",
                d.consumption_kwh_per_100km,
                positive,
            ),
            usable_fraction: read_field(k, obj, "usableFraction", d.usable_fraction, |v: &f64| {
                *v > 0.0 && *v <= 1.0
            }),
            initial_charge: read_field(k, obj, "initialCharge", d.initial_charge, percent),
            target_charge: read_field(k, obj, "targetCharge", d.target_charge, percent),
            charging_power: read_field(k, obj, "chargingPower", d.charging_power, positive),
            charging_efficiency: read_field(k, obj, "chargingEfficiency", d.charging_efficiency, |v: &f64| {
                *v > 0.0 && *v <= 100.0
            }),
            temperature_c: read_field(k, obj, "temperatureC", d.temperature_c, |v: &f64| v.is_finite()),
            phases: read_field(k, obj, "phases", d.phases, |v: &u8| (1..=3).contains(v)),
            electricity_rate: read_field(k, obj, "electricityRate", d.electricity_rate, non_negative),
            peak_electricity_rate: read_field(
                k,
                obj,
                "peakElectricityRate",
                d.peak_electricity_rate,
                non_negative,
            ),
            off_peak_electricity_rate: read_field(
                k,
                obj,
                "offPeakElectricityRate",
                d.off_peak_electricity_rate,
                non_negative,
            ),
            charging_during_off_peak: read_field(
                k,
                obj,
                "chargingDuringOffPeak",
                d.charging_during_off_peak,
                percent,
            ),
            currency: read_field(k, obj, "currency", d.currency, |c: &String| {
                find_currency(c).is_some()
            }),
            charging_type: read_field(k, obj, "chargingType", d.charging_type, |_| true),
        }
    }
}
