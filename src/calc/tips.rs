//! 계산 결과에 따른 충전 팁. 문자열 대신 번역 키를 반환한다.

use crate::i18n::keys::*;

/// 충전 시간 팁 입력.
#[derive(Debug, Clone, Copy)]
pub struct ChargingTimeTipInput {
    pub battery_kwh: f64,
    pub target_charge_percent: f64,
    pub charging_power_kw: f64,
    pub charging_efficiency_percent: f64,
    pub hours: u32,
    pub minutes: u32,
}

pub fn charging_time_tips(input: &ChargingTimeTipInput) -> Vec<&'static str> {
    let mut tips = vec![TIP_OFF_PEAK];

    if input.charging_power_kw > 50.0 {
        tips.push(TIP_DC_DEGRADATION);
        tips.push(TIP_FAST_CHARGE_RANGE);
    } else if input.charging_power_kw <= 11.0 {
        tips.push(TIP_OVERNIGHT);
        tips.push(TIP_LEVEL2_HOME);
    }

    if input.target_charge_percent > 90.0 {
        tips.push(TIP_FULL_CHARGE_DEGRADATION);
        tips.push(TIP_LIMIT_TO_90);
    } else if input.target_charge_percent < 50.0 {
        tips.push(TIP_SHALLOW_CYCLES);
    }

    if input.charging_efficiency_percent < 85.0 {
        tips.push(TIP_LOW_EFFICIENCY);
        tips.push(TIP_CHECK_EQUIPMENT);
    }

    if input.battery_kwh > 100.0 {
        tips.push(TIP_SMART_CHARGING_LARGE);
    }

    if input.hours > 8 {
        tips.push(TIP_HIGHER_POWER);
    } else if input.hours < 1 && input.minutes < 30 {
        tips.push(TIP_QUICK_TOP_UP);
    }

    tips
}

/// 충전 빈도 팁 입력.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyTipInput {
    pub weekly_distance_km: f64,
    pub battery_kwh: f64,
    pub consumption_kwh_per_100km: f64,
    pub usable_fraction: f64,
    pub effective_range_km: f64,
    pub weekly_charges: u32,
}

pub fn frequency_tips(input: &FrequencyTipInput) -> Vec<&'static str> {
    let mut tips = vec![TIP_PLAN_SCHEDULE];

    if input.weekly_charges < 1 {
        tips.push(TIP_MINIMAL_CHARGING);
        tips.push(TIP_CHARGE_BELOW_30);
    } else if input.weekly_charges > 3 {
        tips.push(TIP_LONGER_RANGE_VEHICLE);
        tips.push(TIP_WORKPLACE_CHARGING);
    } else {
        tips.push(TIP_OPTIMAL_FREQUENCY);
    }

    if input.consumption_kwh_per_100km > 20.0 {
        tips.push(TIP_HIGH_CONSUMPTION);
        tips.push(TIP_ECO_MODE);
    } else if input.consumption_kwh_per_100km < 15.0 {
        tips.push(TIP_EFFICIENT_CONSUMPTION);
    }

    if input.battery_kwh > 75.0 && input.usable_fraction < 0.85 {
        tips.push(TIP_LARGE_CONSERVATIVE_BATTERY);
    } else if input.battery_kwh < 50.0 {
        tips.push(TIP_SMALL_BATTERY);
    }

    if input.weekly_distance_km > 0.0 {
        let range_ratio = input.effective_range_km / input.weekly_distance_km;
        if range_ratio > 2.0 {
            tips.push(TIP_RANGE_EXCEEDS_NEEDS);
        } else if range_ratio < 1.2 {
            tips.push(TIP_RANGE_CLOSE_TO_DISTANCE);
        }
    }

    tips
}

pub fn cost_tips() -> Vec<&'static str> {
    vec![
        TIP_COST_OFF_PEAK,
        TIP_COST_HOME_CHEAPER,
        TIP_COST_SOLAR,
        TIP_COST_UTILITY_PROGRAMS,
        TIP_COST_SMART_CHARGER,
    ]
}

/// 계산 실패 시 보여줄 팁.
pub fn error_tips() -> Vec<&'static str> {
    vec![TIP_ERROR_CHECK_INPUTS, TIP_ERROR_RANGES]
}
