use serde::Serialize;

use super::round_to;

/// 기본 가용 배터리 비율
pub const DEFAULT_USABLE_FRACTION: f64 = 0.9;
/// 추가 안전 충전을 넣는 주행거리/항속거리 비의 소수부 기준
pub const SAFETY_CHARGE_THRESHOLD: f64 = 0.9;

/// 주간 충전 횟수 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyInput {
    /// 주간 주행거리 [km]
    pub weekly_distance_km: f64,
    /// 배터리 용량 [kWh]
    pub battery_kwh: f64,
    /// 전비 [kWh/100km]
    pub consumption_kwh_per_100km: f64,
    /// 가용 배터리 비율 (0~1)
    pub usable_fraction: f64,
}

/// 주간 충전 횟수 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyEstimate {
    /// 1회 충전 항속거리 [km], 소수 둘째 자리 반올림
    pub effective_range_km: f64,
    pub weekly_charges: u32,
    /// 소수부 기준을 넘어 한 번 더 충전을 권장했는지 여부
    pub safety_charge_added: bool,
}

/// 1회 충전으로 갈 수 있는 거리 [km]를 계산한다.
pub fn calculate_effective_range(
    battery_kwh: f64,
    consumption_kwh_per_100km: f64,
    usable_fraction: f64,
) -> f64 {
    if consumption_kwh_per_100km <= 0.0 {
        return 0.0;
    }
    round_to(battery_kwh * usable_fraction / consumption_kwh_per_100km * 100.0, 2)
}

/// 주간 주행거리를 채우는 데 필요한 충전 횟수(올림).
pub fn calculate_weekly_charges(weekly_distance_km: f64, effective_range_km: f64) -> u32 {
    if effective_range_km <= 0.0 || weekly_distance_km <= 0.0 {
        return 0;
    }
    (weekly_distance_km / effective_range_km).ceil() as u32
}

/// 주행 습관과 차량 제원으로 주간 충전 횟수를 추정한다.
///
/// 거리/항속거리 비의 소수부가 0.9를 넘으면 여유 충전 1회를 더한다.
pub fn weekly_ev_charge_estimator(input: FrequencyInput) -> FrequencyEstimate {
    let effective_range_km = calculate_effective_range(
        input.battery_kwh,
        input.consumption_kwh_per_100km,
        input.usable_fraction,
    );
    let mut weekly_charges = calculate_weekly_charges(input.weekly_distance_km, effective_range_km);

    let mut safety_charge_added = false;
    if effective_range_km > 0.0 && weekly_charges > 0 {
        let ratio = input.weekly_distance_km / effective_range_km;
        if ratio.fract() > SAFETY_CHARGE_THRESHOLD {
            weekly_charges += 1;
            safety_charge_added = true;
        }
    }

    FrequencyEstimate {
        effective_range_km,
        weekly_charges,
        safety_charge_added,
    }
}
