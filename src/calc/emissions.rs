use super::cost::WEEKS_PER_YEAR;
use super::round_to;

/// 휘발유 차량 기본 배출량 [g/km]
pub const GASOLINE_EMISSIONS_G_PER_KM: f64 = 120.0;
/// 전기차 전력 생산 기준 배출량 [g/km]
pub const ELECTRICITY_EMISSIONS_G_PER_KM: f64 = 30.0;

/// 휘발유 차량 대비 연간 CO₂ 절감량 [kg]을 계산한다.
pub fn calculate_co2_savings(
    weekly_distance_km: f64,
    gasoline_g_per_km: f64,
    electricity_g_per_km: f64,
) -> f64 {
    let annual_distance_km = weekly_distance_km * WEEKS_PER_YEAR;
    let gasoline_kg = annual_distance_km * gasoline_g_per_km / 1000.0;
    let electricity_kg = annual_distance_km * electricity_g_per_km / 1000.0;
    round_to(gasoline_kg - electricity_kg, 2)
}

/// 기본 배출 계수로 연간 절감량을 계산한다.
pub fn default_co2_savings(weekly_distance_km: f64) -> f64 {
    calculate_co2_savings(
        weekly_distance_km,
        GASOLINE_EMISSIONS_G_PER_KM,
        ELECTRICITY_EMISSIONS_G_PER_KM,
    )
}
