use serde::Serialize;

use super::frequency::calculate_weekly_charges;
use super::round_to;

/// 월 평균 주 수
pub const WEEKS_PER_MONTH: f64 = 4.33;
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// 비용 계산 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum CostError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for CostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for CostError {}

/// 요금제.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tariff {
    /// 단일 요금 [통화/kWh]
    Flat { rate: f64 },
    /// 피크/경부하 시간대 요금
    TimeOfUse {
        peak_rate: f64,
        off_peak_rate: f64,
        /// 경부하 시간대 충전 비율 [%]
        off_peak_share_percent: f64,
    },
}

impl Tariff {
    /// kWh당 실효 단가. 시간대 요금은 경부하 비율로 가중 평균한다.
    pub fn effective_rate(&self) -> f64 {
        match *self {
            Tariff::Flat { rate } => rate,
            Tariff::TimeOfUse {
                peak_rate,
                off_peak_rate,
                off_peak_share_percent,
            } => {
                let share = off_peak_share_percent.clamp(0.0, 100.0) / 100.0;
                off_peak_rate * share + peak_rate * (1.0 - share)
            }
        }
    }
}

/// 1회 충전 비용 계산 입력.
#[derive(Debug, Clone)]
pub struct ChargingCostInput {
    /// 효율 손실을 포함한 필요 에너지 [kWh]
    pub energy_needed_kwh: f64,
    pub tariff: Tariff,
    /// 고정 수수료와 세금을 포함할지 여부
    pub include_fees: bool,
    /// 세션당 고정 수수료
    pub fixed_fee: f64,
    /// 세율 [%]
    pub tax_rate_percent: f64,
}

/// 1회 충전 비용 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargingCostResult {
    pub effective_rate: f64,
    pub energy_cost: f64,
    pub fees: f64,
    pub tax: f64,
    pub total_cost: f64,
}

/// 에너지 비용에 수수료와 세금을 더해 1회 충전 비용을 계산한다.
pub fn calculate_charging_cost(input: &ChargingCostInput) -> Result<ChargingCostResult, CostError> {
    if !input.energy_needed_kwh.is_finite() || input.energy_needed_kwh < 0.0 {
        return Err(CostError::InvalidInput("energy needed must be 0 or more"));
    }
    let effective_rate = input.tariff.effective_rate();
    if !effective_rate.is_finite() || effective_rate < 0.0 {
        return Err(CostError::InvalidInput("electricity rate must be 0 or more"));
    }

    let energy_cost = input.energy_needed_kwh * effective_rate;
    let (fees, tax) = if input.include_fees {
        let fees = input.fixed_fee.max(0.0);
        let tax = (energy_cost + fees) * input.tax_rate_percent.max(0.0) / 100.0;
        (fees, tax)
    } else {
        (0.0, 0.0)
    };

    Ok(ChargingCostResult {
        effective_rate,
        energy_cost,
        fees,
        tax,
        total_cost: energy_cost + fees + tax,
    })
}

/// 충전 비용 요약 입력.
#[derive(Debug, Clone)]
pub struct CostSummaryInput {
    pub weekly_distance_km: f64,
    pub battery_kwh: f64,
    pub initial_charge_percent: f64,
    pub target_charge_percent: f64,
    pub charging_efficiency_percent: f64,
    pub consumption_kwh_per_100km: f64,
    pub tariff: Tariff,
}

/// 충전 비용 요약.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostSummary {
    pub cost_per_charge: f64,
    pub weekly_cost: f64,
    pub monthly_cost: f64,
    pub annual_cost: f64,
    /// 1회 충전 에너지 [kWh]
    pub energy_per_charge_kwh: f64,
    pub weekly_charges: u32,
}

/// 1회 충전 비용과 주/월/연 비용을 계산한다.
pub fn calculate_cost_summary(input: &CostSummaryInput) -> Result<CostSummary, CostError> {
    if input.battery_kwh <= 0.0 {
        return Err(CostError::InvalidInput("battery capacity must be greater than 0"));
    }
    if input.target_charge_percent <= input.initial_charge_percent {
        return Err(CostError::InvalidInput(
            "target charge must be higher than initial charge",
        ));
    }
    if input.charging_efficiency_percent <= 0.0 || input.charging_efficiency_percent > 100.0 {
        return Err(CostError::InvalidInput("charging efficiency must be in (0, 100]"));
    }
    if input.consumption_kwh_per_100km <= 0.0 {
        return Err(CostError::InvalidInput("consumption must be greater than 0"));
    }

    let charge_range = input.target_charge_percent - input.initial_charge_percent;
    let energy_per_charge_kwh =
        input.battery_kwh * charge_range / 100.0 / (input.charging_efficiency_percent / 100.0);
    let effective_range_km =
        input.battery_kwh * charge_range / 100.0 / (input.consumption_kwh_per_100km / 100.0);
    let weekly_charges = calculate_weekly_charges(input.weekly_distance_km, effective_range_km);

    let cost = calculate_charging_cost(&ChargingCostInput {
        energy_needed_kwh: energy_per_charge_kwh,
        tariff: input.tariff,
        include_fees: false,
        fixed_fee: 0.0,
        tax_rate_percent: 0.0,
    })?;

    let weekly_cost = cost.total_cost * f64::from(weekly_charges);
    Ok(CostSummary {
        cost_per_charge: cost.total_cost,
        weekly_cost,
        monthly_cost: weekly_cost * WEEKS_PER_MONTH,
        annual_cost: weekly_cost * WEEKS_PER_YEAR,
        energy_per_charge_kwh,
        weekly_charges,
    })
}

/// 주간 충전 횟수 기준 연간 충전 비용 (소수 둘째 자리 반올림).
pub fn calculate_annual_charging_cost(
    weekly_charges: u32,
    battery_kwh: f64,
    cost_per_kwh: f64,
    usable_fraction: f64,
) -> f64 {
    let energy_per_charge = battery_kwh * usable_fraction;
    let weekly_cost = f64::from(weekly_charges) * energy_per_charge * cost_per_kwh;
    round_to(weekly_cost * WEEKS_PER_YEAR, 2)
}
