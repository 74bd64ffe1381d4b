use serde::{Deserialize, Serialize};

/// 상(phase)당 AC 충전 상한 [kW]
pub const AC_POWER_PER_PHASE_KW: f64 = 7.4;
/// DC 커넥터 상한 [kW]
pub const DC_CONNECTOR_LIMIT_KW: f64 = 350.0;
/// 배터리 안전 C-rate 상한
pub const MAX_C_RATE: f64 = 3.0;
/// 온도 보정 후 최소 전력 [kW]
pub const MIN_CHARGING_POWER_KW: f64 = 0.1;

/// 충전 곡선 구간표. (구간 끝 SoC %, 속도 배율)
pub const CHARGE_CURVE: [(f64, f64); 5] = [
    (50.0, 1.0),
    (70.0, 0.9),
    (80.0, 0.7),
    (90.0, 0.4),
    (100.0, 0.2),
];

/// 충전 시간 계산 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ChargeError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for ChargeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChargeError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for ChargeError {}

/// 충전 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargingType {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "DC")]
    Dc,
}

impl ChargingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargingType::Ac => "AC",
            ChargingType::Dc => "DC",
        }
    }
}

impl std::str::FromStr for ChargingType {
    type Err = ChargeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AC" => Ok(ChargingType::Ac),
            "DC" => Ok(ChargingType::Dc),
            _ => Err(ChargeError::InvalidInput("charging type must be AC or DC")),
        }
    }
}

/// 실제 충전 전력을 제한한 요인.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LimitingFactor {
    /// AC 상 수 제한
    Phases,
    /// DC 커넥터 제한
    Connector,
    /// 배터리 C-rate 제한
    CRate,
    /// 온도 보정
    Temperature,
}

impl LimitingFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitingFactor::Phases => "phases",
            LimitingFactor::Connector => "connector",
            LimitingFactor::CRate => "c-rate",
            LimitingFactor::Temperature => "temperature",
        }
    }
}

/// 충전 시간 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// 배터리 용량 [kWh]
    pub battery_capacity_kwh: f64,
    /// 시작 SoC [%]
    pub initial_charge_percent: f64,
    /// 목표 SoC [%]
    pub target_charge_percent: f64,
    /// 충전기 요청 전력 [kW]
    pub requested_power_kw: f64,
    /// 충전 효율 [%] (0 초과 100 이하)
    pub charging_efficiency_percent: f64,
    /// 배터리/외기 온도 [°C]
    pub ambient_temperature_c: f64,
    /// 상 수 (1~3)
    pub phase_count: u8,
    pub charging_type: ChargingType,
}

/// 상한과 온도 보정을 모두 적용한 전력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeratedPower {
    pub power_kw: f64,
    pub limiting_factor: Option<LimitingFactor>,
}

/// SoC 구간과 해당 구간의 속도 배율.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeSegment {
    pub start_percent: f64,
    pub end_percent: f64,
    pub speed_multiplier: f64,
}

/// 충전 시간 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeEstimate {
    pub hours: u32,
    /// 반올림 결과가 60이 될 수 있다. 시간으로 올리지 않는다.
    pub minutes: u32,
    /// 효율 손실을 포함한 필요 에너지 [kWh]
    pub energy_needed_kwh: f64,
    /// 실제 지속 충전 전력 [kW]
    pub actual_power_kw: f64,
    pub limiting_factor: Option<LimitingFactor>,
}

impl ChargeRequest {
    fn validate(&self) -> Result<(), ChargeError> {
        let numbers = [
            self.battery_capacity_kwh,
            self.initial_charge_percent,
            self.target_charge_percent,
            self.requested_power_kw,
            self.charging_efficiency_percent,
            self.ambient_temperature_c,
        ];
        if numbers.iter().any(|v| !v.is_finite()) {
            return Err(ChargeError::InvalidInput("all values must be finite numbers"));
        }
        if self.battery_capacity_kwh <= 0.0 {
            return Err(ChargeError::InvalidInput(
                "battery capacity must be greater than 0",
            ));
        }
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.initial_charge_percent) || !in_range(self.target_charge_percent) {
            return Err(ChargeError::InvalidInput(
                "charge levels must be between 0 and 100",
            ));
        }
        if self.initial_charge_percent >= self.target_charge_percent {
            return Err(ChargeError::InvalidInput(
                "target charge must be higher than initial charge",
            ));
        }
        if self.requested_power_kw <= 0.0 {
            return Err(ChargeError::InvalidInput(
                "charging power must be greater than 0",
            ));
        }
        if self.charging_efficiency_percent <= 0.0 || self.charging_efficiency_percent > 100.0 {
            return Err(ChargeError::InvalidInput(
                "charging efficiency must be in (0, 100]",
            ));
        }
        if !(1..=3).contains(&self.phase_count) {
            return Err(ChargeError::InvalidInput("phase count must be 1, 2 or 3"));
        }
        Ok(())
    }
}

/// 온도에 따른 충전 전력 배율을 반환한다.
pub fn temperature_multiplier(temperature_c: f64) -> f64 {
    if temperature_c < -10.0 {
        0.3
    } else if temperature_c < 0.0 {
        0.5
    } else if temperature_c < 10.0 {
        0.8
    } else if temperature_c > 40.0 {
        0.9
    } else {
        1.0
    }
}

/// 커넥터/상 한계 → C-rate 한계 → 온도 보정 순으로 전력을 깎는다.
///
/// 나중 단계가 실제로 전력을 줄였으면 그 단계가 제한 요인으로 기록된다.
pub fn derate_power(request: &ChargeRequest) -> DeratedPower {
    let mut limiting_factor = None;

    let (connector_limit, connector_factor) = match request.charging_type {
        ChargingType::Ac => (
            f64::from(request.phase_count) * AC_POWER_PER_PHASE_KW,
            LimitingFactor::Phases,
        ),
        ChargingType::Dc => (DC_CONNECTOR_LIMIT_KW, LimitingFactor::Connector),
    };
    let mut power = request.requested_power_kw.min(connector_limit);
    if power < request.requested_power_kw {
        limiting_factor = Some(connector_factor);
    }

    let c_rate_limit = request.battery_capacity_kwh * MAX_C_RATE;
    if power > c_rate_limit {
        power = c_rate_limit;
        limiting_factor = Some(LimitingFactor::CRate);
    }

    let multiplier = temperature_multiplier(request.ambient_temperature_c);
    if multiplier < 1.0 {
        power *= multiplier;
        limiting_factor = Some(LimitingFactor::Temperature);
    }

    DeratedPower {
        power_kw: power.max(MIN_CHARGING_POWER_KW),
        limiting_factor,
    }
}

/// [initial, target] 구간을 충전 곡선 구간표로 분할한다.
pub fn charge_segments(initial_percent: f64, target_percent: f64) -> Vec<ChargeSegment> {
    let mut segments = Vec::new();
    let mut current = initial_percent;
    for (breakpoint, speed_multiplier) in CHARGE_CURVE {
        if current < breakpoint && target_percent > current {
            let end = breakpoint.min(target_percent);
            segments.push(ChargeSegment {
                start_percent: current,
                end_percent: end,
                speed_multiplier,
            });
            current = end;
        }
        if current >= target_percent {
            break;
        }
    }
    segments
}

/// 충전 시간과 필요 에너지를 추정한다.
pub fn estimate(request: &ChargeRequest) -> Result<ChargeEstimate, ChargeError> {
    request.validate()?;

    let derated = derate_power(request);
    let efficiency = request.charging_efficiency_percent / 100.0;

    let total_hours: f64 = charge_segments(
        request.initial_charge_percent,
        request.target_charge_percent,
    )
    .iter()
    .map(|seg| {
        let energy_kwh =
            request.battery_capacity_kwh * (seg.end_percent - seg.start_percent) / 100.0
                / efficiency;
        energy_kwh / (derated.power_kw * seg.speed_multiplier)
    })
    .sum();

    // 표시용 에너지는 구간 합과 별개로 전체 구간에서 한 번 계산한다.
    let energy_needed_kwh = request.battery_capacity_kwh
        * (request.target_charge_percent - request.initial_charge_percent)
        / 100.0
        / efficiency;

    let whole_hours = total_hours.floor();
    Ok(ChargeEstimate {
        hours: whole_hours as u32,
        minutes: ((total_hours - whole_hours) * 60.0).round() as u32,
        energy_needed_kwh,
        actual_power_kw: derated.power_kw,
        limiting_factor: derated.limiting_factor,
    })
}
