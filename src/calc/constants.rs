//! 입력 범위와 기본값.

/// 슬라이더 입력 범위.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const WEEKLY_DISTANCE: InputRange = InputRange::new(50.0, 2000.0, 10.0);
pub const BATTERY_CAPACITY: InputRange = InputRange::new(20.0, 150.0, 1.0);
pub const ENERGY_CONSUMPTION: InputRange = InputRange::new(10.0, 30.0, 0.1);
/// 가용 배터리 [%]. 저장은 비율(0~1)로 한다.
pub const USABLE_BATTERY: InputRange = InputRange::new(60.0, 100.0, 1.0);
pub const BATTERY_CHARGE: InputRange = InputRange::new(0.0, 100.0, 1.0);
pub const CHARGING_POWER: InputRange = InputRange::new(1.4, 350.0, 0.1);
pub const CHARGING_EFFICIENCY: InputRange = InputRange::new(70.0, 100.0, 1.0);
pub const TEMPERATURE: InputRange = InputRange::new(-30.0, 50.0, 1.0);
pub const PHASES: InputRange = InputRange::new(1.0, 3.0, 1.0);
pub const ELECTRICITY_RATE: InputRange = InputRange::new(0.01, 1.0, 0.01);
pub const OFF_PEAK_SHARE: InputRange = InputRange::new(0.0, 100.0, 5.0);

pub mod defaults {
    pub const WEEKLY_DISTANCE_KM: f64 = 250.0;
    pub const BATTERY_KWH: f64 = 60.0;
    pub const CONSUMPTION_KWH_PER_100KM: f64 = 16.0;
    pub const USABLE_FRACTION: f64 = 0.9;
    pub const INITIAL_CHARGE: f64 = 20.0;
    pub const TARGET_CHARGE: f64 = 80.0;
    pub const CHARGING_POWER_KW: f64 = 11.0;
    pub const CHARGING_EFFICIENCY: f64 = 90.0;
    pub const TEMPERATURE_C: f64 = 20.0;
    pub const PHASES: f64 = 3.0;
    pub const ELECTRICITY_RATE: f64 = 0.15;
    pub const PEAK_ELECTRICITY_RATE: f64 = 0.25;
    pub const OFF_PEAK_ELECTRICITY_RATE: f64 = 0.10;
    pub const CHARGING_DURING_OFF_PEAK: f64 = 70.0;
    pub const CURRENCY: &str = "USD";
}
