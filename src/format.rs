//! 화면 표시용 숫자/시간/통화 포맷.

use crate::calc::LimitingFactor;
use crate::config::UnitSystem;
use crate::i18n::keys::*;
use crate::i18n::Language;
use crate::rates::find_currency;
use crate::store::{ConsentStatus, Theme};
use crate::units::{convert_length, convert_temperature, LengthUnit, TemperatureUnit};

const NOT_AVAILABLE: &str = "N/A";

/// 소수 `decimals` 자리로 표시한다. NaN은 `N/A`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{value:.decimals$}")
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{value:.decimals$}%")
}

/// 통화 기호를 붙여 소수 둘째 자리까지 표시한다.
///
/// 모르는 통화 코드는 `CODE 1.23` 형태로 표시한다.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    if amount.is_nan() {
        return NOT_AVAILABLE.to_string();
    }
    match find_currency(currency_code) {
        Some(currency) => format!("{}{amount:.2}", currency.symbol),
        None => format!("{} {amount:.2}", currency_code.trim().to_uppercase()),
    }
}

/// 시/분을 읽기 쉬운 문장으로 만든다.
pub fn format_time(hours: u32, minutes: u32, lang: Language) -> String {
    match lang {
        Language::En => {
            let plural = |n: u32, unit: &str| {
                if n == 1 {
                    format!("{n} {unit}")
                } else {
                    format!("{n} {unit}s")
                }
            };
            match (hours, minutes) {
                (0, 0) => "0 minutes".to_string(),
                (0, m) => plural(m, "minute"),
                (h, 0) => plural(h, "hour"),
                (h, m) => format!("{} {}", plural(h, "hour"), plural(m, "minute")),
            }
        }
        Language::Ko => match (hours, minutes) {
            (0, m) => format!("{m}분"),
            (h, 0) => format!("{h}시간"),
            (h, m) => format!("{h}시간 {m}분"),
        },
    }
}

/// 10 km 미만은 소수 한 자리, 그 이상은 정수로 표시한다.
pub fn format_distance(km: f64) -> String {
    if km.is_nan() {
        return NOT_AVAILABLE.to_string();
    }
    if km.abs() < 10.0 {
        format!("{km:.1} km")
    } else {
        format!("{km:.0} km")
    }
}

/// 에너지 [kWh], 소수 둘째 자리.
pub fn format_energy(kwh: f64) -> String {
    format!("{} kWh", format_number(kwh, 2))
}

/// 전력 [kW], 소수 첫째 자리.
pub fn format_power(kw: f64) -> String {
    format!("{} kW", format_number(kw, 1))
}

/// 단위 체계에 맞춰 거리를 표시한다. 영국식이면 마일.
pub fn format_distance_in(km: f64, system: UnitSystem) -> String {
    match system {
        UnitSystem::Metric => format_distance(km),
        UnitSystem::Imperial => {
            let mi = convert_length(km, LengthUnit::Kilometer, LengthUnit::Mile);
            if mi.is_nan() {
                NOT_AVAILABLE.to_string()
            } else if mi.abs() < 10.0 {
                format!("{mi:.1} mi")
            } else {
                format!("{mi:.0} mi")
            }
        }
    }
}

/// 단위 체계에 맞춰 온도를 표시한다.
pub fn format_temperature_in(celsius: f64, system: UnitSystem) -> String {
    match system {
        UnitSystem::Metric => format!("{} °C", format_number(celsius, 0)),
        UnitSystem::Imperial => {
            let f = convert_temperature(celsius, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
            format!("{} °F", format_number(f, 0))
        }
    }
}

/// 제한 요인의 번역 키.
pub fn limiting_factor_key(factor: Option<LimitingFactor>) -> &'static str {
    match factor {
        None => LIMIT_NONE,
        Some(LimitingFactor::Phases) => LIMIT_PHASES,
        Some(LimitingFactor::Connector) => LIMIT_CONNECTOR,
        Some(LimitingFactor::CRate) => LIMIT_C_RATE,
        Some(LimitingFactor::Temperature) => LIMIT_TEMPERATURE,
    }
}

pub fn theme_key(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => THEME_LIGHT,
        Theme::Dark => THEME_DARK,
        Theme::System => THEME_SYSTEM,
    }
}

pub fn consent_status_key(status: ConsentStatus) -> &'static str {
    match status {
        ConsentStatus::Accepted => CONSENT_ACCEPTED,
        ConsentStatus::Declined => CONSENT_DECLINED,
        ConsentStatus::Pending => CONSENT_PENDING,
    }
}
