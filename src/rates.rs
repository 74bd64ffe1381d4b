//! 통화 환율, 지역별 평균 전기요금, 충전 네트워크 요금표.

use serde::Serialize;

/// 통화 정보. `rate`는 1 USD 대비 환율이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub rate: f64,
}

pub const CURRENCIES: [Currency; 6] = [
    Currency { code: "USD", name: "US Dollar", symbol: "$", rate: 1.0 },
    Currency { code: "EUR", name: "Euro", symbol: "€", rate: 0.92 },
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "C$", rate: 1.36 },
    Currency { code: "GBP", name: "British Pound", symbol: "£", rate: 0.78 },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "A$", rate: 1.51 },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥", rate: 149.35 },
];

/// 통화 코드(대소문자 무시)로 통화를 찾는다.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// 금액을 USD를 거쳐 다른 통화로 환산한다. 모르는 코드면 `None`.
pub fn convert_currency(amount: f64, from: &str, to: &str) -> Option<f64> {
    let from = find_currency(from)?;
    let to = find_currency(to)?;
    Some(amount / from.rate * to.rate)
}

/// 지역 내 평균 가정용 전기요금 [통화/kWh].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaRate {
    pub area: &'static str,
    pub rate: f64,
}

/// 지역 단위 요금표.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionalRates {
    pub region: &'static str,
    pub currency: &'static str,
    pub rates: &'static [AreaRate],
}

pub const REGIONAL_RATES: [RegionalRates; 3] = [
    RegionalRates {
        region: "United States",
        currency: "USD",
        rates: &[
            AreaRate { area: "National Average", rate: 0.15 },
            AreaRate { area: "California", rate: 0.26 },
            AreaRate { area: "Texas", rate: 0.13 },
            AreaRate { area: "New York", rate: 0.22 },
            AreaRate { area: "Florida", rate: 0.14 },
            AreaRate { area: "Washington", rate: 0.11 },
        ],
    },
    RegionalRates {
        region: "Europe",
        currency: "EUR",
        rates: &[
            AreaRate { area: "EU Average", rate: 0.25 },
            AreaRate { area: "Germany", rate: 0.37 },
            AreaRate { area: "France", rate: 0.21 },
            AreaRate { area: "Spain", rate: 0.29 },
            AreaRate { area: "Italy", rate: 0.31 },
            AreaRate { area: "United Kingdom", rate: 0.27 },
        ],
    },
    RegionalRates {
        region: "Canada",
        currency: "CAD",
        rates: &[
            AreaRate { area: "National Average", rate: 0.14 },
            AreaRate { area: "Ontario", rate: 0.16 },
            AreaRate { area: "Quebec", rate: 0.08 },
            AreaRate { area: "British Columbia", rate: 0.14 },
            AreaRate { area: "Alberta", rate: 0.17 },
        ],
    },
];

/// 지역명으로 요금표를 찾는다.
pub fn find_region(region: &str) -> Option<&'static RegionalRates> {
    let region = region.trim();
    REGIONAL_RATES
        .iter()
        .find(|r| r.region.eq_ignore_ascii_case(region))
}

/// 지역 안에서 세부 지역 요금을 찾는다.
pub fn regional_rate(region: &str, area: &str) -> Option<f64> {
    let area = area.trim();
    find_region(region)?
        .rates
        .iter()
        .find(|a| a.area.eq_ignore_ascii_case(area))
        .map(|a| a.rate)
}

/// 충전 네트워크 요금.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargingNetwork {
    pub name: &'static str,
    pub price_per_kwh: f64,
    /// 월 회원비
    pub membership_fee: Option<f64>,
    /// 세션당 접속 수수료
    pub connection_fee: Option<f64>,
}

impl ChargingNetwork {
    const fn new(name: &'static str, price_per_kwh: f64) -> Self {
        Self {
            name,
            price_per_kwh,
            membership_fee: None,
            connection_fee: None,
        }
    }

    const fn with_membership(mut self, fee: f64) -> Self {
        self.membership_fee = Some(fee);
        self
    }

    const fn with_connection(mut self, fee: f64) -> Self {
        self.connection_fee = Some(fee);
        self
    }

    /// 한 번 충전할 때의 비용. 회원비는 월 단위라 포함하지 않는다.
    pub fn session_cost(&self, energy_kwh: f64) -> f64 {
        self.price_per_kwh * energy_kwh + self.connection_fee.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionalNetworks {
    pub region: &'static str,
    pub currency: &'static str,
    pub networks: &'static [ChargingNetwork],
}

pub const CHARGING_NETWORKS: [RegionalNetworks; 3] = [
    RegionalNetworks {
        region: "United States",
        currency: "USD",
        networks: &[
            ChargingNetwork::new("Home Charging", 0.15),
            ChargingNetwork::new("Tesla Supercharger", 0.28),
            ChargingNetwork::new("ChargePoint", 0.31).with_connection(1.50),
            ChargingNetwork::new("EVgo", 0.35)
                .with_membership(7.99)
                .with_connection(2.99),
            ChargingNetwork::new("Electrify America", 0.43).with_membership(4.00),
        ],
    },
    RegionalNetworks {
        region: "Europe",
        currency: "EUR",
        networks: &[
            ChargingNetwork::new("Home Charging", 0.25),
            ChargingNetwork::new("Tesla Supercharger", 0.33),
            ChargingNetwork::new("IONITY", 0.79),
            ChargingNetwork::new("Fastned", 0.59).with_membership(11.99),
        ],
    },
    RegionalNetworks {
        region: "Canada",
        currency: "CAD",
        networks: &[
            ChargingNetwork::new("Home Charging", 0.14),
            ChargingNetwork::new("Tesla Supercharger", 0.26),
            ChargingNetwork::new("ChargePoint", 0.27).with_connection(1.50),
            ChargingNetwork::new("Flo", 0.25).with_connection(1.00),
        ],
    },
];

/// 지역별 충전 네트워크 목록을 찾는다.
pub fn networks_for(region: &str) -> Option<&'static RegionalNetworks> {
    let region = region.trim();
    CHARGING_NETWORKS
        .iter()
        .find(|r| r.region.eq_ignore_ascii_case(region))
}
