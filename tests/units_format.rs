//! 단위 변환, 환율, 표시 포맷 테스트.
use approx::assert_relative_eq;
use ev_charge_calculator::config::UnitSystem;
use ev_charge_calculator::conversion::{convert, convert_named, ConversionError};
use ev_charge_calculator::format::{
    format_currency, format_distance, format_distance_in, format_energy, format_number,
    format_percent, format_power, format_temperature_in, format_time,
};
use ev_charge_calculator::i18n::Language;
use ev_charge_calculator::quantity::QuantityKind;
use ev_charge_calculator::rates::{
    convert_currency, find_currency, networks_for, regional_rate, CURRENCIES,
};

#[test]
fn distance_and_temperature() {
    let mi = convert(QuantityKind::Distance, 100.0, "km", "mi").expect("km->mi");
    assert_relative_eq!(mi, 62.137, epsilon = 1e-3);
    let f = convert(QuantityKind::Temperature, 100.0, "C", "F").expect("C->F");
    assert_relative_eq!(f, 212.0, epsilon = 1e-9);
    let c = convert(QuantityKind::Temperature, 32.0, "°F", "c").expect("F->C");
    assert!(c.abs() < 1e-9, "expected 0 °C, got {c}");
}

#[test]
fn energy_and_consumption() {
    let mj = convert(QuantityKind::Energy, 1.0, "kWh", "MJ").expect("kWh->MJ");
    assert_relative_eq!(mj, 3.6, epsilon = 1e-12);
    let wh_km = convert_named("consumption", 16.0, "kWh/100km", "Wh/km").expect("wh/km");
    assert_relative_eq!(wh_km, 160.0, epsilon = 1e-9);
    let mi_kwh = convert_named("consumption", 16.0, "kWh/100km", "mi/kWh").expect("mi/kwh");
    assert_relative_eq!(mi_kwh, 3.8838, epsilon = 1e-4);
    // 역수 단위 왕복
    let back = convert_named("consumption", mi_kwh, "mi/kWh", "kWh/100km").expect("back");
    assert_relative_eq!(back, 16.0, epsilon = 1e-9);
}

#[test]
fn unknown_units_are_errors() {
    assert_eq!(
        convert(QuantityKind::Distance, 1.0, "furlong", "km"),
        Err(ConversionError::UnknownUnit("furlong".to_string()))
    );
    assert_eq!(
        convert_named("pressure", 1.0, "bar", "psi"),
        Err(ConversionError::UnsupportedQuantity("pressure".to_string()))
    );
}

#[test]
fn currency_table() {
    assert_eq!(CURRENCIES.len(), 6);
    assert_eq!(find_currency("eur").map(|c| c.symbol), Some("€"));
    let eur = convert_currency(100.0, "USD", "EUR").expect("usd->eur");
    assert_relative_eq!(eur, 92.0, epsilon = 1e-9);
    assert_eq!(convert_currency(1.0, "USD", "XYZ"), None);
}

#[test]
fn regional_rates_and_networks() {
    assert_eq!(regional_rate("united states", "california"), Some(0.26));
    assert_eq!(regional_rate("Europe", "Atlantis"), None);

    let us = networks_for("United States").expect("us networks");
    let evgo = us
        .networks
        .iter()
        .find(|n| n.name == "EVgo")
        .expect("evgo");
    // 40 kWh * 0.35 + 2.99
    assert_relative_eq!(evgo.session_cost(40.0), 16.99, epsilon = 1e-9);
    assert_eq!(evgo.membership_fee, Some(7.99));
}

#[test]
fn number_formats() {
    assert_eq!(format_number(1.234, 2), "1.23");
    assert_eq!(format_number(f64::NAN, 2), "N/A");
    assert_eq!(format_percent(90.0, 0), "90%");
    assert_eq!(format_energy(40.0), "40.00 kWh");
    assert_eq!(format_power(11.0), "11.0 kW");
}

#[test]
fn currency_format() {
    assert_eq!(format_currency(6.0, "USD"), "$6.00");
    assert_eq!(format_currency(12.5, "gbp"), "£12.50");
    assert_eq!(format_currency(1.234, "xyz"), "XYZ 1.23");
}

#[test]
fn distance_format() {
    assert_eq!(format_distance(5.26), "5.3 km");
    assert_eq!(format_distance(337.4), "337 km");
    assert_eq!(format_distance_in(100.0, UnitSystem::Imperial), "62 mi");
    assert_eq!(format_temperature_in(20.0, UnitSystem::Imperial), "68 °F");
    assert_eq!(format_temperature_in(-5.0, UnitSystem::Metric), "-5 °C");
}

#[test]
fn time_format() {
    assert_eq!(format_time(0, 0, Language::En), "0 minutes");
    assert_eq!(format_time(1, 1, Language::En), "1 hour 1 minute");
    assert_eq!(format_time(4, 2, Language::En), "4 hours 2 minutes");
    assert_eq!(format_time(3, 0, Language::En), "3 hours");
    assert_eq!(format_time(4, 2, Language::Ko), "4시간 2분");
    assert_eq!(format_time(0, 45, Language::Ko), "45분");
    assert_eq!(format_time(2, 0, Language::Ko), "2시간");
}
