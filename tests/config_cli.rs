//! 설정 파일, 폼 필드, CLI 인자, 번역 테스트.
use std::fs;

use clap::Parser;
use ev_charge_calculator::calc::ChargingType;
use ev_charge_calculator::cli::{Args, Command, ThemeArg};
use ev_charge_calculator::config::{load_from, Config, UnitSystem};
use ev_charge_calculator::fields::{
    get_value, is_form_valid, set_value, FieldKey, CHARGING_TIME_FIELDS, COST_FIELDS,
    FREQUENCY_FIELDS, PHASES_FIELD, USABLE_BATTERY_FIELD, WEEKLY_DISTANCE_FIELD,
};
use ev_charge_calculator::i18n::{keys, resolve_language, Language, Translator};
use ev_charge_calculator::logging::parse_level;
use ev_charge_calculator::store::{CalculatorData, Theme};
use tracing::level_filters::LevelFilter;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.toml");
    let cfg = load_from(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn config_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = Config {
        language: "ko".to_string(),
        unit_system: UnitSystem::Imperial,
        log_level: "debug".to_string(),
        ..Config::default()
    };
    cfg.save_to(&path).expect("save");
    assert_eq!(load_from(&path).expect("load"), cfg);
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "unit_system = \"imperial\"\n").expect("write");
    let cfg = load_from(&path).expect("load");
    assert_eq!(cfg.unit_system, UnitSystem::Imperial);
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn broken_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "unit_system = [").expect("write");
    assert!(load_from(&path).is_err());
}

#[test]
fn log_levels() {
    assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
    assert_eq!(parse_level(" INFO "), LevelFilter::INFO);
    assert_eq!(parse_level("chatty"), LevelFilter::WARN);
}

#[test]
fn usable_battery_is_shown_as_percent() {
    let mut data = CalculatorData::default();
    assert!((get_value(&data, FieldKey::UsableBattery) - 90.0).abs() < 1e-9);
    set_value(&mut data, &USABLE_BATTERY_FIELD, 85.0);
    assert!((data.usable_fraction - 0.85).abs() < 1e-12);
}

#[test]
fn integer_fields_are_rounded() {
    let mut data = CalculatorData::default();
    set_value(&mut data, &WEEKLY_DISTANCE_FIELD, 312.6);
    assert_eq!(data.weekly_distance_km, 313.0);
    set_value(&mut data, &PHASES_FIELD, 5.0);
    assert_eq!(data.phases, 3);
}

#[test]
fn form_validity() {
    let mut data = CalculatorData::default();
    assert!(is_form_valid(&data, &CHARGING_TIME_FIELDS));
    assert!(is_form_valid(&data, &FREQUENCY_FIELDS));

    data.initial_charge = 0.0;
    data.temperature_c = -15.0;
    assert!(is_form_valid(&data, &CHARGING_TIME_FIELDS));
    assert!(is_form_valid(&data, &COST_FIELDS));

    data.battery_kwh = 0.0;
    assert!(!is_form_valid(&data, &CHARGING_TIME_FIELDS));
    assert!(!is_form_valid(&data, &FREQUENCY_FIELDS));
}

#[test]
fn time_command_overrides_inputs() {
    let args = Args::try_parse_from([
        "ev",
        "--lang",
        "ko",
        "time",
        "--power-kw",
        "50",
        "--temperature-c",
        "-5",
        "--type",
        "dc",
        "--target",
        "90",
    ])
    .expect("parse");
    assert_eq!(args.lang.as_deref(), Some("ko"));

    let Some(Command::Time(time)) = args.command else {
        panic!("expected time command");
    };
    let mut data = CalculatorData::default();
    time.apply(&mut data);
    assert_eq!(data.charging_power, 50.0);
    assert_eq!(data.temperature_c, -5.0);
    assert_eq!(data.target_charge, 90.0);
    assert_eq!(data.charging_type, ChargingType::Dc);
    assert_eq!(data.battery_kwh, CalculatorData::default().battery_kwh);
}

#[test]
fn theme_and_convert_commands_parse() {
    let args = Args::try_parse_from(["ev", "theme", "toggle"]).expect("parse");
    let Some(Command::Theme(theme)) = args.command else {
        panic!("expected theme command");
    };
    assert_eq!(theme.theme, ThemeArg::Toggle);
    assert_eq!(theme.theme.theme(), None);
    assert_eq!(ThemeArg::Dark.theme(), Some(Theme::Dark));

    let args = Args::try_parse_from(["ev", "convert", "temperature", "-40", "C", "F"])
        .expect("parse");
    let Some(Command::Convert(conv)) = args.command else {
        panic!("expected convert command");
    };
    assert_eq!(conv.value, -40.0);
    assert_eq!(conv.from, "C");
}

#[test]
fn no_subcommand_means_menu() {
    let args = Args::try_parse_from(["ev"]).expect("parse");
    assert!(args.command.is_none());
}

#[test]
fn translations_fall_back_to_english() {
    let ko = Translator::new("ko-KR");
    assert_eq!(ko.language(), Language::Ko);
    assert_ne!(ko.t(keys::TIP_OFF_PEAK), "[missing translation]");

    let other = Translator::new("fr");
    assert_eq!(other.language_code(), "en");
    assert_eq!(other.t("no.such.key"), "[missing translation]");
}

#[test]
fn language_precedence() {
    assert_eq!(resolve_language(Some("ko"), Some("en")), "ko");
    assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    assert_eq!(resolve_language(None, Some("ko")), "ko");
}
