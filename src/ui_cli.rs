use std::io::{self, Write};

use crate::app::AppError;
use crate::calc::tips;
use crate::calc::{self, ChargeEstimate, ChargingType, CostSummary, FrequencyEstimate};
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::fields::{self, InputField};
use crate::format;
use crate::i18n::keys::*;
use crate::i18n::Translator;
use crate::quantity::QuantityKind;
use crate::rates::find_currency;
use crate::store::{CalculatorData, ConsentStatus, StoreContext, Theme};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ChargingTime,
    Frequency,
    Cost,
    Co2,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        MAIN_MENU_TITLE,
        MAIN_MENU_CHARGING_TIME,
        MAIN_MENU_FREQUENCY,
        MAIN_MENU_COST,
        MAIN_MENU_CO2,
        MAIN_MENU_UNIT_CONVERSION,
        MAIN_MENU_SETTINGS,
        MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ChargingTime),
            "2" => return Ok(MenuChoice::Frequency),
            "3" => return Ok(MenuChoice::Cost),
            "4" => return Ok(MenuChoice::Co2),
            "5" => return Ok(MenuChoice::UnitConversion),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(INVALID_SELECTION_RETRY)),
        }
    }
}

/// 저장 동의를 아직 정하지 않았으면 묻는다.
pub fn ask_consent_if_pending(tr: &Translator, stores: &mut StoreContext) -> Result<(), AppError> {
    if stores.consent().get().status() != ConsentStatus::Pending {
        return Ok(());
    }
    println!("\n{}", tr.t(CONSENT_TITLE));
    println!("{}", tr.t(CONSENT_BODY));
    loop {
        let answer = read_line(tr.t(CONSENT_PROMPT))?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" | "예" => return Ok(stores.accept_consent()?),
            "n" | "no" | "아니오" => return Ok(stores.decline_consent()?),
            _ => println!("{}", tr.t(INVALID_SELECTION_RETRY)),
        }
    }
}

/// 충전 시간 메뉴를 처리한다.
pub fn handle_charging_time(tr: &Translator, stores: &mut StoreContext) -> Result<(), AppError> {
    println!("{}", tr.t(CHARGING_TIME_HEADING));
    println!("{}", tr.t(KEEP_CURRENT_HINT));
    let mut data = stores.calculator().get().clone();
    edit_fields(tr, &mut data, &fields::CHARGING_TIME_FIELDS)?;
    data.charging_type = read_charging_type(tr, data.charging_type)?;
    stores.calculator_mut().set(data.clone())?;

    match calc::estimate(&data.charge_request()) {
        Ok(estimate) => print_charge_report(tr, &data, &estimate),
        Err(e) => print_error(tr, &e),
    }
    Ok(())
}

/// 충전 빈도 메뉴를 처리한다.
pub fn handle_frequency(
    tr: &Translator,
    stores: &mut StoreContext,
    unit_system: UnitSystem,
) -> Result<(), AppError> {
    println!("{}", tr.t(FREQUENCY_HEADING));
    println!("{}", tr.t(KEEP_CURRENT_HINT));
    let mut data = stores.calculator().get().clone();
    edit_fields(tr, &mut data, &fields::FREQUENCY_FIELDS)?;
    stores.calculator_mut().set(data.clone())?;

    let estimate = calc::weekly_ev_charge_estimator(data.frequency_input());
    print_frequency_report(tr, &data, &estimate, unit_system);
    Ok(())
}

/// 충전 비용 메뉴를 처리한다.
pub fn handle_cost(tr: &Translator, stores: &mut StoreContext) -> Result<(), AppError> {
    println!("{}", tr.t(COST_HEADING));
    println!("{}", tr.t(KEEP_CURRENT_HINT));
    let mut data = stores.calculator().get().clone();
    edit_fields(tr, &mut data, &fields::COST_FIELDS)?;
    println!("{}", tr.t(RATE_TYPE_OPTIONS));
    let time_of_use = read_line(tr.t(PROMPT_SELECT))?.trim() == "2";
    edit_fields(tr, &mut data, fields::rate_fields(time_of_use))?;
    stores.calculator_mut().set(data.clone())?;

    match calc::calculate_cost_summary(&data.cost_summary_input(time_of_use)) {
        Ok(summary) => print_cost_report(tr, &data, &summary),
        Err(e) => print_error(tr, &e),
    }
    Ok(())
}

/// CO₂ 절감량 메뉴를 처리한다.
pub fn handle_co2(tr: &Translator, stores: &mut StoreContext) -> Result<(), AppError> {
    println!("{}", tr.t(CO2_HEADING));
    println!("{}", tr.t(KEEP_CURRENT_HINT));
    let mut data = stores.calculator().get().clone();
    edit_fields(tr, &mut data, &[fields::WEEKLY_DISTANCE_FIELD])?;
    stores.calculator_mut().set(data.clone())?;
    print_co2_report(tr, data.weekly_distance_km);
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    match conversion::convert(kind, value, from_unit.trim(), to_unit.trim()) {
        Ok(result) => println!("{} {result} {}", tr.t(UNIT_CONVERSION_RESULT), to_unit.trim()),
        Err(e) => print_error(tr, &e),
    }
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Distance),
        2 => Some(QuantityKind::Temperature),
        3 => Some(QuantityKind::Energy),
        4 => Some(QuantityKind::Consumption),
        _ => None,
    }
}

/// 설정 메뉴를 처리한다. 설정 파일을 저장해야 하면 `true`.
pub fn handle_settings(
    tr: &Translator,
    cfg: &mut Config,
    stores: &mut StoreContext,
) -> Result<bool, AppError> {
    print_settings(tr, cfg, stores);
    println!("{}", tr.t(SETTINGS_OPTIONS));
    let sel = read_line(tr.t(PROMPT_SELECT))?;
    match sel.trim() {
        "" => Ok(false),
        "1" => {
            let theme = match read_line(tr.t(SETTINGS_PROMPT_THEME))?.trim() {
                "1" => Theme::Light,
                "2" => Theme::Dark,
                "3" => Theme::System,
                _ => {
                    println!("{}", tr.t(SETTINGS_INVALID));
                    return Ok(false);
                }
            };
            stores.set_theme(theme)?;
            println!("{}", tr.t(SETTINGS_SAVED));
            Ok(false)
        }
        "2" => {
            cfg.unit_system = match read_line(tr.t(SETTINGS_PROMPT_UNIT_SYSTEM))?.trim() {
                "1" => UnitSystem::Metric,
                "2" => UnitSystem::Imperial,
                _ => {
                    println!("{}", tr.t(SETTINGS_INVALID));
                    return Ok(false);
                }
            };
            println!("{}", tr.t(SETTINGS_SAVED));
            Ok(true)
        }
        "3" => {
            let code = read_line(tr.t(SETTINGS_PROMPT_CURRENCY))?;
            match find_currency(&code) {
                Some(currency) => {
                    stores
                        .calculator_mut()
                        .update(|d| d.currency = currency.code.to_string())?;
                    println!("{}", tr.t(SETTINGS_SAVED));
                }
                None => println!("{}", tr.t(SETTINGS_INVALID)),
            }
            Ok(false)
        }
        "4" => {
            let answer = read_line(tr.t(CONSENT_PROMPT))?;
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" | "예" => stores.accept_consent()?,
                "n" | "no" | "아니오" => stores.decline_consent()?,
                _ => println!("{}", tr.t(SETTINGS_INVALID)),
            }
            Ok(false)
        }
        "5" => {
            stores.reset_calculator()?;
            println!("{}", tr.t(SETTINGS_RESET_DONE));
            Ok(false)
        }
        _ => {
            println!("{}", tr.t(SETTINGS_INVALID));
            Ok(false)
        }
    }
}

pub fn print_settings(tr: &Translator, cfg: &Config, stores: &StoreContext) {
    println!("{}", tr.t(SETTINGS_HEADING));
    let theme = stores.theme().get();
    println!("{} {}", tr.t(SETTINGS_CURRENT_THEME), tr.t(format::theme_key(theme.current)));
    println!("{} {}", tr.t(SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system.as_str());
    println!(
        "{} {}",
        tr.t(SETTINGS_CURRENT_CURRENCY),
        stores.calculator().get().currency
    );
    println!(
        "{} {}",
        tr.t(SETTINGS_CURRENT_CONSENT),
        tr.t(format::consent_status_key(stores.consent().get().status()))
    );
}

pub fn print_charge_report(tr: &Translator, data: &CalculatorData, estimate: &ChargeEstimate) {
    println!(
        "{} {}",
        tr.t(RESULT_CHARGING_TIME),
        format::format_time(estimate.hours, estimate.minutes, tr.language())
    );
    println!("{} {}", tr.t(RESULT_ENERGY_NEEDED), format::format_energy(estimate.energy_needed_kwh));
    println!("{} {}", tr.t(RESULT_ACTUAL_POWER), format::format_power(estimate.actual_power_kw));
    println!(
        "{} {}",
        tr.t(RESULT_LIMITING_FACTOR),
        tr.t(format::limiting_factor_key(estimate.limiting_factor))
    );
    let tips = tips::charging_time_tips(&tips::ChargingTimeTipInput {
        battery_kwh: data.battery_kwh,
        target_charge_percent: data.target_charge,
        charging_power_kw: data.charging_power,
        charging_efficiency_percent: data.charging_efficiency,
        hours: estimate.hours,
        minutes: estimate.minutes,
    });
    print_tips(tr, &tips);
}

pub fn print_frequency_report(
    tr: &Translator,
    data: &CalculatorData,
    estimate: &FrequencyEstimate,
    unit_system: UnitSystem,
) {
    println!(
        "{} {}",
        tr.t(RESULT_EFFECTIVE_RANGE),
        format::format_distance_in(estimate.effective_range_km, unit_system)
    );
    println!("{} {}", tr.t(RESULT_WEEKLY_CHARGES), estimate.weekly_charges);
    if estimate.safety_charge_added {
        println!("{}", tr.t(RESULT_SAFETY_CHARGE));
    }
    let tips = tips::frequency_tips(&tips::FrequencyTipInput {
        weekly_distance_km: data.weekly_distance_km,
        battery_kwh: data.battery_kwh,
        consumption_kwh_per_100km: data.consumption_kwh_per_100km,
        usable_fraction: data.usable_fraction,
        effective_range_km: estimate.effective_range_km,
        weekly_charges: estimate.weekly_charges,
    });
    print_tips(tr, &tips);
}

pub fn print_cost_report(tr: &Translator, data: &CalculatorData, summary: &CostSummary) {
    let money = |v: f64| format::format_currency(v, &data.currency);
    println!("{} {}", tr.t(RESULT_ENERGY_PER_CHARGE), format::format_energy(summary.energy_per_charge_kwh));
    println!("{} {}", tr.t(RESULT_WEEKLY_CHARGES), summary.weekly_charges);
    println!("{} {}", tr.t(RESULT_COST_PER_CHARGE), money(summary.cost_per_charge));
    println!("{} {}", tr.t(RESULT_WEEKLY_COST), money(summary.weekly_cost));
    println!("{} {}", tr.t(RESULT_MONTHLY_COST), money(summary.monthly_cost));
    println!("{} {}", tr.t(RESULT_ANNUAL_COST), money(summary.annual_cost));
    print_tips(tr, &tips::cost_tips());
}

pub fn print_co2_report(tr: &Translator, weekly_distance_km: f64) {
    let kg = calc::default_co2_savings(weekly_distance_km);
    println!("{} {} kg", tr.t(RESULT_CO2_SAVINGS), format::format_number(kg, 2));
}

fn print_tips(tr: &Translator, tips: &[&'static str]) {
    println!("\n{}:", tr.t(TIPS_HEADING));
    for tip in tips {
        println!("- {}", tr.t(tip));
    }
}

fn print_error(tr: &Translator, err: &dyn std::error::Error) {
    println!("{}: {err}", tr.t(ERROR_PREFIX));
    print_tips(tr, &tips::error_tips());
}

/// 필드마다 현재 값을 보여 주고 새 값을 입력받는다. 엔터면 현재 값을 유지한다.
fn edit_fields(
    tr: &Translator,
    data: &mut CalculatorData,
    input_fields: &[InputField],
) -> Result<(), AppError> {
    for field in input_fields {
        let current = fields::get_value(data, field.key);
        let prompt = format!(
            "{} [{}-{} {}] ({}): ",
            tr.t(field.label),
            field.range.min,
            field.range.max,
            field.unit,
            current
        );
        loop {
            let s = read_line(&prompt)?;
            let s = s.trim();
            if s.is_empty() {
                break;
            }
            match s.parse::<f64>() {
                Ok(v) if field.range.contains(v) => {
                    fields::set_value(data, field, v);
                    break;
                }
                Ok(_) => println!("{}", tr.t(INVALID_SELECTION_RETRY)),
                Err(_) => println!("{}", tr.t(ERROR_INVALID_NUMBER)),
            }
        }
    }
    Ok(())
}

fn read_charging_type(tr: &Translator, current: ChargingType) -> Result<ChargingType, AppError> {
    println!(
        "{}: 1={}  2={} ({})",
        tr.t(FIELD_CHARGING_TYPE),
        tr.t(CHARGING_TYPE_AC),
        tr.t(CHARGING_TYPE_DC),
        current.as_str()
    );
    let sel = read_line(tr.t(PROMPT_SELECT))?;
    let kind = match sel.trim() {
        "1" => ChargingType::Ac,
        "2" => ChargingType::Dc,
        _ => current,
    };
    Ok(kind)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(ERROR_INVALID_NUMBER)),
        }
    }
}
