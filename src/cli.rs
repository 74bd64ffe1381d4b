use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::calc::ChargingType;
use crate::fields::{self, InputField};
use crate::store::{CalculatorData, Theme};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Path to config.toml.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Language code (en, ko). Overrides the config file.
    #[clap(long, global = true)]
    pub lang: Option<String>,

    /// Directory where inputs, theme and consent are stored.
    #[clap(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Runs the interactive menu when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the charging time for a session.
    #[clap(name = "time")]
    Time(Box<TimeArgs>),

    /// Estimate how often per week the car needs charging.
    #[clap(name = "frequency")]
    Frequency(FrequencyArgs),

    /// Estimate charging costs per charge, week, month and year.
    #[clap(name = "cost")]
    Cost(Box<CostArgs>),

    /// Annual CO₂ savings compared to a petrol car.
    #[clap(name = "co2")]
    Co2(Co2Args),

    /// Convert a distance, temperature, energy or consumption value.
    #[clap(name = "convert")]
    Convert(ConvertArgs),

    /// Show the stored preferences.
    #[clap(name = "settings")]
    Settings,

    /// Change the colour theme.
    #[clap(name = "theme")]
    Theme(ThemeArgs),

    /// Allow or refuse saving calculator inputs.
    #[clap(name = "consent")]
    Consent(ConsentArgs),

    /// Reset calculator inputs to their defaults.
    #[clap(name = "reset")]
    Reset,
}

#[derive(Copy, Clone, Parser)]
pub struct VehicleArgs {
    /// Battery capacity in kWh.
    #[clap(long = "battery-kwh")]
    pub battery_kwh: Option<f64>,

    /// Initial state of charge in percent.
    #[clap(long = "initial")]
    pub initial_charge: Option<f64>,

    /// Target state of charge in percent.
    #[clap(long = "target")]
    pub target_charge: Option<f64>,

    /// Charging efficiency in percent.
    #[clap(long = "efficiency")]
    pub charging_efficiency: Option<f64>,
}

#[derive(Copy, Clone, Parser)]
pub struct DrivingArgs {
    /// Weekly driving distance in km.
    #[clap(long = "weekly-km")]
    pub weekly_distance_km: Option<f64>,

    /// Energy consumption in kWh/100km.
    #[clap(long = "consumption")]
    pub consumption_kwh_per_100km: Option<f64>,
}

#[derive(Copy, Clone, Parser)]
pub struct TimeArgs {
    #[clap(flatten)]
    pub vehicle: VehicleArgs,

    /// Requested charging power in kW.
    #[clap(long = "power-kw")]
    pub charging_power: Option<f64>,

    /// Battery temperature in °C.
    #[clap(long = "temperature-c", allow_hyphen_values = true)]
    pub temperature_c: Option<f64>,

    /// Number of AC phases (1-3).
    #[clap(long)]
    pub phases: Option<u8>,

    #[clap(long = "type", value_enum)]
    pub charging_type: Option<ChargingTypeArg>,
}

#[derive(Copy, Clone, Parser)]
pub struct FrequencyArgs {
    #[clap(flatten)]
    pub driving: DrivingArgs,

    /// Battery capacity in kWh.
    #[clap(long = "battery-kwh")]
    pub battery_kwh: Option<f64>,

    /// Usable battery in percent.
    #[clap(long = "usable-percent")]
    pub usable_percent: Option<f64>,
}

#[derive(Clone, Parser)]
pub struct CostArgs {
    #[clap(flatten)]
    pub vehicle: VehicleArgs,

    #[clap(flatten)]
    pub driving: DrivingArgs,

    /// Flat electricity rate per kWh.
    #[clap(long)]
    pub rate: Option<f64>,

    /// Use peak/off-peak pricing instead of the flat rate.
    #[clap(long = "time-of-use")]
    pub time_of_use: bool,

    #[clap(long = "peak-rate")]
    pub peak_rate: Option<f64>,

    #[clap(long = "off-peak-rate")]
    pub off_peak_rate: Option<f64>,

    /// Share of charging done off-peak, in percent.
    #[clap(long = "off-peak-share")]
    pub off_peak_share: Option<f64>,

    /// Currency code (USD, EUR, CAD, GBP, AUD, JPY).
    #[clap(long)]
    pub currency: Option<String>,
}

#[derive(Copy, Clone, Parser)]
pub struct Co2Args {
    /// Weekly driving distance in km.
    #[clap(long = "weekly-km")]
    pub weekly_distance_km: Option<f64>,
}

#[derive(Clone, Parser)]
pub struct ConvertArgs {
    /// distance, temperature, energy or consumption
    pub kind: String,

    #[clap(allow_hyphen_values = true)]
    pub value: f64,

    pub from: String,

    pub to: String,
}

#[derive(Copy, Clone, Parser)]
pub struct ThemeArgs {
    #[clap(value_enum)]
    pub theme: ThemeArg,
}

#[derive(Copy, Clone, Parser)]
pub struct ConsentArgs {
    #[clap(value_enum)]
    pub decision: ConsentArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChargingTypeArg {
    Ac,
    Dc,
}

impl From<ChargingTypeArg> for ChargingType {
    fn from(value: ChargingTypeArg) -> Self {
        match value {
            ChargingTypeArg::Ac => ChargingType::Ac,
            ChargingTypeArg::Dc => ChargingType::Dc,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    System,
    /// Flip the effective theme.
    Toggle,
}

impl ThemeArg {
    /// `Toggle`은 고정 테마가 아니라서 `None`.
    pub fn theme(self) -> Option<Theme> {
        match self {
            ThemeArg::Light => Some(Theme::Light),
            ThemeArg::Dark => Some(Theme::Dark),
            ThemeArg::System => Some(Theme::System),
            ThemeArg::Toggle => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConsentArg {
    Accept,
    Decline,
}

fn apply(data: &mut CalculatorData, field: &InputField, value: Option<f64>) {
    if let Some(v) = value {
        fields::set_value(data, field, v);
    }
}

impl VehicleArgs {
    pub fn apply(&self, data: &mut CalculatorData) {
        apply(data, &fields::BATTERY_CAPACITY_FIELD, self.battery_kwh);
        apply(data, &fields::INITIAL_CHARGE_FIELD, self.initial_charge);
        apply(data, &fields::TARGET_CHARGE_FIELD, self.target_charge);
        apply(data, &fields::CHARGING_EFFICIENCY_FIELD, self.charging_efficiency);
    }
}

impl DrivingArgs {
    pub fn apply(&self, data: &mut CalculatorData) {
        apply(data, &fields::WEEKLY_DISTANCE_FIELD, self.weekly_distance_km);
        apply(data, &fields::CONSUMPTION_FIELD, self.consumption_kwh_per_100km);
    }
}

impl TimeArgs {
    pub fn apply(&self, data: &mut CalculatorData) {
        self.vehicle.apply(data);
        apply(data, &fields::CHARGING_POWER_FIELD, self.charging_power);
        apply(data, &fields::TEMPERATURE_FIELD, self.temperature_c);
        if let Some(phases) = self.phases {
            data.phases = phases;
        }
        if let Some(kind) = self.charging_type {
            data.charging_type = kind.into();
        }
    }
}

impl FrequencyArgs {
    pub fn apply(&self, data: &mut CalculatorData) {
        self.driving.apply(data);
        apply(data, &fields::BATTERY_CAPACITY_FIELD, self.battery_kwh);
        apply(data, &fields::USABLE_BATTERY_FIELD, self.usable_percent);
    }
}

impl CostArgs {
    pub fn apply(&self, data: &mut CalculatorData) {
        self.vehicle.apply(data);
        self.driving.apply(data);
        apply(data, &fields::ELECTRICITY_RATE_FIELD, self.rate);
        apply(data, &fields::PEAK_RATE_FIELD, self.peak_rate);
        apply(data, &fields::OFF_PEAK_RATE_FIELD, self.off_peak_rate);
        apply(data, &fields::OFF_PEAK_SHARE_FIELD, self.off_peak_share);
        if let Some(currency) = &self.currency {
            data.currency = currency.trim().to_uppercase();
        }
    }
}
