#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use std::{fs, path::Path, path::PathBuf};
use tracing::{error, warn};

use ev_charge_calculator::{
    app::Session,
    calc::{self, tips, ChargingType},
    config::UnitSystem,
    fields::{self, InputField},
    format,
    i18n::{self, keys::*, Translator},
    rates,
    store::{Brightness, CalculatorData, ConsentStatus, StorageError, Theme},
};

/// GUI 실행 인자.
#[derive(Parser)]
#[command(author, version, about)]
struct GuiArgs {
    /// Path to config.toml.
    #[clap(long)]
    config: Option<PathBuf>,

    /// Language code (en, ko).
    #[clap(long)]
    lang: Option<String>,

    /// Directory where inputs, theme and consent are stored.
    #[clap(long = "data-dir")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let session = match Session::open(
        args.config.as_deref(),
        args.lang.as_deref(),
        args.data_dir.as_deref(),
    ) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        follow_system_theme: false,
        ..Default::default()
    };
    eframe::run_native(
        "EV Charge Calculator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("{e}");
            }
            Box::new(GuiApp::new(session))
        }),
    )
}

/// 한글 표시용 시스템 폰트를 찾아 등록한다. 없으면 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    candidates.extend(
        [
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .iter()
        .map(PathBuf::from),
    );
    let path = candidates
        .iter()
        .find(|p| p.exists())
        .ok_or_else(|| "Korean font not found; using the default font.".to_string())?;
    let bytes = fs::read(path).map_err(|e| format!("Failed to read font ({}): {e}", path.display()))?;

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("korean_font".into(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        // 기본 폰트 뒤에 두어 영문 글꼴은 유지한다.
        fonts
            .families
            .entry(family)
            .or_default()
            .push("korean_font".into());
    }
    ctx.set_fonts(fonts);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    ChargingTime,
    Frequency,
    Cost,
    Settings,
}

struct GuiApp {
    session: Session,
    tab: Tab,
    /// 비용 탭에서 피크/경부하 요금제를 쓸지
    time_of_use: bool,
    lang_input: String,
    status: Option<String>,
}

impl GuiApp {
    fn new(session: Session) -> Self {
        let lang_input = session.config.language.clone();
        Self {
            session,
            tab: Tab::ChargingTime,
            time_of_use: false,
            lang_input,
            status: None,
        }
    }

    fn tr(&self) -> Translator {
        self.session.tr.clone()
    }

    fn report(&mut self, result: Result<(), StorageError>) {
        if let Err(e) = result {
            error!(error = %e, "failed to save preferences");
            self.status = Some(format!("{}: {e}", self.session.tr.t(ERROR_PREFIX)));
        }
    }

    /// 편집된 입력값을 스토어에 반영한다.
    fn commit(&mut self, data: CalculatorData) {
        if &data != self.session.stores.calculator().get() {
            let result = self.session.stores.calculator_mut().set(data);
            self.report(result);
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context, frame: &Frame) {
        if let Some(system) = frame.info().system_theme {
            let system = match system {
                eframe::Theme::Dark => Brightness::Dark,
                eframe::Theme::Light => Brightness::Light,
            };
            let result = self.session.stores.update_system_theme(system);
            self.report(result);
        }
        let visuals = match self.session.stores.theme().get().effective() {
            Brightness::Dark => egui::Visuals::dark(),
            Brightness::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr();
        for (tab, key) in [
            (Tab::ChargingTime, TAB_CHARGING_TIME),
            (Tab::Frequency, TAB_FREQUENCY),
            (Tab::Cost, TAB_COST),
            (Tab::Settings, TAB_SETTINGS),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(tr.t(key))
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_charging_time(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr();
        let mut data = self.session.stores.calculator().get().clone();
        field_sliders(ui, &tr, &mut data, &fields::CHARGING_TIME_FIELDS);
        ui.horizontal(|ui| {
            ui.label(tr.t(FIELD_CHARGING_TYPE));
            ui.radio_value(&mut data.charging_type, ChargingType::Ac, tr.t(CHARGING_TYPE_AC));
            ui.radio_value(&mut data.charging_type, ChargingType::Dc, tr.t(CHARGING_TYPE_DC));
        });
        ui.separator();

        if !fields::is_form_valid(&data, &fields::CHARGING_TIME_FIELDS) {
            error_panel(ui, &tr, tr.t(TIP_ERROR_RANGES));
        } else {
            match calc::estimate(&data.charge_request()) {
                Ok(estimate) => {
                    result_grid(
                        ui,
                        "charging_time_result",
                        &[
                            (
                                tr.t(RESULT_CHARGING_TIME),
                                format::format_time(estimate.hours, estimate.minutes, tr.language()),
                            ),
                            (tr.t(RESULT_ENERGY_NEEDED), format::format_energy(estimate.energy_needed_kwh)),
                            (tr.t(RESULT_ACTUAL_POWER), format::format_power(estimate.actual_power_kw)),
                            (
                                tr.t(RESULT_LIMITING_FACTOR),
                                tr.t(format::limiting_factor_key(estimate.limiting_factor)).to_string(),
                            ),
                        ],
                    );
                    let tips = tips::charging_time_tips(&tips::ChargingTimeTipInput {
                        battery_kwh: data.battery_kwh,
                        target_charge_percent: data.target_charge,
                        charging_power_kw: data.charging_power,
                        charging_efficiency_percent: data.charging_efficiency,
                        hours: estimate.hours,
                        minutes: estimate.minutes,
                    });
                    tips_panel(ui, &tr, &tips);
                }
                Err(e) => error_panel(ui, &tr, &e.to_string()),
            }
        }
        self.commit(data);
    }

    fn ui_frequency(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr();
        let unit_system = self.session.config.unit_system;
        let mut data = self.session.stores.calculator().get().clone();
        field_sliders(ui, &tr, &mut data, &fields::FREQUENCY_FIELDS);
        ui.separator();

        if fields::is_form_valid(&data, &fields::FREQUENCY_FIELDS) {
            let estimate = calc::weekly_ev_charge_estimator(data.frequency_input());
            result_grid(
                ui,
                "frequency_result",
                &[
                    (
                        tr.t(RESULT_EFFECTIVE_RANGE),
                        format::format_distance_in(estimate.effective_range_km, unit_system),
                    ),
                    (tr.t(RESULT_WEEKLY_CHARGES), estimate.weekly_charges.to_string()),
                ],
            );
            if estimate.safety_charge_added {
                ui.small(tr.t(RESULT_SAFETY_CHARGE));
            }
            let tips = tips::frequency_tips(&tips::FrequencyTipInput {
                weekly_distance_km: data.weekly_distance_km,
                battery_kwh: data.battery_kwh,
                consumption_kwh_per_100km: data.consumption_kwh_per_100km,
                usable_fraction: data.usable_fraction,
                effective_range_km: estimate.effective_range_km,
                weekly_charges: estimate.weekly_charges,
            });
            tips_panel(ui, &tr, &tips);
        } else {
            error_panel(ui, &tr, tr.t(TIP_ERROR_RANGES));
        }
        self.commit(data);
    }

    fn ui_cost(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr();
        let mut data = self.session.stores.calculator().get().clone();
        field_sliders(ui, &tr, &mut data, &fields::COST_FIELDS);

        ui.horizontal(|ui| {
            ui.label(tr.t(SETTINGS_CURRENT_CURRENCY));
            egui::ComboBox::from_id_source("currency")
                .selected_text(data.currency.clone())
                .show_ui(ui, |ui| {
                    for currency in rates::CURRENCIES.iter() {
                        ui.selectable_value(
                            &mut data.currency,
                            currency.code.to_string(),
                            format!("{} ({})", currency.code, currency.name),
                        );
                    }
                });
        });
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.time_of_use, false, tr.t(RATE_TYPE_FLAT));
            ui.selectable_value(&mut self.time_of_use, true, tr.t(RATE_TYPE_VARIABLE));
        });
        field_sliders(ui, &tr, &mut data, fields::rate_fields(self.time_of_use));
        if !self.time_of_use {
            regional_rate_menu(ui, &mut data);
        }
        ui.separator();

        match calc::calculate_cost_summary(&data.cost_summary_input(self.time_of_use)) {
            Ok(summary) => {
                let money = |v: f64| format::format_currency(v, &data.currency);
                result_grid(
                    ui,
                    "cost_result",
                    &[
                        (tr.t(RESULT_ENERGY_PER_CHARGE), format::format_energy(summary.energy_per_charge_kwh)),
                        (tr.t(RESULT_WEEKLY_CHARGES), summary.weekly_charges.to_string()),
                        (tr.t(RESULT_COST_PER_CHARGE), money(summary.cost_per_charge)),
                        (tr.t(RESULT_WEEKLY_COST), money(summary.weekly_cost)),
                        (tr.t(RESULT_MONTHLY_COST), money(summary.monthly_cost)),
                        (tr.t(RESULT_ANNUAL_COST), money(summary.annual_cost)),
                        (
                            tr.t(RESULT_CO2_SAVINGS),
                            format!(
                                "{} kg",
                                format::format_number(calc::default_co2_savings(data.weekly_distance_km), 2)
                            ),
                        ),
                    ],
                );
                network_table(ui, &data, summary.energy_per_charge_kwh);
                tips_panel(ui, &tr, &tips::cost_tips());
            }
            Err(e) => error_panel(ui, &tr, &e.to_string()),
        }
        self.commit(data);
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr();
        ui.heading(tr.t(TAB_SETTINGS));
        ui.separator();

        let mut theme = self.session.stores.theme().get().current;
        ui.horizontal(|ui| {
            ui.label(tr.t(SETTINGS_CURRENT_THEME));
            for t in [Theme::Light, Theme::Dark, Theme::System] {
                ui.radio_value(&mut theme, t, tr.t(format::theme_key(t)));
            }
        });
        if theme != self.session.stores.theme().get().current {
            let result = self.session.stores.set_theme(theme);
            self.report(result);
        }

        let mut unit_system = self.session.config.unit_system;
        ui.horizontal(|ui| {
            ui.label(tr.t(SETTINGS_CURRENT_UNIT_SYSTEM));
            ui.radio_value(&mut unit_system, UnitSystem::Metric, "Metric");
            ui.radio_value(&mut unit_system, UnitSystem::Imperial, "Imperial");
        });
        if unit_system != self.session.config.unit_system {
            self.session.config.unit_system = unit_system;
            self.save_config(&tr);
        }

        ui.horizontal(|ui| {
            ui.label(tr.t(SETTINGS_LANGUAGE));
            egui::ComboBox::from_id_source("lang_choice")
                .selected_text(self.lang_input.clone())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.lang_input, "auto".into(), tr.t(THEME_SYSTEM));
                    ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                    ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                });
        });
        if self.lang_input != self.session.config.language {
            self.session.config.language = self.lang_input.clone();
            let resolved = i18n::resolve_language(None, Some(&self.session.config.language));
            self.session.tr = Translator::new(&resolved);
            self.save_config(&tr);
        }

        ui.separator();
        let status = self.session.stores.consent().get().status();
        ui.horizontal(|ui| {
            ui.label(tr.t(SETTINGS_CURRENT_CONSENT));
            ui.strong(tr.t(format::consent_status_key(status)));
        });
        ui.horizontal(|ui| {
            if ui.button(tr.t(CONSENT_ACCEPT)).clicked() {
                let result = self.session.stores.accept_consent();
                self.report(result);
            }
            if ui.button(tr.t(CONSENT_DECLINE)).clicked() {
                let result = self.session.stores.decline_consent();
                self.report(result);
            }
        });
        ui.separator();
        if ui.button(tr.t(SETTINGS_RESET_BUTTON)).clicked() {
            let result = self.session.stores.reset_calculator();
            self.report(result);
            self.status = Some(tr.t(SETTINGS_RESET_DONE).to_string());
        }
    }

    fn save_config(&mut self, tr: &Translator) {
        self.status = Some(match self.session.save_config() {
            Ok(()) => tr.t(SETTINGS_SAVED).to_string(),
            Err(e) => {
                error!(error = %e, "failed to save config");
                format!("{}: {e}", tr.t(ERROR_PREFIX))
            }
        });
    }

    fn ui_consent_banner(&mut self, ctx: &egui::Context) {
        if self.session.stores.consent().get().status() != ConsentStatus::Pending {
            return;
        }
        let tr = self.tr();
        egui::TopBottomPanel::bottom("consent_banner").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.strong(tr.t(CONSENT_TITLE));
            ui.label(tr.t(CONSENT_BODY));
            ui.horizontal(|ui| {
                if ui.button(tr.t(CONSENT_ACCEPT)).clicked() {
                    let result = self.session.stores.accept_consent();
                    self.report(result);
                }
                if ui.button(tr.t(CONSENT_DECLINE)).clicked() {
                    let result = self.session.stores.decline_consent();
                    self.report(result);
                }
            });
            ui.add_space(6.0);
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        self.sync_theme(ctx, frame);
        let tr = self.tr();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("EV Charge Calculator");
                ui.separator();
                let icon = match self.session.stores.theme().get().effective() {
                    Brightness::Dark => "☀",
                    Brightness::Light => "🌙",
                };
                if ui.button(icon).on_hover_text(tr.t(THEME_TOGGLE)).clicked() {
                    let result = self.session.stores.toggle_theme();
                    self.report(result);
                }
                if let Some(msg) = &self.status {
                    ui.separator();
                    ui.label(msg);
                }
            });
        });

        self.ui_consent_banner(ctx);

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::ChargingTime => self.ui_charging_time(ui),
                    Tab::Frequency => self.ui_frequency(ui),
                    Tab::Cost => self.ui_cost(ui),
                    Tab::Settings => self.ui_settings(ui),
                });
        });
    }
}

/// 필드 목록을 슬라이더로 그린다.
fn field_sliders(ui: &mut egui::Ui, tr: &Translator, data: &mut CalculatorData, input_fields: &[InputField]) {
    egui::Grid::new(ui.next_auto_id())
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for field in input_fields {
                ui.label(tr.t(field.label));
                let mut value = fields::get_value(data, field.key);
                let slider = egui::Slider::new(&mut value, field.range.min..=field.range.max)
                    .step_by(field.range.step)
                    .suffix(format!(" {}", field.unit));
                if ui.add(slider).changed() {
                    fields::set_value(data, field, value);
                }
                ui.end_row();
            }
        });
}

fn result_grid(ui: &mut egui::Ui, id: &str, rows: &[(&str, String)]) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for (label, value) in rows {
                ui.label(*label);
                ui.strong(value);
                ui.end_row();
            }
        });
}

fn tips_panel(ui: &mut egui::Ui, tr: &Translator, tips: &[&'static str]) {
    ui.add_space(8.0);
    egui::CollapsingHeader::new(tr.t(TIPS_HEADING))
        .default_open(true)
        .show(ui, |ui| {
            for tip in tips {
                ui.label(format!("• {}", tr.t(tip)));
            }
        });
}

fn error_panel(ui: &mut egui::Ui, tr: &Translator, message: &str) {
    ui.colored_label(ui.visuals().error_fg_color, format!("{}: {message}", tr.t(ERROR_PREFIX)));
    tips_panel(ui, tr, &tips::error_tips());
}

/// 지역 평균 요금을 골라 단일 요금에 넣는다. 선택한 통화로 환산한다.
fn regional_rate_menu(ui: &mut egui::Ui, data: &mut CalculatorData) {
    ui.menu_button("Regional average rates", |ui| {
        for region in rates::REGIONAL_RATES.iter() {
            ui.menu_button(region.region, |ui| {
                for area in region.rates {
                    let Some(rate) = rates::convert_currency(area.rate, region.currency, &data.currency)
                    else {
                        continue;
                    };
                    let label = format!("{}: {}", area.area, format::format_currency(rate, &data.currency));
                    if ui.button(label).clicked() {
                        data.electricity_rate = calc::round_to(rate, 2);
                        ui.close_menu();
                    }
                }
            });
        }
    });
}

/// 1회 충전 에너지 기준 공용 충전 네트워크 세션 비용 표.
fn network_table(ui: &mut egui::Ui, data: &CalculatorData, energy_kwh: f64) {
    egui::CollapsingHeader::new("Public charging networks")
        .default_open(false)
        .show(ui, |ui| {
            for region in rates::CHARGING_NETWORKS.iter() {
                ui.strong(region.region);
                egui::Grid::new(("networks", region.region))
                    .num_columns(2)
                    .show(ui, |ui| {
                        for network in region.networks {
                            let cost = network.session_cost(energy_kwh);
                            let shown = rates::convert_currency(cost, region.currency, &data.currency)
                                .map(|v| format::format_currency(v, &data.currency))
                                .unwrap_or_else(|| format::format_currency(cost, region.currency));
                            ui.label(network.name);
                            ui.label(shown);
                            ui.end_row();
                        }
                    });
            }
        });
}
