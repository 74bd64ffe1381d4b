use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::calc::{self, ChargeError, CostError};
use crate::cli::{Args, Command, ConsentArg};
use crate::config::{self, Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::i18n::{self, Translator};
use crate::logging;
use crate::store::{FileStorage, StorageError, StoreContext};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 입력값 저장소 오류
    Storage(StorageError),
    /// 단위 변환 오류
    Conversion(ConversionError),
    /// 충전 시간 계산 오류
    Charge(ChargeError),
    /// 충전 비용 계산 오류
    Cost(CostError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Storage(e) => write!(f, "{e}"),
            AppError::Conversion(e) => write!(f, "{e}"),
            AppError::Charge(e) => write!(f, "{e}"),
            AppError::Cost(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        AppError::Storage(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<ChargeError> for AppError {
    fn from(value: ChargeError) -> Self {
        AppError::Charge(value)
    }
}

impl From<CostError> for AppError {
    fn from(value: CostError) -> Self {
        AppError::Cost(value)
    }
}

/// 한 번의 실행에 필요한 설정, 번역기, 스토어 묶음.
pub struct Session {
    pub config: Config,
    pub config_path: PathBuf,
    pub tr: Translator,
    pub stores: StoreContext,
}

impl Session {
    /// 설정을 읽고 로그를 초기화한 뒤 스토어를 연다.
    ///
    /// 언어는 CLI 인자, 설정, 시스템 로케일 순으로 정한다.
    pub fn open(
        config_path: Option<&Path>,
        lang: Option<&str>,
        data_dir: Option<&Path>,
    ) -> Result<Self, AppError> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH));
        let config = config::load_from(&config_path)?;
        logging::init_tracing(&config.log_level);
        debug!(path = %config_path.display(), "config loaded");

        let lang_code = i18n::resolve_language(lang, Some(&config.language));
        let tr = Translator::new(&lang_code);

        let data_dir = data_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.data_dir.clone());
        info!(data_dir = %data_dir.display(), lang = tr.language_code(), "session opened");
        let stores = StoreContext::new(FileStorage::new(data_dir));

        Ok(Self {
            config,
            config_path,
            tr,
            stores,
        })
    }

    pub fn save_config(&self) -> Result<(), AppError> {
        self.config.save_to(&self.config_path)?;
        Ok(())
    }
}

/// CLI 진입점. 하위 명령이 없으면 대화형 메뉴를 실행한다.
pub fn run(args: Args) -> Result<(), AppError> {
    let mut session = Session::open(
        args.config.as_deref(),
        args.lang.as_deref(),
        args.data_dir.as_deref(),
    )?;
    match args.command {
        None => run_menu(&mut session),
        Some(command) => run_command(&mut session, command),
    }
}

/// 하위 명령 하나를 실행한다. 숫자 옵션은 이번 실행에만 적용되고 저장되지 않는다.
pub fn run_command(session: &mut Session, command: Command) -> Result<(), AppError> {
    let tr = &session.tr;
    let unit_system = session.config.unit_system;
    let mut data = session.stores.calculator().get().clone();
    match command {
        Command::Time(args) => {
            args.apply(&mut data);
            let estimate = calc::estimate(&data.charge_request())?;
            ui_cli::print_charge_report(tr, &data, &estimate);
        }
        Command::Frequency(args) => {
            args.apply(&mut data);
            let estimate = calc::weekly_ev_charge_estimator(data.frequency_input());
            ui_cli::print_frequency_report(tr, &data, &estimate, unit_system);
        }
        Command::Cost(args) => {
            args.apply(&mut data);
            let summary = calc::calculate_cost_summary(&data.cost_summary_input(args.time_of_use))?;
            ui_cli::print_cost_report(tr, &data, &summary);
        }
        Command::Co2(args) => {
            let weekly_km = args.weekly_distance_km.unwrap_or(data.weekly_distance_km);
            ui_cli::print_co2_report(tr, weekly_km);
        }
        Command::Convert(args) => {
            let result = conversion::convert_named(&args.kind, args.value, &args.from, &args.to)?;
            println!("{} {result} {}", tr.t(i18n::keys::UNIT_CONVERSION_RESULT), args.to.trim());
        }
        Command::Settings => ui_cli::print_settings(tr, &session.config, &session.stores),
        Command::Theme(args) => {
            match args.theme.theme() {
                Some(theme) => session.stores.set_theme(theme)?,
                None => session.stores.toggle_theme()?,
            }
            ui_cli::print_settings(tr, &session.config, &session.stores);
        }
        Command::Consent(args) => {
            match args.decision {
                ConsentArg::Accept => session.stores.accept_consent()?,
                ConsentArg::Decline => session.stores.decline_consent()?,
            }
            ui_cli::print_settings(tr, &session.config, &session.stores);
        }
        Command::Reset => {
            session.stores.reset_calculator()?;
            println!("{}", tr.t(i18n::keys::SETTINGS_RESET_DONE));
        }
    }
    Ok(())
}

/// 대화형 메뉴 루프를 실행한다.
pub fn run_menu(session: &mut Session) -> Result<(), AppError> {
    ui_cli::ask_consent_if_pending(&session.tr, &mut session.stores)?;
    loop {
        let tr = &session.tr;
        match ui_cli::main_menu(tr)? {
            MenuChoice::ChargingTime => ui_cli::handle_charging_time(tr, &mut session.stores)?,
            MenuChoice::Frequency => {
                ui_cli::handle_frequency(tr, &mut session.stores, session.config.unit_system)?
            }
            MenuChoice::Cost => ui_cli::handle_cost(tr, &mut session.stores)?,
            MenuChoice::Co2 => ui_cli::handle_co2(tr, &mut session.stores)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, &mut session.config, &mut session.stores)? {
                    session.save_config()?;
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
