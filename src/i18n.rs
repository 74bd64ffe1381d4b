use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const KEEP_CURRENT_HINT: &str = "general.keep_current_hint";
    pub const TIPS_HEADING: &str = "general.tips_heading";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CHARGING_TIME: &str = "main_menu.charging_time";
    pub const MAIN_MENU_FREQUENCY: &str = "main_menu.frequency";
    pub const MAIN_MENU_COST: &str = "main_menu.cost";
    pub const MAIN_MENU_CO2: &str = "main_menu.co2";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const TAB_CHARGING_TIME: &str = "tab.charging_time";
    pub const TAB_FREQUENCY: &str = "tab.frequency";
    pub const TAB_COST: &str = "tab.cost";
    pub const TAB_SETTINGS: &str = "tab.settings";

    pub const CHARGING_TIME_HEADING: &str = "charging_time.heading";
    pub const FREQUENCY_HEADING: &str = "frequency.heading";
    pub const COST_HEADING: &str = "cost.heading";
    pub const CO2_HEADING: &str = "co2.heading";

    pub const FIELD_WEEKLY_DISTANCE: &str = "field.weekly_distance";
    pub const FIELD_BATTERY_CAPACITY: &str = "field.battery_capacity";
    pub const FIELD_CONSUMPTION: &str = "field.consumption";
    pub const FIELD_USABLE_BATTERY: &str = "field.usable_battery";
    pub const FIELD_INITIAL_CHARGE: &str = "field.initial_charge";
    pub const FIELD_TARGET_CHARGE: &str = "field.target_charge";
    pub const FIELD_CHARGING_POWER: &str = "field.charging_power";
    pub const FIELD_CHARGING_EFFICIENCY: &str = "field.charging_efficiency";
    pub const FIELD_TEMPERATURE: &str = "field.temperature";
    pub const FIELD_PHASES: &str = "field.phases";
    pub const FIELD_ELECTRICITY_RATE: &str = "field.electricity_rate";
    pub const FIELD_PEAK_RATE: &str = "field.peak_rate";
    pub const FIELD_OFF_PEAK_RATE: &str = "field.off_peak_rate";
    pub const FIELD_OFF_PEAK_SHARE: &str = "field.off_peak_share";
    pub const FIELD_CHARGING_TYPE: &str = "field.charging_type";
    pub const CHARGING_TYPE_AC: &str = "field.charging_type_ac";
    pub const CHARGING_TYPE_DC: &str = "field.charging_type_dc";
    pub const RATE_TYPE_OPTIONS: &str = "field.rate_type_options";
    pub const RATE_TYPE_FLAT: &str = "field.rate_type_flat";
    pub const RATE_TYPE_VARIABLE: &str = "field.rate_type_variable";

    pub const RESULT_CHARGING_TIME: &str = "result.charging_time";
    pub const RESULT_ENERGY_NEEDED: &str = "result.energy_needed";
    pub const RESULT_ACTUAL_POWER: &str = "result.actual_power";
    pub const RESULT_LIMITING_FACTOR: &str = "result.limiting_factor";
    pub const RESULT_EFFECTIVE_RANGE: &str = "result.effective_range";
    pub const RESULT_WEEKLY_CHARGES: &str = "result.weekly_charges";
    pub const RESULT_SAFETY_CHARGE: &str = "result.safety_charge";
    pub const RESULT_COST_PER_CHARGE: &str = "result.cost_per_charge";
    pub const RESULT_WEEKLY_COST: &str = "result.weekly_cost";
    pub const RESULT_MONTHLY_COST: &str = "result.monthly_cost";
    pub const RESULT_ANNUAL_COST: &str = "result.annual_cost";
    pub const RESULT_ENERGY_PER_CHARGE: &str = "result.energy_per_charge";
    pub const RESULT_CO2_SAVINGS: &str = "result.co2_savings";

    pub const LIMIT_NONE: &str = "limit.none";
    pub const LIMIT_PHASES: &str = "limit.phases";
    pub const LIMIT_CONNECTOR: &str = "limit.connector";
    pub const LIMIT_C_RATE: &str = "limit.c_rate";
    pub const LIMIT_TEMPERATURE: &str = "limit.temperature";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_THEME: &str = "settings.current_theme";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_CURRENT_CURRENCY: &str = "settings.current_currency";
    pub const SETTINGS_CURRENT_CONSENT: &str = "settings.current_consent";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_THEME: &str = "settings.prompt_theme";
    pub const SETTINGS_PROMPT_UNIT_SYSTEM: &str = "settings.prompt_unit_system";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_RESET_DONE: &str = "settings.reset_done";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_RESET_BUTTON: &str = "settings.reset_button";

    pub const THEME_LIGHT: &str = "theme.light";
    pub const THEME_DARK: &str = "theme.dark";
    pub const THEME_SYSTEM: &str = "theme.system";
    pub const THEME_TOGGLE: &str = "theme.toggle";

    pub const CONSENT_TITLE: &str = "consent.title";
    pub const CONSENT_BODY: &str = "consent.body";
    pub const CONSENT_PROMPT: &str = "consent.prompt";
    pub const CONSENT_ACCEPT: &str = "consent.accept";
    pub const CONSENT_DECLINE: &str = "consent.decline";
    pub const CONSENT_ACCEPTED: &str = "consent.accepted";
    pub const CONSENT_DECLINED: &str = "consent.declined";
    pub const CONSENT_PENDING: &str = "consent.pending";

    pub const TIP_OFF_PEAK: &str = "tip.off_peak";
    pub const TIP_DC_DEGRADATION: &str = "tip.dc_degradation";
    pub const TIP_FAST_CHARGE_RANGE: &str = "tip.fast_charge_range";
    pub const TIP_OVERNIGHT: &str = "tip.overnight";
    pub const TIP_LEVEL2_HOME: &str = "tip.level2_home";
    pub const TIP_FULL_CHARGE_DEGRADATION: &str = "tip.full_charge_degradation";
    pub const TIP_LIMIT_TO_90: &str = "tip.limit_to_90";
    pub const TIP_SHALLOW_CYCLES: &str = "tip.shallow_cycles";
    pub const TIP_LOW_EFFICIENCY: &str = "tip.low_efficiency";
    pub const TIP_CHECK_EQUIPMENT: &str = "tip.check_equipment";
    pub const TIP_SMART_CHARGING_LARGE: &str = "tip.smart_charging_large";
    pub const TIP_HIGHER_POWER: &str = "tip.higher_power";
    pub const TIP_QUICK_TOP_UP: &str = "tip.quick_top_up";

    pub const TIP_PLAN_SCHEDULE: &str = "tip.plan_schedule";
    pub const TIP_MINIMAL_CHARGING: &str = "tip.minimal_charging";
    pub const TIP_CHARGE_BELOW_30: &str = "tip.charge_below_30";
    pub const TIP_LONGER_RANGE_VEHICLE: &str = "tip.longer_range_vehicle";
    pub const TIP_WORKPLACE_CHARGING: &str = "tip.workplace_charging";
    pub const TIP_OPTIMAL_FREQUENCY: &str = "tip.optimal_frequency";
    pub const TIP_HIGH_CONSUMPTION: &str = "tip.high_consumption";
    pub const TIP_ECO_MODE: &str = "tip.eco_mode";
    pub const TIP_EFFICIENT_CONSUMPTION: &str = "tip.efficient_consumption";
    pub const TIP_LARGE_CONSERVATIVE_BATTERY: &str = "tip.large_conservative_battery";
    pub const TIP_SMALL_BATTERY: &str = "tip.small_battery";
    pub const TIP_RANGE_EXCEEDS_NEEDS: &str = "tip.range_exceeds_needs";
    pub const TIP_RANGE_CLOSE_TO_DISTANCE: &str = "tip.range_close_to_distance";

    pub const TIP_COST_OFF_PEAK: &str = "tip.cost_off_peak";
    pub const TIP_COST_HOME_CHEAPER: &str = "tip.cost_home_cheaper";
    pub const TIP_COST_SOLAR: &str = "tip.cost_solar";
    pub const TIP_COST_UTILITY_PROGRAMS: &str = "tip.cost_utility_programs";
    pub const TIP_COST_SMART_CHARGER: &str = "tip.cost_smart_charger";

    pub const TIP_ERROR_CHECK_INPUTS: &str = "tip.error_check_inputs";
    pub const TIP_ERROR_RANGES: &str = "tip.error_ranges";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        let found = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        found.unwrap_or("[missing translation]")
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|lang| normalize_locale_string(&lang))
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        KEEP_CURRENT_HINT => "(press enter to keep the current value)",
        TIPS_HEADING => "Tips",
        MAIN_MENU_TITLE => "\n=== EV Charge Calculator ===",
        MAIN_MENU_CHARGING_TIME => "1) Charging time",
        MAIN_MENU_FREQUENCY => "2) Charge frequency",
        MAIN_MENU_COST => "3) Charging cost",
        MAIN_MENU_CO2 => "4) CO₂ savings",
        MAIN_MENU_UNIT_CONVERSION => "5) Unit converter",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        TAB_CHARGING_TIME => "Charging Time",
        TAB_FREQUENCY => "Charge Frequency",
        TAB_COST => "Charging Cost",
        TAB_SETTINGS => "Settings",
        CHARGING_TIME_HEADING => "\n-- Charging Time --",
        FREQUENCY_HEADING => "\n-- Charge Frequency --",
        COST_HEADING => "\n-- Charging Cost --",
        CO2_HEADING => "\n-- CO₂ Savings --",
        FIELD_WEEKLY_DISTANCE => "Weekly distance",
        FIELD_BATTERY_CAPACITY => "Battery capacity",
        FIELD_CONSUMPTION => "Energy consumption",
        FIELD_USABLE_BATTERY => "Usable battery",
        FIELD_INITIAL_CHARGE => "Initial charge",
        FIELD_TARGET_CHARGE => "Target charge",
        FIELD_CHARGING_POWER => "Charging power",
        FIELD_CHARGING_EFFICIENCY => "Charging efficiency",
        FIELD_TEMPERATURE => "Battery temperature",
        FIELD_PHASES => "Charging phases",
        FIELD_ELECTRICITY_RATE => "Electricity rate",
        FIELD_PEAK_RATE => "Peak rate",
        FIELD_OFF_PEAK_RATE => "Off-peak rate",
        FIELD_OFF_PEAK_SHARE => "Off-peak charging",
        FIELD_CHARGING_TYPE => "Charging type",
        CHARGING_TYPE_AC => "AC charging (home/destination)",
        CHARGING_TYPE_DC => "DC fast charging",
        RATE_TYPE_OPTIONS => "Rate type: 1=flat 2=peak/off-peak",
        RATE_TYPE_FLAT => "Flat rate",
        RATE_TYPE_VARIABLE => "Peak / off-peak",
        RESULT_CHARGING_TIME => "Charging time:",
        RESULT_ENERGY_NEEDED => "Energy needed:",
        RESULT_ACTUAL_POWER => "Actual charging power:",
        RESULT_LIMITING_FACTOR => "Limited by:",
        RESULT_EFFECTIVE_RANGE => "Effective range:",
        RESULT_WEEKLY_CHARGES => "Charges per week:",
        RESULT_SAFETY_CHARGE => "Includes one extra safety charge.",
        RESULT_COST_PER_CHARGE => "Cost per charge:",
        RESULT_WEEKLY_COST => "Weekly cost:",
        RESULT_MONTHLY_COST => "Monthly cost:",
        RESULT_ANNUAL_COST => "Annual cost:",
        RESULT_ENERGY_PER_CHARGE => "Energy per charge:",
        RESULT_CO2_SAVINGS => "CO₂ saved per year:",
        LIMIT_NONE => "nothing (charger delivers the requested power)",
        LIMIT_PHASES => "number of AC phases",
        LIMIT_CONNECTOR => "DC connector limit",
        LIMIT_C_RATE => "battery C-rate limit",
        LIMIT_TEMPERATURE => "battery temperature",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Distance  2) Temperature  3) Energy  4) Consumption",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: km, C, kWh, kWh/100km): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: mi, F, MJ, mi/kWh): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_THEME => "Theme:",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Unit system:",
        SETTINGS_CURRENT_CURRENCY => "Currency:",
        SETTINGS_CURRENT_CONSENT => "Saving inputs:",
        SETTINGS_OPTIONS => "1) Theme  2) Unit system  3) Currency  4) Saving inputs  5) Reset inputs",
        SETTINGS_PROMPT_THEME => "Theme (1=light 2=dark 3=system): ",
        SETTINGS_PROMPT_UNIT_SYSTEM => "Unit system (1=metric 2=imperial): ",
        SETTINGS_PROMPT_CURRENCY => "Currency code (USD, EUR, CAD, GBP, AUD, JPY): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_RESET_DONE => "Calculator inputs reset to defaults.",
        SETTINGS_LANGUAGE => "Language",
        SETTINGS_RESET_BUTTON => "Reset calculator inputs",
        THEME_LIGHT => "Light",
        THEME_DARK => "Dark",
        THEME_SYSTEM => "System",
        THEME_TOGGLE => "Toggle theme",
        CONSENT_TITLE => "Remember your inputs?",
        CONSENT_BODY => "Calculator inputs can be saved on this computer so they are restored next time. Nothing leaves your machine.",
        CONSENT_PROMPT => "Save calculator inputs on this computer? (y/n): ",
        CONSENT_ACCEPT => "Accept",
        CONSENT_DECLINE => "Decline",
        CONSENT_ACCEPTED => "accepted",
        CONSENT_DECLINED => "declined",
        CONSENT_PENDING => "not decided",
        TIP_OFF_PEAK => "Charge during off-peak hours to save on electricity costs",
        TIP_DC_DEGRADATION => "High-power DC charging can degrade battery faster if used frequently",
        TIP_FAST_CHARGE_RANGE => "Fast charging works best in the 20-80% range of battery capacity",
        TIP_OVERNIGHT => "Consider overnight charging with this power level",
        TIP_LEVEL2_HOME => "Level 2 home charging is ideal for daily use and battery longevity",
        TIP_FULL_CHARGE_DEGRADATION => "Regularly charging to 100% can accelerate battery degradation",
        TIP_LIMIT_TO_90 => "Consider limiting regular charges to 80-90% for longer battery life",
        TIP_SHALLOW_CYCLES => "Frequent shallow charging cycles are optimal for battery health",
        TIP_LOW_EFFICIENCY => "Low efficiency means more electricity used and longer charging times",
        TIP_CHECK_EQUIPMENT => "Check your charging equipment for issues that may reduce efficiency",
        TIP_SMART_CHARGING_LARGE => "Large batteries benefit from smart charging to avoid peak electricity rates",
        TIP_HIGHER_POWER => "Consider a higher power charger for shorter charging sessions",
        TIP_QUICK_TOP_UP => "Quick top-ups are great for extending range during long trips",
        TIP_PLAN_SCHEDULE => "Plan your charging schedule around your weekly driving needs",
        TIP_MINIMAL_CHARGING => "Your EV can handle your weekly driving needs with minimal charging",
        TIP_CHARGE_BELOW_30 => "Consider charging only when battery drops below 30% for optimal battery health",
        TIP_LONGER_RANGE_VEHICLE => "Your high charging frequency suggests you may benefit from a vehicle with longer range",
        TIP_WORKPLACE_CHARGING => "Consider workplace or destination charging to supplement home charging",
        TIP_OPTIMAL_FREQUENCY => "Your charging frequency is in the optimal range for most EV owners",
        TIP_HIGH_CONSUMPTION => "Your energy consumption is high - driving at lower speeds and smoother acceleration can help",
        TIP_ECO_MODE => "Consider using eco mode to improve efficiency and range",
        TIP_EFFICIENT_CONSUMPTION => "Your energy consumption is efficient, helping maximize your range between charges",
        TIP_LARGE_CONSERVATIVE_BATTERY => "Your large battery with conservative usable range settings provides a good balance of range and longevity",
        TIP_SMALL_BATTERY => "With a smaller battery, finding convenient charging locations for longer trips is important",
        TIP_RANGE_EXCEEDS_NEEDS => "Your range greatly exceeds your weekly needs - you have lots of flexibility in charging schedule",
        TIP_RANGE_CLOSE_TO_DISTANCE => "Your range is close to your weekly distance - consider charging more frequently to avoid range anxiety",
        TIP_COST_OFF_PEAK => "Off-peak electricity rates can significantly reduce charging costs",
        TIP_COST_HOME_CHEAPER => "Home charging is typically much cheaper than public charging stations",
        TIP_COST_SOLAR => "Solar panels can help offset your EV charging costs",
        TIP_COST_UTILITY_PROGRAMS => "Some utilities offer special EV charging rates or programs",
        TIP_COST_SMART_CHARGER => "Consider using a smart charger that can automatically charge during cheaper rate periods",
        TIP_ERROR_CHECK_INPUTS => "Check your input values and try again",
        TIP_ERROR_RANGES => "Make sure all parameters are within reasonable ranges",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        KEEP_CURRENT_HINT => "(엔터를 누르면 현재 값을 유지합니다)",
        TIPS_HEADING => "팁",
        MAIN_MENU_TITLE => "\n=== EV 충전 계산기 ===",
        MAIN_MENU_CHARGING_TIME => "1) 충전 시간",
        MAIN_MENU_FREQUENCY => "2) 충전 빈도",
        MAIN_MENU_COST => "3) 충전 비용",
        MAIN_MENU_CO2 => "4) CO₂ 절감량",
        MAIN_MENU_UNIT_CONVERSION => "5) 단위 변환기",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        TAB_CHARGING_TIME => "충전 시간",
        TAB_FREQUENCY => "충전 빈도",
        TAB_COST => "충전 비용",
        TAB_SETTINGS => "설정",
        CHARGING_TIME_HEADING => "\n-- 충전 시간 --",
        FREQUENCY_HEADING => "\n-- 충전 빈도 --",
        COST_HEADING => "\n-- 충전 비용 --",
        CO2_HEADING => "\n-- CO₂ 절감량 --",
        FIELD_WEEKLY_DISTANCE => "주간 주행거리",
        FIELD_BATTERY_CAPACITY => "배터리 용량",
        FIELD_CONSUMPTION => "전비",
        FIELD_USABLE_BATTERY => "가용 배터리",
        FIELD_INITIAL_CHARGE => "시작 충전량",
        FIELD_TARGET_CHARGE => "목표 충전량",
        FIELD_CHARGING_POWER => "충전 전력",
        FIELD_CHARGING_EFFICIENCY => "충전 효율",
        FIELD_TEMPERATURE => "배터리 온도",
        FIELD_PHASES => "충전 상 수",
        FIELD_ELECTRICITY_RATE => "전기 요금",
        FIELD_PEAK_RATE => "피크 요금",
        FIELD_OFF_PEAK_RATE => "경부하 요금",
        FIELD_OFF_PEAK_SHARE => "경부하 충전 비율",
        FIELD_CHARGING_TYPE => "충전 방식",
        CHARGING_TYPE_AC => "AC 완속 충전 (가정/목적지)",
        CHARGING_TYPE_DC => "DC 급속 충전",
        RATE_TYPE_OPTIONS => "요금제: 1=단일 2=피크/경부하",
        RATE_TYPE_FLAT => "단일 요금",
        RATE_TYPE_VARIABLE => "피크 / 경부하",
        RESULT_CHARGING_TIME => "충전 시간:",
        RESULT_ENERGY_NEEDED => "필요 에너지:",
        RESULT_ACTUAL_POWER => "실제 충전 전력:",
        RESULT_LIMITING_FACTOR => "제한 요인:",
        RESULT_EFFECTIVE_RANGE => "1회 충전 주행거리:",
        RESULT_WEEKLY_CHARGES => "주간 충전 횟수:",
        RESULT_SAFETY_CHARGE => "여유 충전 1회가 포함되었습니다.",
        RESULT_COST_PER_CHARGE => "1회 충전 비용:",
        RESULT_WEEKLY_COST => "주간 비용:",
        RESULT_MONTHLY_COST => "월간 비용:",
        RESULT_ANNUAL_COST => "연간 비용:",
        RESULT_ENERGY_PER_CHARGE => "1회 충전 에너지:",
        RESULT_CO2_SAVINGS => "연간 CO₂ 절감량:",
        LIMIT_NONE => "없음 (요청 전력 그대로 충전)",
        LIMIT_PHASES => "AC 상 수",
        LIMIT_CONNECTOR => "DC 커넥터 한계",
        LIMIT_C_RATE => "배터리 C-rate 한계",
        LIMIT_TEMPERATURE => "배터리 온도",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 거리  2) 온도  3) 에너지  4) 전비",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: km, C, kWh, kWh/100km): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: mi, F, MJ, mi/kWh): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_THEME => "테마:",
        SETTINGS_CURRENT_UNIT_SYSTEM => "단위 시스템:",
        SETTINGS_CURRENT_CURRENCY => "통화:",
        SETTINGS_CURRENT_CONSENT => "입력값 저장:",
        SETTINGS_OPTIONS => "1) 테마  2) 단위 시스템  3) 통화  4) 입력값 저장  5) 입력값 초기화",
        SETTINGS_PROMPT_THEME => "테마 (1=라이트 2=다크 3=시스템): ",
        SETTINGS_PROMPT_UNIT_SYSTEM => "단위 시스템 (1=미터법 2=야드파운드법): ",
        SETTINGS_PROMPT_CURRENCY => "통화 코드 (USD, EUR, CAD, GBP, AUD, JPY): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        SETTINGS_RESET_DONE => "계산기 입력값을 기본값으로 되돌렸습니다.",
        SETTINGS_LANGUAGE => "언어",
        SETTINGS_RESET_BUTTON => "계산기 입력값 초기화",
        THEME_LIGHT => "라이트",
        THEME_DARK => "다크",
        THEME_SYSTEM => "시스템",
        THEME_TOGGLE => "테마 전환",
        CONSENT_TITLE => "입력값을 기억할까요?",
        CONSENT_BODY => "계산기 입력값을 이 컴퓨터에 저장해 다음 실행 때 복원합니다. 외부로 전송되지 않습니다.",
        CONSENT_PROMPT => "계산기 입력값을 이 컴퓨터에 저장할까요? (y/n): ",
        CONSENT_ACCEPT => "동의",
        CONSENT_DECLINE => "거부",
        CONSENT_ACCEPTED => "동의함",
        CONSENT_DECLINED => "거부함",
        CONSENT_PENDING => "미결정",
        TIP_OFF_PEAK => "경부하 시간대에 충전하면 전기 요금을 아낄 수 있습니다",
        TIP_DC_DEGRADATION => "고출력 DC 충전을 자주 사용하면 배터리 열화가 빨라질 수 있습니다",
        TIP_FAST_CHARGE_RANGE => "급속 충전은 배터리 용량의 20-80% 구간에서 가장 효율적입니다",
        TIP_OVERNIGHT => "이 전력이라면 야간 충전을 고려하세요",
        TIP_LEVEL2_HOME => "가정용 완속 충전은 일상 사용과 배터리 수명에 가장 좋습니다",
        TIP_FULL_CHARGE_DEGRADATION => "정기적으로 100%까지 충전하면 배터리 열화가 빨라질 수 있습니다",
        TIP_LIMIT_TO_90 => "평소에는 80-90%까지만 충전해 배터리 수명을 늘리세요",
        TIP_SHALLOW_CYCLES => "얕은 충전을 자주 하는 것이 배터리 건강에 가장 좋습니다",
        TIP_LOW_EFFICIENCY => "효율이 낮으면 전기를 더 쓰고 충전 시간도 길어집니다",
        TIP_CHECK_EQUIPMENT => "효율을 떨어뜨리는 충전 장비 문제가 없는지 점검하세요",
        TIP_SMART_CHARGING_LARGE => "대용량 배터리는 스마트 충전으로 피크 요금을 피하는 것이 좋습니다",
        TIP_HIGHER_POWER => "충전 시간을 줄이려면 더 높은 출력의 충전기를 고려하세요",
        TIP_QUICK_TOP_UP => "짧은 보충 충전은 장거리 주행 중 항속거리를 늘리는 데 좋습니다",
        TIP_PLAN_SCHEDULE => "주간 주행 패턴에 맞춰 충전 일정을 계획하세요",
        TIP_MINIMAL_CHARGING => "적은 충전만으로도 주간 주행을 감당할 수 있습니다",
        TIP_CHARGE_BELOW_30 => "배터리 건강을 위해 30% 아래로 떨어졌을 때만 충전하는 것을 고려하세요",
        TIP_LONGER_RANGE_VEHICLE => "충전 빈도가 높습니다. 항속거리가 더 긴 차량이 도움이 될 수 있습니다",
        TIP_WORKPLACE_CHARGING => "가정 충전을 보완하도록 직장이나 목적지 충전을 고려하세요",
        TIP_OPTIMAL_FREQUENCY => "대부분의 EV 운전자에게 적절한 충전 빈도입니다",
        TIP_HIGH_CONSUMPTION => "전비가 높습니다. 속도를 낮추고 부드럽게 가속하면 도움이 됩니다",
        TIP_ECO_MODE => "에코 모드를 사용해 효율과 주행거리를 개선해 보세요",
        TIP_EFFICIENT_CONSUMPTION => "전비가 좋아 충전 간 주행거리를 최대로 활용하고 있습니다",
        TIP_LARGE_CONSERVATIVE_BATTERY => "대용량 배터리와 보수적인 가용 범위 설정으로 주행거리와 수명의 균형이 좋습니다",
        TIP_SMALL_BATTERY => "배터리가 작으므로 장거리 주행 시 편리한 충전소를 미리 찾아두세요",
        TIP_RANGE_EXCEEDS_NEEDS => "항속거리가 주간 필요량보다 훨씬 길어 충전 일정이 자유롭습니다",
        TIP_RANGE_CLOSE_TO_DISTANCE => "항속거리가 주간 주행거리와 비슷합니다. 더 자주 충전해 주행거리 불안을 줄이세요",
        TIP_COST_OFF_PEAK => "경부하 요금을 이용하면 충전 비용을 크게 줄일 수 있습니다",
        TIP_COST_HOME_CHEAPER => "가정 충전은 보통 공용 충전소보다 훨씬 저렴합니다",
        TIP_COST_SOLAR => "태양광 패널로 충전 비용을 상쇄할 수 있습니다",
        TIP_COST_UTILITY_PROGRAMS => "일부 전력회사는 EV 전용 요금제나 프로그램을 제공합니다",
        TIP_COST_SMART_CHARGER => "저렴한 요금 시간대에 자동으로 충전하는 스마트 충전기를 고려하세요",
        TIP_ERROR_CHECK_INPUTS => "입력값을 확인하고 다시 시도하세요",
        TIP_ERROR_RANGES => "모든 값이 합리적인 범위에 있는지 확인하세요",
        _ => return None,
    })
}
