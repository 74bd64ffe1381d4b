use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::{read_field, stored_object, Persisted};

pub const THEME_KEY: &str = "ev-calculator-theme";

/// 사용자가 고른 테마.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

/// 실제로 적용되는 밝기.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Light,
    Dark,
}

impl Brightness {
    pub fn flipped(self) -> Self {
        match self {
            Brightness::Light => Brightness::Dark,
            Brightness::Dark => Brightness::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub current: Theme,
    /// 운영체제 테마
    pub system: Brightness,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            current: Theme::System,
            system: Brightness::Light,
        }
    }
}

impl ThemeState {
    /// `System`을 운영체제 테마로 풀어낸 실제 테마.
    pub fn effective(&self) -> Brightness {
        match self.current {
            Theme::Light => Brightness::Light,
            Theme::Dark => Brightness::Dark,
            Theme::System => self.system,
        }
    }

    /// 실제 테마를 반대로 뒤집어 명시적으로 고정한다.
    pub fn toggled(self) -> Self {
        let current = match self.effective().flipped() {
            Brightness::Light => Theme::Light,
            Brightness::Dark => Theme::Dark,
        };
        Self { current, ..self }
    }
}

impl Persisted for ThemeState {
    const KEY: &'static str = THEME_KEY;

    fn from_stored(value: &Value) -> Self {
        let default = Self::default();
        let Some(obj) = stored_object(Self::KEY, value) else {
            return default;
        };
        Self {
            current: read_field(Self::KEY, obj, "current", default.current, |_| true),
            system: read_field(Self::KEY, obj, "system", default.system, |_| true),
        }
    }
}
