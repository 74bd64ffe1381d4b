use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::{read_field, stored_object, Persisted};

pub const CONSENT_KEY: &str = "ev-calculator-consent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentStatus {
    Accepted,
    Declined,
    /// 아직 결정하지 않음
    Pending,
}

/// 입력값 저장 동의 상태.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentData {
    pub accepted: bool,
    /// 마지막 결정 시각 (RFC 3339). 결정 전에는 없다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl ConsentData {
    pub fn status(&self) -> ConsentStatus {
        match (&self.last_updated, self.accepted) {
            (None, _) => ConsentStatus::Pending,
            (Some(_), true) => ConsentStatus::Accepted,
            (Some(_), false) => ConsentStatus::Declined,
        }
    }

    /// 현재 시각으로 결정을 기록한 값.
    pub fn decided(accepted: bool) -> Self {
        Self {
            accepted,
            last_updated: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

impl Persisted for ConsentData {
    const KEY: &'static str = CONSENT_KEY;

    fn from_stored(value: &Value) -> Self {
        let Some(obj) = stored_object(Self::KEY, value) else {
            return Self::default();
        };
        let last_updated = read_field(Self::KEY, obj, "lastUpdated", None, |v: &Option<String>| {
            v.as_deref()
                .map_or(true, |s| chrono::DateTime::parse_from_rfc3339(s).is_ok())
        });
        Self {
            accepted: read_field(Self::KEY, obj, "accepted", false, |_| true),
            last_updated,
        }
    }
}
