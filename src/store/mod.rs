//! 입력값/테마/동의 상태를 저장소와 동기화하는 스토어.

pub mod base;
pub mod calculator;
pub mod consent;
pub mod storage;
pub mod theme;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use tracing::info;

pub use base::{Persisted, PersistedStore, SharedStorage, SubscriptionId};
pub use calculator::{CalculatorData, CALCULATOR_KEY};
pub use consent::{ConsentData, ConsentStatus, CONSENT_KEY};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use theme::{Brightness, Theme, ThemeState, THEME_KEY};

/// 한 세션 동안 쓰는 스토어 묶음. 실행 시 한 번 만들어 참조로 넘긴다.
///
/// 계산기 입력값은 저장 동의가 있을 때만 저장소에 쓴다.
pub struct StoreContext {
    storage: SharedStorage,
    initialized: BTreeSet<&'static str>,
    calculator: PersistedStore<CalculatorData>,
    theme: PersistedStore<ThemeState>,
    consent: PersistedStore<ConsentData>,
}

impl StoreContext {
    pub fn new(storage: impl Storage + 'static) -> Self {
        let storage: SharedStorage = Rc::new(RefCell::new(storage));
        let consent = PersistedStore::<ConsentData>::load(Rc::clone(&storage), true);
        let theme = PersistedStore::<ThemeState>::load(Rc::clone(&storage), true);
        let accepted = consent.get().status() == ConsentStatus::Accepted;
        let calculator = PersistedStore::<CalculatorData>::load(Rc::clone(&storage), accepted);

        let initialized = [consent.key(), theme.key(), calculator.key()]
            .into_iter()
            .collect();
        info!(saving_inputs = accepted, "stores initialized");
        Self {
            storage,
            initialized,
            calculator,
            theme,
            consent,
        }
    }

    /// 해당 키의 스토어가 이번 세션에서 저장소로부터 초기화되었는지.
    pub fn is_initialized(&self, key: &str) -> bool {
        self.initialized.contains(key)
    }

    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }

    pub fn calculator(&self) -> &PersistedStore<CalculatorData> {
        &self.calculator
    }

    pub fn calculator_mut(&mut self) -> &mut PersistedStore<CalculatorData> {
        &mut self.calculator
    }

    pub fn theme(&self) -> &PersistedStore<ThemeState> {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut PersistedStore<ThemeState> {
        &mut self.theme
    }

    pub fn consent(&self) -> &PersistedStore<ConsentData> {
        &self.consent
    }

    pub fn set_theme(&mut self, current: Theme) -> Result<(), StorageError> {
        self.theme.update(|s| s.current = current)
    }

    pub fn toggle_theme(&mut self) -> Result<(), StorageError> {
        self.theme.update(|s| *s = s.toggled())
    }

    /// 운영체제 테마가 바뀌었을 때 호출한다. 값이 같으면 아무것도 하지 않는다.
    pub fn update_system_theme(&mut self, system: Brightness) -> Result<(), StorageError> {
        if self.theme.get().system == system {
            return Ok(());
        }
        self.theme.update(|s| s.system = system)
    }

    /// 저장에 동의한다. 현재 입력값을 바로 저장한다.
    pub fn accept_consent(&mut self) -> Result<(), StorageError> {
        self.consent.set(ConsentData::decided(true))?;
        self.calculator.set_persist(true);
        info!("input saving accepted");
        self.calculator.save()
    }

    /// 저장을 거부한다. 이미 저장된 입력값은 지운다.
    pub fn decline_consent(&mut self) -> Result<(), StorageError> {
        self.consent.set(ConsentData::decided(false))?;
        self.calculator.set_persist(false);
        info!("input saving declined; removing stored inputs");
        self.storage.borrow_mut().remove(CALCULATOR_KEY)
    }

    /// 계산기 입력값을 기본값으로 되돌린다.
    pub fn reset_calculator(&mut self) -> Result<(), StorageError> {
        self.calculator.reset()
    }
}
