//! 저장 동의, 테마, 입력값 스토어 동작 테스트.
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use ev_charge_calculator::calc::ChargingType;
use ev_charge_calculator::store::{
    Brightness, CalculatorData, ConsentStatus, FileStorage, MemoryStorage, Storage, StoreContext,
    Theme, CALCULATOR_KEY, CONSENT_KEY, THEME_KEY,
};
use serde_json::json;

fn accepted_consent() -> serde_json::Value {
    json!({ "accepted": true, "lastUpdated": "2024-05-01T12:00:00Z" })
}

#[test]
fn pending_consent_keeps_inputs_in_memory() {
    let mut ctx = StoreContext::new(MemoryStorage::new());
    assert_eq!(ctx.consent().get().status(), ConsentStatus::Pending);
    assert!(!ctx.calculator().is_persisted());

    ctx.calculator_mut()
        .update(|d| d.weekly_distance_km = 400.0)
        .expect("update");
    assert_eq!(ctx.calculator().get().weekly_distance_km, 400.0);
    let stored = ctx.storage().borrow().get(CALCULATOR_KEY).expect("get");
    assert!(stored.is_none());
    assert!(ctx.is_initialized(CALCULATOR_KEY));
}

#[test]
fn accepting_saves_current_inputs() {
    let mut ctx = StoreContext::new(MemoryStorage::new());
    ctx.calculator_mut()
        .update(|d| d.battery_kwh = 75.0)
        .expect("update");
    ctx.accept_consent().expect("accept");

    assert_eq!(ctx.consent().get().status(), ConsentStatus::Accepted);
    let stored = ctx
        .storage()
        .borrow()
        .get(CALCULATOR_KEY)
        .expect("get")
        .expect("saved");
    assert_eq!(stored["batteryKwh"], json!(75.0));
    assert_eq!(stored["chargingType"], json!("AC"));

    let consent = ctx
        .storage()
        .borrow()
        .get(CONSENT_KEY)
        .expect("get")
        .expect("consent saved");
    assert_eq!(consent["accepted"], json!(true));
    assert!(consent["lastUpdated"].is_string());
}

#[test]
fn declining_removes_stored_inputs() {
    let storage = MemoryStorage::new()
        .with_entry(CONSENT_KEY, accepted_consent())
        .with_entry(CALCULATOR_KEY, json!({ "weeklyDistanceKm": 300.0 }));
    let mut ctx = StoreContext::new(storage);
    assert!(ctx.calculator().is_persisted());
    assert_eq!(ctx.calculator().get().weekly_distance_km, 300.0);

    ctx.decline_consent().expect("decline");
    assert_eq!(ctx.consent().get().status(), ConsentStatus::Declined);
    assert!(ctx.storage().borrow().get(CALCULATOR_KEY).expect("get").is_none());

    // 거부 후 변경은 저장되지 않는다
    ctx.calculator_mut()
        .update(|d| d.weekly_distance_km = 500.0)
        .expect("update");
    assert!(ctx.storage().borrow().get(CALCULATOR_KEY).expect("get").is_none());
}

#[test]
fn bad_fields_fall_back_individually() {
    let storage = MemoryStorage::new()
        .with_entry(CONSENT_KEY, accepted_consent())
        .with_entry(
            CALCULATOR_KEY,
            json!({
                "weeklyDistanceKm": 300.0,
                "batteryKwh": "big",
                "phases": 7,
                "currency": "XYZ",
                "targetCharge": 140.0,
                "chargingType": "DC"
            }),
        );
    let ctx = StoreContext::new(storage);
    let data = ctx.calculator().get();
    let defaults = CalculatorData::default();

    assert_eq!(data.weekly_distance_km, 300.0);
    assert_eq!(data.charging_type, ChargingType::Dc);
    assert_eq!(data.battery_kwh, defaults.battery_kwh);
    assert_eq!(data.phases, defaults.phases);
    assert_eq!(data.currency, defaults.currency);
    assert_eq!(data.target_charge, defaults.target_charge);
    assert_eq!(data.consumption_kwh_per_100km, defaults.consumption_kwh_per_100km);
}

#[test]
fn non_object_values_use_defaults() {
    let storage = MemoryStorage::new()
        .with_entry(CONSENT_KEY, accepted_consent())
        .with_entry(CALCULATOR_KEY, json!([1, 2, 3]))
        .with_entry(THEME_KEY, json!("dark"));
    let ctx = StoreContext::new(storage);
    assert_eq!(ctx.calculator().get(), &CalculatorData::default());
    assert_eq!(ctx.theme().get().current, Theme::System);
}

#[test]
fn invalid_consent_timestamp_is_pending() {
    let storage = MemoryStorage::new().with_entry(
        CONSENT_KEY,
        json!({ "accepted": true, "lastUpdated": "yesterday" }),
    );
    let ctx = StoreContext::new(storage);
    assert_eq!(ctx.consent().get().status(), ConsentStatus::Pending);
    assert!(!ctx.calculator().is_persisted());
}

#[test]
fn theme_toggle_pins_opposite_of_effective() {
    let mut ctx = StoreContext::new(MemoryStorage::new());
    ctx.update_system_theme(Brightness::Dark).expect("system");
    assert_eq!(ctx.theme().get().effective(), Brightness::Dark);

    ctx.toggle_theme().expect("toggle");
    assert_eq!(ctx.theme().get().current, Theme::Light);
    ctx.toggle_theme().expect("toggle");
    assert_eq!(ctx.theme().get().current, Theme::Dark);

    // 테마는 동의와 무관하게 저장된다
    let stored = ctx
        .storage()
        .borrow()
        .get(THEME_KEY)
        .expect("get")
        .expect("theme saved");
    assert_eq!(stored["current"], json!("dark"));
    assert_eq!(stored["system"], json!("dark"));
}

#[test]
fn subscribers_see_changes_until_unsubscribed() {
    let mut ctx = StoreContext::new(MemoryStorage::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = ctx
        .calculator_mut()
        .subscribe(move |d| sink.borrow_mut().push(d.weekly_distance_km));

    ctx.calculator_mut()
        .update(|d| d.weekly_distance_km = 120.0)
        .expect("update");
    assert!(ctx.calculator_mut().unsubscribe(id));
    assert!(!ctx.calculator_mut().unsubscribe(id));
    ctx.calculator_mut()
        .update(|d| d.weekly_distance_km = 130.0)
        .expect("update");

    assert_eq!(*seen.borrow(), vec![250.0, 120.0]);
}

#[test]
fn reset_restores_defaults() {
    let mut ctx = StoreContext::new(MemoryStorage::new());
    ctx.calculator_mut()
        .update(|d| {
            d.charging_power = 150.0;
            d.charging_type = ChargingType::Dc;
        })
        .expect("update");
    ctx.reset_calculator().expect("reset");
    assert_eq!(ctx.calculator().get(), &CalculatorData::default());
}

#[test]
fn file_storage_survives_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut ctx = StoreContext::new(FileStorage::new(dir.path()));
        ctx.accept_consent().expect("accept");
        ctx.calculator_mut()
            .update(|d| d.consumption_kwh_per_100km = 18.5)
            .expect("update");
        ctx.set_theme(Theme::Dark).expect("theme");
    }
    assert!(dir.path().join(format!("{CALCULATOR_KEY}.json")).exists());

    let ctx = StoreContext::new(FileStorage::new(dir.path()));
    assert_eq!(ctx.consent().get().status(), ConsentStatus::Accepted);
    assert_eq!(ctx.calculator().get().consumption_kwh_per_100km, 18.5);
    assert_eq!(ctx.theme().get().current, Theme::Dark);
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join(format!("{CONSENT_KEY}.json")),
        accepted_consent().to_string(),
    )
    .expect("write consent");
    fs::write(dir.path().join(format!("{CALCULATOR_KEY}.json")), "{not json").expect("write");

    let storage = FileStorage::new(dir.path());
    assert!(storage.get(CALCULATOR_KEY).is_err());

    let mut ctx = StoreContext::new(storage);
    assert_eq!(ctx.calculator().get(), &CalculatorData::default());

    // 다음 저장에서 깨진 파일을 덮어쓴다
    ctx.calculator_mut()
        .update(|d| d.weekly_distance_km = 260.0)
        .expect("update");
    let content = fs::read_to_string(dir.path().join(format!("{CALCULATOR_KEY}.json")))
        .expect("read");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value["weeklyDistanceKm"], json!(260.0));
}

#[test]
fn removing_missing_key_is_ok() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut storage = FileStorage::new(dir.path());
    storage.remove(CALCULATOR_KEY).expect("remove");
}
