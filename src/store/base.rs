use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::storage::{Storage, StorageError};

/// 스토어들이 함께 쓰는 저장소 핸들. GUI 이벤트 루프 한 스레드에서만 쓴다.
pub type SharedStorage = Rc<RefCell<dyn Storage>>;

/// 값이 바뀔 때 호출되는 리스너.
pub type Listener<T> = Box<dyn FnMut(&T)>;

/// `subscribe`가 돌려주는 구독 번호. `unsubscribe`에 넘긴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// 저장소에 JSON으로 보관되는 값.
pub trait Persisted: Clone + Default + Serialize {
    /// 저장소 키
    const KEY: &'static str;

    /// 저장된 JSON에서 값을 복원한다. 잘못된 필드만 기본값으로 대체하고 나머지는 살린다.
    fn from_stored(value: &Value) -> Self;
}

/// 저장된 값이 JSON 객체인지 확인한다. 아니면 경고 후 `None`.
pub(crate) fn stored_object<'a>(key: &str, value: &'a Value) -> Option<&'a Map<String, Value>> {
    let obj = value.as_object();
    if obj.is_none() {
        warn!(key, "stored value is not an object; using defaults");
    }
    obj
}

/// 객체의 필드 하나를 읽는다. 없거나 타입이 다르거나 `accept`를 통과하지 못하면 기본값.
pub(crate) fn read_field<F>(
    key: &str,
    obj: &Map<String, Value>,
    field: &str,
    default: F,
    accept: impl Fn(&F) -> bool,
) -> F
where
    F: DeserializeOwned,
{
    let Some(raw) = obj.get(field) else {
        debug!(key, field, "stored field missing; using default");
        return default;
    };
    match serde_json::from_value::<F>(raw.clone()) {
        Ok(v) if accept(&v) => v,
        Ok(_) => {
            warn!(key, field, value = %raw, "stored field out of range; using default");
            default
        }
        Err(e) => {
            warn!(key, field, error = %e, "malformed stored field; using default");
            default
        }
    }
}

/// 저장소와 동기화되는 관찰 가능한 값.
///
/// 생성 시 한 번 읽고, 값이 바뀔 때마다 저장한다(마지막 쓰기가 이긴다).
/// `persist`가 꺼져 있으면 메모리에만 반영한다.
pub struct PersistedStore<T: Persisted> {
    value: T,
    storage: SharedStorage,
    persist: bool,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
}

impl<T: Persisted> PersistedStore<T> {
    /// 저장소에서 값을 읽어 스토어를 만든다. 읽을 수 없는 값은 기본값으로 대체한다.
    pub fn load(storage: SharedStorage, persist: bool) -> Self {
        let loaded = storage.borrow().get(T::KEY);
        let value = match loaded {
            Ok(Some(raw)) => {
                debug!(key = T::KEY, "loaded stored value");
                T::from_stored(&raw)
            }
            Ok(None) => T::default(),
            Err(e) => {
                warn!(key = T::KEY, error = %e, "stored value unreadable; using defaults");
                T::default()
            }
        };
        Self {
            value,
            storage,
            persist,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn key(&self) -> &'static str {
        T::KEY
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_persisted(&self) -> bool {
        self.persist
    }

    pub(crate) fn set_persist(&mut self, persist: bool) {
        self.persist = persist;
    }

    /// 리스너를 등록한다. 현재 값으로 즉시 한 번 호출된다.
    pub fn subscribe(&mut self, mut listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        listener(&self.value);
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// 등록된 리스너를 해제한다. 이미 해제되었으면 `false`.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn set(&mut self, value: T) -> Result<(), StorageError> {
        self.value = value;
        self.changed()
    }

    pub fn update(&mut self, updater: impl FnOnce(&mut T)) -> Result<(), StorageError> {
        updater(&mut self.value);
        self.changed()
    }

    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.set(T::default())
    }

    /// 현재 값을 저장소에 쓴다.
    pub fn save(&self) -> Result<(), StorageError> {
        if !self.persist {
            return Ok(());
        }
        let json = serde_json::to_value(&self.value)?;
        self.storage.borrow_mut().set(T::KEY, &json)?;
        debug!(key = T::KEY, "saved value");
        Ok(())
    }

    fn changed(&mut self) -> Result<(), StorageError> {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.value);
        }
        self.save()
    }
}
