//! Keyed reactive state shared by the screens.
//!
//! Screens never talk to a global; they receive an [`AppStore`] through
//! context and use the [`StateRepository`] contract (get / set / merge /
//! subscribe). Subscribers run synchronously after each write to their key.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ops::Deref;
use std::rc::Rc;
use thiserror::Error;

use crate::storage::{DocumentStorage, PlatformStorage, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreKey {
    OnboardingPurposeSelected,
    OnboardingPolicyId,
    OnboardingAdminsChatReportId,
    NvpOnboarding,
    OnboardingWorkEmail,
    OnboardingErrorMessage,
    OnboardingWorkEmailFormDraft,
    BankAccountList,
    WalletTransfer,
}

impl StoreKey {
    pub const ALL: [StoreKey; 9] = [
        StoreKey::OnboardingPurposeSelected,
        StoreKey::OnboardingPolicyId,
        StoreKey::OnboardingAdminsChatReportId,
        StoreKey::NvpOnboarding,
        StoreKey::OnboardingWorkEmail,
        StoreKey::OnboardingErrorMessage,
        StoreKey::OnboardingWorkEmailFormDraft,
        StoreKey::BankAccountList,
        StoreKey::WalletTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::OnboardingPurposeSelected => "onboardingPurposeSelected",
            StoreKey::OnboardingPolicyId => "onboardingPolicyID",
            StoreKey::OnboardingAdminsChatReportId => "onboardingAdminsChatReportID",
            StoreKey::NvpOnboarding => "nvp_onboarding",
            StoreKey::OnboardingWorkEmail => "onboardingWorkEmail",
            StoreKey::OnboardingErrorMessage => "onboardingErrorMessage",
            StoreKey::OnboardingWorkEmailFormDraft => "onboardingWorkEmailFormDraft",
            StoreKey::BankAccountList => "bankAccountList",
            StoreKey::WalletTransfer => "walletTransfer",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SubscriptionId = u64;
pub type Subscriber = Rc<dyn Fn(Option<&Value>)>;

pub trait StateRepository {
    fn get(&self, key: StoreKey) -> Option<Value>;

    /// Replace the value under `key`. `Value::Null` clears it.
    fn set(&self, key: StoreKey, value: Value) -> Result<(), StoreError>;

    fn subscribe(&self, key: StoreKey, callback: Subscriber) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);

    /// Shallow merge of object fields into the stored object
    fn merge(&self, key: StoreKey, changes: Value) -> Result<(), StoreError> {
        let merged = match (self.get(key), changes) {
            (Some(Value::Object(mut existing)), Value::Object(changes)) => {
                for (field, value) in changes {
                    if value.is_null() {
                        existing.remove(&field);
                    } else {
                        existing.insert(field, value);
                    }
                }
                Value::Object(existing)
            }
            (_, changes) => changes,
        };
        self.set(key, merged)
    }
}

/// Read `key` as `T`. Values that don't deserialize read as absent.
pub fn get_as<T: DeserializeOwned>(store: &dyn StateRepository, key: StoreKey) -> Option<T> {
    let value = store.get(key)?;
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::error!("❌ Failed to parse {}: {}", key.as_str(), e);
            None
        }
    }
}

pub fn set_as<T: Serialize + ?Sized>(store: &dyn StateRepository, key: StoreKey, value: &T) -> Result<(), StoreError> {
    store.set(key, serde_json::to_value(value)?)
}

pub fn merge_as<T: Serialize + ?Sized>(store: &dyn StateRepository, key: StoreKey, changes: &T) -> Result<(), StoreError> {
    store.merge(key, serde_json::to_value(changes)?)
}

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<StoreKey, Value>>,
    subscribers: RefCell<Vec<(SubscriptionId, StoreKey, Subscriber)>>,
    next_subscription: Cell<SubscriptionId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a value without notifying subscribers
    fn hydrate(&self, key: StoreKey, value: Value) {
        self.values.borrow_mut().insert(key, value);
    }

    fn notify(&self, key: StoreKey) {
        let value = self.values.borrow().get(&key).cloned();
        // Callbacks may read or subscribe, so no borrow is held while they run
        let callbacks: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|(_, subscribed, _)| *subscribed == key)
            .map(|(_, _, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback(value.as_ref());
        }
    }
}

impl StateRepository for MemoryStore {
    fn get(&self, key: StoreKey) -> Option<Value> {
        self.values.borrow().get(&key).cloned()
    }

    fn set(&self, key: StoreKey, value: Value) -> Result<(), StoreError> {
        {
            let mut values = self.values.borrow_mut();
            if value.is_null() {
                values.remove(&key);
            } else {
                values.insert(key, value);
            }
        }
        self.notify(key);
        Ok(())
    }

    fn subscribe(&self, key: StoreKey, callback: Subscriber) -> SubscriptionId {
        let id = self.next_subscription.get() + 1;
        self.next_subscription.set(id);
        self.subscribers.borrow_mut().push((id, key, callback));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(existing, _, _)| *existing != id);
    }
}

/// Memory store with write-through to a document backend.
///
/// A write reaches memory and subscribers only after the backend accepted it.
pub struct PersistentStore {
    memory: MemoryStore,
    storage: Box<dyn DocumentStorage>,
}

impl PersistentStore {
    /// Hydrate every key from platform storage
    pub fn load() -> Self {
        Self::load_from(Box::new(PlatformStorage))
    }

    pub fn load_from(storage: Box<dyn DocumentStorage>) -> Self {
        log::info!("🔄 Loading client state from storage");
        let memory = MemoryStore::new();
        for key in StoreKey::ALL {
            match storage.read(key.as_str()) {
                Ok(Some(data)) => match serde_json::from_str::<Value>(&data) {
                    Ok(value) => memory.hydrate(key, value),
                    Err(e) => log::error!("❌ Failed to parse stored {}: {}", key.as_str(), e),
                },
                Ok(None) => {}
                Err(e) => log::error!("❌ Failed to read {}: {}", key.as_str(), e),
            }
        }
        Self { memory, storage }
    }
}

impl StateRepository for PersistentStore {
    fn get(&self, key: StoreKey) -> Option<Value> {
        self.memory.get(key)
    }

    fn set(&self, key: StoreKey, value: Value) -> Result<(), StoreError> {
        if value.is_null() {
            self.storage.remove(key.as_str())?;
        } else {
            self.storage.write(key.as_str(), &serde_json::to_string(&value)?)?;
        }
        self.memory.set(key, value)
    }

    fn subscribe(&self, key: StoreKey, callback: Subscriber) -> SubscriptionId {
        self.memory.subscribe(key, callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.memory.unsubscribe(id)
    }
}

/// Shared handle provided to components through context
#[derive(Clone)]
pub struct AppStore(Rc<dyn StateRepository>);

impl AppStore {
    pub fn new(repository: impl StateRepository + 'static) -> Self {
        Self(Rc::new(repository))
    }
}

impl Deref for AppStore {
    type Target = dyn StateRepository;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        assert!(store.get(StoreKey::OnboardingWorkEmail).is_none());

        store.set(StoreKey::OnboardingWorkEmail, json!("mitch@company.com")).unwrap();
        assert_eq!(store.get(StoreKey::OnboardingWorkEmail), Some(json!("mitch@company.com")));

        store.set(StoreKey::OnboardingWorkEmail, Value::Null).unwrap();
        assert!(store.get(StoreKey::OnboardingWorkEmail).is_none());
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let store = MemoryStore::new();
        store
            .set(StoreKey::WalletTransfer, json!({"filterPaymentMethodType": "debitCard", "selectedAccountID": "1"}))
            .unwrap();
        store.merge(StoreKey::WalletTransfer, json!({"selectedAccountID": "2"})).unwrap();

        assert_eq!(
            store.get(StoreKey::WalletTransfer),
            Some(json!({"filterPaymentMethodType": "debitCard", "selectedAccountID": "2"}))
        );
    }

    #[test]
    fn test_merge_into_empty_key_sets_value() {
        let store = MemoryStore::new();
        store.merge(StoreKey::WalletTransfer, json!({"selectedAccountID": "2"})).unwrap();
        assert_eq!(store.get(StoreKey::WalletTransfer), Some(json!({"selectedAccountID": "2"})));
    }

    #[test]
    fn test_subscribers_see_writes_to_their_key_only() {
        let store = Rc::new(MemoryStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let id = store.subscribe(
            StoreKey::OnboardingWorkEmail,
            Rc::new(move |value: Option<&Value>| sink.borrow_mut().push(value.cloned())),
        );

        store.set(StoreKey::OnboardingWorkEmail, json!("a@b.co")).unwrap();
        store.set(StoreKey::WalletTransfer, json!({})).unwrap();
        store.unsubscribe(id);
        store.set(StoreKey::OnboardingWorkEmail, json!("c@d.co")).unwrap();

        assert_eq!(*seen.borrow(), vec![Some(json!("a@b.co"))]);
    }

    #[test]
    fn test_subscriber_can_read_store() {
        let store = Rc::new(MemoryStore::new());
        let reader = store.clone();
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        store.subscribe(
            StoreKey::OnboardingPolicyId,
            Rc::new(move |_: Option<&Value>| *sink.borrow_mut() = reader.get(StoreKey::OnboardingPolicyId)),
        );

        store.set(StoreKey::OnboardingPolicyId, json!("ABC123")).unwrap();
        assert_eq!(*seen.borrow(), Some(json!("ABC123")));
    }

    #[test]
    fn test_typed_helpers() {
        let store = MemoryStore::new();
        set_as(&store, StoreKey::OnboardingPurposeSelected, "newDotEmployer").unwrap();
        let purpose: Option<String> = get_as(&store, StoreKey::OnboardingPurposeSelected);
        assert_eq!(purpose.as_deref(), Some("newDotEmployer"));

        store.set(StoreKey::BankAccountList, json!("not a map")).unwrap();
        let list: Option<crate::types::BankAccountList> = get_as(&store, StoreKey::BankAccountList);
        assert!(list.is_none());
    }

    struct ReadOnlyStorage;

    impl DocumentStorage for ReadOnlyStorage {
        fn read(&self, _name: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn write(&self, name: &str, _contents: &str) -> Result<(), StorageError> {
            Err(StorageError::Other(format!("{} is read-only", name)))
        }

        fn remove(&self, name: &str) -> Result<(), StorageError> {
            Err(StorageError::Other(format!("{} is read-only", name)))
        }
    }

    #[test]
    fn test_failed_write_leaves_memory_and_subscribers_untouched() {
        let store = PersistentStore::load_from(Box::new(ReadOnlyStorage));
        let notified = Rc::new(Cell::new(false));
        let flag = notified.clone();
        store.subscribe(StoreKey::WalletTransfer, Rc::new(move |_: Option<&Value>| flag.set(true)));

        let result = store.set(StoreKey::WalletTransfer, json!({"selectedAccountID": "1"}));
        assert!(matches!(result, Err(StoreError::Storage(_))));
        assert!(store.get(StoreKey::WalletTransfer).is_none());
        assert!(!notified.get());
    }

    #[cfg(not(feature = "web"))]
    #[test]
    fn test_persistent_store_round_trips_through_storage() {
        crate::storage::use_test_storage_dir();

        let store = PersistentStore::load();
        store.set(StoreKey::OnboardingAdminsChatReportId, json!("998877")).unwrap();

        let reloaded = PersistentStore::load();
        assert_eq!(reloaded.get(StoreKey::OnboardingAdminsChatReportId), Some(json!("998877")));

        reloaded.set(StoreKey::OnboardingAdminsChatReportId, Value::Null).unwrap();
        assert!(PersistentStore::load().get(StoreKey::OnboardingAdminsChatReportId).is_none());
    }
}
