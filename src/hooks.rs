use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

use crate::store::{get_as, AppStore, StoreKey, Subscriber};

/// Current value under `key`, refreshed on every write to it
pub fn use_store_value<T: DeserializeOwned + 'static>(key: StoreKey) -> Signal<Option<T>> {
    let store = use_context::<AppStore>();
    let value = use_signal(|| get_as::<T>(&*store, key));

    let subscription = use_hook(|| {
        let callback: Subscriber = Rc::new(move |raw: Option<&Value>| {
            let mut target = value;
            target.set(raw.and_then(|raw| serde_json::from_value(raw.clone()).ok()));
        });
        store.subscribe(key, callback)
    });

    use_drop(move || store.unsubscribe(subscription));
    value
}
