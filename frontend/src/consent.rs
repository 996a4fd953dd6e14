use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::prelude::*;

pub const CONSENT_KEY: &str = "bst-crew-cookie-consent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub timestamp: i64,
}

impl ConsentRecord {
    fn all(timestamp: i64) -> Self {
        Self { necessary: true, analytics: true, marketing: true, timestamp }
    }

    fn necessary_only(timestamp: i64) -> Self {
        Self { necessary: true, analytics: false, marketing: false, timestamp }
    }

    pub fn allows(&self, kind: ConsentKind) -> bool {
        match kind {
            ConsentKind::Necessary => self.necessary,
            ConsentKind::Analytics => self.analytics,
            ConsentKind::Marketing => self.marketing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentKind {
    Necessary,
    Analytics,
    Marketing,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsentError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write consent: {0}")]
    Storage(String),
    #[error("failed to encode consent: {0}")]
    Encode(String),
}

/// String key-value storage holding the serialized consent record.
pub trait ConsentStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ConsentError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ConsentError>;
    fn remove(&self, key: &str) -> Result<(), ConsentError>;
}

/// `window.localStorage`, looked up on every call so a storage that becomes
/// available later is picked up.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, ConsentError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(ConsentError::Unavailable)
    }
}

impl ConsentStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ConsentError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ConsentError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConsentError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ConsentError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), ConsentError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| ConsentError::Storage(format!("{:?}", e)))
    }
}

/// Receives the categories the visitor opted into. The site ships no
/// tracking scripts yet, so the default loader only logs.
pub trait TrackingLoader {
    fn load_analytics_scripts(&self);
    fn load_marketing_scripts(&self);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlyLoader;

impl TrackingLoader for LogOnlyLoader {
    fn load_analytics_scripts(&self) {
        info!("Analytics consent granted, no analytics scripts configured");
    }

    fn load_marketing_scripts(&self) {
        info!("Marketing consent granted, no marketing scripts configured");
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Cookie consent for the whole site. Built once at startup and handed to
/// components through [`ConsentProvider`].
pub struct ConsentStore<S: ConsentStorage> {
    storage: S,
    loader: Box<dyn TrackingLoader>,
    clock: fn() -> i64,
    record: Option<ConsentRecord>,
    show_banner: bool,
}

impl<S: ConsentStorage> ConsentStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            loader: Box::new(LogOnlyLoader),
            clock: now_millis,
            record: None,
            show_banner: true,
        }
    }

    #[cfg(test)]
    pub fn with_loader(mut self, loader: impl TrackingLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Reads the persisted decision and settles the banner flag. Scripts
    /// for categories granted in an earlier visit are loaded here.
    pub fn load(mut self) -> Self {
        self.record = self.get_stored_consent();
        self.show_banner = self.record.is_none();
        self.run_loaders();
        self
    }

    /// Anything unreadable counts as "no decision yet".
    pub fn get_stored_consent(&self) -> Option<ConsentRecord> {
        let raw = match self.storage.get(CONSENT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read cookie consent: {}", e);
                return None;
            }
        };
        match serde_json::from_str::<ConsentRecord>(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Error parsing cookie consent: {}", e);
                None
            }
        }
    }

    pub fn accept_all(&mut self) -> Result<ConsentRecord, ConsentError> {
        self.save(ConsentRecord::all((self.clock)()))
    }

    pub fn accept_necessary_only(&mut self) -> Result<ConsentRecord, ConsentError> {
        self.save(ConsentRecord::necessary_only((self.clock)()))
    }

    pub fn is_consent_given(&self, kind: ConsentKind) -> bool {
        self.record.map_or(false, |record| record.allows(kind))
    }

    /// Memory is only cleared once the stored record is gone.
    pub fn reset_consent(&mut self) -> Result<(), ConsentError> {
        self.storage.remove(CONSENT_KEY)?;
        self.record = None;
        self.show_banner = true;
        Ok(())
    }

    pub fn consent(&self) -> Option<ConsentRecord> {
        self.record
    }

    pub fn show_banner(&self) -> bool {
        self.show_banner
    }

    fn save(&mut self, record: ConsentRecord) -> Result<ConsentRecord, ConsentError> {
        let json = serde_json::to_string(&record).map_err(|e| ConsentError::Encode(e.to_string()))?;
        self.storage.set(CONSENT_KEY, &json)?;
        self.record = Some(record);
        self.show_banner = false;
        self.run_loaders();
        Ok(record)
    }

    fn run_loaders(&self) {
        if self.is_consent_given(ConsentKind::Analytics) {
            self.loader.load_analytics_scripts();
        }
        if self.is_consent_given(ConsentKind::Marketing) {
            self.loader.load_marketing_scripts();
        }
    }
}

/// What components see of the store: a snapshot plus the actions.
#[derive(Clone)]
pub struct ConsentContext {
    pub consent: Option<ConsentRecord>,
    pub show_banner: bool,
    pub accept_all: Callback<()>,
    pub accept_necessary: Callback<()>,
    pub reset: Callback<()>,
}

impl ConsentContext {
    pub fn is_consent_given(&self, kind: ConsentKind) -> bool {
        self.consent.map_or(false, |record| record.allows(kind))
    }
}

impl PartialEq for ConsentContext {
    fn eq(&self, other: &Self) -> bool {
        self.consent == other.consent && self.show_banner == other.show_banner
    }
}

#[derive(Properties, PartialEq)]
pub struct ConsentProviderProps {
    pub children: Children,
}

#[function_component(ConsentProvider)]
pub fn consent_provider(props: &ConsentProviderProps) -> Html {
    let store = use_mut_ref(|| ConsentStore::new(LocalStorage).load());
    let snapshot = use_state({
        let store = store.clone();
        move || {
            let store = store.borrow();
            (store.consent(), store.show_banner())
        }
    });

    let run = {
        let store = store.clone();
        let snapshot = snapshot.clone();
        move |action: fn(&mut ConsentStore<LocalStorage>) -> Result<(), ConsentError>| {
            let store = store.clone();
            let snapshot = snapshot.clone();
            Callback::from(move |_: ()| {
                let mut store = store.borrow_mut();
                if let Err(e) = action(&mut store) {
                    log::error!("Cookie consent update failed: {}", e);
                }
                snapshot.set((store.consent(), store.show_banner()));
            })
        }
    };

    let context = ConsentContext {
        consent: snapshot.0,
        show_banner: snapshot.1,
        accept_all: run(|store| store.accept_all().map(|_| ())),
        accept_necessary: run(|store| store.accept_necessary_only().map(|_| ())),
        reset: run(|store| store.reset_consent()),
    };

    html! {
        <ContextProvider<ConsentContext> {context}>
            { for props.children.iter() }
        </ContextProvider<ConsentContext>>
    }
}

#[hook]
pub fn use_consent() -> Option<ConsentContext> {
    use_context::<ConsentContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Debug, Default, Clone)]
    struct MemoryStorage {
        items: Rc<RefCell<HashMap<String, String>>>,
    }

    impl ConsentStorage for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, ConsentError> {
            Ok(self.items.borrow().get(key).cloned())
        }
        fn set(&self, key: &str, value: &str) -> Result<(), ConsentError> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
        fn remove(&self, key: &str) -> Result<(), ConsentError> {
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }

    /// Reads and writes work, removal is refused.
    #[derive(Default, Clone)]
    struct LockedRemoveStorage {
        inner: MemoryStorage,
    }

    impl ConsentStorage for LockedRemoveStorage {
        fn get(&self, key: &str) -> Result<Option<String>, ConsentError> {
            self.inner.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<(), ConsentError> {
            self.inner.set(key, value)
        }
        fn remove(&self, _key: &str) -> Result<(), ConsentError> {
            Err(ConsentError::Storage("SecurityError".to_string()))
        }
    }

    fn fixed_clock() -> i64 {
        1_700_000_000_000
    }

    fn store_with(storage: &MemoryStorage) -> ConsentStore<MemoryStorage> {
        ConsentStore::new(storage.clone()).with_clock(fixed_clock).load()
    }

    struct FailingStorage;

    impl ConsentStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, ConsentError> {
            Err(ConsentError::Unavailable)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), ConsentError> {
            Err(ConsentError::Storage("quota exceeded".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<(), ConsentError> {
            Err(ConsentError::Unavailable)
        }
    }

    #[derive(Clone, Default)]
    struct CountingLoader {
        analytics: Rc<Cell<u32>>,
        marketing: Rc<Cell<u32>>,
    }

    impl TrackingLoader for CountingLoader {
        fn load_analytics_scripts(&self) {
            self.analytics.set(self.analytics.get() + 1);
        }
        fn load_marketing_scripts(&self) {
            self.marketing.set(self.marketing.get() + 1);
        }
    }

    #[test]
    fn test_banner_shown_without_stored_consent() {
        let store = store_with(&MemoryStorage::default());
        assert!(store.show_banner());
        assert_eq!(store.consent(), None);
        assert!(!store.is_consent_given(ConsentKind::Necessary));
    }

    #[test]
    fn test_accept_all_writes_full_record() {
        let storage = MemoryStorage::default();
        let mut store = store_with(&storage);
        let record = store.accept_all().unwrap();

        assert_eq!(record, ConsentRecord::all(fixed_clock()));
        assert!(!store.show_banner());
        assert!(store.is_consent_given(ConsentKind::Analytics));
        assert!(store.is_consent_given(ConsentKind::Marketing));

        let raw = storage.get(CONSENT_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"{"necessary":true,"analytics":true,"marketing":true,"timestamp":1700000000000}"#
        );
    }

    #[test]
    fn test_accept_necessary_then_reload_keeps_banner_hidden() {
        let storage = MemoryStorage::default();
        let mut store = store_with(&storage);
        assert!(store.show_banner());

        store.accept_necessary_only().unwrap();
        assert!(!store.is_consent_given(ConsentKind::Analytics));
        assert!(store.is_consent_given(ConsentKind::Necessary));
        assert!(!store.show_banner());

        let reloaded = store_with(&storage);
        assert!(!reloaded.show_banner());
        assert!(reloaded.is_consent_given(ConsentKind::Necessary));
        assert!(!reloaded.is_consent_given(ConsentKind::Marketing));
    }

    #[test]
    fn test_reset_clears_record_and_shows_banner() {
        let storage = MemoryStorage::default();
        let mut store = store_with(&storage);
        store.accept_all().unwrap();
        store.reset_consent().unwrap();

        assert!(store.show_banner());
        assert!(!store.is_consent_given(ConsentKind::Necessary));
        assert_eq!(storage.get(CONSENT_KEY).unwrap(), None);
        assert!(store_with(&storage).show_banner());
    }

    #[test]
    fn test_failed_reset_keeps_memory_in_step_with_storage() {
        let storage = LockedRemoveStorage::default();
        let mut store = ConsentStore::new(storage.clone()).with_clock(fixed_clock).load();
        store.accept_all().unwrap();

        let err = store.reset_consent().unwrap_err();
        assert_eq!(err, ConsentError::Storage("SecurityError".to_string()));
        assert!(!store.show_banner());
        assert!(store.is_consent_given(ConsentKind::Analytics));

        let reloaded = ConsentStore::new(storage).load();
        assert_eq!(reloaded.consent(), store.consent());
        assert_eq!(reloaded.show_banner(), store.show_banner());
    }

    #[test]
    fn test_necessary_tracks_every_action_sequence() {
        let storage = MemoryStorage::default();
        let mut store = store_with(&storage);
        let steps = ["all", "reset", "necessary", "all", "necessary", "reset", "reset"];
        for step in steps {
            let decided = match step {
                "all" => store.accept_all().map(|_| true),
                "necessary" => store.accept_necessary_only().map(|_| true),
                _ => store.reset_consent().map(|_| false),
            }
            .unwrap();
            assert_eq!(store.is_consent_given(ConsentKind::Necessary), decided, "after {}", step);
            assert_eq!(store.show_banner(), !decided, "after {}", step);
        }
    }

    #[test]
    fn test_corrupted_value_counts_as_absent() {
        let storage = MemoryStorage::default();
        storage.set(CONSENT_KEY, "not json {").unwrap();
        let store = store_with(&storage);

        assert!(store.show_banner());
        assert_eq!(store.get_stored_consent(), None);
        for kind in [ConsentKind::Necessary, ConsentKind::Analytics, ConsentKind::Marketing] {
            assert!(!store.is_consent_given(kind));
        }
    }

    #[test]
    fn test_record_missing_fields_counts_as_absent() {
        let storage = MemoryStorage::default();
        storage.set(CONSENT_KEY, r#"{"necessary":true}"#).unwrap();
        assert!(store_with(&storage).show_banner());
    }

    #[test]
    fn test_unreadable_storage_shows_banner_and_write_fails() {
        let mut store = ConsentStore::new(FailingStorage).load();
        assert!(store.show_banner());

        let err = store.accept_all().unwrap_err();
        assert_eq!(err, ConsentError::Storage("quota exceeded".to_string()));
        assert!(store.show_banner());
        assert!(!store.is_consent_given(ConsentKind::Necessary));
    }

    #[test]
    fn test_loaders_follow_granted_categories() {
        let loader = CountingLoader::default();
        let storage = MemoryStorage::default();
        let mut store = ConsentStore::new(storage.clone())
            .with_loader(loader.clone())
            .load();

        store.accept_necessary_only().unwrap();
        assert_eq!(loader.analytics.get(), 0);
        assert_eq!(loader.marketing.get(), 0);

        store.accept_all().unwrap();
        assert_eq!(loader.analytics.get(), 1);
        assert_eq!(loader.marketing.get(), 1);

        // a returning visitor with full consent loads scripts at startup
        let returning = CountingLoader::default();
        let _store = ConsentStore::new(storage).with_loader(returning.clone()).load();
        assert_eq!(returning.analytics.get(), 1);
        assert_eq!(returning.marketing.get(), 1);
    }
}
