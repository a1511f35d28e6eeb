//! The shared query store seam.
//!
//! Controllers never talk to a concrete store type; they hold an
//! `Arc<dyn QueryStore>` and call the four operations below, each keyed by
//! the component id. [`MemoryStore`] is the reference implementation used
//! by tests and single-process hosts; real deployments substitute their
//! own (URL-synced, server-side, etc.).

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Declaration of which other components' state a component watches.
/// Opaque to the controller; the store's dependency tracker consumes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactSpec {
    #[serde(default)]
    pub and: Vec<String>,
    #[serde(default)]
    pub or: Vec<String>,
    #[serde(default)]
    pub not: Vec<String>,
}

/// One committed filter change, forwarded to the store as plain data.
#[derive(Debug, Clone)]
pub struct QueryUpdate {
    pub component_id: String,
    /// Derived fragment; `None` means "no filter applied".
    pub query: Option<Value>,
    /// Selected labels in display order.
    pub value: Vec<String>,
    /// Display label for the host's applied-filters strip.
    pub label: Option<String>,
    pub show_filter: bool,
    pub url_params: bool,
}

/// Single-writer-per-key sink for filter components. Ordering between
/// commits from different components is the store's concern, not the
/// controllers'.
pub trait QueryStore: Send + Sync {
    /// Register a component id. Registering an id twice overwrites the
    /// existing entry.
    fn register(&self, component_id: &str);

    /// Remove a component and its committed state.
    fn deregister(&self, component_id: &str);

    /// Declare the component's watch dependencies.
    fn watch(&self, component_id: &str, react: &ReactSpec);

    /// Record a committed query update for a registered component.
    fn update_query(&self, update: QueryUpdate);
}

#[derive(Debug, Clone, Default)]
struct ComponentEntry {
    query: Option<Value>,
    value: Vec<String>,
    label: Option<String>,
    show_filter: bool,
    url_params: bool,
    react: Option<ReactSpec>,
    updated_at: Option<DateTime<Local>>,
}

/// In-memory [`QueryStore`] keeping the last committed state per component.
#[derive(Default)]
pub struct MemoryStore {
    components: Mutex<HashMap<String, ComponentEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of all registered components, sorted for stable output.
    pub fn component_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.lock().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn is_registered(&self, component_id: &str) -> bool {
        self.lock().contains_key(component_id)
    }

    /// Last committed fragment for a component, if any.
    pub fn query_of(&self, component_id: &str) -> Option<Value> {
        self.lock().get(component_id).and_then(|e| e.query.clone())
    }

    /// Last committed selected labels for a component.
    pub fn value_of(&self, component_id: &str) -> Option<Vec<String>> {
        self.lock().get(component_id).map(|e| e.value.clone())
    }

    pub fn react_of(&self, component_id: &str) -> Option<ReactSpec> {
        self.lock().get(component_id).and_then(|e| e.react.clone())
    }

    pub fn updated_at(&self, component_id: &str) -> Option<DateTime<Local>> {
        self.lock().get(component_id).and_then(|e| e.updated_at)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, ComponentEntry>> {
        self.components.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl QueryStore for MemoryStore {
    fn register(&self, component_id: &str) {
        debug!(component_id, "registering filter component");
        self.lock()
            .insert(component_id.to_string(), ComponentEntry::default());
    }

    fn deregister(&self, component_id: &str) {
        debug!(component_id, "deregistering filter component");
        self.lock().remove(component_id);
    }

    fn watch(&self, component_id: &str, react: &ReactSpec) {
        let mut components = self.lock();
        match components.get_mut(component_id) {
            Some(entry) => entry.react = Some(react.clone()),
            None => warn!(component_id, "watch for unregistered component ignored"),
        }
    }

    fn update_query(&self, update: QueryUpdate) {
        let mut components = self.lock();
        let Some(entry) = components.get_mut(&update.component_id) else {
            warn!(
                component_id = %update.component_id,
                "query update for unregistered component dropped"
            );
            return;
        };
        debug!(
            component_id = %update.component_id,
            selected = update.value.len(),
            has_query = update.query.is_some(),
            "query update committed"
        );
        entry.query = update.query;
        entry.value = update.value;
        entry.label = update.label;
        entry.show_filter = update.show_filter;
        entry.url_params = update.url_params;
        entry.updated_at = Some(Local::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(id: &str, query: Option<Value>, value: Vec<&str>) -> QueryUpdate {
        QueryUpdate {
            component_id: id.to_string(),
            query,
            value: value.into_iter().map(String::from).collect(),
            label: None,
            show_filter: true,
            url_params: false,
        }
    }

    #[test]
    fn test_register_deregister() {
        let store = MemoryStore::new();
        store.register("PriceFilter");
        assert!(store.is_registered("PriceFilter"));
        store.deregister("PriceFilter");
        assert!(!store.is_registered("PriceFilter"));
        assert_eq!(store.component_ids(), Vec::<String>::new());
    }

    #[test]
    fn test_duplicate_register_overwrites() {
        let store = MemoryStore::new();
        store.register("F");
        store.update_query(update("F", Some(json!({"x": 1})), vec!["A"]));
        store.register("F");
        assert_eq!(store.query_of("F"), None);
        assert_eq!(store.value_of("F"), Some(vec![]));
    }

    #[test]
    fn test_update_for_unregistered_component_is_dropped() {
        let store = MemoryStore::new();
        store.update_query(update("Ghost", Some(json!({})), vec![]));
        assert!(!store.is_registered("Ghost"));
    }

    #[test]
    fn test_update_records_state_and_timestamp() {
        let store = MemoryStore::new();
        store.register("F");
        assert_eq!(store.updated_at("F"), None);
        store.update_query(update("F", Some(json!({"bool": {}})), vec!["A", "B"]));
        assert_eq!(store.query_of("F"), Some(json!({"bool": {}})));
        assert_eq!(
            store.value_of("F"),
            Some(vec!["A".to_string(), "B".to_string()])
        );
        assert!(store.updated_at("F").is_some());
    }

    #[test]
    fn test_watch_stores_react_spec() {
        let store = MemoryStore::new();
        store.register("F");
        let react = ReactSpec {
            and: vec!["SearchBox".to_string()],
            ..Default::default()
        };
        store.watch("F", &react);
        assert_eq!(store.react_of("F"), Some(react));
    }
}
