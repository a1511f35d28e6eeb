//! Host-supplied hooks around selection commits.
//!
//! `before_value_change` is the interception point: it sees the candidate
//! selection before anything is committed and may transform it or reject
//! it. It is future-returning so hosts can validate against remote state;
//! synchronous hosts wrap a plain function with [`before_value_change_fn`].
//! The remaining hooks are pure observers and cannot veto.

use std::sync::Arc;

use anyhow::Result;
use futures::future::{ready, BoxFuture};
use serde_json::Value;

use crate::config::FilterConfig;
use crate::selection::RangeItem;

/// Validation/transformation hook run before a selection is committed.
/// The resolved item list is what actually gets committed; an error aborts
/// the change and leaves prior state untouched.
pub type BeforeValueChange =
    Arc<dyn Fn(Vec<RangeItem>) -> BoxFuture<'static, Result<Vec<RangeItem>>> + Send + Sync>;

/// Observer invoked with the committed items after every applied change.
pub type OnValueChange = Arc<dyn Fn(&[RangeItem]) + Send + Sync>;

/// Observer invoked with `(previous, next)` whenever the derived query
/// fragment changes.
pub type OnQueryChange = Arc<dyn Fn(Option<&Value>, Option<&Value>) + Send + Sync>;

/// Replacement for the default range derivation. Receives the committed
/// items and the full filter config; may return `None` for "no filter".
pub type CustomQuery = Arc<dyn Fn(&[RangeItem], &FilterConfig) -> Option<Value> + Send + Sync>;

/// Wrap a synchronous validation function as a [`BeforeValueChange`] hook.
pub fn before_value_change_fn<F>(f: F) -> BeforeValueChange
where
    F: Fn(Vec<RangeItem>) -> Result<Vec<RangeItem>> + Send + Sync + 'static,
{
    Arc::new(move |items| Box::pin(ready(f(items))))
}

/// Bundle of optional hooks handed to a controller at construction.
#[derive(Default, Clone)]
pub struct FilterHooks {
    pub before_value_change: Option<BeforeValueChange>,
    pub on_value_change: Option<OnValueChange>,
    pub on_query_change: Option<OnQueryChange>,
    pub custom_query: Option<CustomQuery>,
}

impl std::fmt::Debug for FilterHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterHooks")
            .field("before_value_change", &self.before_value_change.is_some())
            .field("on_value_change", &self.on_value_change.is_some())
            .field("on_query_change", &self.on_query_change.is_some())
            .field("custom_query", &self.custom_query.is_some())
            .finish()
    }
}
