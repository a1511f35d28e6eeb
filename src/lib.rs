//! Headless multi-select range filter controllers for faceted search UIs.
//!
//! A [`MultiRangeController`] owns the selection state of one dropdown
//! range filter: which [`RangeItem`]s are chosen, in what order, and what
//! Elasticsearch-style query fragment they derive to. Committed changes are
//! forwarded to a shared [`QueryStore`] keyed by component id; rendering is
//! entirely the host's business.
//!
//! ```no_run
//! use std::sync::Arc;
//! use facetkit::{
//!     ControlledValue, FilterConfig, FilterHooks, MemoryStore,
//!     MultiRangeController, RangeItem,
//! };
//!
//! # async fn run() -> Result<(), facetkit::FilterError> {
//! let mut config = FilterConfig::new("PriceFilter", "price");
//! config.data = vec![
//!     RangeItem::new("Cheap", 0.0, 50.0),
//!     RangeItem::new("Pricey", 50.0, 1000.0),
//! ];
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut filter =
//!     MultiRangeController::new(config, store.clone(), FilterHooks::default())?;
//! filter.on_create().await?;
//! filter.toggle(Some(RangeItem::new("Cheap", 0.0, 50.0))).await?;
//! assert!(store.query_of("PriceFilter").is_some());
//! filter.on_destroy();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod hooks;
pub mod query;
pub mod selection;
pub mod store;

pub use config::{load_filters, FilterConfig, FiltersFile};
pub use controller::{ControlledValue, MultiRangeController};
pub use error::FilterError;
pub use hooks::{before_value_change_fn, FilterHooks};
pub use query::range_query;
pub use selection::{RangeItem, Selection};
pub use store::{MemoryStore, QueryStore, QueryUpdate, ReactSpec};
