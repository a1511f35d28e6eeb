//! Multi-select range filter controller.
//!
//! Holds the selection for one filter component, runs every pending change
//! through the host's interception hook, derives the query fragment, and
//! forwards committed updates to the shared store. Lifecycle is explicit:
//! the host calls [`MultiRangeController::on_create`] when the component
//! enters its tree, [`MultiRangeController::on_config_change`] /
//! [`MultiRangeController::set_controlled_value`] on input changes, and
//! [`MultiRangeController::on_destroy`] when it leaves.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::hooks::FilterHooks;
use crate::query::range_query;
use crate::selection::{RangeItem, Selection};
use crate::store::{QueryStore, QueryUpdate};

/// Externally controlled selection input. Distinguishes "the host said
/// nothing" from "the host explicitly cleared the selection".
#[derive(Debug, Clone, PartialEq)]
pub enum ControlledValue {
    /// No controlled value supplied; internal state rules.
    Unset,
    /// Explicit clear.
    Clear,
    /// Explicit selection by label.
    Labels(Vec<String>),
}

/// Commit phase of a controller. A change sits in `Pending` only while its
/// `before_value_change` hook is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Pending,
}

/// Controller for one multi-select dropdown range filter.
pub struct MultiRangeController {
    config: FilterConfig,
    selection: Selection,
    last_query: Option<Value>,
    phase: Phase,
    registered: bool,
    /// Once a controlled value has been seen, default_selected changes are
    /// ignored.
    controlled: bool,
    store: Arc<dyn QueryStore>,
    hooks: FilterHooks,
}

impl std::fmt::Debug for MultiRangeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiRangeController")
            .field("config", &self.config)
            .field("selection", &self.selection)
            .field("last_query", &self.last_query)
            .field("phase", &self.phase)
            .field("registered", &self.registered)
            .field("controlled", &self.controlled)
            .finish_non_exhaustive()
    }
}

impl MultiRangeController {
    /// Build a controller for `config` against `store`. Fails fast when
    /// identity or field-name configuration is missing; no store call is
    /// made until [`on_create`](Self::on_create).
    pub fn new(
        config: FilterConfig,
        store: Arc<dyn QueryStore>,
        hooks: FilterHooks,
    ) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self {
            config,
            selection: Selection::new(),
            last_query: None,
            phase: Phase::Idle,
            registered: false,
            controlled: false,
            store,
            hooks,
        })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Currently selected items in display order.
    pub fn selected(&self) -> &[RangeItem] {
        self.selection.items()
    }

    /// Last committed query fragment, if any.
    pub fn current_query(&self) -> Option<&Value> {
        self.last_query.as_ref()
    }

    /// Register with the store, declare watch dependencies, and apply the
    /// default selection (if configured) through the hook path. Issues no
    /// commit when there is no default selection.
    pub async fn on_create(&mut self) -> Result<(), FilterError> {
        self.store.register(&self.config.component_id);
        self.registered = true;
        if let Some(react) = &self.config.react {
            self.store.watch(&self.config.component_id, react);
        }
        debug!(component_id = %self.config.component_id, "filter component created");

        if let Some(labels) = self.config.default_selected.clone() {
            self.apply_external_selection(Some(&labels)).await?;
        }
        Ok(())
    }

    /// Apply a new configuration. Re-declares watch dependencies when the
    /// `react` spec changed and reseeds the selection when
    /// `default_selected` changed (unless a controlled value has taken
    /// over).
    pub async fn on_config_change(&mut self, new: FilterConfig) -> Result<(), FilterError> {
        new.validate()?;
        let react_changed = new.react != self.config.react;
        let default_changed = new.default_selected != self.config.default_selected;
        let default_selected = new.default_selected.clone();
        self.config = new;

        if react_changed {
            if let Some(react) = &self.config.react {
                self.store.watch(&self.config.component_id, react);
            }
        }
        if default_changed && !self.controlled {
            self.apply_external_selection(default_selected.as_deref())
                .await?;
        }
        Ok(())
    }

    /// Feed the externally controlled selection. `Unset` is a no-op; the
    /// first non-`Unset` value gives control to the host for the rest of
    /// this controller's life.
    pub async fn set_controlled_value(
        &mut self,
        value: ControlledValue,
    ) -> Result<(), FilterError> {
        match value {
            ControlledValue::Unset => Ok(()),
            ControlledValue::Clear => {
                self.controlled = true;
                self.apply_external_selection(None).await
            }
            ControlledValue::Labels(labels) => {
                self.controlled = true;
                if labels == self.selection.labels() {
                    return Ok(());
                }
                self.apply_external_selection(Some(&labels)).await
            }
        }
    }

    /// Toggle one item: present labels are removed, absent ones appended,
    /// `None` clears the whole selection. Clearing an already-empty
    /// selection is a no-op.
    pub async fn toggle(&mut self, item: Option<RangeItem>) -> Result<(), FilterError> {
        let candidate = match item {
            None => {
                if self.selection.is_empty() {
                    return Ok(());
                }
                Vec::new()
            }
            Some(item) => self.selection.toggled(&item),
        };
        self.request_change(candidate).await
    }

    /// Bulk reseed from an ordered label list against the configured
    /// catalog. Catalog order wins over label order; `None` clears.
    pub async fn apply_external_selection(
        &mut self,
        labels: Option<&[String]>,
    ) -> Result<(), FilterError> {
        let candidate = match labels {
            Some(labels) => Selection::from_labels(labels, &self.config.data)
                .items()
                .to_vec(),
            None => Vec::new(),
        };
        self.request_change(candidate).await
    }

    /// Deregister from the store. Idempotent; issues no further commits.
    pub fn on_destroy(&mut self) {
        if self.registered {
            self.store.deregister(&self.config.component_id);
            self.registered = false;
            debug!(component_id = %self.config.component_id, "filter component destroyed");
        }
    }

    /// Run a candidate selection through the interception hook and, on
    /// success, commit it: update internal state, notify observers, derive
    /// the fragment, and forward the update to the store.
    async fn request_change(&mut self, candidate: Vec<RangeItem>) -> Result<(), FilterError> {
        if self.phase == Phase::Pending {
            return Err(FilterError::ChangePending(self.config.component_id.clone()));
        }

        let committed = match &self.hooks.before_value_change {
            Some(hook) => {
                self.phase = Phase::Pending;
                let result = hook(candidate).await;
                self.phase = Phase::Idle;
                match result {
                    Ok(items) => items,
                    Err(err) => {
                        warn!(
                            component_id = %self.config.component_id,
                            error = %err,
                            "selection change rejected"
                        );
                        return Err(FilterError::rejected(err));
                    }
                }
            }
            None => candidate,
        };

        self.selection = Selection::from_items(committed);
        if let Some(observer) = &self.hooks.on_value_change {
            observer(self.selection.items());
        }
        self.commit_query();
        Ok(())
    }

    /// Derive the fragment for the current selection and forward it to the
    /// store. The `on_query_change` observer fires only when the fragment
    /// actually changed; the store update is dispatched unconditionally.
    fn commit_query(&mut self) {
        let query = match &self.hooks.custom_query {
            Some(custom) => custom(self.selection.items(), &self.config),
            None => range_query(&self.config.data_field, self.selection.items()),
        };

        if query != self.last_query {
            if let Some(observer) = &self.hooks.on_query_change {
                observer(self.last_query.as_ref(), query.as_ref());
            }
        }

        self.store.update_query(QueryUpdate {
            component_id: self.config.component_id.clone(),
            query: query.clone(),
            value: self.selection.labels(),
            label: self.config.filter_label.clone(),
            show_filter: self.config.show_filter,
            url_params: self.config.url_params,
        });
        self.last_query = query;
    }
}
