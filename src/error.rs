//! Error taxonomy for filter controllers.
//!
//! Hooks supplied by hosts are free-form `anyhow` seams; everything the
//! library itself can fail with is enumerated here so callers can match on
//! it. Harmless cases (clearing an already-empty selection) are plain
//! no-ops, not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    /// Required identity or field-name configuration is absent. Raised at
    /// construction/registration time, never mid-flight.
    #[error("missing required configuration field `{0}`")]
    ConfigurationMissing(&'static str),

    /// The `before_value_change` hook rejected the pending selection. The
    /// prior selection and last committed query are retained.
    #[error("selection change rejected by before_value_change hook")]
    ValidationRejected(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A selection change was requested while another one is still waiting
    /// on its hook. Changes are single-flight per controller; nothing is
    /// queued.
    #[error("a selection change is already pending for component `{0}`")]
    ChangePending(String),
}

impl FilterError {
    /// Wrap a hook failure coming over the `anyhow` channel.
    pub(crate) fn rejected(err: anyhow::Error) -> Self {
        FilterError::ValidationRejected(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_preserves_hook_message() {
        let err = FilterError::rejected(anyhow::anyhow!("price out of bounds"));
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "price out of bounds");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FilterError::ConfigurationMissing("component_id").to_string(),
            "missing required configuration field `component_id`"
        );
        assert_eq!(
            FilterError::ChangePending("PriceFilter".into()).to_string(),
            "a selection change is already pending for component `PriceFilter`"
        );
    }
}
