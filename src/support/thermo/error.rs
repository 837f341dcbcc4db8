use thiserror::Error;

/// Errors that may occur when evaluating fluid properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// A property evaluated to `NaN` or infinity.
    #[error("non-finite {property}: {context}")]
    NonFinite {
        property: &'static str,
        context: String,
    },

    /// A property that is documented to be non-negative came back
    /// negative.
    #[error("negative {property}: {context}")]
    Negative {
        property: &'static str,
        context: String,
    },

    /// The requested state is outside the model's valid domain.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The model has no saturation data for the requested fluid.
    ///
    /// Callers with a documented fallback (surface-tension default,
    /// phase-detection default) handle this variant locally.
    #[error("no saturation data: {context}")]
    MissingSaturation { context: String },

    /// The property backend failed for an internal reason.
    #[error("property backend failed: {context}")]
    Backend { context: String },
}
