use numberflow_format::FormatError;

/// Errors raised while building a flow. Transforming a value never fails;
/// a non-finite value yields no data instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("invalid flow config json: {0}")]
    ConfigJson(String),
}
