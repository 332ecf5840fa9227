use thiserror::Error;

/// Errors raised while building values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("cannot set unknown field `{field}` on {record}")]
    UnknownRecordField { record: String, field: String },

    #[error("range step must not be zero")]
    ZeroRangeStep,
}
