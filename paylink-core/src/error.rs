/// Errors produced by the `paylink-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A receipt value was empty or longer than the gateway accepts.
    #[error("invalid receipt '{value}': {reason}")]
    InvalidReceipt { value: String, reason: String },

    /// A JSON request body was neither an object nor an array.
    #[error("JSON body must be an object or an array")]
    NotObjectOrArray,

    /// A request body could not be parsed as JSON.
    #[error("malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}
