use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A vote row holds a meal, protein slot or polarity string the
    /// application never writes.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Unrecognized stored value in column '{column}': '{value}'")]
    UnknownStoredValue {
        /// The column holding the unrecognized value
        column: &'static str,
        /// The stored value that failed to parse
        value: String,
    },
}
