use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Ledger node / indexer client operations
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Export requested in a format other than json or csv
    #[error("Unsupported format: {format}. Use 'json' or 'csv'.")]
    UnsupportedFormat { format: String },

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Data validation/serialisation
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// Address failed normalisation, base32 decoding or checksum verification
    #[error("Invalid Algorand address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// No API token from config, ALGOD_API_KEY or PURESTAKE_API_KEY
    #[error(
        "Missing PureStake / Nodely API token. Pass api_token or set ALGOD_API_KEY/PURESTAKE_API_KEY env var."
    )]
    MissingCredential,

    /// Transport-level failure (connect, timeout, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Request failed: {endpoint} returned {status} - {message}")]
    RequestFailed {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// Service answered with a body we could not interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client could not be constructed from the supplied settings
    #[error("Client configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether another attempt could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            ClientError::InvalidAddress { .. }
                | ClientError::MissingCredential
                | ClientError::Config(_)
        )
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for AppError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        AppError::InvalidData(format!("CSV buffer error: {}", err))
    }
}
