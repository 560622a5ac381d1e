use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("percent value {0} is above 100")]
    PercentOutOfRange(u8),

    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
