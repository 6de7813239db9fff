use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Provide a target domain url")]
    MissingUrl,
    #[error("Number of requests must be greater than 0")]
    RpsZero,
    #[error("Duration must be greater than 0")]
    DurationZero,
    #[error("Max in-flight requests must be greater than 0")]
    MaxInFlightZero,
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Timeout must not be empty.")]
    TimeoutEmpty,
    #[error("Invalid timeout '{value}'.")]
    InvalidTimeoutFormat { value: String },
    #[error("Invalid timeout '{value}': {source}")]
    InvalidTimeoutNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Timeout overflow.")]
    TimeoutOverflow,
    #[error("Invalid timeout unit '{unit}'.")]
    InvalidTimeoutUnit { unit: String },
    #[error("Timeout must be > 0.")]
    TimeoutZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
