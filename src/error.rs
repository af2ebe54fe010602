//! Error types for metric construction and validation

use std::fmt;

/// Result type alias for metric operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for metric operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Value kind is not one of the supported data types
    UnsupportedType(String),
    /// TTL outside `0 < ttl < i32::MAX`
    InvalidTtl { provided: i64 },
    /// Data type code that does not name a known type
    InvalidDataType(String),
    /// Unrecognized time unit
    InvalidTimeUnit(String),
    /// Configuration errors
    Config(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedType(kind) => write!(f, "Unknown metric value type: {}", kind),
            Error::InvalidTtl { provided } => write!(
                f,
                "TTL supplied for metric is invalid. Required: 0 < ttl < {}, provided: {}",
                i32::MAX,
                provided
            ),
            Error::InvalidDataType(code) => write!(f, "Unknown data type: {}", code),
            Error::InvalidTimeUnit(unit) => write!(f, "Unknown time unit: {}", unit),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(e: std::num::ParseIntError) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ttl_message_reports_bound() {
        let err = Error::InvalidTtl { provided: -5 };
        assert_eq!(
            err.to_string(),
            "TTL supplied for metric is invalid. Required: 0 < ttl < 2147483647, provided: -5"
        );
    }

    #[test]
    fn test_parse_int_maps_to_config() {
        let err: Error = "abc".parse::<i64>().unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
