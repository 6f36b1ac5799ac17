use std::fmt;

/// Result type for wayfarer-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Date fields do not agree with the stated granularity
    GranularityMismatch {
        granularity: crate::Granularity,
        detail: String,
    },
    /// Departure precedes arrival
    DepartureBeforeArrival,
    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::GranularityMismatch {
                granularity,
                detail,
            } => {
                write!(f, "date does not match {} granularity: {}", granularity, detail)
            }
            Error::DepartureBeforeArrival => write!(f, "departure date precedes arrival date"),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
