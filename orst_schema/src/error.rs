use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

/// Alias for `Result<T, orst_schema::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Represents every way a value can break the visualization schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Raised when a string does not name one of the fourteen catalogued algorithms.
    InvalidIdentifier(String),

    /// Raised when a run has an end time but no start time, or ends before it starts.
    InconsistentTimestamps {
        start: Option<f64>,
        end: f64,
    },

    /// Raised when a comparison result does not agree with the state it was derived from. For
    /// example, a result exists while one of the sub-sessions is still unsorted.
    InconsistentResult(String),

    /// Raised when a time difference is negative, or either difference is not a finite number.
    InvalidDifference(f64),

    /// Raised when the animation speed is not a positive, finite number.
    InvalidSpeed(f64),

    /// Raised when a session is configured with zero bars.
    InvalidArraySize,

    /// Raised when a highlighted index points past the end of the bar array. `run` names the
    /// offending run: `primary`, `secondary` or `current`.
    IndexOutOfBounds {
        run: &'static str,
        index: usize,
        len: usize,
    },
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidIdentifier(id) => write!(
                f,
                "Invalid Identifier: `{id}` (expected one of: {:?})",
                crate::SortingAlgorithm::IDENTIFIERS
            ),
            Error::InconsistentTimestamps { start: None, end } => {
                write!(f, "Inconsistent Timestamps: run ended at {end} but never started")
            }
            Error::InconsistentTimestamps {
                start: Some(start),
                end,
            } => write!(
                f,
                "Inconsistent Timestamps: run ended at {end} before it started at {start}"
            ),
            Error::InconsistentResult(s) => write!(f, "Inconsistent Result: {s}"),
            Error::InvalidDifference(d) => {
                write!(f, "Invalid Difference: {d} (expected a finite, non-negative number)")
            }
            Error::InvalidSpeed(s) => {
                write!(f, "Invalid Speed: {s} (expected a finite number above zero)")
            }
            Error::InvalidArraySize => {
                f.write_str("Invalid Array Size: a session needs at least one bar")
            }
            Error::IndexOutOfBounds { run, index, len } => write!(
                f,
                "Index Out Of Bounds: {run} run highlights index {index} but holds {len} bars"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_messages() {
        let missing = Error::InconsistentTimestamps {
            start: None,
            end: 10.0,
        };
        assert_eq!(
            missing.to_string(),
            "Inconsistent Timestamps: run ended at 10 but never started"
        );

        let reversed = Error::InconsistentTimestamps {
            start: Some(100.0),
            end: 50.0,
        };
        assert_eq!(
            reversed.to_string(),
            "Inconsistent Timestamps: run ended at 50 before it started at 100"
        );
    }

    #[test]
    fn identifier_message_lists_choices() {
        let err = Error::InvalidIdentifier("bogo".to_string());
        let msg = err.to_string();
        assert!(msg.contains("`bogo`"));
        assert!(msg.contains("\"pancake\""));
    }
}
