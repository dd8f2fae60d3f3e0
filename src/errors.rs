use thiserror::Error;

/// Error type for classification and view-building failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed date {value:?}")]
    MalformedDate { value: String },
    #[error("record {row}")]
    Record {
        row: usize,
        #[source]
        source: Box<Error>,
    },
    #[error("invalid {parameter} {value:?}")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn invalid(parameter: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidParameter {
            parameter,
            value: value.into(),
        }
    }

    /// Attaches the batch position of the record that produced this error.
    pub(crate) fn at_row(self, row: usize) -> Self {
        Error::Record {
            row,
            source: Box::new(self),
        }
    }
}
