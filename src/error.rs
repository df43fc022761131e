use thiserror::Error;

use crate::ValidationError;
use crate::parse::ParseError;

/// Unified error type covering validation, parsing, and I/O.
///
/// Returned by convenience loaders like
/// [`Properties::from_file()`](crate::Properties::from_file).
#[derive(Debug, Error)]
pub enum OnPropError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_is_transparent() {
        let err: OnPropError = ValidationError::MissingAttribute { condition: None }.into();
        assert_eq!(
            err.to_string(),
            "The name or value attribute of the property condition must be specified"
        );
        assert!(matches!(err, OnPropError::Validation(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::Properties::from_file("/nonexistent/onprop/application.properties")
            .unwrap_err();
        assert!(matches!(err, OnPropError::Io(_)));
    }
}
