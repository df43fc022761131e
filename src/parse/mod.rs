mod error;
mod grammar;

pub use error::ParseError;

/// Parse a properties document into `(key, value)` pairs in input order.
///
/// # Errors
///
/// Returns [`ParseError`] if a non-comment line is not a valid pair.
pub fn parse(input: &str) -> Result<Vec<(String, String)>, ParseError> {
    use winnow::Parser;
    grammar::document
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}

/// Parse a single `key=value`, `key:value` or bare `key` string.
///
/// # Errors
///
/// Returns [`ParseError`] if the key is empty or the input spans several lines.
pub fn parse_pair(input: &str) -> Result<(String, String), ParseError> {
    use winnow::Parser;
    grammar::pair
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}
