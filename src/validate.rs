use tracing::debug;

use crate::{Declaration, Rule, ValidationError};

/// Build a [`Rule`] from the two key channels alone, with default policies.
///
/// Exactly one of `raw_name` and `raw_value` must list keys.
///
/// # Errors
///
/// Returns [`ValidationError::MissingAttribute`] if both are empty and
/// [`ValidationError::ConflictingAttributes`] if both are non-empty.
pub fn validate<N, V>(raw_name: N, raw_value: V) -> Result<Rule, ValidationError>
where
    N: IntoIterator,
    N::Item: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    Declaration::new()
        .names(raw_name)
        .values(raw_value)
        .validate()
}

pub(crate) fn validate_declaration(decl: Declaration) -> Result<Rule, ValidationError> {
    let names = select_names(decl.name, decl.value, decl.label.as_deref())?;
    let rule = Rule::new(
        decl.label,
        &decl.prefix,
        names,
        decl.having_value,
        decl.match_if_missing,
        decl.relaxed_names,
    );
    debug!(rule = %rule, "validated property condition");
    Ok(rule)
}

fn select_names(
    name: Vec<String>,
    value: Vec<String>,
    label: Option<&str>,
) -> Result<Vec<String>, ValidationError> {
    match (name.is_empty(), value.is_empty()) {
        (false, false) => Err(ValidationError::ConflictingAttributes {
            condition: label.map(str::to_owned),
        }),
        (true, true) => Err(ValidationError::MissingAttribute {
            condition: label.map(str::to_owned),
        }),
        (false, true) => Ok(name),
        (true, false) => Ok(value),
    }
}
