use thiserror::Error;

/// A rule declaration that can never be evaluated.
///
/// Raised while turning a [`Declaration`](super::Declaration) into a
/// [`Rule`](super::Rule), before any property is looked up. It describes a
/// broken declaration, not an unmatched condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The name or value attribute of {} must be specified", describe(.condition))]
    MissingAttribute { condition: Option<String> },

    #[error("The name and value attributes of {} are exclusive", describe(.condition))]
    ConflictingAttributes { condition: Option<String> },
}

impl ValidationError {
    /// Label of the declaration that failed, if it carried one.
    #[must_use]
    pub fn condition(&self) -> Option<&str> {
        match self {
            Self::MissingAttribute { condition } | Self::ConflictingAttributes { condition } => {
                condition.as_deref()
            }
        }
    }
}

fn describe(condition: &Option<String>) -> String {
    match condition {
        Some(label) => format!("property condition '{label}'"),
        None => "the property condition".to_owned(),
    }
}
