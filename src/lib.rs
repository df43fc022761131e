mod error;
mod evaluate;
pub mod parse;
mod relaxed;
mod types;
mod validate;

pub use error::OnPropError;
pub use relaxed::RelaxedNames;
pub use types::{
    CaseFolding, Declaration, EvaluationResult, FnSource, KeyOutcome, Properties, PropertySource,
    Rule, SEPARATOR, ValidationError, from_fn,
};
pub use validate::validate;
