mod declaration;
mod error;
mod evaluation_result;
mod properties;
mod rule;
mod source;

pub use declaration::Declaration;
pub use error::ValidationError;
pub use evaluation_result::{EvaluationResult, KeyOutcome};
pub use properties::Properties;
pub use rule::{Rule, SEPARATOR};
pub use source::{CaseFolding, FnSource, PropertySource, from_fn};
