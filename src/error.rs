use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TenonError>;

/// Errors raised while validating a template corpus.
///
/// Resolution itself never fails: every request maps to a
/// [`ResolutionStatus`](crate::resolve::ResolutionStatus). These errors only
/// surface when a caller hands us a corpus snapshot that is malformed.
#[derive(Debug, Error, Diagnostic)]
pub enum TenonError {
    #[error("Template '{name}' has an empty identity")]
    #[diagnostic(help("Every template must carry a stable, non-empty identity string"))]
    EmptyIdentity { name: String },

    #[error("Template '{identity}' has an empty display name")]
    EmptyName { identity: String },

    #[error("Duplicate template identity: {identity}")]
    #[diagnostic(help("Identities are compared case-insensitively and must be unique across the corpus"))]
    DuplicateIdentity { identity: String },

    #[error("Choice parameter '{parameter}' on template '{identity}' declares no values")]
    #[diagnostic(help("A choice parameter must enumerate at least one legal value"))]
    EmptyChoiceSet { identity: String, parameter: String },

    #[error("Duplicate parameter '{parameter}' on template '{identity}'")]
    #[diagnostic(help("Parameter names are matched case-insensitively and must be unique per template"))]
    DuplicateParameter { identity: String, parameter: String },
}
