//! Deterministic template selection and disambiguation.
//!
//! Given an immutable corpus of template descriptors and a user request (a
//! name fragment, per-dimension filters, raw parameter values), [`resolve`]
//! decides which single template should be invoked, or classifies precisely
//! why no single template can be: ambiguous name, ambiguous choice-value
//! prefix, tied precedence, or invalid parameters. Discovery, installation,
//! and instantiation of templates live elsewhere; this crate is the decision
//! in the middle.

pub mod corpus;
pub mod descriptor;
pub mod error;
pub mod matching;
pub mod query;
pub mod request;
pub mod resolve;

pub use corpus::Corpus;
pub use descriptor::{ChoiceValue, TemplateDescriptor, TemplateParameter, TemplateTags};
pub use error::{Result, TenonError};
pub use matching::{MatchInfo, MatchKind, MatchLocation, TemplateMatchInfo};
pub use resolve::{resolve, ResolutionResult, ResolutionStatus, ResolverOptions, TemplateGroup};
pub use request::ResolutionRequest;
