//! The grouping and disambiguation engine.
//!
//! Resolution is a pure function of an immutable corpus snapshot, a request,
//! and the resolver options: no statics, no cross-request memory, safe to
//! run concurrently over the same snapshot. It either isolates one invokable
//! template or reports the most specific ambiguity it can prove; it never
//! guesses.

pub mod group;
pub mod invoke;
pub mod result;

pub use group::{TemplateGroup, UnambiguousGroupStatus};
pub use invoke::SingularInvokableStatus;
pub use result::{MismatchSummary, ResolutionResult, ResolutionStatus};

use tracing::debug;

use crate::corpus::Corpus;
use crate::matching::{self, TemplateMatchInfo};
use crate::request::ResolutionRequest;

/// Engine configuration passed explicitly into every call.
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    default_language: Option<String>,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a default language used as a soft tie-break when the
    /// request carries no explicit language criterion.
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }
}

/// Resolve one request against the corpus.
pub fn resolve<'a>(
    corpus: &'a Corpus,
    request: &ResolutionRequest,
    options: &ResolverOptions,
) -> ResolutionResult<'a> {
    let mut mismatches = MismatchSummary::default();
    let mut matched: Vec<TemplateMatchInfo<'a>> = Vec::new();

    for template in corpus.templates() {
        let evaluation = matching::evaluate(template, request, options);
        mismatches.record(&evaluation);
        if evaluation.is_match() {
            matched.push(evaluation);
        }
    }
    debug!(
        corpus = corpus.len(),
        candidates = matched.len(),
        "evaluated corpus against request"
    );

    let groups = group::group_matches(matched);
    debug!(groups = groups.len(), "formed template groups");

    let chosen = match group::find_unambiguous_group(groups) {
        UnambiguousGroupStatus::NoMatch => {
            return ResolutionResult::new(ResolutionStatus::NoMatch, None, None, mismatches);
        }
        UnambiguousGroupStatus::Ambiguous => {
            return ResolutionResult::new(
                ResolutionStatus::AmbiguousTemplateGroupChoice,
                None,
                None,
                mismatches,
            );
        }
        UnambiguousGroupStatus::SingleMatch(group) => group,
    };
    debug!(
        group = chosen.group_identity().unwrap_or("<solo>"),
        members = chosen.members().len(),
        "isolated unambiguous group"
    );

    let singular = invoke::find_singular_invokable(
        &chosen,
        request.language().is_some(),
        options.default_language().is_some(),
    );
    match singular {
        SingularInvokableStatus::SingleMatch(template) => {
            debug!(identity = %template.identity, "resolved singular invokable template");
            ResolutionResult::new(
                ResolutionStatus::SingleMatch,
                Some(chosen),
                Some(template),
                mismatches,
            )
        }
        SingularInvokableStatus::AmbiguousChoice => ResolutionResult::new(
            ResolutionStatus::AmbiguousParameterValueChoice,
            Some(chosen),
            None,
            mismatches,
        ),
        SingularInvokableStatus::AmbiguousPrecedence => ResolutionResult::new(
            ResolutionStatus::AmbiguousPrecedence,
            Some(chosen),
            None,
            mismatches,
        ),
        SingularInvokableStatus::NoMatch => {
            let invalid_parameters = chosen
                .members()
                .iter()
                .any(|member| !member.invalid_parameter_names().is_empty());
            let status = if invalid_parameters {
                ResolutionStatus::InvalidParameter
            } else {
                ResolutionStatus::NoMatch
            };
            ResolutionResult::new(status, Some(chosen), None, mismatches)
        }
    }
}
