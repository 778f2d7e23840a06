use std::collections::BTreeMap;

use serde::Serialize;

use crate::descriptor::TemplateDescriptor;
use crate::matching::{MatchKind, MatchLocation, TemplateMatchInfo};
use crate::resolve::group::TemplateGroup;

/// Overall outcome of one resolution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResolutionStatus {
    /// Nothing matched, or nothing that matched survived as invokable.
    NoMatch,
    SingleMatch,
    /// The name criterion could not isolate one template group.
    AmbiguousTemplateGroupChoice,
    /// A choice parameter's value was a prefix of multiple legal values.
    AmbiguousParameterValueChoice,
    /// Multiple equally-precedent candidates after all tie-breaks.
    AmbiguousPrecedence,
    /// A supplied parameter name or value was rejected by every remaining
    /// candidate.
    InvalidParameter,
}

/// Which dimensions mismatched anywhere in the corpus. Purely diagnostic,
/// for "why nothing matched" explanations; resolution never reads it back.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MismatchSummary {
    pub language: bool,
    pub context: bool,
    pub baseline: bool,
    pub classification: bool,
    pub author: bool,
}

impl MismatchSummary {
    pub(crate) fn record(&mut self, evaluation: &TemplateMatchInfo<'_>) {
        for info in evaluation.matches() {
            if info.kind != MatchKind::Mismatch {
                continue;
            }
            match info.location {
                MatchLocation::Language => self.language = true,
                MatchLocation::Context => self.context = true,
                MatchLocation::Baseline => self.baseline = true,
                MatchLocation::Classification => self.classification = true,
                MatchLocation::Author => self.author = true,
                MatchLocation::Name
                | MatchLocation::ShortName
                | MatchLocation::DefaultLanguage
                | MatchLocation::OtherParameter => {}
            }
        }
    }

    pub fn any(&self) -> bool {
        self.language || self.context || self.baseline || self.classification || self.author
    }
}

/// The outward-facing report for one request: status, the chosen group and
/// template when resolution got that far, and diagnostics for rendering.
/// Built once per call, immutable afterwards.
#[derive(Debug, Serialize)]
pub struct ResolutionResult<'a> {
    status: ResolutionStatus,
    unambiguous_group: Option<TemplateGroup<'a>>,
    template: Option<&'a TemplateDescriptor>,
    mismatches: MismatchSummary,
}

impl<'a> ResolutionResult<'a> {
    pub(crate) fn new(
        status: ResolutionStatus,
        unambiguous_group: Option<TemplateGroup<'a>>,
        template: Option<&'a TemplateDescriptor>,
        mismatches: MismatchSummary,
    ) -> Self {
        Self {
            status,
            unambiguous_group,
            template,
            mismatches,
        }
    }

    pub fn status(&self) -> ResolutionStatus {
        self.status
    }

    /// The group resolution settled on, when the name criterion isolated one.
    pub fn unambiguous_group(&self) -> Option<&TemplateGroup<'a>> {
        self.unambiguous_group.as_ref()
    }

    /// The singular invokable template, present exactly when the status is
    /// [`ResolutionStatus::SingleMatch`].
    pub fn template(&self) -> Option<&'a TemplateDescriptor> {
        self.template
    }

    pub fn mismatches(&self) -> &MismatchSummary {
        &self.mismatches
    }

    /// Rejected parameter names per group member, keyed by template
    /// identity. Empty when no group was chosen or nothing was rejected.
    pub fn invalid_parameters(&self) -> BTreeMap<&str, Vec<String>> {
        let mut by_template = BTreeMap::new();
        if let Some(group) = &self.unambiguous_group {
            for member in group.members() {
                let names = member.invalid_parameter_names();
                if !names.is_empty() {
                    by_template.insert(member.template().identity.as_str(), names);
                }
            }
        }
        by_template
    }
}
