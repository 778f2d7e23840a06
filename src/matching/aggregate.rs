use serde::Serialize;

use crate::descriptor::TemplateDescriptor;
use crate::matching::info::{MatchInfo, MatchKind, MatchLocation};

/// One template bound to every observation made about it during evaluation.
///
/// The entry list is append-only while the evaluator runs and frozen once it
/// returns. All predicates are pure scans of the list; nothing is cached, so
/// they can never go stale against it.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateMatchInfo<'a> {
    template: &'a TemplateDescriptor,
    matches: Vec<MatchInfo>,
}

impl<'a> TemplateMatchInfo<'a> {
    pub(crate) fn new(template: &'a TemplateDescriptor) -> Self {
        Self {
            template,
            matches: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, info: MatchInfo) {
        self.matches.push(info);
    }

    pub fn template(&self) -> &'a TemplateDescriptor {
        self.template
    }

    pub fn matches(&self) -> &[MatchInfo] {
        &self.matches
    }

    /// At least one observation, and none of them a mismatch.
    pub fn is_match(&self) -> bool {
        !self.matches.is_empty() && !self.matches.iter().any(|m| m.kind == MatchKind::Mismatch)
    }

    /// A template survives as a partial match unless it is cleanly
    /// disqualified by the context filter: either some dimension matched, or
    /// every context observation (vacuously, if there are none) was exact.
    pub fn is_partial_match(&self) -> bool {
        self.matches.iter().any(|m| m.kind != MatchKind::Mismatch)
            || self
                .matches
                .iter()
                .filter(|m| m.location == MatchLocation::Context)
                .all(|m| m.kind == MatchKind::Exact)
    }

    /// A match whose every supplied parameter resolved cleanly. Ambiguous or
    /// invalid parameter values make a template matchable but not invokable.
    pub fn is_invokable_match(&self) -> bool {
        self.is_match()
            && !self.matches.iter().any(|m| {
                m.location == MatchLocation::OtherParameter
                    && matches!(
                        m.kind,
                        MatchKind::InvalidParameterValue | MatchKind::AmbiguousParameterValue
                    )
            })
    }

    pub fn has_ambiguous_parameter_value_match(&self) -> bool {
        self.matches.iter().any(|m| {
            m.location == MatchLocation::OtherParameter
                && m.kind == MatchKind::AmbiguousParameterValue
        })
    }

    /// Distinct raw names of supplied parameters this template rejected, in
    /// first-seen order.
    pub fn invalid_parameter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for info in &self.matches {
            if info.location == MatchLocation::OtherParameter
                && info.kind == MatchKind::InvalidParameterValue
            {
                if let Some(name) = &info.parameter_name {
                    if !names.contains(name) {
                        names.push(name.clone());
                    }
                }
            }
        }
        names
    }

    /// Best observation among name-like entries; [`MatchKind::Unspecified`]
    /// when the request carried no name criterion at all.
    pub fn name_match_kind(&self) -> MatchKind {
        let mut best = MatchKind::Unspecified;
        for info in &self.matches {
            if matches!(
                info.location,
                MatchLocation::Name | MatchLocation::ShortName
            ) && info.kind.name_rank() > best.name_rank()
            {
                best = info.kind;
            }
        }
        best
    }
}
