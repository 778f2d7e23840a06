use serde::{Deserialize, Serialize};

/// Which dimension of a template a comparison looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum MatchLocation {
    Name,
    ShortName,
    Language,
    Context,
    Baseline,
    Classification,
    Author,
    DefaultLanguage,
    OtherParameter,
}

/// How a single comparison came out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum MatchKind {
    Exact,
    /// Prefix or substring match on a name-like field, or a choice value
    /// matched by unique prefix.
    Partial,
    Mismatch,
    /// No criterion was supplied for this dimension. Not evidence either way.
    Unspecified,
    /// The supplied value is a prefix of two or more legal choice values.
    AmbiguousParameterValue,
    /// The supplied value matches no legal choice value, or names a
    /// parameter the template does not declare.
    InvalidParameterValue,
}

impl MatchKind {
    /// Ranking used when comparing name-match quality across template
    /// groups: Exact beats Partial beats everything else.
    pub(crate) fn name_rank(self) -> u8 {
        match self {
            MatchKind::Exact => 2,
            MatchKind::Partial => 1,
            MatchKind::Mismatch
            | MatchKind::Unspecified
            | MatchKind::AmbiguousParameterValue
            | MatchKind::InvalidParameterValue => 0,
        }
    }
}

/// One observation from comparing a template against the request: which
/// dimension was compared and how it came out. Parameter comparisons also
/// carry the raw supplied name and value for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchInfo {
    pub location: MatchLocation,
    pub kind: MatchKind,
    pub parameter_name: Option<String>,
    pub parameter_value: Option<String>,
}

impl MatchInfo {
    pub fn new(location: MatchLocation, kind: MatchKind) -> Self {
        Self {
            location,
            kind,
            parameter_name: None,
            parameter_value: None,
        }
    }

    pub fn parameter(kind: MatchKind, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            location: MatchLocation::OtherParameter,
            kind,
            parameter_name: Some(name.into()),
            parameter_value: Some(value.into()),
        }
    }
}
