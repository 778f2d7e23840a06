//! Evaluation of user-supplied parameters against a template's declarations.
//!
//! The prefix rule is the usability core of the whole engine: `--framework
//! net` should resolve against `net8.0` without the user typing the exact
//! string, and an ambiguous prefix must surface as ambiguity rather than
//! silently picking the first hit.

use crate::descriptor::{TemplateDescriptor, TemplateParameter};
use crate::matching::info::{MatchInfo, MatchKind};

/// Evaluate every supplied parameter against one template, producing one
/// [`MatchInfo`] per pair. Parameters the user did not supply contribute
/// nothing.
pub fn match_parameters(
    template: &TemplateDescriptor,
    supplied: impl Iterator<Item = (impl AsRef<str>, impl AsRef<str>)>,
) -> Vec<MatchInfo> {
    supplied
        .map(|(name, value)| match_one(template, name.as_ref(), value.as_ref()))
        .collect()
}

fn match_one(template: &TemplateDescriptor, name: &str, value: &str) -> MatchInfo {
    let Some(parameter) = template.find_parameter(name) else {
        // Unknown parameter for this template. Carries the raw name so the
        // caller can report it.
        return MatchInfo::parameter(MatchKind::InvalidParameterValue, name, value);
    };
    MatchInfo::parameter(value_kind(parameter, value), name, value)
}

fn value_kind(parameter: &TemplateParameter, value: &str) -> MatchKind {
    let Some(choices) = &parameter.choices else {
        // Free-form parameters accept anything here; the instantiation layer
        // validates actual values.
        return MatchKind::Exact;
    };

    let needle = value.to_lowercase();
    if needle.is_empty() {
        return MatchKind::InvalidParameterValue;
    }
    if choices.iter().any(|c| c.value.to_lowercase() == needle) {
        return MatchKind::Exact;
    }

    let prefixed = choices
        .iter()
        .filter(|c| c.value.to_lowercase().starts_with(&needle))
        .count();
    match prefixed {
        0 => MatchKind::InvalidParameterValue,
        1 => MatchKind::Partial,
        _ => MatchKind::AmbiguousParameterValue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ChoiceValue;
    use crate::matching::info::MatchLocation;

    fn framework_template() -> TemplateDescriptor {
        TemplateDescriptor::new("Console.CSharp", "Console App")
            .with_parameter(TemplateParameter::choice(
                "Framework",
                [
                    ChoiceValue::new("net8.0"),
                    ChoiceValue::new("net9.0"),
                    ChoiceValue::new("netstandard2.1"),
                ],
            ))
            .with_parameter(TemplateParameter::free_form("Authors"))
    }

    fn kind_for(value: &str) -> MatchKind {
        let infos = match_parameters(&framework_template(), [("Framework", value)].into_iter());
        infos[0].kind
    }

    #[test]
    fn unknown_parameter_is_invalid_and_keeps_raw_name() {
        let infos = match_parameters(&framework_template(), [("Platform", "x64")].into_iter());
        assert_eq!(infos[0].location, MatchLocation::OtherParameter);
        assert_eq!(infos[0].kind, MatchKind::InvalidParameterValue);
        assert_eq!(infos[0].parameter_name.as_deref(), Some("Platform"));
    }

    #[test]
    fn free_form_accepts_any_value() {
        let infos = match_parameters(&framework_template(), [("authors", "anyone")].into_iter());
        assert_eq!(infos[0].kind, MatchKind::Exact);
    }

    #[test]
    fn exact_choice_value_is_exact() {
        assert_eq!(kind_for("NET8.0"), MatchKind::Exact);
    }

    #[test]
    fn unique_prefix_is_partial_never_ambiguous() {
        assert_eq!(kind_for("netsta"), MatchKind::Partial);
    }

    #[test]
    fn shared_prefix_is_ambiguous_never_exact() {
        assert_eq!(kind_for("net"), MatchKind::AmbiguousParameterValue);
        assert_eq!(kind_for("net9"), MatchKind::Partial);
    }

    #[test]
    fn prefix_of_nothing_is_invalid() {
        assert_eq!(kind_for("dnx"), MatchKind::InvalidParameterValue);
    }

    #[test]
    fn empty_value_on_choice_parameter_is_invalid() {
        assert_eq!(kind_for(""), MatchKind::InvalidParameterValue);
    }

    #[test]
    fn unsupplied_parameters_contribute_nothing() {
        let infos =
            match_parameters(&framework_template(), std::iter::empty::<(&str, &str)>());
        assert!(infos.is_empty());
    }
}
