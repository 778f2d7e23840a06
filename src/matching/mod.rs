pub mod aggregate;
pub mod filters;
pub mod info;
pub mod parameters;

pub use aggregate::TemplateMatchInfo;
pub use info::{MatchInfo, MatchKind, MatchLocation};

use crate::descriptor::TemplateDescriptor;
use crate::request::ResolutionRequest;
use crate::resolve::ResolverOptions;

/// Run every filter and the parameter matcher against one template,
/// producing its full observation list.
///
/// The default-language probe only runs when the request carries no explicit
/// language: an explicit criterion, matching or not, always outranks the
/// configured default.
pub fn evaluate<'a>(
    template: &'a TemplateDescriptor,
    request: &ResolutionRequest,
    options: &ResolverOptions,
) -> TemplateMatchInfo<'a> {
    let mut aggregate = TemplateMatchInfo::new(template);

    let filter_results = [
        filters::match_name(template, request.name()),
        filters::match_language(template, request.language()),
        filters::match_context(template, request.context()),
        filters::match_baseline(template, request.baseline()),
        filters::match_classification(template, request.classification()),
        filters::match_author(template, request.author()),
    ];
    for info in filter_results.into_iter().flatten() {
        aggregate.push(info);
    }

    if request.language().is_none() {
        if let Some(info) = filters::match_default_language(template, options.default_language()) {
            aggregate.push(info);
        }
    }

    for info in parameters::match_parameters(template, request.parameters()) {
        aggregate.push(info);
    }

    aggregate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ChoiceValue, TemplateParameter};

    fn template() -> TemplateDescriptor {
        TemplateDescriptor::new("Console.CSharp", "Console App")
            .with_short_name("console")
            .with_language("C#")
            .with_parameter(TemplateParameter::choice(
                "Framework",
                [ChoiceValue::new("net8.0"), ChoiceValue::new("net9.0")],
            ))
    }

    #[test]
    fn evaluate_combines_filters_and_parameters() {
        let template = template();
        let request = ResolutionRequest::new()
            .with_name("console")
            .with_language("c#")
            .with_parameter("Framework", "net8.0");
        let aggregate = evaluate(&template, &request, &ResolverOptions::new());

        assert!(aggregate.is_invokable_match());
        assert_eq!(aggregate.matches().len(), 3);
        assert_eq!(aggregate.name_match_kind(), MatchKind::Exact);
    }

    #[test]
    fn explicit_language_suppresses_default_language_probe() {
        let template = template();
        let options = ResolverOptions::new().with_default_language("C#");

        let explicit = ResolutionRequest::new().with_name("console").with_language("F#");
        let aggregate = evaluate(&template, &explicit, &options);
        assert!(aggregate
            .matches()
            .iter()
            .all(|m| m.location != MatchLocation::DefaultLanguage));
        // the explicit criterion mismatches instead of falling back
        assert!(!aggregate.is_match());

        let implicit = ResolutionRequest::new().with_name("console");
        let aggregate = evaluate(&template, &implicit, &options);
        assert!(aggregate
            .matches()
            .iter()
            .any(|m| m.location == MatchLocation::DefaultLanguage));
    }
}
