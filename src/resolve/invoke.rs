use serde::Serialize;

use crate::descriptor::TemplateDescriptor;
use crate::matching::{MatchKind, MatchLocation, TemplateMatchInfo};
use crate::resolve::group::TemplateGroup;

/// Outcome of picking the one invokable variant inside the chosen group.
#[derive(Debug, Serialize)]
pub enum SingularInvokableStatus<'a> {
    /// No member of the group survived as invokable.
    NoMatch,
    SingleMatch(&'a TemplateDescriptor),
    /// Some member saw an ambiguous choice-parameter prefix; the user must
    /// disambiguate the value before any tie-break applies.
    AmbiguousChoice,
    /// Multiple members tied at the maximum precedence.
    AmbiguousPrecedence,
}

/// Pick the single invokable template variant within a group, applying the
/// soft language preference and then the precedence tie-break.
///
/// The ambiguous-value check deliberately runs over the whole group before
/// non-invokable members are discarded: an ambiguous prefix anywhere must go
/// back to the user, never be outvoted by a sibling's precedence.
pub(crate) fn find_singular_invokable<'a>(
    group: &TemplateGroup<'a>,
    explicit_language: bool,
    default_language_configured: bool,
) -> SingularInvokableStatus<'a> {
    if group
        .members()
        .iter()
        .any(TemplateMatchInfo::has_ambiguous_parameter_value_match)
    {
        return SingularInvokableStatus::AmbiguousChoice;
    }

    let mut candidates: Vec<&TemplateMatchInfo<'a>> = group
        .members()
        .iter()
        .filter(|member| member.is_invokable_match())
        .collect();
    if candidates.is_empty() {
        return SingularInvokableStatus::NoMatch;
    }

    if explicit_language {
        prefer(&mut candidates, |member| {
            has_kind_at(member, MatchLocation::Language, MatchKind::Exact)
        });
    } else if default_language_configured {
        prefer(&mut candidates, |member| {
            has_kind_at(member, MatchLocation::DefaultLanguage, MatchKind::Exact)
        });
    }

    let Some(max_precedence) = candidates
        .iter()
        .map(|member| member.template().precedence)
        .max()
    else {
        return SingularInvokableStatus::NoMatch;
    };
    candidates.retain(|member| member.template().precedence == max_precedence);

    match candidates.as_slice() {
        [winner] => SingularInvokableStatus::SingleMatch(winner.template()),
        _ => SingularInvokableStatus::AmbiguousPrecedence,
    }
}

/// Keep only candidates satisfying the predicate, unless that would empty
/// the set. The language preference breaks ties; it never disqualifies.
fn prefer<'a, 'b, F>(candidates: &mut Vec<&'b TemplateMatchInfo<'a>>, predicate: F)
where
    F: Fn(&TemplateMatchInfo<'a>) -> bool,
{
    if candidates.iter().any(|member| predicate(member)) {
        candidates.retain(|member| predicate(member));
    }
}

fn has_kind_at(member: &TemplateMatchInfo<'_>, location: MatchLocation, kind: MatchKind) -> bool {
    member
        .matches()
        .iter()
        .any(|m| m.location == location && m.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ChoiceValue, TemplateParameter};
    use crate::matching::evaluate;
    use crate::request::ResolutionRequest;
    use crate::resolve::group::{find_unambiguous_group, group_matches, UnambiguousGroupStatus};
    use crate::resolve::ResolverOptions;

    fn single_group<'a>(
        templates: &'a [TemplateDescriptor],
        request: &ResolutionRequest,
        options: &ResolverOptions,
    ) -> TemplateGroup<'a> {
        let matched = templates
            .iter()
            .map(|t| evaluate(t, request, options))
            .filter(TemplateMatchInfo::is_match)
            .collect();
        match find_unambiguous_group(group_matches(matched)) {
            UnambiguousGroupStatus::SingleMatch(group) => group,
            other => panic!("expected a single group, got {other:?}"),
        }
    }

    #[test]
    fn highest_precedence_wins_within_group() {
        let templates = vec![
            TemplateDescriptor::new("Foo.CSharp", "Foo")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_precedence(100),
            TemplateDescriptor::new("Foo.FSharp", "Foo F#")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_precedence(200),
        ];
        let request = ResolutionRequest::new().with_name("foo");
        let group = single_group(&templates, &request, &ResolverOptions::new());

        let status = find_singular_invokable(&group, false, false);
        let SingularInvokableStatus::SingleMatch(template) = status else {
            panic!("expected a single match, got {status:?}");
        };
        assert_eq!(template.identity, "Foo.FSharp");
    }

    #[test]
    fn equal_precedence_is_ambiguous() {
        let templates = vec![
            TemplateDescriptor::new("Foo.CSharp", "Foo")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_precedence(100),
            TemplateDescriptor::new("Foo.FSharp", "Foo F#")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_precedence(100),
        ];
        let request = ResolutionRequest::new().with_name("foo");
        let group = single_group(&templates, &request, &ResolverOptions::new());
        assert!(matches!(
            find_singular_invokable(&group, false, false),
            SingularInvokableStatus::AmbiguousPrecedence
        ));
    }

    #[test]
    fn ambiguous_choice_anywhere_in_group_is_not_outvoted_by_precedence() {
        let templates = vec![
            TemplateDescriptor::new("Foo.One", "Foo One")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_precedence(500)
                .with_parameter(TemplateParameter::choice(
                    "MyChoice",
                    [ChoiceValue::new("value_1")],
                )),
            TemplateDescriptor::new("Foo.Two", "Foo Two")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_precedence(100)
                .with_parameter(TemplateParameter::choice(
                    "MyChoice",
                    [ChoiceValue::new("value_2"), ChoiceValue::new("value_3")],
                )),
        ];
        let request = ResolutionRequest::new()
            .with_name("foo")
            .with_parameter("MyChoice", "value_");
        let group = single_group(&templates, &request, &ResolverOptions::new());
        assert!(matches!(
            find_singular_invokable(&group, false, false),
            SingularInvokableStatus::AmbiguousChoice
        ));
    }

    #[test]
    fn default_language_breaks_ties_without_disqualifying() {
        let templates = vec![
            TemplateDescriptor::new("Foo.CSharp", "Foo")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_language("C#"),
            TemplateDescriptor::new("Foo.FSharp", "Foo F#")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_language("F#"),
        ];
        let request = ResolutionRequest::new().with_name("foo");
        let options = ResolverOptions::new().with_default_language("C#");
        let group = single_group(&templates, &request, &options);

        let status = find_singular_invokable(&group, false, true);
        let SingularInvokableStatus::SingleMatch(template) = status else {
            panic!("expected a single match, got {status:?}");
        };
        assert_eq!(template.identity, "Foo.CSharp");
    }

    #[test]
    fn default_language_matching_nothing_keeps_all_candidates() {
        let templates = vec![
            TemplateDescriptor::new("Foo.VB", "Foo VB")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_language("VB")
                .with_precedence(200),
            TemplateDescriptor::new("Foo.FSharp", "Foo F#")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_language("F#")
                .with_precedence(100),
        ];
        let request = ResolutionRequest::new().with_name("foo");
        let options = ResolverOptions::new().with_default_language("C#");
        let group = single_group(&templates, &request, &options);

        let status = find_singular_invokable(&group, false, true);
        let SingularInvokableStatus::SingleMatch(template) = status else {
            panic!("expected precedence to decide, got {status:?}");
        };
        assert_eq!(template.identity, "Foo.VB");
    }

    #[test]
    fn explicit_language_prefers_exact_language_members() {
        let templates = vec![
            TemplateDescriptor::new("Foo.CSharp", "Foo")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_language("C#")
                .with_precedence(200),
            TemplateDescriptor::new("Foo.FSharp", "Foo F#")
                .with_short_name("foo")
                .with_group_identity("foo.group")
                .with_language("F#")
                .with_precedence(100),
        ];
        let request = ResolutionRequest::new().with_name("foo").with_language("F#");
        let group = single_group(&templates, &request, &ResolverOptions::new());

        // Foo.CSharp mismatches the explicit language and never reaches the
        // group, so preference and precedence both land on Foo.FSharp.
        let status = find_singular_invokable(&group, true, false);
        let SingularInvokableStatus::SingleMatch(template) = status else {
            panic!("expected a single match, got {status:?}");
        };
        assert_eq!(template.identity, "Foo.FSharp");
    }
}
