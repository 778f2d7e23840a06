//! Pure per-dimension filter functions.
//!
//! Each filter takes a template and an optional user criterion and returns at
//! most one [`MatchInfo`]. No criterion means no observation: an unfiltered
//! dimension is not evidence for or against a template. A supplied criterion
//! against an absent tag is a mismatch; a template that never declared a
//! context cannot satisfy `--type project`.

use crate::descriptor::TemplateDescriptor;
use crate::matching::info::{MatchInfo, MatchKind, MatchLocation};

/// Lowercase the criterion, treating `None` and `""` as "not supplied".
fn normalized(criterion: Option<&str>) -> Option<String> {
    criterion
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

/// Compare the name fragment against the template's name and short names.
///
/// Exact equality wins over substring containment, and the display name wins
/// over short names at equal strength.
pub fn match_name(template: &TemplateDescriptor, criterion: Option<&str>) -> Option<MatchInfo> {
    let needle = normalized(criterion)?;
    let name = template.name.to_lowercase();

    if name == needle {
        return Some(MatchInfo::new(MatchLocation::Name, MatchKind::Exact));
    }
    if template
        .short_names
        .iter()
        .any(|short| short.to_lowercase() == needle)
    {
        return Some(MatchInfo::new(MatchLocation::ShortName, MatchKind::Exact));
    }
    if name.contains(&needle) {
        return Some(MatchInfo::new(MatchLocation::Name, MatchKind::Partial));
    }
    if template
        .short_names
        .iter()
        .any(|short| short.to_lowercase().contains(&needle))
    {
        return Some(MatchInfo::new(MatchLocation::ShortName, MatchKind::Partial));
    }
    Some(MatchInfo::new(MatchLocation::Name, MatchKind::Mismatch))
}

pub fn match_language(template: &TemplateDescriptor, criterion: Option<&str>) -> Option<MatchInfo> {
    match_single_tag(
        MatchLocation::Language,
        template.tags.language.as_deref(),
        criterion,
    )
}

pub fn match_context(template: &TemplateDescriptor, criterion: Option<&str>) -> Option<MatchInfo> {
    match_single_tag(
        MatchLocation::Context,
        template.tags.context.as_deref(),
        criterion,
    )
}

pub fn match_author(template: &TemplateDescriptor, criterion: Option<&str>) -> Option<MatchInfo> {
    match_single_tag(
        MatchLocation::Author,
        template.tags.author.as_deref(),
        criterion,
    )
}

/// Baselines: exact equality to any declared baseline beats substring
/// containment in any of them.
pub fn match_baseline(template: &TemplateDescriptor, criterion: Option<&str>) -> Option<MatchInfo> {
    let needle = normalized(criterion)?;
    let baselines = &template.tags.baselines;

    if baselines.iter().any(|b| b.to_lowercase() == needle) {
        return Some(MatchInfo::new(MatchLocation::Baseline, MatchKind::Exact));
    }
    if baselines.iter().any(|b| b.to_lowercase().contains(&needle)) {
        return Some(MatchInfo::new(MatchLocation::Baseline, MatchKind::Partial));
    }
    Some(MatchInfo::new(MatchLocation::Baseline, MatchKind::Mismatch))
}

/// Classifications match only on full equality with one list entry; there is
/// no partial classification match.
pub fn match_classification(
    template: &TemplateDescriptor,
    criterion: Option<&str>,
) -> Option<MatchInfo> {
    let needle = normalized(criterion)?;
    let kind = if template
        .tags
        .classifications
        .iter()
        .any(|c| c.to_lowercase() == needle)
    {
        MatchKind::Exact
    } else {
        MatchKind::Mismatch
    };
    Some(MatchInfo::new(MatchLocation::Classification, kind))
}

/// Probe the configured default language. Only meaningful when the user
/// supplied no explicit language; a template that matches the default gets a
/// soft preference marker, a template that does not gets nothing. Never a
/// mismatch.
pub fn match_default_language(
    template: &TemplateDescriptor,
    default_language: Option<&str>,
) -> Option<MatchInfo> {
    let needle = normalized(default_language)?;
    let language = template.tags.language.as_deref()?;
    if language.to_lowercase() == needle {
        Some(MatchInfo::new(
            MatchLocation::DefaultLanguage,
            MatchKind::Exact,
        ))
    } else {
        None
    }
}

fn match_single_tag(
    location: MatchLocation,
    tag: Option<&str>,
    criterion: Option<&str>,
) -> Option<MatchInfo> {
    let needle = normalized(criterion)?;
    let Some(tag) = tag else {
        return Some(MatchInfo::new(location, MatchKind::Mismatch));
    };
    let tag = tag.to_lowercase();
    let kind = if tag == needle {
        MatchKind::Exact
    } else if tag.contains(&needle) {
        MatchKind::Partial
    } else {
        MatchKind::Mismatch
    };
    Some(MatchInfo::new(location, kind))
}
