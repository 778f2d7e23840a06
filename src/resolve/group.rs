use std::collections::HashMap;

use serde::Serialize;

use crate::matching::TemplateMatchInfo;

/// Matched template variants sharing one group identity. Never empty; a
/// template without a group identity forms a singleton group of its own.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateGroup<'a> {
    members: Vec<TemplateMatchInfo<'a>>,
}

impl<'a> TemplateGroup<'a> {
    pub fn members(&self) -> &[TemplateMatchInfo<'a>] {
        &self.members
    }

    pub fn group_identity(&self) -> Option<&str> {
        self.members[0]
            .template()
            .group_identity
            .as_deref()
            .filter(|identity| !identity.is_empty())
    }

    /// Best name-match quality any member achieved.
    pub(crate) fn name_match_rank(&self) -> u8 {
        self.members
            .iter()
            .map(|member| member.name_match_kind().name_rank())
            .max()
            .unwrap_or(0)
    }
}

#[derive(PartialEq, Eq, Hash)]
enum GroupKey {
    Shared(String),
    Solo(String),
}

/// Partition matches into groups, preserving corpus order for both groups
/// and members. Group identities compare case-insensitively.
pub(crate) fn group_matches(matches: Vec<TemplateMatchInfo<'_>>) -> Vec<TemplateGroup<'_>> {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<TemplateGroup<'_>> = Vec::new();

    for info in matches {
        let key = match &info.template().group_identity {
            Some(identity) if !identity.is_empty() => GroupKey::Shared(identity.to_lowercase()),
            _ => GroupKey::Solo(info.template().identity.to_lowercase()),
        };
        match index.get(&key) {
            Some(&position) => groups[position].members.push(info),
            None => {
                index.insert(key, groups.len());
                groups.push(TemplateGroup {
                    members: vec![info],
                });
            }
        }
    }

    groups
}

/// Outcome of trying to isolate one template group from the matched corpus.
#[derive(Debug, Serialize)]
pub enum UnambiguousGroupStatus<'a> {
    /// Nothing matched at all.
    NoMatch,
    /// Exactly one group survives, either because it was alone or because
    /// its name-match quality strictly beat every other group's.
    SingleMatch(TemplateGroup<'a>),
    /// Multiple groups tie on name-match quality.
    Ambiguous,
}

/// Decide whether exactly one group is usable. With multiple groups, a group
/// whose name match is strictly better than every other's (Exact beats
/// Partial beats none) wins; any tie at the top is ambiguity, never a guess.
pub(crate) fn find_unambiguous_group(
    groups: Vec<TemplateGroup<'_>>,
) -> UnambiguousGroupStatus<'_> {
    if groups.is_empty() {
        return UnambiguousGroupStatus::NoMatch;
    }
    if groups.len() == 1 {
        let mut groups = groups;
        return UnambiguousGroupStatus::SingleMatch(groups.remove(0));
    }

    let best_rank = groups
        .iter()
        .map(TemplateGroup::name_match_rank)
        .max()
        .unwrap_or(0);
    let mut at_best = groups
        .into_iter()
        .filter(|group| group.name_match_rank() == best_rank);
    match (at_best.next(), at_best.next()) {
        (Some(winner), None) => UnambiguousGroupStatus::SingleMatch(winner),
        _ => UnambiguousGroupStatus::Ambiguous,
    }
}
