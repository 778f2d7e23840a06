//! Listing queries over the same matching machinery.
//!
//! These back "list templates matching X" style output. They reuse the
//! per-template evaluator unchanged and never affect resolution semantics.

use crate::corpus::Corpus;
use crate::matching::{self, MatchKind, TemplateMatchInfo};
use crate::request::ResolutionRequest;
use crate::resolve::group::group_matches;
use crate::resolve::{ResolverOptions, TemplateGroup};

/// All templates that survive as partial matches, grouped in corpus order.
pub fn list_matches<'a>(
    corpus: &'a Corpus,
    request: &ResolutionRequest,
    options: &ResolverOptions,
) -> Vec<TemplateGroup<'a>> {
    let partial = corpus
        .templates()
        .iter()
        .map(|template| matching::evaluate(template, request, options))
        .filter(TemplateMatchInfo::is_partial_match)
        .collect();
    group_matches(partial)
}

/// Fully-matched templates whose name matched exactly, in corpus order.
pub fn exact_name_matches<'a>(
    corpus: &'a Corpus,
    request: &ResolutionRequest,
    options: &ResolverOptions,
) -> Vec<TemplateMatchInfo<'a>> {
    corpus
        .templates()
        .iter()
        .map(|template| matching::evaluate(template, request, options))
        .filter(|evaluation| {
            evaluation.is_match() && evaluation.name_match_kind() == MatchKind::Exact
        })
        .collect()
}
