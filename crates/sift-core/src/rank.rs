//! Candidate ranking: filter by the compiled patterns, compute sort keys,
//! order best first and cut out the requested page.

use crate::config::MatcherConfig;
use crate::levenshtein::edit_distance;
use crate::matcher::matches;
use crate::pattern::{PatternSet, compile};
use crate::score::fuzzy_score;
use crate::types::{RankOptions, RankResult, RankedCandidate, SortKey};
use rayon::prelude::*;
use sift_query::MatchingMethod;
use std::cmp::Ordering;
use tracing::Level;

/// Minimum candidate count before switching to parallel iteration with rayon.
/// Below this threshold, the overhead of thread pool dispatch outweighs the benefit.
pub const PAR_THRESHOLD: usize = 10_000;

/// Sort key for one candidate: the fuzzy score in fuzzy mode, the edit
/// distance between query and candidate otherwise.
#[inline]
pub fn sort_key(query: &str, candidate: &str, config: &MatcherConfig) -> SortKey {
    match config.method {
        MatchingMethod::Fuzzy => SortKey::Fuzzy(fuzzy_score(query, candidate, config.case_sensitive)),
        _ => SortKey::EditDistance(edit_distance(query, candidate, config.case_sensitive)),
    }
}

/// Rank `candidates` for `query`.
///
/// `patterns` should be the set compiled from `query` with `config`. A set
/// compiled for different settings is never evaluated, the query is
/// recompiled instead.
#[tracing::instrument(skip_all, level = Level::DEBUG, fields(candidates = candidates.len()))]
pub fn rank_candidates<'a, S>(
    candidates: &'a [S],
    query: &str,
    patterns: &PatternSet,
    config: &MatcherConfig,
    options: &RankOptions,
) -> RankResult<'a>
where
    S: AsRef<str> + Sync,
{
    let recompiled;
    let patterns = if patterns.is_compiled_for(config) {
        patterns
    } else {
        tracing::debug!(
            compiled_for = ?patterns.config(),
            ?config,
            "Pattern set is stale, recompiling"
        );
        recompiled = compile(query, config);
        &recompiled
    };

    let rank_one = |(index, candidate): (usize, &'a S)| -> Option<RankedCandidate<'a>> {
        let text = candidate.as_ref();
        if !matches(patterns, text) {
            return None;
        }

        let key = if options.sort {
            sort_key(query, text, config)
        } else {
            SortKey::Unsorted
        };

        Some(RankedCandidate { index, text, key })
    };

    // rayon's collect keeps the input order, results are identical either way
    let results: Vec<RankedCandidate<'a>> = if candidates.len() >= PAR_THRESHOLD {
        candidates.par_iter().enumerate().filter_map(rank_one).collect()
    } else {
        candidates.iter().enumerate().filter_map(rank_one).collect()
    };

    tracing::debug!(
        matched = results.len(),
        method = %config.method,
        sort = options.sort,
        "Ranked candidates"
    );

    sort_and_paginate(results, candidates.len(), options)
}

#[inline]
fn compare(a: &RankedCandidate<'_>, b: &RankedCandidate<'_>) -> Ordering {
    a.key.cmp(&b.key).then_with(|| a.index.cmp(&b.index))
}

/// Sorts matches by key (ascending, lower is better, ties by input position)
/// and returns the requested page.
fn sort_and_paginate<'a>(
    mut results: Vec<RankedCandidate<'a>>,
    total_candidates: usize,
    options: &RankOptions,
) -> RankResult<'a> {
    let total_matched = results.len();

    if total_matched == 0 {
        return RankResult {
            items: vec![],
            total_matched,
            total_candidates,
        };
    }

    let offset = options.pagination.offset;
    let limit = if options.pagination.limit > 0 {
        options.pagination.limit
    } else {
        total_matched
    };

    if offset >= total_matched {
        tracing::warn!(
            offset = offset,
            total_matched = total_matched,
            "Pagination: offset >= total_matched, returning empty"
        );

        return RankResult {
            items: vec![],
            total_matched,
            total_candidates,
        };
    }

    let items_needed = offset.saturating_add(limit).min(total_matched);

    if options.sort {
        // Use partial sort if we need less than half the results and dataset is large
        let use_partial_sort = items_needed < total_matched / 2 && total_matched > 100;
        if use_partial_sort {
            results.select_nth_unstable_by(items_needed - 1, compare);
            results.truncate(items_needed);
        }

        // select nth does not sort the results, we have to sort accordingly anyway
        glidesort::sort_by(&mut results, compare);
    }

    results.truncate(items_needed);
    results.drain(0..offset);

    RankResult {
        items: results,
        total_matched,
        total_candidates,
    }
}
