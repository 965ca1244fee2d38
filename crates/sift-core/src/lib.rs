//! sift-core - matching and ranking core of the launcher
//!
//! This crate decides which launcher entries match the typed query and in
//! which order they are shown:
//!
//! - [`pattern::compile`] turns the query into one matcher per token
//!   (plain, glob, regex or fuzzy, see [`MatchingMethod`])
//! - [`matcher::matches`] / [`matcher::highlight_spans`] evaluate them
//! - [`score::fuzzy_score`] and [`levenshtein::edit_distance`] produce sort
//!   keys, lower is better for both
//! - [`rank::rank_candidates`] puts everything together for a batch
//!
//! Nothing in the matching path allocates per comparison beyond small
//! stack buffers, blocks, or fails: broken regexes fall back to literal
//! matching and oversized inputs get the documented sentinel values
//! ([`score::NO_MATCH_SCORE`], [`levenshtein::EDIT_DISTANCE_TOO_LONG`]).

pub mod char_class;
pub mod config;
mod error;
pub mod levenshtein;
pub mod log;
pub mod matcher;
pub mod pattern;
pub mod rank;
pub mod score;
pub mod state;
pub mod types;

// Re-export main types for convenience
pub use config::MatcherConfig;
pub use error::{Error, Result};
pub use levenshtein::{EDIT_DISTANCE_TOO_LONG, edit_distance};
pub use matcher::{Highlight, HighlightStyle, HighlightTheme, Rgba, highlight_spans, highlights, matches};
pub use pattern::{CompiledPattern, PatternOrigin, PatternSet, compile};
pub use rank::rank_candidates;
pub use score::{NO_MATCH_SCORE, fuzzy_score};
pub use state::SharedPatterns;
pub use types::{PaginationArgs, RankOptions, RankResult, RankedCandidate, SortKey};

// Re-export query parser types
pub use sift_query::{MatchingMethod, ParsedQuery, QueryParser};
