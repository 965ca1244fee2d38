/// Sort key of a ranked candidate. Both scorers follow the same convention:
/// lower is better.
///
/// Keys of different kinds never meet within one ranking. If they are
/// compared anyway the variant decides first (declaration order), then the
/// value, so the order agrees with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    /// Ranking disabled, candidates keep their input order.
    Unsorted,
    /// [`crate::score::fuzzy_score`] of the query against the candidate.
    Fuzzy(i32),
    /// [`crate::levenshtein::edit_distance`] between the query and the candidate.
    EditDistance(u32),
}

impl SortKey {
    #[inline]
    pub fn value(&self) -> i64 {
        match *self {
            SortKey::Unsorted => 0,
            SortKey::Fuzzy(score) => i64::from(score),
            SortKey::EditDistance(distance) => i64::from(distance),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate<'a> {
    /// Position of the candidate in the input slice
    pub index: usize,
    pub text: &'a str,
    pub key: SortKey,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationArgs {
    pub offset: usize,
    /// `0` returns everything after `offset`
    pub limit: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct RankOptions {
    /// Order matches by score. When unset matches keep their input order.
    pub sort: bool,
    pub pagination: PaginationArgs,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            sort: true,
            pagination: PaginationArgs::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RankResult<'a> {
    /// The requested page, best first
    pub items: Vec<RankedCandidate<'a>>,
    /// Number of candidates accepted by the patterns
    pub total_matched: usize,
    pub total_candidates: usize,
}
