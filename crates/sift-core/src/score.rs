//! fzf-like alignment scorer.
//!
//! [`fuzzy_score`] runs a global sequence alignment of the pattern against the
//! candidate and returns the best accumulated value, negated. The result is a
//! sort key: **lower is better**, exactly like an edit distance, so both
//! rankers can share the same ascending sort.
//!
//! Scoring criteria:
//! - matches at the start of a word, or of a subword in `CamelCase` /
//!   `camel123` words, get [`WORD_START_SCORE`] / [`CAMEL_SCORE`]
//! - non-word characters in the candidate matter, see [`NON_WORD_SCORE`]
//! - the first character of every word of the pattern counts double
//! - superfluous candidate characters cost [`GAP_SCORE`] each, characters
//!   before the first match cost [`LEADING_GAP_SCORE`]
//!
//! Recurrence (`score[j]` is the boundary bonus of candidate position `j`):
//!
//! ```text
//! dp[0][j] = LEADING_GAP_SCORE * j + score[j] * mult
//! dp[i][j] = max(dp[i-1][j-1] + CONSECUTIVE_SCORE,
//!                max(dp[i-1][k] + GAP_SCORE * (j-1-k) : k < j) + score[j] * mult)
//! ```
//!
//! Only the previous row is ever read, so a single rolling row is kept and the
//! memory is O(candidate length) instead of O(pattern × candidate).

use crate::char_class::{CharClass, classify};
use smallvec::SmallVec;

/// Candidates longer than this (in codepoints) are not scored.
pub const FUZZY_SCORER_MAX_LENGTH: usize = 256;

/// Value of a cell through which no alignment exists.
pub const MIN_SCORE: i32 = i32::MIN / 2;

/// Worst possible result of [`fuzzy_score`]: the pattern is not a subsequence
/// of the candidate, or the candidate is longer than [`FUZZY_SCORER_MAX_LENGTH`].
/// Callers sort it last like any other score.
pub const NO_MATCH_SCORE: i32 = -MIN_SCORE;

pub const LEADING_GAP_SCORE: i32 = -4;
pub const GAP_SCORE: i32 = -5;
pub const WORD_START_SCORE: i32 = 50;
pub const NON_WORD_SCORE: i32 = 40;
pub const CAMEL_SCORE: i32 = WORD_START_SCORE + GAP_SCORE - 1;
pub const CONSECUTIVE_SCORE: i32 = WORD_START_SCORE + GAP_SCORE;
pub const PATTERN_NON_START_MULTIPLIER: i32 = 1;
pub const PATTERN_START_MULTIPLIER: i32 = 2;

/// Anything at or below this was derived from [`MIN_SCORE`] and is not a real
/// alignment. Legit values stay within a few thousand of zero.
const UNREACHABLE: i32 = MIN_SCORE / 2;

type Row<T> = SmallVec<[T; FUZZY_SCORER_MAX_LENGTH]>;

/// Bonus for a match at a position given the class of the previous character.
#[inline]
pub fn position_score(prev: CharClass, curr: CharClass) -> i32 {
    if prev == CharClass::NonWord && curr != CharClass::NonWord {
        return WORD_START_SCORE;
    }

    if (prev == CharClass::Lower && curr == CharClass::Upper)
        || (prev != CharClass::Digit && curr == CharClass::Digit)
    {
        return CAMEL_SCORE;
    }

    if curr == CharClass::NonWord {
        return NON_WORD_SCORE;
    }

    0
}

#[inline]
pub(crate) fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Score `candidate` against the raw (uncompiled) `pattern`. Lower is better.
///
/// Whitespace in the pattern is skipped and marks the next character as the
/// start of a pattern word. An empty (or whitespace only) pattern scores `0`.
/// Returns [`NO_MATCH_SCORE`] when no alignment exists or the candidate is
/// too long to score.
pub fn fuzzy_score(pattern: &str, candidate: &str, case_sensitive: bool) -> i32 {
    let mut chars: Row<char> = SmallVec::new();
    for c in candidate.chars() {
        if chars.len() == FUZZY_SCORER_MAX_LENGTH {
            return NO_MATCH_SCORE;
        }
        chars.push(c);
    }

    let pattern_len = pattern.chars().filter(|c| !c.is_whitespace()).count();
    if pattern_len == 0 {
        return 0;
    }
    if pattern_len > chars.len() {
        return NO_MATCH_SCORE;
    }

    let mut score: Row<i32> = SmallVec::with_capacity(chars.len());
    let mut prev = CharClass::NonWord;
    for &c in &chars {
        let curr = classify(c);
        score.push(position_score(prev, curr));
        prev = curr;
    }

    // Classification above needs the original casing, comparison does not
    if !case_sensitive {
        for c in chars.iter_mut() {
            *c = fold_case(*c);
        }
    }

    let mut dp: Row<i32> = smallvec::smallvec![MIN_SCORE; chars.len()];
    // whether we are aligning the first character of the pattern
    let mut pattern_first = true;
    // whether the current pattern character starts a pattern word
    let mut pattern_start = true;

    for pc in pattern.chars() {
        if pc.is_whitespace() {
            pattern_start = true;
            continue;
        }
        let pc = if case_sensitive { pc } else { fold_case(pc) };
        let multiplier = if pattern_start {
            PATTERN_START_MULTIPLIER
        } else {
            PATTERN_NON_START_MULTIPLIER
        };

        // uleft: previous row, previous column. ulefts: best of uleft and
        // everything left of it with gap penalties applied.
        let mut uleft = MIN_SCORE;
        let mut ulefts = MIN_SCORE;
        let mut lefts = MIN_SCORE;

        for (si, &sc) in chars.iter().enumerate() {
            let left = dp[si];
            lefts = (lefts + GAP_SCORE).max(left);

            dp[si] = if pc == sc {
                let bonus = score[si] * multiplier;
                let value = if pattern_first {
                    LEADING_GAP_SCORE * si as i32 + bonus
                } else {
                    (uleft + CONSECUTIVE_SCORE).max(ulefts + bonus)
                };
                if value <= UNREACHABLE { MIN_SCORE } else { value }
            } else {
                MIN_SCORE
            };

            uleft = left;
            ulefts = lefts;
        }

        pattern_first = false;
        pattern_start = false;
    }

    let best = dp
        .iter()
        .fold(MIN_SCORE, |lefts, &cell| (lefts + GAP_SCORE).max(cell));

    if best <= UNREACHABLE {
        NO_MATCH_SCORE
    } else {
        -best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    /// Straightforward full-matrix version of the recurrence, `None` for cells
    /// without an alignment.
    fn reference_score(pattern: &str, candidate: &str, case_sensitive: bool) -> i32 {
        let original: Vec<char> = candidate.chars().collect();
        if original.len() > FUZZY_SCORER_MAX_LENGTH {
            return NO_MATCH_SCORE;
        }
        let fold = |c: char| if case_sensitive { c } else { fold_case(c) };
        let haystack: Vec<char> = original.iter().map(|&c| fold(c)).collect();

        let mut bonus = Vec::with_capacity(original.len());
        let mut prev = CharClass::NonWord;
        for &c in &original {
            let curr = classify(c);
            bonus.push(position_score(prev, curr));
            prev = curr;
        }

        let mut rows: Vec<Vec<Option<i32>>> = Vec::new();
        let mut start = true;
        for pc in pattern.chars() {
            if pc.is_whitespace() {
                start = true;
                continue;
            }
            let pc = fold(pc);
            let mult = if start { 2 } else { 1 };
            let row: Vec<Option<i32>> = (0..haystack.len())
                .map(|j| {
                    if haystack[j] != pc {
                        return None;
                    }
                    let t = bonus[j] * mult;
                    match rows.last() {
                        None => Some(-4 * j as i32 + t),
                        Some(up) => {
                            let consecutive = if j > 0 { up[j - 1].map(|v| v + 45) } else { None };
                            let gapped = (0..j)
                                .filter_map(|k| up[k].map(|v| v - 5 * (j - 1 - k) as i32))
                                .max()
                                .map(|v| v + t);
                            consecutive.max(gapped)
                        }
                    }
                })
                .collect();
            rows.push(row);
            start = false;
        }

        let Some(last) = rows.last() else {
            return 0;
        };
        let n = last.len();
        last.iter()
            .enumerate()
            .filter_map(|(j, v)| v.map(|v| v - 5 * (n - 1 - j) as i32))
            .max()
            .map_or(NO_MATCH_SCORE, |best| -best)
    }

    #[test]
    fn test_empty_pattern_is_perfect() {
        assert_eq!(fuzzy_score("", "firefox", false), 0);
        assert_eq!(fuzzy_score("   ", "firefox", false), 0);
        assert_eq!(fuzzy_score("", "", false), 0);
    }

    #[test]
    fn test_exact_value() {
        // 'a' starts a word: 50 * 2, then 'b' consecutive: + 45
        assert_eq!(fuzzy_score("ab", "ab", false), -145);
        // single char after a separator in the middle: -4 * 2 + 50 * 2, one trailing gap
        assert_eq!(fuzzy_score("b", "x-bz", false), -87);
    }

    #[test]
    fn test_not_a_subsequence() {
        assert_eq!(fuzzy_score("ba", "ab", false), NO_MATCH_SCORE);
        assert_eq!(fuzzy_score("abc", "cab", false), NO_MATCH_SCORE);
        assert_eq!(fuzzy_score("x", "", false), NO_MATCH_SCORE);
        assert_eq!(fuzzy_score("long", "lon", false), NO_MATCH_SCORE);
    }

    #[test]
    fn test_too_long_candidate() {
        let exact = "a".repeat(FUZZY_SCORER_MAX_LENGTH);
        let over = "a".repeat(FUZZY_SCORER_MAX_LENGTH + 1);
        assert_ne!(fuzzy_score("a", &exact, false), NO_MATCH_SCORE);
        assert_eq!(fuzzy_score("a", &over, false), NO_MATCH_SCORE);
        // the bound counts codepoints, not bytes
        let wide = "é".repeat(FUZZY_SCORER_MAX_LENGTH);
        assert_ne!(fuzzy_score("é", &wide, false), NO_MATCH_SCORE);
    }

    #[test]
    fn test_case_sensitivity() {
        assert_eq!(fuzzy_score("FF", "firefox", true), NO_MATCH_SCORE);
        assert_ne!(fuzzy_score("FF", "firefox", false), NO_MATCH_SCORE);
        assert_ne!(fuzzy_score("FF", "FireFox", true), NO_MATCH_SCORE);
        assert_eq!(fuzzy_score("ÉT", "été", false), fuzzy_score("ét", "été", false));
    }

    #[test]
    fn test_word_boundary_ranks_better() {
        let boundary = fuzzy_score("b", "x-bz", false);
        let inner = fuzzy_score("b", "xabz", false);
        assert!(boundary < inner, "{} should beat {}", boundary, inner);
    }

    #[test]
    fn test_non_decimal_numbers_are_separators() {
        // -4 leading gap, 50 * 2 word start
        assert_eq!(fuzzy_score("b", "-b", false), -96);
        assert_eq!(fuzzy_score("b", "½b", false), -96);
        assert_eq!(fuzzy_score("b", "²b", false), -96);
        assert_eq!(fuzzy_score("b", "ʰb", false), -96);
    }

    #[test]
    fn test_camel_case_ranks_better() {
        let camel = fuzzy_score("fb", "fooBar", false);
        let flat = fuzzy_score("fb", "foobar", false);
        assert_eq!(camel, -124);
        assert_eq!(flat, -80);
        assert!(camel < flat);
    }

    #[test]
    fn test_pattern_whitespace_marks_word_start() {
        let spaced = fuzzy_score("a b", "a-b", false);
        let joined = fuzzy_score("ab", "a-b", false);
        assert_eq!(spaced, -195);
        assert_eq!(joined, -145);
        assert!(spaced < joined);
    }

    #[test]
    fn test_consecutive_run_ranks_better() {
        assert_eq!(fuzzy_score("ab", "abxx", false), -135);
        assert_eq!(fuzzy_score("ab", "axbx", false), -90);
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                fuzzy_score("gnterm", "gnome-terminal", false),
                fuzzy_score("gnterm", "gnome-terminal", false)
            );
        }
    }

    #[test]
    fn test_rolling_row_matches_full_matrix() {
        let mut rng = SmallRng::seed_from_u64(0x51f7);
        let alphabet: Vec<char> = "abAB1-_ ée".chars().collect();
        let random_string = |rng: &mut SmallRng, max: usize| -> String {
            let len = rng.gen_range(0..=max);
            (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect()
        };

        for _ in 0..2000 {
            let pattern = random_string(&mut rng, 5);
            let candidate = random_string(&mut rng, 24);
            let case_sensitive = rng.gen_bool(0.5);
            assert_eq!(
                fuzzy_score(&pattern, &candidate, case_sensitive),
                reference_score(&pattern, &candidate, case_sensitive),
                "pattern {:?} candidate {:?} case_sensitive {}",
                pattern,
                candidate,
                case_sensitive
            );
        }
    }
}
