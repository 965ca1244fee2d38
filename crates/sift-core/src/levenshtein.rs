use crate::score::fold_case;
use smallvec::SmallVec;

/// Returned by [`edit_distance`] when the first string is too long to be
/// measured. Sorts after every real distance.
pub const EDIT_DISTANCE_TOO_LONG: u32 = u32::MAX;

/// Levenshtein distance between `a` and `b` over Unicode codepoints.
///
/// Keeps a single column of `len(a) + 1` cells. With `case_sensitive == false`
/// both sides are lowercased per character before comparison.
pub fn edit_distance(a: &str, b: &str, case_sensitive: bool) -> u32 {
    let fold = |c: char| if case_sensitive { c } else { fold_case(c) };

    let needle: SmallVec<[char; 64]> = a.chars().map(fold).collect();
    if needle.len() >= EDIT_DISTANCE_TOO_LONG as usize {
        return EDIT_DISTANCE_TOO_LONG;
    }

    let mut column: SmallVec<[u32; 64]> = (0..=needle.len() as u32).collect();

    for (x, hc) in b.chars().map(fold).enumerate() {
        let mut last_diag = x as u32;
        column[0] = x as u32 + 1;

        for (y, &nc) in needle.iter().enumerate() {
            let old_diag = column[y + 1];
            let substitution = last_diag + u32::from(nc != hc);
            column[y + 1] = (old_diag + 1).min(column[y] + 1).min(substitution);
            last_diag = old_diag;
        }
    }

    column[needle.len()]
}
