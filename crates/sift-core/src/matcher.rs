//! Token matching and highlight span extraction.

use crate::pattern::PatternSet;
use bitflags::bitflags;
use smallvec::SmallVec;
use std::ops::Range;

bitflags! {
    /// Styling the renderer should apply to highlighted spans.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HighlightStyle: u8 {
        const BOLD = 1 << 0;
        const UNDERLINE = 1 << 1;
        const ITALIC = 1 << 2;
        const COLOR = 1 << 3;
    }
}

/// Straight RGBA, every channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightTheme {
    pub style: HighlightStyle,
    /// Only meaningful together with [`HighlightStyle::COLOR`].
    pub color: Option<Rgba>,
}

impl Default for HighlightTheme {
    fn default() -> Self {
        Self {
            style: HighlightStyle::BOLD | HighlightStyle::UNDERLINE,
            color: None,
        }
    }
}

/// A byte range of the candidate plus the styling to apply to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub range: Range<usize>,
    pub style: HighlightStyle,
    pub color: Option<Rgba>,
}

/// True iff every pattern matches somewhere in `candidate`. Stops at the
/// first pattern that does not; an empty set matches everything.
#[inline]
pub fn matches(patterns: &PatternSet, candidate: &str) -> bool {
    patterns.iter().all(|pattern| pattern.is_match(candidate))
}

/// Byte ranges of `candidate` matched by any of the patterns, sorted by
/// `(start, end)` without duplicates.
///
/// Every non-overlapping match of every pattern is visited. When a pattern
/// has capture groups (always the case for fuzzy patterns: one group per
/// character) the groups are reported, otherwise the whole match.
pub fn highlight_spans(patterns: &PatternSet, candidate: &str) -> Vec<Range<usize>> {
    let mut spans: SmallVec<[Range<usize>; 16]> = SmallVec::new();

    for pattern in patterns {
        let regex = pattern.regex();
        let group_count = regex.captures_len();

        for captures in regex.captures_iter(candidate) {
            let first_group = if group_count > 1 { 1 } else { 0 };
            for index in first_group..group_count {
                if let Some(m) = captures.get(index)
                    && !m.is_empty()
                {
                    spans.push(m.range());
                }
            }
        }
    }

    spans.sort_unstable_by_key(|r| (r.start, r.end));
    spans.dedup();
    spans.into_vec()
}

/// [`highlight_spans`] paired with the theme to render them with. Nothing is
/// produced for an empty style.
pub fn highlights(patterns: &PatternSet, candidate: &str, theme: &HighlightTheme) -> Vec<Highlight> {
    if theme.style.is_empty() {
        return Vec::new();
    }

    let color = if theme.style.contains(HighlightStyle::COLOR) {
        theme.color
    } else {
        None
    };

    highlight_spans(patterns, candidate)
        .into_iter()
        .map(|range| Highlight {
            range,
            style: theme.style,
            color,
        })
        .collect()
}
