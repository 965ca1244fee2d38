//! Query → matcher compilation.
//!
//! Every token of the query becomes one [`CompiledPattern`], built according
//! to the configured [`MatchingMethod`]. All methods end up as a
//! `regex::Regex` so matching and highlighting share one code path:
//!
//! | method   | token `a*b?`      | regex          |
//! |----------|-------------------|----------------|
//! | `Normal` | literal           | `a\*b\?`       |
//! | `Glob`   | `*` any, `?` one  | `a.*b.`        |
//! | `Regex`  | as typed          | `a*b?`         |
//! | `Fuzzy`  | chars in order    | `(a).*?(\*).*?(b).*?(\?)` |
//!
//! Matching is always an unanchored search, a glob `*.txt` matches
//! `report.txt` as well as `report.txt.bak`.

use crate::config::MatcherConfig;
use regex::{Regex, RegexBuilder};
use sift_query::{MatchingMethod, QueryParser};
use smallvec::SmallVec;
use tracing::Level;

/// How a pattern ended up being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternOrigin {
    /// Built from the token as the matching method intended.
    Compiled,
    /// The method's regex could not be built, the token is matched literally.
    /// `error` holds the compilation error so the UI can show it.
    LiteralFallback { error: String },
}

/// Matcher for a single query token. Immutable once built and `Sync`, so one
/// set can be evaluated from many threads at once.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    token: String,
    regex: Regex,
    origin: PatternOrigin,
}

impl CompiledPattern {
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[inline]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    #[inline]
    pub fn origin(&self) -> &PatternOrigin {
        &self.origin
    }

    #[inline]
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, PatternOrigin::LiteralFallback { .. })
    }

    #[inline]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// All patterns of one query, plus the configuration snapshot they were
/// compiled with. An empty set matches every candidate.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: SmallVec<[CompiledPattern; 4]>,
    config: MatcherConfig,
}

impl PatternSet {
    /// Set without patterns, matches everything.
    pub fn empty(config: MatcherConfig) -> Self {
        Self {
            patterns: SmallVec::new(),
            config,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledPattern> {
        self.patterns.iter()
    }

    #[inline]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// False once the settings changed: such a set must be recompiled, never evaluated.
    #[inline]
    pub fn is_compiled_for(&self, config: &MatcherConfig) -> bool {
        self.config == *config
    }

    /// First regex error that forced a literal fallback, if any.
    pub fn fallback_error(&self) -> Option<&str> {
        self.patterns.iter().find_map(|p| match &p.origin {
            PatternOrigin::LiteralFallback { error } => Some(error.as_str()),
            PatternOrigin::Compiled => None,
        })
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a CompiledPattern;
    type IntoIter = std::slice::Iter<'a, CompiledPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

/// Compile the raw query into a [`PatternSet`]. Never fails: syntax errors
/// degrade to literal matching of the offending token.
#[tracing::instrument(skip(config), level = Level::DEBUG)]
pub fn compile(query: &str, config: &MatcherConfig) -> PatternSet {
    let parsed = QueryParser::new(config).parse(query);

    let patterns: SmallVec<[CompiledPattern; 4]> = parsed
        .tokens()
        .iter()
        .filter_map(|token| compile_token(token, config))
        .collect();

    tracing::debug!(
        tokens = parsed.len(),
        patterns = patterns.len(),
        method = %config.method,
        case_sensitive = config.case_sensitive,
        "Compiled query"
    );

    PatternSet {
        patterns,
        config: *config,
    }
}

/// Build the matcher of a single token, `None` only if even the literal
/// fallback cannot be built (e.g. the token exceeds the regex size limit).
pub fn compile_token(token: &str, config: &MatcherConfig) -> Option<CompiledPattern> {
    let source = match config.method {
        MatchingMethod::Normal => regex::escape(token),
        MatchingMethod::Glob => glob_to_regex(token),
        MatchingMethod::Regex => token.to_string(),
        MatchingMethod::Fuzzy => fuzzy_to_regex(token),
    };

    let error = match build_regex(&source, config.case_sensitive) {
        Ok(regex) => {
            return Some(CompiledPattern {
                token: token.to_string(),
                regex,
                origin: PatternOrigin::Compiled,
            });
        }
        Err(err) => err,
    };

    tracing::warn!(
        "Pattern compilation failed for {} ({}). Falling back to literal match. Error {}",
        token,
        config.method,
        error
    );

    match build_regex(&regex::escape(token), config.case_sensitive) {
        Ok(regex) => Some(CompiledPattern {
            token: token.to_string(),
            regex,
            origin: PatternOrigin::LiteralFallback { error },
        }),
        Err(err) => {
            tracing::warn!(token, error = %err, "Literal fallback failed, dropping token");
            None
        }
    }
}

fn build_regex(source: &str, case_sensitive: bool) -> Result<Regex, String> {
    RegexBuilder::new(source)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| e.to_string())
}

/// `*` becomes `.*`, `?` becomes `.`, everything else is escaped.
pub fn glob_to_regex(token: &str) -> String {
    let mut out = String::with_capacity(token.len() * 2);
    for c in token.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            c => push_escaped(&mut out, c),
        }
    }
    out
}

/// Every character in its own capture group, separated by lazy gaps, so the
/// groups report the matched positions for highlighting.
pub fn fuzzy_to_regex(token: &str) -> String {
    let mut out = String::with_capacity(token.len() * 6);
    for (i, c) in token.chars().enumerate() {
        if i > 0 {
            out.push_str(".*?");
        }
        out.push('(');
        push_escaped(&mut out, c);
        out.push(')');
    }
    out
}

#[inline]
fn push_escaped(out: &mut String, c: char) {
    if regex_syntax::is_meta_character(c) {
        out.push('\\');
    }
    out.push(c);
}
