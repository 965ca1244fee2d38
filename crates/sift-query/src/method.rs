use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How every token of the query is turned into a matcher.
///
/// Deserializes from the same names [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum MatchingMethod {
    /// Literal substring search, special characters have no meaning.
    #[default]
    Normal,
    /// Shell-style `*` and `?` wildcards, everything else literal.
    Glob,
    /// The token is a regular expression. Invalid syntax falls back to `Normal`.
    Regex,
    /// Every character of the token must appear in order, gaps allowed.
    Fuzzy,
}

impl MatchingMethod {
    pub const ALL: [MatchingMethod; 4] = [
        MatchingMethod::Normal,
        MatchingMethod::Glob,
        MatchingMethod::Regex,
        MatchingMethod::Fuzzy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchingMethod::Normal => "normal",
            MatchingMethod::Glob => "glob",
            MatchingMethod::Regex => "regex",
            MatchingMethod::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a valid matching strategy. Valid options are: glob, regex, fuzzy or normal")]
pub struct ParseMatchingMethodError(pub String);

impl FromStr for MatchingMethod {
    type Err = ParseMatchingMethodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        MatchingMethod::ALL
            .into_iter()
            .find(|method| trimmed.eq_ignore_ascii_case(method.as_str()))
            .or_else(|| trimmed.eq_ignore_ascii_case("plain").then_some(MatchingMethod::Normal))
            .ok_or_else(|| ParseMatchingMethodError(value.to_string()))
    }
}

impl TryFrom<String> for MatchingMethod {
    type Error = ParseMatchingMethodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
