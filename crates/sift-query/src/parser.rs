use crate::TokenVec;
use crate::config::ParserConfig;

/// Tokens extracted from the raw query, borrowed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::large_enum_variant)]
pub enum ParsedQuery<'a> {
    /// Nothing to match against, every candidate passes
    Empty,
    /// Single token (the common case while typing a first word)
    Text(&'a str),
    /// Several tokens, all of them have to match
    Parts(TokenVec<'a>),
}

impl<'a> ParsedQuery<'a> {
    /// All tokens in query order.
    pub fn tokens(&self) -> &[&'a str] {
        match self {
            ParsedQuery::Empty => &[],
            ParsedQuery::Text(text) => std::slice::from_ref(text),
            ParsedQuery::Parts(parts) => parts.as_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, ParsedQuery::Empty)
    }
}

/// Main query parser - zero-cost wrapper around configuration
#[derive(Debug, Clone, Copy)]
pub struct QueryParser<C: ParserConfig> {
    config: C,
}

impl<C: ParserConfig> QueryParser<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn parse<'a>(&self, query: &'a str) -> ParsedQuery<'a> {
        if query.is_empty() {
            return ParsedQuery::Empty;
        }

        if !self.config.tokenize() {
            return ParsedQuery::Text(query);
        }

        // Only ASCII space separates tokens, tabs and other whitespace are part of the token
        let mut tokens: TokenVec<'a> = query.split(' ').filter(|t| !t.is_empty()).collect();

        match tokens.len() {
            0 => ParsedQuery::Empty,
            1 => ParsedQuery::Text(tokens.remove(0)),
            _ => ParsedQuery::Parts(tokens),
        }
    }
}

impl Default for QueryParser<crate::TokenizedConfig> {
    fn default() -> Self {
        Self::new(crate::TokenizedConfig)
    }
}
