/// Parser configuration trait - lets the caller decide how a query is split
pub trait ParserConfig {
    /// Split the query on spaces into independently matched tokens.
    /// When disabled the whole query is a single token.
    fn tokenize(&self) -> bool {
        true
    }
}

/// Default launcher configuration - every space separated word is a token
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizedConfig;

impl ParserConfig for TokenizedConfig {}

/// Treat the query as one token, spaces included
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeQueryConfig;

impl ParserConfig for WholeQueryConfig {
    fn tokenize(&self) -> bool {
        false
    }
}

impl<C: ParserConfig + ?Sized> ParserConfig for &C {
    fn tokenize(&self) -> bool {
        (**self).tokenize()
    }
}
