//! Fast, zero-allocation query tokenizer for launcher matching
//!
//! The parser takes the text typed into the launcher and splits it into
//! tokens which are compiled and matched independently (all of them have to
//! match). Designed to run on every keystroke:
//! - Zero allocations for queries with ≤8 tokens (SmallVec)
//! - Tokens borrow from the query, nothing is copied
//!
//! # Examples
//!
//! ```
//! use sift_query::{MatchingMethod, ParsedQuery, QueryParser, WholeQueryConfig};
//!
//! let parser = QueryParser::default();
//! assert_eq!(parser.parse("fire fox").tokens(), &["fire", "fox"]);
//! assert!(parser.parse("   ").is_empty());
//!
//! // Tokenization can be disabled
//! let parser = QueryParser::new(WholeQueryConfig);
//! assert_eq!(parser.parse("fire fox"), ParsedQuery::Text("fire fox"));
//!
//! let method: MatchingMethod = "fuzzy".parse().unwrap();
//! assert_eq!(method, MatchingMethod::Fuzzy);
//! ```

mod config;
mod method;
mod parser;

pub use config::{ParserConfig, TokenizedConfig, WholeQueryConfig};
pub use method::{MatchingMethod, ParseMatchingMethodError};
pub use parser::{ParsedQuery, QueryParser};

// Re-export SmallVec for convenience
pub use smallvec::SmallVec;

/// Type alias for token vector - stack-allocated for ≤8 tokens
pub type TokenVec<'a> = SmallVec<[&'a str; 8]>;
