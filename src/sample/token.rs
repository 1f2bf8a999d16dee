//! The table that maps categorical tokens to binary values.
use std::collections::HashSet;


/// Tokens that are mapped to `1` by default.
/// Every other token is mapped to `0`.
pub const DEFAULT_POSITIVE_TOKENS: [&str; 11] = [
    "A", "y", "democrat", "before1950", "yes", "morethan3min",
    "fast", "expensive", "high", "Two", "large",
];


/// A set of categorical tokens that stand for the value `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositiveTokens {
    tokens: HashSet<String>,
}


impl PositiveTokens {
    /// Construct a table from the given tokens.
    pub fn new<I, S>(tokens: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let tokens = tokens.into_iter()
            .map(Into::into)
            .collect();
        Self { tokens }
    }


    /// Map a token to its binary value.
    #[inline]
    pub fn map(&self, token: &str) -> u8 {
        u8::from(self.tokens.contains(token))
    }


    /// Returns the number of positive tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }


    /// Returns `true` if no token maps to `1`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}


impl Default for PositiveTokens {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE_TOKENS)
    }
}
