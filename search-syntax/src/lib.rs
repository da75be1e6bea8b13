//! # Message search syntax
//!
//! `search-syntax` turns a raw search box string into tokens, recognizes the
//! filter prefixes of the message search language, and parses the values that
//! can be checked without looking anything up (dates, message references and
//! the closed flag sets). Channel and user references are left as text here;
//! resolving them needs a directory and happens one layer up.
//!
//! ## Example
//! ```
//! use search_syntax::{extract, tokenize, Extracted, FilterKind};
//!
//! let tokens: Vec<_> = tokenize("deploy  #gps/times not:bot").collect();
//! assert_eq!(tokens, ["deploy", "#gps/times", "not:bot"]);
//!
//! let Extracted::Filter(filter) = extract("#gps/times") else { panic!() };
//! assert_eq!(filter.kind, FilterKind::In);
//! assert_eq!(filter.body, "gps/times");
//!
//! let Extracted::Filter(filter) = extract("not:bot") else { panic!() };
//! assert_eq!(filter.kind, FilterKind::AttrFlag);
//! assert!(filter.negate);
//! ```

mod extract;
mod filter;
mod ids;
mod value;

pub use extract::*;
pub use filter::*;
pub use ids::*;
pub use value::*;

/// Splits a query on the ASCII space character. Runs of spaces never produce
/// empty tokens.
///
/// ```
/// use search_syntax::tokenize;
/// assert_eq!(tokenize("  a  b ").collect::<Vec<_>>(), ["a", "b"]);
/// assert_eq!(tokenize("").count(), 0);
/// ```
pub fn tokenize(query: &str) -> impl Iterator<Item = &str> {
    query.split(' ').filter(|token| !token.is_empty())
}

/// Tokens without `:` that do not start with a channel or user sigil are plain
/// search words and never go through filter extraction.
///
/// ```
/// use search_syntax::is_plain_word;
/// assert!(is_plain_word("hello"));
/// assert!(!is_plain_word("#general"));
/// assert!(!is_plain_word("@alice"));
/// assert!(!is_plain_word("after:2024-01-01"));
/// ```
pub fn is_plain_word(token: &str) -> bool {
    !token.contains(':') && !token.starts_with(CHANNEL_SIGIL) && !token.starts_with(USER_SIGIL)
}
