use std::fmt;

pub const CHANNEL_SIGIL: char = '#';
pub const USER_SIGIL: char = '@';

/// Closed set of filters the message search language understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Messages posted at or after a date (`after:`, `since:`).
    After,
    /// Messages posted before a date (`before:`, `until:`).
    Before,
    /// Messages in a channel (`in:`, `#`).
    In,
    /// Messages mentioning a user or group (`to:`, `@`).
    To,
    /// Messages posted by a user (`from:`, `by:`).
    From,
    /// Messages citing another message (`citation:`, `cite:`).
    Citation,
    /// Poster attributes (`is:`, negated by `-is:` / `not:`).
    AttrFlag,
    /// Attached media (`has:`, negated by `-has:`).
    MediaFlag,
}

impl FilterKind {
    pub const ALL: [FilterKind; 8] = [
        FilterKind::After,
        FilterKind::Before,
        FilterKind::In,
        FilterKind::To,
        FilterKind::From,
        FilterKind::Citation,
        FilterKind::AttrFlag,
        FilterKind::MediaFlag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::After => "after",
            FilterKind::Before => "before",
            FilterKind::In => "in",
            FilterKind::To => "to",
            FilterKind::From => "from",
            FilterKind::Citation => "citation",
            FilterKind::AttrFlag => "attrFlag",
            FilterKind::MediaFlag => "mediaFlag",
        }
    }

    /// Whether the kind accepts a negated prefix.
    pub fn is_negatable(&self) -> bool {
        !rule_of(*self).negative.is_empty()
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct PrefixRule {
    kind: FilterKind,
    positive: &'static [&'static str],
    negative: &'static [&'static str],
}

// Order matters: the first rule with a matching prefix wins, and prefixes are
// literal string-start checks with no longest-match preference.
const PREFIX_RULES: &[PrefixRule] = &[
    PrefixRule {
        kind: FilterKind::After,
        positive: &["after:", "since:"],
        negative: &[],
    },
    PrefixRule {
        kind: FilterKind::Before,
        positive: &["before:", "until:"],
        negative: &[],
    },
    PrefixRule {
        kind: FilterKind::In,
        positive: &["in:", "#"],
        negative: &[],
    },
    PrefixRule {
        kind: FilterKind::To,
        positive: &["to:", "@"],
        negative: &[],
    },
    PrefixRule {
        kind: FilterKind::From,
        positive: &["from:", "by:"],
        negative: &[],
    },
    PrefixRule {
        kind: FilterKind::Citation,
        positive: &["citation:", "cite:"],
        negative: &[],
    },
    PrefixRule {
        kind: FilterKind::AttrFlag,
        positive: &["is:"],
        negative: &["-is:", "not:"],
    },
    PrefixRule {
        kind: FilterKind::MediaFlag,
        positive: &["has:"],
        negative: &["-has:"],
    },
];

fn rule_of(kind: FilterKind) -> &'static PrefixRule {
    PREFIX_RULES
        .iter()
        .find(|rule| rule.kind == kind)
        .unwrap_or_else(|| unreachable!("every filter kind has a prefix rule"))
}

/// Every prefix accepted for `kind`, positive ones first.
pub fn prefixes_of(kind: FilterKind) -> impl Iterator<Item = (&'static str, bool)> {
    let rule = rule_of(kind);
    rule.positive
        .iter()
        .map(|prefix| (*prefix, false))
        .chain(rule.negative.iter().map(|prefix| (*prefix, true)))
}

/// A token whose prefix was recognized. `body` is everything after the prefix
/// and may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedFilter<'a> {
    pub kind: FilterKind,
    pub body: &'a str,
    pub negate: bool,
    pub raw: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracted<'a> {
    Filter(ExtractedFilter<'a>),
    /// No prefix matched; the token comes back untouched.
    Plain(&'a str),
}

impl PrefixRule {
    fn extract<'a>(&self, token: &'a str) -> Option<ExtractedFilter<'a>> {
        let positive = self
            .positive
            .iter()
            .find_map(|prefix| token.strip_prefix(prefix))
            .map(|body| (body, false));
        let (body, negate) = positive.or_else(|| {
            self.negative
                .iter()
                .find_map(|prefix| token.strip_prefix(prefix))
                .map(|body| (body, true))
        })?;
        Some(ExtractedFilter {
            kind: self.kind,
            body,
            negate,
            raw: token,
        })
    }
}

/// Splits one token into filter kind, negation and body.
///
/// ```
/// use search_syntax::{extract, Extracted, FilterKind};
///
/// let Extracted::Filter(filter) = extract("-has:image") else { panic!() };
/// assert_eq!(filter.kind, FilterKind::MediaFlag);
/// assert_eq!(filter.body, "image");
/// assert!(filter.negate);
///
/// assert_eq!(extract("http://example.com"), Extracted::Plain("http://example.com"));
/// ```
pub fn extract(token: &str) -> Extracted<'_> {
    PREFIX_RULES
        .iter()
        .find_map(|rule| rule.extract(token))
        .map_or(Extracted::Plain(token), Extracted::Filter)
}
