use crate::{AttrFlag, ChannelId, FilterKind, MediaFlag, MessageId, UserId};
use jiff::Timestamp;

/// One typed search constraint. `raw` is the token the filter was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    After {
        raw: String,
        value: Timestamp,
    },
    Before {
        raw: String,
        value: Timestamp,
    },
    In {
        raw: String,
        value: ChannelId,
    },
    To {
        raw: String,
        value: UserId,
    },
    From {
        raw: String,
        value: UserId,
    },
    Citation {
        raw: String,
        value: MessageId,
    },
    AttrFlag {
        raw: String,
        value: AttrFlag,
        negate: bool,
    },
    MediaFlag {
        raw: String,
        value: MediaFlag,
        negate: bool,
    },
}

impl Filter {
    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::After { .. } => FilterKind::After,
            Filter::Before { .. } => FilterKind::Before,
            Filter::In { .. } => FilterKind::In,
            Filter::To { .. } => FilterKind::To,
            Filter::From { .. } => FilterKind::From,
            Filter::Citation { .. } => FilterKind::Citation,
            Filter::AttrFlag { .. } => FilterKind::AttrFlag,
            Filter::MediaFlag { .. } => FilterKind::MediaFlag,
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            Filter::After { raw, .. }
            | Filter::Before { raw, .. }
            | Filter::In { raw, .. }
            | Filter::To { raw, .. }
            | Filter::From { raw, .. }
            | Filter::Citation { raw, .. }
            | Filter::AttrFlag { raw, .. }
            | Filter::MediaFlag { raw, .. } => raw,
        }
    }

    /// `Some` only for the flag kinds.
    pub fn negate(&self) -> Option<bool> {
        match self {
            Filter::AttrFlag { negate, .. } | Filter::MediaFlag { negate, .. } => Some(*negate),
            _ => None,
        }
    }
}

/// What a single token compiles to: a free-text word or a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Word(String),
    Filter(Filter),
}

impl Term {
    pub fn as_filter(&self) -> Option<&Filter> {
        match self {
            Term::Filter(filter) => Some(filter),
            Term::Word(_) => None,
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Term::Word(word) => Some(word),
            Term::Filter(_) => None,
        }
    }
}

impl From<Filter> for Term {
    fn from(filter: Filter) -> Self {
        Term::Filter(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_raw_follow_the_variant() {
        let filter = Filter::MediaFlag {
            raw: "-has:image".to_string(),
            value: MediaFlag::Image,
            negate: true,
        };
        assert_eq!(filter.kind(), FilterKind::MediaFlag);
        assert_eq!(filter.raw(), "-has:image");
        assert_eq!(filter.negate(), Some(true));

        let filter = Filter::In {
            raw: "#general".to_string(),
            value: ChannelId::from_u128(1),
        };
        assert_eq!(filter.kind(), FilterKind::In);
        assert_eq!(filter.negate(), None);
    }

    #[test]
    fn term_accessors() {
        let word = Term::Word("hello".to_string());
        assert_eq!(word.as_word(), Some("hello"));
        assert!(word.as_filter().is_none());
    }
}
