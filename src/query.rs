use search_syntax::{
    to_iso_string, AttrFlag, ChannelId, Filter, MediaFlag, MessageId, Term, UserId,
};
use serde::{Deserialize, Serialize};

/// Backend shaped accumulator of everything a query constrains. Every field
/// is optional; merging keeps the first value seen for each one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMessageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// ISO 8601 UTC, millisecond precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_channel: Option<ChannelId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<MessageId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    #[serde(rename = "hasURL", skip_serializing_if = "Option::is_none")]
    pub has_url: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_video: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_audio: Option<bool>,
}

impl SearchMessageQuery {
    /// Combines two query objects. Words are joined with a single space; for
    /// every other field the left value wins when both are set.
    pub fn merge(self, other: Self) -> Self {
        Self {
            word: join_words(self.word, other.word),
            after: self.after.or(other.after),
            before: self.before.or(other.before),
            in_channel: self.in_channel.or(other.in_channel),
            to: self.to.or(other.to),
            from: self.from.or(other.from),
            citation: self.citation.or(other.citation),
            bot: self.bot.or(other.bot),
            has_url: self.has_url.or(other.has_url),
            has_attachments: self.has_attachments.or(other.has_attachments),
            has_image: self.has_image.or(other.has_image),
            has_video: self.has_video.or(other.has_video),
            has_audio: self.has_audio.or(other.has_audio),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn join_words(left: Option<String>, right: Option<String>) -> Option<String> {
    let joined = [left, right]
        .into_iter()
        .flatten()
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

impl From<Term> for SearchMessageQuery {
    fn from(term: Term) -> Self {
        match term {
            Term::Word(word) => Self {
                word: (!word.is_empty()).then_some(word),
                ..Self::default()
            },
            Term::Filter(filter) => filter.into(),
        }
    }
}

impl From<Filter> for SearchMessageQuery {
    fn from(filter: Filter) -> Self {
        let mut query = Self::default();
        match filter {
            Filter::After { value, .. } => query.after = Some(to_iso_string(value)),
            Filter::Before { value, .. } => query.before = Some(to_iso_string(value)),
            Filter::In { value, .. } => query.in_channel = Some(value),
            Filter::To { value, .. } => query.to = Some(value),
            Filter::From { value, .. } => query.from = Some(value),
            Filter::Citation { value, .. } => query.citation = Some(value),
            Filter::AttrFlag { value, negate, .. } => match value {
                AttrFlag::Bot => query.bot = Some(!negate),
            },
            Filter::MediaFlag { value, negate, .. } => {
                let slot = match value {
                    MediaFlag::Attachments => &mut query.has_attachments,
                    MediaFlag::Image => &mut query.has_image,
                    MediaFlag::Video => &mut query.has_video,
                    MediaFlag::Audio => &mut query.has_audio,
                };
                *slot = Some(!negate);
            }
        }
        query
    }
}
