use crate::{consts::SEARCH_PARAM_ARITY, SearchMessageQuery};
use search_syntax::{ChannelId, MessageId, UserId};
use serde::{ser::SerializeTuple, Deserialize, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Backend names of the positional search parameters, in call order.
pub const SEARCH_PARAM_NAMES: [&str; SEARCH_PARAM_ARITY] = [
    "word",
    "after",
    "before",
    "in",
    "to",
    "from",
    "citation",
    "bot",
    "hasURL",
    "hasAttachments",
    "hasImage",
    "hasVideo",
    "hasAudio",
    "limit",
    "offset",
    "sort",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMessageSortKey {
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "-createdAt")]
    CreatedAtDesc,
    #[serde(rename = "updatedAt")]
    UpdatedAt,
    #[serde(rename = "-updatedAt")]
    UpdatedAtDesc,
}

impl SearchMessageSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMessageSortKey::CreatedAt => "createdAt",
            SearchMessageSortKey::CreatedAtDesc => "-createdAt",
            SearchMessageSortKey::UpdatedAt => "updatedAt",
            SearchMessageSortKey::UpdatedAtDesc => "-updatedAt",
        }
    }
}

impl fmt::Display for SearchMessageSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortKeyError {
    input: String,
}

impl fmt::Display for ParseSortKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort key {:?} (expected createdAt, -createdAt, updatedAt or -updatedAt)",
            self.input
        )
    }
}

impl std::error::Error for ParseSortKeyError {}

impl FromStr for SearchMessageSortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(SearchMessageSortKey::CreatedAt),
            "-createdAt" => Ok(SearchMessageSortKey::CreatedAtDesc),
            "updatedAt" => Ok(SearchMessageSortKey::UpdatedAt),
            "-updatedAt" => Ok(SearchMessageSortKey::UpdatedAtDesc),
            _ => Err(ParseSortKeyError {
                input: s.to_string(),
            }),
        }
    }
}

/// Paging and ordering supplied by the caller next to the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMessageOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<SearchMessageSortKey>,
}

/// The search call's arguments. Serializes as a fixed length array with
/// `null` for every unset position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchMessageParams {
    pub word: Option<String>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub in_channel: Option<ChannelId>,
    pub to: Option<UserId>,
    pub from: Option<UserId>,
    pub citation: Option<MessageId>,
    pub bot: Option<bool>,
    pub has_url: Option<bool>,
    pub has_attachments: Option<bool>,
    pub has_image: Option<bool>,
    pub has_video: Option<bool>,
    pub has_audio: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<SearchMessageSortKey>,
}

impl SearchMessageQuery {
    pub fn to_params(&self, options: SearchMessageOptions) -> SearchMessageParams {
        SearchMessageParams {
            word: self.word.clone(),
            after: self.after.clone(),
            before: self.before.clone(),
            in_channel: self.in_channel,
            to: self.to,
            from: self.from,
            citation: self.citation,
            bot: self.bot,
            has_url: self.has_url,
            has_attachments: self.has_attachments,
            has_image: self.has_image,
            has_video: self.has_video,
            has_audio: self.has_audio,
            limit: options.limit,
            offset: options.offset,
            sort: options.sort,
        }
    }
}

impl SearchMessageParams {
    /// Every position rendered as text, `None` where unset.
    pub fn slots(&self) -> [Option<String>; SEARCH_PARAM_ARITY] {
        fn text<T: ToString>(value: &Option<T>) -> Option<String> {
            value.as_ref().map(ToString::to_string)
        }
        [
            self.word.clone(),
            self.after.clone(),
            self.before.clone(),
            text(&self.in_channel),
            text(&self.to),
            text(&self.from),
            text(&self.citation),
            text(&self.bot),
            text(&self.has_url),
            text(&self.has_attachments),
            text(&self.has_image),
            text(&self.has_video),
            text(&self.has_audio),
            text(&self.limit),
            text(&self.offset),
            text(&self.sort),
        ]
    }

    /// `(name, value)` for every set position, in call order. Suitable for a
    /// URL query string.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        SEARCH_PARAM_NAMES
            .into_iter()
            .zip(self.slots())
            .filter_map(|(name, value)| value.map(|value| (name, value)))
            .collect()
    }
}

impl Serialize for SearchMessageParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(SEARCH_PARAM_ARITY)?;
        tuple.serialize_element(&self.word)?;
        tuple.serialize_element(&self.after)?;
        tuple.serialize_element(&self.before)?;
        tuple.serialize_element(&self.in_channel)?;
        tuple.serialize_element(&self.to)?;
        tuple.serialize_element(&self.from)?;
        tuple.serialize_element(&self.citation)?;
        tuple.serialize_element(&self.bot)?;
        tuple.serialize_element(&self.has_url)?;
        tuple.serialize_element(&self.has_attachments)?;
        tuple.serialize_element(&self.has_image)?;
        tuple.serialize_element(&self.has_video)?;
        tuple.serialize_element(&self.has_audio)?;
        tuple.serialize_element(&self.limit)?;
        tuple.serialize_element(&self.offset)?;
        tuple.serialize_element(&self.sort)?;
        tuple.end()
    }
}
