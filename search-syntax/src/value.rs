use crate::MessageId;
use jiff::{Timestamp, civil::Date, tz::TimeZone};
use std::fmt;
use uuid::Uuid;

/// Time zone used to place civil dates (`2024-01-31`) on the timeline.
#[derive(Debug, Clone)]
pub struct DateContext {
    tz: TimeZone,
}

impl DateContext {
    pub fn new(tz: TimeZone) -> Self {
        Self { tz }
    }

    pub fn utc() -> Self {
        Self::new(TimeZone::UTC)
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }
}

impl Default for DateContext {
    fn default() -> Self {
        Self::utc()
    }
}

/// Parses the body of an `after:`/`before:` filter.
///
/// Accepts RFC 3339 timestamps carrying an offset, or year-first civil dates
/// separated by `-`, `/` or `.` which resolve to the start of that day.
///
/// ```
/// use search_syntax::{parse_date, to_iso_string, DateContext};
///
/// let context = DateContext::utc();
/// let ts = parse_date("2023-01-01", &context).unwrap();
/// assert_eq!(to_iso_string(ts), "2023-01-01T00:00:00.000Z");
/// assert!(parse_date("not-a-date", &context).is_none());
/// ```
pub fn parse_date(body: &str, context: &DateContext) -> Option<Timestamp> {
    if body.is_empty() {
        return None;
    }
    if let Ok(timestamp) = body.parse::<Timestamp>() {
        return Some(timestamp);
    }
    let date = parse_civil_date(body)?;
    context
        .tz
        .to_zoned(date.at(0, 0, 0, 0))
        .ok()
        .map(|zoned| zoned.timestamp())
}

fn parse_civil_date(body: &str) -> Option<Date> {
    let starts_with_year = body.len() > 4
        && body.chars().take(4).all(|c| c.is_ascii_digit())
        && matches!(body.chars().nth(4), Some('-' | '/' | '.'));
    if !starts_with_year {
        return None;
    }
    let format = match body.as_bytes()[4] {
        b'-' => "%Y-%m-%d",
        b'/' => "%Y/%m/%d",
        _ => "%Y.%m.%d",
    };
    Date::strptime(format, body).ok()
}

/// Formats a timestamp the way the search endpoint expects it: UTC with
/// millisecond precision.
pub fn to_iso_string(timestamp: Timestamp) -> String {
    timestamp.strftime("%Y-%m-%dT%H:%M:%S.%3fZ").to_string()
}

const MESSAGE_PATH_SEGMENT: &str = "messages";

/// Parses the body of a `citation:` filter: either a bare message id or a
/// permalink ending in `/messages/<id>`.
///
/// ```
/// use search_syntax::{parse_message_ref, MessageId};
///
/// let id = MessageId::from_u128(7);
/// assert_eq!(parse_message_ref(&id.to_string()), Some(id));
/// let link = format!("https://chat.example.com/messages/{id}");
/// assert_eq!(parse_message_ref(&link), Some(id));
/// assert_eq!(parse_message_ref("https://chat.example.com/channels/x"), None);
/// ```
pub fn parse_message_ref(body: &str) -> Option<MessageId> {
    if !body.contains('/') {
        return Uuid::parse_str(body).ok().map(MessageId);
    }
    let mut segments = body.trim_end_matches('/').rsplit('/');
    let id = segments.next()?;
    if segments.next()? != MESSAGE_PATH_SEGMENT {
        return None;
    }
    Uuid::parse_str(id).ok().map(MessageId)
}

/// Values accepted by `is:` / `-is:` / `not:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrFlag {
    Bot,
}

impl AttrFlag {
    pub fn from_body(body: &str) -> Option<Self> {
        match body {
            "bot" => Some(AttrFlag::Bot),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttrFlag::Bot => "bot",
        }
    }
}

/// Values accepted by `has:` / `-has:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFlag {
    Attachments,
    Image,
    Video,
    Audio,
}

impl MediaFlag {
    pub fn from_body(body: &str) -> Option<Self> {
        match body {
            "attachments" => Some(MediaFlag::Attachments),
            "image" => Some(MediaFlag::Image),
            "video" => Some(MediaFlag::Video),
            "audio" => Some(MediaFlag::Audio),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFlag::Attachments => "attachments",
            MediaFlag::Image => "image",
            MediaFlag::Video => "video",
            MediaFlag::Audio => "audio",
        }
    }
}

impl fmt::Display for AttrFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MediaFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn civil_date_separators() {
        let context = DateContext::utc();
        let expected = "2024-03-05T00:00:00.000Z";
        for body in ["2024-03-05", "2024/03/05", "2024.03.05"] {
            let ts = parse_date(body, &context).unwrap_or_else(|| panic!("{body}"));
            assert_eq!(to_iso_string(ts), expected, "{body}");
        }
    }

    #[test]
    fn day_first_dates_are_rejected() {
        let context = DateContext::utc();
        assert!(parse_date("05-03-2024", &context).is_none());
        assert!(parse_date("05/03/2024", &context).is_none());
    }

    #[test]
    fn invalid_calendar_dates_are_rejected() {
        let context = DateContext::utc();
        assert!(parse_date("2023-02-30", &context).is_none());
        assert!(parse_date("2023-13-01", &context).is_none());
        assert!(parse_date("2023-", &context).is_none());
        assert!(parse_date("", &context).is_none());
    }

    #[test]
    fn timestamps_keep_their_offset() {
        let context = DateContext::utc();
        let ts = parse_date("2024-01-01T09:30:00+09:00", &context).unwrap();
        assert_eq!(to_iso_string(ts), "2024-01-01T00:30:00.000Z");
        let ts = parse_date("2024-01-01T00:00:00.250Z", &context).unwrap();
        assert_eq!(to_iso_string(ts), "2024-01-01T00:00:00.250Z");
        let ts = parse_date("2024-01-01T00:00:00.2509Z", &context).unwrap();
        assert_eq!(to_iso_string(ts), "2024-01-01T00:00:00.250Z");
    }

    #[test]
    fn civil_dates_follow_the_context_zone() {
        let context = DateContext::new(TimeZone::fixed(jiff::tz::offset(9)));
        let ts = parse_date("2024-01-01", &context).unwrap();
        assert_eq!(to_iso_string(ts), "2023-12-31T15:00:00.000Z");
    }

    #[test]
    fn message_ref_requires_messages_segment() {
        let id = MessageId::from_u128(42);
        assert_eq!(
            parse_message_ref(&format!("https://q.example.com/messages/{id}/")),
            Some(id)
        );
        assert_eq!(
            parse_message_ref(&format!("https://q.example.com/files/{id}")),
            None
        );
        assert_eq!(parse_message_ref(""), None);
        assert_eq!(parse_message_ref("1234"), None);
    }

    #[test]
    fn flag_sets_are_closed_and_case_sensitive() {
        assert_eq!(AttrFlag::from_body("bot"), Some(AttrFlag::Bot));
        assert_eq!(AttrFlag::from_body("Bot"), None);
        assert_eq!(AttrFlag::from_body("human"), None);
        for flag in [
            MediaFlag::Attachments,
            MediaFlag::Image,
            MediaFlag::Video,
            MediaFlag::Audio,
        ] {
            assert_eq!(MediaFlag::from_body(flag.as_str()), Some(flag));
        }
        assert_eq!(MediaFlag::from_body("url"), None);
        assert_eq!(MediaFlag::from_body("attachment"), None);
    }
}
