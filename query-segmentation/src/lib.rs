// `general` => Substr("general")
// `team/proj` => Suffix("team"), Prefix("proj")
// `gps/times/al` => Suffix("gps"), Exact("times"), Prefix("al")
// `gps\times` => Suffix("gps"), Prefix("times")
// `team/` => Suffix("team"), Prefix("")
// `/proj` => Suffix(""), Prefix("proj")
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'s> {
    Substr(&'s str),
    Prefix(&'s str),
    Suffix(&'s str),
    Exact(&'s str),
}

impl<'s> Segment<'s> {
    pub fn value(&self) -> &'s str {
        match self {
            Segment::Substr(value)
            | Segment::Prefix(value)
            | Segment::Suffix(value)
            | Segment::Exact(value) => value,
        }
    }

    /// Literal test of `candidate` against this segment. Callers normalize case
    /// on both sides beforehand.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Segment::Substr(needle) => candidate.contains(needle),
            Segment::Prefix(needle) => candidate.starts_with(needle),
            Segment::Suffix(needle) => candidate.ends_with(needle),
            Segment::Exact(needle) => candidate == *needle,
        }
    }
}

pub fn is_path_separator(ch: char) -> bool {
    matches!(ch, '/' | '\\')
}

/// Process a channel path query into segments.
///
/// Channel paths are matched top-down one tree level per segment: the first
/// segment may be the tail of a longer name, the last one may be the head of a
/// longer name, and everything in between must be a whole name.
pub fn query_segmentation(query: &str) -> Vec<Segment<'_>> {
    let segments: Vec<_> = query.split(is_path_separator).collect();
    let len = segments.len();
    // `split` never yields an empty iterator.
    if len == 1 {
        return vec![Segment::Substr(segments[0])];
    }
    segments
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            if i == 0 {
                Segment::Suffix(segment)
            } else if i == len - 1 {
                Segment::Prefix(segment)
            } else {
                Segment::Exact(segment)
            }
        })
        .collect()
}
