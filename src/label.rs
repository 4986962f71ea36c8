// 🗂️ Detailed Label - hierarchical category path
//
// "food and drink=>restaurants=>sushi" is stored as three segments.
// The joined string is the canonical shape; older records stored the
// segments as a list, so deserialization accepts both.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Separator between path segments in the joined form
pub const SEPARATOR: &str = "=>";

// ============================================================================
// DETAILED LABEL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetailedLabel {
    segments: Vec<String>,
}

impl DetailedLabel {
    /// Split a joined label on `=>`. A string without a separator is a
    /// single-segment path.
    pub fn parse(joined: &str) -> Self {
        DetailedLabel {
            segments: joined.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Build from explicit segments. Returns `None` for an empty list or
    /// when a segment contains `=>`, since the joined form could not be read
    /// back as the same path.
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || segments.iter().any(|segment| segment.contains(SEPARATOR)) {
            None
        } else {
            Some(DetailedLabel { segments })
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Top-level segment (always present)
    pub fn first(&self) -> &str {
        &self.segments[0]
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn joined(&self) -> String {
        self.segments.join(SEPARATOR)
    }

    /// True when the path's first segment is exactly `label`
    pub fn starts_with_label(&self, label: &str) -> bool {
        self.first() == label
    }
}

impl fmt::Display for DetailedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl PartialEq<str> for DetailedLabel {
    fn eq(&self, other: &str) -> bool {
        let mut parts = other.split(SEPARATOR);
        self.segments.iter().all(|segment| parts.next() == Some(segment.as_str()))
            && parts.next().is_none()
    }
}

impl PartialEq<&str> for DetailedLabel {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

// ============================================================================
// SERDE
// ============================================================================

impl Serialize for DetailedLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelRepr {
    Joined(String),
    Segments(Vec<String>),
}

impl<'de> Deserialize<'de> for DetailedLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match LabelRepr::deserialize(deserializer)? {
            LabelRepr::Joined(joined) => Ok(DetailedLabel::parse(&joined)),
            LabelRepr::Segments(segments) => DetailedLabel::from_segments(segments).ok_or_else(|| {
                serde::de::Error::custom("detailed label needs at least one segment and no segment may contain `=>`")
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_separator() {
        let label = DetailedLabel::parse("food and drink=>restaurants=>sushi");

        assert_eq!(label.depth(), 3);
        assert_eq!(label.first(), "food and drink");
        assert_eq!(label.segments()[2], "sushi");
        assert_eq!(label.joined(), "food and drink=>restaurants=>sushi");
    }

    #[test]
    fn test_single_segment() {
        let label = DetailedLabel::parse("payment");
        assert_eq!(label.depth(), 1);
        assert!(label.starts_with_label("payment"));
        assert_eq!(label, "payment");
    }

    #[test]
    fn test_compares_with_joined_str() {
        let label = DetailedLabel::parse("service=>utilities=>electric");
        assert_eq!(label, "service=>utilities=>electric");
        assert_ne!(label, "service=>utilities");
        assert_ne!(label, "service=>utilities=>electric=>more");
    }

    #[test]
    fn test_starts_with_label_is_segment_exact() {
        let label = DetailedLabel::parse("shops=>bookstores");
        assert!(label.starts_with_label("shops"));
        assert!(!label.starts_with_label("shop"));
    }

    #[test]
    fn test_serializes_as_joined_string() {
        let label = DetailedLabel::parse("travel=>parking");
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"travel=>parking\"");
    }

    #[test]
    fn test_deserializes_both_shapes() {
        let from_string: DetailedLabel = serde_json::from_str("\"travel=>rail\"").unwrap();
        let from_list: DetailedLabel = serde_json::from_str("[\"travel\", \"rail\"]").unwrap();

        assert_eq!(from_string, from_list);
    }

    #[test]
    fn test_rejects_empty_list() {
        let result: Result<DetailedLabel, _> = serde_json::from_str("[]");
        assert!(result.is_err());
        assert!(DetailedLabel::from_segments(Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_rejects_segment_containing_separator() {
        assert!(DetailedLabel::from_segments(["a=>b", "c"]).is_none());

        let result: Result<DetailedLabel, _> = serde_json::from_str("[\"a=>b\", \"c\"]");
        assert!(result.is_err());
    }

    #[test]
    fn test_list_shape_survives_string_round_trip() {
        let label: DetailedLabel = serde_json::from_str("[\"shops\", \"bookstores\"]").unwrap();
        let json = serde_json::to_string(&label).unwrap();
        let back: DetailedLabel = serde_json::from_str(&json).unwrap();

        assert_eq!(back, label);
        assert_eq!(back.depth(), 2);
        assert_eq!(label, label.to_string().as_str());
    }
}
