//! Media type classification.
//!
//! # Responsibilities
//! - Parse the `type/subtype` part of a Content-Type value
//! - Decide whether a body is sent as text or base64
//!
//! # Design Decisions
//! - Classification is driven solely by the declared content type, never by sniffing
//! - Missing or malformed content types are treated as binary
//! - The textual set is an immutable lookup table, extendable only at construction

use std::fmt;
use std::str::FromStr;

/// How a body is represented in the gateway payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyEncoding {
    /// UTF-8 text, passed through unchanged.
    Text,
    /// Raw bytes, standard base64.
    Base64,
}

impl BodyEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyEncoding::Text => "text",
            BodyEncoding::Base64 => "base64",
        }
    }
}

/// A parsed `type/subtype` pair, lowercased, without parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    top_level: String,
    subtype: String,
}

impl MediaType {
    pub fn top_level(&self) -> &str {
        &self.top_level
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Parse a Content-Type header value, ignoring any parameters.
    pub fn parse(value: &str) -> Option<Self> {
        let essence = value.split(';').next()?.trim();
        let (top_level, subtype) = essence.split_once('/')?;
        let (top_level, subtype) = (top_level.trim(), subtype.trim());

        if !is_token(top_level) || !is_token(subtype) {
            return None;
        }

        Some(Self {
            top_level: top_level.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
        })
    }
}

impl FromStr for MediaType {
    type Err = InvalidMediaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidMediaType(s.to_string()))
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.top_level, self.subtype)
    }
}

/// Returned when a string is not a `type/subtype` media type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid media type: {0:?}")]
pub struct InvalidMediaType(pub String);

// RFC 9110 token characters.
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
        })
}

/// One entry of the textual table: an exact type or a `type/*` wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRange {
    top_level: String,
    subtype: Option<String>,
}

impl MediaRange {
    fn matches(&self, media_type: &MediaType) -> bool {
        self.top_level == media_type.top_level
            && self
                .subtype
                .as_deref()
                .map_or(true, |subtype| subtype == media_type.subtype)
    }
}

impl FromStr for MediaRange {
    type Err = InvalidMediaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let media_type: MediaType = s.parse()?;
        if media_type.top_level == "*" {
            return Err(InvalidMediaType(s.to_string()));
        }
        let subtype = (media_type.subtype != "*").then_some(media_type.subtype);
        Ok(Self {
            top_level: media_type.top_level,
            subtype,
        })
    }
}

/// Media types whose bodies are sent as UTF-8 text.
pub const DEFAULT_TEXTUAL_MEDIA_TYPES: &[&str] = &[
    "text/*",
    "application/json",
    "application/x-www-form-urlencoded",
];

/// Lookup table deciding between text and base64 bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextualMediaTypes {
    ranges: Vec<MediaRange>,
}

impl TextualMediaTypes {
    /// Default table extended with `extra` ranges such as `application/xml`.
    pub fn with_extra<'a>(
        extra: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, InvalidMediaType> {
        let mut table = Self::default();
        for range in extra {
            table.ranges.push(range.parse()?);
        }
        Ok(table)
    }

    pub fn is_textual(&self, media_type: &MediaType) -> bool {
        self.ranges.iter().any(|range| range.matches(media_type))
    }

    /// Classify a Content-Type header value. `None` means the header is absent.
    pub fn classify(&self, content_type: Option<&str>) -> BodyEncoding {
        match content_type.and_then(MediaType::parse) {
            Some(media_type) if self.is_textual(&media_type) => BodyEncoding::Text,
            _ => BodyEncoding::Base64,
        }
    }
}

impl Default for TextualMediaTypes {
    fn default() -> Self {
        let ranges = DEFAULT_TEXTUAL_MEDIA_TYPES
            .iter()
            .filter_map(|range| range.parse().ok())
            .collect();
        Self { ranges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_parameters() {
        let media_type = MediaType::parse("Application/JSON; charset=utf-8").unwrap();
        assert_eq!(media_type.top_level(), "application");
        assert_eq!(media_type.subtype(), "json");
        assert_eq!(media_type.to_string(), "application/json");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(MediaType::parse("").is_none());
        assert!(MediaType::parse("json").is_none());
        assert!(MediaType::parse("text/").is_none());
        assert!(MediaType::parse("/plain").is_none());
        assert!(MediaType::parse("text/pl ain").is_none());
    }

    #[test]
    fn test_default_classification() {
        let table = TextualMediaTypes::default();

        assert_eq!(table.classify(Some("text/plain")), BodyEncoding::Text);
        assert_eq!(table.classify(Some("text/html; charset=utf-8")), BodyEncoding::Text);
        assert_eq!(table.classify(Some("application/json")), BodyEncoding::Text);
        assert_eq!(
            table.classify(Some("application/x-www-form-urlencoded")),
            BodyEncoding::Text
        );

        assert_eq!(table.classify(Some("image/png")), BodyEncoding::Base64);
        assert_eq!(table.classify(Some("application/octet-stream")), BodyEncoding::Base64);
        assert_eq!(table.classify(Some("application/xml")), BodyEncoding::Base64);
        assert_eq!(table.classify(None), BodyEncoding::Base64);
    }

    #[test]
    fn test_malformed_content_type_is_binary() {
        let table = TextualMediaTypes::default();
        assert_eq!(table.classify(Some("text")), BodyEncoding::Base64);
        assert_eq!(table.classify(Some(";charset=utf-8")), BodyEncoding::Base64);
    }

    #[test]
    fn test_extra_ranges() {
        let table = TextualMediaTypes::with_extra(["application/xml", "font/*"]).unwrap();
        assert_eq!(table.classify(Some("application/xml")), BodyEncoding::Text);
        assert_eq!(table.classify(Some("font/woff2")), BodyEncoding::Text);
        assert_eq!(table.classify(Some("application/pdf")), BodyEncoding::Base64);
    }

    #[test]
    fn test_invalid_extra_range() {
        let err = TextualMediaTypes::with_extra(["*/*"]).unwrap_err();
        assert_eq!(err, InvalidMediaType("*/*".into()));
        assert!(TextualMediaTypes::with_extra(["xml"]).is_err());
    }
}
