use crate::SourcePosition;

/// Represents the span of a token from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the token
/// - `end_exclusive`: Position immediately after the last character of the
///   token
///
/// Fields are public to allow third-party `TokenSource` implementations to
/// easily construct spans directly.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct TokenSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl TokenSpan {
    pub fn new(
        start_inclusive: SourcePosition,
        end_exclusive: SourcePosition,
    ) -> Self {
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Number of bytes covered by this span.
    ///
    /// An inverted span (end before start) has length 0.
    pub fn byte_len(&self) -> usize {
        self.end_exclusive
            .byte_offset()
            .saturating_sub(self.start_inclusive.byte_offset())
    }
}
