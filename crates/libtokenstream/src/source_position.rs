/// A location within the input a token was lexed from.
///
/// This is a pure data struct with no mutation methods. Token sources are
/// responsible for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the input
/// - `column`: character count within the current line
/// - `byte_offset`: byte offset within the whole input
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new `SourcePosition`.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `column`: 0-based character count within the current line
    /// - `byte_offset`: 0-based byte offset from the start of input
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Returns the 0-based byte offset from the start of input.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Returns the 0-based character count within the current line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }
}
