/// Cursor operations shared by every stream a parser can consume from.
///
/// Positions are absolute indices into the stream's retained buffer.
/// Operations that may have to pull more input from the underlying source
/// are fallible and propagate the source's error unchanged.
pub trait IntStream {
    /// Fatal failure of whatever feeds this stream.
    type Error;

    /// Consumes the current symbol and advances to the next visible one.
    /// Consuming at end-of-stream is a no-op.
    fn consume(&mut self) -> Result<(), Self::Error>;

    /// Current cursor position.
    fn index(&self) -> usize;

    /// Type code of the symbol `i` positions ahead (`i = 1` is the next
    /// symbol), or of the `|i|`-th previous symbol for negative `i`.
    /// Returns [`INVALID_TOKEN_TYPE`](crate::token::INVALID_TOKEN_TYPE) where
    /// [`TokenStream::lt()`](crate::TokenStream::lt) would return `None`.
    fn la(&mut self, i: isize) -> Result<u32, Self::Error>;

    /// Records the current position so it can be returned to with
    /// [`rewind()`](Self::rewind) or
    /// [`rewind_to_last_mark()`](Self::rewind_to_last_mark).
    fn mark(&mut self) -> Result<usize, Self::Error>;

    /// Tells the stream a marker is no longer needed.
    fn release(&mut self, marker: usize);

    /// Returns to a position previously obtained from [`mark()`](Self::mark).
    fn rewind(&mut self, marker: usize) -> Result<(), Self::Error>;

    /// Returns to the position recorded by the most recent
    /// [`mark()`](Self::mark).
    fn rewind_to_last_mark(&mut self) -> Result<(), Self::Error>;

    /// Moves the cursor to the first visible symbol at or after `index`.
    fn seek(&mut self, index: usize) -> Result<(), Self::Error>;

    /// Number of symbols retained so far.
    fn size(&self) -> usize;

    /// Name of the input this stream reads from, if known.
    fn source_name(&self) -> Option<&str>;
}
