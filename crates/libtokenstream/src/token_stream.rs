use crate::IntStream;
use crate::token::Token;
use crate::token_source::TokenSource;

/// A cursor-based, random-access view over a [`TokenSource`].
///
/// Parsers are written against this trait so that the buffering and
/// filtering policy behind it can vary.
/// [`CommonTokenStream`](crate::CommonTokenStream) is the stock
/// implementation.
pub trait TokenStream: IntStream {
    type Source: TokenSource<Token = Self::Token, Error = Self::Error>;
    type Token: Token;

    /// Absolute, channel-agnostic access to the token at buffer index `i`.
    ///
    /// Fills the buffer up to `i` if needed. Returns `None` if the source
    /// ends before index `i` exists.
    fn get(&mut self, i: usize) -> Result<Option<&Self::Token>, Self::Error>;

    /// Lookahead/lookbehind relative to the cursor.
    ///
    /// - `k > 0`: the `k`-th visible token ahead (`lt(1)` is the next token
    ///   to be consumed). Returns the end-of-stream token if fewer than `k`
    ///   remain. Never moves the cursor.
    /// - `k < 0`: the `|k|`-th previously consumed visible token, or `None`
    ///   if that would be before the start of the buffer.
    /// - `k == 0`: undefined; always `None`.
    fn lt(&mut self, k: isize) -> Result<Option<&Self::Token>, Self::Error>;

    /// Installs a new token source and returns the previous one.
    ///
    /// Buffered tokens, the cursor and markers are reset. The channel the
    /// stream is tuned to is kept, not reset to the default channel, and so
    /// is any implementation-specific filtering policy.
    fn set_token_source(&mut self, source: Self::Source) -> Self::Source;

    /// Concatenated text of every token the source will ever produce,
    /// in buffer order.
    ///
    /// This drains the source to end-of-stream first, so it is a full
    /// materialization of the input, not an O(1) query.
    fn text(&mut self) -> Result<String, Self::Error>;

    /// Text between two tokens, inclusive, using each token's own buffer
    /// index. Empty if either token has no index.
    fn text_between(
        &mut self,
        start: &Self::Token,
        stop: &Self::Token,
    ) -> Result<String, Self::Error>;

    /// Concatenated text of the tokens at absolute indices `start..=stop`,
    /// regardless of channel. Empty if `stop < start` or if `start` lies
    /// beyond the end of input.
    fn text_range(
        &mut self,
        start: usize,
        stop: usize,
    ) -> Result<String, Self::Error>;

    fn token_source(&self) -> &Self::Source;

    fn token_source_mut(&mut self) -> &mut Self::Source;
}
