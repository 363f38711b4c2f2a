use crate::token::EOF_TOKEN_TYPE;

/// Accessor contract for anything a [`TokenSource`](crate::TokenSource) can
/// produce and a [`CommonTokenStream`](crate::CommonTokenStream) can buffer.
///
/// The stream treats tokens as opaque values: it reads the type, channel and
/// text through this trait, and only ever writes two fields:
///
/// - the channel, when a channel override is installed for the token's type
/// - the index, which is set to the token's slot in the stream's buffer when
///   it is appended
///
/// The stream never changes a token's text.
pub trait Token: Clone {
    /// The channel this token is routed to.
    fn channel(&self) -> u32;

    /// Returns `true` if this is the end-of-stream marker.
    ///
    /// The default implementation compares against [`EOF_TOKEN_TYPE`].
    fn is_eof(&self) -> bool {
        self.token_type() == EOF_TOKEN_TYPE
    }

    fn set_channel(&mut self, channel: u32);

    fn set_token_index(&mut self, index: usize);

    /// The source text this token covers.
    fn text(&self) -> &str;

    /// The absolute index of this token within the buffer of the stream that
    /// retained it, or `None` if no stream has indexed it yet.
    fn token_index(&self) -> Option<usize>;

    /// The token's type code.
    fn token_type(&self) -> u32;
}
