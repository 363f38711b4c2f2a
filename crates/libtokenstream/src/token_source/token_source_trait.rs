use crate::token::Token;

/// The lexer-facing producer of tokens, pulled on demand by a
/// [`CommonTokenStream`](crate::CommonTokenStream).
///
/// Implementors hand out tokens one at a time, in source order. All
/// lookahead, buffering, channel filtering and rewinding is handled by the
/// stream.
///
/// Token sources are responsible for:
/// - Never reordering tokens
/// - Terminating with an end-of-stream token (one whose
///   [`Token::is_eof()`] is `true`) and returning an end-of-stream token on
///   every call after that
/// - Returning `Err` for fatal lexing failures. The stream propagates these
///   unchanged and performs no recovery or retry of its own.
///
/// A source that neither returns end-of-stream nor fails will block the
/// stream that pulls from it forever. There is no timeout at this layer.
pub trait TokenSource {
    /// Fatal lexing failure.
    type Error;

    type Token: Token;

    /// Returns the next token in source order.
    fn next_token(&mut self) -> Result<Self::Token, Self::Error>;

    /// A name for the input this source reads from (typically a file path),
    /// if it has one.
    fn source_name(&self) -> Option<&str> {
        None
    }
}

impl<S: TokenSource + ?Sized> TokenSource for Box<S> {
    type Error = S::Error;
    type Token = S::Token;

    fn next_token(&mut self) -> Result<Self::Token, Self::Error> {
        (**self).next_token()
    }

    fn source_name(&self) -> Option<&str> {
        (**self).source_name()
    }
}
