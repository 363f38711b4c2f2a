use crate::token::Token;
use crate::token_source::TokenSource;
use crate::token_source::TokenSourceError;

/// Adapts any [`Iterator`] of tokens into a [`TokenSource`].
///
/// The first end-of-stream token the iterator yields is cached and handed
/// back on every later call, so the iterator itself does not have to repeat
/// it. Anything the iterator would produce after that token is never pulled.
///
/// If the iterator runs dry before yielding an end-of-stream token,
/// [`next_token()`](TokenSource::next_token) fails with
/// [`TokenSourceError::MissingEof`].
#[derive(Clone, Debug)]
pub struct IterTokenSource<I: Iterator> {
    eof_token: Option<I::Item>,
    source_name: Option<String>,
    tokens: I,
    tokens_produced: usize,
}

impl<I> IterTokenSource<I>
where
    I: Iterator,
    I::Item: Token,
{
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            eof_token: None,
            source_name: None,
            tokens: tokens.into_iter(),
            tokens_produced: 0,
        }
    }

    /// Number of non-end-of-stream tokens handed out so far.
    pub fn tokens_produced(&self) -> usize {
        self.tokens_produced
    }

    /// Attaches a source name (reported through
    /// [`TokenSource::source_name()`]).
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }
}

impl<I> TokenSource for IterTokenSource<I>
where
    I: Iterator,
    I::Item: Token,
{
    type Error = TokenSourceError;
    type Token = I::Item;

    fn next_token(&mut self) -> Result<Self::Token, Self::Error> {
        if let Some(eof_token) = &self.eof_token {
            return Ok(eof_token.clone());
        }

        match self.tokens.next() {
            Some(token) if token.is_eof() => {
                self.eof_token = Some(token.clone());
                Ok(token)
            },
            Some(token) => {
                self.tokens_produced += 1;
                Ok(token)
            },
            None => Err(TokenSourceError::MissingEof {
                tokens_produced: self.tokens_produced,
            }),
        }
    }

    fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }
}
