//! Various test utils.

use crate::CommonTokenStream;
use crate::token::CommonToken;
use crate::token::HIDDEN_CHANNEL;
use crate::token::MIN_TOKEN_TYPE;
use crate::token::TokenSpan;
use crate::token_source::TokenSource;
use std::collections::VecDeque;

pub const ID: u32 = MIN_TOKEN_TYPE;
pub const WS: u32 = MIN_TOKEN_TYPE + 1;
pub const COMMENT: u32 = MIN_TOKEN_TYPE + 2;

/// Creates a mock token on the default channel with an empty span.
pub fn mock_token(token_type: u32, text: &str) -> CommonToken<'static> {
    CommonToken::new(token_type, text.to_string(), TokenSpan::default())
}

/// Creates a mock token on an explicit channel.
pub fn mock_token_on_channel(
    token_type: u32,
    channel: u32,
    text: &str,
) -> CommonToken<'static> {
    CommonToken::with_channel(
        token_type,
        channel,
        text.to_string(),
        TokenSpan::default(),
    )
}

/// Creates a whitespace token already routed to the hidden channel.
pub fn mock_hidden_ws() -> CommonToken<'static> {
    mock_token_on_channel(WS, HIDDEN_CHANNEL, " ")
}

pub fn mock_eof_token() -> CommonToken<'static> {
    CommonToken::eof(TokenSpan::default())
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MockLexError {
    #[error("unexpected character at pull {pull}")]
    UnexpectedCharacter { pull: usize },
}

/// A mock token source that hands out tokens from a Vec, then repeats an
/// end-of-stream token forever.
///
/// Counts how many times it has been pulled so tests can check how far the
/// stream fetched.
pub struct MockTokenSource {
    fail_at_pull: Option<usize>,
    pulls: usize,
    tokens: VecDeque<CommonToken<'static>>,
}

impl MockTokenSource {
    /// A source that fails with [`MockLexError`] on pull number
    /// `fail_at_pull` (0-based).
    pub fn failing_at(
        tokens: Vec<CommonToken<'static>>,
        fail_at_pull: usize,
    ) -> Self {
        Self {
            fail_at_pull: Some(fail_at_pull),
            ..Self::new(tokens)
        }
    }

    pub fn new(tokens: Vec<CommonToken<'static>>) -> Self {
        Self {
            fail_at_pull: None,
            pulls: 0,
            tokens: tokens.into(),
        }
    }

    pub fn pulls(&self) -> usize {
        self.pulls
    }
}

impl TokenSource for MockTokenSource {
    type Error = MockLexError;
    type Token = CommonToken<'static>;

    fn next_token(&mut self) -> Result<Self::Token, Self::Error> {
        let pull = self.pulls;
        self.pulls += 1;
        if self.fail_at_pull == Some(pull) {
            return Err(MockLexError::UnexpectedCharacter { pull });
        }
        Ok(self.tokens.pop_front().unwrap_or_else(mock_eof_token))
    }

    fn source_name(&self) -> Option<&str> {
        Some("mock")
    }
}

/// Builds a default-channel stream over `tokens` (end-of-stream appended
/// implicitly).
pub fn mock_stream(
    tokens: Vec<CommonToken<'static>>,
) -> CommonTokenStream<MockTokenSource> {
    CommonTokenStream::new(MockTokenSource::new(tokens))
}

/// The texts of a list of tokens, for compact assertions.
pub fn texts<'a>(
    tokens: impl IntoIterator<Item = &'a CommonToken<'static>>,
) -> Vec<&'a str> {
    tokens.into_iter().map(|token| &*token.text).collect()
}
