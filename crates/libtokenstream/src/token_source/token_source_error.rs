/// Errors raised by the token sources in this crate.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TokenSourceError {
    /// The underlying token iterator ran dry without ever yielding an
    /// end-of-stream token, so there is nothing to report as the end of
    /// input.
    #[error(
        "token source ended after {tokens_produced} token(s) without \
        producing an end-of-stream token"
    )]
    MissingEof {
        tokens_produced: usize,
    },
}
