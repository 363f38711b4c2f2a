//! A token-buffering layer for generated parsers.
//!
//! [`CommonTokenStream`] sits between a lexer (any [`TokenSource`]) and a
//! parser. It pulls tokens on demand, keeps every retained token in an
//! append-only buffer so the parser can look arbitrarily far ahead and
//! rewind, hides tokens that are not on the parser's channel without
//! throwing them away, and reconstructs source text from token ranges.
//!
//! ```
//! use libtokenstream::CommonTokenStream;
//! use libtokenstream::token::CommonToken;
//! use libtokenstream::token::TokenSpan;
//! use libtokenstream::token_source::IterTokenSource;
//!
//! const ID: u32 = 4;
//! const WS: u32 = 5;
//!
//! let tok = |ty, text| CommonToken::new(ty, text, TokenSpan::default());
//! let source = IterTokenSource::new(vec![
//!     tok(ID, "a"),
//!     tok(WS, " "),
//!     tok(ID, "b"),
//!     CommonToken::eof(TokenSpan::default()),
//! ]);
//!
//! let mut stream = CommonTokenStream::new(source);
//! stream.set_token_type_channel(WS, libtokenstream::token::HIDDEN_CHANNEL);
//!
//! assert_eq!(stream.lt(2)?.map(|t| &*t.text), Some("b"));
//! assert_eq!(stream.text()?, "a b");
//! # Ok::<(), libtokenstream::token_source::TokenSourceError>(())
//! ```
//!
//! # Threading
//!
//! A stream is a single-consumer, synchronous, pull-based object with no
//! internal locking. Independent streams share no state and can be moved to
//! separate threads whenever their token source can.

mod common_token_stream;
mod common_token_stream_options;
mod int_stream;
mod source_position;
pub mod token;
pub mod token_source;
mod token_stream;

pub use common_token_stream::CommonTokenStream;
pub use common_token_stream_options::CommonTokenStreamOptions;
pub use int_stream::IntStream;
pub use source_position::SourcePosition;
pub use token_source::TokenSource;
pub use token_stream::TokenStream;

#[cfg(test)]
mod tests;
