//! Reserved token type codes and channel numbers.
//!
//! Generated lexers number their own token types starting at
//! [`MIN_TOKEN_TYPE`]; everything below it is reserved by the runtime.

/// Type code that no real token carries. Returned by
/// [`IntStream::la()`](crate::IntStream::la) when there is no token to look
/// at.
pub const INVALID_TOKEN_TYPE: u32 = 0;

/// First type code available to user-defined token types.
pub const MIN_TOKEN_TYPE: u32 = 4;

/// Type code of the end-of-stream token.
pub const EOF_TOKEN_TYPE: u32 = u32::MAX;

/// The channel parsers listen on unless told otherwise.
pub const DEFAULT_CHANNEL: u32 = 0;

/// Conventional channel for whitespace and comments. No stream tunes to it
/// by default, so tokens routed here are invisible to lookahead while still
/// being buffered.
pub const HIDDEN_CHANNEL: u32 = 99;
