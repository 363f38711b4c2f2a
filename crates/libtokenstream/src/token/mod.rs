//! This module provides the token contract consumed by token streams, a
//! stock token implementation, and the reserved type/channel codes.

mod common_token;
mod token_span;
mod token_trait;
mod token_type;
mod token_type_set;

pub use common_token::CommonToken;
pub use token_span::TokenSpan;
pub use token_trait::Token;
pub use token_type::DEFAULT_CHANNEL;
pub use token_type::EOF_TOKEN_TYPE;
pub use token_type::HIDDEN_CHANNEL;
pub use token_type::INVALID_TOKEN_TYPE;
pub use token_type::MIN_TOKEN_TYPE;
pub use token_type_set::TokenTypeSet;
