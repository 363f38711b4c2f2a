//! Token source trait and implementations.

mod iter_token_source;
mod token_source_error;
mod token_source_trait;

pub use iter_token_source::IterTokenSource;
pub use token_source_error::TokenSourceError;
pub use token_source_trait::TokenSource;
