use crate::token::DEFAULT_CHANNEL;
use crate::token::EOF_TOKEN_TYPE;
use crate::token::Token;
use crate::token::TokenSpan;
use std::borrow::Cow;
use std::fmt;

/// The stock [`Token`] implementation: a type code, a channel, an optional
/// buffer index, the covered text and its source span.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: a token source over a `&str`
/// can borrow each token's text straight out of the input with
/// `Cow::Borrowed`, while sources that have to synthesize text (or outlive
/// their input) use `Cow::Owned` and `'static`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct CommonToken<'src> {
    /// The token's type code.
    pub token_type: u32,

    /// The channel the token is routed to.
    pub channel: u32,

    /// Slot in the buffer of the stream that retained this token. `None`
    /// until a stream has appended it.
    pub index: Option<usize>,

    /// The source text covered by this token.
    #[serde(borrow)]
    pub text: Cow<'src, str>,

    /// The source location span of this token.
    pub span: TokenSpan,
}

impl<'src> CommonToken<'src> {
    /// Creates an end-of-stream token with the conventional `<EOF>` text.
    pub fn eof(span: TokenSpan) -> Self {
        Self::new(EOF_TOKEN_TYPE, Cow::Borrowed("<EOF>"), span)
    }

    /// Convenience constructor for a token on the [`DEFAULT_CHANNEL`].
    pub fn new(
        token_type: u32,
        text: impl Into<Cow<'src, str>>,
        span: TokenSpan,
    ) -> Self {
        Self {
            token_type,
            channel: DEFAULT_CHANNEL,
            index: None,
            text: text.into(),
            span,
        }
    }

    /// Convenience constructor for a token on an explicit channel.
    pub fn with_channel(
        token_type: u32,
        channel: u32,
        text: impl Into<Cow<'src, str>>,
        span: TokenSpan,
    ) -> Self {
        Self {
            channel,
            ..Self::new(token_type, text, span)
        }
    }

    /// Detaches this token from the input it was lexed from.
    pub fn into_owned(self) -> CommonToken<'static> {
        CommonToken {
            token_type: self.token_type,
            channel: self.channel,
            index: self.index,
            text: Cow::Owned(self.text.into_owned()),
            span: self.span,
        }
    }
}

impl Token for CommonToken<'_> {
    fn channel(&self) -> u32 {
        self.channel
    }

    fn set_channel(&mut self, channel: u32) {
        self.channel = channel;
    }

    fn set_token_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn token_index(&self) -> Option<usize> {
        self.index
    }

    fn token_type(&self) -> u32 {
        self.token_type
    }
}

/// Debugging form: `[@index,'text',<type>,channel=N,line:column]`.
///
/// An unset index prints as `-1`, `channel=` is only printed for tokens off
/// the default channel, and the line is printed 1-based.
impl fmt::Display for CommonToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "[@{index},")?,
            None => write!(f, "[@-1,")?,
        }

        f.write_str("'")?;
        for ch in self.text.chars() {
            match ch {
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                other => write!(f, "{other}")?,
            }
        }
        f.write_str("',")?;

        if self.token_type == EOF_TOKEN_TYPE {
            f.write_str("<EOF>")?;
        } else {
            write!(f, "<{}>", self.token_type)?;
        }

        if self.channel != DEFAULT_CHANNEL {
            write!(f, ",channel={}", self.channel)?;
        }

        let start = &self.span.start_inclusive;
        write!(f, ",{}:{}]", start.line() + 1, start.column())
    }
}
