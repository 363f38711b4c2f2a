//! Channel-filtering token buffer that produces tokens from some
//! [`TokenSource`] with unbounded lookahead and rewind.

use crate::CommonTokenStreamOptions;
use crate::IntStream;
use crate::TokenStream;
use crate::token::INVALID_TOKEN_TYPE;
use crate::token::Token;
use crate::token::TokenTypeSet;
use crate::token_source::TokenSource;
use indexmap::IndexMap;
use indexmap::IndexSet;
use inherent::inherent;

/// Channel-filtering token buffer over a [`TokenSource`].
///
/// The stream pulls tokens from its source lazily, only as far as the
/// current request needs, and retains every token it keeps in an
/// append-only buffer. Parsers see only the tokens on the channel the stream
/// is tuned to; tokens on other channels stay in the buffer (unless
/// configured otherwise) so that text reconstruction still covers them.
///
/// # Internal Buffer Management
///
/// Tokens are stored in a [`Vec`] that only ever grows by pushing to the
/// back. A token's index in that `Vec` is its absolute index: it is written
/// into the token when it is appended and never changes afterwards, so
/// [`get()`](Self::get) and the range operations are stable for the
/// lifetime of the stream. The cursor is an index into the same `Vec`.
///
/// The end-of-stream token is never appended. It is cached when the source
/// first reports it and returned for any lookahead past the last buffered
/// token; the source is not pulled again after that.
///
/// # Fetch Policy
///
/// Each token pulled from the source is, in order:
///
/// 1. moved to its override channel, if its type has a channel override
/// 2. dropped, if its type is discarded
/// 3. dropped, if off-channel tokens are being discarded and its channel is
///    not the stream's channel
/// 4. otherwise appended to the buffer
///
/// Dropped tokens never receive an index. Policy changes affect only tokens
/// fetched after the change; tokens already buffered are never
/// reclassified.
///
/// # Type Parameters
///
/// * `S` - The underlying token source. Its error type is what every
///   fallible stream operation returns, unchanged.
#[derive(Debug)]
pub struct CommonTokenStream<S: TokenSource> {
    channel: u32,
    channel_overrides: IndexMap<u32, u32>,
    discard_off_channel: bool,
    discarded_token_types: IndexSet<u32>,
    eof_token: Option<S::Token>,
    last_marker: usize,
    /// Index of the next token to be consumed. `None` until the first
    /// request initializes it; afterwards it always names an on-channel
    /// token or equals `tokens.len()` (end-of-stream).
    p: Option<usize>,
    token_source: S,
    tokens: Vec<S::Token>,
}

impl<S: TokenSource> CommonTokenStream<S> {
    /// The channel this stream is tuned to.
    pub fn channel(&self) -> u32 {
        self.channel
    }

    /// The forced channel for `token_type`, if one is installed.
    pub fn channel_override(&self, token_type: u32) -> Option<u32> {
        self.channel_overrides.get(&token_type).copied()
    }

    /// Adds `token_type` to the discard set. Tokens of this type fetched
    /// from now on are dropped before they reach the buffer.
    pub fn discard_token_type(&mut self, token_type: u32) {
        if self.discarded_token_types.insert(token_type) {
            log::debug!("Discarding token type {token_type} from now on.");
        }
    }

    /// Whether tokens off the tuned channel are dropped at fetch time.
    pub fn discards_off_channel_tokens(&self) -> bool {
        self.discard_off_channel
    }

    /// Pulls from the source until one token has been appended to the
    /// buffer or end-of-stream is reached.
    ///
    /// Returns `false` once end-of-stream has been reached.
    fn fetch(&mut self) -> Result<bool, S::Error> {
        while self.eof_token.is_none() {
            let mut token = self.token_source.next_token()?;
            if token.is_eof() {
                log::trace!(
                    "Token source reached end-of-stream after {} buffered \
                    token(s).",
                    self.tokens.len(),
                );
                token.set_token_index(self.tokens.len());
                self.eof_token = Some(token);
                break;
            }

            let token_type = token.token_type();
            if let Some(&channel) = self.channel_overrides.get(&token_type) {
                token.set_channel(channel);
            }

            if self.discarded_token_types.contains(&token_type) {
                log::trace!("Dropped token of discarded type {token_type}.");
                continue;
            }

            if self.discard_off_channel && token.channel() != self.channel {
                log::trace!(
                    "Dropped off-channel token of type {token_type} \
                    (channel {}).",
                    token.channel(),
                );
                continue;
            }

            token.set_token_index(self.tokens.len());
            self.tokens.push(token);
            return Ok(true);
        }
        Ok(false)
    }

    /// Drains the token source to end-of-stream.
    pub fn fill(&mut self) -> Result<(), S::Error> {
        while self.fetch()? {}
        Ok(())
    }

    /// Consumes the stream and returns its token source.
    pub fn into_token_source(self) -> S {
        self.token_source
    }

    /// Returns `true` if the next token to be consumed is the end-of-stream
    /// token.
    pub fn is_at_end(&mut self) -> Result<bool, S::Error> {
        Ok(self.lt(1)?.is_none_or(|token| token.is_eof()))
    }

    /// Whether tokens of `token_type` are dropped at fetch time.
    pub fn is_token_type_discarded(&self, token_type: u32) -> bool {
        self.discarded_token_types.contains(&token_type)
    }

    /// Lookbehind: the `k`-th on-channel token before the cursor.
    fn lb(&mut self, k: usize) -> Result<Option<&S::Token>, S::Error> {
        let mut i = self.setup()?;
        for _ in 0..k {
            let Some(prev) = i.checked_sub(1) else {
                return Ok(None);
            };
            match self.skip_off_channel_reverse(prev) {
                Some(on_channel) => i = on_channel,
                None => return Ok(None),
            }
        }
        Ok(self.tokens.get(i))
    }

    /// Creates a stream tuned to the
    /// [`DEFAULT_CHANNEL`](crate::token::DEFAULT_CHANNEL) with no overrides
    /// and no discards.
    pub fn new(token_source: S) -> Self {
        Self::with_options(token_source, CommonTokenStreamOptions::new())
    }

    /// Starts (or stops) dropping off-channel tokens at fetch time instead
    /// of buffering them.
    pub fn set_discard_off_channel_tokens(&mut self, discard: bool) {
        log::debug!("Discard off-channel tokens: {discard}.");
        self.discard_off_channel = discard;
    }

    /// Installs (or replaces) a channel override: every token of
    /// `token_type` fetched from now on is moved to `channel` before any
    /// other policy is applied.
    pub fn set_token_type_channel(&mut self, token_type: u32, channel: u32) {
        log::debug!(
            "Overriding channel of token type {token_type} to {channel}."
        );
        self.channel_overrides.insert(token_type, channel);
    }

    /// Positions the cursor on the first on-channel token if that has not
    /// happened yet. Returns the cursor.
    fn setup(&mut self) -> Result<usize, S::Error> {
        match self.p {
            Some(p) => Ok(p),
            None => {
                let p = self.skip_off_channel(0)?;
                self.p = Some(p);
                Ok(p)
            },
        }
    }

    /// Index of the first on-channel token at or after `i`, fetching as
    /// needed. Returns `tokens.len()` if the source ends first.
    fn skip_off_channel(&mut self, mut i: usize) -> Result<usize, S::Error> {
        while self.sync(i)? {
            if self.tokens[i].channel() == self.channel {
                return Ok(i);
            }
            i += 1;
        }
        Ok(self.tokens.len())
    }

    /// Index of the last on-channel token at or before `i`.
    fn skip_off_channel_reverse(&self, i: usize) -> Option<usize> {
        let last = i.min(self.tokens.len().checked_sub(1)?);
        (0..=last)
            .rev()
            .find(|&idx| self.tokens[idx].channel() == self.channel)
    }

    /// Makes sure buffer index `i` exists. Returns `false` if the source
    /// ended before it could.
    fn sync(&mut self, i: usize) -> Result<bool, S::Error> {
        while self.tokens.len() <= i {
            if !self.fetch()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the buffered tokens at absolute indices `start..=stop`.
    ///
    /// Fills the buffer up to `stop` and no further. `stop` is clamped to
    /// the last token the source produced. The result is empty if
    /// `stop < start` or `start` lies beyond the end of input.
    pub fn token_range(
        &mut self,
        start: usize,
        stop: usize,
    ) -> Result<&[S::Token], S::Error> {
        if stop < start {
            return Ok(&[]);
        }
        self.sync(stop)?;
        if start >= self.tokens.len() {
            return Ok(&[]);
        }
        let stop = stop.min(self.tokens.len() - 1);
        Ok(&self.tokens[start..=stop])
    }

    /// Returns every token in the stream, draining the source first.
    pub fn tokens(&mut self) -> Result<&[S::Token], S::Error> {
        self.fill()?;
        Ok(&self.tokens)
    }

    /// Tokens in `start..=stop` whose type is a member of `types`.
    pub fn tokens_in_set(
        &mut self,
        start: usize,
        stop: usize,
        types: &TokenTypeSet,
    ) -> Result<Vec<&S::Token>, S::Error> {
        self.tokens_matching(start, stop, |token_type| {
            types.contains(token_type)
        })
    }

    /// Every token up to `stop` (inclusive) for which `matches` holds,
    /// starting at `start`.
    fn tokens_matching(
        &mut self,
        start: usize,
        stop: usize,
        matches: impl Fn(u32) -> bool,
    ) -> Result<Vec<&S::Token>, S::Error> {
        Ok(self
            .token_range(start, stop)?
            .iter()
            .filter(|token| matches(token.token_type()))
            .collect())
    }

    /// Tokens in `start..=stop` of exactly `token_type`.
    pub fn tokens_of_type(
        &mut self,
        start: usize,
        stop: usize,
        token_type: u32,
    ) -> Result<Vec<&S::Token>, S::Error> {
        self.tokens_matching(start, stop, |ty| ty == token_type)
    }

    /// Tokens in `start..=stop` whose type appears in `types`.
    pub fn tokens_of_types(
        &mut self,
        start: usize,
        stop: usize,
        types: &[u32],
    ) -> Result<Vec<&S::Token>, S::Error> {
        self.tokens_matching(start, stop, |ty| types.contains(&ty))
    }

    /// Creates a stream tuned to `channel` with no overrides and no
    /// discards.
    pub fn with_channel(token_source: S, channel: u32) -> Self {
        Self::with_options(
            token_source,
            CommonTokenStreamOptions::new().with_channel(channel),
        )
    }

    /// Creates a stream seeded with the given policy.
    pub fn with_options(
        token_source: S,
        options: CommonTokenStreamOptions,
    ) -> Self {
        Self {
            channel: options.channel,
            channel_overrides: options.channel_overrides,
            discard_off_channel: options.discard_off_channel,
            discarded_token_types: options.discarded_token_types,
            eof_token: None,
            last_marker: 0,
            p: None,
            token_source,
            tokens: Vec::new(),
        }
    }
}

#[inherent]
impl<S: TokenSource> IntStream for CommonTokenStream<S> {
    type Error = S::Error;

    pub fn consume(&mut self) -> Result<(), S::Error> {
        let p = self.setup()?;
        if p < self.tokens.len() {
            self.p = Some(self.skip_off_channel(p + 1)?);
        }
        Ok(())
    }

    /// Current cursor position. Before the first request this is 0.
    pub fn index(&self) -> usize {
        self.p.unwrap_or(0)
    }

    pub fn la(&mut self, i: isize) -> Result<u32, S::Error> {
        Ok(self
            .lt(i)?
            .map_or(INVALID_TOKEN_TYPE, |token| token.token_type()))
    }

    pub fn mark(&mut self) -> Result<usize, S::Error> {
        self.last_marker = self.setup()?;
        Ok(self.last_marker)
    }

    /// Every token is retained for the lifetime of the stream, so releasing
    /// a marker frees nothing.
    pub fn release(&mut self, _marker: usize) {}

    pub fn rewind(&mut self, marker: usize) -> Result<(), S::Error> {
        self.seek(marker)
    }

    pub fn rewind_to_last_mark(&mut self) -> Result<(), S::Error> {
        self.seek(self.last_marker)
    }

    /// Moves the cursor to the first on-channel token at or after `index`,
    /// fetching as needed. Seeking past the end parks the cursor at
    /// end-of-stream.
    pub fn seek(&mut self, index: usize) -> Result<(), S::Error> {
        self.p = Some(self.skip_off_channel(index)?);
        Ok(())
    }

    /// Number of tokens buffered so far. Never fetches.
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    pub fn source_name(&self) -> Option<&str> {
        self.token_source.source_name()
    }
}

#[inherent]
impl<S: TokenSource> TokenStream for CommonTokenStream<S> {
    type Source = S;
    type Token = S::Token;

    pub fn get(&mut self, i: usize) -> Result<Option<&S::Token>, S::Error> {
        self.sync(i)?;
        Ok(self.tokens.get(i))
    }

    pub fn lt(&mut self, k: isize) -> Result<Option<&S::Token>, S::Error> {
        if k == 0 {
            return Ok(None);
        }
        if k < 0 {
            return self.lb(k.unsigned_abs());
        }

        let mut i = self.setup()?;
        for _ in 1..k {
            if i >= self.tokens.len() {
                break;
            }
            i = self.skip_off_channel(i + 1)?;
        }
        Ok(self.tokens.get(i).or(self.eof_token.as_ref()))
    }

    /// Installs a new token source and returns the previous one.
    ///
    /// The buffer, cursor and markers are reset; the tuned channel and every
    /// policy setting carry over to the new source.
    pub fn set_token_source(&mut self, source: S) -> S {
        log::debug!(
            "Replacing token source; dropping {} buffered token(s).",
            self.tokens.len(),
        );
        self.tokens.clear();
        self.eof_token = None;
        self.last_marker = 0;
        self.p = None;
        std::mem::replace(&mut self.token_source, source)
    }

    pub fn text(&mut self) -> Result<String, S::Error> {
        Ok(self.tokens()?.iter().map(Token::text).collect())
    }

    pub fn text_between(
        &mut self,
        start: &S::Token,
        stop: &S::Token,
    ) -> Result<String, S::Error> {
        match (start.token_index(), stop.token_index()) {
            (Some(start), Some(stop)) => self.text_range(start, stop),
            _ => Ok(String::new()),
        }
    }

    pub fn text_range(
        &mut self,
        start: usize,
        stop: usize,
    ) -> Result<String, S::Error> {
        Ok(self
            .token_range(start, stop)?
            .iter()
            .map(Token::text)
            .collect())
    }

    pub fn token_source(&self) -> &S {
        &self.token_source
    }

    pub fn token_source_mut(&mut self) -> &mut S {
        &mut self.token_source
    }
}
