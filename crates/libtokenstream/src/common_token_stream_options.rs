use crate::token::DEFAULT_CHANNEL;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// Initial configuration for a [`CommonTokenStream`](crate::CommonTokenStream).
///
/// Everything here can also be changed on a live stream through its policy
/// mutators; these options only seed the stream before the first token is
/// fetched.
///
/// # Default Values
///
/// | Setting | Default |
/// |---------|---------|
/// | `channel` | [`DEFAULT_CHANNEL`] (0) |
/// | `discard_off_channel` | `false` |
/// | `channel_overrides` | empty |
/// | `discarded_token_types` | empty |
///
/// # Example
///
/// ```
/// use libtokenstream::CommonTokenStreamOptions;
/// use libtokenstream::token::HIDDEN_CHANNEL;
///
/// const WS: u32 = 4;
/// const COMMENT: u32 = 5;
///
/// let options = CommonTokenStreamOptions::new()
///     .with_token_type_channel(WS, HIDDEN_CHANNEL)
///     .with_discarded_token_type(COMMENT);
/// assert_eq!(options.channel_overrides.get(&WS), Some(&HIDDEN_CHANNEL));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct CommonTokenStreamOptions {
    /// The channel the stream is tuned to. Only tokens on this channel are
    /// visible to lookahead.
    pub channel: u32,

    /// When `true`, tokens whose (possibly overridden) channel differs from
    /// `channel` are dropped at fetch time instead of being buffered.
    pub discard_off_channel: bool,

    /// Token type to forced channel.
    pub channel_overrides: IndexMap<u32, u32>,

    /// Token types that are always dropped at fetch time.
    pub discarded_token_types: IndexSet<u32>,
}

impl Default for CommonTokenStreamOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CommonTokenStreamOptions {
    pub fn new() -> Self {
        Self {
            channel: DEFAULT_CHANNEL,
            discard_off_channel: false,
            channel_overrides: IndexMap::new(),
            discarded_token_types: IndexSet::new(),
        }
    }

    pub fn with_channel(mut self, channel: u32) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_discard_off_channel(mut self, discard: bool) -> Self {
        self.discard_off_channel = discard;
        self
    }

    pub fn with_discarded_token_type(mut self, token_type: u32) -> Self {
        self.discarded_token_types.insert(token_type);
        self
    }

    /// Forces every token of `token_type` onto `channel`. A later call for
    /// the same type replaces the earlier one.
    pub fn with_token_type_channel(
        mut self,
        token_type: u32,
        channel: u32,
    ) -> Self {
        self.channel_overrides.insert(token_type, channel);
        self
    }
}
