use smallvec::SmallVec;
use smallvec::smallvec;

const WORD_BITS: u32 = u64::BITS;

/// Type codes below this bound live in the dense bitset; anything at or
/// above it (including [`EOF_TOKEN_TYPE`](crate::token::EOF_TOKEN_TYPE)) is
/// kept in the sorted sparse spill.
const DENSE_LIMIT: u32 = 4096;

/// A set of token type codes, stored as a bitset.
///
/// Used to select tokens by type membership (see
/// [`CommonTokenStream::tokens_in_set()`](crate::CommonTokenStream::tokens_in_set)).
/// Grammars rarely define more than a hundred or so token types, so the
/// first 128 types are stored inline without a heap allocation. The bitset
/// grows on insert up to 4096 types; larger codes are kept in a
/// sorted list so a single huge code never sizes the bitset.
#[derive(Clone, Debug, Default)]
pub struct TokenTypeSet {
    sparse: SmallVec<[u32; 2]>,
    words: SmallVec<[u64; 2]>,
}

impl TokenTypeSet {
    pub fn contains(&self, token_type: u32) -> bool {
        match Self::locate(token_type) {
            Some((word, bit)) => self
                .words
                .get(word)
                .is_some_and(|bits| bits & bit != 0),
            None => self.sparse.binary_search(&token_type).is_ok(),
        }
    }

    /// Adds `token_type` to the set. Returns `true` if it was not already
    /// present.
    pub fn insert(&mut self, token_type: u32) -> bool {
        let Some((word, bit)) = Self::locate(token_type) else {
            return match self.sparse.binary_search(&token_type) {
                Ok(_) => false,
                Err(pos) => {
                    self.sparse.insert(pos, token_type);
                    true
                },
            };
        };
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let was_absent = self.words[word] & bit == 0;
        self.words[word] |= bit;
        was_absent
    }

    pub fn is_empty(&self) -> bool {
        self.sparse.is_empty() && self.words.iter().all(|bits| *bits == 0)
    }

    /// Iterates over the member types in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(word_idx, bits)| {
                let bits = *bits;
                (0..WORD_BITS)
                    .filter(move |bit| bits & (1u64 << bit) != 0)
                    .map(move |bit| word_idx as u32 * WORD_BITS + bit)
            })
            .chain(self.sparse.iter().copied())
    }

    pub fn len(&self) -> usize {
        let dense: usize = self.words
            .iter()
            .map(|bits| bits.count_ones() as usize)
            .sum();
        dense + self.sparse.len()
    }

    /// Word index and bit mask of a dense type, `None` for sparse ones.
    fn locate(token_type: u32) -> Option<(usize, u64)> {
        (token_type < DENSE_LIMIT).then(|| (
            (token_type / WORD_BITS) as usize,
            1u64 << (token_type % WORD_BITS),
        ))
    }

    pub fn new() -> Self {
        Self {
            sparse: SmallVec::new(),
            words: smallvec![0; 2],
        }
    }

    /// Removes `token_type` from the set. Returns `true` if it was present.
    pub fn remove(&mut self, token_type: u32) -> bool {
        let Some((word, bit)) = Self::locate(token_type) else {
            return match self.sparse.binary_search(&token_type) {
                Ok(pos) => {
                    self.sparse.remove(pos);
                    true
                },
                Err(_) => false,
            };
        };
        match self.words.get_mut(word) {
            Some(bits) if *bits & bit != 0 => {
                *bits &= !bit;
                true
            },
            _ => false,
        }
    }
}

// Trailing zero words are an allocation detail, not part of the set.
impl PartialEq for TokenTypeSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for TokenTypeSet {}

impl FromIterator<u32> for TokenTypeSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = Self::new();
        for token_type in iter {
            set.insert(token_type);
        }
        set
    }
}
