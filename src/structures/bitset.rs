//! Bitset over a fixed, 1-indexed universe

use super::StructureError;

const WORD_BITS: usize = u64::BITS as usize;

/// Set of integers drawn from `1..=universe`.
///
/// Value 0 is never stored. The universe is fixed at construction; values
/// outside it are rejected on insert and reported absent on lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedUniverseBitSet {
    universe: usize,
    words: Vec<u64>,
}

impl FixedUniverseBitSet {
    pub fn new(universe: usize) -> Self {
        Self { universe, words: vec![0; universe.div_ceil(WORD_BITS)] }
    }

    pub fn universe(&self) -> usize {
        self.universe
    }

    /// Word index and bit mask for `value`, or `None` outside the universe.
    fn locate(&self, value: usize) -> Option<(usize, u64)> {
        if value == 0 || value > self.universe {
            return None;
        }
        let bit = value - 1;
        Some((bit / WORD_BITS, 1u64 << (bit % WORD_BITS)))
    }

    pub fn contains(&self, value: usize) -> bool {
        self.locate(value).is_some_and(|(word, mask)| self.words[word] & mask != 0)
    }

    /// Insert `value`. Returns whether it was newly added.
    pub fn insert(&mut self, value: usize) -> Result<bool, StructureError> {
        let (word, mask) = self
            .locate(value)
            .ok_or(StructureError::OutOfUniverse { value, universe: self.universe })?;
        let added = self.words[word] & mask == 0;
        self.words[word] |= mask;
        Ok(added)
    }

    /// Remove `value`. Returns whether it was present.
    pub fn remove(&mut self, value: usize) -> bool {
        match self.locate(value) {
            Some((word, mask)) if self.words[word] & mask != 0 => {
                self.words[word] &= !mask;
                true
            }
            _ => false,
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut remaining = word;
            std::iter::from_fn(move || {
                if remaining == 0 {
                    return None;
                }
                let bit = remaining.trailing_zeros() as usize;
                remaining &= remaining - 1;
                Some(i * WORD_BITS + bit + 1)
            })
        })
    }
}
