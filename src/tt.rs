//! Transposition table for caching search results.
//!
//! Keyed by position key. Each search engine owns its own table, so entries
//! are plain values behind `&mut self` rather than shared atomics. Entries
//! are a cache: a colliding or stale entry may cost accuracy but never
//! legality, because cached moves are always re-validated by the caller.

use std::mem;

use crate::board::{Color, Move};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

/// One cached search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u8,
    /// Score from `color`'s point of view
    pub score: i32,
    pub bound_type: BoundType,
    pub best_move: Option<Move>,
    /// Side to move when the entry was stored
    pub color: Color,
    pub generation: u8,
}

impl TTEntry {
    #[must_use]
    pub fn depth(&self) -> u32 {
        u32::from(self.depth)
    }

    /// The cached score if it settles a node searched with `(alpha, beta)`.
    #[must_use]
    pub fn cutoff_score(&self, alpha: i32, beta: i32) -> Option<i32> {
        match self.bound_type {
            BoundType::Exact => Some(self.score),
            BoundType::LowerBound if self.score >= beta => Some(self.score),
            BoundType::UpperBound if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

/// Number of slots per bucket for collision resolution
const BUCKET_SIZE: usize = 4;

type Bucket = [Option<TTEntry>; BUCKET_SIZE];

pub struct TranspositionTable {
    buckets: Vec<Bucket>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a table of roughly `size_mb` megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let bucket_size = mem::size_of::<Bucket>();
        let mut num_buckets = (size_mb * 1024 * 1024) / bucket_size;

        // Power of two for mask indexing
        num_buckets = num_buckets.next_power_of_two() / 2;
        if num_buckets == 0 {
            num_buckets = 1024;
        }

        TranspositionTable {
            buckets: vec![[None; BUCKET_SIZE]; num_buckets],
            mask: num_buckets - 1,
        }
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    #[must_use]
    pub fn probe(&self, key: u64) -> Option<TTEntry> {
        self.buckets[self.index(key)]
            .iter()
            .flatten()
            .find(|e| e.key == key)
            .copied()
    }

    /// Store an entry, preferring in order: the slot already holding this
    /// key, an empty slot, then the shallowest and oldest slot.
    pub fn store(&mut self, entry: TTEntry) {
        let idx = self.index(entry.key);
        let bucket = &mut self.buckets[idx];

        if let Some(slot) = bucket
            .iter_mut()
            .find(|s| s.map_or(true, |e| e.key == entry.key))
        {
            *slot = Some(entry);
            return;
        }

        let mut replace_idx = 0;
        let mut worst_priority = i32::MAX;
        for (i, slot) in bucket.iter().enumerate() {
            if let Some(e) = slot {
                let age = i32::from(entry.generation.wrapping_sub(e.generation));
                let priority = i32::from(e.depth) * 2 - age;
                if priority < worst_priority {
                    replace_idx = i;
                    worst_priority = priority;
                }
            }
        }
        bucket[replace_idx] = Some(entry);
    }

    /// Occupancy in per mille, sampled over the first buckets.
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        let sample = self.buckets.len().min(1000);
        let occupied = self
            .buckets
            .iter()
            .take(sample)
            .flat_map(|b| b.iter())
            .filter(|s| s.is_some())
            .count();
        (occupied * 1000 / (sample * BUCKET_SIZE)) as u32
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = [None; BUCKET_SIZE];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: u64, depth: u8, score: i32, bound_type: BoundType, generation: u8) -> TTEntry {
        TTEntry {
            key,
            depth,
            score,
            bound_type,
            best_move: None,
            color: Color::White,
            generation,
        }
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(1);
        let key = 0x1234_5678_9ABC_DEF0;
        tt.store(entry(key, 10, 500, BoundType::Exact, 1));

        let found = tt.probe(key).expect("should find entry");
        assert_eq!(found.depth(), 10);
        assert_eq!(found.score, 500);
        assert_eq!(found.bound_type, BoundType::Exact);
    }

    #[test]
    fn test_no_false_positives() {
        let mut tt = TranspositionTable::new(1);
        tt.store(entry(0x1234_5678_9ABC_DEF0, 10, 500, BoundType::Exact, 1));
        assert!(tt.probe(0xFEDC_BA98_7654_3210).is_none());
    }

    #[test]
    fn test_same_key_overwrites() {
        let mut tt = TranspositionTable::new(1);
        tt.store(entry(42, 2, 10, BoundType::UpperBound, 1));
        tt.store(entry(42, 3, 20, BoundType::Exact, 1));
        let found = tt.probe(42).unwrap();
        assert_eq!((found.depth, found.score), (3, 20));
    }

    #[test]
    fn test_full_bucket_evicts_shallowest() {
        let mut tt = TranspositionTable::new(1);
        let stride = (tt.mask as u64) + 1;
        for i in 0..BUCKET_SIZE as u64 {
            tt.store(entry(7 + i * stride, 5 + i as u8, 0, BoundType::Exact, 1));
        }
        tt.store(entry(7 + 9 * stride, 9, 0, BoundType::Exact, 1));
        // depth 5 was the weakest slot
        assert!(tt.probe(7).is_none());
        assert!(tt.probe(7 + 9 * stride).is_some());
        assert!(tt.probe(7 + stride).is_some());
    }

    #[test]
    fn test_cutoff_respects_bounds() {
        let lower = entry(1, 3, 100, BoundType::LowerBound, 0);
        assert_eq!(lower.cutoff_score(0, 50), Some(100));
        assert_eq!(lower.cutoff_score(0, 200), None);

        let upper = entry(1, 3, -100, BoundType::UpperBound, 0);
        assert_eq!(upper.cutoff_score(-50, 50), Some(-100));
        assert_eq!(upper.cutoff_score(-200, 50), None);

        let exact = entry(1, 3, 7, BoundType::Exact, 0);
        assert_eq!(exact.cutoff_score(-1, 1), Some(7));
    }

    #[test]
    fn test_clear() {
        let mut tt = TranspositionTable::new(1);
        tt.store(entry(99, 1, 0, BoundType::Exact, 0));
        assert!(tt.hashfull_per_mille() <= 1000);
        tt.clear();
        assert!(tt.probe(99).is_none());
    }
}
