//! Partitioned sorted sequence.
//!
//! Stores the sorted window as a `Vec` of chunks in ascending order. Chunks
//! are owned linearly by the set and related by index only; each chunk
//! records the global sorted index of its first value, so a global lower
//! bound is one owner search plus one in-chunk search.
//!
//! Complexity per `apply` (K = chunk count, c = chunk size):
//! - owner search: O(log K)
//! - in-chunk insert/remove: O(c) copies
//! - lower-bound adjustment: one pass over at most K chunks
//!
//! With K near sqrt(N) both sides stay near sqrt(N).

use std::cmp::Ordering;

use window_rank_bounds::{lower_bound_by, order_of};
use window_rank_chunks::Chunk;

use crate::error::RankError;

/// Ordered list of chunks covering the sorted window.
///
/// Insert and evict are applied together by [`PartitionSet::apply`], which
/// keeps every chunk's recorded lower bound exact with a single-range walk
/// instead of two.
#[derive(Debug)]
pub struct PartitionSet<C: Chunk> {
    chunks: Vec<C>,
    split_count: u64,
    remove_count: u64,
}

impl<C: Chunk> PartitionSet<C> {
    /// Builds the set from already-sorted seed values distributed as evenly
    /// as possible over at most `partition_count` chunks; the division
    /// remainder goes to the last chunk. An empty seed yields an empty set;
    /// the first insert then creates a chunk of nominal size 1 on the fly.
    pub fn from_seed(sorted: Vec<C::Value>, partition_count: usize) -> Self {
        debug_assert!(partition_count >= 1);
        let total = sorted.len();
        let mut chunks = Vec::new();
        if total > 0 {
            let k = partition_count.min(total);
            let base = total / k;
            let remainder = total % k;
            chunks.reserve(k);
            let mut values = sorted.into_iter();
            let mut running = 0usize;
            for i in 0..k {
                let take = if i == k - 1 { base + remainder } else { base };
                let chunk_values: Vec<_> = values.by_ref().take(take).collect();
                chunks.push(C::from_sorted(chunk_values, take, running));
                running += take;
            }
        }
        Self {
            chunks,
            split_count: 0,
            remove_count: 0,
        }
    }

    /// Total number of values across all chunks.
    pub fn len(&self) -> usize {
        self.chunks
            .last()
            .map_or(0, |chunk| chunk.lower_bound() + chunk.count())
    }

    /// Whether the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Current number of chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Chunks in ascending order.
    pub fn chunks(&self) -> &[C] {
        &self.chunks
    }

    /// Number of chunk splits performed so far.
    pub fn split_count(&self) -> u64 {
        self.split_count
    }

    /// Number of emptied chunks dropped so far.
    pub fn remove_count(&self) -> u64 {
        self.remove_count
    }

    /// Index of the chunk owning `value`: the first chunk whose highest
    /// value is not less than `value`, or the last chunk when `value`
    /// exceeds every chunk (a new maximum routes right).
    fn find_owner(&self, value: &C::Value) -> usize {
        let k = self.chunks.len();
        debug_assert!(k > 0);
        let idx = lower_bound_by(&self.chunks, 0, k, |chunk| order_of(chunk.highest(), value));
        idx.min(k - 1)
    }

    /// Count of values strictly less than `value`.
    pub fn lower_bound(&self, value: &C::Value) -> usize {
        if self.chunks.is_empty() {
            return 0;
        }
        let owner = self.find_owner(value);
        let chunk = &self.chunks[owner];
        chunk.lower_bound() + chunk.local_lower_bound(value)
    }

    /// Applies one insert and an optional evict as a single transaction.
    ///
    /// The insert runs first (splitting a full owner), the evict second
    /// (dropping a chunk that empties), and the chunks' recorded lower
    /// bounds are then fixed with one walk over the index range where the
    /// +1 of the insert and the -1 of the evict do not cancel.
    pub fn apply(&mut self, insert: C::Value, evict: Option<C::Value>) {
        if self.chunks.is_empty() {
            debug_assert!(evict.is_none());
            self.chunks.push(C::from_sorted(vec![insert], 1, 0));
            return;
        }

        let mut i_ins = self.find_owner(&insert);
        if self.chunks[i_ins].is_full() {
            let (right, inserted_right) = self.chunks[i_ins].split_and_insert(insert);
            self.chunks.insert(i_ins + 1, right);
            if inserted_right {
                i_ins += 1;
            }
            self.split_count += 1;
        } else {
            self.chunks[i_ins].insert(insert);
        }

        let mut begin_inc = i_ins + 1;
        let begin_dec = match evict {
            None => self.chunks.len(),
            Some(value) => {
                let i_rem = self.find_owner(&value);
                if self.chunks[i_rem].count() == 1 {
                    self.chunks.remove(i_rem);
                    self.remove_count += 1;
                    if begin_inc > i_rem {
                        begin_inc -= 1;
                    }
                    i_rem
                } else {
                    self.chunks[i_rem].remove(&value);
                    i_rem + 1
                }
            }
        };

        if begin_inc < begin_dec {
            for chunk in &mut self.chunks[begin_inc..begin_dec] {
                chunk.shift_lower_bound(1);
            }
        } else if begin_dec < begin_inc {
            for chunk in &mut self.chunks[begin_dec..begin_inc] {
                chunk.shift_lower_bound(-1);
            }
        }
    }

    /// Full invariant sweep: non-empty chunks within capacity, per-chunk
    /// sorted order, non-interleaving chunk ranges, and the lower-bound
    /// chain `lb[0] == 0`, `lb[i+1] == lb[i] + count[i]`.
    pub fn validate(&self) -> Result<(), RankError> {
        let mut running = 0usize;
        for (i, chunk) in self.chunks.iter().enumerate() {
            if chunk.count() == 0 {
                return Err(RankError::InvariantViolation(format!("chunk {i} is empty")));
            }
            if chunk.count() > chunk.capacity() {
                return Err(RankError::InvariantViolation(format!(
                    "chunk {i} holds {} values over capacity {}",
                    chunk.count(),
                    chunk.capacity()
                )));
            }
            if chunk.lower_bound() != running {
                return Err(RankError::InvariantViolation(format!(
                    "chunk {i} lower bound {} disagrees with running sum {running}",
                    chunk.lower_bound()
                )));
            }
            if chunk
                .values()
                .windows(2)
                .any(|pair| order_of(&pair[0], &pair[1]) == Ordering::Greater)
            {
                return Err(RankError::InvariantViolation(format!(
                    "chunk {i} is not sorted"
                )));
            }
            if i > 0 && order_of(self.chunks[i - 1].highest(), chunk.lowest()) == Ordering::Greater
            {
                return Err(RankError::InvariantViolation(format!(
                    "chunk {} overlaps chunk {i}",
                    i - 1
                )));
            }
            running += chunk.count();
        }
        Ok(())
    }
}

impl<C: Chunk> PartitionSet<C>
where
    C::Value: Clone,
{
    /// Snapshot of the whole sorted window in chunk order.
    pub fn sorted_values(&self) -> Vec<C::Value> {
        let mut out = Vec::with_capacity(self.len());
        for chunk in &self.chunks {
            out.extend(chunk.values().iter().cloned());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use window_rank_chunks::HeapChunk;

    type Set = PartitionSet<HeapChunk<i64>>;

    #[test]
    fn test_seed_distribution_remainder_to_last() {
        let set = Set::from_seed(vec![1, 2, 3, 4, 5, 6, 7], 3);
        let counts: Vec<usize> = set.chunks().iter().map(|c| c.count()).collect();
        assert_eq!(counts, vec![2, 2, 3]);
        let bounds: Vec<usize> = set.chunks().iter().map(|c| c.lower_bound()).collect();
        assert_eq!(bounds, vec![0, 2, 4]);
        set.validate().unwrap();
    }

    #[test]
    fn test_seed_smaller_than_partition_count() {
        let set = Set::from_seed(vec![4, 9], 5);
        assert_eq!(set.chunk_count(), 2);
        assert_eq!(set.len(), 2);
        set.validate().unwrap();
    }

    #[test]
    fn test_lazy_first_chunk_on_empty_seed() {
        let mut set = Set::from_seed(Vec::new(), 3);
        assert!(set.is_empty());
        assert_eq!(set.lower_bound(&5), 0);
        set.apply(5, None);
        assert_eq!(set.chunk_count(), 1);
        assert_eq!(set.len(), 1);
        set.validate().unwrap();
    }

    #[test]
    fn test_insert_walks_following_bounds_up() {
        let mut set = Set::from_seed(vec![1, 3, 5, 7, 9, 11], 3);
        set.apply(4, None);
        set.validate().unwrap();
        assert_eq!(set.sorted_values(), vec![1, 3, 4, 5, 7, 9, 11]);
        assert_eq!(set.lower_bound(&5), 3);
    }

    #[test]
    fn test_insert_and_evict_in_different_chunks() {
        let mut set = Set::from_seed(vec![1, 3, 5, 7, 9, 11], 3);
        // Insert into the first chunk, evict from the last.
        set.apply(2, Some(11));
        set.validate().unwrap();
        assert_eq!(set.sorted_values(), vec![1, 2, 3, 5, 7, 9]);
        // Evict from the first chunk, insert into the last.
        set.apply(10, Some(1));
        set.validate().unwrap();
        assert_eq!(set.sorted_values(), vec![2, 3, 5, 7, 9, 10]);
    }

    #[test]
    fn test_insert_right_of_evict_walks_bounds_down() {
        let mut set = Set::from_seed(vec![1, 3, 5, 7, 9, 11], 3);
        set.apply(4, Some(3));
        set.validate().unwrap();
        assert_eq!(set.sorted_values(), vec![1, 4, 5, 7, 9, 11]);
    }

    #[test]
    fn test_insert_and_evict_in_same_chunk_no_walk() {
        let mut set = Set::from_seed(vec![1, 3, 5, 7, 9, 11], 3);
        set.apply(6, Some(5));
        set.validate().unwrap();
        assert_eq!(set.sorted_values(), vec![1, 3, 6, 7, 9, 11]);
    }

    #[test]
    fn test_split_of_full_owner() {
        let mut set = Set::from_seed(vec![10, 20], 1);
        // Capacity of the seeded chunk is 4: two more inserts fill it.
        set.apply(30, None);
        set.apply(40, None);
        assert_eq!(set.chunk_count(), 1);
        set.apply(25, None);
        set.validate().unwrap();
        assert_eq!(set.chunk_count(), 2);
        assert_eq!(set.split_count(), 1);
        assert_eq!(set.sorted_values(), vec![10, 20, 25, 30, 40]);
    }

    #[test]
    fn test_new_maximum_routes_to_last_chunk() {
        let mut set = Set::from_seed(vec![1, 2, 3, 4], 2);
        set.apply(99, None);
        set.validate().unwrap();
        assert_eq!(set.lower_bound(&99), 4);
        assert_eq!(set.sorted_values(), vec![1, 2, 3, 4, 99]);
    }

    #[test]
    fn test_evicting_last_value_drops_chunk() {
        let mut set = Set::from_seed(vec![1, 9], 2);
        assert_eq!(set.chunk_count(), 2);
        // 9 sits alone in the second chunk and the insert lands in the
        // first, so the evict drops the second chunk entirely.
        set.apply(0, Some(9));
        set.validate().unwrap();
        assert_eq!(set.chunk_count(), 1);
        assert_eq!(set.remove_count(), 1);
        assert_eq!(set.sorted_values(), vec![0, 1]);
    }

    #[test]
    fn test_chunk_drop_before_insert_position() {
        let mut set = Set::from_seed(vec![1, 9], 2);
        // 1 sits alone in the first chunk; insert lands in the second.
        set.apply(10, Some(1));
        set.validate().unwrap();
        assert_eq!(set.chunk_count(), 1);
        assert_eq!(set.sorted_values(), vec![9, 10]);
    }

    #[test]
    fn test_duplicate_boundary_values_stay_consistent() {
        let mut set = Set::from_seed(vec![5, 5, 5, 5], 2);
        set.apply(5, Some(5));
        set.validate().unwrap();
        assert_eq!(set.sorted_values(), vec![5, 5, 5, 5]);
        assert_eq!(set.lower_bound(&5), 0);
        assert_eq!(set.lower_bound(&6), 4);
    }

    #[test]
    fn test_counters_are_monotone() {
        let mut set = Set::from_seed(vec![1, 2], 1);
        let mut last_split = 0;
        for v in 3..40 {
            set.apply(v, None);
            set.validate().unwrap();
            assert!(set.split_count() >= last_split);
            last_split = set.split_count();
        }
        assert!(set.split_count() > 0);
        assert_eq!(set.len(), 39);
    }
}
