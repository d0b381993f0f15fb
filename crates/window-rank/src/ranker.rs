//! Streaming rank facade.

use std::collections::VecDeque;

use window_rank_bounds::order_of;
use window_rank_chunks::Chunk;

use crate::error::RankError;
use crate::partition::PartitionSet;

/// Construction options for [`WindowRanker`].
///
/// Every field has a derivable default: the window size defaults to the seed
/// length, the partition count to the square root of the window size, and
/// seeds are sorted unless promised sorted.
#[derive(Debug, Clone, Default)]
pub struct RankerOptions {
    /// Maximum window occupancy N. Defaults to the seed length;
    /// `usize::MAX` means the window never evicts.
    pub window_size: Option<usize>,
    /// Initial chunk count. Defaults to `floor(sqrt(N))`, at least 1.
    pub partition_count: Option<usize>,
    /// Promise that the seed is already sorted ascending, skipping the sort.
    pub already_sorted: bool,
}

/// Streaming rank of values against a trailing window of the most recent N
/// observations.
///
/// Each [`observe`](WindowRanker::observe) call slides the window one step -
/// the value enters on the right, the oldest value leaves on the left once
/// the window is full - and returns the fraction of the updated window that
/// is strictly less than the value, always in `[0, 1)`.
///
/// A FIFO of insertion order decides evictions; a [`PartitionSet`] holds the
/// same values sorted and answers the strictly-less-than count. The chunk
/// realization is a compile-time parameter; see [`crate::HeapWindowRanker`]
/// and [`crate::RawWindowRanker`].
///
/// Not thread safe: callers serialize access.
#[derive(Debug)]
pub struct WindowRanker<C: Chunk> {
    window_size: usize,
    fifo: VecDeque<C::Value>,
    partitions: PartitionSet<C>,
}

impl<C: Chunk> WindowRanker<C>
where
    C::Value: Clone,
{
    /// Builds a ranker with default options: the seed fills the window
    /// exactly and the partition count is the square root of the seed
    /// length.
    ///
    /// # Example
    ///
    /// ```
    /// use window_rank::HeapWindowRanker;
    ///
    /// let mut ranker = HeapWindowRanker::new(vec![1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(ranker.observe(3), 0.2);
    /// ```
    pub fn new(seed: Vec<C::Value>) -> Result<Self, RankError> {
        Self::with_options(seed, RankerOptions::default())
    }

    /// Builds a ranker with explicit options.
    ///
    /// Fails with [`RankError::InvalidArgument`] when the window size or
    /// partition count resolve below 1 (an empty seed needs an explicit
    /// window size) or when the seed is longer than the window.
    pub fn with_options(seed: Vec<C::Value>, options: RankerOptions) -> Result<Self, RankError> {
        let window_size = options.window_size.unwrap_or(seed.len());
        if window_size < 1 {
            return Err(RankError::InvalidArgument(
                "window size must be at least 1 (an empty seed needs an explicit window size)"
                    .to_string(),
            ));
        }
        if seed.len() > window_size {
            return Err(RankError::InvalidArgument(format!(
                "seed length {} exceeds window size {window_size}",
                seed.len()
            )));
        }
        let partition_count = options
            .partition_count
            .unwrap_or_else(|| floor_sqrt(window_size).max(1));
        if partition_count < 1 {
            return Err(RankError::InvalidArgument(
                "partition count must be at least 1".to_string(),
            ));
        }

        let fifo: VecDeque<C::Value> = seed.iter().cloned().collect();
        let mut sorted = seed;
        if !options.already_sorted {
            sorted.sort_by(order_of);
        }
        Ok(Self {
            window_size,
            fifo,
            partitions: PartitionSet::from_seed(sorted, partition_count),
        })
    }

    /// Slides `value` into the window, evicts the oldest value if the
    /// window was full, and returns the rank of `value` against the updated
    /// window: the fraction of window values strictly less than it.
    pub fn observe(&mut self, value: C::Value) -> f64 {
        let evicted = if self.fifo.len() == self.window_size {
            self.fifo.pop_front()
        } else {
            None
        };
        self.fifo.push_back(value.clone());
        self.partitions.apply(value.clone(), evicted);
        let below = self.partitions.lower_bound(&value);
        below as f64 / self.fifo.len() as f64
    }

    /// Rank of `value` against the current window without observing it.
    ///
    /// Unlike [`observe`](WindowRanker::observe) the probed value is not in
    /// the window, so the result ranges over `[0, 1]`. `None` while the
    /// window is empty.
    pub fn rank(&self, value: &C::Value) -> Option<f64> {
        if self.fifo.is_empty() {
            return None;
        }
        Some(self.partitions.lower_bound(value) as f64 / self.fifo.len() as f64)
    }

    /// Current window occupancy.
    pub fn len(&self) -> usize {
        self.fifo.len()
    }

    /// Whether no value has been observed or seeded yet.
    pub fn is_empty(&self) -> bool {
        self.fifo.is_empty()
    }

    /// Whether the window has reached its maximum occupancy.
    pub fn is_full(&self) -> bool {
        self.fifo.len() == self.window_size
    }

    /// Maximum window occupancy N.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Current number of chunks in the partitioned sequence.
    pub fn partition_count(&self) -> usize {
        self.partitions.chunk_count()
    }

    /// Number of chunk splits performed so far.
    pub fn split_count(&self) -> u64 {
        self.partitions.split_count()
    }

    /// Number of emptied chunks dropped so far.
    pub fn remove_count(&self) -> u64 {
        self.partitions.remove_count()
    }

    /// Snapshot of the window in sorted order.
    pub fn sorted_values(&self) -> Vec<C::Value> {
        self.partitions.sorted_values()
    }

    /// Invariant sweep over the backing partitioned sequence, plus the
    /// occupancy tie between the FIFO and the sorted side. Intended for
    /// tests; a failure is fatal for the instance.
    pub fn validate(&self) -> Result<(), RankError> {
        self.partitions.validate()?;
        if self.partitions.len() != self.fifo.len() {
            return Err(RankError::InvariantViolation(format!(
                "sorted side holds {} values but the window holds {}",
                self.partitions.len(),
                self.fifo.len()
            )));
        }
        Ok(())
    }
}

/// Largest integer whose square does not exceed `n`.
fn floor_sqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    let mut x = (n as f64).sqrt() as usize;
    while x.checked_mul(x).map_or(true, |sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) {
        x += 1;
    }
    x
}
