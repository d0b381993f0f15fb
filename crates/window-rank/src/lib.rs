//! Streaming rank over a trailing window of observations.
//!
//! Each observed value is ranked against the window of the most recent N
//! values: the returned fraction is the share of the updated window that is
//! strictly less than the value (the empirical left-open CDF), always in
//! `[0, 1)`. The sorted window lives in a partitioned sorted sequence -
//! K contiguous sorted chunks, each recording the global index of its first
//! element - so one observation costs O(N/K) element copies in one chunk
//! plus an O(K) bound-adjustment sweep, O(sqrt N) amortized at the default
//! K of sqrt(N).
//!
//! ## Core Types
//! - [`WindowRanker`] - public facade: FIFO insertion order + sorted side
//! - [`PartitionSet`] - the ordered chunk list behind the facade
//! - [`RankerOptions`] - construction options with derivable defaults
//! - [`RankError`] - construction and invariant-sweep errors
//!
//! The chunk realization is a compile-time parameter. [`HeapWindowRanker`]
//! uses growable per-chunk buffers; [`RawWindowRanker`] uses fixed centred
//! raw buffers that halve expected copy work. Both produce identical rank
//! sequences.
//!
//! # Example
//!
//! ```
//! use window_rank::HeapWindowRanker;
//!
//! let mut ranker = HeapWindowRanker::new(vec![1, 2, 3, 4, 5]).unwrap();
//! // 3 enters, the oldest value (1) leaves: window is now [2, 3, 3, 4, 5]
//! // and one of five values is strictly below 3.
//! assert_eq!(ranker.observe(3), 0.2);
//! assert_eq!(ranker.observe(6), 0.8);
//! ```
//!
//! Not thread safe: wrap a ranker in your own synchronization if you need
//! sharing.

mod error;
mod partition;
mod ranker;

pub use error::RankError;
pub use partition::PartitionSet;
pub use ranker::{RankerOptions, WindowRanker};

pub use window_rank_chunks::{Chunk, HeapChunk, RawChunk};

/// Ranker over heap-backed chunks.
pub type HeapWindowRanker<T> = WindowRanker<HeapChunk<T>>;

/// Ranker over centred raw-buffer chunks.
pub type RawWindowRanker<T> = WindowRanker<RawChunk<T>>;
