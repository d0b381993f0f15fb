//! Bounded sorted chunk buffers.
//!
//! A chunk is one slice of a partitioned sorted sequence: a locally sorted
//! buffer of up to `2 * nominal` values that remembers the global index of
//! its first element. Two interchangeable realizations live behind the
//! [`Chunk`] trait:
//!
//! - [`HeapChunk`] - growable `Vec` buffer; insert and remove shift the tail
//! - [`RawChunk`] - fixed raw buffer holding its data centred between two
//!   walls, shifting whichever side is cheaper; roughly halves expected copy
//!   work at the cost of `unsafe` internals
//!
//! Both realizations have identical observable behavior and are exercised by
//! one shared test suite.
//!
//! # Example
//!
//! ```
//! use window_rank_chunks::{Chunk, HeapChunk};
//!
//! let mut chunk = HeapChunk::from_sorted(vec![1, 3, 5], 3, 0);
//! chunk.insert(4);
//! assert_eq!(chunk.values(), &[1, 3, 4, 5]);
//! assert_eq!(chunk.local_lower_bound(&4), 2);
//! ```

mod chunk;
mod heap;
mod raw;

pub use chunk::Chunk;
pub use heap::HeapChunk;
pub use raw::RawChunk;
