//! Shared helpers for the ranker integration suites.
#![allow(dead_code)]

use std::collections::VecDeque;

/// Brute-force reference: a plain FIFO window ranked by linear scan.
pub struct Oracle<T> {
    window: VecDeque<T>,
    cap: usize,
}

impl<T: PartialOrd + Clone> Oracle<T> {
    pub fn new(seed: &[T], cap: usize) -> Self {
        Self {
            window: seed.iter().cloned().collect(),
            cap,
        }
    }

    pub fn observe(&mut self, value: T) -> f64 {
        if self.window.len() == self.cap {
            self.window.pop_front();
        }
        self.window.push_back(value.clone());
        let below = self.window.iter().filter(|w| **w < value).count();
        below as f64 / self.window.len() as f64
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn sorted(&self) -> Vec<T> {
        let mut values: Vec<T> = self.window.iter().cloned().collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        values
    }
}

/// Deterministic LCG used to drive reproducible value streams.
pub fn next_pseudo(seed: &mut u64) -> i64 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*seed >> 33) % 200) as i64 - 100
}
