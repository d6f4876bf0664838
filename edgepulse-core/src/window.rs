//! Fixed-Capacity Sliding Window with Running Mean
//!
//! ## Overview
//!
//! This module provides the sliding window that smooths each sensor channel.
//! It keeps the most recent `capacity` samples in arrival order and maintains
//! their sum incrementally, so the mean is available in O(1) at any time
//! without walking the window.
//!
//! ## Design Rationale
//!
//! ### Why a Running Sum?
//!
//! The agent produces one smoothed value per tick for an unbounded stream of
//! samples. Re-summing the window on every tick is O(capacity); updating the
//! sum on insert and on evict is O(1):
//!
//! ```text
//! push(6) into [1, 2, 3, 4, 5] (capacity 5, sum 15)
//!
//!   evict:   [2, 3, 4, 5]         sum = 15 - 1 = 14
//!   append:  [2, 3, 4, 5, 6]      sum = 14 + 6 = 20
//!   mean:    20 / 5 = 4.0
//! ```
//!
//! ### Why Not a Const-Generic Ring?
//!
//! The window size comes from runtime configuration, so the capacity is a
//! constructor argument rather than a type parameter. Storage is a
//! `VecDeque` that reserves at most [`PREALLOCATE_LIMIT`] slots up front and
//! grows as samples arrive. Once the window has filled it never reallocates
//! again, and an oversized capacity costs nothing until samples exist to fill
//! it.
//!
//! ### Floating-Point Drift
//!
//! Repeated add/subtract accumulates rounding error in the cached sum. After
//! every `capacity` evictions the sum is recomputed exactly from the retained
//! samples. That costs O(capacity) once per `capacity` pushes, so `push`
//! stays O(1) amortized and the drift never grows past one window's worth of
//! rounding.
//!
//! ## Usage Example
//!
//! ```rust
//! use edgepulse_core::window::SlidingWindow;
//!
//! let mut window = SlidingWindow::<f32>::new(5)?;
//! assert_eq!(window.mean(), 0.0);
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
//!     window.push(value);
//! }
//!
//! // Oldest sample (1.0) was evicted
//! assert_eq!(window.len(), 5);
//! assert_eq!(window.mean(), 4.0);
//! # Ok::<(), edgepulse_core::AggregationError>(())
//! ```

use alloc::collections::VecDeque;

use crate::errors::{AggregationError, AggregationResult};
use crate::traits::Sample;

/// Largest number of slots reserved when a window is created
pub const PREALLOCATE_LIMIT: usize = 1024;

/// Bounded FIFO of samples with an incrementally maintained sum
///
/// ## Internal Invariants
///
/// - `samples.len() <= capacity` after every call to [`push`](Self::push)
/// - `sum` equals the sum of `samples` up to floating-point rounding
/// - `capacity >= 1` and never changes
///
/// ## Thread Safety
///
/// Not synchronized. A window has exactly one owner; callers serialize
/// access.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T: Sample> {
    /// Retained samples, oldest at the front
    samples: VecDeque<T>,

    /// Running sum of `samples`
    sum: T,

    capacity: usize,

    /// Evictions since the sum was last recomputed exactly
    evictions_since_resync: usize,
}

impl<T: Sample> SlidingWindow<T> {
    /// Creates an empty window holding at most `capacity` samples
    ///
    /// Fails with [`AggregationError::ZeroCapacity`] when `capacity == 0`.
    pub fn new(capacity: usize) -> AggregationResult<Self> {
        if capacity == 0 {
            return Err(AggregationError::ZeroCapacity);
        }

        Ok(Self {
            samples: VecDeque::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
            sum: T::ZERO,
            capacity,
            evictions_since_resync: 0,
        })
    }

    /// Appends a sample, evicting the oldest one once the window is full
    ///
    /// ## Example
    ///
    /// ```rust
    /// # use edgepulse_core::window::SlidingWindow;
    /// let mut window = SlidingWindow::<f64>::new(3).unwrap();
    ///
    /// window.push(1.0);
    /// window.push(2.0);
    /// window.push(3.0);
    ///
    /// // Fourth push evicts the first
    /// window.push(4.0);
    ///
    /// let retained: Vec<f64> = window.iter().collect();
    /// assert_eq!(retained, vec![2.0, 3.0, 4.0]);
    /// ```
    pub fn push(&mut self, sample: T) {
        let evicted = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };

        self.samples.push_back(sample);
        self.sum += sample;

        if let Some(evicted) = evicted {
            self.sum -= evicted;
            self.evictions_since_resync += 1;

            if self.evictions_since_resync >= self.capacity {
                self.resync();
            }
        }
    }

    /// Mean of the retained samples, or `0.0` for an empty window
    pub fn mean(&self) -> T {
        if self.samples.is_empty() {
            return T::ZERO;
        }

        self.sum.div_count(self.samples.len())
    }

    /// Cached sum of the retained samples
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Get number of retained samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if window is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check if window is full
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Maximum number of retained samples
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<T> {
        self.samples.back().copied()
    }

    /// Iterate over samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.samples.iter().copied()
    }

    /// Recompute the sum exactly, discarding accumulated rounding error
    fn resync(&mut self) {
        let mut exact = T::ZERO;
        for sample in &self.samples {
            exact += *sample;
        }

        self.sum = exact;
        self.evictions_since_resync = 0;
    }
}
