//! Error Types for the Aggregation Core
//!
//! ## Design Philosophy
//!
//! The aggregation core performs no I/O, so its error surface is deliberately
//! narrow. Errors follow the same rules as the rest of EdgePulse's embedded
//! code:
//!
//! 1. **No Heap Allocation**: error data is inline, `&'static str` at most.
//! 2. **Copy Semantics**: errors are `Copy` so they can be returned from hot
//!    paths without move complications.
//!
//! ## Error Categories
//!
//! ### Invalid Configuration
//! - `ZeroCapacity`: a window of capacity 0 has no defined mean, so it is
//!   rejected at construction. Nothing degrades silently.
//!
//! ### Invalid Input
//! - `InvalidSample`: a raw reading carried NaN or infinity. The driver rejects
//!   such readings before they reach a window.
//!
//! An empty window is **not** an error: its mean is `0.0`.
//!
//! ```rust
//! use edgepulse_core::{AggregationError, SlidingWindow};
//!
//! match SlidingWindow::<f32>::new(0) {
//!     Err(AggregationError::ZeroCapacity) => {}
//!     _ => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

use crate::reading::Channel;

/// Result type for aggregation operations
pub type AggregationResult<T> = Result<T, AggregationError>;

/// Aggregation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AggregationError {
    /// Window capacity must be at least one sample
    #[error("Window capacity must be at least 1")]
    ZeroCapacity,

    /// Sample is not a finite number
    #[error("Invalid {channel} sample: not a finite number")]
    InvalidSample {
        /// Channel that carried the bad value
        channel: Channel,
    },
}
