//! # Percentile
//!
//! Exact percentiles and medians over any ordered, indexable sequence.
//!
//! The engine is generic over the [`OrderedSequence`](traits::OrderedSequence)
//! trait: anything that can compare, swap, and project two of its elements to
//! `f64` can be ranked, whether it is a slice of integers or a vector of
//! records. Slices and vectors of the primitive number types work out of the
//! box.
//!
//! ## Features
//!
//! - **Nearest rank with midpoint averaging**: when the rank lands exactly
//!   between two elements, their mean is returned
//! - **In place**: the input is stable-sorted without allocating; it stays
//!   sorted afterwards
//! - **Records**: implement the trait by hand, or use [`ByKey`](adapters::ByKey)
//!   to rank by a projected field
//! - **`no_std`**: only `alloc` is needed, and only for the helpers that
//!   return or copy vectors
//!
//! ## Quick Start
//!
//! ```rust
//! use percentile::prelude::*;
//!
//! let mut values = vec![1, 3, 4, 6, 2, 9, 4, 7, 10, 11];
//! assert_eq!(percentile(90, &mut values), Ok(10.5));
//!
//! // the input is now sorted
//! assert_eq!(values, [1, 2, 3, 4, 4, 6, 7, 9, 10, 11]);
//!
//! assert_eq!(percentile(0, &mut values), Err(PercentileError::InvalidRank { rank: 0 }));
//! ```
//!
//! ## Ranking Records
//!
//! ```rust
//! use percentile::prelude::*;
//!
//! struct Sample {
//!     host: &'static str,
//!     latency_ms: f64,
//! }
//!
//! let mut samples = vec![
//!     Sample { host: "a", latency_ms: 12.0 },
//!     Sample { host: "b", latency_ms: 48.5 },
//!     Sample { host: "c", latency_ms: 7.25 },
//! ];
//!
//! let p50 = median(&mut ByKey::new(&mut samples, |s| s.latency_ms)).unwrap();
//! assert_eq!(p50, 12.0);
//! assert_eq!(samples[0].host, "c");
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): `std::error::Error` for [`PercentileError`](traits::PercentileError)
//! - `serde`: serialize and validate [`PercentileRank`](rank::PercentileRank)

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod traits;

pub mod rank;

pub mod engine;

pub mod adapters;

pub mod prelude {
    pub use crate::adapters::ByKey;
    pub use crate::engine::{median, percentile, percentile_at, percentile_cloned, percentiles};
    pub use crate::rank::{PercentileRank, Position};
    pub use crate::traits::*;
}

pub use adapters::ByKey;
pub use engine::{median, percentile, percentile_at, percentile_cloned, percentiles};
pub use rank::PercentileRank;
pub use traits::{OrderedSequence, PercentileError};
