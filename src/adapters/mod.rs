//! Ready-made [`OrderedSequence`](crate::traits::OrderedSequence) adapters
//!
//! - Slices and vectors of the primitive integer and float types implement
//!   the trait directly, so plain numeric data needs no wrapper.
//! - [`ByKey`] adapts a slice of records through a numeric key projection.
//!
//! # Example
//!
//! ```
//! use percentile::adapters::ByKey;
//! use percentile::engine::percentile;
//!
//! struct Student {
//!     name: &'static str,
//!     score: f32,
//! }
//!
//! let mut class = [
//!     Student { name: "a", score: 65.1 },
//!     Student { name: "b", score: 35.2 },
//!     Student { name: "c", score: 75.3 },
//!     Student { name: "d", score: 95.6 },
//!     Student { name: "e", score: 82.0 },
//!     Student { name: "f", score: 87.5 },
//!     Student { name: "g", score: 50.4 },
//!     Student { name: "h", score: 30.5 },
//! ];
//!
//! let p60 = percentile(60, &mut ByKey::new(&mut class, |s| s.score as f64)).unwrap();
//! assert_eq!(format!("{:.2}", p60), "75.30");
//! assert_eq!(class[0].name, "h");
//! ```

mod keyed;
mod primitive;

pub use keyed::ByKey;
