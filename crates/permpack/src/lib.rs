//! # permpack
//!
//! Enumeration engine for 3D box packing searches.
//!
//! Produces every distinguishable ordering of a multiset of boxes crossed
//! with every admissible orientation of each box, in a deterministic and
//! resumable order, for a placement search to consume.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use permpack::d3::{Box3D, BoxItem, Dimension, PermutationRotationIterator};
//! use permpack::Config;
//!
//! let items = vec![BoxItem::new(Box3D::labeled("A", 1, 2, 3), 2)];
//! let mut iter = PermutationRotationIterator::new(&items, Dimension::new(3, 3, 3), &Config::default())?;
//!
//! loop {
//!     loop {
//!         let first = iter.get(0);
//!         // .. try to place the arrangement
//!         if !iter.next_rotation() {
//!             break;
//!         }
//!     }
//!     if !iter.next_permutation() {
//!         break;
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `d3` (default): 3D box enumeration
//! - `serde`: Serialization support

/// Errors, configuration and counters.
pub use permpack_core as core;

/// 3D box enumeration.
#[cfg(feature = "d3")]
pub use permpack_d3 as d3;

// Re-export commonly used types at root level
pub use permpack_core::{Config, Error, Result, RotationMode};
