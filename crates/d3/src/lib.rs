//! # permpack 3D
//!
//! Permutation and rotation enumeration for 3D container loading.
//!
//! Given box types with instance counts and a container bound, the
//! [`PermutationRotationIterator`] produces every distinguishable ordering of
//! the instances crossed with every admissible orientation of each instance,
//! skipping orientations that are geometrically identical and box types that
//! can never fit.

pub mod boundary;
pub mod filter;
pub mod geometry;
pub mod iterator;
pub mod orientation;
pub mod state;

// Re-exports
pub use boundary::Dimension;
pub use filter::constrain;
pub use geometry::{Box3D, BoxItem, OrientationConstraint};
pub use iterator::PermutationRotationIterator;
pub use orientation::{orientations, rotation_matrix, TypeOrientations};
pub use permpack_core::{Config, Error, Result, RotationMode};
pub use state::PermutationRotationState;
