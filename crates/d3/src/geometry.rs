//! 3D box types.

use crate::boundary::Dimension;
use nalgebra::Vector3;
use permpack_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-box orientation constraint.
///
/// Narrows the global [`RotationMode`](permpack_core::RotationMode); it never
/// widens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OrientationConstraint {
    /// Any orientation the rotation mode allows (up to 6 for boxes).
    #[default]
    Any,
    /// Only upright orientations (original and 90° around the height axis).
    Upright,
    /// Fixed orientation (no rotation allowed).
    Fixed,
}

/// An axis-aligned box with integer extents.
///
/// Rotations return a new box; the extents of a box never change in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Box3D {
    /// Optional identity label, carried through every orientation.
    id: Option<String>,

    /// Dimensions (width, depth, height).
    dimensions: Vector3<u32>,

    /// Orientation constraint.
    #[cfg_attr(feature = "serde", serde(default))]
    orientation: OrientationConstraint,
}

impl Box3D {
    /// Creates an unlabeled box.
    pub fn new(width: u32, depth: u32, height: u32) -> Self {
        Self {
            id: None,
            dimensions: Vector3::new(width, depth, height),
            orientation: OrientationConstraint::default(),
        }
    }

    /// Creates a labeled box.
    pub fn labeled(id: impl Into<String>, width: u32, depth: u32, height: u32) -> Self {
        Self::new(width, depth, height).with_id(id)
    }

    /// Sets the identity label.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the orientation constraint.
    pub fn with_orientation(mut self, constraint: OrientationConstraint) -> Self {
        self.orientation = constraint;
        self
    }

    /// Returns the identity label, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the dimensions (width, depth, height).
    pub fn dimensions(&self) -> &Vector3<u32> {
        &self.dimensions
    }

    /// Returns the width.
    pub fn width(&self) -> u32 {
        self.dimensions.x
    }

    /// Returns the depth.
    pub fn depth(&self) -> u32 {
        self.dimensions.y
    }

    /// Returns the height.
    pub fn height(&self) -> u32 {
        self.dimensions.z
    }

    /// Returns the orientation constraint.
    pub fn orientation_constraint(&self) -> OrientationConstraint {
        self.orientation
    }

    /// Returns the volume.
    pub fn volume(&self) -> u64 {
        self.dimensions.iter().map(|&e| u64::from(e)).product()
    }

    /// True if the footprint is square (width == depth).
    pub fn is_square_2d(&self) -> bool {
        self.dimensions.x == self.dimensions.y
    }

    /// True if all three extents are equal.
    pub fn is_square_3d(&self) -> bool {
        self.is_square_2d() && self.dimensions.y == self.dimensions.z
    }

    /// True if every extent is within the same extent of `bound`.
    ///
    /// No rotation is attempted.
    pub fn fits_inside(&self, bound: &Dimension) -> bool {
        self.dimensions
            .iter()
            .zip(bound.dimensions().iter())
            .all(|(e, b)| e <= b)
    }

    /// Rotates 90° around the height axis: (w, d, h) -> (d, w, h).
    pub fn rotate_2d(&self) -> Self {
        self.permuted(1, 0, 2)
    }

    /// Cycles the axes: (w, d, h) -> (d, h, w).
    ///
    /// Three applications return the original orientation.
    pub fn rotate_3d(&self) -> Self {
        self.permuted(1, 2, 0)
    }

    /// Tilts 90° around the width axis: (w, d, h) -> (w, h, d).
    pub fn tilt(&self) -> Self {
        self.permuted(0, 2, 1)
    }

    fn permuted(&self, x_idx: usize, y_idx: usize, z_idx: usize) -> Self {
        Self {
            id: self.id.clone(),
            dimensions: Vector3::new(
                self.dimensions[x_idx],
                self.dimensions[y_idx],
                self.dimensions[z_idx],
            ),
            orientation: self.orientation,
        }
    }

    /// Validates that all extents are positive.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.iter().any(|&e| e == 0) {
            return Err(Error::InvalidGeometry(format!(
                "All dimensions for '{}' must be positive",
                self.id().unwrap_or("<unnamed>")
            )));
        }
        Ok(())
    }
}

/// A box template with the number of identical physical instances.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxItem {
    template: Box3D,
    count: usize,
}

impl BoxItem {
    /// Creates an item with `count` instances.
    pub fn new(template: Box3D, count: usize) -> Self {
        Self { template, count }
    }

    /// Creates an item with a single instance.
    pub fn single(template: Box3D) -> Self {
        Self::new(template, 1)
    }

    /// Returns the box template.
    pub fn template(&self) -> &Box3D {
        &self.template
    }

    /// Returns the number of instances.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Validates the template and the count.
    pub fn validate(&self) -> Result<()> {
        self.template.validate()?;

        if self.count == 0 {
            return Err(Error::InvalidGeometry(format!(
                "Count for '{}' must be at least 1",
                self.template.id().unwrap_or("<unnamed>")
            )));
        }

        Ok(())
    }
}
