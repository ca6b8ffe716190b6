//! Symmetry-aware orientation generation.
//!
//! Each box type is expanded into the minimal list of geometrically distinct
//! axis-aligned orientations, original orientation first. A box with a square
//! face has at most three distinct orientations, a cube exactly one.

use crate::geometry::{Box3D, BoxItem, OrientationConstraint};
use permpack_core::RotationMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientations of one box type, together with its multiplicity.
///
/// The position of a `TypeOrientations` in a rotation matrix is the type
/// index. Entries may be empty once constrained by a bound.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeOrientations {
    count: usize,
    boxes: Vec<Box3D>,
}

impl TypeOrientations {
    /// Creates an entry for `count` instances with the given orientations.
    pub fn new(count: usize, boxes: Vec<Box3D>) -> Self {
        Self { count, boxes }
    }

    /// Number of physical instances of this type.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The orientations, in generation order.
    pub fn boxes(&self) -> &[Box3D] {
        &self.boxes
    }

    /// Number of orientations.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True if no orientation is admissible.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// Returns the distinct orientations of `template` under `mode`.
///
/// The box's own [`OrientationConstraint`] can only restrict `mode`.
pub fn orientations(template: &Box3D, mode: RotationMode) -> Vec<Box3D> {
    match (template.orientation_constraint(), mode) {
        (OrientationConstraint::Fixed, _) => vec![template.clone()],
        (OrientationConstraint::Upright, _) | (_, RotationMode::TwoD) => {
            orientations_2d(template)
        }
        (OrientationConstraint::Any, RotationMode::ThreeD) => orientations_3d(template),
    }
}

fn orientations_2d(template: &Box3D) -> Vec<Box3D> {
    let mut result = vec![template.clone()];
    if !template.is_square_2d() {
        result.push(template.rotate_2d());
    }
    result
}

fn orientations_3d(template: &Box3D) -> Vec<Box3D> {
    let mut result = Vec::with_capacity(6);
    result.push(template.clone());

    if template.is_square_3d() {
        return result;
    }

    let first = template.rotate_3d();
    let second = first.rotate_3d();

    // With a square footprint among the three axis cycles, the tilted
    // cycles repeat them.
    let symmetric = template.is_square_2d() || first.is_square_2d() || second.is_square_2d();

    if symmetric {
        result.push(first);
        result.push(second);
        return result;
    }

    let third = second.tilt();
    let fourth = third.rotate_3d();
    let fifth = fourth.rotate_3d();
    result.extend([first, second, third, fourth, fifth]);
    result
}

/// Builds the unconstrained rotation matrix: one entry per item, in input order.
pub fn rotation_matrix(items: &[BoxItem], mode: RotationMode) -> Vec<TypeOrientations> {
    items
        .iter()
        .map(|item| TypeOrientations::new(item.count(), orientations(item.template(), mode)))
        .collect()
}
