//! Saved enumerator cursors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A snapshot of an enumerator's slot and rotation cursors.
///
/// The snapshot owns its sequences; restoring it into one enumerator never
/// affects another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PermutationRotationState {
    rotations: Vec<usize>,
    permutations: Vec<usize>,
}

impl PermutationRotationState {
    /// Creates a state from rotation cursors and slot type indices.
    pub fn new(rotations: Vec<usize>, permutations: Vec<usize>) -> Self {
        Self {
            rotations,
            permutations,
        }
    }

    /// Rotation cursor per slot.
    pub fn rotations(&self) -> &[usize] {
        &self.rotations
    }

    /// Type index per slot.
    pub fn permutations(&self) -> &[usize] {
        &self.permutations
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.permutations.len()
    }

    /// True if the state covers no slot.
    pub fn is_empty(&self) -> bool {
        self.permutations.is_empty()
    }
}
