//! Permutation and rotation enumeration.
//!
//! [`PermutationRotationIterator`] walks every distinguishable ordering of the
//! box instances (a multiset permutation over type indices) and, for each
//! ordering, every combination of admissible orientations. It is driven from
//! outside with two nested loops:
//!
//! ```rust,ignore
//! loop {
//!     loop {
//!         for slot in 0..iter.len() {
//!             let b = iter.get(slot);
//!             // .. place b
//!         }
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
//! The cursors can be saved with [`state`](PermutationRotationIterator::state)
//! and restored with [`set_state`](PermutationRotationIterator::set_state) to
//! resume a branch or hand the remaining range to another worker.

use crate::boundary::Dimension;
use crate::filter::constrain;
use crate::geometry::{Box3D, BoxItem};
use crate::orientation::{rotation_matrix, TypeOrientations};
use crate::state::PermutationRotationState;
use permpack_core::{checked_product, multinomial, Config, Error, Result};

/// Enumerates box orderings crossed with box orientations.
///
/// Not internally synchronized; every advancing operation takes `&mut self`.
#[derive(Debug, Clone)]
pub struct PermutationRotationIterator {
    /// Admissible orientations per type; never changes after construction.
    matrix: Vec<TypeOrientations>,
    dimension: Dimension,
    /// All-zero template for resetting rotation cursors.
    reset: Vec<usize>,
    /// Orientation index per slot.
    rotations: Vec<usize>,
    /// Type index per slot.
    permutations: Vec<usize>,
}

impl PermutationRotationIterator {
    /// Creates an enumerator over `items` constrained by `bound`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bound or any item fails validation.
    pub fn new(items: &[BoxItem], bound: Dimension, config: &Config) -> Result<Self> {
        bound.validate()?;
        for item in items {
            item.validate()?;
        }

        let unconstrained = rotation_matrix(items, config.rotation);
        Ok(Self::from_rotation_matrix(bound, &unconstrained))
    }

    /// Creates an enumerator from a prebuilt, unconstrained rotation matrix.
    ///
    /// Orientations that do not fit `bound` are dropped. Types left with none
    /// keep their index but get no slots.
    pub fn from_rotation_matrix(bound: Dimension, unconstrained: &[TypeOrientations]) -> Self {
        let matrix = constrain(&bound, unconstrained);

        let mut permutations = Vec::with_capacity(matrix.iter().map(|t| t.count()).sum());
        for (type_index, orientations) in matrix.iter().enumerate() {
            if orientations.is_empty() {
                log::warn!(
                    "Box type {} ({} instances) does not fit the bound in any orientation, excluding",
                    type_index,
                    orientations.count()
                );
                continue;
            }
            permutations.extend(std::iter::repeat(type_index).take(orientations.count()));
        }

        log::debug!(
            "Enumerator created: types={}, slots={}, bound={}x{}x{}",
            matrix.len(),
            permutations.len(),
            bound.width(),
            bound.depth(),
            bound.height()
        );

        let reset = vec![0; permutations.len()];
        let rotations = reset.clone();

        Self {
            matrix,
            dimension: bound,
            reset,
            rotations,
            permutations,
        }
    }

    /// Advances to the next orientation combination of the current ordering.
    ///
    /// Slot 0 is the least significant digit. Returns `false` once every
    /// combination has been visited; the cursors are then left at their
    /// maximum.
    pub fn next_rotation(&mut self) -> bool {
        let matrix = &self.matrix;
        let position = self
            .rotations
            .iter()
            .zip(&self.permutations)
            .position(|(&rotation, &type_index)| rotation + 1 < matrix[type_index].len());

        match position {
            Some(i) => {
                self.rotations[i] += 1;
                self.rotations[..i].copy_from_slice(&self.reset[..i]);
                true
            }
            None => false,
        }
    }

    /// Advances to the next distinguishable ordering.
    ///
    /// Rotation cursors are reset to zero whether or not a next ordering
    /// exists. Returns `false` when the ordering is already the last one
    /// (non-increasing).
    pub fn next_permutation(&mut self) -> bool {
        self.reset_rotations();

        let permutations = &mut self.permutations;
        if permutations.len() < 2 {
            return false;
        }

        // Longest non-increasing suffix
        let mut i = permutations.len() - 1;
        while i > 0 && permutations[i - 1] >= permutations[i] {
            i -= 1;
        }
        if i == 0 {
            return false;
        }

        // Rightmost element exceeding the pivot at i - 1
        let mut j = permutations.len() - 1;
        while permutations[j] <= permutations[i - 1] {
            j -= 1;
        }

        permutations.swap(i - 1, j);
        permutations[i..].reverse();
        true
    }

    fn reset_rotations(&mut self) {
        self.rotations.copy_from_slice(&self.reset);
    }

    fn reallocate_cursors(&mut self) {
        self.reset = vec![0; self.permutations.len()];
        self.rotations = self.reset.clone();
    }

    /// Discards the first `count` slots and restarts from the smallest ordering
    /// of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRemoval`] if `count` exceeds the slot count.
    pub fn remove_permutations(&mut self, count: usize) -> Result<()> {
        if count > self.permutations.len() {
            return Err(Error::InvalidRemoval(format!(
                "cannot remove {} of {} slots",
                count,
                self.permutations.len()
            )));
        }

        let mut remaining = self.permutations.split_off(count);
        remaining.sort_unstable();
        self.permutations = remaining;
        self.reallocate_cursors();

        log::debug!(
            "Removed {} leading slots, {} remaining",
            count,
            self.permutations.len()
        );
        Ok(())
    }

    /// Removes one slot per entry in `removed` and restarts from the smallest
    /// ordering of the rest.
    ///
    /// Each value removes its first unclaimed occurrence in the slot sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRemoval`] without changing anything if some
    /// value has no occurrence left to remove.
    pub fn remove_permutation_types(&mut self, removed: &[usize]) -> Result<()> {
        let mut outstanding = removed.to_vec();
        let mut remaining =
            Vec::with_capacity(self.permutations.len().saturating_sub(removed.len()));

        for &type_index in &self.permutations {
            match outstanding.iter().position(|&r| r == type_index) {
                Some(pos) => {
                    outstanding.swap_remove(pos);
                }
                None => remaining.push(type_index),
            }
        }

        if !outstanding.is_empty() {
            outstanding.sort_unstable();
            return Err(Error::InvalidRemoval(format!(
                "type indices {:?} not present in the slot sequence",
                outstanding
            )));
        }

        remaining.sort_unstable();
        self.permutations = remaining;
        self.reallocate_cursors();

        log::debug!(
            "Removed {} slots by type, {} remaining",
            removed.len(),
            self.permutations.len()
        );
        Ok(())
    }

    /// Number of admissible orientations of the box at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= self.len()`.
    pub fn orientations(&self, slot: usize) -> usize {
        self.matrix[self.permutations[slot]].len()
    }

    /// The box at `slot` in its current orientation.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= self.len()`.
    pub fn get(&self, slot: usize) -> &Box3D {
        &self.matrix[self.permutations[slot]].boxes()[self.rotations[slot]]
    }

    /// Iterates the current arrangement, slot by slot.
    pub fn boxes(&self) -> impl Iterator<Item = &Box3D> + '_ {
        self.permutations
            .iter()
            .zip(&self.rotations)
            .map(move |(&type_index, &rotation)| &self.matrix[type_index].boxes()[rotation])
    }

    /// True if every box from `from_slot` onwards is at most `height` tall in
    /// its current orientation.
    pub fn is_within_height(&self, from_slot: usize, height: u32) -> bool {
        self.boxes().skip(from_slot).all(|b| b.height() <= height)
    }

    /// Number of orientation combinations for the current ordering, or `None`
    /// if it exceeds the counter range.
    pub fn count_rotations(&self) -> Option<u64> {
        checked_product(self.permutations.iter().map(|&t| self.matrix[t].len()))
    }

    /// Number of distinguishable orderings of the current slots, or `None` if
    /// it exceeds the counter range.
    pub fn count_permutations(&self) -> Option<u64> {
        let mut multiplicities = vec![0usize; self.matrix.len()];
        for &type_index in &self.permutations {
            multiplicities[type_index] += 1;
        }
        multinomial(self.permutations.len(), &multiplicities)
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

    /// True if no slot is left to arrange.
    pub fn is_empty(&self) -> bool {
        self.permutations.is_empty()
    }

    /// Number of box types, including those excluded by the bound.
    pub fn box_item_len(&self) -> usize {
        self.matrix.len()
    }

    /// Admissible orientations of a type.
    pub fn type_orientations(&self, type_index: usize) -> Option<&TypeOrientations> {
        self.matrix.get(type_index)
    }

    /// The bound in effect.
    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Copies out the current cursors.
    pub fn state(&self) -> PermutationRotationState {
        PermutationRotationState::new(self.rotations.clone(), self.permutations.clone())
    }

    /// Restores cursors from a snapshot.
    ///
    /// The snapshot may come from another enumerator built from the same
    /// items and bound, and may be shorter than the current slot sequence
    /// (e.g. taken after a removal).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] without changing anything if the
    /// sequences differ in length, a type index is unknown or excluded, or a
    /// rotation cursor is out of range for its type.
    pub fn set_state(&mut self, state: &PermutationRotationState) -> Result<()> {
        if state.rotations().len() != state.permutations().len() {
            return Err(Error::InvalidState(format!(
                "{} rotation cursors for {} slots",
                state.rotations().len(),
                state.permutations().len()
            )));
        }

        for (slot, (&rotation, &type_index)) in state
            .rotations()
            .iter()
            .zip(state.permutations())
            .enumerate()
        {
            let available = match self.matrix.get(type_index) {
                Some(orientations) if !orientations.is_empty() => orientations.len(),
                _ => {
                    return Err(Error::InvalidState(format!(
                        "slot {} refers to unusable type {}",
                        slot, type_index
                    )));
                }
            };
            if rotation >= available {
                return Err(Error::InvalidState(format!(
                    "slot {} rotation {} out of range for type {} ({} orientations)",
                    slot, rotation, type_index, available
                )));
            }
        }

        self.rotations = state.rotations().to_vec();
        self.permutations = state.permutations().to_vec();
        if self.reset.len() != self.permutations.len() {
            self.reset = vec![0; self.permutations.len()];
        }

        log::trace!("Restored state with {} slots", self.permutations.len());
        Ok(())
    }
}
