//! Container bound.

use nalgebra::Vector3;
use permpack_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The extents a box orientation must fit within to be admissible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    /// Dimensions (width, depth, height).
    dimensions: Vector3<u32>,
}

impl Dimension {
    /// Creates a new bound with the given extents.
    pub fn new(width: u32, depth: u32, height: u32) -> Self {
        Self {
            dimensions: Vector3::new(width, depth, height),
        }
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

    /// Returns the volume.
    pub fn volume(&self) -> u64 {
        self.dimensions.iter().map(|&e| u64::from(e)).product()
    }

    /// Validates that all extents are positive.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.iter().any(|&e| e == 0) {
            return Err(Error::InvalidBoundary(
                "All dimensions must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl From<[u32; 3]> for Dimension {
    fn from([width, depth, height]: [u32; 3]) -> Self {
        Self::new(width, depth, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume() {
        let bound = Dimension::new(100, 80, 50);
        assert_eq!(bound.volume(), 400_000);
    }

    #[test]
    fn test_validation() {
        assert!(Dimension::new(100, 80, 50).validate().is_ok());
        assert!(Dimension::new(0, 80, 50).validate().is_err());
    }

    #[test]
    fn test_from_array() {
        let bound = Dimension::from([9, 1, 1]);
        assert_eq!((bound.width(), bound.depth(), bound.height()), (9, 1, 1));
    }
}
