//! Enumeration configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which rotations the orientation builder may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RotationMode {
    /// Footprint rotation only (the box stays upright).
    #[cfg_attr(feature = "serde", serde(rename = "2d"))]
    TwoD,
    /// All axis-aligned orientations.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "3d"))]
    ThreeD,
}

impl RotationMode {
    /// Returns the upper bound on distinct orientations per box in this mode.
    pub fn max_orientations(&self) -> usize {
        match self {
            RotationMode::TwoD => 2,
            RotationMode::ThreeD => 6,
        }
    }
}

/// Common configuration for enumerators.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Rotation mode applied to every box type.
    pub rotation: RotationMode,
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rotation mode.
    pub fn with_rotation(mut self, rotation: RotationMode) -> Self {
        self.rotation = rotation;
        self
    }

    /// Shorthand for choosing between 3D and 2D-only rotation.
    pub fn with_rotate_3d(self, rotate_3d: bool) -> Self {
        self.with_rotation(if rotate_3d {
            RotationMode::ThreeD
        } else {
            RotationMode::TwoD
        })
    }

    /// Returns true if full 3D rotation is enabled.
    pub fn rotate_3d(&self) -> bool {
        self.rotation == RotationMode::ThreeD
    }
}
