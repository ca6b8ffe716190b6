//! Bound filtering of rotation matrices.

use crate::boundary::Dimension;
use crate::orientation::TypeOrientations;

/// Keeps only the orientations that fit within `bound`.
///
/// Every input entry yields exactly one output entry, so type indices stay
/// comparable between enumerators built from the same items. Types left
/// without orientations come back empty.
pub fn constrain(bound: &Dimension, unconstrained: &[TypeOrientations]) -> Vec<TypeOrientations> {
    unconstrained
        .iter()
        .map(|orientations| {
            let admissible = orientations
                .boxes()
                .iter()
                .filter(|b| b.fits_inside(bound))
                .cloned()
                .collect();
            TypeOrientations::new(orientations.count(), admissible)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Box3D, BoxItem};
    use crate::orientation::rotation_matrix;
    use permpack_core::RotationMode;

    #[test]
    fn test_constrained_rotations() {
        let items = vec![BoxItem::single(Box3D::new(1, 2, 3))];
        let matrix = rotation_matrix(&items, RotationMode::ThreeD);

        let constrained = constrain(&Dimension::new(1, 2, 3), &matrix);
        assert_eq!(constrained[0].len(), 1);

        let constrained = constrain(&Dimension::new(3, 3, 3), &matrix);
        assert_eq!(constrained[0].len(), 6);
    }

    #[test]
    fn test_excluded_type_kept_as_empty() {
        let items = vec![
            BoxItem::single(Box3D::new(1, 1, 1)),
            BoxItem::new(Box3D::new(5, 5, 5), 3),
            BoxItem::single(Box3D::new(1, 1, 2)),
        ];
        let matrix = rotation_matrix(&items, RotationMode::ThreeD);
        let constrained = constrain(&Dimension::new(2, 2, 2), &matrix);

        assert_eq!(constrained.len(), 3);
        assert!(constrained[1].is_empty());
        assert_eq!(constrained[1].count(), 3);
        assert_eq!(constrained[2].len(), 3);
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = vec![BoxItem::single(Box3D::new(1, 2, 3))];
        let matrix = rotation_matrix(&items, RotationMode::ThreeD);
        let constrained = constrain(&Dimension::new(3, 2, 3), &matrix);

        let kept: Vec<_> = constrained[0]
            .boxes()
            .iter()
            .map(|b| (b.width(), b.depth(), b.height()))
            .collect();
        assert_eq!(kept, vec![(1, 2, 3), (3, 1, 2), (3, 2, 1), (2, 1, 3)]);
    }
}
