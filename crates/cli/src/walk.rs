//! Bounded walks over an enumerator.

use permpack::d3::PermutationRotationIterator;

/// Visits arrangements in enumeration order, at most `limit` of them.
///
/// With `rotations` set, every orientation combination of an ordering is
/// visited before the next ordering; otherwise only orderings are.
/// Returns true if arrangements remained when `limit` was reached.
pub fn walk_arrangements<F>(
    iter: &mut PermutationRotationIterator,
    limit: usize,
    rotations: bool,
    mut visit: F,
) -> bool
where
    F: FnMut(usize, &PermutationRotationIterator),
{
    let mut visited = 0;
    loop {
        if visited == limit {
            return true;
        }
        visit(visited, iter);
        visited += 1;

        if rotations && iter.next_rotation() {
            continue;
        }
        if !iter.next_permutation() {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permpack::d3::{Box3D, BoxItem, Dimension};
    use permpack::Config;

    fn three_distinct() -> PermutationRotationIterator {
        let items: Vec<BoxItem> = (0..3)
            .map(|k| BoxItem::single(Box3D::labeled(k.to_string(), 1, 1, 3)))
            .collect();
        PermutationRotationIterator::new(&items, Dimension::new(9, 1, 1), &Config::default())
            .unwrap()
    }

    #[test]
    fn test_exhausted_at_limit_is_not_truncated() {
        let mut iter = three_distinct();
        let mut seen = 0;
        let truncated = walk_arrangements(&mut iter, 6, false, |_, _| seen += 1);

        assert_eq!(seen, 6);
        assert!(!truncated);
    }

    #[test]
    fn test_truncated_below_total() {
        let mut iter = three_distinct();
        let mut seen = Vec::new();
        let truncated = walk_arrangements(&mut iter, 2, false, |i, it| {
            seen.push((i, it.permutations().to_vec()))
        });

        assert!(truncated);
        assert_eq!(seen, vec![(0, vec![0, 1, 2]), (1, vec![0, 2, 1])]);
    }

    #[test]
    fn test_walk_with_rotations() {
        let items = vec![BoxItem::new(Box3D::new(1, 2, 3), 2)];
        let mut iter =
            PermutationRotationIterator::new(&items, Dimension::new(3, 3, 3), &Config::default())
                .unwrap();
        let mut seen = 0;
        let truncated = walk_arrangements(&mut iter, 100, true, |_, _| seen += 1);

        assert!(!truncated);
        assert_eq!(seen, 36);
    }
}
