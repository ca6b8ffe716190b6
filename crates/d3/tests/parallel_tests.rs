//! Independent enumerators driven from several threads.

use permpack_d3::{
    Box3D, BoxItem, Config, Dimension, PermutationRotationIterator, PermutationRotationState,
};
use rayon::prelude::*;

fn items() -> Vec<BoxItem> {
    vec![
        BoxItem::new(Box3D::labeled("a", 1, 2, 3), 2),
        BoxItem::new(Box3D::labeled("b", 2, 2, 1), 3),
        BoxItem::single(Box3D::labeled("c", 1, 1, 1)),
        BoxItem::single(Box3D::labeled("huge", 9, 9, 9)),
    ]
}

fn bound() -> Dimension {
    Dimension::new(3, 3, 3)
}

/// Walks the permutation sequence once, recording every `stride`-th state.
fn chunk_starts(stride: usize) -> Vec<PermutationRotationState> {
    let mut iter = PermutationRotationIterator::new(&items(), bound(), &Config::default()).unwrap();
    let mut starts = vec![iter.state()];
    let mut index = 0;
    while iter.next_permutation() {
        index += 1;
        if index % stride == 0 {
            starts.push(iter.state());
        }
    }
    starts
}

#[test]
fn test_parallel_ranges_cover_search_space() {
    let reference =
        PermutationRotationIterator::new(&items(), bound(), &Config::default()).unwrap();
    let permutations = reference.count_permutations().unwrap();
    let rotations = reference.count_rotations().unwrap();

    let starts = chunk_starts(7);
    let ends: Vec<Option<Vec<usize>>> = starts
        .iter()
        .skip(1)
        .map(|s| Some(s.permutations().to_vec()))
        .chain(std::iter::once(None))
        .collect();

    let counts: Vec<(u64, u64)> = starts
        .par_iter()
        .zip(ends.par_iter())
        .map(|(start, end)| {
            let mut iter =
                PermutationRotationIterator::new(&items(), bound(), &Config::default()).unwrap();
            iter.set_state(start).unwrap();

            let mut orderings = 0;
            let mut arrangements = 0;
            loop {
                orderings += 1;
                loop {
                    arrangements += 1;
                    if !iter.next_rotation() {
                        break;
                    }
                }
                if !iter.next_permutation() {
                    break;
                }
                if end.as_deref() == Some(iter.permutations()) {
                    break;
                }
            }
            (orderings, arrangements)
        })
        .collect();

    let orderings: u64 = counts.iter().map(|c| c.0).sum();
    let arrangements: u64 = counts.iter().map(|c| c.1).sum();

    assert!(starts.len() > 1);
    assert_eq!(orderings, permutations);
    assert_eq!(arrangements, permutations * rotations);
}

#[test]
fn test_enumerators_are_send() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PermutationRotationIterator>();
    assert_send_sync::<PermutationRotationState>();
}
