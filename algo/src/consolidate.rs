/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Consolidation of overlapping sets.

use std::collections::BTreeSet;

use crate::union_find::DisjointSet;

/// Merges sets that share at least `r` elements until no two sets do.
///
/// Each round computes the overlap relation among the current sets and
/// replaces each connected component of the relation with the union of its
/// sets; rounds are repeated until nothing is merged, so consolidating the
/// output again returns it unchanged.
///
/// Two sets overlap if their intersection has at least `r` elements. Equal
/// sets overlap too, even if they have fewer than `r` elements, so the output
/// never contains duplicates: for instance, two copies of `{A, B}`
/// consolidated with threshold 3 yield a single `{A, B}`.
///
/// The output lists the merged sets in the order of the first input set they
/// contain.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use kconn_algo::consolidate::consolidate;
///
/// let sets = [vec!['A', 'B'], vec!['C', 'D'], vec!['D', 'B']]
///     .map(BTreeSet::from_iter);
/// assert_eq!(consolidate(sets, 1), vec![BTreeSet::from(['A', 'B', 'C', 'D'])]);
/// ```
pub fn consolidate<T: Ord>(
    sets: impl IntoIterator<Item = BTreeSet<T>>,
    r: usize,
) -> Vec<BTreeSet<T>> {
    let mut sets = sets.into_iter().collect::<Vec<_>>();
    loop {
        let num_sets = sets.len();
        sets = merge_round(sets, r);
        if sets.len() == num_sets {
            return sets;
        }
    }
}

fn merge_round<T: Ord>(sets: Vec<BTreeSet<T>>, r: usize) -> Vec<BTreeSet<T>> {
    let mut forest = DisjointSet::new(sets.len());
    for i in 0..sets.len() {
        for j in i + 1..sets.len() {
            if overlap(&sets[i], &sets[j], r) {
                forest.union(i, j);
            }
        }
    }

    // Slot in the output of each representative
    let mut slot = vec![usize::MAX; sets.len()];
    let mut merged: Vec<BTreeSet<T>> = Vec::with_capacity(sets.len());
    for (i, set) in sets.into_iter().enumerate() {
        let root = forest.find(i);
        if slot[root] == usize::MAX {
            slot[root] = merged.len();
            merged.push(set);
        } else {
            merged[slot[root]].extend(set);
        }
    }
    merged
}

fn overlap<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>, r: usize) -> bool {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|x| large.contains(x)).take(r).count() >= r || a == b
}
