/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::BTreeSet;

use kconn_algo::consolidate::consolidate;

fn sets(input: &[&str]) -> Vec<BTreeSet<char>> {
    input.iter().map(|set| set.chars().collect()).collect()
}

fn sorted(mut sets: Vec<BTreeSet<char>>) -> Vec<BTreeSet<char>> {
    sets.sort();
    sets
}

#[test]
fn test_disjoint() {
    assert_eq!(consolidate(sets(&["AB", "CD"]), 1), sets(&["AB", "CD"]));
}

#[test]
fn test_chain() {
    assert_eq!(consolidate(sets(&["AB", "BC"]), 1), sets(&["ABC"]));
    assert_eq!(consolidate(sets(&["AB", "CD", "DB"]), 1), sets(&["ABCD"]));
}

#[test]
fn test_two_groups() {
    let result = consolidate(sets(&["HIK", "AB", "CD", "DB", "FGH"]), 1);
    assert_eq!(sorted(result), sets(&["ABCD", "FGHIK"]));
}

#[test]
fn test_bridge() {
    let first = consolidate(sets(&["AH", "HIK", "AB", "CD", "DB", "FGH"]), 1);
    assert_eq!(first, sets(&["ABCDFGHIK"]));
    let last = consolidate(sets(&["HIK", "AB", "CD", "DB", "FGH", "AH"]), 1);
    assert_eq!(last, sets(&["ABCDFGHIK"]));
}

#[test]
fn test_threshold() {
    // With threshold two, a single shared element is not enough
    let input = sets(&["ABC", "CDE", "DEF", "XY"]);
    assert_eq!(consolidate(input.clone(), 2), sets(&["ABC", "CDEF", "XY"]));
    assert_eq!(consolidate(input.clone(), 3), input);
    assert_eq!(consolidate(input, 1), sets(&["ABCDEF", "XY"]));
}

#[test]
fn test_idempotent() {
    let input = sets(&["ABC", "BCD", "ADE", "EFG", "FGH", "XYZ", "YZ"]);
    for r in 1..4 {
        let result = consolidate(input.clone(), r);
        assert_eq!(consolidate(result.clone(), r), result);
        // No two output sets overlap enough to be merged
        for (i, a) in result.iter().enumerate() {
            for b in &result[i + 1..] {
                assert!(a.intersection(b).count() < r);
                assert_ne!(a, b);
            }
        }
        // Every element survives
        let covered = result.iter().flatten().collect::<BTreeSet<_>>();
        assert_eq!(covered, input.iter().flatten().collect());
    }
}

#[test]
fn test_empty() {
    assert!(consolidate(Vec::<BTreeSet<char>>::new(), 1).is_empty());
    assert_eq!(consolidate(sets(&["", ""]), 1), sets(&[""]));
}

#[test]
fn test_equal_sets_below_threshold() {
    // Equal sets merge whatever the threshold
    assert_eq!(consolidate(sets(&["AB", "AB"]), 3), sets(&["AB"]));
    assert_eq!(
        consolidate(sets(&["AB", "CD", "AB", "BC"]), 3),
        sets(&["AB", "CD", "BC"])
    );
    // Distinct sets sharing fewer than r elements stay apart
    assert_eq!(consolidate(sets(&["AB", "ABC"]), 3), sets(&["AB", "ABC"]));
}
