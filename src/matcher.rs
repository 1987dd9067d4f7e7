//! Greedy one-to-one bipartite matching over shape collections.
//!
//! Matching is first-fit-in-order: each element of the left collection
//! claims the first still-unconsumed right-hand candidate the predicate
//! accepts. Ties go to iteration order of the candidate collection; no
//! globally optimal assignment is attempted, so grading outcomes stay
//! stable and cheap on ambiguous inputs.

/// Outcome of partitioning two collections against a predicate.
///
/// The three lists are computed by independent passes (see [`partition`]);
/// they are not cross-validated against a single shared pool.
#[derive(Clone, Debug)]
pub struct Partition<T> {
    /// Elements of the left collection that claimed a match.
    pub matched: Vec<T>,
    /// Elements of the left collection no right-hand element accepts.
    pub unmatched_a: Vec<T>,
    /// Elements of the right collection no left-hand element accepts.
    pub unmatched_b: Vec<T>,
}

/// True iff the two collections are the same size and admit a greedy
/// one-to-one correspondence under `similar`.
///
/// Each right-hand element is consumed by at most one left-hand element;
/// the first left-hand element that finds no remaining candidate fails the
/// whole match.
pub fn match_all<T>(set_a: &[T], set_b: &[T], mut similar: impl FnMut(&T, &T) -> bool) -> bool {
    if set_a.len() != set_b.len() {
        return false;
    }

    let mut used = vec![false; set_b.len()];
    for a in set_a {
        let found = set_b
            .iter()
            .enumerate()
            .find_map(|(idx, b)| (!used[idx] && similar(a, b)).then_some(idx));
        match found {
            Some(idx) => used[idx] = true,
            None => return false,
        }
    }

    true
}

/// Partitions two collections into matched / unmatched-left /
/// unmatched-right, without requiring equal sizes.
///
/// Three passes run independently, each over fresh views of the inputs:
///
/// 1. `matched` walks `set_a` greedily, consuming each claimed element of
///    `set_b` so it cannot be claimed twice.
/// 2. `unmatched_a` keeps the elements of `set_a` that no element of
///    `set_b` accepts at all (non-consuming scan).
/// 3. `unmatched_b` keeps the elements of `set_b` that no element of
///    `set_a` accepts, with the predicate arguments flipped so the
///    right-hand element drives the comparison.
pub fn partition<T: Clone>(
    set_a: &[T],
    set_b: &[T],
    mut similar: impl FnMut(&T, &T) -> bool,
) -> Partition<T> {
    let mut used = vec![false; set_b.len()];
    let mut matched = Vec::new();
    for a in set_a {
        let found = set_b
            .iter()
            .enumerate()
            .find_map(|(idx, b)| (!used[idx] && similar(a, b)).then_some(idx));
        if let Some(idx) = found {
            used[idx] = true;
            matched.push(a.clone());
        }
    }

    let mut unmatched_a = Vec::new();
    for a in set_a {
        if !set_b.iter().any(|b| similar(a, b)) {
            unmatched_a.push(a.clone());
        }
    }

    let mut unmatched_b = Vec::new();
    for b in set_b {
        if !set_a.iter().any(|a| similar(b, a)) {
            unmatched_b.push(b.clone());
        }
    }

    Partition {
        matched,
        unmatched_a,
        unmatched_b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &i32, b: &i32) -> bool {
        (a - b).abs() <= 1
    }

    #[test]
    fn test_match_all_requires_equal_sizes() {
        assert!(!match_all(&[1, 2], &[1], close));
        assert!(!match_all(&[1], &[1, 2], close));

        let empty: [i32; 0] = [];
        assert!(match_all(&empty, &empty, close));
    }

    #[test]
    fn test_match_all_consumes_candidates() {
        // Both 1s would claim the single 1 on the right; the second must
        // fail once it is consumed.
        assert!(!match_all(&[1, 1], &[1, 10], close));
        assert!(match_all(&[1, 1], &[1, 2], close));
    }

    #[test]
    fn test_match_all_is_first_fit() {
        // 2 claims 1 (first in order), leaving 3 for the second element.
        assert!(match_all(&[2, 2], &[1, 3], close));
    }

    #[test]
    fn test_partition_identical_sets() {
        let p = partition(&[1, 5, 9], &[1, 5, 9], close);
        assert_eq!(p.matched, vec![1, 5, 9]);
        assert!(p.unmatched_a.is_empty());
        assert!(p.unmatched_b.is_empty());
    }

    #[test]
    fn test_partition_disjoint_sets() {
        let p = partition(&[1, 100], &[1, 50], close);
        assert_eq!(p.matched, vec![1]);
        assert_eq!(p.unmatched_a, vec![100]);
        assert_eq!(p.unmatched_b, vec![50]);
    }

    #[test]
    fn test_partition_does_not_require_equal_sizes() {
        let p = partition(&[1], &[1, 50], close);
        assert_eq!(p.matched, vec![1]);
        assert!(p.unmatched_a.is_empty());
        assert_eq!(p.unmatched_b, vec![50]);
    }

    #[test]
    fn test_unmatched_passes_do_not_consume() {
        // Both left-hand 1s are near the single right-hand 1, so neither
        // lands in unmatched_a even though only one can be matched.
        let p = partition(&[1, 1], &[1], close);
        assert_eq!(p.matched, vec![1]);
        assert!(p.unmatched_a.is_empty());
        assert!(p.unmatched_b.is_empty());
    }
}
