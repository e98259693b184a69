//! Quadratic-cost node splitting.

use crate::mbr::Mbr;
use crate::r#type::IndexableNum;
use crate::rtree::node::Bounded;
use crate::util::cmp_num;

/// The two groups produced by splitting an overflowing node, with their tight bounds.
pub(crate) struct Split<N: IndexableNum, E> {
    pub(crate) left: Vec<E>,
    pub(crate) left_mbr: Mbr<N>,
    pub(crate) right: Vec<E>,
    pub(crate) right_mbr: Mbr<N>,
}

/// Distribute `entries` into two groups of at least `min_fill` entries each.
///
/// The two seeds are the pair that would waste the most area if grouped together. Every other
/// entry then goes to the group whose bounds grow least, picking at each step the entry with the
/// strongest preference. Once one group can only reach `min_fill` by taking everything that is
/// left, the remaining entries are force-assigned to it.
pub(crate) fn quadratic_split<N: IndexableNum, E: Bounded<N>>(
    mut entries: Vec<E>,
    min_fill: usize,
) -> Split<N, E> {
    debug_assert!(entries.len() >= 2);
    debug_assert!(entries.len() >= 2 * min_fill);

    let (i, j) = pick_seeds(&entries);
    // j > i, so removing j first keeps i valid
    let right_seed = entries.remove(j);
    let left_seed = entries.remove(i);

    let mut left_mbr = left_seed.bounds();
    let mut right_mbr = right_seed.bounds();
    let mut left = vec![left_seed];
    let mut right = vec![right_seed];

    while !entries.is_empty() {
        if left.len() + entries.len() == min_fill {
            for entry in entries.drain(..) {
                left_mbr = left_mbr.union(&entry.bounds());
                left.push(entry);
            }
            break;
        }
        if right.len() + entries.len() == min_fill {
            for entry in entries.drain(..) {
                right_mbr = right_mbr.union(&entry.bounds());
                right.push(entry);
            }
            break;
        }

        let next = pick_next(&entries, &left_mbr, &right_mbr);
        let entry = entries.remove(next);
        let bounds = entry.bounds();

        if prefers_left(&bounds, &left_mbr, left.len(), &right_mbr, right.len()) {
            left_mbr = left_mbr.union(&bounds);
            left.push(entry);
        } else {
            right_mbr = right_mbr.union(&bounds);
            right.push(entry);
        }
    }

    Split {
        left,
        left_mbr,
        right,
        right_mbr,
    }
}

/// The pair of entries whose combined rectangle wastes the most area.
fn pick_seeds<N: IndexableNum, E: Bounded<N>>(entries: &[E]) -> (usize, usize) {
    let mut best = (0, 1);
    let mut best_waste = N::neg_infinity();
    for (i, a) in entries.iter().enumerate() {
        let a = a.bounds();
        for (j, b) in entries.iter().enumerate().skip(i + 1) {
            let b = b.bounds();
            let waste = a.union(&b).area() - a.area() - b.area();
            if waste > best_waste {
                best_waste = waste;
                best = (i, j);
            }
        }
    }
    best
}

/// The entry with the greatest difference in enlargement between the two groups.
fn pick_next<N: IndexableNum, E: Bounded<N>>(
    entries: &[E],
    left_mbr: &Mbr<N>,
    right_mbr: &Mbr<N>,
) -> usize {
    let mut best = 0;
    let mut best_diff = N::neg_infinity();
    for (i, entry) in entries.iter().enumerate() {
        let bounds = entry.bounds();
        let diff = (left_mbr.enlargement(&bounds) - right_mbr.enlargement(&bounds)).abs();
        if diff > best_diff {
            best_diff = diff;
            best = i;
        }
    }
    best
}

/// Least enlargement, then smaller area, then fewer entries. Full ties go left.
fn prefers_left<N: IndexableNum>(
    bounds: &Mbr<N>,
    left_mbr: &Mbr<N>,
    left_len: usize,
    right_mbr: &Mbr<N>,
    right_len: usize,
) -> bool {
    cmp_num(left_mbr.enlargement(bounds), right_mbr.enlargement(bounds))
        .then_with(|| cmp_num(left_mbr.area(), right_mbr.area()))
        .then_with(|| left_len.cmp(&right_len))
        .is_le()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Point;

    fn points(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
        coords
            .iter()
            .enumerate()
            .map(|(i, (x, y))| Point::new(i as u64, *x, *y))
            .collect()
    }

    fn ids(group: &[Point<f64>]) -> Vec<u64> {
        let mut ids: Vec<u64> = group.iter().map(|p| *p.id()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn seeds_are_the_most_wasteful_pair() {
        let entries = points(&[(0., 0.), (1., 1.), (10., 10.), (0.5, 0.2), (9., 9.5)]);
        assert_eq!(pick_seeds(&entries), (0, 2));
    }

    #[test]
    fn separates_two_clusters() {
        let entries = points(&[(0., 0.), (10., 10.), (1., 1.), (11., 10.), (0., 1.)]);
        let split = quadratic_split(entries, 2);
        assert_eq!(ids(&split.left), vec![0, 2, 4]);
        assert_eq!(ids(&split.right), vec![1, 3]);
        assert_eq!(split.left_mbr, Mbr::new(0., 0., 1., 1.));
        assert_eq!(split.right_mbr, Mbr::new(10., 10., 11., 10.));
    }

    #[test]
    fn respects_minimum_fill() {
        // One far outlier pulls everything else into a single group unless fill is enforced
        let entries = points(&[
            (0., 0.),
            (0.1, 0.),
            (0.2, 0.),
            (0.3, 0.),
            (0.4, 0.),
            (100., 100.),
        ]);
        let split = quadratic_split(entries, 3);
        assert_eq!(split.left.len(), 3);
        assert_eq!(split.right.len(), 3);
    }

    #[test]
    fn identical_entries_split_evenly() {
        let entries = points(&[(1., 1.); 5]);
        let split = quadratic_split(entries, 2);
        assert!(split.left.len() >= 2);
        assert!(split.right.len() >= 2);
        assert_eq!(split.left.len() + split.right.len(), 5);
        assert_eq!(split.left_mbr, Mbr::from_point(1., 1.));
    }
}
