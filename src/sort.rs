use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

use crate::comparator::{Comparator, Record};
use crate::field::Field;
use crate::key::Key;

/// Sort algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Selection sort, always O(n²) comparisons
    Selection,
    /// Recursive in-place quicksort with a middle pivot, O(n log n) on average
    Quick,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Selection => write!(f, "selection"),
            Algorithm::Quick => write!(f, "quick"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "selection" => Ok(Algorithm::Selection),
            "quick" => Ok(Algorithm::Quick),
            other => Err(anyhow!("Unknown sort algorithm: {other}, expected selection or quick")),
        }
    }
}

/// Work done by a sort
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    comparisons: usize,
    swaps: usize,
    depth: usize,
}

impl SortStats {
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Deepest level of quicksort recursion, 0 when nothing was partitioned.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn compare<T, C>(&mut self, comparator: &C, a: &T, b: &T) -> Ordering
        where C: Comparator<T> + ?Sized {
        self.comparisons += 1;
        comparator.compare(a, b)
    }

    fn swap<T>(&mut self, records: &mut [T], a: usize, b: usize) {
        records.swap(a, b);
        self.swaps += 1;
    }
}

/// Sort `records` in ascending order of `comparator` with the given [Algorithm].
///
/// # Examples
/// ```
/// use csv_document_sort::sort::{sort_by, Algorithm};
///
/// let mut titles = vec!["desk", "chair", "lamp"];
/// sort_by(Algorithm::Quick, &mut titles, &|a: &&str, b: &&str| a.cmp(b));
/// assert_eq!(titles, vec!["chair", "desk", "lamp"]);
/// ```
pub fn sort_by<T, C>(algorithm: Algorithm, records: &mut [T], comparator: &C) -> SortStats
    where T: Clone, C: Comparator<T> + ?Sized {
    let stats = match algorithm {
        Algorithm::Selection => selection_sort(records, comparator),
        Algorithm::Quick => quick_sort(records, comparator),
    };
    log::debug!(
        "{algorithm} sort of {} records, comparisons: {}, swaps: {}",
        records.len(),
        stats.comparisons(),
        stats.swaps(),
    );
    stats
}

/// Selection sort. For each position the minimum of the remaining records is swapped into place,
/// a record already in place is not swapped. Equal records may change their relative order.
pub fn selection_sort<T, C>(records: &mut [T], comparator: &C) -> SortStats
    where C: Comparator<T> + ?Sized {
    let mut stats = SortStats::default();
    let size = records.len();
    if size < 2 {
        return stats;
    }
    for pos in 0..size - 1 {
        let mut min = pos;
        for j in pos + 1..size {
            if stats.compare(comparator, &records[j], &records[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != pos {
            stats.swap(records, pos, min);
        }
    }
    stats
}

/// Quicksort over the whole slice.
///
/// The pivot is a copy of the middle record of the range. Two cursors move towards each other,
/// the left one past records less than the pivot and the right one past records greater than the
/// pivot, and the records they stop at are swapped. Records equal to the pivot stop both cursors,
/// so ranges of equal records are split in the middle rather than degrading. The two sub ranges
/// `[begin, j]` and `[i, end]` never overlap.
pub fn quick_sort<T, C>(records: &mut [T], comparator: &C) -> SortStats
    where T: Clone, C: Comparator<T> + ?Sized {
    let mut stats = SortStats::default();
    if records.len() > 1 {
        quick_sort_range(records, 0, records.len() as isize - 1, comparator, &mut stats, 1);
    }
    stats
}

fn quick_sort_range<T, C>(
    records: &mut [T],
    mut begin: isize,
    mut end: isize,
    comparator: &C,
    stats: &mut SortStats,
    depth: usize,
) where T: Clone, C: Comparator<T> + ?Sized {
    // recurse into the smaller side and keep looping on the larger one, depth stays within log2(n)
    while begin < end {
        stats.depth = stats.depth.max(depth);
        let (i, j) = partition(records, begin, end, comparator, stats);
        if j - begin < end - i {
            quick_sort_range(records, begin, j, comparator, stats, depth + 1);
            begin = i;
        } else {
            quick_sort_range(records, i, end, comparator, stats, depth + 1);
            end = j;
        }
    }
}

/// Partition `[begin, end]` around a copy of its middle record. Returns the cursors `(i, j)`,
/// the sub ranges left to sort are `[begin, j]` and `[i, end]`.
fn partition<T, C>(records: &mut [T], begin: isize, end: isize, comparator: &C, stats: &mut SortStats) -> (isize, isize)
    where T: Clone, C: Comparator<T> + ?Sized {
    let pivot = records[((begin + end) / 2) as usize].clone();
    let mut i = begin;
    let mut j = end;
    while i <= j {
        // a consistent comparator stops both cursors inside [begin, end] before the range checks do
        while i < end && stats.compare(comparator, &records[i as usize], &pivot) == Ordering::Less {
            i += 1;
        }
        while j > begin && stats.compare(comparator, &records[j as usize], &pivot) == Ordering::Greater {
            j -= 1;
        }
        if i <= j {
            if i != j {
                stats.swap(records, i as usize, j as usize);
            }
            i += 1;
            j -= 1;
        }
    }
    (i, j)
}

/// Check that `records` are in ascending order of `comparator`.
pub fn is_sorted<T, C>(records: &[T], comparator: &C) -> bool
    where C: Comparator<T> + ?Sized {
    records.windows(2).all(|pair| comparator.compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Copy the records whose `field` key equals the key of `value`, keeping their order.
///
/// Keys are compared after conversion, so for an Integer field `007` matches `7`. A `value` that
/// does not convert to the field's type matches nothing.
pub fn filter_eq<R>(records: &[R], field: &Field, value: &str) -> Vec<R>
    where R: Record + Clone {
    let target = match Key::new(value, field) {
        Ok(key) => key,
        Err(e) => {
            log::warn!("Filter value {:?} is not usable for field {}: {}", value, field.index(), e);
            return Vec::new();
        }
    };
    records.iter()
        .filter(|record| {
            record.field(field.index())
                .and_then(|v| Key::new(v, field).ok())
                .map(|key| key == target)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
