//! Column aggregation primitives: value counts, mode and extremes.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::TimeDelta;

// ── ValueCounts ───────────────────────────────────────────────────────────────

/// Occurrence count of every distinct value in a column.
///
/// Entries are ordered by descending count; equal counts keep the order in
/// which the values were first seen. The mode does not follow that order:
/// among tied values it is the smallest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCounts<K> {
    entries: Vec<(K, usize)>,
}

impl<K: Hash + Eq + Clone> ValueCounts<K> {
    /// Count the values yielded by `values`.
    pub fn tally(values: impl IntoIterator<Item = K>) -> Self {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut entries: Vec<(K, usize)> = Vec::new();

        for value in values {
            match index.get(&value) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(value.clone(), entries.len());
                    entries.push((value, 1));
                }
            }
        }

        // Stable sort keeps first-seen order among ties.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }
}

impl<K: Ord> ValueCounts<K> {
    /// The most frequent value and its count; the smallest value wins ties.
    pub fn mode(&self) -> Option<(&K, usize)> {
        self.tied_for_first()
            .min_by(|a, b| a.0.cmp(&b.0))
            .map(|(k, n)| (k, *n))
    }
}

impl<K> ValueCounts<K> {
    /// Like [`ValueCounts::mode`], with ties settled by the smallest `key`.
    pub fn mode_by_key<Q: Ord>(&self, key: impl Fn(&K) -> Q) -> Option<(&K, usize)> {
        self.tied_for_first()
            .min_by_key(|(k, _)| key(k))
            .map(|(k, n)| (k, *n))
    }

    fn tied_for_first(&self) -> impl Iterator<Item = &(K, usize)> {
        let top = self.max_count();
        self.entries.iter().take_while(move |(_, n)| *n == top)
    }

    /// Largest count, or 0 when there are no values.
    pub fn max_count(&self) -> usize {
        self.entries.first().map(|(_, n)| *n).unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Extremes ──────────────────────────────────────────────────────────────────

/// Smallest and largest of `values`, or `None` for an empty input.
pub fn min_max<T: Ord + Copy>(values: impl IntoIterator<Item = T>) -> Option<(T, T)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

// ── Durations ─────────────────────────────────────────────────────────────────

/// Sum and mean of a set of time spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationTotals {
    pub total: TimeDelta,
    pub mean: TimeDelta,
    pub count: usize,
}

impl DurationTotals {
    /// `None` when `spans` is empty (no mean exists).
    pub fn from_spans(spans: impl IntoIterator<Item = TimeDelta>) -> Option<Self> {
        let (total, count) = spans
            .into_iter()
            .fold((TimeDelta::zero(), 0usize), |(sum, n), d| (sum + d, n + 1));
        if count == 0 {
            return None;
        }

        // Microsecond resolution is finer than any source timestamp.
        let mean = match total.num_microseconds() {
            Some(us) => TimeDelta::microseconds(us / count as i64),
            None => TimeDelta::milliseconds(total.num_milliseconds() / count as i64),
        };

        Some(Self { total, mean, count })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
