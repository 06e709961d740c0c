//! Read-only aggregates over the raw collection.
//!
//! Every function here takes the raw collection, never the filtered view, so
//! dropdowns and counters describe the whole dataset regardless of what the
//! user is currently filtering on.

use crate::{Field, TimestampField};
use chrono::Datelike;
use std::collections::{BTreeMap, BTreeSet};

/// Distinct values of a field, sorted ascending. Items without a value are skipped.
///
/// ```
/// use satudata_resource::{Field, aggregate};
///
/// let opd = Field::text("opd", |s: &&str| Some(s.to_string()));
/// let raw = ["Dinas Sosial", "Bappeda", "Dinas Sosial"];
/// assert_eq!(aggregate::distinct(&raw, &opd), vec!["Bappeda", "Dinas Sosial"]);
/// ```
pub fn distinct<T>(raw: &[T], field: &Field<T>) -> Vec<String> {
    raw.iter()
        .filter_map(|item| field.value(item))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct numeric years of a field, newest first. Non-numeric values are skipped.
///
/// ```
/// use satudata_resource::{Field, aggregate};
///
/// let tahun = Field::display("tahun", |y: &i32| Some(*y));
/// assert_eq!(aggregate::distinct_years(&[2022, 2024, 2022, 2023], &tahun), vec![2024, 2023, 2022]);
/// ```
pub fn distinct_years<T>(raw: &[T], field: &Field<T>) -> Vec<i32> {
    let years: BTreeSet<i32> = raw
        .iter()
        .filter_map(|item| field.value(item))
        .filter_map(|v| v.trim().parse().ok())
        .collect();
    years.into_iter().rev().collect()
}

/// Number of items per value of a field.
pub fn count_by<T>(raw: &[T], field: &Field<T>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for value in raw.iter().filter_map(|item| field.value(item)) {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Number of items satisfying a predicate.
pub fn count_where<T, P>(raw: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    raw.iter().filter(|&item| predicate(item)).count()
}

/// Number of items whose field equals `value`.
pub fn count_value<T>(raw: &[T], field: &Field<T>, value: &str) -> usize {
    count_where(raw, |item| field.value(item).as_deref() == Some(value))
}

/// Number of items created in a calendar year.
pub fn count_in_year<T>(raw: &[T], timestamp: &TimestampField<T>, year: i32) -> usize {
    count_where(raw, |item| {
        timestamp.value(item).is_some_and(|ts| ts.year() == year)
    })
}

/// Items created per month of a calendar year; index 0 is January.
pub fn monthly_counts<T>(raw: &[T], timestamp: &TimestampField<T>, year: i32) -> [usize; 12] {
    let mut buckets = [0usize; 12];
    for ts in raw.iter().filter_map(|item| timestamp.value(item)) {
        if ts.year() == year {
            buckets[ts.month0() as usize] += 1;
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Entry {
        kode: &'static str,
        created_at: Option<&'static str>,
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry {
                kode: "1.01",
                created_at: Some("2024-01-10 09:00:00"),
            },
            Entry {
                kode: "1.02",
                created_at: Some("2024-03-02T10:00:00.000000Z"),
            },
            Entry {
                kode: "2.07",
                created_at: Some("2023-03-02"),
            },
            Entry {
                kode: "",
                created_at: None,
            },
            Entry {
                kode: "2.08",
                created_at: Some("not a date"),
            },
        ]
    }

    fn kategori() -> Field<Entry> {
        Field::text("kategori", |e: &Entry| crate::dotted_prefix(e.kode))
    }

    fn created() -> TimestampField<Entry> {
        TimestampField::new(|e: &Entry| e.created_at.map(str::to_string))
    }

    #[test]
    fn counts_per_derived_category() {
        let counts = count_by(&entries(), &kategori());
        assert_eq!(counts.get("1"), Some(&2));
        assert_eq!(counts.get("2"), Some(&2));
        assert_eq!(counts.len(), 2);
        assert_eq!(count_value(&entries(), &kategori(), "2"), 2);
    }

    #[test]
    fn time_windowed_counts_skip_unparseable_timestamps() {
        assert_eq!(count_in_year(&entries(), &created(), 2024), 2);
        assert_eq!(count_in_year(&entries(), &created(), 2023), 1);
        assert_eq!(count_in_year(&entries(), &created(), 2020), 0);
    }

    #[test]
    fn monthly_buckets_for_one_year() {
        let buckets = monthly_counts(&entries(), &created(), 2024);
        assert_eq!(buckets[0], 1);
        assert_eq!(buckets[2], 1);
        assert_eq!(buckets.iter().sum::<usize>(), 2);
    }
}
