//! Aggregation primitives feeding the chart pipelines

use crate::RentalFrame;
use bikereport_common::RentalRecord;
use std::collections::BTreeMap;
use tracing::debug;

/// Arithmetic mean of values per distinct group key.
///
/// Groups with zero rows are simply absent from the output; no key is
/// ever emitted with a NaN mean.
pub fn group_mean<K, I>(pairs: I) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut sums: BTreeMap<K, (f64, u32)> = BTreeMap::new();
    for (key, value) in pairs {
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / f64::from(count)))
        .collect()
}

/// One row of a melted long-form table: (row id, variable label, value)
#[derive(Debug, Clone, PartialEq)]
pub struct LongRow {
    /// Index of the source row within the frame
    pub id: usize,
    /// Human-readable variable label
    pub label: &'static str,
    /// Extracted value
    pub value: f64,
}

/// A wide column selected for melting, with its display label
#[derive(Debug, Clone, Copy)]
pub struct ValueColumn {
    pub label: &'static str,
    pub extract: fn(&RentalRecord) -> u32,
}

/// Reshape wide columns into one row per (id, variable) pair.
///
/// Output order is value-column-major: all rows of the first column,
/// then all rows of the second, matching the melt convention of the
/// source report. An empty frame produces an empty sequence.
pub fn to_long_form(frame: &RentalFrame, columns: &[ValueColumn]) -> Vec<LongRow> {
    let mut rows = Vec::with_capacity(frame.len() * columns.len());
    for column in columns {
        for (id, record) in frame.records().iter().enumerate() {
            rows.push(LongRow {
                id,
                label: column.label,
                value: f64::from((column.extract)(record)),
            });
        }
    }

    debug!(rows = rows.len(), columns = columns.len(), "Melted frame to long form");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikereport_common::Season;

    fn record(casual: u32, registered: u32) -> RentalRecord {
        RentalRecord {
            year_index: 2012,
            month_index: 6,
            weekday_index: 2,
            weather_situation: 1,
            rental_count: casual + registered,
            casual_count: casual,
            registered_count: registered,
        }
    }

    #[test]
    fn test_group_mean_example() {
        let pairs = vec![
            (Season::Winter, 10.0),
            (Season::Winter, 20.0),
            (Season::Summer, 5.0),
        ];
        let means = group_mean(pairs);

        assert_eq!(means.len(), 2);
        assert_eq!(means[&Season::Winter], 15.0);
        assert_eq!(means[&Season::Summer], 5.0);
        // Groups without rows are omitted entirely
        assert!(!means.contains_key(&Season::Spring));
        assert!(!means.contains_key(&Season::Fall));
    }

    #[test]
    fn test_group_mean_empty_input() {
        let means: BTreeMap<Season, f64> = group_mean(Vec::new());
        assert!(means.is_empty());
    }

    #[test]
    fn test_long_form_order_convention() {
        let frame: RentalFrame = [record(1, 10), record(2, 20)].into_iter().collect();
        let columns = [
            ValueColumn { label: "Casual", extract: |r| r.casual_count },
            ValueColumn { label: "Registered", extract: |r| r.registered_count },
        ];

        let rows = to_long_form(&frame, &columns);

        assert_eq!(
            rows,
            vec![
                LongRow { id: 0, label: "Casual", value: 1.0 },
                LongRow { id: 1, label: "Casual", value: 2.0 },
                LongRow { id: 0, label: "Registered", value: 10.0 },
                LongRow { id: 1, label: "Registered", value: 20.0 },
            ]
        );
    }

    #[test]
    fn test_long_form_empty_frame() {
        let columns = [ValueColumn { label: "Casual", extract: |r| r.casual_count }];
        assert!(to_long_form(&RentalFrame::empty(), &columns).is_empty());
    }
}
