use std::fmt;

use super::model::Record;

/// Three-way sort toggle on total stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the incoming order.
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::None, SortOrder::Ascending, SortOrder::Descending];
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortOrder::None => "None",
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        };
        f.write_str(label)
    }
}

/// Order records by total stats. The sort is stable, so equal totals keep
/// their incoming relative order in both directions.
pub fn sort(mut records: Vec<&Record>, order: SortOrder) -> Vec<&Record> {
    match order {
        SortOrder::None => {}
        SortOrder::Ascending => records.sort_by_key(|r| r.total_stats()),
        SortOrder::Descending => {
            records.sort_by(|a, b| b.total_stats().cmp(&a.total_stats()));
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::BaseStats;

    fn record(name: &str, hp: u32) -> Record {
        Record::new(name, "Normal", None, None, None, BaseStats::from_array([hp, 0, 0, 0, 0, 0]))
    }

    fn names<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_none_is_identity() {
        let data = vec![record("b", 2), record("a", 1), record("c", 3)];
        let out = sort(data.iter().collect(), SortOrder::None);
        assert_eq!(names(&out), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_directions() {
        let data = vec![record("b", 2), record("a", 1), record("c", 3)];
        let asc = sort(data.iter().collect(), SortOrder::Ascending);
        let desc = sort(data.iter().collect(), SortOrder::Descending);
        assert_eq!(names(&asc), vec!["a", "b", "c"]);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(names(&desc), names(&reversed));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let data = vec![
            record("first", 10),
            record("low", 5),
            record("second", 10),
            record("high", 20),
        ];
        let asc = sort(data.iter().collect(), SortOrder::Ascending);
        assert_eq!(names(&asc), vec!["low", "first", "second", "high"]);
        let desc = sort(data.iter().collect(), SortOrder::Descending);
        assert_eq!(names(&desc), vec!["high", "first", "second", "low"]);

        // Sorting again is a no-op.
        let again = sort(desc.clone(), SortOrder::Descending);
        assert_eq!(names(&again), names(&desc));
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = SortOrder::ALL.iter().map(|o| o.to_string()).collect();
        assert_eq!(labels, vec!["None", "Ascending", "Descending"]);
        assert_eq!(SortOrder::default(), SortOrder::None);
    }
}
