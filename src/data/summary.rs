use thiserror::Error;

use super::model::Record;

/// Raised when a metric has no defined value for the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("cannot summarise an empty selection")]
    EmptyInput,
}

pub fn count(records: &[&Record]) -> usize {
    records.len()
}

/// Arithmetic mean of total stats.
pub fn mean_score(records: &[&Record]) -> Result<f64, SummaryError> {
    if records.is_empty() {
        return Err(SummaryError::EmptyInput);
    }
    let sum: u64 = records.iter().map(|r| u64::from(r.total_stats())).sum();
    Ok(sum as f64 / records.len() as f64)
}

pub fn max_score(records: &[&Record]) -> Result<u32, SummaryError> {
    records
        .iter()
        .map(|r| r.total_stats())
        .max()
        .ok_or(SummaryError::EmptyInput)
}

pub fn min_score(records: &[&Record]) -> Result<u32, SummaryError> {
    records
        .iter()
        .map(|r| r.total_stats())
        .min()
        .ok_or(SummaryError::EmptyInput)
}

/// The `n` records with the highest total stats, highest first. Equal
/// totals keep their input order. Returns fewer than `n` when the input is
/// shorter.
pub fn top_n<'a>(records: &[&'a Record], n: usize) -> Vec<&'a Record> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.total_stats().cmp(&a.total_stats()));
    ranked.truncate(n);
    ranked
}

// ---------------------------------------------------------------------------
// Summary – the four headline metrics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub max: u32,
    pub min: u32,
}

impl Summary {
    pub fn from_records(records: &[&Record]) -> Result<Self, SummaryError> {
        Ok(Summary {
            count: count(records),
            mean: mean_score(records)?,
            max: max_score(records)?,
            min: min_score(records)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::BaseStats;

    fn starters() -> Vec<Record> {
        vec![
            Record::new(
                "Bulbasaur",
                "Grass",
                Some("Poison"),
                None,
                Some("Ivysaur"),
                BaseStats::from_array([45, 49, 49, 65, 65, 45]),
            ),
            Record::new(
                "Ivysaur",
                "Grass",
                Some("Poison"),
                Some("Bulbasaur"),
                Some("Venusaur"),
                BaseStats::from_array([60, 62, 63, 80, 80, 60]),
            ),
            Record::new(
                "Venusaur",
                "Grass",
                Some("Poison"),
                Some("Ivysaur"),
                None,
                BaseStats::from_array([80, 82, 83, 100, 100, 80]),
            ),
        ]
    }

    fn scored(name: &str, total: u32) -> Record {
        Record::new(name, "Normal", None, None, None, BaseStats::from_array([total, 0, 0, 0, 0, 0]))
    }

    #[test]
    fn test_metrics_over_starters() {
        let data = starters();
        let refs: Vec<&Record> = data.iter().collect();
        assert_eq!(count(&refs), 3);
        assert_eq!(mean_score(&refs), Ok(416.0));
        assert_eq!(max_score(&refs), Ok(525));
        assert_eq!(min_score(&refs), Ok(318));

        let summary = Summary::from_records(&refs).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.max, 525);
    }

    #[test]
    fn test_empty_input_fails_fast() {
        let empty: Vec<&Record> = Vec::new();
        assert_eq!(count(&empty), 0);
        assert_eq!(mean_score(&empty), Err(SummaryError::EmptyInput));
        assert_eq!(max_score(&empty), Err(SummaryError::EmptyInput));
        assert_eq!(min_score(&empty), Err(SummaryError::EmptyInput));
        assert_eq!(Summary::from_records(&empty), Err(SummaryError::EmptyInput));
        assert!(top_n(&empty, 5).is_empty());
    }

    #[test]
    fn test_top_n_orders_and_truncates() {
        let data = vec![scored("a", 300), scored("b", 500), scored("c", 400)];
        let refs: Vec<&Record> = data.iter().collect();
        let top: Vec<&str> = top_n(&refs, 2).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(top, vec!["b", "c"]);
        assert_eq!(top_n(&refs, 10).len(), 3);
        assert!(top_n(&refs, 0).is_empty());
    }

    #[test]
    fn test_top_n_ties_keep_input_order() {
        let data = vec![
            scored("x", 400),
            scored("y", 600),
            scored("z", 400),
            scored("w", 100),
        ];
        let refs: Vec<&Record> = data.iter().collect();
        let top: Vec<&str> = top_n(&refs, 3).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(top, vec!["y", "x", "z"]);
    }
}
