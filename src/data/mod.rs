//! Data layer: the static catalog and the query pipeline over it.
//!
//! Architecture:
//! ```text
//!   compiled-in seed
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ catalog   │  seed rows → Vec<Record>, category index (memoized)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  type membership + final-form predicate
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │   sort    │  none / ascending / descending by total stats
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ summary   │  count, mean, max, min, top-N
//!   └──────────┘
//! ```

pub mod catalog;
pub mod filter;
pub mod model;
pub mod sort;
pub mod summary;

use filter::FilterCriteria;
use model::Record;
use sort::SortOrder;

/// Filter then sort. Sorting only reorders what the filter let through.
pub fn run_query<'a>(
    records: &'a [Record],
    criteria: &FilterCriteria,
    order: SortOrder,
) -> Vec<&'a Record> {
    sort::sort(filter::filter(records, criteria), order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::Catalog;

    #[test]
    fn test_unfiltered_unsorted_query_is_identity() {
        let catalog = Catalog::shared();
        let view = run_query(&catalog.records, &FilterCriteria::default(), SortOrder::None);
        let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<&str> = catalog.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_sorting_does_not_change_membership() {
        let catalog = Catalog::shared();
        let criteria = FilterCriteria::with_types(["Dragon"]);
        let plain = run_query(&catalog.records, &criteria, SortOrder::None);
        let sorted = run_query(&catalog.records, &criteria, SortOrder::Descending);
        let mut plain_names: Vec<&str> = plain.iter().map(|r| r.name.as_str()).collect();
        let mut sorted_names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        plain_names.sort_unstable();
        sorted_names.sort_unstable();
        assert_eq!(plain_names, sorted_names);
    }
}
