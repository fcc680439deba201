use std::collections::BTreeSet;

use super::model::Record;

// ---------------------------------------------------------------------------
// Filter criteria: which types are selected, plus the final-form toggle
// ---------------------------------------------------------------------------

/// Active filter selections.
///
/// An empty `types` set means "no type filter" (show all). A record passes
/// the type filter when its primary *or* secondary type is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub types: BTreeSet<String>,
    pub final_form_only: bool,
}

impl FilterCriteria {
    pub fn with_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterCriteria {
            types: types.into_iter().map(Into::into).collect(),
            final_form_only: false,
        }
    }

    pub fn final_forms(mut self) -> Self {
        self.final_form_only = true;
        self
    }

    /// Whether any predicate is in effect.
    pub fn is_active(&self) -> bool {
        !self.types.is_empty() || self.final_form_only
    }

    /// Add `ty` if absent, remove it if present.
    pub fn toggle_type(&mut self, ty: &str) {
        if !self.types.remove(ty) {
            self.types.insert(ty.to_string());
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        let type_ok = self.types.is_empty() || record.types().any(|t| self.types.contains(t));
        let form_ok = !self.final_form_only || record.is_final_form();
        type_ok && form_ok
    }
}

/// Return the records that pass `criteria`, in their original order.
pub fn filter<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

/// Every primary and secondary type seen in `records`.
pub fn distinct_categories(records: &[Record]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|r| r.types())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::BaseStats;

    fn record(name: &str, primary: &str, secondary: Option<&str>, next: Option<&str>) -> Record {
        Record::new(name, primary, secondary, None, next, BaseStats::default())
    }

    fn names<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn fixture() -> Vec<Record> {
        vec![
            record("Charmander", "Fire", None, Some("Charmeleon")),
            record("Charmeleon", "Fire", None, Some("Charizard")),
            record("Charizard", "Fire", Some("Flying"), None),
            record("Pidgey", "Normal", Some("Flying"), Some("Pidgeotto")),
            record("Squirtle", "Water", None, Some("Wartortle")),
            record("Lapras", "Water", Some("Ice"), None),
        ]
    }

    #[test]
    fn test_empty_criteria_pass_everything() {
        let data = fixture();
        let out = filter(&data, &FilterCriteria::default());
        assert_eq!(out.len(), data.len());
        assert!(!FilterCriteria::default().is_active());
    }

    #[test]
    fn test_type_match_on_either_slot() {
        let data = fixture();
        let out = filter(&data, &FilterCriteria::with_types(["Flying"]));
        assert_eq!(names(&out), vec!["Charizard", "Pidgey"]);

        let out = filter(&data, &FilterCriteria::with_types(["Fire"]));
        assert_eq!(names(&out), vec!["Charmander", "Charmeleon", "Charizard"]);
    }

    #[test]
    fn test_multiple_types_are_or_combined() {
        let data = fixture();
        let out = filter(&data, &FilterCriteria::with_types(["Ice", "Normal"]));
        assert_eq!(names(&out), vec!["Pidgey", "Lapras"]);
    }

    #[test]
    fn test_final_form_composes_with_types() {
        let data = fixture();
        let out = filter(&data, &FilterCriteria::default().final_forms());
        assert_eq!(names(&out), vec!["Charizard", "Lapras"]);

        let out = filter(&data, &FilterCriteria::with_types(["Water"]).final_forms());
        assert_eq!(names(&out), vec!["Lapras"]);
    }

    #[test]
    fn test_no_match_is_empty_not_unfiltered() {
        let data = fixture();
        let criteria = FilterCriteria::with_types(["Ghost"]);
        assert!(criteria.is_active());
        assert!(filter(&data, &criteria).is_empty());
    }

    #[test]
    fn test_toggle_type() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_type("Fire");
        assert!(criteria.types.contains("Fire"));
        criteria.toggle_type("Fire");
        assert!(criteria.types.is_empty());
    }

    #[test]
    fn test_distinct_categories_skips_absent() {
        let data = vec![
            record("A", "Water", None, None),
            record("B", "Water", Some("Flying"), None),
        ];
        let expected: BTreeSet<String> = ["Water", "Flying"].iter().map(|s| s.to_string()).collect();
        assert_eq!(distinct_categories(&data), expected);
        assert!(distinct_categories(&[]).is_empty());
    }
}
