/// Types whose records can be found by a free-text query.
pub trait Searchable {
    /// The fixed set of fields a query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive literal substring match against any searchable field.
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.matches_lowercase(&needle)
    }

    /// Same as [`Searchable::matches_filter`] for an already lowercased query.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Returns the records matching `filter`, in source order.
///
/// The query is lowercased once and otherwise taken as-is (no trimming, no
/// tokenizing). An empty query keeps every record.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let needle = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        ward: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.ward.as_str()]
        }
    }

    fn row(name: &str, ward: &str) -> Row {
        Row {
            name: name.into(),
            ward: ward.into(),
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("Alice Wonderland", "Cardiology A"),
            row("Bob The Builder", "Orthopedics B"),
            row("Charlie Brown", "Pediatrics"),
        ]
    }

    #[test]
    fn test_empty_query_keeps_all() {
        assert_eq!(filter_list(&sample(), ""), sample());
    }

    #[test]
    fn test_case_insensitive() {
        let found = filter_list(&sample(), "ALICE");
        assert_eq!(found, vec![row("Alice Wonderland", "Cardiology A")]);
    }

    #[test]
    fn test_substring_across_words() {
        let found = filter_list(&sample(), "he bu");
        assert_eq!(found, vec![row("Bob The Builder", "Orthopedics B")]);
    }

    #[test]
    fn test_matches_secondary_field() {
        let found = filter_list(&sample(), "pedi");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "Bob The Builder");
        assert_eq!(found[1].name, "Charlie Brown");
    }

    #[test]
    fn test_no_match() {
        assert!(filter_list(&sample(), "zzz-no-such-value").is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        assert!(filter_list(&sample(), " alice").is_empty());
        assert_eq!(filter_list(&sample(), " wonderland").len(), 1);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let rows = vec![row("A.B (test)", "x"), row("AxB", "y")];
        assert_eq!(filter_list(&rows, "a.b"), vec![row("A.B (test)", "x")]);
        assert_eq!(filter_list(&rows, "(test)").len(), 1);
        assert!(filter_list(&rows, ".*").is_empty());
    }

    #[test]
    fn test_source_untouched() {
        let rows = sample();
        let _ = filter_list(&rows, "alice");
        assert_eq!(rows, sample());
    }

    fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
        // tiny alphabet so generated rows collide and queries hit often
        prop::collection::vec(("[abAB ]{0,5}", "[ab.]{0,3}"), 0..10).prop_map(|pairs| {
            let mut rows: Vec<Row> = pairs.into_iter().map(|(n, w)| row(&n, &w)).collect();
            if let Some(first) = rows.first().cloned() {
                rows.push(first);
            }
            rows
        })
    }

    proptest! {
        #[test]
        fn prop_empty_query_is_identity(rows in rows_strategy()) {
            prop_assert_eq!(filter_list(&rows, ""), rows);
        }

        #[test]
        fn prop_result_is_ordered_subsequence(rows in rows_strategy(), q in "[abAB .]{0,3}") {
            let found = filter_list(&rows, &q);
            let mut cursor = rows.iter();
            for item in &found {
                prop_assert!(cursor.any(|r| r == item));
            }
        }

        #[test]
        fn prop_kept_iff_matching(rows in rows_strategy(), q in "[abAB .]{0,3}") {
            let found = filter_list(&rows, &q);
            let needle = q.to_lowercase();
            let mut matching = 0;
            for r in &rows {
                let hit = r
                    .search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(needle.as_str()));
                if hit {
                    matching += 1;
                }
                prop_assert_eq!(found.contains(r), hit);
            }
            prop_assert_eq!(found.len(), matching);
        }

        #[test]
        fn prop_idempotent(rows in rows_strategy(), q in ".{0,6}") {
            prop_assert_eq!(filter_list(&rows, &q), filter_list(&rows, &q));
        }
    }
}
