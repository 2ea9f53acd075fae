use serde::{Deserialize, Serialize};

use super::search::{filter_list, Searchable};

/// A directory list narrowed by a search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse<R> {
    pub items: Vec<R>,
    /// Size of the unfiltered collection.
    pub total: usize,
    pub matched: usize,
    pub query: String,
    /// Table caption or empty-state message.
    pub caption: Option<String>,
}

impl<R> RosterResponse<R> {
    /// Filters `source` by `query` and maps every match to its row type.
    pub fn build<T, F, C>(source: &[T], query: &str, to_row: F, caption: C) -> Self
    where
        T: Searchable + Clone,
        F: Fn(&T) -> R,
        C: Fn(usize) -> Option<String>,
    {
        let matched = filter_list(source, query);
        Self {
            total: source.len(),
            matched: matched.len(),
            caption: caption(matched.len()),
            query: query.to_string(),
            items: matched.iter().map(to_row).collect(),
        }
    }
}

pub fn patient_caption(matched: usize) -> Option<String> {
    (matched == 0).then(|| "No patients found matching your criteria.".to_string())
}

pub fn staff_caption(matched: usize) -> Option<String> {
    if matched == 0 {
        Some("No staff members found matching your criteria.".to_string())
    } else {
        Some(format!("A list of {} staff member(s).", matched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Name(String);

    impl Searchable for Name {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0.as_str()]
        }
    }

    fn names() -> Vec<Name> {
        ["Linda Garcia", "David Wilson", "Michael Brown"]
            .iter()
            .map(|s| Name(s.to_string()))
            .collect()
    }

    #[test]
    fn test_build_counts_and_caption() {
        let resp = RosterResponse::build(&names(), "i", |n| n.0.clone(), staff_caption);
        assert_eq!(resp.total, 3);
        assert_eq!(resp.matched, 3);
        assert_eq!(resp.caption.as_deref(), Some("A list of 3 staff member(s)."));

        let resp = RosterResponse::build(&names(), "wil", |n| n.0.clone(), staff_caption);
        assert_eq!(resp.items, vec!["David Wilson".to_string()]);
    }

    #[test]
    fn test_empty_state_messages() {
        let resp = RosterResponse::build(&names(), "zzz", |n| n.0.clone(), patient_caption);
        assert!(resp.items.is_empty());
        assert_eq!(
            resp.caption.as_deref(),
            Some("No patients found matching your criteria.")
        );
        assert_eq!(patient_caption(2), None);
        assert_eq!(
            staff_caption(0).as_deref(),
            Some("No staff members found matching your criteria.")
        );
    }
}
