use contracts::domain::a002_patient::{Patient, PatientRow};
use contracts::shared::roster::{patient_caption, RosterResponse};

/// Patient summary filtered by a free-text query
pub fn search(patients: &[Patient], query: &str) -> RosterResponse<PatientRow> {
    RosterResponse::build(patients, query, Patient::to_row, patient_caption)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed::{parse_seed, DEFAULT_SEED};

    #[test]
    fn test_search_seed_patients() {
        let data = parse_seed(DEFAULT_SEED).unwrap();

        let all = search(&data.patients, "");
        assert_eq!(all.matched, 7);
        assert_eq!(all.caption, None);
        assert_eq!(all.items[0].patient.id.as_str(), "PID001");

        let observation = search(&data.patients, "observation");
        let names: Vec<_> = observation.items.iter().map(|r| r.patient.name.as_str()).collect();
        assert_eq!(names, vec!["Bob The Builder", "Fiona Gallagher"]);

        let none = search(&data.patients, "zzz-no-such-value");
        assert!(none.items.is_empty());
        assert_eq!(none.total, 7);
        assert_eq!(
            none.caption.as_deref(),
            Some("No patients found matching your criteria.")
        );
    }
}
